// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Mutate-then-wait helpers driven by work requests.

use stratus_sdk::waiter::compose;
use stratus_sdk::{CompositeResult, Response, Result, SdkError, WaitOptions, wait_until};
use tracing::instrument;

use super::client::{DeleteMonitoredResourceOptions, StackMonitoringClient};
use super::models::{
    CreateMonitoredResourceDetails, MonitoredResource, OperationStatus, WorkRequest,
};
use crate::options::{CreateOptions, RequestOptions};

/// Composite operations over a [`StackMonitoringClient`].
#[derive(Debug, Clone)]
pub struct StackMonitoringCompositeOperations {
    client: StackMonitoringClient,
}

impl StackMonitoringCompositeOperations {
    pub fn new(client: StackMonitoringClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &StackMonitoringClient {
        &self.client
    }

    /// Create a monitored resource and wait for its work request to reach
    /// one of `statuses`.
    #[instrument(skip_all)]
    pub fn create_monitored_resource_and_wait_for_work_request(
        &self,
        details: &CreateMonitoredResourceDetails,
        options: &CreateOptions,
        statuses: &[OperationStatus],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Response<WorkRequest>, Response<MonitoredResource>> {
        let created = self.client.create_monitored_resource(details, options);
        compose(created, |created| {
            self.wait_for_work_request(created, statuses, wait_options)
        })
    }

    /// Delete a monitored resource and wait for its work request to reach
    /// one of `statuses`.
    #[instrument(skip_all, fields(monitored_resource_id = monitored_resource_id))]
    pub fn delete_monitored_resource_and_wait_for_work_request(
        &self,
        monitored_resource_id: &str,
        options: &DeleteMonitoredResourceOptions,
        statuses: &[OperationStatus],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Response<WorkRequest>, Response<()>> {
        let deleted = self
            .client
            .delete_monitored_resource(monitored_resource_id, options);
        compose(deleted, |deleted| {
            self.wait_for_work_request(deleted, statuses, wait_options)
        })
    }

    fn wait_for_work_request<T>(
        &self,
        response: &Response<T>,
        statuses: &[OperationStatus],
        wait_options: &WaitOptions,
    ) -> Result<Response<WorkRequest>> {
        let work_request_id = response.work_request_id().ok_or_else(|| {
            SdkError::UnexpectedResponse("response carried no opc-work-request-id header".into())
        })?;

        wait_until(
            "work request status",
            wait_options,
            || {
                self.client
                    .get_work_request(work_request_id, &RequestOptions::default())
            },
            |current| statuses.contains(&current.data.status),
        )?
        .ok_or_else(|| {
            SdkError::UnexpectedResponse(format!(
                "work request {} disappeared while waiting",
                work_request_id
            ))
        })
    }
}
