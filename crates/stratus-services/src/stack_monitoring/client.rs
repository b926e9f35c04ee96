// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stack monitoring client.

use stratus_sdk::validation::require_non_blank;
use stratus_sdk::{ApiClient, ClientConfig, Method, OperationRequest, Response, Result};
use tracing::{debug, instrument};

use super::SERVICE;
use super::models::{CreateMonitoredResourceDetails, MonitoredResource, WorkRequest};
use crate::options::{ConditionalOptions, CreateOptions, RequestOptions};

/// Options for [`StackMonitoringClient::delete_monitored_resource`].
#[derive(Debug, Clone, Default)]
pub struct DeleteMonitoredResourceOptions {
    /// Also delete the resources this one contains.
    pub is_delete_members: Option<bool>,
    pub conditional: ConditionalOptions,
}

impl DeleteMonitoredResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delete_members(mut self, delete_members: bool) -> Self {
        self.is_delete_members = Some(delete_members);
        self
    }

    pub fn with_conditional(mut self, conditional: ConditionalOptions) -> Self {
        self.conditional = conditional;
        self
    }
}

/// Client for the stack monitoring API.
#[derive(Debug, Clone)]
pub struct StackMonitoringClient {
    client: ApiClient,
}

impl StackMonitoringClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config, SERVICE)?))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Register a resource for monitoring.
    ///
    /// The service answers with the new resource and an
    /// `opc-work-request-id` header tracking the asynchronous setup.
    #[instrument(skip(self, details, options), fields(resource_type = %details.resource_type))]
    pub fn create_monitored_resource(
        &self,
        details: &CreateMonitoredResourceDetails,
        options: &CreateOptions,
    ) -> Result<Response<MonitoredResource>> {
        const OP: &str = "create_monitored_resource";
        require_non_blank(OP, "compartment_id", &details.compartment_id)?;
        require_non_blank(OP, "name", &details.name)?;
        require_non_blank(OP, "type", &details.resource_type)?;

        let request = options
            .apply(OperationRequest::new(OP, Method::Post, "/monitoredResources").body(details));
        let response = self.client.call_api(request)?.into_response::<MonitoredResource>()?;
        debug!(
            monitored_resource_id = %response.data.id,
            work_request_id = response.work_request_id(),
            "Monitored resource created"
        );
        Ok(response)
    }

    #[instrument(skip(self, options))]
    pub fn get_monitored_resource(
        &self,
        monitored_resource_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<MonitoredResource>> {
        const OP: &str = "get_monitored_resource";
        require_non_blank(OP, "monitored_resource_id", monitored_resource_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Get, "/monitoredResources/{monitoredResourceId}")
                .path_param("monitoredResourceId", monitored_resource_id),
        );
        self.client.call_api(request)?.into_response()
    }

    #[instrument(skip(self, options))]
    pub fn delete_monitored_resource(
        &self,
        monitored_resource_id: &str,
        options: &DeleteMonitoredResourceOptions,
    ) -> Result<Response<()>> {
        const OP: &str = "delete_monitored_resource";
        require_non_blank(OP, "monitored_resource_id", monitored_resource_id)?;

        let request = options.conditional.apply(
            OperationRequest::new(OP, Method::Delete, "/monitoredResources/{monitoredResourceId}")
                .path_param("monitoredResourceId", monitored_resource_id)
                .query("isDeleteMembers", options.is_delete_members),
        );
        Ok(self.client.call_api(request)?.into_empty())
    }

    #[instrument(skip(self, options))]
    pub fn get_work_request(
        &self,
        work_request_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<WorkRequest>> {
        const OP: &str = "get_work_request";
        require_non_blank(OP, "work_request_id", work_request_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Get, "/workRequests/{workRequestId}")
                .path_param("workRequestId", work_request_id),
        );
        self.client.call_api(request)?.into_response()
    }
}
