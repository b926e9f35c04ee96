// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later

use stratus_sdk::waiter::compose;
use stratus_sdk::{CompositeResult, Response, SdkError, WaitOptions, wait_until};
use tracing::instrument;

use super::client::RoverNodeClient;
use super::models::{CreateRoverNodeDetails, LifecycleState, RoverNode};
use crate::options::{ConditionalOptions, CreateOptions, RequestOptions};

/// Composite operations over a [`RoverNodeClient`].
#[derive(Debug, Clone)]
pub struct RoverNodeCompositeOperations {
    client: RoverNodeClient,
}

impl RoverNodeCompositeOperations {
    pub fn new(client: RoverNodeClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RoverNodeClient {
        &self.client
    }

    #[instrument(skip_all)]
    pub fn create_rover_node_and_wait_for_state(
        &self,
        details: &CreateRoverNodeDetails,
        options: &CreateOptions,
        states: &[LifecycleState],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Response<RoverNode>, Response<RoverNode>> {
        let created = self.client.create_rover_node(details, options);
        compose(created, |created| {
            let id = created.data.id.clone();
            wait_until(
                "rover node lifecycle state",
                wait_options,
                || self.client.get_rover_node(&id, &RequestOptions::default()),
                |current| states.contains(&current.data.lifecycle_state),
            )?
            .ok_or_else(|| {
                SdkError::UnexpectedResponse(format!("rover node {} disappeared while waiting", id))
            })
        })
    }

    /// Delete a rover node and wait until it reaches one of `states`.
    /// A node that can no longer be found counts as deleted (`Ok(None)`).
    #[instrument(skip_all, fields(rover_node_id = rover_node_id))]
    pub fn delete_rover_node_and_wait_for_state(
        &self,
        rover_node_id: &str,
        options: &ConditionalOptions,
        states: &[LifecycleState],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Option<Response<RoverNode>>, Response<()>> {
        let wait_options = wait_options.clone().with_succeed_on_not_found(true);
        let deleted = self.client.delete_rover_node(rover_node_id, options);
        compose(deleted, |_| {
            wait_until(
                "rover node deletion",
                &wait_options,
                || {
                    self.client
                        .get_rover_node(rover_node_id, &RequestOptions::default())
                },
                |current| states.contains(&current.data.lifecycle_state),
            )
        })
    }
}
