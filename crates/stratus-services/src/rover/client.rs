// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rover node client.

use stratus_sdk::validation::{require_known, require_non_blank};
use stratus_sdk::{
    ApiClient, ClientConfig, Method, OperationRequest, Page, Response, Result, list_all,
};
use tracing::{debug, instrument};

use super::SERVICE;
use super::models::{
    CreateRoverNodeDetails, LifecycleState, NodeType, RoverNode, RoverNodeCollection,
    RoverNodeSummary, UpdateRoverNodeDetails,
};
use crate::options::{ConditionalOptions, CreateOptions, PageOptions, RequestOptions};

/// Sort fields accepted by `list_rover_nodes`.
pub const ROVER_NODE_SORT_FIELDS: &[&str] = &["timeCreated", "displayName"];

/// Options for [`RoverNodeClient::list_rover_nodes`].
#[derive(Debug, Clone, Default)]
pub struct ListRoverNodesOptions {
    pub display_name: Option<String>,
    pub node_type: Option<NodeType>,
    pub lifecycle_state: Option<LifecycleState>,
    pub page: PageOptions,
    pub request: RequestOptions,
}

impl ListRoverNodesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = Some(node_type);
        self
    }

    pub fn with_lifecycle_state(mut self, state: LifecycleState) -> Self {
        self.lifecycle_state = Some(state);
        self
    }

    pub fn with_page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }
}

/// Client for rover node provisioning.
#[derive(Debug, Clone)]
pub struct RoverNodeClient {
    client: ApiClient,
}

impl RoverNodeClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config, SERVICE)?))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    #[instrument(skip(self, details, options), fields(display_name = %details.display_name))]
    pub fn create_rover_node(
        &self,
        details: &CreateRoverNodeDetails,
        options: &CreateOptions,
    ) -> Result<Response<RoverNode>> {
        const OP: &str = "create_rover_node";
        require_non_blank(OP, "compartment_id", &details.compartment_id)?;
        require_non_blank(OP, "display_name", &details.display_name)?;

        let request =
            options.apply(OperationRequest::new(OP, Method::Post, "/roverNodes").body(details));
        let response = self.client.call_api(request)?.into_response::<RoverNode>()?;
        debug!(rover_node_id = %response.data.id, "Rover node created");
        Ok(response)
    }

    #[instrument(skip(self, options))]
    pub fn get_rover_node(
        &self,
        rover_node_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<RoverNode>> {
        const OP: &str = "get_rover_node";
        require_non_blank(OP, "rover_node_id", rover_node_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Get, "/roverNodes/{roverNodeId}")
                .path_param("roverNodeId", rover_node_id),
        );
        self.client.call_api(request)?.into_response()
    }

    #[instrument(skip(self, details, options))]
    pub fn update_rover_node(
        &self,
        rover_node_id: &str,
        details: &UpdateRoverNodeDetails,
        options: &ConditionalOptions,
    ) -> Result<Response<RoverNode>> {
        const OP: &str = "update_rover_node";
        require_non_blank(OP, "rover_node_id", rover_node_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Put, "/roverNodes/{roverNodeId}")
                .path_param("roverNodeId", rover_node_id)
                .body(details),
        );
        self.client.call_api(request)?.into_response()
    }

    #[instrument(skip(self, options))]
    pub fn delete_rover_node(
        &self,
        rover_node_id: &str,
        options: &ConditionalOptions,
    ) -> Result<Response<()>> {
        const OP: &str = "delete_rover_node";
        require_non_blank(OP, "rover_node_id", rover_node_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Delete, "/roverNodes/{roverNodeId}")
                .path_param("roverNodeId", rover_node_id),
        );
        Ok(self.client.call_api(request)?.into_empty())
    }

    #[instrument(skip(self, options))]
    pub fn list_rover_nodes(
        &self,
        compartment_id: &str,
        options: &ListRoverNodesOptions,
    ) -> Result<Response<RoverNodeCollection>> {
        const OP: &str = "list_rover_nodes";
        require_non_blank(OP, "compartment_id", compartment_id)?;
        require_known(OP, "node_type", options.node_type.as_ref())?;
        require_known(OP, "lifecycle_state", options.lifecycle_state.as_ref())?;

        let request = OperationRequest::new(OP, Method::Get, "/roverNodes")
            .query("compartmentId", Some(compartment_id))
            .query("displayName", options.display_name.as_deref())
            .query("nodeType", options.node_type.as_ref())
            .query("lifecycleState", options.lifecycle_state.as_ref());
        let request = options
            .request
            .apply(options.page.apply(OP, ROVER_NODE_SORT_FIELDS, request)?);
        self.client.call_api(request)?.into_response()
    }

    /// Every rover node in a compartment, following page tokens.
    pub fn list_all_rover_nodes(
        &self,
        compartment_id: &str,
        options: &ListRoverNodesOptions,
    ) -> Result<Vec<RoverNodeSummary>> {
        list_all(|page| {
            let mut options = options.clone();
            options.page.page = page;
            let response = self.list_rover_nodes(compartment_id, &options)?;
            Ok(Page::from_response(response.map(|c| c.items)))
        })
    }
}
