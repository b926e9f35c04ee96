// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Optimizer client.

use stratus_sdk::validation::{require_known, require_non_blank};
use stratus_sdk::{
    ApiClient, ClientConfig, Method, OperationRequest, Page, Response, Result, list_all,
};
use tracing::{debug, instrument};

use super::SERVICE;
use super::models::{
    LifecycleState, Recommendation, RecommendationCollection, RecommendationSummary, Status,
    UpdateRecommendationDetails, WorkRequest,
};
use crate::options::{ConditionalOptions, PageOptions, RequestOptions};

/// Sort fields accepted by `list_recommendations`.
pub const RECOMMENDATION_SORT_FIELDS: &[&str] = &["NAME", "TIMECREATED"];

/// Options for [`OptimizerClient::list_recommendations`].
#[derive(Debug, Clone, Default)]
pub struct ListRecommendationsOptions {
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub name: Option<String>,
    pub lifecycle_state: Option<LifecycleState>,
    pub status: Option<Status>,
    pub page: PageOptions,
    pub request: RequestOptions,
}

impl ListRecommendationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
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

/// Client for the optimizer API.
#[derive(Debug, Clone)]
pub struct OptimizerClient {
    client: ApiClient,
}

impl OptimizerClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config, SERVICE)?))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    #[instrument(skip(self, options))]
    pub fn get_recommendation(
        &self,
        recommendation_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<Recommendation>> {
        const OP: &str = "get_recommendation";
        require_non_blank(OP, "recommendation_id", recommendation_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Get, "/recommendations/{recommendationId}")
                .path_param("recommendationId", recommendation_id),
        );
        self.client.call_api(request)?.into_response()
    }

    /// List recommendations in a compartment, optionally including every
    /// compartment below it.
    #[instrument(skip(self, options))]
    pub fn list_recommendations(
        &self,
        compartment_id: &str,
        compartment_id_in_subtree: bool,
        options: &ListRecommendationsOptions,
    ) -> Result<Response<RecommendationCollection>> {
        const OP: &str = "list_recommendations";
        require_non_blank(OP, "compartment_id", compartment_id)?;
        require_known(OP, "lifecycle_state", options.lifecycle_state.as_ref())?;
        require_known(OP, "status", options.status.as_ref())?;

        let request = OperationRequest::new(OP, Method::Get, "/recommendations")
            .query("compartmentId", Some(compartment_id))
            .query("compartmentIdInSubtree", Some(compartment_id_in_subtree))
            .query("categoryId", options.category_id.as_deref())
            .query("categoryName", options.category_name.as_deref())
            .query("name", options.name.as_deref())
            .query("lifecycleState", options.lifecycle_state.as_ref())
            .query("status", options.status.as_ref());
        let request = options
            .request
            .apply(options.page.apply(OP, RECOMMENDATION_SORT_FIELDS, request)?);
        self.client.call_api(request)?.into_response()
    }

    /// Every recommendation matching the filters, following page tokens.
    pub fn list_all_recommendations(
        &self,
        compartment_id: &str,
        compartment_id_in_subtree: bool,
        options: &ListRecommendationsOptions,
    ) -> Result<Vec<RecommendationSummary>> {
        list_all(|page| {
            let mut options = options.clone();
            options.page.page = page;
            let response =
                self.list_recommendations(compartment_id, compartment_id_in_subtree, &options)?;
            Ok(Page::from_response(response.map(|c| c.items)))
        })
    }

    /// Change the status of a recommendation (postpone, dismiss, implement).
    #[instrument(skip(self, details, options), fields(status = %details.status))]
    pub fn update_recommendation(
        &self,
        recommendation_id: &str,
        details: &UpdateRecommendationDetails,
        options: &ConditionalOptions,
    ) -> Result<Response<Recommendation>> {
        const OP: &str = "update_recommendation";
        require_non_blank(OP, "recommendation_id", recommendation_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Put, "/recommendations/{recommendationId}")
                .path_param("recommendationId", recommendation_id)
                .body(details),
        );
        let response = self.client.call_api(request)?.into_response::<Recommendation>()?;
        debug!(status = %response.data.status, "Recommendation updated");
        Ok(response)
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
