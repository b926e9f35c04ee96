// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later

use stratus_sdk::waiter::compose;
use stratus_sdk::{CompositeResult, Response, SdkError, WaitOptions, wait_until};
use tracing::instrument;

use super::client::OptimizerClient;
use super::models::{LifecycleState, Recommendation, UpdateRecommendationDetails};
use crate::options::{ConditionalOptions, RequestOptions};

/// Composite operations over an [`OptimizerClient`].
#[derive(Debug, Clone)]
pub struct OptimizerCompositeOperations {
    client: OptimizerClient,
}

impl OptimizerCompositeOperations {
    pub fn new(client: OptimizerClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &OptimizerClient {
        &self.client
    }

    /// Update a recommendation and poll it until its lifecycle state is one
    /// of `states`.
    #[instrument(skip_all, fields(recommendation_id = recommendation_id))]
    pub fn update_recommendation_and_wait_for_state(
        &self,
        recommendation_id: &str,
        details: &UpdateRecommendationDetails,
        options: &ConditionalOptions,
        states: &[LifecycleState],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Response<Recommendation>, Response<Recommendation>> {
        let updated = self
            .client
            .update_recommendation(recommendation_id, details, options);
        compose(updated, |updated| {
            let id = updated.data.id.clone();
            wait_until(
                "recommendation lifecycle state",
                wait_options,
                || self.client.get_recommendation(&id, &RequestOptions::default()),
                |current| states.contains(&current.data.lifecycle_state),
            )?
            .ok_or_else(|| {
                SdkError::UnexpectedResponse(format!(
                    "recommendation {} disappeared while waiting",
                    id
                ))
            })
        })
    }
}
