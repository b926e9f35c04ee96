// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Mutate-then-wait helpers for the marketplace publisher API.

use stratus_sdk::waiter::compose;
use stratus_sdk::{CompositeResult, Response, SdkError, WaitOptions, wait_until};
use tracing::instrument;

use super::client::MarketplacePublisherClient;
use super::models::{CreatePublicationDetails, Publication, PublicationLifecycleState};
use crate::options::{ConditionalOptions, CreateOptions, RequestOptions};

/// Composite operations over a [`MarketplacePublisherClient`].
#[derive(Debug, Clone)]
pub struct MarketplacePublisherCompositeOperations {
    client: MarketplacePublisherClient,
}

impl MarketplacePublisherCompositeOperations {
    pub fn new(client: MarketplacePublisherClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &MarketplacePublisherClient {
        &self.client
    }

    /// Create a publication and poll it until it reaches one of `states`.
    #[instrument(skip_all)]
    pub fn create_publication_and_wait_for_state(
        &self,
        details: &CreatePublicationDetails,
        options: &CreateOptions,
        states: &[PublicationLifecycleState],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Response<Publication>, Response<Publication>> {
        let created = self.client.create_publication(details, options);
        compose(created, |created| {
            let id = created.data.id.clone();
            wait_until(
                "publication lifecycle state",
                wait_options,
                || self.client.get_publication(&id, &RequestOptions::default()),
                |current| states.contains(&current.data.lifecycle_state),
            )?
            .ok_or_else(|| {
                SdkError::UnexpectedResponse(format!("publication {} disappeared while waiting", id))
            })
        })
    }

    /// Delete a publication and poll until it reaches one of `states` or is
    /// gone. Returns `None` when the publication could no longer be found.
    #[instrument(skip_all, fields(publication_id = publication_id))]
    pub fn delete_publication_and_wait_for_state(
        &self,
        publication_id: &str,
        options: &ConditionalOptions,
        states: &[PublicationLifecycleState],
        wait_options: &WaitOptions,
    ) -> CompositeResult<Option<Response<Publication>>, Response<()>> {
        let wait_options = wait_options.clone().with_succeed_on_not_found(true);
        let deleted = self.client.delete_publication(publication_id, options);
        compose(deleted, |_| {
            wait_until(
                "publication deletion",
                &wait_options,
                || {
                    self.client
                        .get_publication(publication_id, &RequestOptions::default())
                },
                |current| states.contains(&current.data.lifecycle_state),
            )
        })
    }
}
