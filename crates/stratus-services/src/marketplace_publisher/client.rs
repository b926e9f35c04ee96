// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Marketplace publisher client.

use stratus_sdk::validation::{require_allowed, require_known, require_non_blank};
use stratus_sdk::{
    ApiClient, ClientConfig, CollectionFormat, Method, OperationRequest, Page, Response, Result,
    WireEnum, list_all,
};
use tracing::{debug, instrument};

use super::SERVICE;
use super::models::{
    CreatePublicationDetails, ListingType, Publication, PublicationCollection,
    PublicationLifecycleState, PublicationPackage, PublicationPackageCollection,
    PublicationSummary, UpdatePublicationDetails, WorkRequest, WorkRequestStatus,
    WorkRequestSummaryCollection,
};
use crate::options::{ConditionalOptions, CreateOptions, PageOptions, RequestOptions};

/// Sort fields accepted by `list_publications`.
pub const PUBLICATION_SORT_FIELDS: &[&str] = &["TIMECREATED", "DISPLAYNAME"];

/// Options for [`MarketplacePublisherClient::list_publications`].
#[derive(Debug, Clone, Default)]
pub struct ListPublicationsOptions {
    pub name: Option<Vec<String>>,
    pub publication_id: Option<String>,
    pub lifecycle_state: Option<PublicationLifecycleState>,
    pub page: PageOptions,
    pub request: RequestOptions,
}

impl ListPublicationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.name = Some(names);
        self
    }

    pub fn with_publication_id(mut self, id: impl Into<String>) -> Self {
        self.publication_id = Some(id.into());
        self
    }

    pub fn with_lifecycle_state(mut self, state: PublicationLifecycleState) -> Self {
        self.lifecycle_state = Some(state);
        self
    }

    pub fn with_page(mut self, page: PageOptions) -> Self {
        self.page = page;
        self
    }
}

/// Options for [`MarketplacePublisherClient::list_publication_packages`].
#[derive(Debug, Clone, Default)]
pub struct ListPublicationPackagesOptions {
    pub package_version: Option<String>,
    pub package_type: Option<String>,
    pub page: PageOptions,
    pub request: RequestOptions,
}

/// Options for [`MarketplacePublisherClient::list_work_requests`].
#[derive(Debug, Clone, Default)]
pub struct ListWorkRequestsOptions {
    pub compartment_id: Option<String>,
    pub work_request_id: Option<String>,
    pub status: Option<WorkRequestStatus>,
    pub resource_id: Option<String>,
    pub page: PageOptions,
    pub request: RequestOptions,
}

/// Client for the marketplace publisher API.
#[derive(Debug, Clone)]
pub struct MarketplacePublisherClient {
    client: ApiClient,
}

impl MarketplacePublisherClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a client with the default transport.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config, SERVICE)?))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Create a publication.
    #[instrument(skip(self, details, options), fields(name = %details.name))]
    pub fn create_publication(
        &self,
        details: &CreatePublicationDetails,
        options: &CreateOptions,
    ) -> Result<Response<Publication>> {
        const OP: &str = "create_publication";
        require_non_blank(OP, "compartment_id", &details.compartment_id)?;

        let request =
            options.apply(OperationRequest::new(OP, Method::Post, "/publications").body(details));
        let response = self.client.call_api(request)?.into_response::<Publication>()?;
        debug!(publication_id = %response.data.id, "Publication created");
        Ok(response)
    }

    /// Get a publication.
    #[instrument(skip(self, options))]
    pub fn get_publication(
        &self,
        publication_id: &str,
        options: &RequestOptions,
    ) -> Result<Response<Publication>> {
        const OP: &str = "get_publication";
        require_non_blank(OP, "publication_id", publication_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Get, "/publications/{publicationId}")
                .path_param("publicationId", publication_id),
        );
        self.client.call_api(request)?.into_response()
    }

    /// Update a publication.
    #[instrument(skip(self, details, options))]
    pub fn update_publication(
        &self,
        publication_id: &str,
        details: &UpdatePublicationDetails,
        options: &ConditionalOptions,
    ) -> Result<Response<Publication>> {
        const OP: &str = "update_publication";
        require_non_blank(OP, "publication_id", publication_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Put, "/publications/{publicationId}")
                .path_param("publicationId", publication_id)
                .body(details),
        );
        self.client.call_api(request)?.into_response()
    }

    /// Delete a publication.
    #[instrument(skip(self, options))]
    pub fn delete_publication(
        &self,
        publication_id: &str,
        options: &ConditionalOptions,
    ) -> Result<Response<()>> {
        const OP: &str = "delete_publication";
        require_non_blank(OP, "publication_id", publication_id)?;

        let request = options.apply(
            OperationRequest::new(OP, Method::Delete, "/publications/{publicationId}")
                .path_param("publicationId", publication_id),
        );
        Ok(self.client.call_api(request)?.into_empty())
    }

    /// List publications in a compartment.
    #[instrument(skip(self, options))]
    pub fn list_publications(
        &self,
        compartment_id: &str,
        listing_type: &ListingType,
        options: &ListPublicationsOptions,
    ) -> Result<Response<PublicationCollection>> {
        const OP: &str = "list_publications";
        require_non_blank(OP, "compartment_id", compartment_id)?;
        require_allowed(OP, "listing_type", listing_type.as_wire(), ListingType::VALUES)?;
        require_known(OP, "lifecycle_state", options.lifecycle_state.as_ref())?;

        let request = OperationRequest::new(OP, Method::Get, "/publications")
            .query("compartmentId", Some(compartment_id))
            .query("listingType", Some(listing_type))
            .query_list("name", options.name.as_deref(), CollectionFormat::Multi)
            .query("publicationId", options.publication_id.as_deref())
            .query("lifecycleState", options.lifecycle_state.as_ref());
        let request = options
            .request
            .apply(options.page.apply(OP, PUBLICATION_SORT_FIELDS, request)?);
        self.client.call_api(request)?.into_response()
    }

    /// Every publication in a compartment, following page tokens.
    pub fn list_all_publications(
        &self,
        compartment_id: &str,
        listing_type: &ListingType,
        options: &ListPublicationsOptions,
    ) -> Result<Vec<PublicationSummary>> {
        list_all(|page| {
            let mut options = options.clone();
            options.page.page = page;
            let response = self.list_publications(compartment_id, listing_type, &options)?;
            Ok(Page::from_response(response.map(|c| c.items)))
        })
    }

    /// Get one package of a publication, resolved to its concrete type.
    #[instrument(skip(self, options))]
    pub fn get_publication_package(
        &self,
        publication_id: &str,
        package_version: &str,
        options: &RequestOptions,
    ) -> Result<Response<PublicationPackage>> {
        const OP: &str = "get_publication_package";
        require_non_blank(OP, "publication_id", publication_id)?;
        require_non_blank(OP, "package_version", package_version)?;

        let request = options.apply(
            OperationRequest::new(
                OP,
                Method::Get,
                "/publications/{publicationId}/packages/{packageVersion}",
            )
            .path_param("publicationId", publication_id)
            .path_param("packageVersion", package_version),
        );
        self.client.call_api(request)?.into_response()
    }

    /// List the packages of a publication.
    #[instrument(skip(self, options))]
    pub fn list_publication_packages(
        &self,
        publication_id: &str,
        options: &ListPublicationPackagesOptions,
    ) -> Result<Response<PublicationPackageCollection>> {
        const OP: &str = "list_publication_packages";
        require_non_blank(OP, "publication_id", publication_id)?;

        let request = OperationRequest::new(OP, Method::Get, "/publications/{publicationId}/packages")
            .path_param("publicationId", publication_id)
            .query("packageVersion", options.package_version.as_deref())
            .query("packageType", options.package_type.as_deref());
        let request = options
            .request
            .apply(options.page.apply(OP, &["TIMECREATED"], request)?);
        self.client.call_api(request)?.into_response()
    }

    /// Get a work request.
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

    /// List work requests.
    #[instrument(skip(self, options))]
    pub fn list_work_requests(
        &self,
        options: &ListWorkRequestsOptions,
    ) -> Result<Response<WorkRequestSummaryCollection>> {
        const OP: &str = "list_work_requests";
        require_known(OP, "status", options.status.as_ref())?;

        let request = OperationRequest::new(OP, Method::Get, "/workRequests")
            .query("compartmentId", options.compartment_id.as_deref())
            .query("workRequestId", options.work_request_id.as_deref())
            .query("status", options.status.as_ref())
            .query("resourceId", options.resource_id.as_deref());
        let request = options
            .request
            .apply(options.page.apply(OP, &["timeAccepted"], request)?);
        self.client.call_api(request)?.into_response()
    }
}
