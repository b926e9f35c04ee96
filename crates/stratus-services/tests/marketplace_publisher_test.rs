// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Marketplace publisher operations against a scripted transport.

mod common;

use common::{api_client, fast_wait, not_found, publication, push, push_with_header, url};
use serde_json::{Value, json};
use stratus_http::Method;
use stratus_http::mock::MockTransport;
use stratus_sdk::{CompositeError, SdkError, SortOrder};
use stratus_services::marketplace_publisher::models::{
    BaseCreatePublicationPackage, CreatePublicationDetails, CreatePublicationPackage, ListingType,
    PackageType, PublicationLifecycleState, SupportContact, UpdatePublicationDetails,
    WorkRequestStatus,
};
use stratus_services::marketplace_publisher::{
    ListPublicationsOptions, ListWorkRequestsOptions, MarketplacePublisherClient, MarketplacePublisherCompositeOperations,
    SERVICE,
};
use stratus_services::{ConditionalOptions, CreateOptions, PageOptions, RequestOptions};

fn client(transport: &MockTransport) -> MarketplacePublisherClient {
    MarketplacePublisherClient::new(api_client(SERVICE, transport))
}

fn create_details() -> CreatePublicationDetails {
    CreatePublicationDetails {
        compartment_id: "ocid1.compartment..c1".to_string(),
        listing_type: ListingType::Oci,
        name: "Acme Analytics".to_string(),
        short_description: "Dashboards for Acme".to_string(),
        long_description: None,
        support_contacts: vec![SupportContact {
            name: Some("Support".to_string()),
            email: Some("support@acme.test".to_string()),
            phone: None,
            subject: None,
        }],
        package_details: CreatePublicationPackage::Base(BaseCreatePublicationPackage {
            package_type: PackageType::Orchestration,
            package_version: "1.0.0".to_string(),
            operating_system: None,
            eula: None,
        }),
        is_agreement_acknowledged: true,
        freeform_tags: None,
    }
}

fn summary(id: &str) -> Value {
    publication(id, "ACTIVE")
}

#[test]
fn test_create_publication_sends_body_and_retry_token() {
    let transport = MockTransport::new();
    push(&transport, 200, &publication("ocid1.publication..p1", "CREATING"));

    let response = client(&transport)
        .create_publication(
            &create_details(),
            &CreateOptions::new().with_retry_token("token-123"),
        )
        .unwrap();

    assert_eq!(response.data.id, "ocid1.publication..p1");
    assert_eq!(
        response.data.lifecycle_state,
        PublicationLifecycleState::Creating
    );

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, url(SERVICE, "/publications"));
    assert_eq!(request.header("opc-retry-token"), Some("token-123"));

    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["compartmentId"], json!("ocid1.compartment..c1"));
    assert_eq!(body["packageDetails"]["packageType"], json!("ORCHESTRATION"));
    assert_eq!(body["supportContacts"][0]["email"], json!("support@acme.test"));
    assert!(body.get("longDescription").is_none());
}

#[test]
fn test_blank_identifiers_fail_before_io() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client
        .get_publication("  ", &RequestOptions::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::MissingParameter { ref operation, ref parameter }
            if operation == "get_publication" && parameter == "publication_id"
    ));

    let mut details = create_details();
    details.compartment_id.clear();
    let err = client
        .create_publication(&details, &CreateOptions::new())
        .unwrap_err();
    assert!(err.to_string().contains("compartment_id"));

    let err = client
        .get_publication_package("ocid1.publication..p1", "", &RequestOptions::new())
        .unwrap_err();
    assert!(err.to_string().contains("package_version"));

    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_update_and_delete_send_if_match() {
    let transport = MockTransport::new();
    push(&transport, 200, &publication("ocid1.publication..p1", "UPDATING"));
    transport.push_json(204, "");
    let client = client(&transport);

    let update = UpdatePublicationDetails {
        short_description: Some("New text".to_string()),
        ..Default::default()
    };
    client
        .update_publication(
            "ocid1.publication..p1",
            &update,
            &ConditionalOptions::new().with_if_match("etag-1"),
        )
        .unwrap();

    let deleted = client
        .delete_publication(
            "ocid1.publication..p1",
            &ConditionalOptions::new().with_if_match("etag-2"),
        )
        .unwrap();
    assert_eq!(deleted.status, 204);

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].header("if-match"), Some("etag-1"));
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"shortDescription":"New text"}"#)
    );
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].header("if-match"), Some("etag-2"));
    assert_eq!(requests[1].body, None);
}

#[test]
fn test_list_publications_query() {
    let transport = MockTransport::new();
    push(&transport, 200, &json!({"items": [summary("p1"), summary("p2")]}));

    let options = ListPublicationsOptions::new()
        .with_names(vec!["Acme".to_string(), "Acme Pro".to_string()])
        .with_lifecycle_state(PublicationLifecycleState::Active)
        .with_page(
            PageOptions::new()
                .with_limit(10)
                .with_sort_by("TIMECREATED")
                .with_sort_order(SortOrder::Desc),
        );
    let response = client(&transport)
        .list_publications("ocid1.compartment..c1", &ListingType::Oci, &options)
        .unwrap();

    assert_eq!(response.data.items.len(), 2);
    assert_eq!(
        transport.last_request().unwrap().url,
        url(
            SERVICE,
            "/publications?compartmentId=ocid1.compartment..c1&listingType=OCI\
             &name=Acme&name=Acme%20Pro&lifecycleState=ACTIVE\
             &limit=10&sortOrder=DESC&sortBy=TIMECREATED"
        )
    );
}

#[test]
fn test_list_publications_rejects_bad_sort_and_listing_type() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let options =
        ListPublicationsOptions::new().with_page(PageOptions::new().with_sort_by("NAME"));
    let err = client
        .list_publications("c1", &ListingType::Oci, &options)
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::InvalidParameter { ref parameter, .. } if parameter == "sort_by"
    ));

    let err = client
        .list_publications(
            "c1",
            &ListingType::UnknownValue("MYSTERY".to_string()),
            &ListPublicationsOptions::new(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("listing_type"));

    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_list_all_publications_follows_pages() {
    let transport = MockTransport::new();
    push_with_header(
        &transport,
        200,
        ("opc-next-page", "page-2"),
        &json!({"items": [summary("p1")]}),
    );
    push(&transport, 200, &json!({"items": [summary("p2")]}));

    let all = client(&transport)
        .list_all_publications("c1", &ListingType::Oci, &ListPublicationsOptions::new())
        .unwrap();

    assert_eq!(
        all.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["p1", "p2"]
    );
    let requests = transport.requests();
    assert!(!requests[0].url.contains("page="));
    assert!(requests[1].url.ends_with("&page=page-2"));
}

#[test]
fn test_service_error_surfaces() {
    let transport = MockTransport::new();
    push(&transport, 404, &not_found());

    let err = client(&transport)
        .get_publication("ocid1.publication..gone", &RequestOptions::new())
        .unwrap_err();
    assert!(err.is_not_found());
    let service = err.as_service_error().unwrap();
    assert_eq!(service.code, "NotAuthorizedOrNotFound");
    assert_eq!(service.operation, "get_publication");
}

#[test]
fn test_create_and_wait_for_active() {
    let transport = MockTransport::new();
    push(&transport, 200, &publication("p1", "CREATING"));
    push(&transport, 200, &publication("p1", "CREATING"));
    push(&transport, 200, &publication("p1", "ACTIVE"));
    let composite = MarketplacePublisherCompositeOperations::new(client(&transport));

    let result = composite
        .create_publication_and_wait_for_state(
            &create_details(),
            &CreateOptions::new(),
            &[PublicationLifecycleState::Active, PublicationLifecycleState::Failed],
            &fast_wait(),
        )
        .unwrap();

    assert_eq!(result.data.lifecycle_state, PublicationLifecycleState::Active);
    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].url, url(SERVICE, "/publications/p1"));
}

#[test]
fn test_wait_failure_keeps_the_created_publication() {
    let transport = MockTransport::new();
    push(&transport, 200, &publication("p1", "CREATING"));
    push(&transport, 500, &json!({"code": "InternalError", "message": "boom"}));
    let composite = MarketplacePublisherCompositeOperations::new(client(&transport));

    let err = composite
        .create_publication_and_wait_for_state(
            &create_details(),
            &CreateOptions::new(),
            &[PublicationLifecycleState::Active],
            &fast_wait(),
        )
        .unwrap_err();

    assert_eq!(err.cause().status(), Some(500));
    let partial = err.into_partial().unwrap();
    assert_eq!(partial.data.id, "p1");
}

#[test]
fn test_failed_create_is_an_operation_error() {
    let transport = MockTransport::new();
    push(&transport, 400, &json!({"code": "InvalidParameter", "message": "bad name"}));
    let composite = MarketplacePublisherCompositeOperations::new(client(&transport));

    let err = composite
        .create_publication_and_wait_for_state(
            &create_details(),
            &CreateOptions::new(),
            &[PublicationLifecycleState::Active],
            &fast_wait(),
        )
        .unwrap_err();

    assert!(matches!(err, CompositeError::Operation(_)));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_delete_and_wait_succeeds_when_gone() {
    let transport = MockTransport::new();
    transport.push_json(204, "");
    push(&transport, 200, &publication("p1", "DELETING"));
    push(&transport, 404, &not_found());
    let composite = MarketplacePublisherCompositeOperations::new(client(&transport));

    let result = composite
        .delete_publication_and_wait_for_state(
            "p1",
            &ConditionalOptions::new(),
            &[PublicationLifecycleState::Deleted],
            &fast_wait(),
        )
        .unwrap();

    assert!(result.is_none());
    assert_eq!(transport.request_count(), 3);
}

#[test]
fn test_unknown_enum_filters_fail_before_io() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let options = ListPublicationsOptions::new()
        .with_lifecycle_state(PublicationLifecycleState::UnknownValue("ARCHIVED".to_string()));
    let err = client
        .list_publications("c1", &ListingType::Oci, &options)
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::InvalidParameter { ref parameter, .. } if parameter == "lifecycle_state"
    ));

    let options = ListWorkRequestsOptions {
        status: Some(WorkRequestStatus::UnknownValue("PAUSED".to_string())),
        ..Default::default()
    };
    let err = client.list_work_requests(&options).unwrap_err();
    assert!(matches!(
        err,
        SdkError::InvalidParameter { ref parameter, .. } if parameter == "status"
    ));

    assert_eq!(transport.request_count(), 0);
}
