// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stack monitoring operations and work-request waiters.

mod common;

use common::{api_client, fast_wait, monitored_resource, push, push_with_header, url, work_request};
use stratus_http::HttpResponse;
use stratus_http::mock::MockTransport;
use stratus_sdk::SdkError;
use stratus_services::stack_monitoring::models::{
    CreateMonitoredResourceDetails, OperationStatus, OperationType,
};
use stratus_services::stack_monitoring::{
    DeleteMonitoredResourceOptions, SERVICE, StackMonitoringClient,
    StackMonitoringCompositeOperations,
};
use stratus_services::{CreateOptions, RequestOptions};

fn client(transport: &MockTransport) -> StackMonitoringClient {
    StackMonitoringClient::new(api_client(SERVICE, transport))
}

fn create_details() -> CreateMonitoredResourceDetails {
    CreateMonitoredResourceDetails {
        name: "db01".to_string(),
        display_name: Some("Orders DB".to_string()),
        resource_type: "oracle_database".to_string(),
        compartment_id: "ocid1.compartment..c1".to_string(),
        host_name: None,
        external_id: None,
        management_agent_id: Some("ocid1.managementagent..a1".to_string()),
        resource_time_zone: None,
        properties: None,
        freeform_tags: None,
    }
}

fn accepted_delete(work_request_id: &str) -> HttpResponse {
    HttpResponse::new(202).with_header("opc-work-request-id", work_request_id)
}

#[test]
fn test_create_monitored_resource() {
    let transport = MockTransport::new();
    push_with_header(
        &transport,
        200,
        ("opc-work-request-id", "wr1"),
        &monitored_resource("mr1"),
    );

    let response = client(&transport)
        .create_monitored_resource(&create_details(), &CreateOptions::new())
        .unwrap();

    assert_eq!(response.data.resource_type, "oracle_database");
    assert_eq!(response.work_request_id(), Some("wr1"));
    let request = transport.last_request().unwrap();
    assert_eq!(request.url, url(SERVICE, "/monitoredResources"));
    assert!(request.body.as_deref().unwrap().contains(r#""type":"oracle_database""#));
}

#[test]
fn test_create_requires_type() {
    let transport = MockTransport::new();
    let mut details = create_details();
    details.resource_type.clear();

    let err = client(&transport)
        .create_monitored_resource(&details, &CreateOptions::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::MissingParameter { ref parameter, .. } if parameter == "type"
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_delete_sends_delete_members() {
    let transport = MockTransport::new();
    transport.push_response(accepted_delete("wr2"));

    let response = client(&transport)
        .delete_monitored_resource(
            "mr1",
            &DeleteMonitoredResourceOptions::new().with_delete_members(true),
        )
        .unwrap();

    assert_eq!(response.work_request_id(), Some("wr2"));
    assert_eq!(
        transport.last_request().unwrap().url,
        url(SERVICE, "/monitoredResources/mr1?isDeleteMembers=true")
    );
}

#[test]
fn test_get_work_request() {
    let transport = MockTransport::new();
    push(&transport, 200, &work_request("wr1", "IN_PROGRESS"));

    let response = client(&transport)
        .get_work_request("wr1", &RequestOptions::new())
        .unwrap();
    assert_eq!(response.data.status, OperationStatus::InProgress);
    assert_eq!(response.data.operation_type, OperationType::CreateResources);
    assert_eq!(
        transport.last_request().unwrap().url,
        url(SERVICE, "/workRequests/wr1")
    );
}

#[test]
fn test_create_and_wait_for_work_request() {
    let transport = MockTransport::new();
    push_with_header(
        &transport,
        200,
        ("opc-work-request-id", "wr1"),
        &monitored_resource("mr1"),
    );
    push(&transport, 200, &work_request("wr1", "ACCEPTED"));
    push(&transport, 200, &work_request("wr1", "IN_PROGRESS"));
    push(&transport, 200, &work_request("wr1", "SUCCEEDED"));
    let composite = StackMonitoringCompositeOperations::new(client(&transport));

    let result = composite
        .create_monitored_resource_and_wait_for_work_request(
            &create_details(),
            &CreateOptions::new(),
            OperationStatus::TERMINAL,
            &fast_wait(),
        )
        .unwrap();

    assert_eq!(result.data.status, OperationStatus::Succeeded);
    assert_eq!(result.data.percent_complete, 100.0);
    assert_eq!(transport.request_count(), 4);
}

#[test]
fn test_missing_work_request_header_keeps_partial() {
    let transport = MockTransport::new();
    push(&transport, 200, &monitored_resource("mr1"));
    let composite = StackMonitoringCompositeOperations::new(client(&transport));

    let err = composite
        .create_monitored_resource_and_wait_for_work_request(
            &create_details(),
            &CreateOptions::new(),
            OperationStatus::TERMINAL,
            &fast_wait(),
        )
        .unwrap_err();

    assert!(matches!(err.cause(), SdkError::UnexpectedResponse(_)));
    assert_eq!(err.partial().unwrap().data.id, "mr1");
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn test_delete_and_wait_for_work_request() {
    let transport = MockTransport::new();
    transport.push_response(accepted_delete("wr9"));
    push(&transport, 200, &work_request("wr9", "FAILED"));
    let composite = StackMonitoringCompositeOperations::new(client(&transport));

    let result = composite
        .delete_monitored_resource_and_wait_for_work_request(
            "mr1",
            &DeleteMonitoredResourceOptions::new(),
            OperationStatus::TERMINAL,
            &fast_wait(),
        )
        .unwrap();

    // Reaching any requested status ends the wait, failure included.
    assert_eq!(result.data.status, OperationStatus::Failed);
    assert_eq!(
        transport.requests()[1].url,
        url(SERVICE, "/workRequests/wr9")
    );
}

#[test]
fn test_unknown_work_request_status_is_rejected() {
    let transport = MockTransport::new();
    push(&transport, 200, &work_request("wr1", "PAUSED"));

    let err = client(&transport)
        .get_work_request("wr1", &RequestOptions::new())
        .unwrap_err();
    assert!(matches!(err, SdkError::InvalidEnumValue { ref field, .. } if field == "status"));
}
