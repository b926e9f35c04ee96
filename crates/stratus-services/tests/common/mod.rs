// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for stratus-services integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use stratus_http::HttpResponse;
use stratus_http::mock::MockTransport;
use stratus_sdk::{ApiClient, ClientConfig, ServiceDescriptor, WaitOptions};

pub const ENDPOINT: &str = "http://stratus.test";

/// Client for `service` that talks to `transport` instead of the network.
pub fn api_client(service: ServiceDescriptor, transport: &MockTransport) -> ApiClient {
    ApiClient::new(ClientConfig::new().with_endpoint(ENDPOINT), service)
        .expect("client")
        .with_transport(Arc::new(transport.clone()))
}

pub fn url(service: ServiceDescriptor, path: &str) -> String {
    format!("{}{}{}", ENDPOINT, service.base_path, path)
}

/// Polls back to back.
pub fn fast_wait() -> WaitOptions {
    WaitOptions::new()
        .with_initial_interval(Duration::ZERO)
        .with_max_interval(Duration::ZERO)
        .with_max_wait(Duration::from_secs(5))
}

pub fn push(transport: &MockTransport, status: u16, body: &Value) {
    transport.push_json(status, &body.to_string());
}

pub fn push_with_header(transport: &MockTransport, status: u16, header: (&str, &str), body: &Value) {
    transport.push_response(
        HttpResponse::new(status)
            .with_header(header.0, header.1)
            .with_header("content-type", "application/json")
            .with_body(body.to_string()),
    );
}

pub fn not_found() -> Value {
    json!({"code": "NotAuthorizedOrNotFound", "message": "resource not found"})
}

pub fn publication(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "compartmentId": "ocid1.compartment..c1",
        "listingType": "OCI",
        "name": "Acme Analytics",
        "packageType": "IMAGE",
        "lifecycleState": state,
        "timeCreated": "2024-03-01T10:00:00Z"
    })
}

pub fn recommendation(id: &str, lifecycle: &str, status: &str) -> Value {
    json!({
        "id": id,
        "compartmentId": "ocid1.tenancy..t",
        "categoryId": "ocid1.optimizercategory..cost",
        "name": "cost-management-block-storage-unattached-name",
        "description": "Delete unattached volumes",
        "importance": "HIGH",
        "resourceCounts": [{"status": "PENDING", "count": 2}],
        "lifecycleState": lifecycle,
        "estimatedCostSaving": 40.0,
        "status": status
    })
}

pub fn rover_node(id: &str, state: &str) -> Value {
    json!({
        "id": id,
        "compartmentId": "ocid1.compartment..c1",
        "displayName": "edge-01",
        "nodeType": "STANDALONE",
        "lifecycleState": state
    })
}

pub fn monitored_resource(id: &str) -> Value {
    json!({
        "id": id,
        "name": "db01",
        "type": "oracle_database",
        "compartmentId": "ocid1.compartment..c1",
        "lifecycleState": "CREATING"
    })
}

pub fn work_request(id: &str, status: &str) -> Value {
    let percent_complete = if status == "SUCCEEDED" { 100.0 } else { 50.0 };
    json!({
        "id": id,
        "operationType": "CREATE_RESOURCES",
        "status": status,
        "compartmentId": "ocid1.compartment..c1",
        "resources": [],
        "percentComplete": percent_complete,
        "timeAccepted": "2024-03-01T10:00:00Z"
    })
}
