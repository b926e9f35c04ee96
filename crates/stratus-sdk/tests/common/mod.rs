// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for stratus-sdk integration tests.
//!
//! Provides a small "widgets" service with a few models, and a client wired
//! to a scripted transport.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use stratus_http::HttpRequest;
use stratus_http::mock::MockTransport;
use stratus_sdk::{
    ApiClient, ClientConfig, RequestSigner, ServiceDescriptor, WireEnum, WireModel,
};

pub const WIDGETS: ServiceDescriptor = ServiceDescriptor {
    name: "widgets",
    endpoint_template: "https://widgets.{region}.{secondLevelDomain}",
    base_path: "/20240101",
};

pub const BASE_URL: &str = "http://widgets.test/20240101";

#[derive(Debug, Clone, PartialEq, Eq, WireEnum)]
pub enum WidgetState {
    #[wire(value = "CREATING")]
    Creating,
    #[wire(value = "ACTIVE")]
    Active,
    #[wire(value = "DELETED")]
    Deleted,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, WireEnum)]
pub enum Shape {
    #[wire(value = "ROUND")]
    Round,
    #[wire(value = "SQUARE")]
    Square,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct Dimensions {
    pub width_mm: i64,
    pub height_mm: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct Widget {
    pub id: String,
    pub display_name: Option<String>,
    pub compartment_id: Option<String>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: Option<WidgetState>,
    /// Strict: unrecognized shapes are rejected.
    pub shape: Option<Shape>,
    pub dimensions: Option<Dimensions>,
    pub tags: Option<Vec<String>>,
    pub freeform_tags: Option<HashMap<String, String>>,
    pub time_created: Option<DateTime<Utc>>,
    pub is_default: Option<bool>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
#[wire(name = "CreateWidgetDetails")]
pub struct CreateWidgetDetails {
    pub compartment_id: String,
    pub display_name: Option<String>,
    #[wire(rename = "shapeName")]
    pub shape: Option<Shape>,
}

/// Client pointed at [`BASE_URL`], sending through `transport`.
pub fn client(config: ClientConfig, transport: &MockTransport) -> ApiClient {
    ApiClient::new(config.with_endpoint("http://widgets.test"), WIDGETS)
        .expect("client")
        .with_transport(Arc::new(transport.clone()))
}

/// Counts how often it was asked to sign.
#[derive(Default)]
pub struct CountingSigner {
    pub calls: AtomicUsize,
}

impl RequestSigner for CountingSigner {
    fn sign(&self, request: &mut HttpRequest) -> stratus_sdk::Result<()> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        request.set_header("x-signature", format!("sig-{}", n));
        Ok(())
    }
}

pub fn widget_json(id: &str, state: &str) -> String {
    format!(
        r#"{{"id":"{}","displayName":"w","lifecycleState":"{}"}}"#,
        id, state
    )
}
