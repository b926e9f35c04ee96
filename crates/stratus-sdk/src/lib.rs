// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stratus SDK
//!
//! Shared plumbing behind every stratus service client.
//!
//! # Architecture
//!
//! A service client is a thin layer of operations. Each operation:
//! - validates its required parameters ([`validation`])
//! - describes the call as an [`OperationRequest`] (path template, query,
//!   headers, body, idempotency)
//! - hands it to [`ApiClient::call_api`], which signs, sends and retries it
//! - decodes the [`ApiResponse`] into a typed model ([`Model`])
//!
//! Models and enums are plain Rust types; `#[derive(WireModel)]` and
//! `#[derive(WireEnum)]` generate their wire contract at build time.
//!
//! # Example
//!
//! ```no_run
//! use stratus_sdk::{
//!     ApiClient, ClientConfig, Method, OperationRequest, RetryStrategy, ServiceDescriptor,
//! };
//!
//! # fn example() -> stratus_sdk::Result<()> {
//! const ROVER: ServiceDescriptor = ServiceDescriptor {
//!     name: "rover",
//!     endpoint_template: "https://rover.{region}.{secondLevelDomain}",
//!     base_path: "/20201210",
//! };
//!
//! let config = ClientConfig::new()
//!     .with_region("eu-frankfurt-1")
//!     .with_retry_strategy(RetryStrategy::default_strategy());
//! let client = ApiClient::new(config, ROVER)?;
//!
//! let response = client.call_api(
//!     OperationRequest::new("get_rover_node", Method::Get, "/roverNodes/{roverNodeId}")
//!         .path_param("roverNodeId", "ocid1.rovernode.oc1..aaaa"),
//! )?;
//! println!("{}", response.body);
//! # Ok(())
//! # }
//! ```

// Lets the derive macros' `::stratus_sdk::...` paths resolve inside this crate.
extern crate self as stratus_sdk;

pub mod api_client;
pub mod config;
pub mod endpoint;
pub mod enums;
pub mod error;
pub mod model;
pub mod pagination;
pub mod polymorphic;
pub mod request;
pub mod response;
pub mod retry;
pub mod signer;
pub mod validation;
pub mod waiter;

pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use endpoint::{
    EndpointResolver, Region, ServiceDescriptor, StaticEndpointResolver, TemplateEndpointResolver,
};
pub use enums::{EnumPolicy, WireEnum};
pub use error::{CompositeError, CompositeResult, Result, SdkError, ServiceError};
pub use model::{Model, Payload, WireValue};
pub use pagination::{Page, Paginator, SortOrder, list_all, list_up_to};
pub use request::{CollectionFormat, OperationRequest};
pub use response::{ApiResponse, Response};
pub use retry::{BackoffPolicy, Jitter, RetryChecker, RetryStrategy};
pub use signer::{BearerTokenSigner, NoopSigner, RequestSigner};
pub use stratus_http::Method;
pub use stratus_model_derive::{WireEnum, WireModel};
pub use waiter::{WaitOptions, wait_until};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
