// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Operation request builder.

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde_json::Value;
use stratus_http::Method;
use uuid::Uuid;

use crate::error::{Result, SdkError};
use crate::model::Model;
use crate::retry::RetryStrategy;

/// Length of a generated `opc-retry-token`.
pub const RETRY_TOKEN_LENGTH: usize = 30;

/// How a list-valued query parameter is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionFormat {
    /// `name=a&name=b`
    #[default]
    Multi,
    /// `name=a,b`
    Csv,
}

/// Everything an operation contributes to a call.
///
/// ```ignore
/// let request = OperationRequest::new("get_rover_node", Method::Get, "/roverNodes/{roverNodeId}")
///     .path_param("roverNodeId", rover_node_id)
///     .request_id(options.opc_request_id.clone());
/// ```
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub(crate) operation: &'static str,
    pub(crate) method: Method,
    pub(crate) path_template: &'static str,
    pub(crate) path_params: Vec<(&'static str, String)>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<String>,
    pub(crate) mutating: bool,
    pub(crate) retry_token: Option<String>,
    pub(crate) if_match: Option<String>,
    pub(crate) request_id: Option<String>,
    pub(crate) retry_strategy: Option<RetryStrategy>,
}

impl OperationRequest {
    pub fn new(operation: &'static str, method: Method, path_template: &'static str) -> Self {
        Self {
            operation,
            method,
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            mutating: false,
            retry_token: None,
            if_match: None,
            request_id: None,
            retry_strategy: None,
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Substitute `{name}` in the path template. The value is percent-encoded.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Add a query parameter; `None` is dropped.
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Add a list-valued query parameter; `None` and empty lists are dropped.
    pub fn query_list<V: ToString>(
        mut self,
        name: &str,
        values: Option<&[V]>,
        format: CollectionFormat,
    ) -> Self {
        let Some(values) = values.filter(|v| !v.is_empty()) else {
            return self;
        };
        match format {
            CollectionFormat::Multi => {
                for value in values {
                    self.query.push((name.to_string(), value.to_string()));
                }
            }
            CollectionFormat::Csv => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                self.query.push((name.to_string(), joined));
            }
        }
        self
    }

    /// Add a header parameter; `None` is dropped.
    pub fn header(mut self, name: &str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.headers.push((name.to_ascii_lowercase(), value.into()));
        }
        self
    }

    /// Serialize a model as the JSON body.
    pub fn body<M: Model>(mut self, model: &M) -> Self {
        self.body = Some(model.to_json().to_string());
        self
    }

    pub fn json_body(mut self, body: &Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Mark the operation as mutating: a non-idempotent method (POST) gets a
    /// generated `opc-retry-token`.
    pub fn mutating(mut self) -> Self {
        self.mutating = true;
        self
    }

    /// Caller-supplied retry token, sent regardless of method (implies
    /// [`Self::mutating`] when set).
    pub fn retry_token(mut self, token: Option<String>) -> Self {
        if token.is_some() {
            self.mutating = true;
        }
        self.retry_token = token;
        self
    }

    pub fn if_match(mut self, etag: Option<String>) -> Self {
        self.if_match = etag;
        self
    }

    pub fn request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Per-operation retry override.
    pub fn retry_strategy(mut self, strategy: Option<RetryStrategy>) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// The path with every placeholder substituted.
    pub fn render_path(&self) -> Result<String> {
        let mut path = self.path_template.to_string();
        for (name, value) in &self.path_params {
            if value.trim().is_empty() {
                return Err(SdkError::missing_parameter(self.operation, name));
            }
            path = path.replace(&format!("{{{}}}", name), &urlencoding::encode(value));
        }

        if let Some(start) = path.find('{') {
            let placeholder = path[start + 1..]
                .split('}')
                .next()
                .unwrap_or_default()
                .to_string();
            return Err(SdkError::invalid_parameter(
                self.operation,
                &placeholder,
                "path parameter was not supplied",
            ));
        }
        Ok(path)
    }

    /// `?a=1&b=2`, or an empty string when there are no query parameters.
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let pairs = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", pairs)
    }
}

/// A fresh `opc-request-id`: 32 upper-case hex digits.
pub fn new_request_id() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

/// A fresh `opc-retry-token` of [`RETRY_TOKEN_LENGTH`] alphanumerics.
pub fn new_retry_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RETRY_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
