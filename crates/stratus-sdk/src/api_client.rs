// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! The generic client every service client delegates to.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use stratus_http::{HttpRequest, HttpResponse, HttpTransport, UreqTransport};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::endpoint::{self, EndpointResolver, ServiceDescriptor};
use crate::error::{Result, ServiceError};
use crate::request::{OperationRequest, new_request_id, new_retry_token};
use crate::response::{ApiResponse, HEADER_REQUEST_ID};
use crate::retry::resolve_strategy;
use crate::signer::{NoopSigner, RequestSigner};

/// Builds, signs and sends operation requests for one service.
///
/// The client holds only immutable configuration and shared collaborators,
/// so one instance can be used from many threads. Per-call state (request id,
/// retry token, attempt counter) lives on the stack of [`ApiClient::call_api`].
#[derive(Clone)]
pub struct ApiClient {
    service: ServiceDescriptor,
    base_url: String,
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn RequestSigner>,
}

impl ApiClient {
    /// Create a client with the `ureq` transport and no signing.
    pub fn new(config: ClientConfig, service: ServiceDescriptor) -> Result<Self> {
        let resolver = endpoint::resolver_for(&config)?;
        let base_url = endpoint::base_url(resolver.as_ref(), &service)?;
        let transport = UreqTransport::new(config.connect_timeout, config.read_timeout);

        debug!(service = service.name, base_url = %base_url, "Created API client");

        Ok(Self {
            service,
            base_url,
            config,
            transport: Arc::new(transport),
            signer: Arc::new(NoopSigner),
        })
    }

    /// Replace the transport.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the signer.
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = signer;
        self
    }

    /// Re-resolve the base URL with a custom resolver.
    pub fn with_endpoint_resolver(mut self, resolver: &dyn EndpointResolver) -> Result<Self> {
        self.base_url = endpoint::base_url(resolver, &self.service)?;
        Ok(self)
    }

    pub fn service(&self) -> &ServiceDescriptor {
        &self.service
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send an operation request under its retry strategy.
    ///
    /// The request id and retry token are fixed before the first attempt and
    /// reused by every retry; the request is re-signed on each attempt.
    /// Non-2xx responses become [`crate::SdkError::Service`].
    #[instrument(skip(self, request), fields(service = self.service.name, operation = request.operation))]
    pub fn call_api(&self, request: OperationRequest) -> Result<ApiResponse> {
        let path = request.render_path()?;
        let url = format!("{}{}{}", self.base_url, path, request.query_string());

        let request_id = request.request_id.clone().unwrap_or_else(new_request_id);
        // Idempotent methods are safe to replay without a token.
        let retry_token = request.retry_token.clone().or_else(|| {
            (request.mutating && !request.method.is_idempotent()).then(new_retry_token)
        });

        let strategy = resolve_strategy(
            request.retry_strategy.as_ref(),
            self.config.retry_strategy.as_ref(),
        );

        strategy.make_retrying_call(request.operation, |attempt| {
            let mut http = HttpRequest::new(request.method, url.clone());
            http.set_header("accept", "application/json");
            http.set_header("content-type", "application/json");
            http.set_header("user-agent", self.config.user_agent.clone());
            http.set_header(HEADER_REQUEST_ID, request_id.clone());
            if let Some(token) = &retry_token {
                http.set_header("opc-retry-token", token.clone());
            }
            if let Some(etag) = &request.if_match {
                http.set_header("if-match", etag.clone());
            }
            for (name, value) in &request.headers {
                http.set_header(name, value.clone());
            }
            http.body = request.body.clone();

            self.signer.sign(&mut http)?;

            debug!(attempt, method = %request.method, url = %url, "Sending request");
            let response = self.transport.send(&http)?;
            debug!(attempt, status = response.status, "Received response");

            if response.is_success() {
                Ok(ApiResponse::new(request.operation, response))
            } else {
                Err(service_error(&request, &http, &request_id, response).into())
            }
        })
    }
}

/// Build the error for a non-2xx response. The body is expected to be
/// `{"code": "...", "message": "..."}` but anything else is tolerated.
fn service_error(
    request: &OperationRequest,
    http: &HttpRequest,
    request_id: &str,
    response: HttpResponse,
) -> ServiceError {
    let parsed: Option<Value> = serde_json::from_str(&response.body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let code = field("code").unwrap_or_else(|| "Unknown".to_string());
    let message = field("message").unwrap_or_else(|| {
        if response.body.trim().is_empty() {
            format!("HTTP {}", response.status)
        } else {
            response.body.clone()
        }
    });

    ServiceError {
        status: response.status,
        code,
        message,
        operation: request.operation.to_string(),
        endpoint: format!("{} {}", http.method, http.url),
        request_id: Some(
            response
                .header(HEADER_REQUEST_ID)
                .unwrap_or(request_id)
                .to_string(),
        ),
        timestamp: Utc::now(),
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("service", &self.service.name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
