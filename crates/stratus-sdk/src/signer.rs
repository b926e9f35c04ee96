// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request signing.
//!
//! Signing is an injected collaborator. The client calls [`RequestSigner::sign`]
//! on every attempt, after all headers and the body are in place.

use stratus_http::HttpRequest;

use crate::error::{Result, SdkError};

/// Adds authentication to an outgoing request.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &mut HttpRequest) -> Result<()>;
}

/// Leaves requests untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSigner;

impl RequestSigner for NoopSigner {
    fn sign(&self, _request: &mut HttpRequest) -> Result<()> {
        Ok(())
    }
}

/// Adds `authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerTokenSigner {
    token: String,
}

impl BearerTokenSigner {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SdkError::Config("bearer token must not be blank".to_string()));
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for BearerTokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenSigner")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RequestSigner for BearerTokenSigner {
    fn sign(&self, request: &mut HttpRequest) -> Result<()> {
        request.set_header("authorization", format!("Bearer {}", self.token));
        Ok(())
    }
}
