// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for stratus-sdk.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use stratus_http::HttpError;
use thiserror::Error;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur when using a stratus client.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A required operation parameter was missing or blank.
    #[error("parameter `{parameter}` must be provided and non-blank for {operation}")]
    MissingParameter { operation: String, parameter: String },

    /// An operation parameter was present but not acceptable.
    #[error("invalid value for parameter `{parameter}` in {operation}: {message}")]
    InvalidParameter {
        operation: String,
        parameter: String,
        message: String,
    },

    /// A payload supplied the same field under both of its names.
    #[error("conflicting alias in {model}: both `{wire}` and `{idiomatic}` were supplied")]
    ConflictingAlias {
        model: String,
        wire: String,
        idiomatic: String,
    },

    /// A required model field was absent from a payload.
    #[error("missing required field `{field}` for {model}")]
    MissingField { model: String, field: String },

    /// A model field had the wrong JSON type.
    #[error("invalid field `{field}` for {model}: expected {expected}")]
    InvalidField {
        model: String,
        field: String,
        expected: String,
    },

    /// A strict enum field received a value outside its allowed set.
    #[error("invalid value `{value}` for {model}.{field}; allowed values: {allowed}")]
    InvalidEnumValue {
        model: String,
        field: String,
        value: String,
        allowed: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The service answered with a non-success status.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Unexpected response from the service.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A waiter gave up before the resource reached the wanted state.
    #[error("timed out after {waited:?} waiting for {what}")]
    WaitTimeout { what: String, waited: Duration },
}

impl SdkError {
    pub(crate) fn missing_parameter(operation: &str, parameter: &str) -> Self {
        SdkError::MissingParameter {
            operation: operation.to_string(),
            parameter: parameter.to_string(),
        }
    }

    pub(crate) fn invalid_parameter(
        operation: &str,
        parameter: &str,
        message: impl Into<String>,
    ) -> Self {
        SdkError::InvalidParameter {
            operation: operation.to_string(),
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_field(model: &str, field: &str, expected: &str) -> Self {
        SdkError::InvalidField {
            model: model.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }

    /// The service error, if this error came from a non-success response.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            SdkError::Service(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of the failed call, if the service answered.
    pub fn status(&self) -> Option<u16> {
        self.as_service_error().map(|e| e.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the failure happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SdkError::MissingParameter { .. }
                | SdkError::InvalidParameter { .. }
                | SdkError::ConflictingAlias { .. }
                | SdkError::MissingField { .. }
                | SdkError::InvalidField { .. }
                | SdkError::InvalidEnumValue { .. }
        )
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

/// Details of a non-success response.
#[derive(Debug, Clone, Error)]
#[error(
    "service error [{status} {code}] {message} (operation: {operation}, endpoint: {endpoint}, request id: {})",
    .request_id.as_deref().unwrap_or("-")
)]
pub struct ServiceError {
    pub status: u16,
    /// Service-specific error code, e.g. `NotAuthorizedOrNotFound`.
    pub code: String,
    pub message: String,
    pub operation: String,
    /// `METHOD url` of the failed request.
    pub endpoint: String,
    pub request_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Failure of a composite "mutate then wait" operation.
///
/// `Operation` means the mutation itself failed. `Wait` means the mutation
/// was accepted and `partial` holds its response, but confirming completion
/// failed.
#[derive(Debug, Error)]
pub enum CompositeError<T: fmt::Debug> {
    #[error("operation failed: {0}")]
    Operation(#[source] SdkError),

    #[error("operation was accepted but waiting for completion failed: {cause}")]
    Wait {
        partial: T,
        #[source]
        cause: SdkError,
    },
}

impl<T: fmt::Debug> CompositeError<T> {
    /// The response of the accepted mutation, when there was one.
    pub fn partial(&self) -> Option<&T> {
        match self {
            CompositeError::Operation(_) => None,
            CompositeError::Wait { partial, .. } => Some(partial),
        }
    }

    pub fn cause(&self) -> &SdkError {
        match self {
            CompositeError::Operation(cause) => cause,
            CompositeError::Wait { cause, .. } => cause,
        }
    }

    pub fn into_partial(self) -> Option<T> {
        match self {
            CompositeError::Operation(_) => None,
            CompositeError::Wait { partial, .. } => Some(partial),
        }
    }
}

/// Result of a composite operation.
pub type CompositeResult<T, P> = std::result::Result<T, CompositeError<P>>;
