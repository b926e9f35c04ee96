// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for stratus clients.

use std::time::Duration;

use crate::error::{Result, SdkError};
use crate::retry::RetryStrategy;

/// Second-level domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "stratuscloud.com";

/// Configuration shared by every service client.
///
/// A client receives its configuration at construction; there is no
/// process-wide default client state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Region identifier, e.g. `eu-frankfurt-1`.
    pub region: Option<String>,
    /// Explicit base URL. Takes precedence over region resolution.
    pub endpoint: Option<String>,
    /// Second-level domain used by endpoint templates.
    pub domain: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Strategy applied to operations without their own override.
    /// `None` means no retries.
    pub retry_strategy: Option<RetryStrategy>,
    /// Value of the `user-agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            domain: DEFAULT_DOMAIN.to_string(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(60),
            retry_strategy: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("stratus-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STRATUS_REGION`: Region identifier (default: unset)
    /// - `STRATUS_ENDPOINT`: Explicit base URL (default: unset)
    /// - `STRATUS_DOMAIN`: Second-level domain (default: "stratuscloud.com")
    /// - `STRATUS_CONNECT_TIMEOUT_MS`: Connection timeout in milliseconds (default: 10000)
    /// - `STRATUS_READ_TIMEOUT_MS`: Read timeout in milliseconds (default: 60000)
    /// - `STRATUS_RETRY_MAX_ATTEMPTS`: Enables the default retry strategy with
    ///   this many attempts; `0` or unset means no retries
    /// - `STRATUS_USER_AGENT`: User agent (default: "stratus-sdk/<version>")
    pub fn from_env() -> Result<Self> {
        let region = non_empty_var("STRATUS_REGION");
        let endpoint = non_empty_var("STRATUS_ENDPOINT");
        let domain = non_empty_var("STRATUS_DOMAIN").unwrap_or_else(|| DEFAULT_DOMAIN.to_string());

        let connect_timeout_ms: u64 = std::env::var("STRATUS_CONNECT_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid STRATUS_CONNECT_TIMEOUT_MS: {}", e)))?;

        let read_timeout_ms: u64 = std::env::var("STRATUS_READ_TIMEOUT_MS")
            .unwrap_or_else(|_| "60000".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid STRATUS_READ_TIMEOUT_MS: {}", e)))?;

        let max_attempts: u32 = std::env::var("STRATUS_RETRY_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid STRATUS_RETRY_MAX_ATTEMPTS: {}", e)))?;

        let retry_strategy = (max_attempts > 0)
            .then(|| RetryStrategy::default_strategy().with_max_attempts(max_attempts));

        let user_agent = non_empty_var("STRATUS_USER_AGENT").unwrap_or_else(default_user_agent);

        Ok(Self {
            region,
            endpoint,
            domain,
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            read_timeout: Duration::from_millis(read_timeout_ms),
            retry_strategy,
            user_agent,
        })
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set an explicit endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the second-level domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the client-level retry strategy.
    pub fn with_retry_strategy(mut self, strategy: RetryStrategy) -> Self {
        self.retry_strategy = Some(strategy);
        self
    }

    /// Disable client-level retries.
    pub fn without_retries(mut self) -> Self {
        self.retry_strategy = None;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
