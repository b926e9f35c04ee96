// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Region to endpoint resolution.

use crate::config::ClientConfig;
use crate::error::{Result, SdkError};

/// Static description of a service API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Short service name used in logs and the CLI.
    pub name: &'static str,
    /// Host template, e.g. `https://rover.{region}.{secondLevelDomain}`.
    pub endpoint_template: &'static str,
    /// API version prefix, e.g. `/20201210`.
    pub base_path: &'static str,
}

/// A region identifier and the domain its endpoints live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: String,
    second_level_domain: String,
}

impl Region {
    /// Identifiers are lower-case ASCII letters, digits and `-`.
    pub fn new(id: impl Into<String>, second_level_domain: impl Into<String>) -> Result<Self> {
        let id = id.into().trim().to_ascii_lowercase();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(SdkError::Config(format!("invalid region identifier `{}`", id)));
        }

        let second_level_domain = second_level_domain.into();
        if second_level_domain.trim().is_empty() {
            return Err(SdkError::Config("domain must not be blank".to_string()));
        }

        Ok(Self {
            id,
            second_level_domain,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn second_level_domain(&self) -> &str {
        &self.second_level_domain
    }
}

/// Produces the scheme-and-host part of a service URL.
pub trait EndpointResolver: Send + Sync {
    fn resolve(&self, service: &ServiceDescriptor) -> Result<String>;
}

/// Expands `{region}` and `{secondLevelDomain}` in the service template.
#[derive(Debug, Clone)]
pub struct TemplateEndpointResolver {
    region: Region,
}

impl TemplateEndpointResolver {
    pub fn new(region: Region) -> Self {
        Self { region }
    }
}

impl EndpointResolver for TemplateEndpointResolver {
    fn resolve(&self, service: &ServiceDescriptor) -> Result<String> {
        let endpoint = service
            .endpoint_template
            .replace("{region}", self.region.id())
            .replace("{secondLevelDomain}", self.region.second_level_domain());
        if endpoint.contains('{') {
            return Err(SdkError::Config(format!(
                "unresolved placeholder in endpoint template for {}: {}",
                service.name, endpoint
            )));
        }
        Ok(endpoint)
    }
}

/// Always returns the configured endpoint.
#[derive(Debug, Clone)]
pub struct StaticEndpointResolver {
    endpoint: String,
}

impl StaticEndpointResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl EndpointResolver for StaticEndpointResolver {
    fn resolve(&self, _service: &ServiceDescriptor) -> Result<String> {
        Ok(self.endpoint.clone())
    }
}

/// Pick the resolver the configuration asks for: an explicit endpoint wins
/// over a region.
pub fn resolver_for(config: &ClientConfig) -> Result<Box<dyn EndpointResolver>> {
    if let Some(endpoint) = &config.endpoint {
        return Ok(Box::new(StaticEndpointResolver::new(endpoint.clone())));
    }
    match &config.region {
        Some(region) => Ok(Box::new(TemplateEndpointResolver::new(Region::new(
            region.clone(),
            config.domain.clone(),
        )?))),
        None => Err(SdkError::Config(
            "either an endpoint or a region must be configured".to_string(),
        )),
    }
}

/// Full base URL (endpoint plus API version prefix) for a service.
pub fn base_url(resolver: &dyn EndpointResolver, service: &ServiceDescriptor) -> Result<String> {
    let endpoint = resolver.resolve(service)?;
    Ok(format!("{}{}", endpoint.trim_end_matches('/'), service.base_path))
}
