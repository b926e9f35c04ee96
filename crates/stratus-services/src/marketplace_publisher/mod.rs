// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Marketplace publisher API (`/20220901`).
//!
//! Publications, their packages (image or orchestration) and the work
//! requests that track publication changes.

mod client;
mod composite;
pub mod models;

use stratus_sdk::ServiceDescriptor;

pub use client::{
    ListPublicationPackagesOptions, ListPublicationsOptions, ListWorkRequestsOptions,
    MarketplacePublisherClient, PUBLICATION_SORT_FIELDS,
};
pub use composite::MarketplacePublisherCompositeOperations;

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "marketplace_publisher",
    endpoint_template: "https://marketplace-publisher.{region}.{secondLevelDomain}",
    base_path: "/20220901",
};
