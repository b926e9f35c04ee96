// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cloud advisor / optimizer API (`/20200606`).

mod client;
mod composite;
pub mod models;

use stratus_sdk::ServiceDescriptor;

pub use client::{ListRecommendationsOptions, OptimizerClient, RECOMMENDATION_SORT_FIELDS};
pub use composite::OptimizerCompositeOperations;

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "optimizer",
    endpoint_template: "https://optimizer.{region}.{secondLevelDomain}",
    base_path: "/20200606",
};
