// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stack monitoring API (`/20210330`).

mod client;
mod composite;
pub mod models;

use stratus_sdk::ServiceDescriptor;

pub use client::{DeleteMonitoredResourceOptions, StackMonitoringClient};
pub use composite::StackMonitoringCompositeOperations;

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "stack_monitoring",
    endpoint_template: "https://stack-monitoring.{region}.{secondLevelDomain}",
    base_path: "/20210330",
};
