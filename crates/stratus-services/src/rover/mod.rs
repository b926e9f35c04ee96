// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rover edge device API (`/20201210`).

mod client;
mod composite;
pub mod models;

use stratus_sdk::ServiceDescriptor;

pub use client::{ListRoverNodesOptions, ROVER_NODE_SORT_FIELDS, RoverNodeClient};
pub use composite::RoverNodeCompositeOperations;

pub const SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "rover",
    endpoint_template: "https://rover.{region}.{secondLevelDomain}",
    base_path: "/20201210",
};
