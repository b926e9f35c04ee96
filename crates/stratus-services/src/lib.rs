// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stratus service clients.
//!
//! One module per API. Each exposes a blocking client, its models and a
//! `*CompositeOperations` wrapper that pairs a mutation with a waiter.
//!
//! ```no_run
//! use stratus_sdk::ClientConfig;
//! use stratus_services::options::RequestOptions;
//! use stratus_services::rover::RoverNodeClient;
//!
//! # fn example() -> stratus_sdk::Result<()> {
//! let client = RoverNodeClient::from_config(ClientConfig::new().with_region("us-ashburn-1"))?;
//! let node = client.get_rover_node("ocid1.rovernode.oc1..aaaa", &RequestOptions::default())?;
//! println!("{} is {}", node.data.display_name, node.data.lifecycle_state);
//! # Ok(())
//! # }
//! ```

pub mod marketplace_publisher;
pub mod optimizer;
pub mod options;
pub mod rover;
pub mod stack_monitoring;

pub use options::{ConditionalOptions, CreateOptions, PageOptions, RequestOptions};
