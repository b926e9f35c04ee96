// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Rover node models. Every enum field here decodes leniently.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use stratus_sdk::{WireEnum, WireModel};

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum NodeType {
    #[wire(value = "STANDALONE")]
    Standalone,
    #[wire(value = "CLUSTERED")]
    Clustered,
    #[wire(value = "STATION")]
    Station,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum LifecycleState {
    #[wire(value = "CREATING")]
    Creating,
    #[wire(value = "UPDATING")]
    Updating,
    #[wire(value = "ACTIVE")]
    Active,
    #[wire(value = "DELETING")]
    Deleting,
    #[wire(value = "DELETED")]
    Deleted,
    #[wire(value = "FAILED")]
    Failed,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum EnclosureType {
    #[wire(value = "RUGGADIZED")]
    Ruggadized,
    #[wire(value = "NON_RUGGADIZED")]
    NonRuggadized,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum ShippingPreference {
    #[wire(value = "ORACLE_SHIPPED")]
    VendorShipped,
    #[wire(value = "CUSTOMER_PICKUP")]
    CustomerPickup,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct ShippingAddress {
    pub addressee: Option<String>,
    pub care_of: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city_or_locality: Option<String>,
    pub state_or_region: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RoverWorkload {
    pub name: String,
    pub compartment_id: String,
    pub id: String,
    pub workload_type: String,
    pub size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RoverNode {
    pub id: String,
    pub compartment_id: String,
    pub display_name: String,
    #[wire(policy = "lenient")]
    pub node_type: Option<NodeType>,
    pub serial_number: Option<String>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: LifecycleState,
    pub lifecycle_state_details: Option<String>,
    #[wire(policy = "lenient")]
    pub enclosure_type: Option<EnclosureType>,
    #[wire(policy = "lenient")]
    pub shipping_preference: Option<ShippingPreference>,
    pub customer_shipping_address: Option<ShippingAddress>,
    pub node_workloads: Option<Vec<RoverWorkload>>,
    pub super_user_password: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
    pub time_return_window_starts: Option<DateTime<Utc>>,
    pub time_return_window_ends: Option<DateTime<Utc>>,
    pub freeform_tags: Option<HashMap<String, String>>,
    pub defined_tags: Option<HashMap<String, HashMap<String, Value>>>,
    pub system_tags: Option<HashMap<String, HashMap<String, Value>>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RoverNodeSummary {
    pub id: String,
    pub compartment_id: String,
    pub display_name: String,
    #[wire(policy = "lenient")]
    pub node_type: Option<NodeType>,
    pub serial_number: Option<String>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: LifecycleState,
    pub time_created: Option<DateTime<Utc>>,
    pub freeform_tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RoverNodeCollection {
    pub items: Vec<RoverNodeSummary>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct CreateRoverNodeDetails {
    pub compartment_id: String,
    pub display_name: String,
    #[wire(policy = "lenient")]
    pub shipping_preference: Option<ShippingPreference>,
    #[wire(policy = "lenient")]
    pub enclosure_type: Option<EnclosureType>,
    pub customer_shipping_address: Option<ShippingAddress>,
    pub node_workloads: Option<Vec<RoverWorkload>>,
    pub super_user_password: Option<String>,
    pub freeform_tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, WireModel)]
pub struct UpdateRoverNodeDetails {
    pub display_name: Option<String>,
    #[wire(policy = "lenient")]
    pub shipping_preference: Option<ShippingPreference>,
    pub customer_shipping_address: Option<ShippingAddress>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: Option<LifecycleState>,
    pub lifecycle_state_details: Option<String>,
    pub freeform_tags: Option<HashMap<String, String>>,
}
