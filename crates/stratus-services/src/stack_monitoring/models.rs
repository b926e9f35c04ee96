// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Stack monitoring models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use stratus_sdk::{WireEnum, WireModel};

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum ResourceLifecycleState {
    #[wire(value = "CREATING")]
    Creating,
    #[wire(value = "UPDATING")]
    Updating,
    #[wire(value = "ACTIVE")]
    Active,
    #[wire(value = "INACTIVE")]
    Inactive,
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
pub enum OperationStatus {
    #[wire(value = "ACCEPTED")]
    Accepted,
    #[wire(value = "IN_PROGRESS")]
    InProgress,
    #[wire(value = "WAITING")]
    Waiting,
    #[wire(value = "FAILED")]
    Failed,
    #[wire(value = "SUCCEEDED")]
    Succeeded,
    #[wire(value = "CANCELING")]
    Canceling,
    #[wire(value = "CANCELED")]
    Canceled,
    #[wire(unknown)]
    UnknownValue(String),
}

impl OperationStatus {
    /// Statuses after which the work request no longer changes.
    pub const TERMINAL: &'static [OperationStatus] = &[
        OperationStatus::Succeeded,
        OperationStatus::Failed,
        OperationStatus::Canceled,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum OperationType {
    #[wire(value = "ASSOCIATE_RESOURCES")]
    AssociateResources,
    #[wire(value = "CREATE_RESOURCES")]
    CreateResources,
    #[wire(value = "IMPORT_RESOURCES")]
    ImportResources,
    #[wire(value = "ENABLE_EXTERNAL_DATABASE")]
    EnableExternalDatabase,
    #[wire(value = "DELETE_RESOURCES")]
    DeleteResources,
    #[wire(value = "UPDATE_RESOURCES")]
    UpdateResources,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum ActionType {
    #[wire(value = "CREATED")]
    Created,
    #[wire(value = "UPDATED")]
    Updated,
    #[wire(value = "DELETED")]
    Deleted,
    #[wire(value = "IN_PROGRESS")]
    InProgress,
    #[wire(value = "RELATED")]
    Related,
    #[wire(value = "FAILED")]
    Failed,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct MonitoredResourceProperty {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct MonitoredResource {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    #[wire(rename = "type")]
    pub resource_type: String,
    pub compartment_id: String,
    pub tenant_id: Option<String>,
    pub host_name: Option<String>,
    pub external_id: Option<String>,
    pub management_agent_id: Option<String>,
    pub resource_time_zone: Option<String>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: Option<ResourceLifecycleState>,
    pub properties: Option<Vec<MonitoredResourceProperty>>,
    pub time_created: Option<DateTime<Utc>>,
    pub time_updated: Option<DateTime<Utc>>,
    pub freeform_tags: Option<HashMap<String, String>>,
    pub defined_tags: Option<HashMap<String, HashMap<String, Value>>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct CreateMonitoredResourceDetails {
    pub name: String,
    pub display_name: Option<String>,
    #[wire(rename = "type")]
    pub resource_type: String,
    pub compartment_id: String,
    pub host_name: Option<String>,
    pub external_id: Option<String>,
    pub management_agent_id: Option<String>,
    pub resource_time_zone: Option<String>,
    pub properties: Option<Vec<MonitoredResourceProperty>>,
    pub freeform_tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequestResource {
    pub entity_type: String,
    #[wire(policy = "lenient")]
    pub action_type: ActionType,
    pub identifier: String,
    pub entity_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequest {
    pub id: String,
    #[wire(policy = "lenient")]
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub compartment_id: String,
    pub resources: Vec<WorkRequestResource>,
    pub percent_complete: f64,
    pub time_accepted: DateTime<Utc>,
    pub time_started: Option<DateTime<Utc>>,
    pub time_finished: Option<DateTime<Utc>>,
}
