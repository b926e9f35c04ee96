// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Optimizer models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use stratus_sdk::{WireEnum, WireModel};

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum Importance {
    #[wire(value = "CRITICAL")]
    Critical,
    #[wire(value = "HIGH")]
    High,
    #[wire(value = "MODERATE")]
    Moderate,
    #[wire(value = "LOW")]
    Low,
    #[wire(value = "MINOR")]
    Minor,
    #[wire(unknown)]
    UnknownValue(String),
}

/// Status of a recommendation or of the resources it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum Status {
    #[wire(value = "PENDING")]
    Pending,
    #[wire(value = "DISMISSED")]
    Dismissed,
    #[wire(value = "POSTPONED")]
    Postponed,
    #[wire(value = "IMPLEMENTED")]
    Implemented,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum LifecycleState {
    #[wire(value = "ACTIVE")]
    Active,
    #[wire(value = "FAILED")]
    Failed,
    #[wire(value = "INACTIVE")]
    Inactive,
    #[wire(value = "ATTACHING")]
    Attaching,
    #[wire(value = "DETACHING")]
    Detaching,
    #[wire(value = "DELETING")]
    Deleting,
    #[wire(value = "DELETED")]
    Deleted,
    #[wire(value = "UPDATING")]
    Updating,
    #[wire(value = "CREATING")]
    Creating,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum WorkRequestStatus {
    #[wire(value = "ACCEPTED")]
    Accepted,
    #[wire(value = "IN_PROGRESS")]
    InProgress,
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

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum OperationType {
    #[wire(value = "BULK_APPLY_RECOMMENDATIONS")]
    BulkApplyRecommendations,
    #[wire(value = "CREATE_PROFILE")]
    CreateProfile,
    #[wire(value = "DELETE_PROFILE")]
    DeleteProfile,
    #[wire(value = "UPDATE_PROFILE")]
    UpdateProfile,
    #[wire(value = "CREATE_PROFILE_LEVEL")]
    CreateProfileLevel,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct ResourceCount {
    pub status: Status,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct SupportedLevel {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct SupportedLevels {
    pub items: Option<Vec<SupportedLevel>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct Recommendation {
    pub id: String,
    pub compartment_id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub importance: Importance,
    pub resource_counts: Vec<ResourceCount>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: LifecycleState,
    pub estimated_cost_saving: f64,
    pub status: Status,
    pub supported_levels: Option<SupportedLevels>,
    pub time_status_begin: Option<DateTime<Utc>>,
    pub time_status_end: Option<DateTime<Utc>>,
    pub time_created: Option<DateTime<Utc>>,
    pub time_updated: Option<DateTime<Utc>>,
    pub extended_metadata: Option<HashMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RecommendationSummary {
    pub id: String,
    pub compartment_id: String,
    pub category_id: String,
    pub name: String,
    pub importance: Importance,
    pub resource_counts: Vec<ResourceCount>,
    #[wire(policy = "lenient")]
    pub lifecycle_state: LifecycleState,
    pub estimated_cost_saving: f64,
    pub status: Status,
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct RecommendationCollection {
    pub items: Vec<RecommendationSummary>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct UpdateRecommendationDetails {
    pub status: Status,
    pub time_status_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequestResource {
    pub entity_type: String,
    pub action_type: String,
    pub identifier: String,
    pub entity_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequest {
    pub id: String,
    #[wire(policy = "lenient")]
    pub operation_type: OperationType,
    pub status: WorkRequestStatus,
    pub compartment_id: String,
    pub resources: Vec<WorkRequestResource>,
    pub percent_complete: f64,
    pub time_accepted: DateTime<Utc>,
    pub time_started: Option<DateTime<Utc>>,
    pub time_finished: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stratus_sdk::{Model, SdkError};

    fn recommendation(importance: &str, status: &str, lifecycle: &str) -> Value {
        json!({
            "id": "ocid1.optimizerrecommendation..r1",
            "compartmentId": "ocid1.tenancy..t",
            "categoryId": "ocid1.optimizercategory..c",
            "name": "cost-management-compute-host-underutilized-name",
            "description": "Underutilized hosts",
            "importance": importance,
            "resourceCounts": [{"status": "PENDING", "count": 3}],
            "lifecycleState": lifecycle,
            "estimatedCostSaving": 12.5,
            "status": status
        })
    }

    #[test]
    fn test_lifecycle_state_is_lenient() {
        let rec = Recommendation::from_json(&recommendation("HIGH", "PENDING", "HIBERNATING"))
            .unwrap();
        assert_eq!(
            rec.lifecycle_state,
            LifecycleState::UnknownValue("HIBERNATING".to_string())
        );
        assert_eq!(rec.importance, Importance::High);
        assert_eq!(rec.resource_counts[0].count, 3);
    }

    #[test]
    fn test_importance_and_status_are_strict() {
        let err = Recommendation::from_json(&recommendation("URGENT", "PENDING", "ACTIVE"))
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidEnumValue { ref field, .. } if field == "importance"));

        let err = Recommendation::from_json(&recommendation("HIGH", "SNOOZED", "ACTIVE"))
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidEnumValue { ref field, .. } if field == "status"));
    }

    #[test]
    fn test_update_details_are_sparse() {
        let details = UpdateRecommendationDetails {
            status: Status::Postponed,
            time_status_end: None,
        };
        assert_eq!(details.to_json(), json!({"status": "POSTPONED"}));
    }
}
