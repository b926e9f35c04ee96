// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Marketplace publisher models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use stratus_sdk::model::{FieldContext, Payload, WireValue, decode_nested};
use stratus_sdk::polymorphic::{read_discriminator, warn_unknown_subtype};
use stratus_sdk::{Model, Result, WireEnum, WireModel};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum ListingType {
    #[wire(value = "OCI")]
    Oci,
    #[wire(value = "LEAD_GENERATION")]
    LeadGeneration,
    #[wire(value = "PRIVATE")]
    Private,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum PackageType {
    #[wire(value = "IMAGE")]
    Image,
    #[wire(value = "ORCHESTRATION")]
    Orchestration,
    #[wire(unknown)]
    UnknownValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum PublicationLifecycleState {
    #[wire(value = "CREATING")]
    Creating,
    #[wire(value = "ACTIVE")]
    Active,
    #[wire(value = "UPDATING")]
    Updating,
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
pub enum WorkRequestStatus {
    #[wire(value = "ACCEPTED")]
    Accepted,
    #[wire(value = "IN_PROGRESS")]
    InProgress,
    #[wire(value = "WAITING")]
    Waiting,
    #[wire(value = "NEEDS_ATTENTION")]
    NeedsAttention,
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

impl WorkRequestStatus {
    /// Statuses after which the work request no longer changes.
    pub const TERMINAL: &'static [WorkRequestStatus] = &[
        WorkRequestStatus::Succeeded,
        WorkRequestStatus::Failed,
        WorkRequestStatus::Canceled,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
pub enum OperationType {
    #[wire(value = "CREATE_PUBLICATION")]
    CreatePublication,
    #[wire(value = "UPDATE_PUBLICATION")]
    UpdatePublication,
    #[wire(value = "DELETE_PUBLICATION")]
    DeletePublication,
    #[wire(value = "PUBLISH_PUBLICATION")]
    PublishPublication,
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

// ============================================================================
// Publications
// ============================================================================

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct SupportContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct OperatingSystem {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct Publication {
    pub id: String,
    pub compartment_id: String,
    pub listing_type: ListingType,
    pub name: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    #[wire(policy = "lenient")]
    pub lifecycle_state: PublicationLifecycleState,
    pub support_contacts: Option<Vec<SupportContact>>,
    pub supported_operating_systems: Option<Vec<OperatingSystem>>,
    pub time_created: DateTime<Utc>,
    pub time_updated: Option<DateTime<Utc>>,
    pub freeform_tags: Option<HashMap<String, String>>,
    pub defined_tags: Option<HashMap<String, HashMap<String, Value>>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct PublicationSummary {
    pub id: String,
    pub compartment_id: String,
    pub listing_type: ListingType,
    pub name: String,
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    #[wire(policy = "lenient")]
    pub lifecycle_state: PublicationLifecycleState,
    pub time_created: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct PublicationCollection {
    pub items: Vec<PublicationSummary>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct CreatePublicationDetails {
    pub compartment_id: String,
    pub listing_type: ListingType,
    pub name: String,
    pub short_description: String,
    pub long_description: Option<String>,
    pub support_contacts: Vec<SupportContact>,
    pub package_details: CreatePublicationPackage,
    pub is_agreement_acknowledged: bool,
    pub freeform_tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, WireModel)]
pub struct UpdatePublicationDetails {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub support_contacts: Option<Vec<SupportContact>>,
    pub freeform_tags: Option<HashMap<String, String>>,
}

// ============================================================================
// Publication packages
// ============================================================================

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct BasePublicationPackage {
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub listing_id: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<String>,
    pub operating_system: Option<OperatingSystem>,
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct ImagePublicationPackage {
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub listing_id: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<String>,
    pub operating_system: Option<OperatingSystem>,
    pub time_created: Option<DateTime<Utc>>,
    pub app_catalog_listing_id: Option<String>,
    pub app_catalog_listing_resource_version: Option<String>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct OrchestrationVariable {
    pub name: String,
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub is_mandatory: Option<bool>,
    pub hint_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct OrchestrationPublicationPackage {
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub listing_id: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<String>,
    pub operating_system: Option<OperatingSystem>,
    pub time_created: Option<DateTime<Utc>>,
    pub resource_link: Option<String>,
    pub variables: Option<Vec<OrchestrationVariable>>,
}

/// A publication package, resolved by its `packageType`.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicationPackage {
    Image(ImagePublicationPackage),
    Orchestration(OrchestrationPublicationPackage),
    /// Unrecognized or missing `packageType`. A `Base` holding `IMAGE` or
    /// `ORCHESTRATION` encodes under that type and decodes as the subtype;
    /// build packages through `From<BasePublicationPackage>` to get the
    /// subtype variant up front.
    Base(BasePublicationPackage),
}

impl From<BasePublicationPackage> for PublicationPackage {
    /// Promote a base package whose type is known to its subtype variant.
    fn from(base: BasePublicationPackage) -> Self {
        match base.package_type {
            PackageType::Image => Self::Image(ImagePublicationPackage {
                package_type: base.package_type,
                listing_id: base.listing_id,
                version: base.version,
                description: base.description,
                resource_id: base.resource_id,
                operating_system: base.operating_system,
                time_created: base.time_created,
                app_catalog_listing_id: None,
                app_catalog_listing_resource_version: None,
                image_id: None,
            }),
            PackageType::Orchestration => Self::Orchestration(OrchestrationPublicationPackage {
                package_type: base.package_type,
                listing_id: base.listing_id,
                version: base.version,
                description: base.description,
                resource_id: base.resource_id,
                operating_system: base.operating_system,
                time_created: base.time_created,
                resource_link: None,
                variables: None,
            }),
            _ => Self::Base(base),
        }
    }
}

impl PublicationPackage {
    pub fn package_type(&self) -> &PackageType {
        match self {
            Self::Image(p) => &p.package_type,
            Self::Orchestration(p) => &p.package_type,
            Self::Base(p) => &p.package_type,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Image(p) => p.version.as_deref(),
            Self::Orchestration(p) => p.version.as_deref(),
            Self::Base(p) => p.version.as_deref(),
        }
    }

    pub fn listing_id(&self) -> Option<&str> {
        match self {
            Self::Image(p) => p.listing_id.as_deref(),
            Self::Orchestration(p) => p.listing_id.as_deref(),
            Self::Base(p) => p.listing_id.as_deref(),
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, Self::Base(_))
    }
}

impl Model for PublicationPackage {
    const NAME: &'static str = "PublicationPackage";

    fn from_payload(payload: &Payload) -> Result<Self> {
        match read_discriminator(payload, Self::NAME, "packageType", "package_type")? {
            Some("IMAGE") => ImagePublicationPackage::from_payload(payload).map(Self::Image),
            Some("ORCHESTRATION") => {
                OrchestrationPublicationPackage::from_payload(payload).map(Self::Orchestration)
            }
            other => {
                warn_unknown_subtype(Self::NAME, other);
                BasePublicationPackage::from_payload(payload).map(Self::Base)
            }
        }
    }

    fn to_payload(&self) -> Payload {
        match self {
            Self::Image(p) => with_discriminator(p.to_payload(), &PackageType::Image),
            Self::Orchestration(p) => {
                with_discriminator(p.to_payload(), &PackageType::Orchestration)
            }
            Self::Base(p) => p.to_payload(),
        }
    }
}

impl WireValue for PublicationPackage {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        decode_nested(value, ctx)
    }

    fn encode(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct PublicationPackageSummary {
    pub listing_id: String,
    pub package_version: String,
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub resource_id: Option<String>,
    pub time_created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct PublicationPackageCollection {
    pub items: Vec<PublicationPackageSummary>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct Eula {
    pub eula_type: String,
    pub license_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct CreateImagePublicationPackage {
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub package_version: String,
    pub operating_system: OperatingSystem,
    pub image_id: String,
    pub eula: Option<Vec<Eula>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct BaseCreatePublicationPackage {
    #[wire(policy = "lenient")]
    pub package_type: PackageType,
    pub package_version: String,
    pub operating_system: Option<OperatingSystem>,
    pub eula: Option<Vec<Eula>>,
}

/// Package details supplied when creating a publication.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatePublicationPackage {
    Image(CreateImagePublicationPackage),
    /// Any type other than `IMAGE`. An `IMAGE` base carries no `imageId`,
    /// so it encodes but will not decode back.
    Base(BaseCreatePublicationPackage),
}

impl Model for CreatePublicationPackage {
    const NAME: &'static str = "CreatePublicationPackage";

    fn from_payload(payload: &Payload) -> Result<Self> {
        match read_discriminator(payload, Self::NAME, "packageType", "package_type")? {
            Some("IMAGE") => CreateImagePublicationPackage::from_payload(payload).map(Self::Image),
            other => {
                warn_unknown_subtype(Self::NAME, other);
                BaseCreatePublicationPackage::from_payload(payload).map(Self::Base)
            }
        }
    }

    fn to_payload(&self) -> Payload {
        match self {
            Self::Image(p) => with_discriminator(p.to_payload(), &PackageType::Image),
            Self::Base(p) => p.to_payload(),
        }
    }
}

impl WireValue for CreatePublicationPackage {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        decode_nested(value, ctx)
    }

    fn encode(&self) -> Value {
        Value::Object(self.to_payload())
    }
}

/// Subtype variants always carry their own discriminator.
fn with_discriminator(mut payload: Payload, package_type: &PackageType) -> Payload {
    payload.insert(
        "packageType".to_string(),
        Value::String(package_type.as_wire().to_string()),
    );
    payload
}

// ============================================================================
// Work requests
// ============================================================================

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
    pub status: WorkRequestStatus,
    pub compartment_id: String,
    pub resources: Vec<WorkRequestResource>,
    pub percent_complete: f64,
    pub time_accepted: DateTime<Utc>,
    pub time_started: Option<DateTime<Utc>>,
    pub time_finished: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequestSummary {
    pub id: String,
    #[wire(policy = "lenient")]
    pub operation_type: OperationType,
    pub status: WorkRequestStatus,
    pub compartment_id: String,
    pub percent_complete: f64,
    pub time_accepted: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, WireModel)]
pub struct WorkRequestSummaryCollection {
    pub items: Vec<WorkRequestSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_details_nest_the_package() {
        let details = CreatePublicationDetails {
            compartment_id: "c1".to_string(),
            listing_type: ListingType::Oci,
            name: "My App".to_string(),
            short_description: "short".to_string(),
            long_description: None,
            support_contacts: vec![],
            package_details: CreatePublicationPackage::Image(CreateImagePublicationPackage {
                package_type: PackageType::UnknownValue("WRONG".into()),
                package_version: "1.0".to_string(),
                operating_system: OperatingSystem {
                    name: Some("Linux".to_string()),
                },
                image_id: "ocid1.image..i".to_string(),
                eula: None,
            }),
            is_agreement_acknowledged: true,
            freeform_tags: None,
        };

        let wire = details.to_json();
        assert_eq!(
            wire["packageDetails"],
            json!({
                "packageType": "IMAGE",
                "packageVersion": "1.0",
                "operatingSystem": {"name": "Linux"},
                "imageId": "ocid1.image..i"
            })
        );
        assert_eq!(wire["listingType"], json!("OCI"));
        assert_eq!(wire["supportContacts"], json!([]));

        let decoded = CreatePublicationDetails::from_json(&wire).unwrap();
        assert!(matches!(
            decoded.package_details,
            CreatePublicationPackage::Image(ref p) if p.package_type == PackageType::Image
        ));
    }

    #[test]
    fn test_strict_listing_type() {
        let err = PublicationSummary::from_json(&json!({
            "id": "p1",
            "compartmentId": "c1",
            "listingType": "SOMETHING_NEW",
            "name": "n",
            "packageType": "IMAGE",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2024-01-01T00:00:00Z"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("listingType"));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(WorkRequestStatus::TERMINAL.contains(&WorkRequestStatus::Succeeded));
        assert!(!WorkRequestStatus::TERMINAL.contains(&WorkRequestStatus::InProgress));
    }
}
