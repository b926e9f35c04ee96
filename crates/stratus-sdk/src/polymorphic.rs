// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Helpers for polymorphic model families.
//!
//! A family is a Rust enum with one variant per concrete subtype and one
//! variant for the base type. Its `from_payload` reads the discriminator,
//! decodes the matching subtype, and falls back to the base variant (with a
//! warning) when the discriminator is absent or unrecognized.
//!
//! ```ignore
//! fn from_payload(payload: &Payload) -> Result<Self> {
//!     match read_discriminator(payload, Self::NAME, "packageType", "package_type")? {
//!         Some("IMAGE") => ImagePublicationPackage::from_payload(payload).map(Self::Image),
//!         other => {
//!             warn_unknown_subtype(Self::NAME, other);
//!             BasePublicationPackage::from_payload(payload).map(Self::Base)
//!         }
//!     }
//! }
//! ```

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, SdkError};
use crate::model::{Payload, PayloadReader};

/// Read the discriminator under either of its names.
///
/// Returns `None` when the field is absent or null. A non-string value is an
/// [`SdkError::InvalidField`].
pub fn read_discriminator<'a>(
    payload: &'a Payload,
    model: &'static str,
    wire: &'static str,
    idiomatic: &'static str,
) -> Result<Option<&'a str>> {
    match PayloadReader::new(model, payload).lookup(wire, idiomatic)? {
        None => Ok(None),
        Some(Value::String(raw)) => Ok(Some(raw.as_str())),
        Some(_) => Err(SdkError::invalid_field(model, wire, "string")),
    }
}

/// Log that a family is falling back to its base variant.
pub fn warn_unknown_subtype(model: &str, discriminator: Option<&str>) {
    match discriminator {
        Some(value) => warn!(
            model,
            discriminator = value,
            "Unknown subtype, decoding as base type"
        ),
        None => warn!(model, "Missing discriminator, decoding as base type"),
    }
}
