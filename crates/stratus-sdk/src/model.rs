// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! The model contract shared by every request and response type.
//!
//! Models are plain structs. `#[derive(WireModel)]` generates the
//! field-by-field code that moves them to and from an untyped JSON object
//! (a [`Payload`]):
//!
//! - each field is read under its wire name (`displayName`) or its idiomatic
//!   name (`display_name`); supplying both is a [`SdkError::ConflictingAlias`]
//! - `null` is treated as absent
//! - `Option<T>` fields are optional, every other field is required
//! - output is sparse: `None` fields are left out instead of written as `null`
//!
//! # Example
//!
//! ```
//! use stratus_sdk::{Model, WireEnum, WireModel};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, WireEnum)]
//! pub enum Size {
//!     #[wire(value = "SMALL")]
//!     Small,
//!     #[wire(unknown)]
//!     UnknownValue(String),
//! }
//!
//! #[derive(Debug, Clone, PartialEq, WireModel)]
//! pub struct Parcel {
//!     pub id: String,
//!     pub display_name: Option<String>,
//!     #[wire(policy = "lenient")]
//!     pub size: Option<Size>,
//! }
//!
//! let wire = serde_json::json!({"id": "b1", "displayName": "crate", "size": "HUGE"});
//! let idiomatic = serde_json::json!({"id": "b1", "display_name": "crate", "size": "HUGE"});
//!
//! let a = Parcel::from_json(&wire).unwrap();
//! let b = Parcel::from_json(&idiomatic).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.size, Some(Size::UnknownValue("HUGE".into())));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::enums::EnumPolicy;
use crate::error::{Result, SdkError};

/// An untyped JSON object.
pub type Payload = Map<String, Value>;

/// Describes the field being decoded, for error messages and enum policy.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext {
    pub model: &'static str,
    /// Wire name of the field.
    pub field: &'static str,
    pub policy: EnumPolicy,
}

impl FieldContext {
    fn invalid(&self, expected: &str) -> SdkError {
        SdkError::invalid_field(self.model, self.field, expected)
    }
}

/// A value that can live in a model field.
pub trait WireValue: Sized {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self>;
    fn encode(&self) -> Value;
}

/// A request or response type with a wire representation.
pub trait Model: Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Build from an untyped payload, accepting wire or idiomatic keys.
    fn from_payload(payload: &Payload) -> Result<Self>;

    /// Sparse wire representation: only fields that are set appear.
    fn to_payload(&self) -> Payload;

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(payload) => Self::from_payload(payload),
            _ => Err(SdkError::invalid_field(Self::NAME, "<root>", "object")),
        }
    }

    fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }

    fn to_json(&self) -> Value {
        Value::Object(self.to_payload())
    }

    /// SHA-256 (hex) of the canonical wire form.
    ///
    /// Keys are sorted, so equal models always produce equal digests.
    fn digest(&self) -> String {
        let canonical = self.to_json().to_string();
        format!("{:x}", Sha256::digest(canonical.as_bytes()))
    }
}

/// Reads fields out of a payload on behalf of a generated `from_payload`.
pub struct PayloadReader<'a> {
    model: &'static str,
    payload: &'a Payload,
}

impl<'a> PayloadReader<'a> {
    pub fn new(model: &'static str, payload: &'a Payload) -> Self {
        Self { model, payload }
    }

    /// Resolve a field under either of its names.
    pub fn lookup(&self, wire: &'static str, idiomatic: &'static str) -> Result<Option<&'a Value>> {
        if wire != idiomatic
            && self.payload.contains_key(wire)
            && self.payload.contains_key(idiomatic)
        {
            return Err(SdkError::ConflictingAlias {
                model: self.model.to_string(),
                wire: wire.to_string(),
                idiomatic: idiomatic.to_string(),
            });
        }

        let value = self
            .payload
            .get(wire)
            .or_else(|| self.payload.get(idiomatic));
        Ok(value.filter(|v| !v.is_null()))
    }

    pub fn optional<T: WireValue>(
        &self,
        wire: &'static str,
        idiomatic: &'static str,
        policy: EnumPolicy,
    ) -> Result<Option<T>> {
        let ctx = FieldContext {
            model: self.model,
            field: wire,
            policy,
        };
        self.lookup(wire, idiomatic)?
            .map(|value| T::decode(value, &ctx))
            .transpose()
    }

    pub fn required<T: WireValue>(
        &self,
        wire: &'static str,
        idiomatic: &'static str,
        policy: EnumPolicy,
    ) -> Result<T> {
        self.optional(wire, idiomatic, policy)?
            .ok_or_else(|| SdkError::MissingField {
                model: self.model.to_string(),
                field: wire.to_string(),
            })
    }
}

/// Builds the sparse payload on behalf of a generated `to_payload`.
#[derive(Default)]
pub struct PayloadWriter {
    payload: Payload,
}

impl PayloadWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fields are never written as null: a value that encodes to null
    /// (a non-finite float) leaves the key out.
    pub fn put<T: WireValue>(&mut self, wire: &str, value: &T) {
        let encoded = value.encode();
        if !encoded.is_null() {
            self.payload.insert(wire.to_string(), encoded);
        }
    }

    pub fn put_optional<T: WireValue>(&mut self, wire: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.put(wire, value);
        }
    }

    pub fn finish(self) -> Payload {
        self.payload
    }
}

/// Decode a nested model field.
#[doc(hidden)]
pub fn decode_nested<M: Model>(value: &Value, ctx: &FieldContext) -> Result<M> {
    match value {
        Value::Object(payload) => M::from_payload(payload),
        _ => Err(ctx.invalid("object")),
    }
}

impl WireValue for String {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ctx.invalid("string"))
    }

    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireValue for bool {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value.as_bool().ok_or_else(|| ctx.invalid("boolean"))
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl WireValue for i64 {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value.as_i64().ok_or_else(|| ctx.invalid("integer"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for i32 {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| ctx.invalid("32-bit integer"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for u32 {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ctx.invalid("unsigned 32-bit integer"))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for f64 {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value.as_f64().ok_or_else(|| ctx.invalid("number"))
    }

    fn encode(&self) -> Value {
        // Non-finite floats have no JSON form; the writer drops the key.
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl WireValue for DateTime<Utc> {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        let raw = value.as_str().ok_or_else(|| ctx.invalid("RFC 3339 timestamp"))?;
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|_| ctx.invalid("RFC 3339 timestamp"))
    }

    fn encode(&self) -> Value {
        Value::String(self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }
}

impl WireValue for Value {
    fn decode(value: &Value, _ctx: &FieldContext) -> Result<Self> {
        Ok(value.clone())
    }

    fn encode(&self) -> Value {
        self.clone()
    }
}

impl<T: WireValue> WireValue for Vec<T> {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value
            .as_array()
            .ok_or_else(|| ctx.invalid("array"))?
            .iter()
            .map(|item| T::decode(item, ctx))
            .collect()
    }

    fn encode(&self) -> Value {
        Value::Array(self.iter().map(WireValue::encode).collect())
    }
}

impl<T: WireValue> WireValue for HashMap<String, T> {
    fn decode(value: &Value, ctx: &FieldContext) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| ctx.invalid("object"))?
            .iter()
            .map(|(k, v)| Ok((k.clone(), T::decode(v, ctx)?)))
            .collect()
    }

    fn encode(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.encode()))
                .collect(),
        )
    }
}
