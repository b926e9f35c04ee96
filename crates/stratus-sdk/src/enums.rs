// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire enums with a per-field policy for values outside the known set.
//!
//! Every generated enum is a closed set of variants plus one
//! `UnknownValue(String)` variant that keeps the raw value. Whether an
//! unrecognized value is accepted into that variant or rejected is decided by
//! the field that holds the enum, not by the enum itself: the same enum can be
//! strict in one model and lenient in another.

use tracing::debug;

use crate::error::{Result, SdkError};
use crate::model::FieldContext;

/// What to do with a value outside an enum's known set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnumPolicy {
    /// Fail with [`SdkError::InvalidEnumValue`].
    #[default]
    Strict,
    /// Keep the raw value in the enum's `UnknownValue` variant.
    Lenient,
}

/// Implemented by `#[derive(WireEnum)]`.
pub trait WireEnum: Sized {
    /// Known wire values in declaration order.
    const VALUES: &'static [&'static str];

    /// The wire representation (the raw value for `UnknownValue`).
    fn as_wire(&self) -> &str;

    /// Parse a known value. Matching is exact and case-sensitive.
    fn from_known(raw: &str) -> Option<Self>;

    /// Wrap an unrecognized value.
    fn unknown(raw: String) -> Self;

    fn is_unknown(&self) -> bool;
}

/// Decode `raw` for the field described by `ctx`, applying its policy.
pub fn decode_enum<E: WireEnum>(raw: &str, ctx: &FieldContext) -> Result<E> {
    if let Some(value) = E::from_known(raw) {
        return Ok(value);
    }

    match ctx.policy {
        EnumPolicy::Strict => Err(SdkError::InvalidEnumValue {
            model: ctx.model.to_string(),
            field: ctx.field.to_string(),
            value: raw.to_string(),
            allowed: E::VALUES.join(", "),
        }),
        EnumPolicy::Lenient => {
            debug!(
                model = ctx.model,
                field = ctx.field,
                value = raw,
                "unrecognized enum value kept as UnknownValue"
            );
            Ok(E::unknown(raw.to_string()))
        }
    }
}

/// Decode a JSON value holding an enum. Used by the generated `WireValue` impls.
#[doc(hidden)]
pub fn decode_enum_value<E: WireEnum>(value: &serde_json::Value, ctx: &FieldContext) -> Result<E> {
    match value.as_str() {
        Some(raw) => decode_enum(raw, ctx),
        None => Err(SdkError::invalid_field(ctx.model, ctx.field, "string")),
    }
}

/// Parse a value supplied by a caller (an operation parameter), strictly.
pub fn parse_enum<E: WireEnum>(operation: &str, parameter: &str, raw: &str) -> Result<E> {
    E::from_known(raw).ok_or_else(|| {
        SdkError::invalid_parameter(
            operation,
            parameter,
            format!("`{}` is not one of: {}", raw, E::VALUES.join(", ")),
        )
    })
}

/// Strict parse used by the generated `FromStr` impls.
#[doc(hidden)]
pub fn from_str_strict<E: WireEnum>(type_name: &str, raw: &str) -> Result<E> {
    E::from_known(raw).ok_or_else(|| SdkError::InvalidEnumValue {
        model: type_name.to_string(),
        field: "value".to_string(),
        value: raw.to_string(),
        allowed: E::VALUES.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WireEnum;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, WireEnum)]
    enum Color {
        #[wire(value = "RED")]
        Red,
        #[wire(value = "GREEN")]
        Green,
        #[wire(unknown)]
        UnknownValue(String),
    }

    fn ctx(policy: EnumPolicy) -> FieldContext {
        FieldContext {
            model: "Paint",
            field: "color",
            policy,
        }
    }

    #[test]
    fn test_known_values_decode_under_both_policies() {
        assert_eq!(
            decode_enum::<Color>("RED", &ctx(EnumPolicy::Strict)).unwrap(),
            Color::Red
        );
        assert_eq!(
            decode_enum::<Color>("GREEN", &ctx(EnumPolicy::Lenient)).unwrap(),
            Color::Green
        );
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let err = decode_enum::<Color>("BLUE", &ctx(EnumPolicy::Strict)).unwrap_err();
        match err {
            SdkError::InvalidEnumValue {
                model,
                field,
                value,
                allowed,
            } => {
                assert_eq!(model, "Paint");
                assert_eq!(field, "color");
                assert_eq!(value, "BLUE");
                assert_eq!(allowed, "RED, GREEN");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_keeps_raw_value() {
        let value = decode_enum::<Color>("BLUE", &ctx(EnumPolicy::Lenient)).unwrap();
        assert_eq!(value, Color::UnknownValue("BLUE".to_string()));
        assert!(value.is_unknown());
        assert_eq!(value.as_wire(), "BLUE");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(Color::from_known("red").is_none());
    }

    #[test]
    fn test_parse_enum_names_parameter() {
        let err = parse_enum::<Color>("list_paints", "color", "blue").unwrap_err();
        assert!(err.to_string().contains("color"));
        assert!(err.to_string().contains("list_paints"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Color::Green.to_string(), "GREEN");
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert!("PURPLE".parse::<Color>().is_err());
    }
}
