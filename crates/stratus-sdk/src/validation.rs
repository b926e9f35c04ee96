// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Parameter checks run before a request is built.

use std::fmt::Display;

use crate::enums::WireEnum;
use crate::error::{Result, SdkError};

/// A required string parameter must be present and not blank.
pub fn require_non_blank<'a>(operation: &str, parameter: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(SdkError::missing_parameter(operation, parameter));
    }
    Ok(value)
}

/// A required parameter of any type must be present.
pub fn require_present<'a, T>(operation: &str, parameter: &str, value: Option<&'a T>) -> Result<&'a T> {
    value.ok_or_else(|| SdkError::missing_parameter(operation, parameter))
}

/// The value must be one of `allowed` (exact, case-sensitive match).
pub fn require_allowed(
    operation: &str,
    parameter: &str,
    value: &str,
    allowed: &[&str],
) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(SdkError::invalid_parameter(
        operation,
        parameter,
        format!("`{}` is not one of: {}", value, allowed.join(", ")),
    ))
}

/// An optional enum filter, when set, must hold a known value. Rejects
/// `UnknownValue` before it reaches the query string.
pub fn require_known<E: WireEnum>(operation: &str, parameter: &str, value: Option<&E>) -> Result<()> {
    match value {
        Some(value) => require_allowed(operation, parameter, value.as_wire(), E::VALUES),
        None => Ok(()),
    }
}

/// The value must lie within `min..=max`.
pub fn require_in_range<T>(operation: &str, parameter: &str, value: T, min: T, max: T) -> Result<T>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(SdkError::invalid_parameter(
            operation,
            parameter,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(value)
}
