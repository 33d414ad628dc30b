// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seeding an element offset from attributes or layout.

use core::fmt;

use alloc::string::{String, ToString};
use kurbo::{Point, Vec2};

/// Axis of an offset component.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// An offset attribute that is not a finite number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetParseError {
    /// Axis of the offending attribute.
    pub axis: Axis,
    /// The attribute value as written.
    pub value: String,
}

impl fmt::Display for OffsetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.axis {
            Axis::X => "x",
            Axis::Y => "y",
        };
        write!(f, "invalid {name} offset attribute {:?}", self.value)
    }
}

impl core::error::Error for OffsetParseError {}

/// Parse one offset attribute.
///
/// A missing or blank value is `0`. Surrounding whitespace and a trailing
/// `px` unit are accepted.
///
/// ```
/// use understory_drag::offset::{Axis, parse_axis};
///
/// assert_eq!(parse_axis(Axis::X, None), Ok(0.0));
/// assert_eq!(parse_axis(Axis::X, Some(" 12.5px ")), Ok(12.5));
/// assert!(parse_axis(Axis::Y, Some("left")).is_err());
/// ```
pub fn parse_axis(axis: Axis, value: Option<&str>) -> Result<f64, OffsetParseError> {
    let Some(raw) = value else {
        return Ok(0.0);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(OffsetParseError {
            axis,
            value: raw.to_string(),
        }),
    }
}

/// Parse an offset from `x`/`y` attribute values.
pub fn offset_from_attributes(x: Option<&str>, y: Option<&str>) -> Result<Vec2, OffsetParseError> {
    Ok(Vec2::new(parse_axis(Axis::X, x)?, parse_axis(Axis::Y, y)?))
}

/// Offset of an element whose untranslated origin is `rest` and whose
/// measured origin is `current`.
pub fn offset_from_layout(rest: Point, current: Point) -> Vec2 {
    current - rest
}
