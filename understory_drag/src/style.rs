// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style mutations produced by a drag.
//!
//! The tracker does not touch any element. [`style_ops`] maps a [`DragUpdate`]
//! to the [`StyleOp`]s a host should apply, and [`Translate3d`] renders the CSS
//! transform value.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_drag::style::{StyleOp, Translate3d, style_ops};
//! use understory_drag::{DragConfig, DragUpdate};
//!
//! let update = DragUpdate::Moved {
//!     delta: Vec2::new(2.0, 0.0),
//!     offset: Vec2::new(12.5, -3.0),
//!     first: true,
//! };
//! let ops = style_ops(&update, &DragConfig::default());
//! assert_eq!(ops.as_slice(), &[
//!     StyleOp::SetTransform(Vec2::new(12.5, -3.0)),
//!     StyleOp::SuppressSelection,
//! ]);
//!
//! let css = Translate3d(Vec2::new(12.5, -3.0)).to_string();
//! assert_eq!(css, "translate3d(12.5px, -3px, 0px)");
//! ```

use core::fmt;

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::config::DragConfig;
use crate::tracker::DragUpdate;

/// CSS property carrying the translation.
pub const TRANSFORM_PROPERTY: &str = "transform";
/// CSS property toggled while moving.
pub const USER_SELECT_PROPERTY: &str = "user-select";
/// Value of [`USER_SELECT_PROPERTY`] while moving.
pub const USER_SELECT_NONE: &str = "none";
/// Attribute mirroring the horizontal offset.
pub const X_ATTRIBUTE: &str = "x";
/// Attribute mirroring the vertical offset.
pub const Y_ATTRIBUTE: &str = "y";

/// A mutation of the dragged element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleOp {
    /// Set `transform` to [`Translate3d`] of the offset.
    SetTransform(Vec2),
    /// Set `user-select: none`.
    SuppressSelection,
    /// Remove the `user-select` property.
    RestoreSelection,
    /// Write the offset to the `x`/`y` attributes.
    SetPositionAttributes(Vec2),
}

/// Style mutations for `update` under `config`.
pub fn style_ops(update: &DragUpdate, config: &DragConfig) -> SmallVec<[StyleOp; 4]> {
    let mut ops = SmallVec::new();
    match *update {
        DragUpdate::Moved { offset, first, .. } => {
            ops.push(StyleOp::SetTransform(offset));
            if config.mirror_attributes {
                ops.push(StyleOp::SetPositionAttributes(offset));
            }
            if first && config.suppress_selection {
                ops.push(StyleOp::SuppressSelection);
            }
        }
        DragUpdate::Ended(_) => {
            if config.suppress_selection {
                ops.push(StyleOp::RestoreSelection);
            }
        }
        DragUpdate::Ignored | DragUpdate::Started { .. } => {}
    }
    ops
}

/// Style mutations that place the element at `offset` outside of a drag.
///
/// Used when attaching to an element with a seeded offset or when the offset
/// is replaced directly.
pub fn place_ops(offset: Vec2, config: &DragConfig) -> SmallVec<[StyleOp; 4]> {
    let mut ops = SmallVec::new();
    ops.push(StyleOp::SetTransform(offset));
    if config.mirror_attributes {
        ops.push(StyleOp::SetPositionAttributes(offset));
    }
    ops
}

/// Displays as a CSS `translate3d(...)` value in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Translate3d(pub Vec2);

impl fmt::Display for Translate3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate3d({}px, {}px, 0px)", self.0.x, self.0.y)
    }
}
