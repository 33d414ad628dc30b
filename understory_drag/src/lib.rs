// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: headless drag tracking for a single UI element.
//!
//! This crate tracks pointer-down/move/up and turns the pointer travel into a
//! cumulative element offset. It does not own any element, scene graph or
//! event loop. Callers are expected to:
//! - Route a pointer-down that lands on the draggable element to the tracker.
//! - Forward subsequent move/up/cancel events regardless of hit target.
//! - Apply the resulting [`StyleOp`](style::StyleOp)s to their element.
//!
//! The pieces:
//!
//! - [`DragTracker`]: the offset bookkeeping, fed either raw positions or
//!   `ui-events` [`PointerEvent`](ui_events::pointer::PointerEvent)s.
//! - [`session::DragSession`]: transient state between pointer-down and pointer-up.
//! - [`style`]: the CSS transform and selection mutations a drag produces.
//! - [`offset`]: seeding an offset from `x`/`y` attributes or a layout box.
//! - [`DragConfig`]: offset mode, accepted button and style options.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_drag::style::{StyleOp, style_ops};
//! use understory_drag::{DragConfig, DragTracker, DragUpdate};
//!
//! let config = DragConfig::default();
//! let mut tracker = DragTracker::new(config);
//!
//! tracker.pointer_down(Point::new(10.0, 10.0));
//!
//! // Moving the pointer by (dx, dy) moves the element by (dx, dy).
//! let update = tracker.pointer_move(Point::new(15.0, 12.0));
//! assert_eq!(tracker.offset(), Vec2::new(5.0, 2.0));
//! assert_eq!(
//!     style_ops(&update, &config).first(),
//!     Some(&StyleOp::SetTransform(Vec2::new(5.0, 2.0)))
//! );
//!
//! // Release stops further movement.
//! tracker.pointer_up(Point::new(15.0, 12.0));
//! assert_eq!(tracker.pointer_move(Point::new(50.0, 50.0)), DragUpdate::Ignored);
//! ```
//!
//! ## Offset modes
//!
//! - [`OffsetMode::Incremental`] adds each move's delta to the offset.
//! - [`OffsetMode::Absolute`] recomputes the offset from the drag's base
//!   offset and total pointer travel on every move.
//!
//! Both move the element by exactly the pointer delta; they differ only in
//! how rounding error behaves over long drags.
//!
//! ## Logging
//!
//! Drag start and end are logged at `debug`, moves at `trace`, through the
//! `log` facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod offset;
mod pointer;
pub mod session;
pub mod style;
pub mod tracker;

pub use config::{DragConfig, OffsetMode};
pub use tracker::{DragEnd, DragTracker, DragUpdate};
