// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the transient state alive between pointer-down and pointer-up.
//!
//! ## Usage
//!
//! 1) Create a session with [`DragSession::new`] from the pointer-down position and the
//!    element's offset at that moment.
//! 2) On each move event, call [`DragSession::advance`] to get the movement delta since the last update.
//! 3) Optionally call [`DragSession::total_delta`] to get the cumulative pointer travel from the origin.
//! 4) Drop the session when the pointer is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag::session::DragSession;
//!
//! // Pointer pressed at (10, 20) on an element already translated by (100, 0).
//! let mut session = DragSession::new(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(!session.has_moved());
//!
//! // Move to (15, 25) - delta is (5, 5)
//! let delta = session.advance(Point::new(15.0, 25.0));
//! assert_eq!(delta, Vec2::new(5.0, 5.0));
//!
//! // Total travel from the origin is also (5, 5)
//! assert_eq!(session.total_delta(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position when the drag began.
    pub origin: Point,
    /// Last recorded pointer position during the drag.
    pub last: Point,
    /// Element offset when the drag began.
    pub base_offset: Vec2,
    moved: bool,
}

impl DragSession {
    /// Start a session at `origin` for an element currently translated by `base_offset`.
    pub fn new(origin: Point, base_offset: Vec2) -> Self {
        Self {
            origin,
            last: origin,
            base_offset,
            moved: false,
        }
    }

    /// Record a new pointer position, returning the movement delta since the last one.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        self.moved = true;
        delta
    }

    /// Pointer travel from the drag origin to `pos`.
    pub fn total_delta(&self, pos: Point) -> Vec2 {
        pos - self.origin
    }

    /// Returns `true` once [`advance`](Self::advance) has been called.
    pub fn has_moved(&self) -> bool {
        self.moved
    }
}
