// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to [`DragTracker`] calls.
//!
//! The host routes a `Down` to the tracker only when it lands on the draggable
//! element; `Move`, `Up` and `Cancel` should be forwarded regardless of the
//! hit target, like document-level listeners. The tracker captures the
//! pointer that started the drag and ignores every other pointer until it
//! is released. A drag started with [`DragTracker::pointer_down`] captures
//! the first pointer that reports a move, release or cancel.

use ui_events::pointer::{PointerEvent, PointerId, PointerUpdate};

use crate::tracker::{DragTracker, DragUpdate};

impl DragTracker {
    /// Feed a pointer event to the tracker.
    ///
    /// `Enter`, `Leave`, `Scroll` and `Gesture` events are ignored.
    pub fn handle(&mut self, event: &PointerEvent) -> DragUpdate {
        match event {
            PointerEvent::Down(e) => {
                if self.is_dragging() || !self.config().accepts(e.button) {
                    return DragUpdate::Ignored;
                }
                self.pointer = e.pointer.pointer_id;
                self.captured = true;
                self.pointer_down(e.state.logical_point())
            }
            PointerEvent::Move(PointerUpdate {
                pointer, current, ..
            }) => {
                if !self.owns(pointer.pointer_id) {
                    return DragUpdate::Ignored;
                }
                self.pointer_move(current.logical_point())
            }
            PointerEvent::Up(e) => {
                if !self.owns(e.pointer.pointer_id) {
                    return DragUpdate::Ignored;
                }
                self.pointer_up(e.state.logical_point())
            }
            PointerEvent::Cancel(info) => {
                if !self.owns(info.pointer_id) {
                    return DragUpdate::Ignored;
                }
                self.cancel()
            }
            PointerEvent::Enter(_)
            | PointerEvent::Leave(_)
            | PointerEvent::Scroll(_)
            | PointerEvent::Gesture(_) => DragUpdate::Ignored,
        }
    }

    fn owns(&mut self, pointer_id: Option<PointerId>) -> bool {
        if !self.is_dragging() {
            return false;
        }
        if !self.captured {
            self.pointer = pointer_id;
            self.captured = true;
        }
        self.pointer == pointer_id
    }
}
