// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag tracker: turns pointer-down/move/up into element offsets.

use kurbo::{Point, Vec2};
use log::{debug, trace};
use ui_events::pointer::PointerId;

use crate::config::{DragConfig, OffsetMode};
use crate::session::DragSession;

/// Result of feeding one pointer event to a [`DragTracker`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// The event did not affect the drag.
    Ignored,
    /// A drag began at `origin`.
    Started {
        /// Pointer position of the press.
        origin: Point,
    },
    /// The element moved.
    Moved {
        /// Pointer delta since the previous position.
        delta: Vec2,
        /// New element offset.
        offset: Vec2,
        /// `true` for the first move of the session.
        first: bool,
    },
    /// The drag finished.
    Ended(DragEnd),
}

/// Summary of a finished drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragEnd {
    /// Element offset after the drag.
    pub offset: Vec2,
    /// Pointer position at release.
    pub at: Point,
    /// `true` if the drag was cancelled rather than released.
    pub cancelled: bool,
}

impl DragUpdate {
    /// Returns `true` unless this is [`DragUpdate::Ignored`].
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Tracks the cumulative offset of one draggable element.
///
/// The offset persists across drags; the [`DragSession`] only lives between
/// pointer-down and pointer-up.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use understory_drag::{DragConfig, DragTracker, DragUpdate};
///
/// let mut tracker = DragTracker::new(DragConfig::default());
/// tracker.pointer_down(Point::new(10.0, 10.0));
/// tracker.pointer_move(Point::new(25.0, 5.0));
/// assert_eq!(tracker.offset(), Vec2::new(15.0, -5.0));
///
/// tracker.pointer_up(Point::new(25.0, 5.0));
/// // Released: further moves do nothing.
/// assert_eq!(tracker.pointer_move(Point::new(90.0, 90.0)), DragUpdate::Ignored);
/// assert_eq!(tracker.offset(), Vec2::new(15.0, -5.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    config: DragConfig,
    offset: Vec2,
    session: Option<DragSession>,
    /// Pointer that owns the active drag, set by the `ui-events` adapter.
    pub(crate) pointer: Option<PointerId>,
    /// Whether `pointer` has been assigned for the active drag.
    pub(crate) captured: bool,
}

impl DragTracker {
    /// Create a tracker for an element at its untranslated position.
    pub fn new(config: DragConfig) -> Self {
        Self::with_offset(config, Vec2::ZERO)
    }

    /// Create a tracker for an element already translated by `offset`.
    pub fn with_offset(config: DragConfig, offset: Vec2) -> Self {
        Self {
            config,
            offset,
            session: None,
            pointer: None,
            captured: false,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current element offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Replace the element offset.
    ///
    /// During a drag this also rebases the session, so the next move continues
    /// from `offset` in both modes.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        if let Some(session) = &mut self.session {
            session.base_offset = offset - session.total_delta(session.last);
        }
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Begin a drag at `pos`. Ignored if a drag is already active.
    pub fn pointer_down(&mut self, pos: Point) -> DragUpdate {
        if self.session.is_some() {
            return DragUpdate::Ignored;
        }
        debug!("drag start at {pos:?} with offset {:?}", self.offset);
        self.session = Some(DragSession::new(pos, self.offset));
        DragUpdate::Started { origin: pos }
    }

    /// Move the pointer to `pos` and update the offset.
    pub fn pointer_move(&mut self, pos: Point) -> DragUpdate {
        let Some(session) = &mut self.session else {
            return DragUpdate::Ignored;
        };
        let first = !session.has_moved();
        let delta = session.advance(pos);
        self.offset = match self.config.mode {
            OffsetMode::Incremental => self.offset + delta,
            OffsetMode::Absolute => session.base_offset + session.total_delta(pos),
        };
        trace!("drag move by {delta:?} to offset {:?}", self.offset);
        DragUpdate::Moved {
            delta,
            offset: self.offset,
            first,
        }
    }

    /// Release the pointer at `pos`, ending the drag.
    ///
    /// The release position does not move the element.
    pub fn pointer_up(&mut self, pos: Point) -> DragUpdate {
        self.finish(pos, false)
    }

    /// Abort the drag at the last known pointer position.
    ///
    /// The element keeps the offset it reached.
    pub fn cancel(&mut self) -> DragUpdate {
        match self.session {
            Some(session) => self.finish(session.last, true),
            None => DragUpdate::Ignored,
        }
    }

    fn finish(&mut self, at: Point, cancelled: bool) -> DragUpdate {
        if self.session.take().is_none() {
            return DragUpdate::Ignored;
        }
        self.pointer = None;
        self.captured = false;
        debug!(
            "drag {} at {at:?} with offset {:?}",
            if cancelled { "cancelled" } else { "end" },
            self.offset
        );
        DragUpdate::Ended(DragEnd {
            offset: self.offset,
            at,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(mode: OffsetMode) -> DragTracker {
        DragTracker::new(DragConfig::new().mode(mode))
    }

    #[test]
    fn fresh_tracker_is_idle() {
        let tracker = tracker(OffsetMode::Incremental);
        assert!(!tracker.is_dragging(), "no drag before pointer-down");
        assert!(tracker.session().is_none());
        assert_eq!(tracker.offset(), Vec2::ZERO);
    }

    #[test]
    fn down_starts_session_from_current_offset() {
        let mut tracker = DragTracker::with_offset(DragConfig::default(), Vec2::new(7.0, 8.0));

        let update = tracker.pointer_down(Point::new(1.0, 2.0));

        assert_eq!(
            update,
            DragUpdate::Started {
                origin: Point::new(1.0, 2.0)
            }
        );
        let session = tracker.session().unwrap();
        assert_eq!(session.base_offset, Vec2::new(7.0, 8.0));
        assert_eq!(session.origin, Point::new(1.0, 2.0));
    }

    #[test]
    fn second_down_during_drag_is_ignored() {
        let mut tracker = tracker(OffsetMode::Incremental);
        tracker.pointer_down(Point::new(1.0, 1.0));

        assert_eq!(tracker.pointer_down(Point::new(50.0, 50.0)), DragUpdate::Ignored);
        assert_eq!(tracker.session().unwrap().origin, Point::new(1.0, 1.0));
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut tracker = tracker(OffsetMode::Incremental);
        assert_eq!(tracker.pointer_move(Point::new(5.0, 5.0)), DragUpdate::Ignored);
        assert_eq!(tracker.offset(), Vec2::ZERO);
    }

    #[test]
    fn moves_translate_by_pointer_delta_in_both_modes() {
        for mode in [OffsetMode::Incremental, OffsetMode::Absolute] {
            let mut tracker = tracker(mode);
            tracker.pointer_down(Point::new(100.0, 100.0));

            let update = tracker.pointer_move(Point::new(110.0, 95.0));
            assert_eq!(
                update,
                DragUpdate::Moved {
                    delta: Vec2::new(10.0, -5.0),
                    offset: Vec2::new(10.0, -5.0),
                    first: true,
                },
                "{mode:?}"
            );

            let update = tracker.pointer_move(Point::new(113.0, 99.0));
            assert_eq!(
                update,
                DragUpdate::Moved {
                    delta: Vec2::new(3.0, 4.0),
                    offset: Vec2::new(13.0, -1.0),
                    first: false,
                },
                "{mode:?}"
            );
        }
    }

    #[test]
    fn up_ends_drag_and_keeps_offset() {
        let mut tracker = tracker(OffsetMode::Incremental);
        tracker.pointer_down(Point::new(0.0, 0.0));
        tracker.pointer_move(Point::new(4.0, 6.0));

        let update = tracker.pointer_up(Point::new(9.0, 9.0));

        assert_eq!(
            update,
            DragUpdate::Ended(DragEnd {
                offset: Vec2::new(4.0, 6.0),
                at: Point::new(9.0, 9.0),
                cancelled: false,
            })
        );
        assert!(!tracker.is_dragging(), "up clears the session");
        assert_eq!(tracker.offset(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn up_without_drag_is_ignored() {
        let mut tracker = tracker(OffsetMode::Incremental);
        assert_eq!(tracker.pointer_up(Point::ZERO), DragUpdate::Ignored);
        assert!(!tracker.pointer_up(Point::ZERO).is_handled());
    }

    #[test]
    fn cancel_ends_at_last_position() {
        let mut tracker = tracker(OffsetMode::Absolute);
        tracker.pointer_down(Point::new(0.0, 0.0));
        tracker.pointer_move(Point::new(2.0, 3.0));

        let update = tracker.cancel();

        assert_eq!(
            update,
            DragUpdate::Ended(DragEnd {
                offset: Vec2::new(2.0, 3.0),
                at: Point::new(2.0, 3.0),
                cancelled: true,
            })
        );
        assert_eq!(tracker.cancel(), DragUpdate::Ignored);
    }

    #[test]
    fn offsets_accumulate_across_drags() {
        for mode in [OffsetMode::Incremental, OffsetMode::Absolute] {
            let mut tracker = tracker(mode);

            tracker.pointer_down(Point::new(0.0, 0.0));
            tracker.pointer_move(Point::new(10.0, 10.0));
            tracker.pointer_up(Point::new(10.0, 10.0));

            tracker.pointer_down(Point::new(300.0, 300.0));
            tracker.pointer_move(Point::new(295.0, 320.0));
            tracker.pointer_up(Point::new(295.0, 320.0));

            assert_eq!(tracker.offset(), Vec2::new(5.0, 30.0), "{mode:?}");
        }
    }

    #[test]
    fn set_offset_during_drag_rebases_session() {
        for mode in [OffsetMode::Incremental, OffsetMode::Absolute] {
            let mut tracker = tracker(mode);
            tracker.pointer_down(Point::new(0.0, 0.0));
            tracker.pointer_move(Point::new(5.0, 5.0));

            tracker.set_offset(Vec2::new(100.0, 100.0));
            tracker.pointer_move(Point::new(6.0, 7.0));

            assert_eq!(tracker.offset(), Vec2::new(101.0, 102.0), "{mode:?}");
        }
    }

    #[test]
    fn absolute_mode_does_not_drift() {
        let mut tracker = tracker(OffsetMode::Absolute);
        tracker.pointer_down(Point::ZERO);
        for _ in 0..1000 {
            tracker.pointer_move(Point::new(0.1, 0.1));
            tracker.pointer_move(Point::new(0.3, 0.7));
        }
        tracker.pointer_move(Point::new(0.2, 0.2));

        assert_eq!(tracker.offset(), Vec2::new(0.2, 0.2));
    }
}
