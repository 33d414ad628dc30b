// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag behavior configuration.
//!
//! [`DragConfig`] uses a fluent builder:
//!
//! ```
//! use ui_events::pointer::PointerButton;
//! use understory_drag::{DragConfig, OffsetMode};
//!
//! let config = DragConfig::new()
//!     .mode(OffsetMode::Absolute)
//!     .button(PointerButton::Primary)
//!     .mirror_attributes(true);
//!
//! assert!(config.accepts(Some(PointerButton::Primary)));
//! assert!(!config.accepts(Some(PointerButton::Secondary)));
//! ```

use ui_events::pointer::PointerButton;

/// How a move event turns into a new element offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OffsetMode {
    /// Add each move's delta to the current offset.
    #[default]
    Incremental,
    /// Set the offset to the drag's base offset plus the total pointer travel.
    ///
    /// Floating-point error does not accumulate over long drags in this mode.
    Absolute,
}

/// Configuration for a [`DragTracker`](crate::DragTracker).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// Offset computation mode.
    pub mode: OffsetMode,
    /// Button that starts a drag; `None` accepts any button.
    pub button: Option<PointerButton>,
    /// Disable text selection on the element while it is being moved.
    pub suppress_selection: bool,
    /// Mirror the offset onto the element's `x`/`y` attributes.
    pub mirror_attributes: bool,
    /// Re-derive the offset from the element's layout box on every pointer-down.
    pub measure_on_down: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            mode: OffsetMode::Incremental,
            button: None,
            suppress_selection: true,
            mirror_attributes: false,
            measure_on_down: false,
        }
    }
}

impl DragConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset mode.
    pub fn mode(mut self, mode: OffsetMode) -> Self {
        self.mode = mode;
        self
    }

    /// Only start drags with `button`.
    pub fn button(mut self, button: PointerButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Start drags with any button.
    pub fn any_button(mut self) -> Self {
        self.button = None;
        self
    }

    /// Enable or disable selection suppression during moves.
    pub fn suppress_selection(mut self, enabled: bool) -> Self {
        self.suppress_selection = enabled;
        self
    }

    /// Enable or disable mirroring the offset onto `x`/`y` attributes.
    pub fn mirror_attributes(mut self, enabled: bool) -> Self {
        self.mirror_attributes = enabled;
        self
    }

    /// Enable or disable re-measuring the layout box on pointer-down.
    pub fn measure_on_down(mut self, enabled: bool) -> Self {
        self.measure_on_down = enabled;
        self
    }

    /// Returns `true` if a press of `button` may start a drag.
    ///
    /// A press without a button (for example a touch contact) is accepted only
    /// when no specific button is configured.
    pub fn accepts(&self, button: Option<PointerButton>) -> bool {
        match self.button {
            None => true,
            Some(wanted) => button == Some(wanted),
        }
    }
}
