// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM value conversions that do not need a browser.

use ui_events::pointer::PointerButton;

/// Map a DOM `MouseEvent.button` index to a [`PointerButton`].
///
/// Returns `None` for `-1` (no button change, as on `pointermove`) and for
/// indices the DOM does not assign.
pub fn button_from_dom(button: i16) -> Option<PointerButton> {
    match button {
        0 => Some(PointerButton::Primary),
        1 => Some(PointerButton::Auxiliary),
        2 => Some(PointerButton::Secondary),
        3 => Some(PointerButton::X1),
        4 => Some(PointerButton::X2),
        5 => Some(PointerButton::PenEraser),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_drag::DragConfig;

    #[test]
    fn dom_order_differs_from_bit_order() {
        // DOM puts the wheel button between primary and secondary.
        assert_eq!(button_from_dom(1), Some(PointerButton::Auxiliary));
        assert_eq!(button_from_dom(2), Some(PointerButton::Secondary));
    }

    #[test]
    fn unknown_indices_have_no_button() {
        assert_eq!(button_from_dom(-1), None);
        assert_eq!(button_from_dom(6), None);
    }

    #[test]
    fn primary_filter_matches_left_click_only() {
        let config = DragConfig::new().button(PointerButton::Primary);
        assert!(config.accepts(button_from_dom(0)));
        assert!(!config.accepts(button_from_dom(2)));
        assert!(!config.accepts(button_from_dom(-1)));
    }
}
