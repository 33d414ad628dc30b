// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_web --heading-base-level=0

//! DOM binding for `understory_drag`.
//!
//! This crate provides `Draggable`, which attaches an
//! `understory_drag::DragTracker` to a `web_sys::HtmlElement` when targeting
//! `wasm32`.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn make_draggable(
//!     element: web_sys::HtmlElement,
//! ) -> Result<understory_drag_web::Draggable, understory_drag_web::AttachError> {
//!     let draggable = understory_drag_web::Draggable::attach(
//!         element,
//!         understory_drag::DragConfig::default().mirror_attributes(true),
//!     )?;
//!     draggable.on_drag_end(|end, _event| {
//!         log::info!("dropped at offset {:?}", end.offset);
//!     });
//!     Ok(draggable)
//! }
//! ```
//!
//! Notes:
//! - `pointerdown` is observed on the element. `pointermove`, `pointerup` and
//!   `pointercancel` are observed on the owner document, and only between a
//!   press and its release, so the drag keeps going when the pointer outruns
//!   the element.
//! - Pointer positions are page coordinates (`pageX`/`pageY`).
//! - The element is moved with `transform: translate3d(...)`; `user-select` is
//!   disabled while moving and removed on release.
//! - With `measure_on_down`, the offset is re-derived from the element's
//!   bounding box on every press, relative to where the element was laid out
//!   when it was attached.
//! - DOM failures inside listeners cannot be returned and are logged through
//!   the `log` facade.
//! - Dropping the `Draggable` removes every listener.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

pub mod dom;

#[cfg(target_arch = "wasm32")]
mod draggable;

#[cfg(target_arch = "wasm32")]
pub use draggable::Draggable;

/// Errors from attaching drag behavior to an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachError {
    /// The element has no owner document to listen on.
    Detached,
    /// Registering an event listener failed.
    Listener(String),
}

impl AttachError {
    #[cfg(target_arch = "wasm32")]
    fn from_js(err: wasm_bindgen::JsValue) -> Self {
        Self::Listener(alloc::format!("{err:?}"))
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detached => write!(f, "element is not attached to a document"),
            Self::Listener(reason) => write!(f, "failed to register event listener: {reason}"),
        }
    }
}

impl core::error::Error for AttachError {}
