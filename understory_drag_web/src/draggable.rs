// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener wiring between a DOM element and a [`DragTracker`].

use alloc::{
    boxed::Box,
    rc::{Rc, Weak},
    string::ToString,
};
use core::cell::{Cell, RefCell};
use core::fmt;

use js_sys::Function;
use kurbo::{Point, Vec2};
use log::warn;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, HtmlElement, PointerEvent};

use understory_drag::offset::{offset_from_attributes, offset_from_layout};
use understory_drag::style::{
    StyleOp, TRANSFORM_PROPERTY, Translate3d, USER_SELECT_NONE, USER_SELECT_PROPERTY, X_ATTRIBUTE,
    Y_ATTRIBUTE, place_ops, style_ops,
};
use understory_drag::{DragConfig, DragEnd, DragTracker, DragUpdate};

use crate::AttachError;
use crate::dom::button_from_dom;

type Listener = Closure<dyn FnMut(PointerEvent)>;
type EndCallback = Box<dyn FnMut(DragEnd, &PointerEvent)>;

/// A DOM element made draggable.
///
/// Listeners stay registered for as long as this handle lives; dropping it
/// unsubscribes them.
pub struct Draggable {
    shared: Rc<Shared>,
    on_down: Listener,
    // Owned so the document listeners stay alive; registered per drag.
    _on_move: Listener,
    _on_up: Listener,
}

struct Shared {
    element: HtmlElement,
    document: Document,
    tracker: RefCell<DragTracker>,
    /// Layout origin of the element without its drag offset.
    rest: Point,
    pointer_id: Cell<Option<i32>>,
    document_listeners: RefCell<Option<DocumentListeners>>,
    on_end: RefCell<Option<EndCallback>>,
}

struct DocumentListeners {
    on_move: Function,
    on_up: Function,
}

impl Draggable {
    /// Make `element` draggable.
    ///
    /// With [`DragConfig::mirror_attributes`] the starting offset is read from
    /// the element's `x`/`y` attributes; a malformed value is logged and
    /// treated as zero. A non-zero starting offset is applied as the element's
    /// transform right away.
    pub fn attach(element: HtmlElement, config: DragConfig) -> Result<Self, AttachError> {
        let document = element.owner_document().ok_or(AttachError::Detached)?;
        let offset = if config.mirror_attributes {
            initial_offset(&element)
        } else {
            Vec2::ZERO
        };
        let rest = layout_origin(&element) - offset;

        let shared = Rc::new(Shared {
            element,
            document,
            tracker: RefCell::new(DragTracker::with_offset(config, offset)),
            rest,
            pointer_id: Cell::new(None),
            document_listeners: RefCell::new(None),
            on_end: RefCell::new(None),
        });

        if offset != Vec2::ZERO {
            shared.place(offset);
        }

        let on_down = listener(&shared, Shared::on_down);
        let on_move = listener(&shared, Shared::on_move);
        let on_up = listener(&shared, Shared::on_up);
        *shared.document_listeners.borrow_mut() = Some(DocumentListeners {
            on_move: function(&on_move),
            on_up: function(&on_up),
        });

        shared
            .element
            .add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref())
            .map_err(AttachError::from_js)?;

        Ok(Self {
            shared,
            on_down,
            _on_move: on_move,
            _on_up: on_up,
        })
    }

    /// Register the drag-end callback, replacing any previous one.
    ///
    /// It runs after the release or cancel has been applied to the element.
    pub fn on_drag_end(&self, callback: impl FnMut(DragEnd, &PointerEvent) + 'static) {
        *self.shared.on_end.borrow_mut() = Some(Box::new(callback));
    }

    /// The element being dragged.
    pub fn element(&self) -> &HtmlElement {
        &self.shared.element
    }

    /// Current element offset.
    pub fn offset(&self) -> Vec2 {
        self.shared.tracker.borrow().offset()
    }

    /// Move the element to `offset` immediately.
    pub fn set_offset(&self, offset: Vec2) {
        self.shared.tracker.borrow_mut().set_offset(offset);
        self.shared.place(offset);
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.shared.tracker.borrow().is_dragging()
    }
}

impl fmt::Debug for Draggable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draggable")
            .field("tracker", &self.shared.tracker)
            .field("rest", &self.shared.rest)
            .field("pointer_id", &self.shared.pointer_id)
            .finish_non_exhaustive()
    }
}

impl Drop for Draggable {
    fn drop(&mut self) {
        let shared = &self.shared;
        if let Err(err) = shared
            .element
            .remove_event_listener_with_callback("pointerdown", self.on_down.as_ref().unchecked_ref())
        {
            warn!("failed to remove pointerdown listener: {err:?}");
        }
        shared.unlisten_document();
        if shared.tracker.borrow().is_dragging() {
            let update = shared.tracker.borrow_mut().cancel();
            shared.apply(&update);
        }
    }
}

impl Shared {
    fn on_down(&self, event: &PointerEvent) {
        let config = *self.tracker.borrow().config();
        if !config.accepts(button_from_dom(event.button())) {
            return;
        }
        if config.measure_on_down && !self.tracker.borrow().is_dragging() {
            let offset = offset_from_layout(self.rest, layout_origin(&self.element));
            self.tracker.borrow_mut().set_offset(offset);
        }
        let update = self.tracker.borrow_mut().pointer_down(page_point(event));
        if !update.is_handled() {
            return;
        }
        self.pointer_id.set(Some(event.pointer_id()));
        self.listen_document();
    }

    fn on_move(&self, event: &PointerEvent) {
        if self.pointer_id.get() != Some(event.pointer_id()) {
            return;
        }
        let update = self.tracker.borrow_mut().pointer_move(page_point(event));
        self.apply(&update);
    }

    fn on_up(&self, event: &PointerEvent) {
        if self.pointer_id.get() != Some(event.pointer_id()) {
            return;
        }
        let update = if event.type_() == "pointercancel" {
            self.tracker.borrow_mut().cancel()
        } else {
            self.tracker.borrow_mut().pointer_up(page_point(event))
        };
        self.pointer_id.set(None);
        self.unlisten_document();
        self.apply(&update);

        if let DragUpdate::Ended(end) = update {
            // Taken out of the cell so the callback may replace itself.
            let callback = self.on_end.borrow_mut().take();
            if let Some(mut callback) = callback {
                callback(end, event);
                let mut slot = self.on_end.borrow_mut();
                if slot.is_none() {
                    *slot = Some(callback);
                }
            }
        }
    }

    fn listen_document(&self) {
        let listeners = self.document_listeners.borrow();
        let Some(listeners) = listeners.as_ref() else {
            return;
        };
        for (kind, callback) in listeners.by_kind() {
            if let Err(err) = self.document.add_event_listener_with_callback(kind, callback) {
                warn!("failed to listen for {kind}: {err:?}");
            }
        }
    }

    fn unlisten_document(&self) {
        let listeners = self.document_listeners.borrow();
        let Some(listeners) = listeners.as_ref() else {
            return;
        };
        for (kind, callback) in listeners.by_kind() {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback(kind, callback)
            {
                warn!("failed to remove {kind} listener: {err:?}");
            }
        }
    }

    fn apply(&self, update: &DragUpdate) {
        let config = *self.tracker.borrow().config();
        for op in style_ops(update, &config) {
            self.apply_op(op);
        }
    }

    fn place(&self, offset: Vec2) {
        let config = *self.tracker.borrow().config();
        for op in place_ops(offset, &config) {
            self.apply_op(op);
        }
    }

    fn apply_op(&self, op: StyleOp) {
        if let Err(err) = write_op(&self.element, op) {
            warn!("failed to apply {op:?}: {err:?}");
        }
    }
}

impl DocumentListeners {
    fn by_kind(&self) -> [(&'static str, &Function); 3] {
        [
            ("pointermove", &self.on_move),
            ("pointerup", &self.on_up),
            ("pointercancel", &self.on_up),
        ]
    }
}

fn listener(shared: &Rc<Shared>, handler: fn(&Shared, &PointerEvent)) -> Listener {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    Closure::new(move |event: PointerEvent| {
        if let Some(shared) = weak.upgrade() {
            handler(&shared, &event);
        }
    })
}

fn function(listener: &Listener) -> Function {
    listener.as_ref().unchecked_ref::<Function>().clone()
}

fn write_op(element: &HtmlElement, op: StyleOp) -> Result<(), JsValue> {
    let style = element.style();
    match op {
        StyleOp::SetTransform(offset) => {
            style.set_property(TRANSFORM_PROPERTY, &Translate3d(offset).to_string())
        }
        StyleOp::SuppressSelection => style.set_property(USER_SELECT_PROPERTY, USER_SELECT_NONE),
        StyleOp::RestoreSelection => style.remove_property(USER_SELECT_PROPERTY).map(|_| ()),
        StyleOp::SetPositionAttributes(offset) => {
            element.set_attribute(X_ATTRIBUTE, &offset.x.to_string())?;
            element.set_attribute(Y_ATTRIBUTE, &offset.y.to_string())
        }
    }
}

fn initial_offset(element: &HtmlElement) -> Vec2 {
    let x = element.get_attribute(X_ATTRIBUTE);
    let y = element.get_attribute(Y_ATTRIBUTE);
    offset_from_attributes(x.as_deref(), y.as_deref()).unwrap_or_else(|err| {
        warn!("{err}; starting from zero offset");
        Vec2::ZERO
    })
}

fn layout_origin(element: &HtmlElement) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

fn page_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.page_x()), f64::from(event.page_y()))
}
