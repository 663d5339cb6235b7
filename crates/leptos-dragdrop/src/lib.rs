//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events, for board-style
//! layouts where cards move between columns. Uses a movement threshold to
//! distinguish click from drag.
//!
//! The global listeners are bound to `document` but live and die with the
//! reactive owner that called the bind functions: they are removed in that
//! owner's cleanup, and every signal access inside them goes through the
//! `try_*` accessors, so an event dispatched between view disposal and
//! listener removal is a no-op instead of a read from a dead signal.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;

/// Identity of a draggable card: the column it currently sits in and its
/// position within that column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardKey {
    pub lane: usize,
    pub index: usize,
}

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on another card (insert at its position)
    Card(CardKey),
    /// Drop on a column's empty area
    Lane(usize),
}

impl DropTarget {
    /// The column a drop here lands in.
    pub fn lane(&self) -> usize {
        match self {
            DropTarget::Card(key) => key.lane,
            DropTarget::Lane(lane) => *lane,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<CardKey>>,
    pub dragging_write: WriteSignal<Option<CardKey>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<CardKey>>,
    pub pending_write: WriteSignal<Option<CardKey>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<CardKey>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<CardKey>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// End drag operation. Writes go through `try_set`: a deferred timeout or a
/// not-yet-removed listener can reach this after the signals are disposed.
pub fn end_drag(dnd: &DndSignals) {
    let _ = dnd.dragging_write.try_set(None);
    let _ = dnd.drop_target_write.try_set(None);
    let _ = dnd.pending_write.try_set(None);
    if dnd.drag_just_ended_write.try_set(true).is_some() {
        return;
    }

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Decide whether a pending press has crossed the movement threshold.
/// `None` means no drag starts: not pending, already dragging, below the
/// threshold, or the signals are already disposed.
fn drag_activation(dnd: &DndSignals, x: i32, y: i32) -> Option<CardKey> {
    let pending = dnd.pending_read.try_get_untracked()??;
    if dnd.dragging_read.try_get_untracked()?.is_some() {
        return None;
    }
    let dx = (x - dnd.start_x_read.try_get_untracked()?).abs();
    let dy = (y - dnd.start_y_read.try_get_untracked()?).abs();
    if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
        Some(pending)
    } else {
        None
    }
}

/// Resolve a mouseup into a completed drop. `None` covers a plain click
/// (nothing was dragging), a drag released outside any target, and disposed
/// signals.
fn resolve_drop(dnd: &DndSignals) -> Option<(CardKey, DropTarget)> {
    let dragging = dnd.dragging_read.try_get_untracked()??;
    let target = dnd.drop_target_read.try_get_untracked()??;
    Some((dragging, target))
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, key: CardKey) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_write.set(Some(key));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind the document-level mousemove handler that promotes a pending press
/// into a drag. Removed again when the calling owner is cleaned up.
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if let Some(key) = drag_activation(&dnd, ev.client_x(), ev.client_y()) {
            let _ = dnd.dragging_write.try_set(Some(key));
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }

    // Keep the closure alive until cleanup, then unregister it
    let handle = SendWrapper::new(on_mousemove);
    on_cleanup(move || {
        if let Some(doc) = document() {
            let _ = doc.remove_event_listener_with_callback("mousemove", handle.as_ref().unchecked_ref());
        }
    });
}

/// Create mouseenter handler for cards (insert-before target)
pub fn make_on_card_mouseenter(dnd: DndSignals, key: CardKey) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != key {
                dnd.drop_target_write.set(Some(DropTarget::Card(key)));
            }
        }
    }
}

/// Create mouseenter handler for a column's body
pub fn make_on_lane_mouseenter(dnd: DndSignals, lane: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Lane(lane)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind the document-level mouseup handler for drop detection, plus the
/// matching mousemove handler. Both are removed when the calling owner is
/// cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(CardKey, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dropped = resolve_drop(&dnd);
        end_drag(&dnd);
        if let Some((dragged, target)) = dropped {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }

    let handle = SendWrapper::new(on_mouseup);
    on_cleanup(move || {
        if let Some(doc) = document() {
            let _ = doc.remove_event_listener_with_callback("mouseup", handle.as_ref().unchecked_ref());
        }
    });

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn drag_activation_requires_threshold_crossing() {
        let owner = Owner::new();
        let dnd = owner.with(create_dnd_signals);
        let key = CardKey { lane: 1, index: 0 };
        dnd.pending_write.set(Some(key));
        dnd.start_x_write.set(100);
        dnd.start_y_write.set(100);

        assert_eq!(drag_activation(&dnd, 103, 102), None);
        assert_eq!(drag_activation(&dnd, 100, 106), Some(key));
        drop(owner);
    }

    #[test]
    fn drag_activation_ignores_presses_already_dragging() {
        let owner = Owner::new();
        let dnd = owner.with(create_dnd_signals);
        let key = CardKey { lane: 0, index: 2 };
        dnd.pending_write.set(Some(key));
        dnd.dragging_write.set(Some(key));

        assert_eq!(drag_activation(&dnd, 500, 500), None);
        drop(owner);
    }

    #[test]
    fn stale_listener_reads_are_no_ops_after_owner_disposal() {
        let owner = Owner::new();
        let dnd = owner.with(create_dnd_signals);
        dnd.pending_write.set(Some(CardKey { lane: 0, index: 0 }));
        dnd.dragging_write.set(Some(CardKey { lane: 0, index: 0 }));
        dnd.drop_target_write.set(Some(DropTarget::Lane(2)));
        drop(owner);

        // The view owning the signals is gone; a listener firing now must
        // neither panic nor report a drag.
        assert_eq!(drag_activation(&dnd, 500, 500), None);
        assert!(resolve_drop(&dnd).is_none());
        assert!(dnd.dragging_write.try_set(None).is_some());
        assert!(dnd.drag_just_ended_write.try_set(true).is_some());
    }

    #[test]
    fn resolve_drop_requires_both_drag_and_target() {
        let owner = Owner::new();
        let dnd = owner.with(create_dnd_signals);
        let key = CardKey { lane: 0, index: 1 };

        assert!(resolve_drop(&dnd).is_none());
        dnd.dragging_write.set(Some(key));
        assert!(resolve_drop(&dnd).is_none());
        dnd.drop_target_write.set(Some(DropTarget::Lane(3)));
        assert_eq!(resolve_drop(&dnd), Some((key, DropTarget::Lane(3))));
        drop(owner);
    }
}
