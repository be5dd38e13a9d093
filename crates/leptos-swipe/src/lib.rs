//! Leptos Swipe Adapters
//!
//! Translates raw mouse and touch events on a carousel track into deck
//! commands. The deck decides what a gesture means; this crate only
//! extracts coordinates, forwards them, and honours `prevent_default`.
//!
//! Mouse moves and releases are tracked on the document so a drag that
//! leaves the track still ends cleanly.

use leptos::prelude::*;
use sparkdeck_core::{Command, DispatchOutcome, PointerKind};
use wasm_bindgen::JsCast;

/// Command dispatcher supplied by the app
pub type Dispatch = Callback<Command, DispatchOutcome>;

/// Movement (px) below which a press-and-release still counts as a click
const CLICK_SLOP_PX: f64 = 5.0;

/// How long (ms) the click that follows a swipe is swallowed
const CLICK_GUARD_MS: i32 = 100;

/// Gesture bookkeeping signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Mouse button is down on the track
    pub pressed_read: ReadSignal<bool>,
    pub pressed_write: WriteSignal<bool>,
    /// Pointer moved past the click slop during this press
    pub moved_read: ReadSignal<bool>,
    pub moved_write: WriteSignal<bool>,
    /// A swipe just ended; the trailing click should not open anything
    pub just_swiped_read: ReadSignal<bool>,
    pub just_swiped_write: WriteSignal<bool>,
    pub start_x_read: ReadSignal<f64>,
    pub start_x_write: WriteSignal<f64>,
    pub start_y_read: ReadSignal<f64>,
    pub start_y_write: WriteSignal<f64>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (pressed_read, pressed_write) = signal(false);
    let (moved_read, moved_write) = signal(false);
    let (just_swiped_read, just_swiped_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0.0f64);
    let (start_y_read, start_y_write) = signal(0.0f64);
    SwipeSignals {
        pressed_read,
        pressed_write,
        moved_read,
        moved_write,
        just_swiped_read,
        just_swiped_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True when a press moved far enough to be a swipe rather than a click
pub fn exceeds_click_slop(dx: f64, dy: f64) -> bool {
    dx.abs() > CLICK_SLOP_PX || dy.abs() > CLICK_SLOP_PX
}

/// Whether a click on a card should be ignored because it ends a swipe
pub fn should_swallow_click(swipe: &SwipeSignals) -> bool {
    swipe.just_swiped_read.get_untracked()
}

fn begin(swipe: &SwipeSignals, x: f64, y: f64) {
    swipe.moved_write.set(false);
    swipe.start_x_write.set(x);
    swipe.start_y_write.set(y);
}

fn track_movement(swipe: &SwipeSignals, x: f64, y: f64) {
    if swipe.moved_read.get_untracked() {
        return;
    }
    let dx = x - swipe.start_x_read.get_untracked();
    let dy = y - swipe.start_y_read.get_untracked();
    if exceeds_click_slop(dx, dy) {
        swipe.moved_write.set(true);
    }
}

/// End a gesture; guard the trailing click if the pointer actually moved
fn finish(swipe: &SwipeSignals) {
    swipe.pressed_write.set(false);
    if !swipe.moved_read.get_untracked() {
        return;
    }
    swipe.moved_write.set(false);
    swipe.just_swiped_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = swipe.just_swiped_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_GUARD_MS);
        cb.forget();
    }
}

fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    let Some(target) = target else { return false };
    let Some(el) = target.dyn_ref::<web_sys::Element>() else { return false };
    el.closest("button, a, input, select, textarea").ok().flatten().is_some()
}

// ========================
// Mouse
// ========================

/// mousedown on the track: start a mouse drag
pub fn make_on_mousedown(swipe: SwipeSignals, dispatch: Dispatch) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control(ev.target()) {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        let outcome = dispatch.run(Command::DragStart { x, y, pointer: PointerKind::Mouse });
        if !outcome.changed {
            return;
        }
        if outcome.prevent_default {
            ev.prevent_default();
        }
        swipe.pressed_write.set(true);
        begin(&swipe, x, y);
    }
}

/// Bind document-level mousemove/mouseup so drags finish outside the track
pub fn bind_global_mouse(swipe: SwipeSignals, dispatch: Dispatch) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !swipe.pressed_read.get_untracked() {
            return;
        }
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        track_movement(&swipe, x, y);
        let outcome = dispatch.run(Command::DragMove { x, y });
        if outcome.prevent_default {
            ev.prevent_default();
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if !swipe.pressed_read.get_untracked() {
            return;
        }
        dispatch.run(Command::DragEnd { x: ev.client_x() as f64 });
        finish(&swipe);
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

// ========================
// Touch
// ========================

fn first_point(list: web_sys::TouchList) -> Option<(f64, f64)> {
    list.get(0).map(|touch| (touch.client_x() as f64, touch.client_y() as f64))
}

/// touchstart on the track
pub fn make_on_touchstart(swipe: SwipeSignals, dispatch: Dispatch) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let Some((x, y)) = first_point(ev.touches()) else { return };
        if dispatch.run(Command::DragStart { x, y, pointer: PointerKind::Touch }).changed {
            begin(&swipe, x, y);
        }
    }
}

/// touchmove on the track; only a mostly-horizontal move blocks page scroll
pub fn make_on_touchmove(swipe: SwipeSignals, dispatch: Dispatch) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let Some((x, y)) = first_point(ev.touches()) else { return };
        track_movement(&swipe, x, y);
        if dispatch.run(Command::DragMove { x, y }).prevent_default {
            ev.prevent_default();
        }
    }
}

/// touchend / touchcancel on the track
pub fn make_on_touchend(swipe: SwipeSignals, dispatch: Dispatch) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        let x = first_point(ev.changed_touches())
            .map(|(x, _)| x)
            .unwrap_or_else(|| swipe.start_x_read.get_untracked());
        dispatch.run(Command::DragEnd { x });
        finish(&swipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_slop() {
        assert!(!exceeds_click_slop(0.0, 0.0));
        assert!(!exceeds_click_slop(5.0, -5.0));
        assert!(exceeds_click_slop(-5.5, 0.0));
        assert!(exceeds_click_slop(0.0, 12.0));
    }
}
