use kochwonder_core::{InputEvent, Update, ViewportController, WHEEL_DELTA_PER_STEP};
use leptos::*;
use leptos_use::{use_event_listener, use_window};
use web_sys::{KeyboardEvent, PointerEvent, WheelEvent};

/// Feed one event to the controller, notifying subscribers only if the view changed.
pub fn dispatch(controller: RwSignal<ViewportController>, event: InputEvent) -> Update {
    let update = controller
        .try_update_untracked(|c| c.handle(event))
        .unwrap_or(Update::Unchanged);

    if update.needs_redraw() {
        controller.update(|_| {});
    }
    update
}

/// Wheel delta in pixels. Line-mode wheels (Firefox) report about 3 lines per
/// notch, page-mode ones 1 page.
fn wheel_delta_pixels(delta: f64, mode: u32) -> f64 {
    if mode == WheelEvent::DOM_DELTA_LINE {
        delta * WHEEL_DELTA_PER_STEP / 3.0
    } else if mode == WheelEvent::DOM_DELTA_PAGE {
        delta * WHEEL_DELTA_PER_STEP
    } else {
        delta
    }
}

fn pointer_position(ev: &PointerEvent) -> (f64, f64) {
    (ev.offset_x() as f64, ev.offset_y() as f64)
}

/// Wire pointer and wheel input on the canvas to the controller.
///
/// Left-button drag pans, the wheel zooms about the cursor. Leaving the canvas
/// ends a drag.
pub fn use_canvas_interaction(
    canvas_ref: NodeRef<html::Canvas>,
    controller: RwSignal<ViewportController>,
) {
    let _ = use_event_listener(canvas_ref, ev::pointerdown, move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let (x, y) = pointer_position(&ev);
        dispatch(controller, InputEvent::PointerDown { x, y });
    });

    let _ = use_event_listener(canvas_ref, ev::pointermove, move |ev: PointerEvent| {
        let (x, y) = pointer_position(&ev);
        dispatch(controller, InputEvent::PointerMove { x, y });
    });

    let _ = use_event_listener(canvas_ref, ev::pointerup, move |_: PointerEvent| {
        dispatch(controller, InputEvent::PointerUp);
    });

    let _ = use_event_listener(canvas_ref, ev::pointerleave, move |_: PointerEvent| {
        dispatch(controller, InputEvent::PointerUp);
    });

    let _ = use_event_listener(canvas_ref, ev::wheel, move |ev: WheelEvent| {
        ev.prevent_default();
        dispatch(
            controller,
            InputEvent::Wheel {
                delta_y: wheel_delta_pixels(ev.delta_y(), ev.delta_mode()),
                x: ev.offset_x() as f64,
                y: ev.offset_y() as f64,
            },
        );
    });
}

fn key_to_event(key: &str) -> Option<InputEvent> {
    match key {
        "+" | "=" => Some(InputEvent::ZoomIn),
        "-" => Some(InputEvent::ZoomOut),
        "Home" | "0" => Some(InputEvent::Reset),
        "PageUp" => Some(InputEvent::LevelUp),
        "PageDown" => Some(InputEvent::LevelDown),
        _ => None,
    }
}

/// Window-wide keys: `+`/`-` zoom about the view center, Home resets the view,
/// PageUp/PageDown change the level.
pub fn use_keyboard_shortcuts(controller: RwSignal<ViewportController>) {
    let _ = use_event_listener(use_window(), ev::keydown, move |ev: KeyboardEvent| {
        if let Some(event) = key_to_event(&ev.key()) {
            ev.prevent_default();
            dispatch(controller, event);
        }
    });
}
