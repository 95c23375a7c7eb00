// kochwonder-ui/src/components/koch_canvas.rs
use kochwonder_core::{InputEvent, ViewportController};
use leptos::*;
use leptos_use::use_window_size;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::hooks::use_canvas_interaction;
use crate::rendering::{draw_closed_polyline, get_2d_context, SNOWFLAKE_STYLE};

#[component]
pub fn KochCanvas(
    /// Navigation state; the canvas redraws whenever it changes
    controller: RwSignal<ViewportController>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    // Reactive window size - automatically updates on resize
    let window_size = use_window_size();

    use_canvas_interaction(canvas_ref, controller);

    // Effect to handle resize
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();

        let width = window_size.width.get() as u32;
        let height = window_size.height.get() as u32;

        if width == 0 || height == 0 {
            return;
        }

        canvas.set_width(width);
        canvas.set_height(height);

        // Resizing clears the canvas, so notify even when the size is unchanged
        controller.update(|c| {
            c.handle(InputEvent::Resize { width, height });
        });
    });

    // Render effect - redraws when the controller changes
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();

        let ctx = match get_2d_context(canvas) {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("Canvas has no 2d context: {:?}", err);
                return;
            }
        };

        let size = (canvas.width(), canvas.height());
        controller.with(|c| {
            let points = c.screen_points();
            draw_closed_polyline(&ctx, &points, size, &SNOWFLAKE_STYLE);
        });
    });

    view! {
        <canvas node_ref=canvas_ref class="block touch-none cursor-grab" />
    }
}
