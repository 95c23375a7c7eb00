// kochwonder-ui/src/components/toolbar.rs
use kochwonder_core::{InputEvent, ViewportController};
use leptos::*;

use crate::hooks::dispatch;

const BUTTON_CLASS: &str =
    "px-2 py-1 rounded bg-white/10 hover:bg-white/20 disabled:opacity-40 transition-colors";

#[component]
pub fn Toolbar(controller: RwSignal<ViewportController>) -> impl IntoView {
    let send = move |event: InputEvent| {
        dispatch(controller, event);
    };

    let zoom_label = move || controller.with(|c| format!("Zoom: {:.2}x", c.zoom()));
    let level_label = move || controller.with(|c| format!("Level: {}", c.level()));
    let vertex_label = move || controller.with(|c| format!("{} vertices", c.vertex_count()));
    let at_min = move || controller.with(|c| c.recursion_level().is_at_min());
    let at_max = move || controller.with(|c| c.recursion_level().is_at_max());

    view! {
        <div class="fixed inset-x-0 bottom-0 flex items-center gap-4 px-4 py-2 bg-black/50 text-white text-sm">
            // Zoom
            <span class="w-24">{zoom_label}</span>
            <div class="flex items-center gap-1">
                <button class=BUTTON_CLASS title="Zoom in" on:click=move |_| send(InputEvent::ZoomIn)>"+"</button>
                <button class=BUTTON_CLASS title="Zoom out" on:click=move |_| send(InputEvent::ZoomOut)>"-"</button>
                <button class=BUTTON_CLASS title="Reset to home view" on:click=move |_| send(InputEvent::Reset)>"Home"</button>
            </div>

            // Recursion level
            <span class="w-16">{level_label}</span>
            <div class="flex items-center gap-1">
                <button
                    class=BUTTON_CLASS
                    disabled=at_min
                    on:click=move |_| send(InputEvent::LevelDown)
                >
                    "Level -"
                </button>
                <button
                    class=BUTTON_CLASS
                    disabled=at_max
                    on:click=move |_| send(InputEvent::LevelUp)
                >
                    "Level +"
                </button>
            </div>
            <span class="text-white/60">{vertex_label}</span>

            <span class="flex-1 text-right text-white/60">
                "Navigation: drag with left button | Zoom: mouse wheel or +/-"
            </span>
        </div>
    }
}
