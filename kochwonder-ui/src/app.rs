use kochwonder_compute::BoundaryGenerator;
use kochwonder_core::{KochConfig, KochError, Update, ViewportController, SNOWFLAKE_CONFIG};
use leptos::*;
use leptos_use::use_debounce_fn;

use crate::components::{KochCanvas, Toolbar};
use crate::hooks::use_keyboard_shortcuts;
use crate::rendering::performance_now;

fn build(config: &KochConfig) -> Result<(ViewportController, BoundaryGenerator), KochError> {
    Ok((
        ViewportController::new(config)?,
        BoundaryGenerator::from_config(config)?,
    ))
}

#[component]
pub fn App() -> impl IntoView {
    match build(&SNOWFLAKE_CONFIG) {
        Ok((controller, generator)) => {
            view! { <Viewer controller=controller generator=generator /> }.into_view()
        }
        Err(err) => {
            log::error!("Failed to initialise {}: {}", SNOWFLAKE_CONFIG.display_name, err);
            view! {
                <div class="w-screen h-screen flex items-center justify-center bg-black text-red-400">
                    {format!("{} could not start: {}", SNOWFLAKE_CONFIG.display_name, err)}
                </div>
            }
            .into_view()
        }
    }
}

#[component]
fn Viewer(controller: ViewportController, generator: BoundaryGenerator) -> impl IntoView {
    let debounce_ms = controller.config().level_debounce_ms;
    let controller = create_rw_signal(controller);
    let generator = store_value(generator);

    // ========== Regeneration ==========
    let regenerate = move || {
        let start = performance_now();
        let result = generator
            .try_update_value(|g| {
                controller.try_update(|c| c.regenerate_with(|_, depth| g.request(depth)))
            })
            .flatten();

        match result {
            None | Some(Ok(Update::Unchanged)) => {}
            Some(Ok(_)) => log::debug!(
                "Regenerated level {} ({} vertices) in {:.1} ms",
                controller.with_untracked(|c| c.level()),
                controller.with_untracked(|c| c.vertex_count()),
                performance_now() - start
            ),
            Some(Err(err)) => log::error!("Boundary generation failed: {}", err),
        }
    };

    regenerate();

    // Only regenerate once level input settles
    let debounced_regenerate = use_debounce_fn(regenerate, debounce_ms);
    let level = create_memo(move |_| controller.with(|c| c.level()));

    create_effect(move |previous: Option<u32>| {
        let current = level.get();
        if previous.is_some_and(|p| p != current) {
            debounced_regenerate();
        }
        current
    });

    use_keyboard_shortcuts(controller);

    view! {
        <div class="relative w-screen h-screen overflow-hidden bg-gray-500">
            <KochCanvas controller=controller />
            <Toolbar controller=controller />
        </div>
    }
}
