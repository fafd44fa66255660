//! WASM entry point for the mood chart.

use mood_components::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("starting mood chart");

    leptos::mount::mount_to_body(App);
}
