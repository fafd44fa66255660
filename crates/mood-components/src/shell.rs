//! Top-level application shell: wires state, kicks off the initial load and
//! swaps between the import form and the loaded chart.

use leptos::prelude::*;
use mood_charts::TimelineChart;
use mood_fetch::DataLoader;
use mood_state::provide_app_state;

use crate::{ImportForm, KeyPanel, LineEditor};

#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    // Picks up a local export if one is served alongside the page;
    // otherwise the import form stays up.
    DataLoader::new(state).init();

    let has_data = move || state.chart.has_data();

    view! {
        <div class="app">
            <header class="app-header">
                <h1 id="site-title">"Mood chart"</h1>
            </header>

            <main class="app-main">
                <Show when=move || !has_data()>
                    <ImportForm />
                </Show>

                <Show when=has_data>
                    <section class="loaded">
                        <TimelineChart
                            lines=state.chart.lines
                            hidden=state.chart.hidden
                            observations=state.chart.observations()
                        />
                        <KeyPanel />
                        <LineEditor />
                    </section>
                </Show>
            </main>
        </div>
    }
}
