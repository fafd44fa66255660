//! The import form: paste a download code (or a whole URL containing one),
//! or fall back to generated demo data.

use leptos::prelude::*;
use mood_fetch::{parse_download_code, DataLoader};
use mood_state::use_app_state;

const CODE_ERROR: &str = "That doesn't look like a download code. It should be like 3kkq.pk7d.23wb";

#[component]
pub fn ImportForm() -> impl IntoView {
    let state = use_app_state();
    let loader = DataLoader::new(state);

    let code_input = RwSignal::new(String::new());
    // Local validation failure, distinct from fetch errors in app state.
    let code_error = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_download_code(&code_input.get_untracked()) {
            Some(code) => {
                code_error.set(false);
                loader.load_remote(code);
            }
            None => code_error.set(true),
        }
    };

    let random = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        code_error.set(false);
        loader.load_random();
    };

    view! {
        <div class="importer-wrap">
            <Show when=move || state.is_loading()>
                <p class="loader">"Fetching your data…"</p>
            </Show>

            <Show when=move || !state.is_loading()>
                <form class="importer" on:submit=submit>
                    {move || {
                        state.error.get().map(|msg| view! { <p class="importer-error text-error">{msg}</p> })
                    }}
                    <Show when=move || code_error.get()>
                        <p class="text-error">{CODE_ERROR}</p>
                    </Show>

                    <label for="importer-code">"Your download code:"</label>
                    <input
                        type="text"
                        id="importer-code"
                        placeholder="e.g. 3kkq.pk7d.23wb"
                        prop:value=move || code_input.get()
                        on:input=move |ev| code_input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="button-submit">"Fetch my data"</button>

                    <p class="importer-random-wrap">
                        "Or "
                        <a href="#" class="importer-random" on:click=random>
                            "try it with random data"
                        </a>
                        "."
                    </p>
                </form>
            </Show>
        </div>
    }
}
