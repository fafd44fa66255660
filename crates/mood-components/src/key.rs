//! The key under the chart: one card per line with its description and the
//! show/duplicate/edit/delete controls.

use leptos::prelude::*;
use mood_core::{DescriptionRow, Line};
use mood_state::use_app_state;

#[component]
pub fn KeyPanel() -> impl IntoView {
    let state = use_app_state();
    let lines = state.chart.lines;

    view! {
        <div class="key">
            <For
                each=move || lines.get()
                key=|line| line.id
                children=move |line: Line| view! { <KeyCard line=line /> }
            />
        </div>
    }
}

#[component]
fn KeyCard(line: Line) -> impl IntoView {
    let state = use_app_state();
    let id = line.id;
    let has_data = line.has_data();
    let all_data = line.shows_all_data();
    let description = line.description.clone();

    // Sole remaining line: no deleting it, no hiding it.
    let is_only_line = move || state.chart.line_count() == 1;
    // Every pool color in use: nothing left for a duplicate.
    let at_capacity = move || !state.chart.can_add_line();

    let toggle = move |_| state.chart.toggle_line(id);
    let duplicate = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.chart.duplicate_line(id);
    };
    let edit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.open_editor(id);
    };
    let delete = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        state.chart.delete_line(id);
    };

    view! {
        <div class="key-line" id=id.css_id("key")>
            <p class="key-controls">
                <label class="key-show" class:hide=move || is_only_line() || !has_data>
                    <input
                        type="checkbox"
                        class="key-show-control"
                        prop:checked=move || !state.chart.is_hidden(id)
                        on:change=toggle
                    />
                    "Show"
                </label>
                <span class="key-control" class:hide=is_only_line>
                    <a href="#" class="key-delete-control" on:click=delete>"Delete"</a>
                </span>
                <span class="key-control">
                    <a href="#" class="key-edit-control" on:click=edit>"Edit"</a>
                </span>
                <span class="key-control" class:hide=at_capacity>
                    <a href="#" class="key-duplicate-control" on:click=duplicate>"Duplicate"</a>
                </span>
            </p>

            <h2 class="key-title" style=format!("border-top-color: {};", line.color)>
                {description.feeling}
            </h2>

            {(!has_data)
                .then(|| view! {
                    <p class="key-no-data text-error">
                        "No data matches the constraints below"
                    </p>
                })}
            {(has_data && all_data).then(|| view! { <p class="key-all-data">"All responses shown."</p> })}

            <div class="key-descriptions">
                {(!description.people.is_empty())
                    .then(|| view! {
                        <h3 class="key-subtitle">"People"</h3>
                        <KeyRows rows=description.people.clone() />
                    })}
                {(!description.place.is_empty())
                    .then(|| view! {
                        <h3 class="key-subtitle">"Place"</h3>
                        <ul class="list-unstyled">
                            {description
                                .place
                                .iter()
                                .map(|p| view! { <li><span class="key-label">{p.clone()}</span></li> })
                                .collect_view()}
                        </ul>
                    })}
                {(!description.activities.is_empty())
                    .then(|| view! {
                        <h3 class="key-subtitle">"Activities"</h3>
                        <KeyRows rows=description.activities.clone() />
                    })}
                {description
                    .notes
                    .as_ref()
                    .map(|notes| view! {
                        <h3 class="key-subtitle">"Notes"</h3>
                        <p class="key-notes">{format!("Containing “{notes}”")}</p>
                    })}
            </div>
        </div>
    }
}

/// Labelled ✓/✕ rows for required and excluded flags.
#[component]
fn KeyRows(rows: Vec<DescriptionRow>) -> impl IntoView {
    view! {
        <ul class="list-unstyled">
            {rows
                .into_iter()
                .map(|row| {
                    let mark = if row.required { "✓" } else { "✕" };
                    view! {
                        <li>
                            <span class="key-label">{row.label}</span>
                            <span class="key-field">{mark}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
