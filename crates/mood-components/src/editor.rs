//! The line-editing modal: a form that turns into a [`ConstraintSet`].
//!
//! The form itself is a plain value, converted to and from constraint sets
//! off-DOM. The component just binds signals to inputs; all the awkward
//! rules (the people radio modes, the ignored `do_other2`, empty notes)
//! live in [`EditorForm`].

use leptos::prelude::*;
use mood_core::{
    ConstraintSet, DataDictionary, Feeling, HomeWork, InOut, ALONE_LABEL, DICTIONARY,
};
use mood_state::use_app_state;
use std::collections::BTreeMap;

// ============================================================================
// FORM MODEL
// ============================================================================

/// Which of the three People radio choices is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeopleMode {
    /// No people constraints at all.
    #[default]
    Any,
    /// Every people flag constrained to unset.
    Alone,
    /// Per-person tri-states apply.
    With,
}

/// Editable form state for one line. `None` in a tri-state map means the
/// flag is not constrained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorForm {
    pub feeling: Feeling,
    pub people_mode: PeopleMode,
    pub people: BTreeMap<String, Option<bool>>,
    pub in_out: Option<InOut>,
    pub home_work: Option<HomeWork>,
    pub notes: String,
    pub activities: BTreeMap<String, Option<bool>>,
}

impl EditorForm {
    /// Populate the form from a line's current constraints.
    pub fn from_constraints(constraints: &ConstraintSet, dict: &DataDictionary) -> Self {
        let mut people: BTreeMap<String, Option<bool>> = dict
            .people
            .iter()
            .map(|(key, _)| ((*key).to_string(), constraints.flags.get(*key).copied()))
            .collect();

        let people_mode = if constraints.is_alone(dict) {
            // All tri-states reset; the mode alone carries the meaning.
            for value in people.values_mut() {
                *value = None;
            }
            PeopleMode::Alone
        } else if people.values().any(|v| v.is_some()) {
            PeopleMode::With
        } else {
            PeopleMode::Any
        };

        let activities = dict
            .ui_activities()
            .map(|(key, _)| (key.to_string(), constraints.flags.get(key).copied()))
            .collect();

        Self {
            feeling: constraints.feeling,
            people_mode,
            people,
            in_out: constraints.in_out,
            home_work: constraints.home_work,
            notes: constraints.notes.clone().unwrap_or_default(),
            activities,
        }
    }

    /// Turn the form back into a constraint set.
    pub fn to_constraints(&self, dict: &DataDictionary) -> ConstraintSet {
        let mut flags = BTreeMap::new();

        match self.people_mode {
            PeopleMode::Any => {}
            PeopleMode::Alone => {
                for (key, _) in dict.people {
                    flags.insert((*key).to_string(), false);
                }
            }
            PeopleMode::With => {
                for (key, value) in &self.people {
                    if let Some(required) = value {
                        flags.insert(key.clone(), *required);
                    }
                }
            }
        }

        for (key, value) in &self.activities {
            if let Some(required) = value {
                flags.insert(key.clone(), *required);
            }
        }

        let notes = self.notes.trim();

        ConstraintSet {
            feeling: self.feeling,
            in_out: self.in_out,
            home_work: self.home_work,
            flags,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}

// ============================================================================
// TRI-STATE SELECT VALUES
// ============================================================================

fn tri_state_value(state: Option<bool>) -> &'static str {
    match state {
        None => "ignore",
        Some(true) => "1",
        Some(false) => "0",
    }
}

fn parse_tri_state(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

// ============================================================================
// EDITOR MODAL
// ============================================================================

/// Modal form for the line currently in `state.editing`.
#[component]
pub fn LineEditor() -> impl IntoView {
    let state = use_app_state();
    let form = RwSignal::new(EditorForm::default());

    // Re-seed the form whenever a different line is opened.
    Effect::new(move |_| {
        if let Some(line) = state.editing.get().and_then(|id| state.chart.find_line(id)) {
            form.set(EditorForm::from_constraints(&line.constraints, &DICTIONARY));
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = state.editing.get_untracked() {
            let constraints = form.with_untracked(|f| f.to_constraints(&DICTIONARY));
            state.chart.apply_edit(id, constraints);
        }
        state.close_editor();
    };
    let cancel = move |_| state.close_editor();

    let editor_color = move || {
        state
            .editing
            .get()
            .and_then(|id| state.chart.find_line(id))
            .map(|line| line.color)
            .unwrap_or_default()
    };

    view! {
        <Show when=move || state.editing.get().is_some()>
            <div class="modal-backdrop">
                <form
                    class="line-edit modal"
                    style=move || format!("border-top-color: {};", editor_color())
                    on:submit=submit
                >
                    <div class="line-edit-body">
                        <FeelingsSection form=form />
                        <PeopleSection form=form />
                        <PlaceSection form=form />
                        <NotesSection form=form />
                        <ActivitiesSection form=form />
                    </div>
                    <div class="line-edit-buttons">
                        <button type="button" class="button-cancel" on:click=cancel>
                            "Cancel"
                        </button>
                        <button type="submit" class="button-submit">"Done"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[component]
fn FeelingsSection(form: RwSignal<EditorForm>) -> impl IntoView {
    view! {
        <h2 class="subtitle">"Feelings"</h2>
        <p class="muted-labels">
            {Feeling::ALL
                .iter()
                .map(|&feeling| {
                    view! {
                        <label>
                            <input
                                type="radio"
                                name="le-feeling"
                                value=feeling.key()
                                prop:checked=move || form.with(|f| f.feeling == feeling)
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.feeling = Feeling::parse_or_default(&value));
                                }
                            />
                            {feeling.label()}
                        </label>
                        <br />
                    }
                })
                .collect_view()}
        </p>
        <hr />
    }
}

#[component]
fn PeopleSection(form: RwSignal<EditorForm>) -> impl IntoView {
    let modes = [
        (PeopleMode::Any, "Any"),
        (PeopleMode::Alone, ALONE_LABEL),
        (PeopleMode::With, "With…"),
    ];

    view! {
        <div class="le-people">
            <h2 class="subtitle">"People"</h2>
            <p class="muted-labels">
                {modes
                    .into_iter()
                    .map(|(mode, label)| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="le-people"
                                    prop:checked=move || form.with(|f| f.people_mode == mode)
                                    on:change=move |_| form.update(|f| f.people_mode = mode)
                                />
                                {label}
                            </label>
                            <br />
                        }
                    })
                    .collect_view()}
            </p>
            <ul
                class="le-people-with-list list-unstyled muted-labels"
                class:hide=move || form.with(|f| f.people_mode != PeopleMode::With)
            >
                {DICTIONARY
                    .people
                    .iter()
                    .map(|&(key, label)| {
                        view! {
                            <li>
                                <label class="le-select-label">{label}</label>
                                <span class="le-select-field">
                                    <TriStateSelect form=form flag=key group=FlagGroup::People />
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
        <hr />
    }
}

#[component]
fn PlaceSection(form: RwSignal<EditorForm>) -> impl IntoView {
    let set_in_out = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.in_out = InOut::parse(&value).ok());
    };
    let set_home_work = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.home_work = HomeWork::parse(&value).ok());
    };

    view! {
        <h2 class="subtitle">"Place"</h2>
        <p>
            <select
                name="le-place-inout"
                prop:value=move || {
                    form.with(|f| f.in_out.map(|v| v.key()).unwrap_or("ignore").to_string())
                }
                on:change=set_in_out
            >
                <option value="ignore">"Indoors / Outdoors / In a vehicle"</option>
                {InOut::ALL
                    .iter()
                    .map(|v| {
                        view! { <option value=v.key()>{format!("{} only", v.label())}</option> }
                    })
                    .collect_view()}
            </select>
        </p>
        <p>
            <select
                name="le-place-homework"
                prop:value=move || {
                    form.with(|f| f.home_work.map(|v| v.key()).unwrap_or("ignore").to_string())
                }
                on:change=set_home_work
            >
                <option value="ignore">"At home / At work / Elsewhere"</option>
                {HomeWork::ALL
                    .iter()
                    .map(|v| {
                        view! { <option value=v.key()>{format!("{} only", v.label())}</option> }
                    })
                    .collect_view()}
            </select>
        </p>
        <hr />
    }
}

#[component]
fn NotesSection(form: RwSignal<EditorForm>) -> impl IntoView {
    view! {
        <h2 class="subtitle">
            <label for="le-notes">"Notes containing:"</label>
        </h2>
        <p>
            <input
                type="text"
                id="le-notes"
                prop:value=move || form.with(|f| f.notes.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.notes = value);
                }
            />
        </p>
        <hr />
    }
}

#[component]
fn ActivitiesSection(form: RwSignal<EditorForm>) -> impl IntoView {
    view! {
        <div class="le-activities">
            <h2 class="subtitle">"Activities"</h2>
            <ul class="list-unstyled muted-labels">
                {DICTIONARY
                    .ui_activities()
                    .map(|(key, label)| {
                        view! {
                            <li>
                                <label class="le-select-label">{label}</label>
                                <span class="le-select-field">
                                    <TriStateSelect form=form flag=key group=FlagGroup::Activities />
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum FlagGroup {
    People,
    Activities,
}

#[component]
fn TriStateSelect(
    form: RwSignal<EditorForm>,
    flag: &'static str,
    group: FlagGroup,
) -> impl IntoView {
    let current = move || {
        form.with(|f| {
            let map = match group {
                FlagGroup::People => &f.people,
                FlagGroup::Activities => &f.activities,
            };
            tri_state_value(map.get(flag).copied().flatten()).to_string()
        })
    };
    let on_change = move |ev: leptos::ev::Event| {
        let value = parse_tri_state(&event_target_value(&ev));
        form.update(|f| {
            let map = match group {
                FlagGroup::People => &mut f.people,
                FlagGroup::Activities => &mut f.activities,
            };
            map.insert(flag.to_string(), value);
        });
    };

    view! {
        <select prop:value=current on:change=on_change>
            <option value="ignore">"✓ or ✕"</option>
            <option value="1">"✓"</option>
            <option value="0">"✕"</option>
        </select>
    }
}
