//! Reactive chart state: the dataset, the plotted lines and which of them
//! are hidden.
//!
//! Line mutation goes through here so the color pool, the visibility list
//! and the line collection can never drift apart.

use leptos::prelude::*;
use mood_core::{ConstraintSet, Feeling, Line, LineId, Response};
use mood_data::DataStore;
use std::sync::Arc;

/// Reactive state for the chart and its key.
#[derive(Clone, Copy)]
pub struct ChartState {
    /// Dataset, color pool and line building
    pub store: RwSignal<DataStore>,
    /// All plotted lines, in display order
    pub lines: RwSignal<Vec<Line>>,
    /// Lines toggled invisible via the key. Hidden lines keep their color.
    pub hidden: RwSignal<Vec<LineId>>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(DataStore::new()),
            lines: RwSignal::new(Vec::new()),
            hidden: RwSignal::new(Vec::new()),
        }
    }

    /// The shared dataset, for tooltip lookups.
    pub fn observations(&self) -> Signal<Arc<Vec<Response>>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.responses()))
    }

    // ========================================================================
    // Dataset
    // ========================================================================

    /// Replace the dataset wholesale and reset to the single starter line.
    pub fn load_dataset(&self, responses: Vec<Response>) {
        self.store.update(|store| {
            *store = DataStore::new();
            store.set_responses(responses);
        });
        self.hidden.set(Vec::new());

        let starter = self
            .store
            .try_update(|store| store.make_line(ConstraintSet::feeling(Feeling::Happy)))
            .flatten();
        self.lines.set(starter.into_iter().collect());
    }

    pub fn has_data(&self) -> bool {
        self.store.with(|store| !store.is_empty())
    }

    // ========================================================================
    // Line operations
    // ========================================================================

    pub fn line_count(&self) -> usize {
        self.lines.with(|lines| lines.len())
    }

    /// Whether another line can be added (a pool color is free).
    pub fn can_add_line(&self) -> bool {
        self.store.with(|store| store.can_add_line())
    }

    pub fn max_lines(&self) -> usize {
        self.store.with(|store| store.max_lines())
    }

    pub fn find_line(&self, id: LineId) -> Option<Line> {
        self.lines
            .with(|lines| lines.iter().find(|l| l.id == id).cloned())
    }

    /// Add a line for the given constraints. Returns its id, or `None` when
    /// the color pool is exhausted.
    pub fn add_line(&self, constraints: ConstraintSet) -> Option<LineId> {
        let line = self
            .store
            .try_update(|store| store.make_line(constraints))
            .flatten()?;
        let id = line.id;
        tracing::debug!(%id, color = %line.color, "line added");
        self.lines.update(|lines| lines.push(line));
        Some(id)
    }

    /// New line with the same constraints as an existing one. It gets its
    /// own id and the next free color.
    pub fn duplicate_line(&self, id: LineId) -> Option<LineId> {
        let constraints = self.find_line(id)?.constraints;
        self.add_line(constraints)
    }

    /// Remove a line and hand its color back to the pool. If exactly one
    /// line is left afterwards it is forced visible, so the chart can never
    /// show nothing with no way to tell why.
    pub fn delete_line(&self, id: LineId) {
        let Some(line) = self.find_line(id) else {
            return;
        };
        self.store.update(|store| store.release_line(&line));
        self.lines.update(|lines| lines.retain(|l| l.id != id));
        self.hidden.update(|hidden| hidden.retain(|h| *h != id));

        if self.line_count() == 1 {
            self.hidden.set(Vec::new());
        }
    }

    /// Apply edited constraints to a line, keeping its id, color and
    /// position in the key.
    pub fn apply_edit(&self, id: LineId, constraints: ConstraintSet) {
        let Some(old) = self.find_line(id) else {
            return;
        };
        let rebuilt = self
            .store
            .try_update(|store| store.rebuild_line(id, old.color.clone(), constraints));
        if let Some(rebuilt) = rebuilt {
            self.lines.update(|lines| {
                if let Some(slot) = lines.iter_mut().find(|l| l.id == id) {
                    *slot = rebuilt;
                }
            });
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    pub fn is_hidden(&self, id: LineId) -> bool {
        self.hidden.with(|hidden| hidden.contains(&id))
    }

    pub fn toggle_line(&self, id: LineId) {
        self.hidden.update(|hidden| {
            if let Some(pos) = hidden.iter().position(|h| *h == id) {
                hidden.remove(pos);
            } else {
                hidden.push(id);
            }
        });
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use mood_core::{HomeWork, InOut, TIME_FORMAT};
    use std::collections::BTreeMap;

    fn dataset() -> Vec<Response> {
        ["2020/03/01 10:00:00 +0000", "2020/03/02 19:30:00 +0000"]
            .iter()
            .map(|time| Response {
                start_time: DateTime::parse_from_str(time, TIME_FORMAT).unwrap(),
                beep_time: None,
                happy: 0.6,
                relaxed: 0.5,
                awake: 0.4,
                in_out: InOut::In,
                home_work: HomeWork::Home,
                flags: BTreeMap::new(),
                notes: None,
            })
            .collect()
    }

    #[test]
    fn loading_a_dataset_resets_to_the_starter_line() {
        let chart = ChartState::new();
        chart.load_dataset(dataset());

        assert_eq!(chart.line_count(), 1);
        let line = chart.lines.with(|l| l[0].clone());
        assert_eq!(line.constraints.feeling, Feeling::Happy);
        assert!(line.shows_all_data());
        assert_eq!(line.points.len(), 2);

        // Loading again drops the accumulated lines.
        chart.add_line(ConstraintSet::feeling(Feeling::Relaxed));
        chart.load_dataset(dataset());
        assert_eq!(chart.line_count(), 1);
    }

    #[test]
    fn duplicate_copies_constraints_with_fresh_identity() {
        let chart = ChartState::new();
        chart.load_dataset(dataset());

        let original = chart.lines.with(|l| l[0].clone());
        let dup_id = chart.duplicate_line(original.id).unwrap();
        let dup = chart.find_line(dup_id).unwrap();

        assert_ne!(dup.id, original.id);
        assert_ne!(dup.color, original.color);
        assert_eq!(dup.constraints, original.constraints);
        assert_eq!(chart.line_count(), 2);
    }

    #[test]
    fn deleting_the_penultimate_line_reveals_the_last() {
        let chart = ChartState::new();
        chart.load_dataset(dataset());
        let first = chart.lines.with(|l| l[0].id);
        let second = chart.add_line(ConstraintSet::feeling(Feeling::Awake)).unwrap();

        chart.toggle_line(second);
        assert!(chart.is_hidden(second));

        chart.delete_line(first);
        assert_eq!(chart.line_count(), 1);
        assert!(!chart.is_hidden(second));
    }

    #[test]
    fn edit_replaces_in_place() {
        let chart = ChartState::new();
        chart.load_dataset(dataset());
        chart.add_line(ConstraintSet::feeling(Feeling::Relaxed)).unwrap();
        let target = chart.lines.with(|l| l[0].clone());

        let mut edited = ConstraintSet::feeling(Feeling::Awake);
        edited.in_out = Some(InOut::Out);
        chart.apply_edit(target.id, edited);

        let after = chart.lines.with(|l| l[0].clone());
        assert_eq!(after.id, target.id);
        assert_eq!(after.color, target.color);
        assert_eq!(after.constraints.feeling, Feeling::Awake);
        // Nothing in the dataset is outdoors, so the line goes empty.
        assert!(!after.has_data());
    }

    #[test]
    fn line_cap_follows_the_color_pool() {
        let chart = ChartState::new();
        chart.load_dataset(dataset());

        while chart.can_add_line() {
            chart.add_line(ConstraintSet::feeling(Feeling::Happy)).unwrap();
        }
        assert_eq!(chart.line_count(), chart.max_lines());
        assert!(chart.add_line(ConstraintSet::feeling(Feeling::Happy)).is_none());
    }
}
