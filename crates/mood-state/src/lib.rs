//! # mood-state
//!
//! Reactive state management for the mood chart.
//! Uses Leptos signals for surgical DOM updates on line and dataset changes.

pub mod lines;

pub use lines::*;

use leptos::prelude::*;
use mood_core::LineId;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// The chart's dataset, lines and visibility
    pub chart: ChartState,
    /// Line currently open in the editor, if any
    pub editing: RwSignal<Option<LineId>>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
    /// Loading state
    pub loading: RwSignal<bool>,
    /// Monotonic load counter; a finished load only applies if it is still
    /// the newest one
    generation: RwSignal<u64>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            chart: ChartState::new(),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            generation: RwSignal::new(0),
        }
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    // ========================================================================
    // Loading / import generations
    // ========================================================================

    /// Check if loading
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Start a new load attempt, superseding any in flight.
    pub fn begin_load(&self) -> u64 {
        self.clear_error();
        self.loading.set(true);
        self.generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    /// Whether a load started with [`begin_load`](Self::begin_load) is still
    /// the newest one. A stale load must discard its result.
    pub fn is_current_load(&self, generation: u64) -> bool {
        self.generation.get_untracked() == generation
    }

    /// Finish a load attempt. A stale attempt changes nothing.
    pub fn finish_load(&self, generation: u64) -> bool {
        if self.is_current_load(generation) {
            self.loading.set(false);
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Editor
    // ========================================================================

    pub fn open_editor(&self, id: LineId) {
        self.editing.set(Some(id));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_load_supersedes_older() {
        let state = AppState::new();

        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.is_current_load(first));
        assert!(state.is_current_load(second));
        assert!(!state.finish_load(first));
        assert!(state.is_loading());
        assert!(state.finish_load(second));
        assert!(!state.is_loading());
    }
}
