//! Dataset ownership and line building.

use crate::{filter, ColorPool};
use mood_core::{ConstraintSet, DataDictionary, Line, LineId, Response, DICTIONARY, LINE_COLORS};
use std::sync::Arc;

/// Owns the loaded dataset and the color pool, and builds [`Line`]s from
/// constraint sets.
///
/// The dataset is immutable once loaded and shared read-only; loading a new
/// dataset replaces it wholesale. Line ids are assigned here, at creation.
#[derive(Debug, Clone)]
pub struct DataStore {
    responses: Arc<Vec<Response>>,
    colors: ColorPool,
    dict: &'static DataDictionary,
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Vec::new()),
            colors: ColorPool::new(LINE_COLORS),
            dict: &DICTIONARY,
        }
    }

    /// Replace the dataset. Existing lines must be rebuilt by the caller.
    pub fn set_responses(&mut self, responses: Vec<Response>) {
        tracing::info!(count = responses.len(), "dataset loaded");
        self.responses = Arc::new(responses);
    }

    pub fn responses(&self) -> Arc<Vec<Response>> {
        Arc::clone(&self.responses)
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Whether another line may be created (a pool color is free).
    pub fn can_add_line(&self) -> bool {
        !self.colors.is_exhausted()
    }

    pub fn max_lines(&self) -> usize {
        self.colors.capacity()
    }

    /// Build a new line: assign a fresh id, take a color from the pool and
    /// run the filter. Returns `None` when the pool is exhausted.
    pub fn make_line(&mut self, constraints: ConstraintSet) -> Option<Line> {
        let color = self.colors.acquire()?;
        Some(self.build(LineId::new(), color, constraints))
    }

    /// Rebuild an existing line with new constraints, keeping its id and
    /// color. Used by the editor; the returned line fully replaces the old
    /// one.
    pub fn rebuild_line(&mut self, id: LineId, color: String, constraints: ConstraintSet) -> Line {
        self.colors.reserve(&color);
        self.build(id, color, constraints)
    }

    /// Release a deleted line's color back to the pool.
    pub fn release_line(&mut self, line: &Line) {
        self.colors.release(&line.color);
    }

    fn build(&self, id: LineId, color: String, constraints: ConstraintSet) -> Line {
        let points = filter(&self.responses, &constraints);
        if points.is_empty() {
            tracing::debug!(%id, "constraints match no observations");
        }
        let description = constraints.describe(self.dict);
        Line {
            id,
            color,
            constraints,
            description,
            points,
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
