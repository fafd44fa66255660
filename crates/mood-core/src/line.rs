//! The unit of display: one plotted line and its derived data.

use crate::{ConstraintSet, LineDescription, LineId, Point};

/// One line on the chart.
///
/// The chart holds the authoritative ordered collection of these; the key and
/// editor refer back by `id` only. An edit replaces the whole line (same id
/// and color, new constraints/description/points); it is never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    /// Drawn color, taken from the fixed pool and released on delete.
    pub color: String,
    pub constraints: ConstraintSet,
    pub description: LineDescription,
    /// Filtered, time-ordered plot points. May be empty when the constraints
    /// match nothing; the chart then draws no path for this line.
    pub points: Vec<Point>,
}

impl Line {
    pub fn has_data(&self) -> bool {
        !self.points.is_empty()
    }

    /// True when the line shows the unfiltered dataset (feeling only).
    pub fn shows_all_data(&self) -> bool {
        self.constraints.is_feeling_only()
    }
}
