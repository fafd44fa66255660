//! # mood-core
//!
//! Core domain types for the Mood Chart explorer: observations ("responses"),
//! feelings, places, constraint sets and the static data dictionary that
//! labels everything.

pub mod constraint;
pub mod dictionary;
pub mod error;
pub mod feeling;
pub mod line;
pub mod place;
pub mod response;

pub use constraint::*;
pub use dictionary::*;
pub use error::*;
pub use feeling::*;
pub use line::*;
pub use place::*;
pub use response::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// LINE IDENTITY
// ============================================================================

/// Stable identifier for one plotted line.
///
/// Generated once when the line is created and kept for the line's whole
/// lifetime, including across constraint edits. All chart and key elements
/// are keyed by this, never by position in the line collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// CSS-safe element id fragment, e.g. `"focus-3f2a…"`.
    pub fn css_id(&self, area: &str) -> String {
        format!("{}-{}", area, self.0.simple())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

// ============================================================================
// PLOT POINTS
// ============================================================================

/// One observation projected for a line's feeling selector.
///
/// `index` is the position of the source response in the shared dataset and
/// is the back-reference used for tooltip content. Derived data: recomputed
/// whenever the line's constraints change, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub index: usize,
    /// Milliseconds since the Unix epoch, matching the response's start time.
    pub time_ms: i64,
    /// The selected feeling score, 0..=1.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ids_are_unique() {
        let a = LineId::new();
        let b = LineId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn css_id_carries_area_prefix() {
        let id = LineId::new();
        assert!(id.css_id("focus").starts_with("focus-"));
        assert!(id.css_id("context").starts_with("context-"));
        assert_ne!(id.css_id("focus"), id.css_id("context"));
    }
}
