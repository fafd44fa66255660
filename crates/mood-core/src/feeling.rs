//! The three normalized feeling scores every response carries.

use crate::InvalidConstraint;
use serde::{Deserialize, Serialize};

/// Which of the three feeling scores a line plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    #[default]
    Happy,
    Relaxed,
    Awake,
}

impl Feeling {
    pub const ALL: [Feeling; 3] = [Feeling::Happy, Feeling::Relaxed, Feeling::Awake];

    /// The JSON field name this feeling reads from.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Relaxed => "relaxed",
            Self::Awake => "awake",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Relaxed => "Relaxed",
            Self::Awake => "Awake",
        }
    }

    pub fn parse(key: &str) -> Result<Self, InvalidConstraint> {
        match key {
            "happy" => Ok(Self::Happy),
            "relaxed" => Ok(Self::Relaxed),
            "awake" => Ok(Self::Awake),
            other => Err(InvalidConstraint::new("feeling", other)),
        }
    }

    /// Parse, falling back to the documented default (`Happy`) for anything
    /// unrecognised.
    pub fn parse_or_default(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }
}

impl std::fmt::Display for Feeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_keys() {
        for feeling in Feeling::ALL {
            assert_eq!(Feeling::parse(feeling.key()), Ok(feeling));
        }
    }

    #[test]
    fn unknown_feeling_falls_back_to_happy() {
        assert!(Feeling::parse("euphoric").is_err());
        assert_eq!(Feeling::parse_or_default("euphoric"), Feeling::Happy);
    }
}
