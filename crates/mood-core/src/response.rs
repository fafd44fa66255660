//! The observation type and its wire format.
//!
//! The export is a JSON array with timestamps like
//! `"2013/07/21 15:12:58 +0100"` and the `with_*`/`do_*` flags as 0/1
//! integers alongside the named fields.

use crate::{DataError, Feeling, HomeWork, InOut};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timestamp layout used by the export.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// One element of the JSON array, before cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    pub start_time: String,
    #[serde(default)]
    pub beep_time: Option<String>,
    pub happy: f64,
    pub relaxed: f64,
    pub awake: f64,
    pub in_out: InOut,
    pub home_work: HomeWork,
    #[serde(default)]
    pub notes: Option<String>,
    /// Everything else: the 0/1 `with_*` and `do_*` flags, plus fields we
    /// don't use (location accuracy and the like).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ============================================================================
// CLEANED OBSERVATION
// ============================================================================

/// One cleaned observation. Immutable once loaded; the dataset is shared
/// read-only across all lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub start_time: DateTime<FixedOffset>,
    pub beep_time: Option<DateTime<FixedOffset>>,
    pub happy: f64,
    pub relaxed: f64,
    pub awake: f64,
    pub in_out: InOut,
    pub home_work: HomeWork,
    /// `with_*` and `do_*` keys that are set. Absent means false.
    pub flags: BTreeMap<String, bool>,
    pub notes: Option<String>,
}

impl Response {
    /// The score this response carries for a feeling selector.
    pub fn score(&self, feeling: Feeling) -> f64 {
        match feeling {
            Feeling::Happy => self.happy,
            Feeling::Relaxed => self.relaxed,
            Feeling::Awake => self.awake,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn time_ms(&self) -> i64 {
        self.start_time.timestamp_millis()
    }
}

impl TryFrom<RawResponse> for Response {
    type Error = DataError;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        let start_time = parse_time(&raw.start_time)?;
        let beep_time = match raw.beep_time.as_deref() {
            Some(s) if !s.is_empty() => Some(parse_time(s)?),
            _ => None,
        };

        let mut flags = BTreeMap::new();
        for (key, value) in &raw.extra {
            if key.starts_with("with_") || key.starts_with("do_") {
                // 0/1 integers in the export; anything truthy counts.
                let set = match value {
                    serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0) != 0.0,
                    serde_json::Value::Bool(b) => *b,
                    _ => false,
                };
                flags.insert(key.clone(), set);
            }
        }

        Ok(Self {
            start_time,
            beep_time,
            happy: raw.happy,
            relaxed: raw.relaxed,
            awake: raw.awake,
            in_out: raw.in_out,
            home_work: raw.home_work,
            flags,
            notes: raw.notes,
        })
    }
}

fn parse_time(s: &str) -> Result<DateTime<FixedOffset>, DataError> {
    DateTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|e| DataError::Parse(format!("bad timestamp {s:?}: {e}")))
}

/// Decode and clean a whole export. Input order is preserved; the export is
/// already time-ordered.
pub fn parse_dataset(json: &str) -> Result<Vec<Response>, DataError> {
    let raw: Vec<RawResponse> =
        serde_json::from_str(json).map_err(|e| DataError::Parse(e.to_string()))?;
    raw.into_iter().map(Response::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "start_time": "2013/07/21 15:12:58 +0100",
            "beep_time": "2013/07/21 15:10:00 +0100",
            "happy": 0.82, "relaxed": 0.5, "awake": 0.63,
            "in_out": "out", "home_work": "other",
            "with_partner": 1, "with_children": 0,
            "do_walk": 1, "do_eat": 0,
            "accuracy_m": 200,
            "notes": "On the beach"
        },
        {
            "start_time": "2013/07/22 09:01:10 +0100",
            "beep_time": null,
            "happy": 0.31, "relaxed": 0.4, "awake": 0.9,
            "in_out": "in", "home_work": "work",
            "with_peers": 1, "do_work": 1,
            "notes": null
        }
    ]"#;

    #[test]
    fn parses_and_cleans_the_export() {
        let data = parse_dataset(SAMPLE).unwrap();
        assert_eq!(data.len(), 2);

        let first = &data[0];
        assert_eq!(first.in_out, InOut::Out);
        assert!(first.flag("with_partner"));
        assert!(!first.flag("with_children"));
        assert!(first.flag("do_walk"));
        assert_eq!(first.notes.as_deref(), Some("On the beach"));
        // Non-flag extras are dropped.
        assert!(!first.flags.contains_key("accuracy_m"));

        let second = &data[1];
        assert!(second.beep_time.is_none());
        assert!(second.notes.is_none());
        assert!(second.time_ms() > first.time_ms());
    }

    #[test]
    fn score_selects_the_right_field() {
        let data = parse_dataset(SAMPLE).unwrap();
        assert_eq!(data[0].score(Feeling::Happy), 0.82);
        assert_eq!(data[0].score(Feeling::Relaxed), 0.5);
        assert_eq!(data[0].score(Feeling::Awake), 0.63);
    }

    #[test]
    fn bad_timestamp_is_a_parse_error() {
        let json = r#"[{"start_time": "yesterday", "happy": 0.5, "relaxed": 0.5,
            "awake": 0.5, "in_out": "in", "home_work": "home"}]"#;
        assert!(matches!(parse_dataset(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let json = r#"[{"start_time": "2013/07/21 15:12:58 +0100", "happy": 0.5,
            "relaxed": 0.5, "awake": 0.5, "in_out": "hovering", "home_work": "home"}]"#;
        assert!(parse_dataset(json).is_err());
    }
}
