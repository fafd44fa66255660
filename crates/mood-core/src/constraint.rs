//! Constraint sets: the declarative filter a line is built from, and the
//! derived human-readable description shown in that line's key.

use crate::{DataDictionary, Feeling, HomeWork, InOut, ALONE_LABEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// CONSTRAINT SET
// ============================================================================

/// A sparse set of requirements an observation must meet to appear on a line.
///
/// All declared constraints are ANDed. The feeling selector is always
/// present; everything else is optional. Passed by value into the filter;
/// edits produce a whole new set, never a patch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstraintSet {
    pub feeling: Feeling,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_out: Option<InOut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_work: Option<HomeWork>,
    /// Required values for `with_*`/`do_*` flags. A `false` entry requires
    /// the flag to be unset, which is different from the key being absent
    /// (no constraint at all).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, bool>,
    /// Case-insensitive substring the notes field must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ConstraintSet {
    pub fn feeling(feeling: Feeling) -> Self {
        Self {
            feeling,
            ..Self::default()
        }
    }

    /// True when only the feeling selector is set, i.e. the line shows the
    /// whole dataset.
    pub fn is_feeling_only(&self) -> bool {
        self.in_out.is_none()
            && self.home_work.is_none()
            && self.flags.is_empty()
            && self.notes.is_none()
    }

    /// All people flags constrained, all to zero: the "alone" selection.
    pub fn is_alone(&self, dict: &DataDictionary) -> bool {
        dict.people
            .iter()
            .all(|(key, _)| self.flags.get(*key) == Some(&false))
    }

    /// Derive the key description for this constraint set.
    pub fn describe(&self, dict: &DataDictionary) -> LineDescription {
        let place = self
            .in_out
            .map(|p| p.label().to_string())
            .into_iter()
            .chain(self.home_work.map(|p| p.label().to_string()))
            .collect();

        let people = if self.is_alone(dict) {
            vec![DescriptionRow {
                label: ALONE_LABEL.into(),
                required: true,
            }]
        } else {
            dict.people
                .iter()
                .filter_map(|(key, label)| {
                    self.flags.get(*key).map(|required| DescriptionRow {
                        label: (*label).into(),
                        required: *required,
                    })
                })
                .collect()
        };

        let activities = dict
            .ui_activities()
            .filter_map(|(key, label)| {
                self.flags.get(key).map(|required| DescriptionRow {
                    label: label.into(),
                    required: *required,
                })
            })
            .collect();

        LineDescription {
            feeling: self.feeling.label(),
            place,
            people,
            activities,
            notes: self.notes.clone(),
        }
    }
}

// ============================================================================
// DERIVED DESCRIPTION
// ============================================================================

/// One row in a key section: a label and whether the flag was required on
/// (`true`) or off (`false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    pub label: String,
    pub required: bool,
}

/// Human-readable rendering of a constraint set, grouped the way the key
/// displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDescription {
    pub feeling: &'static str,
    pub place: Vec<String>,
    pub people: Vec<DescriptionRow>,
    pub activities: Vec<DescriptionRow>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DICTIONARY;

    #[test]
    fn feeling_only_set_shows_all_data() {
        let c = ConstraintSet::feeling(Feeling::Relaxed);
        assert!(c.is_feeling_only());
        let desc = c.describe(&DICTIONARY);
        assert_eq!(desc.feeling, "Relaxed");
        assert!(desc.place.is_empty());
        assert!(desc.people.is_empty());
        assert!(desc.activities.is_empty());
    }

    #[test]
    fn describe_groups_place_people_activities() {
        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.in_out = Some(InOut::In);
        c.home_work = Some(HomeWork::Work);
        c.flags.insert("with_peers".into(), true);
        c.flags.insert("do_work".into(), true);
        c.flags.insert("do_music".into(), false);
        c.notes = Some("deadline".into());

        let desc = c.describe(&DICTIONARY);
        assert_eq!(desc.place, vec!["Indoors", "At work"]);
        assert_eq!(desc.people.len(), 1);
        assert_eq!(desc.people[0].label, "Colleagues, classmates");
        assert!(desc.people[0].required);
        assert_eq!(desc.activities.len(), 2);
        assert!(desc
            .activities
            .iter()
            .any(|row| row.label == "Listening to music" && !row.required));
        assert_eq!(desc.notes.as_deref(), Some("deadline"));
    }

    #[test]
    fn all_people_zero_reads_as_alone() {
        let mut c = ConstraintSet::feeling(Feeling::Happy);
        for (key, _) in DICTIONARY.people {
            c.flags.insert((*key).into(), false);
        }
        assert!(c.is_alone(&DICTIONARY));
        let desc = c.describe(&DICTIONARY);
        assert_eq!(desc.people.len(), 1);
        assert_eq!(desc.people[0].label, ALONE_LABEL);
        assert!(desc.people[0].required);
    }

    #[test]
    fn some_people_zero_is_not_alone() {
        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.flags.insert("with_partner".into(), false);
        assert!(!c.is_alone(&DICTIONARY));
    }
}
