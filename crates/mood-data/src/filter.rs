//! The pure constraint filter: raw observations in, plot points out.

use mood_core::{ConstraintSet, Point, Response};

/// Project the dataset through a constraint set.
///
/// Returns one point per response that satisfies every declared constraint,
/// carrying the response's index, start time and the score named by the
/// feeling selector. The output is a subsequence of the input: original
/// order is preserved, and identical inputs always produce identical output.
pub fn filter(responses: &[Response], constraints: &ConstraintSet) -> Vec<Point> {
    responses
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, constraints))
        .map(|(index, r)| Point {
            index,
            time_ms: r.time_ms(),
            value: r.score(constraints.feeling),
        })
        .collect()
}

fn matches(response: &Response, constraints: &ConstraintSet) -> bool {
    if let Some(in_out) = constraints.in_out {
        if response.in_out != in_out {
            return false;
        }
    }

    if let Some(home_work) = constraints.home_work {
        if response.home_work != home_work {
            return false;
        }
    }

    for (key, want) in &constraints.flags {
        // The UI's single "other" activity stands for two raw fields.
        let hit = if key == "do_other" {
            response.flag("do_other") == *want || response.flag("do_other2") == *want
        } else {
            response.flag(key) == *want
        };
        if !hit {
            return false;
        }
    }

    if let Some(needle) = &constraints.notes {
        match &response.notes {
            // A null note never matches a notes constraint.
            None => return false,
            Some(text) => {
                if !text.to_lowercase().contains(&needle.to_lowercase()) {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};
    use mood_core::{Feeling, HomeWork, InOut};
    use std::collections::BTreeMap;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_str(s, mood_core::TIME_FORMAT).unwrap()
    }

    fn response(time: &str, happy: f64) -> Response {
        Response {
            start_time: at(time),
            beep_time: None,
            happy,
            relaxed: 0.5,
            awake: 0.5,
            in_out: InOut::In,
            home_work: HomeWork::Home,
            flags: BTreeMap::new(),
            notes: None,
        }
    }

    #[test]
    fn feeling_only_keeps_everything_in_order() {
        let data = vec![
            response("2020/01/01 09:00:00 +0000", 0.2),
            response("2020/01/02 09:00:00 +0000", 0.8),
        ];
        let points = filter(&data, &ConstraintSet::feeling(Feeling::Happy));
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, 0.2);
        assert_eq!(points[1].value, 0.8);
        assert!(points[0].time_ms < points[1].time_ms);
        assert_eq!((points[0].index, points[1].index), (0, 1));
    }

    #[test]
    fn filter_is_idempotent() {
        let mut a = response("2020/01/01 09:00:00 +0000", 0.2);
        a.flags.insert("do_work".into(), true);
        let data = vec![a, response("2020/01/02 09:00:00 +0000", 0.8)];

        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.flags.insert("do_work".into(), true);

        assert_eq!(filter(&data, &c), filter(&data, &c));
    }

    #[test]
    fn place_constraints_compare_by_equality() {
        let mut out = response("2020/01/01 09:00:00 +0000", 0.4);
        out.in_out = InOut::Out;
        let data = vec![out, response("2020/01/02 09:00:00 +0000", 0.9)];

        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.in_out = Some(InOut::Out);
        let points = filter(&data, &c);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].index, 0);

        c.in_out = Some(InOut::In);
        c.home_work = Some(HomeWork::Work);
        assert!(filter(&data, &c).is_empty());
    }

    #[test]
    fn zero_flag_requires_the_flag_off() {
        let mut with = response("2020/01/01 09:00:00 +0000", 0.4);
        with.flags.insert("with_friends".into(), true);
        let without = response("2020/01/02 09:00:00 +0000", 0.9);
        let data = vec![with, without];

        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.flags.insert("with_friends".into(), false);
        let points = filter(&data, &c);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].index, 1);
    }

    #[test]
    fn other_activity_covers_both_raw_fields() {
        let mut a = response("2020/01/01 09:00:00 +0000", 0.4);
        a.flags.insert("do_other2".into(), true);
        let mut b = response("2020/01/02 09:00:00 +0000", 0.6);
        b.flags.insert("do_other".into(), true);
        let c_resp = response("2020/01/03 09:00:00 +0000", 0.8);
        let data = vec![a, b, c_resp];

        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.flags.insert("do_other".into(), true);
        let points = filter(&data, &c);
        assert_eq!(points.iter().map(|p| p.index).collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn notes_match_is_case_insensitive_substring() {
        let mut a = response("2020/01/01 09:00:00 +0000", 0.4);
        a.notes = Some("Lovely Walk in the park".into());
        let b = response("2020/01/02 09:00:00 +0000", 0.6);
        let data = vec![a, b];

        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.notes = Some("walk".into());
        let points = filter(&data, &c);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].index, 0);
    }

    #[test]
    fn null_notes_never_match_a_notes_constraint() {
        let data = vec![response("2020/01/01 09:00:00 +0000", 0.4)];
        let mut c = ConstraintSet::feeling(Feeling::Happy);
        c.notes = Some("abc".into());
        assert!(filter(&data, &c).is_empty());
    }

    #[test]
    fn feeling_selector_picks_the_score() {
        let data = vec![response("2020/01/01 09:00:00 +0000", 0.2)];
        let points = filter(&data, &ConstraintSet::feeling(Feeling::Relaxed));
        assert_eq!(points[0].value, 0.5);
    }
}
