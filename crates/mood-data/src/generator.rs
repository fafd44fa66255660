//! Weighted demo-data generator.
//!
//! Produces a believable single persona rather than uniform noise: keener on
//! home than work and meetings, eats at mealtimes, sleepier first thing and
//! last thing. A drop-in replacement for a fetched export.

use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Timelike, Utc};
use mood_core::{HomeWork, InOut, Response, DICTIONARY};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Configuration for the generated dataset.
#[derive(Debug, Clone)]
pub struct DemoGenerator {
    /// How far back from today responses are generated.
    pub days: i64,
    pub responses_per_day: usize,
    /// Responses only land between these hours (inclusive start, inclusive end).
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self {
            days: 365,
            responses_per_day: 2,
            start_hour: 8,
            end_hour: 22,
        }
    }
}

impl DemoGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Generate the full time-ordered dataset.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Response> {
        let today = Utc::now().date_naive();
        let start = today - Duration::days(self.days);
        let mut data: Vec<Response> = Vec::with_capacity((self.days as usize + 1) * self.responses_per_day);

        let mut day = start;
        while day <= today {
            let mut hours: Vec<u32> = Vec::with_capacity(self.responses_per_day);
            while hours.len() < self.responses_per_day {
                let hour = rng.gen_range(self.start_hour..=self.end_hour);
                if !hours.contains(&hour) {
                    hours.push(hour);
                }
            }
            hours.sort_unstable();

            for hour in hours {
                let minute = rng.gen_range(0..60u32);
                let when = Utc
                    .with_ymd_and_hms(day.year(), day.month(), day.day(), hour, minute, 0)
                    .single()
                    .expect("generated time is valid")
                    .fixed_offset();
                let previous = data.last();
                let response = self.generate_response(rng, when, previous);
                data.push(response);
            }

            day += Duration::days(1);
        }

        data
    }

    fn generate_response<R: Rng>(
        &self,
        rng: &mut R,
        when: DateTime<FixedOffset>,
        previous: Option<&Response>,
    ) -> Response {
        let (in_out, home_work) = generate_place(rng, &when);
        let mut flags = BTreeMap::new();
        generate_people(rng, &when, home_work, &mut flags);
        generate_activities(rng, &when, in_out, home_work, &mut flags);
        let (happy, relaxed, awake) =
            generate_feelings(rng, &when, in_out, home_work, &flags, previous);

        Response {
            start_time: when,
            beep_time: Some(when),
            happy,
            relaxed,
            awake,
            in_out,
            home_work,
            flags,
            notes: None,
        }
    }
}

fn is_working_hours(when: &DateTime<FixedOffset>) -> bool {
    let weekday = when.weekday().number_from_monday();
    weekday <= 5 && (9..=17).contains(&when.hour())
}

fn is_weekend(when: &DateTime<FixedOffset>) -> bool {
    when.weekday().number_from_monday() >= 6
}

fn generate_place<R: Rng>(rng: &mut R, when: &DateTime<FixedOffset>) -> (InOut, HomeWork) {
    let home_work = if is_working_hours(when) {
        match rng.gen_range(0.0..1.0f64) {
            c if c < 0.8 => HomeWork::Work,
            c if c < 0.9 => HomeWork::Home,
            _ => HomeWork::Other,
        }
    } else if is_weekend(when) {
        if rng.gen_range(0.0..1.0f64) < 0.6 {
            HomeWork::Home
        } else {
            HomeWork::Other
        }
    } else if rng.gen_range(0.0..1.0f64) < 0.7 {
        HomeWork::Home
    } else {
        HomeWork::Other
    };

    let in_out = match home_work {
        HomeWork::Home => {
            if rng.gen_range(0.0..1.0f64) < 0.8 {
                InOut::In
            } else {
                InOut::Out
            }
        }
        HomeWork::Work => {
            if rng.gen_range(0.0..1.0f64) < 0.9 {
                InOut::In
            } else {
                InOut::Out
            }
        }
        HomeWork::Other => match rng.gen_range(0.0..1.0f64) {
            c if c < 0.3 => InOut::Vehicle,
            c if c < 0.6 => InOut::In,
            _ => InOut::Out,
        },
    };

    (in_out, home_work)
}

fn generate_people<R: Rng>(
    rng: &mut R,
    when: &DateTime<FixedOffset>,
    home_work: HomeWork,
    flags: &mut BTreeMap<String, bool>,
) {
    for (key, _) in DICTIONARY.people {
        flags.insert((*key).into(), false);
    }

    // Overall chance of just not being with anyone.
    if rng.gen_range(0.0..1.0f64) >= 0.9 {
        return;
    }

    let mut set = |key: &str, chance: f64, rng: &mut R| {
        if rng.gen_range(0.0..1.0f64) < chance {
            flags.insert(key.into(), true);
        }
    };

    if home_work == HomeWork::Work || (home_work == HomeWork::Other && is_working_hours(when)) {
        set("with_peers", 0.9, rng);
        set("with_clients", 0.2, rng);
        set("with_others", 0.1, rng);
    } else if home_work == HomeWork::Home {
        set("with_partner", 0.4, rng);
        set("with_children", 0.4, rng);
        set("with_relatives", 0.2, rng);
        set("with_friends", 0.1, rng);
        set("with_others", 0.1, rng);
    } else {
        set("with_partner", 0.4, rng);
        set("with_children", 0.4, rng);
        set("with_relatives", 0.2, rng);
        set("with_friends", 0.3, rng);
        set("with_others", 0.2, rng);
    }
}

/// Weighted bundles of activities done together; repeats raise likelihood.
const HOME_DOINGS: &[&[&str]] = &[
    &["do_tv"],
    &["do_tv"],
    &["do_tv", "do_msg"],
    &["do_tv", "do_net"],
    &["do_tv", "do_eat"],
    &["do_music"],
    &["do_read"],
    &["do_read"],
    &["do_read", "do_music"],
    &["do_chores"],
    &["do_chores", "do_music"],
    &["do_rest"],
    &["do_cook"],
    &["do_cook"],
    &["do_cook", "do_speech"],
    &["do_wash"],
    &["do_admin"],
    &["do_msg"],
    &["do_net"],
    &["do_gardening"],
    &["do_compgame"],
    &["do_game"],
    &["do_art"],
    &["do_pet"],
    &["do_sport"],
    &["do_work"],
    &["do_sick"],
];

const OUT_DOINGS: &[&[&str]] = &[
    &["do_walk"],
    &["do_walk"],
    &["do_gardening"],
    &["do_match"],
    &["do_sport"],
    &["do_wait"],
    &["do_wait", "do_msg"],
    &["do_pet"],
    &["do_shop"],
    &["do_shop"],
    &["do_shop", "do_msg"],
    &["do_read"],
    &["do_net"],
    &["do_other"],
];

const INDOORS_ELSEWHERE_DOINGS: &[&[&str]] = &[
    &["do_tv"],
    &["do_tv", "do_msg"],
    &["do_theatre"],
    &["do_museum"],
    &["do_work"],
    &["do_shop"],
    &["do_shop", "do_msg"],
    &["do_wait", "do_msg"],
    &["do_msg"],
    &["do_net"],
    &["do_music"],
    &["do_read"],
    &["do_match"],
    &["do_sport"],
    &["do_compgame"],
    &["do_game"],
    &["do_bet"],
    &["do_art"],
    &["do_other"],
];

const VEHICLE_DOINGS: &[&[&str]] = &[
    &["do_music"],
    &["do_music"],
    &["do_other"],
    &["do_read"],
    &["do_read"],
    &["do_msg"],
    &["do_msg"],
    &["do_net"],
    &["do_compgame"],
];

fn generate_activities<R: Rng>(
    rng: &mut R,
    when: &DateTime<FixedOffset>,
    in_out: InOut,
    home_work: HomeWork,
    flags: &mut BTreeMap<String, bool>,
) {
    for (key, _) in DICTIONARY.activities {
        flags.entry((*key).into()).or_insert(false);
    }

    let with = |flags: &BTreeMap<String, bool>, key: &str| flags.get(key) == Some(&true);

    match home_work {
        HomeWork::Work => {
            if rng.gen_range(0.0..1.0f64) < 0.9 {
                flags.insert("do_work".into(), true);
            }
            if with(flags, "with_clients") && rng.gen_range(0.0..1.0f64) < 0.8 {
                flags.insert("do_meet".into(), true);
            } else if with(flags, "with_peers") && rng.gen_range(0.0..1.0f64) < 0.4 {
                flags.insert("do_meet".into(), true);
            } else if rng.gen_range(0.0..1.0f64) < 0.2 {
                flags.insert("do_admin".into(), true);
            }
        }
        HomeWork::Home => {
            let social = ["with_partner", "with_friends", "with_relatives", "with_children"]
                .iter()
                .any(|k| with(flags, k));
            if social && rng.gen_range(0.0..1.0f64) < 0.2 {
                flags.insert("do_chat".into(), true);
            }
            if !with(flags, "do_chat") || rng.gen_range(0.0..1.0f64) < 0.3 {
                let bundle = HOME_DOINGS.choose(rng).copied().unwrap_or(&[]);
                for key in bundle {
                    flags.insert((*key).into(), true);
                }
            }
        }
        HomeWork::Other => {
            if in_out == InOut::Vehicle && rng.gen_range(0.0..1.0f64) < 0.7 {
                flags.insert("do_travel".into(), true);
            }
            let doings = match in_out {
                InOut::In => INDOORS_ELSEWHERE_DOINGS,
                InOut::Out => OUT_DOINGS,
                InOut::Vehicle => VEHICLE_DOINGS,
            };
            let bundle = doings.choose(rng).copied().unwrap_or(&[]);
            for key in bundle {
                flags.insert((*key).into(), true);
            }
        }
    }

    // Eating and drinking are time-of-day driven, anywhere.
    let hour = when.hour();
    if hour <= 17 && rng.gen_range(0.0..1.0f64) < 0.08 {
        flags.insert("do_caffeine".into(), true);
    }
    if home_work != HomeWork::Work && !with(flags, "do_caffeine") {
        let chance = if (12..=17).contains(&hour) {
            0.05
        } else if hour >= 18 {
            0.2
        } else {
            0.0
        };
        if rng.gen_range(0.0..1.0f64) < chance {
            flags.insert("do_booze".into(), true);
        }
    }
    if matches!(hour, 6..=8 | 12..=14 | 19..=21) && rng.gen_range(0.0..1.0f64) < 0.5 {
        flags.insert("do_eat".into(), true);
    }

    // Always doing at least something.
    if !flags.iter().any(|(k, v)| k.starts_with("do_") && *v) {
        flags.insert("do_other".into(), true);
    }
}

const HAPPY_WEIGHTS: &[(&str, f64)] = &[
    ("with_partner", 0.1),
    ("with_children", 0.1),
    ("with_clients", -0.1),
    ("with_friends", 0.15),
    ("do_work", -0.1),
    ("do_meet", -0.1),
    ("do_cook", 0.05),
    ("do_chores", -0.1),
    ("do_admin", -0.05),
    ("do_sick", -0.3),
    ("do_chat", 0.15),
    ("do_tv", 0.05),
    ("do_theatre", 0.05),
    ("do_museum", 0.05),
    ("do_match", 0.1),
    ("do_sport", 0.1),
    ("do_gardening", 0.1),
    ("do_birdwatch", 0.1),
    ("do_art", 0.1),
    ("do_sing", 0.1),
];

const RELAXED_WEIGHTS: &[(&str, f64)] = &[
    ("with_peers", -0.03),
    ("with_clients", -0.1),
    ("do_meet", -0.1),
    ("do_wait", -0.05),
    ("do_sick", -0.1),
    ("do_child", -0.15),
    ("do_care", -0.15),
    ("do_pray", 0.1),
    ("do_booze", 0.1),
    ("do_tv", 0.05),
    ("do_gardening", 0.05),
    ("do_art", 0.05),
    ("do_sing", 0.05),
];

const AWAKE_WEIGHTS: &[(&str, f64)] = &[
    ("do_rest", -0.1),
    ("do_sick", -0.25),
    ("do_sport", 0.15),
    ("do_birdwatch", 0.05),
];

fn generate_feelings<R: Rng>(
    rng: &mut R,
    when: &DateTime<FixedOffset>,
    in_out: InOut,
    home_work: HomeWork,
    flags: &BTreeMap<String, bool>,
    previous: Option<&Response>,
) -> (f64, f64, f64) {
    // Three draws per feeling weight totals towards the middle of the range.
    let mut happy = rng.gen_range(0.05..0.25) + rng.gen_range(0.05..0.25) + rng.gen_range(0.05..0.25);
    let mut relaxed = rng.gen_range(0.0..0.35) + rng.gen_range(0.05..0.40) + rng.gen_range(0.0..0.30);
    let mut awake = rng.gen_range(0.0..0.35) + rng.gen_range(0.05..0.40) + rng.gen_range(0.0..0.30);

    for (key, set) in flags {
        if !set {
            continue;
        }
        if let Some((_, w)) = HAPPY_WEIGHTS.iter().find(|(k, _)| k == key) {
            happy += w;
        }
        if let Some((_, w)) = RELAXED_WEIGHTS.iter().find(|(k, _)| k == key) {
            relaxed += w;
        }
        if let Some((_, w)) = AWAKE_WEIGHTS.iter().find(|(k, _)| k == key) {
            awake += w;
        }
    }

    // Sleepier at the edges of the day.
    match when.hour() {
        0..=6 | 23 => awake -= 0.1,
        7 | 22 => awake -= 0.05,
        _ => {}
    }

    // Feelings hang around: pull towards the previous response.
    if let Some(prev) = previous {
        if prev.happy < happy {
            happy -= 0.05;
        } else if prev.happy > happy {
            happy += 0.05;
        }
    }

    if in_out == InOut::Out {
        happy += 0.05;
        relaxed += 0.05;
        awake += 0.05;
    }
    match home_work {
        HomeWork::Home => relaxed += 0.05,
        HomeWork::Work => relaxed -= 0.05,
        HomeWork::Other => {}
    }

    (
        clamp_feeling(rng, happy),
        clamp_feeling(rng, relaxed),
        clamp_feeling(rng, awake),
    )
}

/// Nudge an out-of-range score back inside (0, 1) with a little jitter so
/// clamped values don't pile up on the boundary.
fn clamp_feeling<R: Rng>(rng: &mut R, value: f64) -> f64 {
    if value >= 1.0 {
        let excess = value - 1.0;
        value - rng.gen_range((excess + 0.01)..(excess + 0.04))
    } else if value <= 0.0 {
        let deficit = value.abs();
        value + rng.gen_range((deficit + 0.01)..(deficit + 0.03))
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_time_ordered_responses() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = DemoGenerator::new().days(10).generate(&mut rng);
        assert_eq!(data.len(), 22);
        assert!(data.windows(2).all(|w| w[0].start_time < w[1].start_time));
    }

    #[test]
    fn scores_stay_normalized() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = DemoGenerator::new().days(60).generate(&mut rng);
        for r in &data {
            for score in [r.happy, r.relaxed, r.awake] {
                assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
            }
        }
    }

    #[test]
    fn every_response_does_something() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = DemoGenerator::new().days(30).generate(&mut rng);
        for r in &data {
            assert!(r.flags.iter().any(|(k, v)| k.starts_with("do_") && *v));
        }
    }

    #[test]
    fn hours_respect_the_window() {
        let mut rng = StdRng::seed_from_u64(11);
        let cfg = DemoGenerator::new().days(30);
        let data = cfg.generate(&mut rng);
        for r in &data {
            let h = r.start_time.hour();
            assert!((cfg.start_hour..=cfg.end_hour).contains(&h));
        }
    }
}
