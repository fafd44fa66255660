//! # chartkit
//!
//! Core chart primitives: scales, path builders, tick generators.
//! Implements Strategy pattern for flexible scale behaviors.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale for the score axis (D3-style continuous scale)
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if count <= 1 {
            return vec![min];
        }

        let step = (max - min) / (count - 1) as f64;
        (0..count).map(|i| min + step * i as f64).collect()
    }
}

// ============================================================================
// TIME SCALE
// ============================================================================

/// Time scale (maps unix-millisecond timestamps to pixel positions)
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    domain: (i64, i64),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new() -> Self {
        Self {
            domain: (0, 1),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: i64, max: i64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Scale timestamp to pixel position
    pub fn scale(&self, timestamp: i64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if d_max == d_min {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (timestamp - d_min) as f64 / (d_max - d_min) as f64;
        r_min + normalized * (r_max - r_min)
    }

    /// Inverse scale (pixel to timestamp)
    pub fn invert(&self, value: f64) -> i64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        (d_min as f64 + normalized * (d_max - d_min) as f64) as i64
    }

    /// Calendar-aligned tick positions across the domain.
    ///
    /// Picks a unit (hours, days, weeks or months) that yields close to
    /// `count` ticks and snaps each tick to the start of that unit.
    pub fn time_ticks(&self, count: usize) -> Vec<TimeTick> {
        let (min, max) = self.domain;
        if count == 0 || max <= min {
            return Vec::new();
        }

        let span_ms = max - min;
        let target = (span_ms / count.max(1) as i64).max(1);
        let unit = TickUnit::for_interval(target);

        let mut ticks = Vec::new();
        let start = Utc
            .timestamp_millis_opt(min)
            .single()
            .unwrap_or_else(Utc::now);
        let mut cursor = unit.floor(start);

        while cursor.timestamp_millis() <= max {
            let ms = cursor.timestamp_millis();
            if ms >= min {
                ticks.push(TimeTick {
                    timestamp_ms: ms,
                    label: unit.label(&cursor),
                });
            }
            cursor = unit.advance(cursor);
        }

        ticks
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

/// One labelled x-axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTick {
    pub timestamp_ms: i64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TickUnit {
    ThreeHours,
    Day,
    Week,
    Month,
    ThreeMonths,
    Year,
}

impl TickUnit {
    fn for_interval(interval_ms: i64) -> Self {
        const HOUR: i64 = 3_600_000;
        const DAY: i64 = 24 * HOUR;

        if interval_ms < 12 * HOUR {
            TickUnit::ThreeHours
        } else if interval_ms < 4 * DAY {
            TickUnit::Day
        } else if interval_ms < 20 * DAY {
            TickUnit::Week
        } else if interval_ms < 75 * DAY {
            TickUnit::Month
        } else if interval_ms < 270 * DAY {
            TickUnit::ThreeMonths
        } else {
            TickUnit::Year
        }
    }

    fn floor(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        let day = t.date_naive();
        match self {
            TickUnit::ThreeHours => {
                let hour = (chrono::Timelike::hour(&t) / 3) * 3;
                Utc.with_ymd_and_hms(day.year(), day.month(), day.day(), hour, 0, 0)
                    .single()
                    .unwrap_or(t)
            }
            TickUnit::Day => Utc
                .with_ymd_and_hms(day.year(), day.month(), day.day(), 0, 0, 0)
                .single()
                .unwrap_or(t),
            TickUnit::Week => {
                let back = day.weekday().num_days_from_monday() as i64;
                let monday = day - Duration::days(back);
                Utc.with_ymd_and_hms(monday.year(), monday.month(), monday.day(), 0, 0, 0)
                    .single()
                    .unwrap_or(t)
            }
            TickUnit::Month => Utc
                .with_ymd_and_hms(day.year(), day.month(), 1, 0, 0, 0)
                .single()
                .unwrap_or(t),
            TickUnit::ThreeMonths => {
                let month = ((day.month() - 1) / 3) * 3 + 1;
                Utc.with_ymd_and_hms(day.year(), month, 1, 0, 0, 0)
                    .single()
                    .unwrap_or(t)
            }
            TickUnit::Year => Utc
                .with_ymd_and_hms(day.year(), 1, 1, 0, 0, 0)
                .single()
                .unwrap_or(t),
        }
    }

    fn advance(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TickUnit::ThreeHours => t + Duration::hours(3),
            TickUnit::Day => t + Duration::days(1),
            TickUnit::Week => t + Duration::weeks(1),
            TickUnit::Month => add_months(t, 1),
            TickUnit::ThreeMonths => add_months(t, 3),
            TickUnit::Year => add_months(t, 12),
        }
    }

    fn label(&self, t: &DateTime<Utc>) -> String {
        match self {
            TickUnit::ThreeHours => t.format("%H:%M").to_string(),
            TickUnit::Day | TickUnit::Week => t.format("%e %b").to_string().trim().to_string(),
            TickUnit::Month | TickUnit::ThreeMonths => {
                if t.month() == 1 {
                    t.format("%Y").to_string()
                } else {
                    t.format("%b").to_string()
                }
            }
            TickUnit::Year => t.format("%Y").to_string(),
        }
    }
}

fn add_months(t: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let total = t.month0() + months;
    let year = t.year() + (total / 12) as i32;
    let month = total % 12 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(t)
}

// ============================================================================
// PATHS
// ============================================================================

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    let (x, y) = points[0];
    write!(path, "M{:.2},{:.2}", x, y).unwrap();

    for &(x, y) in &points[1..] {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    path
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Format a 0..1 score as a whole percentage for axis labels
pub fn format_percent(score: f64) -> String {
    format!("{:.0}", score * 100.0)
}

/// Format a 0..1 score for tooltip rows (rounded to a whole number)
pub fn format_score(score: f64) -> String {
    format!("{:.0}", (score * 100.0).round())
}

/// Full timestamp shown at the top of a tooltip, e.g. "14:05 Tue 3 Jun 2025"
pub fn format_observation_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let formatted = t.format("%H:%M %a %e %b %Y").to_string();
    // %e pads single-digit days with a space
    formatted.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints() {
        let scale = LinearScale::new().domain(0.0, 1.0).range(200.0, 0.0);

        assert_eq!(scale.scale(0.0), 200.0);
        assert_eq!(scale.scale(0.5), 100.0);
        assert_eq!(scale.scale(1.0), 0.0);
    }

    #[test]
    fn linear_scale_inverts() {
        let scale = LinearScale::new().domain(0.0, 1.0).range(0.0, 500.0);
        assert_eq!(scale.invert(250.0), 0.5);
    }

    #[test]
    fn time_scale_round_trips() {
        let scale = TimeScale::new().domain(1_000_000, 2_000_000).range(0.0, 920.0);
        let x = scale.scale(1_500_000);
        assert!((x - 460.0).abs() < 1e-9);
        assert_eq!(scale.invert(x), 1_500_000);
    }

    #[test]
    fn time_ticks_snap_to_month_starts() {
        let min = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let max = Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap();
        let scale = TimeScale::new()
            .domain(min.timestamp_millis(), max.timestamp_millis())
            .range(0.0, 920.0);

        let ticks = scale.time_ticks(6);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            let t = Utc.timestamp_millis_opt(tick.timestamp_ms).unwrap();
            assert_eq!(t.day(), 1);
            assert!(tick.timestamp_ms >= min.timestamp_millis());
            assert!(tick.timestamp_ms <= max.timestamp_millis());
        }
    }

    #[test]
    fn line_path_starts_with_move() {
        let path = line_path(&[(0.0, 10.0), (50.0, 20.0)]);
        assert!(path.starts_with("M0.00,10.00"));
        assert!(path.contains("L50.00,20.00"));
    }

    #[test]
    fn percent_labels_scale_by_hundred() {
        assert_eq!(format_percent(0.5), "50");
        assert_eq!(format_percent(1.0), "100");
        assert_eq!(format_score(0.674), "67");
    }

    #[test]
    fn observation_time_collapses_padding() {
        let t = Utc.with_ymd_and_hms(2025, 6, 3, 14, 5, 0).unwrap();
        assert_eq!(format_observation_time(&t), "14:05 Tue 3 Jun 2025");
    }
}
