//! Hover tooltip for individual observations.
//!
//! Placement is plain geometry so it can be tested off-DOM: the tooltip
//! sits just right of the cursor, flipping to the left near the window's
//! right edge and sliding up at the bottom. Hiding moves it off-screen
//! rather than unmounting, so show/hide never reflows the chart.

use crate::chartkit::{format_observation_time, format_score};
use leptos::portal::Portal;
use leptos::prelude::*;
use mood_core::{DataDictionary, Response, ALONE_LABEL};

/// Off-screen x position used to hide the tooltip.
pub const HIDDEN_LEFT: f64 = -10_000.0;

/// Offset from the cursor to the tooltip's default top-left corner.
const CURSOR_OFFSET_X: f64 = 12.0;
const CURSOR_OFFSET_Y: f64 = 4.0;
/// Keep-out from the right window edge, allowing for a scrollbar.
const RIGHT_EDGE_GUTTER: f64 = 30.0;

/// Compute the tooltip's page position for a cursor position.
pub fn tooltip_position(
    cursor: (f64, f64),
    tooltip_size: (f64, f64),
    window_size: (f64, f64),
) -> (f64, f64) {
    let (cursor_x, cursor_y) = cursor;
    let (tip_w, tip_h) = tooltip_size;
    let (win_w, win_h) = window_size;

    let mut left = cursor_x + CURSOR_OFFSET_X;
    let mut top = cursor_y - CURSOR_OFFSET_Y;

    if cursor_x + tip_w > win_w - RIGHT_EDGE_GUTTER {
        // Would extend off the right edge, so put it left of the cursor.
        left = cursor_x - tip_w - CURSOR_OFFSET_X;
    }
    if cursor_y + tip_h > win_h {
        // Would extend off the bottom, so slide it up until it fits.
        top = win_h - tip_h - CURSOR_OFFSET_Y;
    }

    (left, top)
}

/// Everything shown inside one tooltip, pre-formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub time: String,
    pub happy: String,
    pub relaxed: String,
    pub awake: String,
    pub in_out: &'static str,
    pub home_work: &'static str,
    pub people: Vec<String>,
    pub activities: Vec<String>,
    pub notes: Option<String>,
}

impl TooltipContent {
    pub fn for_response(response: &Response, dict: &DataDictionary) -> Self {
        let mut people: Vec<String> = dict
            .people
            .iter()
            .filter(|(key, _)| response.flag(key))
            .map(|(_, label)| (*label).to_string())
            .collect();
        if people.is_empty() {
            people.push(ALONE_LABEL.to_string());
        }

        let activities: Vec<String> = dict
            .activities
            .iter()
            .filter(|(key, _)| response.flag(key))
            .map(|(_, label)| (*label).to_string())
            .collect();

        Self {
            time: format_observation_time(&response.start_time),
            happy: format_score(response.happy),
            relaxed: format_score(response.relaxed),
            awake: format_score(response.awake),
            in_out: response.in_out.label(),
            home_work: response.home_work.label(),
            people,
            activities,
            notes: response.notes.clone(),
        }
    }

    /// Rough rendered size used for edge-flip placement. The tooltip is a
    /// fixed-width card whose height grows with its list rows.
    pub fn estimated_size(&self) -> (f64, f64) {
        let rows = 6 + self.people.len() + self.activities.len();
        let notes = if self.notes.is_some() { 2 } else { 0 };
        (230.0, 24.0 + 17.0 * (rows + notes) as f64)
    }
}

/// A tooltip currently on screen, positioned in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTooltip {
    pub content: TooltipContent,
    pub left: f64,
    pub top: f64,
}

impl ActiveTooltip {
    pub fn at_cursor(content: TooltipContent, cursor: (f64, f64), window: (f64, f64)) -> Self {
        let (left, top) = tooltip_position(cursor, content.estimated_size(), window);
        Self { content, left, top }
    }
}

/// The floating tooltip card.
///
/// Mounted on `document.body` so its page-coordinate position holds no
/// matter how the chart's ancestors are styled.
#[component]
pub fn ObservationTooltip(#[prop(into)] active: Signal<Option<ActiveTooltip>>) -> impl IntoView {
    let style = move || match active.get() {
        Some(tip) => format!("left: {}px; top: {}px;", tip.left, tip.top),
        None => format!("left: {}px;", HIDDEN_LEFT),
    };

    view! {
        <Portal>
            <div class="tooltip" style=style>
                {move || {
                    active.get().map(|tip| {
                        let c = tip.content;
                        view! {
                            <p class="tooltip-time">{c.time}</p>
                            <table class="tooltip-feelings">
                                <tr><td>"Happy"</td><td>{c.happy}</td></tr>
                                <tr><td>"Relaxed"</td><td>{c.relaxed}</td></tr>
                                <tr><td>"Awake"</td><td>{c.awake}</td></tr>
                            </table>
                            <p class="tooltip-place">{c.in_out}", "{c.home_work}</p>
                            <ul class="tooltip-people">
                                {c.people.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                            </ul>
                            <ul class="tooltip-activities">
                                {c.activities.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                            </ul>
                            {c.notes.map(|n| view! { <p class="tooltip-notes">{n}</p> })}
                        }
                    })
                }}
            </div>
        </Portal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use mood_core::{HomeWork, InOut, DICTIONARY};
    use std::collections::BTreeMap;

    fn response(flags: &[&str], notes: Option<&str>) -> Response {
        Response {
            start_time: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2025, 6, 3, 14, 5, 0)
                .unwrap(),
            beep_time: None,
            happy: 0.674,
            relaxed: 0.5,
            awake: 0.25,
            in_out: InOut::In,
            home_work: HomeWork::Home,
            flags: flags.iter().map(|f| (f.to_string(), true)).collect::<BTreeMap<_, _>>(),
            notes: notes.map(String::from),
        }
    }

    #[test]
    fn sits_right_of_cursor_by_default() {
        let pos = tooltip_position((100.0, 200.0), (150.0, 80.0), (1000.0, 700.0));
        assert_eq!(pos, (112.0, 196.0));
    }

    #[test]
    fn flips_left_near_right_edge() {
        // 900 + 150 > 1000 - 30, so the card goes left of the cursor.
        let pos = tooltip_position((900.0, 200.0), (150.0, 80.0), (1000.0, 700.0));
        assert_eq!(pos.0, 900.0 - 150.0 - 12.0);
        assert_eq!(pos.1, 196.0);
    }

    #[test]
    fn slides_up_near_bottom_edge() {
        let pos = tooltip_position((100.0, 680.0), (150.0, 80.0), (1000.0, 700.0));
        assert_eq!(pos.1, 700.0 - 80.0 - 4.0);
    }

    #[test]
    fn content_rounds_scores_and_labels_flags() {
        let content =
            TooltipContent::for_response(&response(&["with_partner", "do_tv"], None), &DICTIONARY);

        assert_eq!(content.time, "14:05 Tue 3 Jun 2025");
        assert_eq!(content.happy, "67");
        assert_eq!(content.relaxed, "50");
        assert_eq!(content.people, vec!["Spouse, partner, girl/boyfriend"]);
        assert_eq!(content.activities, vec!["Watching TV, film"]);
        assert!(content.notes.is_none());
    }

    #[test]
    fn no_companions_reads_as_alone() {
        let content = TooltipContent::for_response(&response(&["do_read"], Some("on the sofa")), &DICTIONARY);
        assert_eq!(content.people, vec![ALONE_LABEL.to_string()]);
        assert_eq!(content.notes.as_deref(), Some("on the sofa"));
    }
}
