//! The linked focus/context timeline.
//!
//! The top, main panel is the `focus`; the bottom panel is the `context`,
//! carrying the brush that zooms the focus. Lines are drawn in both panels
//! and keyed by line id, so adding, editing or removing one line never
//! redraws the others. Hidden lines keep their layout slot and drop to
//! opacity zero, matching how the key's show toggle behaves.

use crate::brush::Brush;
use crate::chartkit::{line_path, LinearScale, Scale, TimeScale};
use crate::layout::ChartLayout;
use crate::tooltip::{ActiveTooltip, ObservationTooltip, TooltipContent};
use chrono::{Duration, Utc};
use leptos::ev::{MouseEvent, PointerEvent};
use leptos::prelude::*;
use mood_core::{DataDictionary, Line, LineId, Point, Response, DICTIONARY};
use std::sync::Arc;
use wasm_bindgen::JsCast;

// ============================================================================
// DOMAIN COMPUTATION
// ============================================================================

/// Overall x-domain covering every point of every line.
///
/// Falls back to the last year when no line has any points, so an all-empty
/// chart still has axes to draw.
pub fn context_domain_of(lines: &[Line]) -> (i64, i64) {
    let times = lines.iter().flat_map(|l| l.points.iter().map(|p| p.time_ms));
    let min = times.clone().min();
    let max = times.max();

    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            let to = Utc::now();
            let from = to - Duration::days(365);
            (from.timestamp_millis(), to.timestamp_millis())
        }
    }
}

// ============================================================================
// TIMELINE CHART
// ============================================================================

#[component]
pub fn TimelineChart(
    #[prop(into)] lines: Signal<Vec<Line>>,
    #[prop(into)] hidden: Signal<Vec<LineId>>,
    #[prop(into)] observations: Signal<Arc<Vec<Response>>>,
    #[prop(default = &DICTIONARY)] dict: &'static DataDictionary,
) -> impl IntoView {
    let layout = ChartLayout::default();
    let inner_width = layout.inner_width();
    let focus_height = layout.focus_height();
    let context_height = layout.context_height();

    let brush = RwSignal::new(Brush::new());
    let tooltip = RwSignal::new(None::<ActiveTooltip>);

    let context_domain = Memo::new(move |_| context_domain_of(&lines.get()));

    // A changed date range can strand a held brush off either edge.
    Effect::new(move |_| {
        let domain = context_domain.get();
        brush.update(|b| b.retarget(domain));
    });

    let focus_domain = Memo::new(move |_| brush.get().focus_domain(context_domain.get()));

    let focus_x = move || {
        let (min, max) = focus_domain.get();
        TimeScale::new().domain(min, max).range(0.0, inner_width)
    };
    let context_x = move || {
        let (min, max) = context_domain.get();
        TimeScale::new().domain(min, max).range(0.0, inner_width)
    };
    let focus_y = LinearScale::new().domain(0.0, 1.0).range(focus_height, 0.0);
    let context_y = LinearScale::new().domain(0.0, 1.0).range(context_height, 0.0);

    let line_opacity = move |id: LineId| {
        if hidden.with(|h| h.contains(&id)) { 0.0 } else { 1.0 }
    };

    // Local x within the context panel, accounting for viewBox scaling.
    let pointer_x = move |ev: &PointerEvent| -> Option<f64> {
        let target = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        let rect = target.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        let frac = (ev.client_x() as f64 - rect.left()) / rect.width();
        Some((frac * inner_width).clamp(0.0, inner_width))
    };

    let on_brush_down = move |ev: PointerEvent| {
        if let Some(x) = pointer_x(&ev) {
            let at = context_x().invert(x);
            brush.update(|b| b.begin(at));
        }
    };
    let on_brush_move = move |ev: PointerEvent| {
        if brush.with(|b| b.is_dragging()) {
            if let Some(x) = pointer_x(&ev) {
                let at = context_x().invert(x);
                brush.update(|b| b.drag_to(at));
            }
        }
    };
    let on_brush_up = move |_ev: PointerEvent| {
        brush.update(|b| b.finish());
    };

    let show_tooltip = move |ev: MouseEvent, index: usize| {
        let content = observations.with(|data| {
            data.get(index).map(|r| TooltipContent::for_response(r, dict))
        });
        if let Some(content) = content {
            let cursor = (ev.page_x() as f64, ev.page_y() as f64);
            tooltip.set(Some(ActiveTooltip::at_cursor(content, cursor, window_size())));
        }
    };
    let hide_tooltip = move |_ev: MouseEvent| tooltip.set(None);

    view! {
        <div class="timeline">
            <svg
                class="timeline-chart"
                viewBox=layout.viewbox()
                preserveAspectRatio="xMidYMid meet"
                style="width: 100%; height: auto;"
            >
                <defs>
                    <clipPath id="focus-clip">
                        <rect width=inner_width height=focus_height />
                    </clipPath>
                </defs>

                // Focus (main) panel
                <g class="focus" transform=layout.focus_transform()>
                    <g class="axes">
                        // Score axis, labelled 0..100
                        {focus_y.ticks(5).into_iter().map(|v| {
                            let y = focus_y.scale(v);
                            view! {
                                <g class="tick" transform=format!("translate(0,{y:.2})")>
                                    <line x2="-6" stroke="currentColor" />
                                    <text x="-9" dy="0.32em" text-anchor="end">
                                        {crate::chartkit::format_percent(v)}
                                    </text>
                                </g>
                            }
                        }).collect_view()}

                        // Grid lines half-way up and at the top
                        {[0.5, 1.0].into_iter().map(|v| {
                            let y = focus_y.scale(v);
                            view! {
                                <line
                                    class="grid"
                                    x1="0" y1=y x2=inner_width y2=y
                                />
                            }
                        }).collect_view()}

                        // Date axis under the focus panel
                        {move || {
                            focus_x().time_ticks(8).into_iter().map(|tick| {
                                let x = focus_x().scale(tick.timestamp_ms);
                                view! {
                                    <g class="tick" transform=format!("translate({x:.2},{focus_height})")>
                                        <line y2="6" stroke="currentColor" />
                                        <text y="9" dy="0.71em" text-anchor="middle">{tick.label}</text>
                                    </g>
                                }
                            }).collect_view()
                        }}
                    </g>

                    // One path per line, clipped to the panel
                    <For
                        each=move || lines.get()
                        key=|line| line.id
                        children=move |line: Line| {
                            let id = line.id;
                            let color = line.color.clone();
                            let points = line.points.clone();
                            let d = move || {
                                let x = focus_x();
                                project(&points, |p| x.scale(p.time_ms), |p| focus_y.scale(p.value))
                            };
                            view! {
                                <path
                                    class="line feeling"
                                    id=id.css_id("focus")
                                    clip-path="url(#focus-clip)"
                                    d=d
                                    fill="none"
                                    stroke=color
                                    opacity=move || line_opacity(id)
                                />
                            }
                        }
                    />

                    // Invisible hover targets on every point
                    <g class="dots" clip-path="url(#focus-clip)">
                        {move || {
                            lines.get().into_iter().map(|line| {
                                let id = line.id;
                                line.points.into_iter().map(|p| {
                                    let x = focus_x().scale(p.time_ms);
                                    let y = focus_y.scale(p.value);
                                    let index = p.index;
                                    view! {
                                        <circle
                                            class="dot"
                                            cx=x
                                            cy=y
                                            r="5"
                                            opacity=move || line_opacity(id)
                                            on:mouseenter=move |ev| show_tooltip(ev, index)
                                            on:mouseleave=hide_tooltip
                                        />
                                    }
                                }).collect_view()
                            }).collect_view()
                        }}
                    </g>
                </g>

                // Context (brush) panel
                <g class="context" transform=layout.context_transform()>
                    <g class="axes">
                        {move || {
                            context_x().time_ticks(8).into_iter().map(|tick| {
                                let x = context_x().scale(tick.timestamp_ms);
                                view! {
                                    <g class="tick" transform=format!("translate({x:.2},{context_height})")>
                                        <line y2="6" stroke="currentColor" />
                                        <text y="9" dy="0.71em" text-anchor="middle">{tick.label}</text>
                                    </g>
                                }
                            }).collect_view()
                        }}
                    </g>

                    <For
                        each=move || lines.get()
                        key=|line| line.id
                        children=move |line: Line| {
                            let id = line.id;
                            let color = line.color.clone();
                            let points = line.points.clone();
                            let d = move || {
                                let x = context_x();
                                project(&points, |p| x.scale(p.time_ms), |p| context_y.scale(p.value))
                            };
                            view! {
                                <path
                                    class="line feeling"
                                    id=id.css_id("context")
                                    d=d
                                    fill="none"
                                    stroke=color
                                    opacity=move || line_opacity(id)
                                />
                            }
                        }
                    />

                    // Highlight for the held selection
                    {move || {
                        brush.get().selection().map(|(start, end)| {
                            let x = context_x();
                            let x0 = x.scale(start);
                            let x1 = x.scale(end);
                            view! {
                                <rect
                                    class="brush-extent"
                                    x=x0
                                    y="-6"
                                    width={(x1 - x0).max(0.0)}
                                    height={context_height + 6.0}
                                />
                            }
                        })
                    }}

                    // Transparent capture surface for the brush
                    <rect
                        class="brush-overlay"
                        y="-6"
                        width=inner_width
                        height={context_height + 6.0}
                        fill="transparent"
                        on:pointerdown=on_brush_down
                        on:pointermove=on_brush_move
                        on:pointerup=on_brush_up
                        on:pointerleave=on_brush_up
                    />
                </g>
            </svg>

            <ObservationTooltip active=tooltip />
        </div>
    }
}

fn project<FX, FY>(points: &[Point], x: FX, y: FY) -> String
where
    FX: Fn(&Point) -> f64,
    FY: Fn(&Point) -> f64,
{
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (x(p), y(p))).collect();
    line_path(&coords)
}

fn window_size() -> (f64, f64) {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1024.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(768.0);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::Point;

    fn line_with_times(times: &[i64]) -> Line {
        use mood_core::{ConstraintSet, Feeling, DICTIONARY};

        let constraints = ConstraintSet::feeling(Feeling::Happy);
        let description = constraints.describe(&DICTIONARY);
        Line {
            id: LineId::new(),
            color: "#FAA43A".into(),
            constraints,
            description,
            points: times
                .iter()
                .enumerate()
                .map(|(i, &t)| Point { index: i, time_ms: t, value: 0.5 })
                .collect(),
        }
    }

    #[test]
    fn domain_spans_all_lines() {
        let lines = vec![line_with_times(&[200, 900]), line_with_times(&[50, 400])];
        assert_eq!(context_domain_of(&lines), (50, 900));
    }

    #[test]
    fn empty_lines_fall_back_to_last_year() {
        let (from, to) = context_domain_of(&[line_with_times(&[])]);
        let span_days = (to - from) / 86_400_000;
        assert_eq!(span_days, 365);
        assert!(to <= Utc::now().timestamp_millis());
    }
}
