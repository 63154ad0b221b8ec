//! Real-time commodity pricing chart rendered as inline SVG.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lines and gradient areas are drawn from the clamped display series
//! (`util::chart_math::clamp_series`); the hover tooltip reads the raw
//! sample points so spikes still show their true value.

use leptos::prelude::*;

use crate::state::pricing::{Commodity, PricePoint, SAMPLE_SERIES};
use crate::state::ui::UiState;
use crate::util::chart_geometry::{ChartFrame, area_path, line_path};
use crate::util::chart_math::{
    CHART_LAYERS, LayerKind, clamp_series, dedupe_tooltip_entries, format_axis_tick, format_price,
    nice_ticks, tooltip_payload, value_extent, x_label_indices,
};

/// SVG viewBox width; the element itself stretches to its container.
const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 288.0;
const CHART_HEIGHT_SMALL: f64 = 208.0;
const Y_TICK_COUNT: usize = 5;

/// Pixel points of one track across the display series.
fn track_points(frame: &ChartFrame, series: &[PricePoint], commodity: Commodity, lo: f64, hi: f64) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| (frame.x_at(i, series.len()), frame.y_at(p.value(commodity), lo, hi)))
        .collect()
}

/// Chart card with header, axes, series layers, latest-point dots, and tooltip.
#[component]
pub fn ChartSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hover = RwSignal::new(None::<usize>);

    let display = clamp_series(&SAMPLE_SERIES);
    let (min, max) = value_extent(&display).unwrap_or((0.0, 1.0));
    let ticks = nice_ticks(min.min(0.0), max, Y_TICK_COUNT);
    let lo = ticks.first().copied().unwrap_or(0.0);
    let hi = ticks.last().copied().unwrap_or(1.0);
    let len = display.len();

    let frame = Memo::new(move |_| {
        let height = if ui.get().small_screen { CHART_HEIGHT_SMALL } else { CHART_HEIGHT };
        ChartFrame::new(CHART_WIDTH, height)
    });

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if rect.width() <= 0.0 {
                return;
            }
            let x = (f64::from(ev.client_x()) - rect.left()) * CHART_WIDTH / rect.width();
            hover.set(frame.get_untracked().nearest_index(x, len));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let chart = move || {
        let frame = frame.get();
        let small = ui.get().small_screen;
        let baseline = frame.baseline();

        let grid = ticks
            .iter()
            .map(|&tick| {
                let y = frame.y_at(tick, lo, hi);
                view! {
                    <line class="chart__grid" x1=frame.pad_left x2=frame.width - frame.pad_right y1=y y2=y/>
                    <text class="chart__tick" x=frame.pad_left - 8.0 y=y + 4.0 text-anchor="end">
                        {format_axis_tick(tick)}
                    </text>
                }
            })
            .collect_view();

        let x_labels = x_label_indices(len, small)
            .into_iter()
            .map(|i| {
                view! {
                    <text class="chart__tick" x=frame.x_at(i, len) y=frame.height - 8.0 text-anchor="middle">
                        {display[i].time}
                    </text>
                }
            })
            .collect_view();

        let layers = CHART_LAYERS
            .iter()
            .map(|layer| {
                let commodity = layer.commodity;
                let points = track_points(&frame, &display, commodity, lo, hi);
                match layer.kind {
                    LayerKind::Area => view! {
                        <path
                            class="chart__area"
                            d=area_path(&points, baseline)
                            fill=format!("url(#{})", commodity.gradient_id())
                            stroke="none"
                        />
                    }
                    .into_any(),
                    LayerKind::Line => view! {
                        <path
                            class="chart__line"
                            d=line_path(&points)
                            fill="none"
                            stroke=commodity.color()
                            stroke-width="2.2"
                        />
                    }
                    .into_any(),
                }
            })
            .collect_view();

        let latest_dots = display.last().map(|latest| {
            Commodity::ALL
                .iter()
                .map(|&commodity| {
                    view! {
                        <circle
                            cx=frame.x_at(len - 1, len)
                            cy=frame.y_at(latest.value(commodity), lo, hi)
                            r="3"
                            fill=commodity.color()
                        />
                    }
                })
                .collect_view()
        });

        let cursor = hover.get().map(|i| {
            let x = frame.x_at(i, len);
            view! { <line class="chart__cursor" x1=x x2=x y1=frame.pad_top y2=baseline/> }
        });

        view! {
            <svg
                class="chart__svg"
                viewBox=format!("0 0 {CHART_WIDTH} {}", frame.height)
                width="100%"
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| hover.set(None)
            >
                <defs>
                    {Commodity::ALL
                        .iter()
                        .map(|&commodity| {
                            let top_opacity = if commodity == Commodity::Copper { "0.2" } else { "0.18" };
                            view! {
                                <linearGradient id=commodity.gradient_id() x1="0" y1="0" x2="0" y2="1">
                                    <stop offset="0%" stop-color=commodity.color() stop-opacity=top_opacity/>
                                    <stop offset="100%" stop-color=commodity.color() stop-opacity="0"/>
                                </linearGradient>
                            }
                        })
                        .collect_view()}
                </defs>
                {grid}
                {x_labels}
                {layers}
                {latest_dots}
                {cursor}
            </svg>
        }
    };

    let tooltip = move || {
        let i = hover.get()?;
        let raw = SAMPLE_SERIES.get(i)?;
        let frame = frame.get();
        let left_pct = frame.x_at(i, len) / CHART_WIDTH * 100.0;
        let rows = dedupe_tooltip_entries(tooltip_payload(raw, &CHART_LAYERS));
        Some(view! {
            <div class="chart__tooltip" style=format!("left: {left_pct:.1}%")>
                <div class="chart__tooltip-label">{raw.time}</div>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="chart__tooltip-row">
                                <span class="chart__swatch" style=format!("background: {}", row.color)></span>
                                <span class="chart__tooltip-name">{row.name}</span>
                                <span class="chart__tooltip-value">{format_price(row.value)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        })
    };

    view! {
        <div class="card-flat chart-section">
            <div class="chart-section__header">
                <h2>"Real-Time Pricing Intelligence"</h2>
                <p>"Live commodity price movements across global markets"</p>
            </div>
            <div class="chart-section__body" class:chart-section__body--small=move || ui.get().small_screen>
                {chart}
                {tooltip}
            </div>
        </div>
    }
}
