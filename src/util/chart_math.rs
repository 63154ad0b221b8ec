//! Chart data normalization: outlier clamping, axis ticks, and value labels.
//!
//! DESIGN
//! ======
//! Everything here is pure and deterministic so the chart component only
//! maps results to SVG. Clamping applies to the display copy of the series;
//! tooltips read the raw points.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::collections::HashSet;

use crate::state::pricing::{Commodity, PricePoint, all_values};

/// Percentile used to find the visual ceiling of the series.
pub const OUTLIER_PERCENTILE: f64 = 0.95;
/// Headroom multiplier applied on top of the percentile value.
pub const VISUAL_HEADROOM: f64 = 1.15;
/// Upper bound on ticks emitted after the first one.
pub const MAX_TICKS: usize = 30;
/// Step multipliers considered "nice" within each power of ten.
const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Value at the 95th percentile (nearest-rank, floor index) of `values`.
///
/// Non-finite values are ignored. Returns `None` when nothing is left.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn percentile_95(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let index = ((sorted.len() as f64 * OUTLIER_PERCENTILE).floor() as usize).min(sorted.len() - 1);
    Some(sorted[index])
}

/// Ceiling for displayed values: `p95 * 1.15` across all tracks.
pub fn visual_cap(series: &[PricePoint]) -> Option<f64> {
    percentile_95(&all_values(series)).map(|p95| p95 * VISUAL_HEADROOM)
}

/// Display copy of `series` with every value clamped to [`visual_cap`].
///
/// A single spike must not compress the range for every other point, so
/// values above the cap are flattened to it. Values at or below the cap are
/// returned unchanged.
pub fn clamp_series(series: &[PricePoint]) -> Vec<PricePoint> {
    let Some(cap) = visual_cap(series) else {
        return series.to_vec();
    };
    series
        .iter()
        .map(|point| point.map_values(|v| if v > cap { cap } else { v }))
        .collect()
}

/// Smallest and largest finite value across all tracks of `series`.
pub fn value_extent(series: &[PricePoint]) -> Option<(f64, f64)> {
    all_values(series)
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Round a raw step to the nearest of {1, 2, 5, 10} x 10^k.
fn nice_step(rough: f64) -> f64 {
    let magnitude = 10_f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let mut best = NICE_MULTIPLIERS[0];
    for candidate in NICE_MULTIPLIERS {
        if (normalized - candidate).abs() < (normalized - best).abs() {
            best = candidate;
        }
    }
    best * magnitude
}

/// Snap float noise (`0.30000000000000004`) back onto the step's precision.
fn snap_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0);
    let scale = 10_f64.powf(decimals);
    (value * scale).round() / scale
}

/// "Nice" axis ticks covering `[min, max]` with roughly `count` intervals.
///
/// Always returns at least two non-decreasing values and never more than
/// `MAX_TICKS + 1`. Degenerate input (non-finite bounds, zero range, zero
/// count) falls back to `[min, max]`.
#[allow(clippy::cast_precision_loss)]
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let fallback = vec![lo, hi];
    if !lo.is_finite() || !hi.is_finite() || count == 0 {
        return fallback;
    }
    let range = hi - lo;
    if range <= 0.0 {
        return fallback;
    }

    let step = nice_step(range / count as f64);
    if !step.is_finite() || step <= 0.0 {
        return fallback;
    }

    let start = (lo / step).floor() * step;
    let limit = hi + step * (1.0 + 1e-9);
    let mut ticks = Vec::new();
    for i in 0..=MAX_TICKS {
        let tick = snap_to_step(start + step * i as f64, step);
        if tick > limit {
            break;
        }
        ticks.push(tick);
    }

    if ticks.len() < 2 { fallback } else { ticks }
}

/// Currency label: `$X.XXM`, `$X.Xk`, or `$X`.
pub fn format_price(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("${:.1}k", value / 1_000.0)
    } else if value == 0.0 {
        "$0".to_owned()
    } else {
        format!("${value}")
    }
}

/// Compact Y-axis label: whole thousands as `Nk`, smaller values verbatim.
pub fn format_axis_tick(value: f64) -> String {
    if value >= 1_000.0 {
        format!("{}k", (value / 1_000.0).round())
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{value}")
    }
}

/// Number of points skipped between two X-axis labels:
/// `floor(len / 4)` on small screens, `floor(len / 6)` otherwise.
pub fn x_axis_interval(len: usize, small_screen: bool) -> usize {
    len / if small_screen { 4 } else { 6 }
}

/// Indices of points that get an X-axis label, per [`x_axis_interval`].
pub fn x_label_indices(len: usize, small_screen: bool) -> Vec<usize> {
    (0..len).step_by(x_axis_interval(len, small_screen) + 1).collect()
}

/// How a series layer is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// Gradient fill beneath a line, decorative only.
    Area,
    /// The visible line itself.
    Line,
}

/// One rendered layer of the chart, bound to a commodity track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesLayer {
    pub commodity: Commodity,
    pub kind: LayerKind,
}

/// Render order: gradient areas first, lines on top.
pub const CHART_LAYERS: [SeriesLayer; 6] = [
    SeriesLayer { commodity: Commodity::Copper, kind: LayerKind::Area },
    SeriesLayer { commodity: Commodity::Steel, kind: LayerKind::Area },
    SeriesLayer { commodity: Commodity::Aluminum, kind: LayerKind::Area },
    SeriesLayer { commodity: Commodity::Copper, kind: LayerKind::Line },
    SeriesLayer { commodity: Commodity::Steel, kind: LayerKind::Line },
    SeriesLayer { commodity: Commodity::Aluminum, kind: LayerKind::Line },
];

/// A single tooltip row candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub data_key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub value: f64,
}

/// Tooltip payload for `point`, one entry per rendered layer.
pub fn tooltip_payload(point: &PricePoint, layers: &[SeriesLayer]) -> Vec<TooltipEntry> {
    layers
        .iter()
        .map(|layer| TooltipEntry {
            data_key: layer.commodity.data_key(),
            name: layer.commodity.label(),
            color: layer.commodity.color(),
            value: point.value(layer.commodity),
        })
        .collect()
}

/// Keep only the first entry for each data key.
///
/// Area overlays share their line's key; without this every commodity
/// would show up twice.
pub fn dedupe_tooltip_entries(entries: Vec<TooltipEntry>) -> Vec<TooltipEntry> {
    let mut seen = HashSet::new();
    entries.into_iter().filter(|entry| seen.insert(entry.data_key)).collect()
}
