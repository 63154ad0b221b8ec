//! Projection of chart values into SVG viewport coordinates.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use std::fmt::Write as _;

/// Pixel box of the chart with room reserved for axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl ChartFrame {
    /// Frame with the default gutters: 56px for Y labels, 28px for X labels.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pad_left: 56.0,
            pad_right: 12.0,
            pad_top: 12.0,
            pad_bottom: 28.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    /// Bottom edge of the plot area.
    pub fn baseline(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    /// X coordinate of point `index` in a series of `len` points.
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize, len: usize) -> f64 {
        if len <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * (index as f64 / (len - 1) as f64)
    }

    /// Y coordinate of `value` within the `[lo, hi]` domain (clamped).
    pub fn y_at(&self, value: f64, lo: f64, hi: f64) -> f64 {
        if hi <= lo || !value.is_finite() {
            return self.pad_top + self.plot_height() / 2.0;
        }
        let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
        self.pad_top + self.plot_height() * (1.0 - t)
    }

    /// Index of the point closest to horizontal position `x`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn nearest_index(&self, x: f64, len: usize) -> Option<usize> {
        if len == 0 || !x.is_finite() {
            return None;
        }
        if len == 1 || self.plot_width() <= 0.0 {
            return Some(0);
        }
        let t = ((x - self.pad_left) / self.plot_width()).clamp(0.0, 1.0);
        Some(((t * (len - 1) as f64).round() as usize).min(len - 1))
    }
}

/// SVG path data (`M x y L x y ...`) through `points`.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{cmd}{x:.1} {y:.1}");
    }
    out
}

/// Closed SVG path filling the region between `points` and `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut out = line_path(points);
    let _ = write!(out, " L{:.1} {baseline:.1} L{:.1} {baseline:.1} Z", last.0, first.0);
    out
}
