//! Commodity price series shown on the overview chart.
//!
//! The series is compiled in: it is a fixed snapshot, never mutated after
//! load. Display code derives clamped copies from it via `util::chart_math`.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// One of the three tracked commodity tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Commodity {
    Copper,
    Steel,
    Aluminum,
}

impl Commodity {
    /// Render order of the tracks.
    pub const ALL: [Self; 3] = [Self::Copper, Self::Steel, Self::Aluminum];

    /// Field name used as the series data key.
    pub fn data_key(self) -> &'static str {
        match self {
            Self::Copper => "copper",
            Self::Steel => "steel",
            Self::Aluminum => "aluminum",
        }
    }

    /// Human-readable label shown in tooltips and legends.
    pub fn label(self) -> &'static str {
        match self {
            Self::Copper => "Copper",
            Self::Steel => "Steel",
            Self::Aluminum => "Aluminum",
        }
    }

    /// Stroke/fill color for this track.
    pub fn color(self) -> &'static str {
        match self {
            Self::Copper => "#6366F1",
            Self::Steel => "#10B981",
            Self::Aluminum => "#FBBF24",
        }
    }

    /// Id of the SVG gradient used for this track's area fill.
    pub fn gradient_id(self) -> &'static str {
        match self {
            Self::Copper => "gCopper",
            Self::Steel => "gSteel",
            Self::Aluminum => "gAl",
        }
    }
}

/// A single time-labelled sample across all tracks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint {
    pub time: &'static str,
    pub copper: f64,
    pub steel: f64,
    pub aluminum: f64,
}

impl PricePoint {
    pub const fn new(time: &'static str, copper: f64, steel: f64, aluminum: f64) -> Self {
        Self { time, copper, steel, aluminum }
    }

    /// Value of one track at this point.
    pub fn value(&self, commodity: Commodity) -> f64 {
        match commodity {
            Commodity::Copper => self.copper,
            Commodity::Steel => self.steel,
            Commodity::Aluminum => self.aluminum,
        }
    }

    /// Copy of this point with every track passed through `f`.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            time: self.time,
            copper: f(self.copper),
            steel: f(self.steel),
            aluminum: f(self.aluminum),
        }
    }
}

/// Minute-resolution sample feed, including a few deliberate spikes and dips.
pub const SAMPLE_SERIES: [PricePoint; 23] = [
    PricePoint::new("03:57 PM", 7600.0, 5300.0, 22400.0),
    PricePoint::new("03:58 PM", 2635.0, 310.0, 2420.0),
    PricePoint::new("03:59 PM", 7580.0, 8290.0, 2390.0),
    PricePoint::new("04:00 PM", 2720.0, 1325.0, 2450.0),
    PricePoint::new("04:01 PM", 7680.0, 1330.0, 2440.0),
    PricePoint::new("04:02 PM", 7820.0, 1350.0, 2470.0),
    PricePoint::new("04:03 PM", 7750.0, 1340.0, 2460.0),
    PricePoint::new("04:04 PM", 7905.0, 1365.0, 2490.0),
    PricePoint::new("04:05 PM", 7840.0, 1355.0, 2470.0),
    PricePoint::new("04:06 PM", 7710.0, 1340.0, 2440.0),
    PricePoint::new("04:07 PM", 2010.0, 1380.0, 2520.0),
    PricePoint::new("04:08 PM", 7880.0, 1365.0, 2480.0),
    PricePoint::new("04:09 PM", 8120.0, 1400.0, 2550.0),
    PricePoint::new("04:10 PM", 8250.0, 1420.0, 2580.0),
    PricePoint::new("04:11 PM", 8170.0, 1410.0, 2540.0),
    PricePoint::new("04:12 PM", 8030.0, 1390.0, 2500.0),
    PricePoint::new("04:13 PM", 8300.0, 1430.0, 2590.0),
    PricePoint::new("04:14 PM", 8400.0, 1450.0, 2620.0),
    PricePoint::new("04:15 PM", 8280.0, 435.0, 2570.0),
    PricePoint::new("04:16 PM", 1450.0, 1460.0, 2640.0),
    PricePoint::new("04:17 PM", 8550.0, 1475.0, 2670.0),
    PricePoint::new("04:18 PM", 8420.0, 1460.0, 2630.0),
    PricePoint::new("04:19 PM", 8580.0, 1485.0, 2685.0),
];

/// Every track value of every point, in point-major order.
pub fn all_values(series: &[PricePoint]) -> Vec<f64> {
    series
        .iter()
        .flat_map(|point| Commodity::ALL.map(|c| point.value(c)))
        .collect()
}
