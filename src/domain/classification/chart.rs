//! Quadrant chart placement for the "you are here" marker.
//!
//! Pure presentation geometry: maps a total onto 0-100% of an axis with the
//! threshold pinned to the centre line. Carries no classification meaning.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::ScoreTotals;

/// Lowest total the chart expects (five 1-ratings minus a tie-breaker point).
pub const CHART_MIN: i32 = 4;

/// Highest total the chart expects (five 5-ratings plus the largest nudge).
pub const CHART_MAX: i32 = 28;

/// Marker is kept this far inside the chart edges, in percent.
pub const EDGE_MARGIN: f64 = 8.0;

/// Two-segment linear scale with the threshold at 50%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantChart {
    min: i32,
    center: i32,
    max: i32,
}

/// Marker position in percent; `x` is mechanics, `y` is insight (from the bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

impl QuadrantChart {
    pub fn new(min: i32, center: i32, max: i32) -> Self {
        Self { min, center, max }
    }

    /// Standard chart range centred on the given threshold.
    pub fn for_threshold(threshold: i32) -> Self {
        Self::new(CHART_MIN, threshold, CHART_MAX)
    }

    /// Percentage along one axis, clamped to the edge margins.
    pub fn position(&self, total: i32) -> f64 {
        let value = f64::from(total);
        let center = f64::from(self.center);
        let percent = if total <= self.center {
            Self::segment(value, f64::from(self.min), center) * 50.0
        } else {
            50.0 + Self::segment(value, center, f64::from(self.max)) * 50.0
        };
        percent.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN)
    }

    /// Marker for a pair of totals.
    pub fn marker(&self, totals: ScoreTotals) -> MarkerPosition {
        MarkerPosition {
            x: self.position(totals.mechanics),
            y: self.position(totals.insight),
        }
    }

    /// Fraction of `[from, to]` covered by `value`; a collapsed segment
    /// puts everything on its end.
    fn segment(value: f64, from: f64, to: f64) -> f64 {
        let span = to - from;
        if span <= 0.0 {
            return 1.0;
        }
        (value - from) / span
    }
}
