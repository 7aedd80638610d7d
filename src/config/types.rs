//! Core numeric newtypes and settings blueprints for the pacing engine.

use serde::{Deserialize, Serialize};

/// A cumulative-share value, hard-clamped to [0, 1].
///
/// This is the y-axis of every pacing curve: the fraction of an event's
/// eventual ticket total that has been sold so far.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CumShare(f64);

impl CumShare {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for CumShare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// A non-negative multiplier. Category weights live in a bounded band
/// around the neutral value 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const NEUTRAL: Self = Self(1.0);

    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}x", self.0)
    }
}

/// The band category weights are rescaled into, e.g. [0.75, 1.25].
#[derive(Debug, Clone, Copy)]
pub struct WeightBounds {
    pub lo: f64,
    pub hi: f64,
}

impl WeightBounds {
    #[inline]
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Rescales a weight from [lo, hi] back to [0, 1], clamped.
    /// Used when a weight participates in the momentum blend.
    pub fn unit_position(&self, w: Weight) -> f64 {
        if self.span() <= f64::EPSILON {
            return 0.0;
        }
        ((w.value() - self.lo) / self.span()).clamp(0.0, 1.0)
    }
}

/// Coefficients of the pace-adjustment factor applied to the ticket forecast:
/// `base + span * median_cum_share_at(day)`.
#[derive(Debug, Clone, Copy)]
pub struct PaceAdjustment {
    pub base: f64,
    pub span: f64,
}

impl PaceAdjustment {
    #[inline]
    pub fn apply(&self, median: CumShare) -> f64 {
        self.base + self.span * median.value()
    }
}

/// Blend weights for the momentum score. Must sum to 1.0 so the score stays
/// on the same [0, 1] axis as the pacing curves.
#[derive(Debug, Clone, Copy)]
pub struct MomentumWeights {
    pub day: Weight,
    pub transactions: Weight,
    pub avg_tickets: Weight,
    pub tier: Weight,
    pub giveaway: Weight,
    pub day_of_week: Weight,
    /// The blended score never reaches exactly 0 or 1.
    pub floor: CumShare,
    pub ceiling: CumShare,
}

/// Normalization ranges for the raw scenario controls.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRanges {
    pub max_day: f64,
    pub max_transactions: f64,
    pub max_avg_tickets: f64,
}

/// Fill values for optional input columns, resolved once at load time.
/// Every optional field the loader accepts is enumerated here.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefaults {
    pub tier: &'static str,
    pub giveaway: &'static str,
    pub day_of_week: &'static str,
    pub theme: &'static str,
}

/// Advisory row-count thresholds below which results are flagged as
/// reduced-confidence. Never fatal.
#[derive(Debug, Clone, Copy)]
pub struct SampleThresholds {
    pub cohort_rows: usize,
    pub filter_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cum_share_clamps_both_ends() {
        assert_eq!(CumShare::new(-0.5).value(), 0.0);
        assert_eq!(CumShare::new(1.5).value(), 1.0);
        assert_eq!(CumShare::new(0.42).value(), 0.42);
    }

    #[test]
    fn weight_rejects_negative() {
        assert_eq!(Weight::new(-1.0).value(), 0.0);
        assert_eq!(Weight::default().value(), 1.0);
    }

    #[test]
    fn unit_position_maps_band_to_unit_interval() {
        let bounds = WeightBounds { lo: 0.75, hi: 1.25 };
        assert_eq!(bounds.unit_position(Weight::new(0.75)), 0.0);
        assert_eq!(bounds.unit_position(Weight::new(1.25)), 1.0);
        assert!((bounds.unit_position(Weight::new(1.0)) - 0.5).abs() < 1e-12);
        // Out-of-band weights clamp rather than extrapolate
        assert_eq!(bounds.unit_position(Weight::new(2.0)), 1.0);
    }

    #[test]
    fn degenerate_bounds_are_safe() {
        let bounds = WeightBounds { lo: 1.0, hi: 1.0 };
        assert_eq!(bounds.unit_position(Weight::new(1.0)), 0.0);
    }
}
