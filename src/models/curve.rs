use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::CumShare;
use crate::models::SalesWindowGroup;
use crate::utils::{interp_clamped, running_max};

/// One knot of a pacing curve: the percentile band of cumulative share
/// across historical events at a given day-since-onsale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurvePoint {
    pub day: f64,
    pub p25: CumShare,
    pub median: CumShare,
    pub p75: CumShare,
}

/// A historical pacing benchmark: percentile bands of cumulative share as a
/// function of days since on-sale, sorted ascending by day.
///
/// Once built the curve is read-only; lookups interpolate linearly between
/// knots and clamp to the endpoint values outside the observed range.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PacingCurve {
    points: Vec<CurvePoint>,
}

impl PacingCurve {
    pub fn new(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.day.total_cmp(&b.day));
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Forces each band to be non-decreasing along the day axis via a
    /// running maximum. Per-event cumulative share is non-decreasing by
    /// definition, but the aggregate percentiles can dip where different
    /// events contribute to adjacent days.
    pub fn smooth_monotonic(&mut self) {
        let mut p25: Vec<f64> = self.points.iter().map(|p| p.p25.value()).collect();
        let mut med: Vec<f64> = self.points.iter().map(|p| p.median.value()).collect();
        let mut p75: Vec<f64> = self.points.iter().map(|p| p.p75.value()).collect();
        running_max(&mut p25);
        running_max(&mut med);
        running_max(&mut p75);
        for (i, point) in self.points.iter_mut().enumerate() {
            point.p25 = CumShare::new(p25[i]);
            point.median = CumShare::new(med[i]);
            point.p75 = CumShare::new(p75[i]);
        }
    }

    pub fn p25_at(&self, day: f64) -> f64 {
        self.band_component_at(day, |p| p.p25.value())
    }

    pub fn median_at(&self, day: f64) -> f64 {
        self.band_component_at(day, |p| p.median.value())
    }

    pub fn p75_at(&self, day: f64) -> f64 {
        self.band_component_at(day, |p| p.p75.value())
    }

    fn band_component_at(&self, day: f64, component: impl Fn(&CurvePoint) -> f64) -> f64 {
        let xs: Vec<f64> = self.points.iter().map(|p| p.day).collect();
        let ys: Vec<f64> = self.points.iter().map(component).collect();
        interp_clamped(day, &xs, &ys)
    }
}

/// Which pacing benchmark a scenario is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CohortSelection {
    AllGames,
    Group(SalesWindowGroup),
}

impl CohortSelection {
    /// Parses CLI-style selectors: "all" or a cohort alias.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("all games") {
            return Some(Self::AllGames);
        }
        s.parse::<SalesWindowGroup>().ok().map(Self::Group)
    }
}

impl std::fmt::Display for CohortSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllGames => write!(f, "All Games"),
            Self::Group(g) => write!(f, "{g}"),
        }
    }
}

/// The full set of pacing benchmarks built from one dataset: one curve per
/// cohort plus contributing-row counts for sample-size warnings.
#[derive(Debug, Clone, Default)]
pub struct PacingCurveSet {
    by_cohort: BTreeMap<SalesWindowGroup, PacingCurve>,
    row_counts: BTreeMap<SalesWindowGroup, usize>,
}

impl PacingCurveSet {
    pub fn new(
        by_cohort: BTreeMap<SalesWindowGroup, PacingCurve>,
        row_counts: BTreeMap<SalesWindowGroup, usize>,
    ) -> Self {
        Self {
            by_cohort,
            row_counts,
        }
    }

    pub fn cohorts(&self) -> impl Iterator<Item = (&SalesWindowGroup, &PacingCurve)> {
        self.by_cohort.iter()
    }

    pub fn curve(&self, cohort: SalesWindowGroup) -> Option<&PacingCurve> {
        self.by_cohort.get(&cohort).filter(|c| !c.is_empty())
    }

    /// Contributing rows behind a selection (summed across cohorts for the
    /// All-games view).
    pub fn row_count(&self, selection: CohortSelection) -> usize {
        match selection {
            CohortSelection::AllGames => self.row_counts.values().sum(),
            CohortSelection::Group(g) => self.row_counts.get(&g).copied().unwrap_or(0),
        }
    }

    /// The "All games" view: per-day average of the per-cohort percentile
    /// curves. This is a deliberate approximation (each cohort weighs
    /// equally regardless of row count), not a pooled-row percentile.
    /// Re-smoothed because averaging curves with different day grids can
    /// reintroduce dips.
    pub fn all_games(&self) -> PacingCurve {
        let mut by_day: BTreeMap<i64, Vec<(f64, f64, f64)>> = BTreeMap::new();
        for curve in self.by_cohort.values() {
            for p in curve.points() {
                by_day.entry(p.day as i64).or_default().push((
                    p.p25.value(),
                    p.median.value(),
                    p.p75.value(),
                ));
            }
        }

        let points = by_day
            .into_iter()
            .map(|(day, bands)| {
                let n = bands.len() as f64;
                let (s25, s50, s75) = bands.iter().fold((0.0, 0.0, 0.0), |acc, b| {
                    (acc.0 + b.0, acc.1 + b.1, acc.2 + b.2)
                });
                CurvePoint {
                    day: day as f64,
                    p25: CumShare::new(s25 / n),
                    median: CumShare::new(s50 / n),
                    p75: CumShare::new(s75 / n),
                }
            })
            .collect();

        let mut curve = PacingCurve::new(points);
        curve.smooth_monotonic();
        curve
    }
}
