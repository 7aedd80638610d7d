//! Pacing-curve construction.
//!
//! Aggregates per-row cumulative share into 25th/50th/75th percentile bands
//! by (cohort, day-since-onsale), then forces each band monotone with a
//! running maximum.

use std::collections::BTreeMap;

use crate::config::constants::samples;
use crate::config::CumShare;
use crate::data::TicketDataset;
use crate::models::{CurvePoint, PacingCurve, PacingCurveSet, SalesWindowGroup};
use crate::utils::quantile_of;

/// Builds one pacing curve per cohort present in the dataset.
///
/// Groups with an undefined median (no contributing rows) are dropped.
/// Cohorts with fewer contributing rows than the advisory threshold are
/// logged, never rejected.
pub fn build_curves(dataset: &TicketDataset) -> PacingCurveSet {
    let mut shares_by_day: BTreeMap<SalesWindowGroup, BTreeMap<i64, Vec<f64>>> = BTreeMap::new();
    let mut row_counts: BTreeMap<SalesWindowGroup, usize> = BTreeMap::new();

    for record in dataset.records() {
        shares_by_day
            .entry(record.cohort)
            .or_default()
            .entry(record.day)
            .or_default()
            .push(record.cum_share.value());
        *row_counts.entry(record.cohort).or_default() += 1;
    }

    let mut by_cohort = BTreeMap::new();
    for (cohort, days) in shares_by_day {
        let points: Vec<CurvePoint> = days
            .into_iter()
            .filter_map(|(day, shares)| {
                let median = quantile_of(&shares, 0.5)?;
                let p25 = quantile_of(&shares, 0.25).unwrap_or(median);
                let p75 = quantile_of(&shares, 0.75).unwrap_or(median);
                Some(CurvePoint {
                    day: day as f64,
                    p25: CumShare::new(p25),
                    median: CumShare::new(median),
                    p75: CumShare::new(p75),
                })
            })
            .collect();

        if points.is_empty() {
            continue;
        }

        let mut curve = PacingCurve::new(points);
        curve.smooth_monotonic();

        let rows = row_counts.get(&cohort).copied().unwrap_or(0);
        if rows < samples::COHORT_ROWS {
            log::warn!("cohort {cohort} built from only {rows} rows; treat its band as low-confidence");
        }
        by_cohort.insert(cohort, curve);
    }

    PacingCurveSet::new(by_cohort, row_counts)
}
