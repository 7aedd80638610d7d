//! Scenario forecast scoring and pacing classification.
//!
//! Two deliberately different reads of the same scenario coexist:
//!
//! 1. A ticket-count forecast in absolute units, compared against the fixed
//!    sales goal.
//! 2. A dimensionless momentum score on the cumulative-share axis, compared
//!    against the percentile band. This one drives the displayed
//!    classification.
//!
//! Both are monotonically non-decreasing in every positively weighted
//! input; the coefficients themselves are tunable business parameters.

use crate::analysis::CategoryWeights;
use crate::config::constants::{forecast, momentum, samples, scenario, weights, GOAL_TICKETS};
use crate::config::{CumShare, MomentumWeights, PaceAdjustment, ScenarioRanges, WeightBounds};
use crate::data::DataError;
use crate::models::{
    CohortSelection, ForecastResult, PaceStatus, PacingCurve, PacingCurveSet, ScenarioInput,
};

/// Historical pace multiplier at the target day: a scenario deep into a
/// well-sold window forecasts higher than the same scenario on day one.
pub fn pace_adjustment(curve: &PacingCurve, day: f64, coeffs: &PaceAdjustment) -> f64 {
    coeffs.apply(CumShare::new(curve.median_at(day)))
}

/// Absolute ticket-count forecast:
/// transactions x group size x category multipliers x pace adjustment.
pub fn ticket_forecast(
    input: &ScenarioInput,
    category: &CategoryWeights,
    curve: &PacingCurve,
    coeffs: &PaceAdjustment,
) -> f64 {
    input.transactions
        * input.avg_tickets_per_txn
        * category.tier_weight(&input.tier).value()
        * category.giveaway_weight(&input.giveaway).value()
        * category.day_of_week_weight(&input.day_of_week).value()
        * pace_adjustment(curve, input.day, coeffs)
}

/// Dimensionless momentum score: a convex blend of the normalized scenario
/// controls, clamped so it never reaches exactly 0 or 1.
pub fn momentum_score(
    input: &ScenarioInput,
    category: &CategoryWeights,
    bounds: &WeightBounds,
    ranges: &ScenarioRanges,
    blend: &MomentumWeights,
) -> CumShare {
    let norm_day = (input.day / ranges.max_day).clamp(0.0, 1.0);
    let norm_txns = (input.transactions / ranges.max_transactions).clamp(0.0, 1.0);
    let norm_avg = (input.avg_tickets_per_txn / ranges.max_avg_tickets).clamp(0.0, 1.0);
    let norm_tier = bounds.unit_position(category.tier_weight(&input.tier));
    let norm_give = bounds.unit_position(category.giveaway_weight(&input.giveaway));
    let norm_dow = bounds.unit_position(category.day_of_week_weight(&input.day_of_week));

    let score = blend.day.value() * norm_day
        + blend.transactions.value() * norm_txns
        + blend.avg_tickets.value() * norm_avg
        + blend.tier.value() * norm_tier
        + blend.giveaway.value() * norm_give
        + blend.day_of_week.value() * norm_dow;

    CumShare::new(score.clamp(blend.floor.value(), blend.ceiling.value()))
}

/// Places a comparable score against the interpolated P25/P75 band.
/// Half-open semantics: exactly P25 counts as OnPace, exactly P75 as Strong.
pub fn classify(score: f64, p25: f64, p75: f64) -> PaceStatus {
    if score < p25 {
        PaceStatus::Danger
    } else if score < p75 {
        PaceStatus::OnPace
    } else {
        PaceStatus::Strong
    }
}

/// Evaluates a scenario against the benchmark its cohort selection names.
/// An empty cohort is an error here; the boundary recovers by broadening to
/// All Games or the builtin curve.
pub fn run_scenario(
    input: &ScenarioInput,
    category: &CategoryWeights,
    curves: &PacingCurveSet,
) -> Result<ForecastResult, DataError> {
    let curve = match input.cohort {
        CohortSelection::AllGames => curves.all_games(),
        CohortSelection::Group(group) => curves
            .curve(group)
            .cloned()
            .ok_or_else(|| DataError::EmptyCohort(group.to_string()))?,
    };
    if curve.is_empty() {
        return Err(DataError::EmptyCohort(input.cohort.to_string()));
    }

    let sample_rows = curves.row_count(input.cohort);
    Ok(run_scenario_with_curve(input, category, &curve, sample_rows))
}

/// Scores a scenario against an already-resolved curve (cohort curve,
/// All-games average, precomputed file, or the builtin fallback).
pub fn run_scenario_with_curve(
    input: &ScenarioInput,
    category: &CategoryWeights,
    curve: &PacingCurve,
    sample_rows: usize,
) -> ForecastResult {
    let forecast_tickets = ticket_forecast(input, category, curve, &forecast::DEFAULT);
    let momentum = momentum_score(
        input,
        category,
        &weights::DEFAULT,
        &scenario::DEFAULT,
        &momentum::DEFAULT,
    );

    let pace_median = curve.median_at(input.day);
    let p25_at_day = curve.p25_at(input.day);
    let p75_at_day = curve.p75_at(input.day);
    let status = classify(momentum.value(), p25_at_day, p75_at_day);

    let low_sample = sample_rows < samples::DEFAULT.filter_rows;
    if low_sample {
        log::warn!(
            "benchmark {} backed by only {sample_rows} rows; result is low-confidence",
            input.cohort
        );
    }

    ForecastResult {
        forecast_tickets,
        goal_tickets: GOAL_TICKETS,
        gap_to_goal: GOAL_TICKETS - forecast_tickets,
        progress_pct: (forecast_tickets / GOAL_TICKETS * 100.0).clamp(0.0, 100.0),
        pace_median,
        p25_at_day,
        p75_at_day,
        momentum,
        status,
        sample_rows,
        low_sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants;
    use crate::models::CurvePoint;

    fn medium_curve() -> PacingCurve {
        // The band from the worked example: day 60 -> 0.35 / 0.50 / 0.65
        PacingCurve::new(vec![
            CurvePoint {
                day: 0.0,
                p25: CumShare::new(0.05),
                median: CumShare::new(0.10),
                p75: CumShare::new(0.15),
            },
            CurvePoint {
                day: 60.0,
                p25: CumShare::new(0.35),
                median: CumShare::new(0.50),
                p75: CumShare::new(0.65),
            },
            CurvePoint {
                day: 90.0,
                p25: CumShare::new(0.55),
                median: CumShare::new(0.70),
                p75: CumShare::new(0.85),
            },
        ])
    }

    fn scenario(day: f64, transactions: f64) -> ScenarioInput {
        ScenarioInput {
            day,
            transactions,
            avg_tickets_per_txn: 3.0,
            tier: "Unknown".into(),
            giveaway: "None".into(),
            day_of_week: "Saturday".into(),
            cohort: CohortSelection::AllGames,
        }
    }

    #[test]
    fn classifier_resolves_boundary_ties_upward() {
        assert_eq!(classify(0.35, 0.35, 0.65), PaceStatus::OnPace);
        assert_eq!(classify(0.65, 0.35, 0.65), PaceStatus::Strong);
        assert_eq!(classify(0.3499, 0.35, 0.65), PaceStatus::Danger);
        assert_eq!(classify(0.6499, 0.35, 0.65), PaceStatus::OnPace);
    }

    #[test]
    fn worked_example_day_60_band() {
        let curve = medium_curve();
        assert_eq!(classify(0.40, curve.p25_at(60.0), curve.p75_at(60.0)), PaceStatus::OnPace);
        assert_eq!(classify(0.30, curve.p25_at(60.0), curve.p75_at(60.0)), PaceStatus::Danger);
    }

    #[test]
    fn forecast_is_monotone_in_transactions() {
        let curve = medium_curve();
        let weights = CategoryWeights::neutral();
        let mut prev = f64::NEG_INFINITY;
        for txns in [50.0, 200.0, 400.0, 800.0, 1000.0] {
            let f = ticket_forecast(&scenario(60.0, txns), &weights, &curve, &forecast::DEFAULT);
            assert!(f >= prev);
            prev = f;
        }
    }

    #[test]
    fn pace_adjustment_is_monotone_in_day() {
        let curve = medium_curve();
        let mut prev = f64::NEG_INFINITY;
        for day in [0.0, 20.0, 60.0, 75.0, 90.0, 240.0] {
            let adj = pace_adjustment(&curve, day, &forecast::DEFAULT);
            assert!(adj >= prev);
            prev = adj;
        }
        // Coefficients anchor the range: 0.70 at share 0, 1.30 at share 1
        assert!(pace_adjustment(&curve, 0.0, &forecast::DEFAULT) >= 0.70);
        assert!(pace_adjustment(&curve, 240.0, &forecast::DEFAULT) <= 1.30);
    }

    #[test]
    fn momentum_is_monotone_in_each_control() {
        let weights = CategoryWeights::neutral();
        let score = |day, txns, avg| {
            momentum_score(
                &ScenarioInput {
                    day,
                    transactions: txns,
                    avg_tickets_per_txn: avg,
                    tier: "Unknown".into(),
                    giveaway: "None".into(),
                    day_of_week: "Saturday".into(),
                    cohort: CohortSelection::AllGames,
                },
                &weights,
                &constants::weights::DEFAULT,
                &constants::scenario::DEFAULT,
                &constants::momentum::DEFAULT,
            )
            .value()
        };
        assert!(score(120.0, 400.0, 3.0) >= score(60.0, 400.0, 3.0));
        assert!(score(60.0, 600.0, 3.0) >= score(60.0, 400.0, 3.0));
        assert!(score(60.0, 400.0, 5.0) >= score(60.0, 400.0, 3.0));
    }

    #[test]
    fn momentum_stays_inside_its_clamp_band() {
        use crate::config::Weight;
        use std::collections::BTreeMap;

        let weights_at = |w: f64| {
            let map =
                |label: &str| BTreeMap::from([(label.to_owned(), Weight::new(w))]);
            CategoryWeights {
                tier: map("X"),
                giveaway: map("X"),
                day_of_week: map("X"),
                theme: map("X"),
            }
        };
        let cold = ScenarioInput {
            day: 0.0,
            transactions: 0.0,
            avg_tickets_per_txn: 0.0,
            tier: "X".into(),
            giveaway: "X".into(),
            day_of_week: "X".into(),
            cohort: CohortSelection::AllGames,
        };
        let hot = ScenarioInput {
            day: 9999.0,
            transactions: 9999.0,
            avg_tickets_per_txn: 9999.0,
            ..cold.clone()
        };

        // Every component at its minimum floors at 0.02, never exactly 0
        let lo = momentum_score(
            &cold,
            &weights_at(constants::weights::LO),
            &constants::weights::DEFAULT,
            &constants::scenario::DEFAULT,
            &constants::momentum::DEFAULT,
        );
        assert_eq!(lo.value(), constants::momentum::FLOOR.value());

        // Every component maxed blends to 1.0 and caps at 0.999
        let hi = momentum_score(
            &hot,
            &weights_at(constants::weights::HI),
            &constants::weights::DEFAULT,
            &constants::scenario::DEFAULT,
            &constants::momentum::DEFAULT,
        );
        assert_eq!(hi.value(), constants::momentum::CEILING.value());
    }

    #[test]
    fn run_scenario_wires_score_to_status() {
        let curve = medium_curve();
        let weights = CategoryWeights::neutral();
        let result = run_scenario_with_curve(&scenario(60.0, 400.0), &weights, &curve, 500);
        assert_eq!(
            result.status,
            classify(result.momentum.value(), result.p25_at_day, result.p75_at_day)
        );
        assert!((result.gap_to_goal - (result.goal_tickets - result.forecast_tickets)).abs() < 1e-9);
        assert!(!result.low_sample);

        let sparse = run_scenario_with_curve(&scenario(60.0, 400.0), &weights, &curve, 10);
        assert!(sparse.low_sample);
    }

    #[test]
    fn empty_cohort_selection_is_an_error() {
        let input = ScenarioInput {
            cohort: CohortSelection::Group(crate::models::SalesWindowGroup::Long),
            ..scenario(60.0, 400.0)
        };
        let err = run_scenario(&input, &CategoryWeights::neutral(), &PacingCurveSet::default())
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyCohort(_)));
    }
}
