//! Fallback pacing benchmarks for when the primary dataset is unusable.

use std::path::Path;

use crate::config::constants::fallback;
use crate::config::CumShare;
use crate::data::DataError;
use crate::models::{CurvePoint, PacingCurve};

/// The hard-coded last-resort curve. Never empty, always monotone.
pub fn builtin_curve() -> PacingCurve {
    let points = fallback::BUILTIN_POINTS
        .iter()
        .map(|&(day, p25, median, p75)| CurvePoint {
            day,
            p25: CumShare::new(p25),
            median: CumShare::new(median),
            p75: CumShare::new(p75),
        })
        .collect();
    let mut curve = PacingCurve::new(points);
    curve.smooth_monotonic();
    curve
}

/// Loads a precomputed pacing curve from a secondary CSV with columns
/// `days_until_game`, `median_cum_share` (or `median`), `p25`, `p75`.
/// Unparseable rows are dropped; an empty result is an error so the caller
/// can fall through to the builtin curve.
pub fn load_curve_file(path: &Path) -> Result<PacingCurve, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let day_idx = col("days_until_game").ok_or(DataError::MissingColumn("days_until_game"))?;
    let median_idx = col("median_cum_share")
        .or_else(|| col("median"))
        .ok_or(DataError::MissingColumn("median_cum_share"))?;
    let p25_idx = col("p25").ok_or(DataError::MissingColumn("p25"))?;
    let p75_idx = col("p75").ok_or(DataError::MissingColumn("p75"))?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let num = |idx: usize| {
            record
                .get(idx)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
        };
        if let (Some(day), Some(median), Some(p25), Some(p75)) =
            (num(day_idx), num(median_idx), num(p25_idx), num(p75_idx))
        {
            points.push(CurvePoint {
                day,
                p25: CumShare::new(p25),
                median: CumShare::new(median),
                p75: CumShare::new(p75),
            });
        }
    }

    if points.is_empty() {
        return Err(DataError::NoValidRows);
    }

    let mut curve = PacingCurve::new(points);
    curve.smooth_monotonic();
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_curve_is_usable_and_monotone() {
        let curve = builtin_curve();
        assert!(!curve.is_empty());
        for w in curve.points().windows(2) {
            assert!(w[1].day > w[0].day);
            assert!(w[1].p25 >= w[0].p25);
            assert!(w[1].median >= w[0].median);
            assert!(w[1].p75 >= w[0].p75);
        }
        for p in curve.points() {
            assert!(p.p25 <= p.median && p.median <= p.p75);
        }
    }

    #[test]
    fn curve_file_parses_with_median_alias() {
        let path = std::env::temp_dir().join("pacecast_fallback_alias.csv");
        std::fs::write(&path, "days_until_game,median,p25,p75\n0,0.1,0.05,0.2\n30,0.4,0.3,0.5\n")
            .unwrap();
        let curve = load_curve_file(&path).unwrap();
        assert_eq!(curve.len(), 2);
        assert!((curve.median_at(30.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn empty_curve_file_is_an_error() {
        let path = std::env::temp_dir().join("pacecast_fallback_empty.csv");
        std::fs::write(&path, "days_until_game,median_cum_share,p25,p75\nx,y,z,w\n").unwrap();
        assert!(matches!(
            load_curve_file(&path).unwrap_err(),
            DataError::NoValidRows
        ));
    }
}
