use statrs::statistics::{Data, OrderStatistics};

/// Linear interpolation over a sorted sample grid, clamped at both ends.
/// Queries below `xs[0]` return `ys[0]`; queries above the last x return the
/// last y. No extrapolation.
pub(crate) fn interp_clamped(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return 0.0;
    }
    if x <= xs[0] {
        return ys[0];
    }
    let last = xs.len() - 1;
    if x >= xs[last] {
        return ys[last];
    }

    // xs is sorted ascending, so the bracketing pair always exists here.
    let hi = xs.partition_point(|&v| v < x);
    let lo = hi - 1;
    let dx = xs[hi] - xs[lo];
    if dx <= f64::EPSILON {
        return ys[hi];
    }
    let t = (x - xs[lo]) / dx;
    ys[lo] + t * (ys[hi] - ys[lo])
}

/// Replaces each element with the running maximum so far. Used to stop
/// aggregate percentile curves dipping where the contributing event
/// population changes between days.
pub(crate) fn running_max(values: &mut [f64]) {
    let mut max = f64::NEG_INFINITY;
    for v in values.iter_mut() {
        if *v > max {
            max = *v;
        } else {
            *v = max;
        }
    }
}

/// Empirical tau-quantile of a sample (tau in [0, 1]). None when empty.
#[inline]
pub(crate) fn quantile_of(values: &[f64], tau: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut data = Data::new(values.to_vec());
    Some(data.quantile(tau))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp_clamps_below_and_above_range() {
        let xs = [10.0, 20.0, 30.0];
        let ys = [0.1, 0.5, 0.9];
        assert_eq!(interp_clamped(0.0, &xs, &ys), 0.1);
        assert_eq!(interp_clamped(100.0, &xs, &ys), 0.9);
    }

    #[test]
    fn interp_is_linear_between_knots() {
        let xs = [10.0, 20.0];
        let ys = [0.0, 1.0];
        assert!((interp_clamped(15.0, &xs, &ys) - 0.5).abs() < 1e-12);
        assert!((interp_clamped(12.5, &xs, &ys) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn interp_hits_knots_exactly() {
        let xs = [10.0, 20.0, 30.0];
        let ys = [0.1, 0.5, 0.9];
        assert_eq!(interp_clamped(20.0, &xs, &ys), 0.5);
    }

    #[test]
    fn interp_empty_grid_is_zero() {
        assert_eq!(interp_clamped(5.0, &[], &[]), 0.0);
    }

    #[test]
    fn running_max_removes_dips() {
        let mut v = [0.1, 0.3, 0.2, 0.5, 0.4];
        running_max(&mut v);
        assert_eq!(v, [0.1, 0.3, 0.3, 0.5, 0.5]);
        for w in v.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn quantile_of_single_sample_is_that_sample() {
        assert_eq!(quantile_of(&[0.42], 0.25), Some(0.42));
        assert_eq!(quantile_of(&[0.42], 0.75), Some(0.42));
    }

    #[test]
    fn quantile_of_uniform_sample_is_that_value() {
        let v = [0.3; 10];
        assert_eq!(quantile_of(&v, 0.5), Some(0.3));
    }

    #[test]
    fn quantile_of_empty_is_none() {
        assert_eq!(quantile_of(&[], 0.5), None);
    }
}
