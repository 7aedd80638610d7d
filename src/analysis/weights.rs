//! Data-driven category weights.
//!
//! Each categorical dimension (tier, giveaway, day-of-week, theme) gets a
//! multiplier derived from its historical mean daily tickets relative to the
//! global mean, rescaled into a bounded band around neutral.

use std::collections::BTreeMap;

use crate::config::constants::{columns, weights};
use crate::config::{Weight, WeightBounds};
use crate::data::TicketDataset;
use crate::models::TicketSalesRecord;

/// Linearly rescales raw ratios into [lo, hi].
///
/// Empty input stays empty. Non-finite ratios are neutralized to 1.0 before
/// scaling. When all ratios are effectively equal, every label maps to 1.0
/// rather than implying false differentiation (and avoiding the zero-span
/// division). Otherwise the minimum ratio maps to exactly `lo` and the
/// maximum to exactly `hi`.
pub fn minmax_scale(raw: &BTreeMap<String, f64>, bounds: &WeightBounds) -> BTreeMap<String, Weight> {
    if raw.is_empty() {
        return BTreeMap::new();
    }

    let vals: Vec<f64> = raw
        .values()
        .map(|&v| if v.is_finite() { v } else { 1.0 })
        .collect();
    let min = vals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if max - min < weights::FLAT_EPSILON {
        return raw.keys().map(|k| (k.clone(), Weight::NEUTRAL)).collect();
    }

    raw.keys()
        .zip(vals)
        .map(|(k, v)| {
            let scaled = bounds.lo + (v - min) * bounds.span() / (max - min);
            (k.clone(), Weight::new(scaled))
        })
        .collect()
}

/// One weight mapping per categorical dimension. Unknown labels look up as
/// neutral, so scenario inputs can never miss.
#[derive(Debug, Clone, Default)]
pub struct CategoryWeights {
    pub tier: BTreeMap<String, Weight>,
    pub giveaway: BTreeMap<String, Weight>,
    pub day_of_week: BTreeMap<String, Weight>,
    pub theme: BTreeMap<String, Weight>,
}

impl CategoryWeights {
    /// Builds all four mappings from historical data, then guarantees the
    /// sensible-default label sets are present at neutral weight.
    pub fn from_dataset(dataset: &TicketDataset, bounds: &WeightBounds) -> Self {
        let base = dataset.global_mean_daily();

        let mut tier = minmax_scale(&mean_ratio_by(dataset, base, |r| &r.tier), bounds);
        let mut giveaway = minmax_scale(&mean_ratio_by(dataset, base, |r| &r.giveaway), bounds);
        let mut day_of_week =
            minmax_scale(&mean_ratio_by(dataset, base, |r| &r.day_of_week), bounds);
        let mut theme = minmax_scale(&mean_ratio_by(dataset, base, |r| &r.theme), bounds);

        insert_defaults(&mut tier, columns::TIER_GRADES);
        insert_defaults(&mut giveaway, columns::GIVEAWAYS);
        insert_defaults(&mut day_of_week, columns::WEEKDAYS);
        insert_defaults(&mut theme, columns::THEMES);

        Self {
            tier,
            giveaway,
            day_of_week,
            theme,
        }
    }

    /// All-neutral weights for fallback mode (no usable dataset).
    pub fn neutral() -> Self {
        let mut out = Self::default();
        insert_defaults(&mut out.tier, columns::TIER_GRADES);
        insert_defaults(&mut out.giveaway, columns::GIVEAWAYS);
        insert_defaults(&mut out.day_of_week, columns::WEEKDAYS);
        insert_defaults(&mut out.theme, columns::THEMES);
        out
    }

    pub fn tier_weight(&self, label: &str) -> Weight {
        lookup(&self.tier, label)
    }

    pub fn giveaway_weight(&self, label: &str) -> Weight {
        lookup(&self.giveaway, label)
    }

    pub fn day_of_week_weight(&self, label: &str) -> Weight {
        lookup(&self.day_of_week, label)
    }

    pub fn theme_weight(&self, label: &str) -> Weight {
        lookup(&self.theme, label)
    }
}

fn lookup(map: &BTreeMap<String, Weight>, label: &str) -> Weight {
    map.get(label).copied().unwrap_or(Weight::NEUTRAL)
}

fn insert_defaults(map: &mut BTreeMap<String, Weight>, labels: &[&str]) {
    for label in labels {
        map.entry((*label).to_owned()).or_insert(Weight::NEUTRAL);
    }
}

/// Mean daily tickets per label of one dimension, over the global mean.
fn mean_ratio_by(
    dataset: &TicketDataset,
    base: f64,
    label_of: impl Fn(&TicketSalesRecord) -> &str,
) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in dataset.records() {
        let entry = sums.entry(label_of(record).to_owned()).or_insert((0.0, 0));
        entry.0 += record.daily_tickets;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(label, (sum, count))| (label, sum / count as f64 / base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants;

    fn raw(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn empty_map_stays_empty() {
        assert!(minmax_scale(&BTreeMap::new(), &constants::weights::DEFAULT).is_empty());
    }

    #[test]
    fn equal_ratios_are_all_neutral() {
        let scaled = minmax_scale(
            &raw(&[("A", 1.3), ("B", 1.3), ("C", 1.3)]),
            &constants::weights::DEFAULT,
        );
        assert!(scaled.values().all(|w| w.value() == 1.0));
    }

    #[test]
    fn extremes_map_exactly_to_bounds() {
        let scaled = minmax_scale(
            &raw(&[("low", 0.5), ("mid", 1.0), ("high", 2.0)]),
            &constants::weights::DEFAULT,
        );
        assert_eq!(scaled["low"].value(), 0.75);
        assert_eq!(scaled["high"].value(), 1.25);
        for w in scaled.values() {
            assert!(w.value() >= 0.75 && w.value() <= 1.25);
        }
    }

    #[test]
    fn every_input_label_survives_scaling() {
        let input = raw(&[("a", 0.2), ("b", 0.9), ("c", 1.8), ("d", 3.0)]);
        let scaled = minmax_scale(&input, &constants::weights::DEFAULT);
        assert_eq!(scaled.len(), input.len());
        for k in input.keys() {
            assert!(scaled.contains_key(k));
        }
    }

    #[test]
    fn non_finite_ratios_are_neutralized() {
        let scaled = minmax_scale(
            &raw(&[("nan", f64::NAN), ("low", 0.5), ("high", 1.5)]),
            &constants::weights::DEFAULT,
        );
        // NaN became 1.0 (the midpoint here), so it scales to band center
        assert!((scaled["nan"].value() - 1.0).abs() < 1e-12);
        assert_eq!(scaled["low"].value(), 0.75);
        assert_eq!(scaled["high"].value(), 1.25);
    }

    #[test]
    fn uniform_sales_produce_all_neutral_weights() {
        // Identical daily tickets everywhere: no category can differentiate
        let path = std::env::temp_dir().join("pacecast_weights_uniform.csv");
        std::fs::write(
            &path,
            "event_name,days_since_onsale,daily_tickets,tier,giveaway,day_of_week\n\
             a,0,10,A,None,Friday\n\
             a,1,10,A,None,Saturday\n\
             b,0,10,C,Poster,Sunday\n\
             b,1,10,C,Poster,Monday\n",
        )
        .unwrap();
        let dataset =
            crate::data::load_dataset(&path, &constants::columns::DEFAULT).unwrap();
        let weights = CategoryWeights::from_dataset(&dataset, &constants::weights::DEFAULT);
        for map in [&weights.tier, &weights.giveaway, &weights.day_of_week, &weights.theme] {
            assert!(map.values().all(|w| w.value() == 1.0));
        }
    }

    #[test]
    fn neutral_weights_resolve_default_labels() {
        let w = CategoryWeights::neutral();
        assert_eq!(w.tier_weight("A+").value(), 1.0);
        assert_eq!(w.day_of_week_weight("Saturday").value(), 1.0);
        assert_eq!(w.giveaway_weight("Bobblehead").value(), 1.0);
        // Unknown labels are neutral too, never a miss
        assert_eq!(w.tier_weight("Z-").value(), 1.0);
    }
}
