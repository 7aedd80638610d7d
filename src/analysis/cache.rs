//! Explicit memoization of the per-dataset artifacts.
//!
//! Curves and weights are pure functions of the dataset, so they are cached
//! keyed by its content hash. No process-wide state; whoever owns the cache
//! owns the invalidation ("recompute iff the input dataset changed").

use crate::analysis::{build_curves, CategoryWeights};
use crate::config::WeightBounds;
use crate::data::TicketDataset;
use crate::models::PacingCurveSet;

#[derive(Debug, Default)]
pub struct AnalysisCache {
    entry: Option<CacheEntry>,
    rebuilds: usize,
}

#[derive(Debug)]
struct CacheEntry {
    key: u64,
    curves: PacingCurveSet,
    weights: CategoryWeights,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached curves and weights for this dataset, rebuilding
    /// only when the content hash differs from the cached key.
    pub fn get_or_build(
        &mut self,
        dataset: &TicketDataset,
        bounds: &WeightBounds,
    ) -> (&PacingCurveSet, &CategoryWeights) {
        let key = dataset.content_hash();
        let stale = !matches!(&self.entry, Some(e) if e.key == key);
        if stale {
            log::debug!("analysis cache miss for dataset {key:#x}; rebuilding curves and weights");
            self.entry = Some(CacheEntry {
                key,
                curves: build_curves(dataset),
                weights: CategoryWeights::from_dataset(dataset, bounds),
            });
            self.rebuilds += 1;
        }

        match &self.entry {
            Some(e) => (&e.curves, &e.weights),
            None => unreachable!("cache entry was just populated"),
        }
    }

    /// How many times the cache has recomputed. Diagnostic only.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
