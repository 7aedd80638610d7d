//! Configuration module for the pacing engine.

// Can be private because we have a public re-export.
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use types::{
    ColumnDefaults, CumShare, MomentumWeights, PaceAdjustment, SampleThresholds, ScenarioRanges,
    Weight, WeightBounds,
};
