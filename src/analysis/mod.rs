// Pacing-curve construction and scenario scoring
pub mod cache;
pub mod forecast;
pub mod pacing;
pub mod weights;

pub use cache::AnalysisCache;
pub use forecast::{run_scenario, run_scenario_with_curve};
pub use pacing::build_curves;
pub use weights::{minmax_scale, CategoryWeights};
