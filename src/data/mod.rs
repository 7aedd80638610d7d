mod fallback;
mod loader;

pub use fallback::{builtin_curve, load_curve_file};
pub use loader::{load_dataset, TicketDataset};

use thiserror::Error;

/// Everything that can go wrong between an input file and a usable
/// benchmark. All variants are recoverable at the boundary: callers fall
/// back to the builtin curve, the All-games cohort, or neutral weights
/// instead of crashing.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("input file not found: {0}")]
    FileNotFound(String),

    #[error("required column missing: {0}")]
    MissingColumn(&'static str),

    #[error("no valid rows remain after cleaning")]
    NoValidRows,

    #[error("no pacing data for cohort: {0}")]
    EmptyCohort(String),

    #[error("csv read failed")]
    Csv(#[from] csv::Error),
}
