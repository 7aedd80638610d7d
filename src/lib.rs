// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{AnalysisCache, CategoryWeights};
pub use data::{builtin_curve, load_curve_file, load_dataset, DataError, TicketDataset};
pub use models::{
    CohortSelection, ForecastResult, PaceStatus, PacingCurve, PacingCurveSet, SalesWindowGroup,
    ScenarioInput,
};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Per-event daily ticket-sales CSV
    #[arg(long, default_value = "tickets.csv")]
    pub input: PathBuf,

    /// Optional precomputed pacing-curve CSV, used when the input is unusable
    #[arg(long)]
    pub curve_file: Option<PathBuf>,

    /// Pacing cohort: all, short, medium or long
    #[arg(long, default_value = "all")]
    pub cohort: String,

    /// Target days on sale before the game
    #[arg(long, default_value_t = 60.0)]
    pub day: f64,

    /// Number of buyer transactions
    #[arg(long, default_value_t = 400.0)]
    pub transactions: f64,

    /// Average tickets per transaction
    #[arg(long, default_value_t = 3.0)]
    pub avg_tickets: f64,

    /// Game tier label (A+, A, B, C, D, ...)
    #[arg(long, default_value = "Unknown")]
    pub tier: String,

    /// Giveaway type (None, T-Shirt, Bobblehead, ...)
    #[arg(long, default_value = "None")]
    pub giveaway: String,

    /// Day of week of the game
    #[arg(long, default_value = "Saturday")]
    pub day_of_week: String,

    /// Emit the forecast result as JSON instead of the console report
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
