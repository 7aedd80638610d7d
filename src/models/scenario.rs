use serde::Serialize;
use strum_macros::Display;

use crate::config::CumShare;
use crate::models::CohortSelection;

/// The ephemeral, user-supplied what-if tuple. Re-evaluated on every control
/// change; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioInput {
    /// Target days-on-sale before the game.
    pub day: f64,
    /// Number of buyer transactions.
    pub transactions: f64,
    pub avg_tickets_per_txn: f64,
    pub tier: String,
    pub giveaway: String,
    pub day_of_week: String,
    pub cohort: CohortSelection,
}

/// Where the scenario sits relative to the historical percentile band.
/// Boundary ties resolve upward: exactly P25 is OnPace, exactly P75 is
/// Strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum PaceStatus {
    #[strum(to_string = "Below P25 (Danger)")]
    Danger,
    #[strum(to_string = "Between P25–P75 (On Pace)")]
    OnPace,
    #[strum(to_string = "Above P75 (Strong)")]
    Strong,
}

/// One full scenario evaluation against the active pacing benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResult {
    pub forecast_tickets: f64,
    pub goal_tickets: f64,
    /// goal - forecast; negative when the forecast clears the goal.
    pub gap_to_goal: f64,
    /// forecast / goal, clamped to [0, 100].
    pub progress_pct: f64,
    /// Median pacing share interpolated at the target day.
    pub pace_median: f64,
    pub p25_at_day: f64,
    pub p75_at_day: f64,
    /// Dimensionless blend of the scenario inputs, on the curve's y-axis.
    pub momentum: CumShare,
    pub status: PaceStatus,
    /// Rows behind the active benchmark; drives the low-sample flag.
    pub sample_rows: usize,
    pub low_sample: bool,
}
