use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::constants::cohorts;
use crate::config::CumShare;

/// Sales-window cohort: events are benchmarked against events with a
/// similar on-sale window length. Bucket bounds are inclusive of the upper
/// edge (<=30 short, <=90 medium, else long).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SalesWindowGroup {
    #[strum(to_string = "Short (1–30)", serialize = "short")]
    Short,
    #[strum(to_string = "Medium (31–90)", serialize = "medium")]
    Medium,
    #[strum(to_string = "Long (91–150+)", serialize = "long")]
    Long,
    #[strum(to_string = "Unknown", serialize = "unknown")]
    Unknown,
}

impl SalesWindowGroup {
    pub fn from_window(window_days: i64) -> Self {
        if window_days <= cohorts::SHORT_MAX {
            Self::Short
        } else if window_days <= cohorts::MEDIUM_MAX {
            Self::Medium
        } else {
            Self::Long
        }
    }
}

/// One cleaned input row: a single (event, day-since-onsale) observation
/// with its derived cumulative fields joined on.
#[derive(Debug, Clone, Serialize)]
pub struct TicketSalesRecord {
    pub event: String,
    /// Days since the on-sale window opened. Unique within an event.
    pub day: i64,
    pub daily_tickets: f64,
    pub tier: String,
    pub giveaway: String,
    pub day_of_week: String,
    pub theme: String,

    // Derived per event, in (event, day) order
    pub cum_tickets: f64,
    pub total_tickets: f64,
    /// cum_tickets / total_tickets; 0 when the event total is 0.
    pub cum_share: CumShare,
    /// Max observed day for this event.
    pub sales_window: i64,
    pub cohort: SalesWindowGroup,
}

/// Per-event rollup, computed once per load and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub event: String,
    pub total_tickets: f64,
    pub sales_window: i64,
    pub cohort: SalesWindowGroup,
}
