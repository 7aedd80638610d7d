mod curve;
mod record;
mod scenario;

pub use curve::{CohortSelection, CurvePoint, PacingCurve, PacingCurveSet};
pub use record::{EventSummary, SalesWindowGroup, TicketSalesRecord};
pub use scenario::{ForecastResult, PaceStatus, ScenarioInput};
