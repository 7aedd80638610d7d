// Top Level Constants
pub const GOAL_TICKETS: f64 = 2500.0;

pub mod weights {
    use crate::config::WeightBounds;

    pub const LO: f64 = 0.75;
    pub const HI: f64 = 1.25;
    /// Below this ratio spread, every label is treated as equal (neutral 1.0).
    pub const FLAT_EPSILON: f64 = 1e-12;

    pub const DEFAULT: WeightBounds = WeightBounds { lo: LO, hi: HI };
}

pub mod forecast {
    use crate::config::PaceAdjustment;

    pub const PACE_BASE: f64 = 0.70;
    pub const PACE_SPAN: f64 = 0.60;

    pub const DEFAULT: PaceAdjustment = PaceAdjustment {
        base: PACE_BASE,
        span: PACE_SPAN,
    };
}

pub mod momentum {
    use crate::config::{CumShare, MomentumWeights, Weight};

    pub const WEIGHT_DAY: Weight = Weight::new(0.40);
    pub const WEIGHT_TRANSACTIONS: Weight = Weight::new(0.20);
    pub const WEIGHT_AVG_TICKETS: Weight = Weight::new(0.15);
    pub const WEIGHT_TIER: Weight = Weight::new(0.15);
    pub const WEIGHT_GIVEAWAY: Weight = Weight::new(0.05);
    pub const WEIGHT_DAY_OF_WEEK: Weight = Weight::new(0.05);
    pub const FLOOR: CumShare = CumShare::new(0.02);
    pub const CEILING: CumShare = CumShare::new(0.999);

    pub const DEFAULT: MomentumWeights = MomentumWeights {
        day: WEIGHT_DAY,
        transactions: WEIGHT_TRANSACTIONS,
        avg_tickets: WEIGHT_AVG_TICKETS,
        tier: WEIGHT_TIER,
        giveaway: WEIGHT_GIVEAWAY,
        day_of_week: WEIGHT_DAY_OF_WEEK,
        floor: FLOOR,
        ceiling: CEILING,
    };
}

pub mod scenario {
    use crate::config::ScenarioRanges;

    pub const MAX_DAY: f64 = 240.0;
    pub const MAX_TRANSACTIONS: f64 = 800.0;
    pub const MAX_AVG_TICKETS: f64 = 6.0;

    pub const DEFAULT: ScenarioRanges = ScenarioRanges {
        max_day: MAX_DAY,
        max_transactions: MAX_TRANSACTIONS,
        max_avg_tickets: MAX_AVG_TICKETS,
    };
}

pub mod cohorts {
    /// Upper bound (inclusive) of the short sales-window bucket, in days.
    pub const SHORT_MAX: i64 = 30;
    /// Upper bound (inclusive) of the medium sales-window bucket, in days.
    pub const MEDIUM_MAX: i64 = 90;
}

pub mod columns {
    use crate::config::ColumnDefaults;

    // Required
    pub const DAYS_SINCE_ONSALE: &str = "days_since_onsale";
    pub const DAILY_TICKETS: &str = "daily_tickets";

    // Optional
    pub const EVENT_NAME: &str = "event_name";
    pub const TIER: &str = "tier";
    pub const GIVEAWAY: &str = "giveaway";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    /// Legacy exports name the weekday column `day_of_sale`.
    pub const DAY_OF_SALE: &str = "day_of_sale";
    pub const THEME: &str = "theme";

    pub const DEFAULT: ColumnDefaults = ColumnDefaults {
        tier: "Unknown",
        giveaway: "None",
        day_of_week: "Unknown",
        theme: "Regular Night",
    };

    // Labels guaranteed present (at neutral weight) after scaling, so
    // downstream lookups never miss.
    pub const TIER_GRADES: &[&str] = &["A+", "A", "B", "C", "D", "Unknown"];
    pub const GIVEAWAYS: &[&str] = &["None", "T-Shirt", "Bobblehead", "Poster", "Unknown"];
    pub const WEEKDAYS: &[&str] = &[
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Unknown",
    ];
    pub const THEMES: &[&str] = &["Regular Night"];
}

pub mod samples {
    use crate::config::SampleThresholds;

    pub const COHORT_ROWS: usize = 50;
    pub const FILTER_ROWS: usize = 150;

    pub const DEFAULT: SampleThresholds = SampleThresholds {
        cohort_rows: COHORT_ROWS,
        filter_rows: FILTER_ROWS,
    };
}

pub mod fallback {
    /// Last-resort pacing curve: (day, p25, median, p75).
    /// Used when neither the primary dataset nor a precomputed curve file is
    /// available, so downstream math never runs on an empty curve.
    pub const BUILTIN_POINTS: &[(f64, f64, f64, f64)] = &[
        (0.0, 0.02, 0.04, 0.07),
        (30.0, 0.14, 0.21, 0.30),
        (60.0, 0.29, 0.40, 0.52),
        (90.0, 0.46, 0.58, 0.70),
        (120.0, 0.64, 0.75, 0.85),
        (150.0, 0.84, 0.92, 0.97),
    ];
}
