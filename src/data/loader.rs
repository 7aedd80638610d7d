//! CSV ingestion and cleaning for per-event daily ticket sales.
//!
//! The pipeline is order-sensitive: rows are sorted by (event, day) before
//! running sums, because cumulative share is only meaningful under that
//! ordering.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use itertools::Itertools;

use crate::config::constants::columns;
use crate::config::{ColumnDefaults, CumShare};
use crate::data::DataError;
use crate::models::{EventSummary, SalesWindowGroup, TicketSalesRecord};

/// A cleaned, derived dataset. Immutable after load; the content hash keys
/// the analysis cache so curves and weights are only rebuilt when the
/// underlying data actually changes.
#[derive(Debug, Clone)]
pub struct TicketDataset {
    records: Vec<TicketSalesRecord>,
    events: Vec<EventSummary>,
    content_hash: u64,
}

impl TicketDataset {
    pub fn records(&self) -> &[TicketSalesRecord] {
        &self.records
    }

    pub fn events(&self) -> &[EventSummary] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// Mean daily tickets across every row; 1.0 when degenerate so ratio
    /// math never divides by zero.
    pub fn global_mean_daily(&self) -> f64 {
        if self.records.is_empty() {
            return 1.0;
        }
        let mean =
            self.records.iter().map(|r| r.daily_tickets).sum::<f64>() / self.records.len() as f64;
        if mean > 0.0 {
            mean
        } else {
            1.0
        }
    }
}

/// Raw row after per-field coercion, before the cumulative pass.
struct CleanRow {
    event: String,
    day: i64,
    daily_tickets: f64,
    tier: String,
    giveaway: String,
    day_of_week: String,
    theme: String,
}

/// Loads and cleans the primary dataset.
///
/// Fails only on structural problems (missing file, missing required
/// columns, nothing left after cleaning). Bad individual rows are dropped,
/// not fatal; missing categoricals are filled from `defaults`; a missing
/// event name gets a synthesized per-row id so cumulative logic still
/// operates per "event".
pub fn load_dataset(path: &Path, defaults: &ColumnDefaults) -> Result<TicketDataset, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let col = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let day_idx = col(columns::DAYS_SINCE_ONSALE)
        .ok_or(DataError::MissingColumn(columns::DAYS_SINCE_ONSALE))?;
    let tickets_idx =
        col(columns::DAILY_TICKETS).ok_or(DataError::MissingColumn(columns::DAILY_TICKETS))?;

    let event_idx = col(columns::EVENT_NAME);
    let tier_idx = col(columns::TIER);
    let giveaway_idx = col(columns::GIVEAWAY);
    // Legacy exports call the weekday column day_of_sale
    let dow_idx = col(columns::DAY_OF_WEEK).or_else(|| col(columns::DAY_OF_SALE));
    let theme_idx = col(columns::THEME);

    let mut rows: Vec<CleanRow> = Vec::new();
    let mut dropped = 0usize;

    for (row_num, record) in reader.records().enumerate() {
        let record = record?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let day = field(Some(day_idx)).and_then(|s| s.parse::<f64>().ok());
        let daily = field(Some(tickets_idx)).and_then(|s| s.parse::<f64>().ok());

        let (day, daily) = match (day, daily) {
            (Some(d), Some(t)) if d.is_finite() && t.is_finite() && d >= 0.0 && t >= 0.0 => {
                (d.round() as i64, t)
            }
            _ => {
                dropped += 1;
                log::debug!("dropping row {row_num}: unparseable or negative required field");
                continue;
            }
        };

        let event = field(event_idx)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("event_{row_num}"));

        rows.push(CleanRow {
            event,
            day,
            daily_tickets: daily,
            tier: field(tier_idx).unwrap_or(defaults.tier).to_owned(),
            giveaway: field(giveaway_idx).unwrap_or(defaults.giveaway).to_owned(),
            day_of_week: field(dow_idx).unwrap_or(defaults.day_of_week).to_owned(),
            theme: field(theme_idx).unwrap_or(defaults.theme).to_owned(),
        });
    }

    if dropped > 0 {
        log::info!("dropped {dropped} invalid rows during cleaning");
    }
    if rows.is_empty() {
        return Err(DataError::NoValidRows);
    }

    rows.sort_by(|a, b| a.event.cmp(&b.event).then(a.day.cmp(&b.day)));

    let mut records = Vec::with_capacity(rows.len());
    let mut events = Vec::new();
    let mut hasher = DefaultHasher::new();

    for (event, group) in &rows.into_iter().chunk_by(|r| r.event.clone()) {
        let group: Vec<CleanRow> = group.collect();
        let total: f64 = group.iter().map(|r| r.daily_tickets).sum();
        // Sorted ascending, so the window is the last observed day
        let window = group.last().map(|r| r.day).unwrap_or(0);
        let cohort = SalesWindowGroup::from_window(window);

        let mut cum = 0.0;
        for row in group {
            cum += row.daily_tickets;
            let share = if total > 0.0 { cum / total } else { 0.0 };

            row.event.hash(&mut hasher);
            row.day.hash(&mut hasher);
            row.daily_tickets.to_bits().hash(&mut hasher);
            row.tier.hash(&mut hasher);
            row.giveaway.hash(&mut hasher);
            row.day_of_week.hash(&mut hasher);
            row.theme.hash(&mut hasher);

            records.push(TicketSalesRecord {
                event: row.event,
                day: row.day,
                daily_tickets: row.daily_tickets,
                tier: row.tier,
                giveaway: row.giveaway,
                day_of_week: row.day_of_week,
                theme: row.theme,
                cum_tickets: cum,
                total_tickets: total,
                cum_share: CumShare::new(share),
                sales_window: window,
                cohort,
            });
        }

        events.push(EventSummary {
            event,
            total_tickets: total,
            sales_window: window,
            cohort,
        });
    }

    Ok(TicketDataset {
        records,
        events,
        content_hash: hasher.finish(),
    })
}
