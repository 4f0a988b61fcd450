//! Row-to-record parsing for the tabular disaster source.
//!
//! The engine consumes already-parsed [`EventRecord`]s; this module is the
//! loading collaborator that turns raw rows (string category slug, numeric
//! cost in billions, integer year, ISO `mid` date, display name) into records.
//! Parsing is all-or-nothing: one bad row fails the whole batch.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DisasterCategory, EventRecord};
use crate::error::{TimelineError, TimelineResult};

const MID_DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw row of the source table, before type coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEventRow {
    pub category: String,
    pub cost: f64,
    pub year: i32,
    /// ISO-format representative date of the event.
    pub mid: String,
    pub name: String,
}

/// Coerces one raw row into an [`EventRecord`].
///
/// Fails with `MalformedRecord` for an unparseable date or a negative or
/// non-finite cost, and with `UnknownCategory` for a slug outside the fixed
/// category set.
pub fn record_from_row(row: &RawEventRow) -> TimelineResult<EventRecord> {
    let category = DisasterCategory::from_str(&row.category)?;

    if !row.cost.is_finite() || row.cost < 0.0 {
        return Err(TimelineError::malformed(
            &row.name,
            format!("cost must be finite and >= 0, got {}", row.cost),
        ));
    }

    let occurred_on = NaiveDate::parse_from_str(&row.mid, MID_DATE_FORMAT).map_err(|err| {
        TimelineError::malformed(&row.name, format!("unparseable date `{}`: {err}", row.mid))
    })?;

    Ok(EventRecord {
        category,
        magnitude: row.cost,
        occurred_on,
        year: row.year,
        name: row.name.clone(),
    })
}

pub fn records_from_rows(rows: &[RawEventRow]) -> TimelineResult<Vec<EventRecord>> {
    rows.iter().map(record_from_row).collect()
}

/// Parses a JSON array of raw rows into records.
pub fn records_from_json(json: &str) -> TimelineResult<Vec<EventRecord>> {
    let rows: Vec<RawEventRow> = serde_json::from_str(json)
        .map_err(|err| TimelineError::InvalidData(format!("invalid row json: {err}")))?;
    records_from_rows(&rows)
}
