//! Working-day arithmetic over inclusive date ranges.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// Degenerate date range handed to the calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("invalid date range for working-day calculation ({start} - {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Whether a date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Count the Monday–Friday days in `[start, end]` inclusive.
///
/// Fails with [`DateRangeError::InvalidRange`] when the inclusive day count
/// is not positive. Public holidays are counted as working days; this engine
/// applies no holiday calendar.
pub fn working_days(start: NaiveDate, end: NaiveDate) -> Result<u32, DateRangeError> {
    let total_days = (end - start).num_days() + 1;
    if total_days <= 0 {
        return Err(DateRangeError::InvalidRange { start, end });
    }

    let mut days = 0u32;
    let mut current = start;
    while current <= end {
        if !is_weekend(current) {
            days += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(days)
}
