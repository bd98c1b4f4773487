//! Inclusive calendar-date periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// An inclusive `[start, end]` range of calendar dates.
///
/// Both contract terms and invoice billing windows are periods. The struct
/// itself does not enforce `start < end`; ordering is a business rule owned
/// by the validators so that violations surface as domain errors with
/// context, not construction panics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatePeriod {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive interval intersection: `a.start <= b.end && a.end >= b.start`.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    pub fn overlaps(&self, other: &DatePeriod) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Whether `other` lies entirely within this period (inclusive bounds).
    pub fn contains(&self, other: &DatePeriod) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Number of calendar days in the period, counting both endpoints.
    ///
    /// Negative when `end` precedes `start`.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl core::fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl ValueObject for DatePeriod {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn touching_endpoints_overlap() {
        let a = DatePeriod::new(d(2024, 1, 1), d(2024, 1, 10));
        let b = DatePeriod::new(d(2024, 1, 10), d(2024, 1, 20));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn disjoint_periods_do_not_overlap() {
        let a = DatePeriod::new(d(2024, 1, 1), d(2024, 1, 10));
        let b = DatePeriod::new(d(2024, 1, 11), d(2024, 1, 20));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn containment_is_inclusive_of_bounds() {
        let contract = DatePeriod::new(d(2024, 1, 1), d(2024, 12, 31));
        assert!(contract.contains(&DatePeriod::new(d(2024, 1, 1), d(2024, 12, 31))));
        assert!(contract.contains(&DatePeriod::new(d(2024, 3, 1), d(2024, 3, 31))));
        assert!(!contract.contains(&DatePeriod::new(d(2023, 12, 31), d(2024, 1, 5))));
    }

    #[test]
    fn total_days_counts_both_endpoints() {
        assert_eq!(DatePeriod::new(d(2024, 1, 1), d(2024, 1, 1)).total_days(), 1);
        assert_eq!(DatePeriod::new(d(2024, 1, 1), d(2024, 1, 31)).total_days(), 31);
        assert_eq!(DatePeriod::new(d(2024, 1, 2), d(2024, 1, 1)).total_days(), 0);
    }
}
