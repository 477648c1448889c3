//! Common types used across the platform

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Inclusive date range for queries and task filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The 7-day week containing `date`, starting on `week_start`.
    ///
    /// Returns None only at the edges of the supported calendar.
    pub fn week_containing(date: NaiveDate, week_start: Weekday) -> Option<Self> {
        let offset = (date.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let start = date.checked_sub_days(Days::new(u64::from(offset)))?;
        let end = start.checked_add_days(Days::new(6))?;
        Some(Self { start, end })
    }

    /// Whether `date` falls inside the range, bounds included
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Lightweight reference to a garden, used to tag derived calendar entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GardenRef {
    pub id: uuid::Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_containing_monday_start() {
        // 2024-01-10 is a Wednesday
        let week = DateRange::week_containing(date(2024, 1, 10), Weekday::Mon).unwrap();
        assert_eq!(week.start, date(2024, 1, 8));
        assert_eq!(week.end, date(2024, 1, 14));
    }

    #[test]
    fn test_week_containing_on_first_day() {
        let week = DateRange::week_containing(date(2024, 1, 8), Weekday::Mon).unwrap();
        assert_eq!(week.start, date(2024, 1, 8));
        assert_eq!(week.end, date(2024, 1, 14));
    }

    #[test]
    fn test_week_containing_sunday_start() {
        let week = DateRange::week_containing(date(2024, 1, 10), Weekday::Sun).unwrap();
        assert_eq!(week.start, date(2024, 1, 7));
        assert_eq!(week.end, date(2024, 1, 13));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 8), date(2024, 1, 14));
        assert!(range.contains(date(2024, 1, 8)));
        assert!(range.contains(date(2024, 1, 14)));
        assert!(!range.contains(date(2024, 1, 7)));
        assert!(!range.contains(date(2024, 1, 15)));
    }
}
