//! Calendar-month reporting windows.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2999;

/// A validated (year, month) pair identifying one payroll period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingMonth {
    first_day: NaiveDate,
}

impl ReportingMonth {
    /// Creates a reporting month, rejecting months outside 1-12 and
    /// implausible years.
    pub fn try_new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "year",
                MIN_YEAR.into(),
                MAX_YEAR.into(),
                year.into(),
            ));
        }
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ValidationError::out_of_range("month", 1, 12, month.into()))?;
        Ok(Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The calendar month before this one; January rolls back to December.
    pub fn previous(&self) -> Self {
        Self {
            first_day: self.first_day - Months::new(1),
        }
    }

    /// The calendar month after this one; December rolls over to January.
    pub fn next(&self) -> Self {
        Self {
            first_day: self.first_day + Months::new(1),
        }
    }

    /// All twelve months of `year`, January first.
    pub fn months_of_year(year: i32) -> Result<Vec<Self>, ValidationError> {
        (1..=12).map(|m| Self::try_new(year, m)).collect()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The window covering every instant of this month.
    pub fn window(&self) -> DateWindow {
        DateWindow {
            start: self.first_day.and_time(NaiveTime::MIN),
            end: self.next().first_day.and_time(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for ReportingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// A half-open range of wall-clock instants `[start, end)`.
///
/// A month window therefore includes the last instant of the month and
/// nothing of the following one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// Window from the start of `first` to the end of `last`.
    pub fn spanning(first: ReportingMonth, last: ReportingMonth) -> Self {
        Self {
            start: first.window().start,
            end: last.window().end,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// First instant after the window.
    pub fn end_exclusive(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn try_new_rejects_month_zero_and_thirteen() {
        assert!(ReportingMonth::try_new(2024, 0).is_err());
        assert!(ReportingMonth::try_new(2024, 13).is_err());
        assert!(ReportingMonth::try_new(2024, 12).is_ok());
    }

    #[test]
    fn try_new_rejects_implausible_year() {
        let err = ReportingMonth::try_new(20_240, 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "year"));
    }

    #[test]
    fn previous_of_january_is_december_of_prior_year() {
        let jan = ReportingMonth::try_new(2024, 1).unwrap();
        let prev = jan.previous();
        assert_eq!((prev.year(), prev.month()), (2023, 12));
    }

    #[test]
    fn next_of_december_is_january_of_next_year() {
        let dec = ReportingMonth::try_new(2023, 12).unwrap();
        let next = dec.next();
        assert_eq!((next.year(), next.month()), (2024, 1));
    }

    #[test]
    fn window_includes_last_instant_and_excludes_next_month() {
        let feb = ReportingMonth::try_new(2024, 2).unwrap().window();
        assert!(feb.contains(at(2024, 2, 1, 0, 0, 0)));
        assert!(feb.contains(at(2024, 2, 29, 23, 59, 59)));
        assert!(!feb.contains(at(2024, 3, 1, 0, 0, 0)));
        assert!(!feb.contains(at(2024, 1, 31, 23, 59, 59)));
    }

    #[test]
    fn spanning_window_covers_both_months() {
        let mar = ReportingMonth::try_new(2024, 3).unwrap();
        let window = DateWindow::spanning(mar.previous(), mar);
        assert!(window.contains(at(2024, 2, 10, 9, 0, 0)));
        assert!(window.contains(at(2024, 3, 31, 22, 0, 0)));
        assert!(!window.contains(at(2024, 4, 1, 0, 0, 0)));
    }

    #[test]
    fn months_of_year_yields_twelve_in_order() {
        let months = ReportingMonth::months_of_year(2024).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month(), 1);
        assert_eq!(months[11].month(), 12);
    }

    #[test]
    fn displays_as_iso_year_month() {
        let m = ReportingMonth::try_new(2024, 3).unwrap();
        assert_eq!(m.to_string(), "2024-03");
    }
}
