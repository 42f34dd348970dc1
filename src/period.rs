// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive intervals between two instants.
//!
//! Period pairs produced by the alignment and segmentation functions are
//! [`Interval`]s whose `end` is the last instant still inside the period,
//! one resolution step before the next period's start.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::instant::{CalendarInstant, Instant};

/// Represents a closed interval `[start, end]` between two instants.
///
/// # Examples
///
/// ```
/// use calperiod::{month_range, Interval};
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let feb: Interval<NaiveDate> = month_range(d);
///
/// assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(feb.duration_days(), qtty::Days::new(29.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

/// Interval at calendar-date precision.
pub type DateInterval = Interval<NaiveDate>;

/// Interval at date-time precision.
pub type DateTimeInterval = Interval<NaiveDateTime>;

impl<T> Interval<T> {
    /// Creates a new interval between two instants, both included.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Applies `f` to both bounds.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Interval<U> {
        Interval::new(f(self.start), f(self.end))
    }

    /// Splits the interval into its `(start, end)` pair.
    pub fn into_tuple(self) -> (T, T) {
        (self.start, self.end)
    }
}

impl<T: Into<Instant>> Interval<T> {
    /// Converts both bounds into [`Instant`]s.
    pub fn into_instants(self) -> Interval<Instant> {
        self.map(Into::into)
    }
}

impl<T: Ord + Copy> Interval<T> {
    /// Returns `true` if `t` lies within `[start, end]`.
    pub fn contains(&self, t: &T) -> bool {
        self.start <= *t && *t <= self.end
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// Bounds are inclusive, so intervals sharing a single instant intersect
    /// in that instant.  Disjoint intervals return `None`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start <= end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: CalendarInstant> Interval<T> {
    /// Span covered by the interval, counting the final resolution step.
    ///
    /// A single-day date interval lasts one day; a whole day at date-time
    /// precision (`00:00` to `23:59:59.999999`) lasts exactly 24 hours.
    pub fn duration(&self) -> TimeDelta {
        self.end.difference(&self.start) + T::resolution()
    }

    /// Span covered by the interval, in days.
    pub fn duration_days(&self) -> Days {
        const MICROS_PER_DAY: f64 = 86_400_000_000.0;
        const SECONDS_PER_DAY: f64 = 86_400.0;

        let duration = self.duration();
        match duration.num_microseconds() {
            Some(us) => Days::new(us as f64 / MICROS_PER_DAY),
            // Spans that overflow i64 microseconds.
            None => Days::new(duration.num_seconds() as f64 / SECONDS_PER_DAY),
        }
    }
}

impl<T> From<Interval<T>> for (T, T) {
    fn from(interval: Interval<T>) -> Self {
        interval.into_tuple()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let period = Interval::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(period.start, date(2024, 1, 1));
        assert_eq!(period.end, date(2024, 1, 31));
        assert_eq!(period.into_tuple(), (date(2024, 1, 1), date(2024, 1, 31)));
    }

    #[test]
    fn test_interval_duration_dates() {
        let january = Interval::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(january.duration(), TimeDelta::days(31));
        assert_eq!(january.duration_days(), Days::new(31.0));

        let single = Interval::new(date(2024, 1, 1), date(2024, 1, 1));
        assert_eq!(single.duration_days(), Days::new(1.0));
    }

    #[test]
    fn test_interval_duration_datetimes() {
        let start = date(2024, 6, 13).and_hms_opt(6, 0, 0).unwrap();
        let end = date(2024, 6, 14)
            .and_hms_micro_opt(5, 59, 59, 999_999)
            .unwrap();
        let bday = Interval::new(start, end);
        assert_eq!(bday.duration(), TimeDelta::hours(24));
        assert_eq!(bday.duration_days(), Days::new(1.0));

        let noon = date(2024, 6, 13).and_hms_opt(12, 0, 0).unwrap();
        let half = Interval::new(start, noon - TimeDelta::microseconds(1));
        assert_eq!(half.duration_days(), Days::new(0.25));
    }

    #[test]
    fn test_interval_contains_is_inclusive() {
        let period = Interval::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(period.contains(&date(2024, 1, 1)));
        assert!(period.contains(&date(2024, 1, 31)));
        assert!(!period.contains(&date(2024, 2, 1)));
        assert!(!period.contains(&date(2023, 12, 31)));
    }

    #[test]
    fn test_interval_intersection_overlap() {
        let a = Interval::new(date(2024, 1, 1), date(2024, 1, 20));
        let b = Interval::new(date(2024, 1, 10), date(2024, 2, 5));

        let overlap = a.intersection(&b).expect("expected overlap");
        assert_eq!(overlap, Interval::new(date(2024, 1, 10), date(2024, 1, 20)));
    }

    #[test]
    fn test_interval_intersection_touching_edges() {
        let a = Interval::new(date(2024, 1, 1), date(2024, 1, 10));
        let b = Interval::new(date(2024, 1, 10), date(2024, 1, 20));
        assert_eq!(
            a.intersection(&b),
            Some(Interval::new(date(2024, 1, 10), date(2024, 1, 10)))
        );
    }

    #[test]
    fn test_interval_intersection_disjoint() {
        let a = Interval::new(date(2024, 1, 1), date(2024, 1, 31));
        let b = Interval::new(date(2024, 2, 1), date(2024, 2, 29));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_interval_display_and_instants() {
        let period = Interval::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(format!("{}", period), "2024-01-01 to 2024-01-31");

        let instants = period.into_instants();
        assert_eq!(instants.start, Instant::Date(date(2024, 1, 1)));
        assert_eq!(format!("{}", instants), "2024-01-01 to 2024-01-31");
    }
}
