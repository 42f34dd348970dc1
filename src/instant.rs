// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar instants and precision normalization.
//!
//! An [`Instant`] is either a bare calendar date or a date with a
//! time-of-day.  Period functions that work at either precision take
//! `impl Into<Instant>`, so callers can pass a [`NaiveDate`], a
//! [`NaiveDateTime`] or an [`Instant`] directly; the helpers in this module
//! widen or narrow between the two explicitly.
//!
//! [`CalendarInstant`] is the precision-specific counterpart used by the
//! generic range and segmentation machinery: it knows the smallest step
//! (*resolution*) at its precision, which is what separates the end of one
//! period from the start of the next.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time at calendar-date or date-time precision.
///
/// Instants order by the point in time they denote, a bare date standing for
/// its midnight.  A date and the midnight date-time of the same day compare
/// by variant, the date first, so that ordering stays consistent with
/// equality.
///
/// # Examples
///
/// ```
/// use calperiod::Instant;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// let date: Instant = d.into();
/// let noon: Instant = d.and_hms_opt(12, 0, 0).unwrap().into();
///
/// assert!(date < noon);
/// assert_eq!(noon.to_date(), d);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Instant {
    /// A calendar date without time-of-day.
    Date(NaiveDate),
    /// A calendar date with time-of-day.
    DateTime(NaiveDateTime),
}

impl Instant {
    /// Returns `true` if this instant carries no time-of-day.
    #[inline]
    pub const fn is_date_only(&self) -> bool {
        matches!(self, Instant::Date(_))
    }

    /// The calendar date, dropping any time-of-day.
    #[inline]
    pub fn to_date(self) -> NaiveDate {
        match self {
            Instant::Date(d) => d,
            Instant::DateTime(t) => t.date(),
        }
    }

    /// The date-time, widening a bare date to its midnight.
    #[inline]
    pub fn to_datetime(self) -> NaiveDateTime {
        match self {
            Instant::Date(d) => d.and_time(NaiveTime::MIN),
            Instant::DateTime(t) => t,
        }
    }

    fn precision_rank(&self) -> u8 {
        match self {
            Instant::Date(_) => 0,
            Instant::DateTime(_) => 1,
        }
    }
}

impl From<NaiveDate> for Instant {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Instant::Date(date)
    }
}

impl From<NaiveDateTime> for Instant {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Instant::DateTime(datetime)
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime()
            .cmp(&other.to_datetime())
            .then_with(|| self.precision_rank().cmp(&other.precision_rank()))
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Instant::DateTime(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl FromStr for Instant {
    type Err = Error;

    /// Parses `YYYY-MM-DD` as a date, and `YYYY-MM-DDTHH:MM:SS[.f]` (or with a
    /// space instead of `T`) as a date-time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Instant::Date(date));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Instant::DateTime)
            .ok_or_else(|| Error::InvalidInstant {
                input: s.to_string(),
            })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════════

/// Widens `x` to a date-time; bare dates become their midnight.
#[inline]
pub fn as_datetime(x: impl Into<Instant>) -> NaiveDateTime {
    x.into().to_datetime()
}

/// Narrows `x` to its calendar date.
#[inline]
pub fn as_date(x: impl Into<Instant>) -> NaiveDate {
    x.into().to_date()
}

/// Converts a duration since midnight into the wall-clock time it reaches.
///
/// Durations outside `[0, 24h)` wrap around the day.
pub fn as_time_of_day(since_midnight: TimeDelta) -> NaiveTime {
    NaiveTime::MIN.overflowing_add_signed(since_midnight).0
}

/// Converts a wall-clock time into the duration elapsed since midnight.
#[inline]
pub fn as_duration(time: NaiveTime) -> TimeDelta {
    time - NaiveTime::MIN
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// A fixed-precision point in time usable with [`Interval`](crate::Interval)
/// and the generic range functions.
pub trait CalendarInstant: Copy + Ord + fmt::Debug + Into<Instant> {
    /// Smallest step at this precision: one day for dates, one microsecond
    /// for date-times.
    fn resolution() -> TimeDelta;

    /// Compute the difference `self - other`.
    fn difference(&self, other: &Self) -> TimeDelta;

    /// Add a duration to this instant.
    fn add_duration(&self, duration: TimeDelta) -> Self;

    /// Subtract a duration from this instant.
    fn sub_duration(&self, duration: TimeDelta) -> Self;
}

impl CalendarInstant for NaiveDate {
    #[inline]
    fn resolution() -> TimeDelta {
        TimeDelta::days(1)
    }

    #[inline]
    fn difference(&self, other: &Self) -> TimeDelta {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: TimeDelta) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: TimeDelta) -> Self {
        *self - duration
    }
}

impl CalendarInstant for NaiveDateTime {
    #[inline]
    fn resolution() -> TimeDelta {
        TimeDelta::microseconds(1)
    }

    #[inline]
    fn difference(&self, other: &Self) -> TimeDelta {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: TimeDelta) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: TimeDelta) -> Self {
        *self - duration
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_as_datetime_widens_dates_to_midnight() {
        assert_eq!(
            as_datetime(date(2024, 6, 13)),
            datetime(2024, 6, 13, 0, 0, 0)
        );
        let t = datetime(2024, 6, 13, 7, 30, 0);
        assert_eq!(as_datetime(t), t);
    }

    #[test]
    fn test_as_date_narrows_datetimes() {
        assert_eq!(as_date(datetime(2024, 6, 13, 23, 59, 59)), date(2024, 6, 13));
        assert_eq!(as_date(date(2024, 2, 29)), date(2024, 2, 29));
    }

    #[test]
    fn test_time_of_day_duration_roundtrip_preserves_fields() {
        let t = NaiveTime::from_hms_micro_opt(5, 59, 59, 999_999).unwrap();
        let d = as_duration(t);
        assert_eq!(
            d,
            TimeDelta::hours(5)
                + TimeDelta::minutes(59)
                + TimeDelta::seconds(59)
                + TimeDelta::microseconds(999_999)
        );
        assert_eq!(as_time_of_day(d), t);
    }

    #[test]
    fn test_as_time_of_day_wraps_past_midnight() {
        assert_eq!(
            as_time_of_day(TimeDelta::hours(30)),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(
            as_time_of_day(TimeDelta::hours(-1)),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_instant_ordering_mixed_precision() {
        let d = Instant::from(date(2024, 6, 13));
        let midnight = Instant::from(datetime(2024, 6, 13, 0, 0, 0));
        let late = Instant::from(datetime(2024, 6, 12, 23, 0, 0));

        assert!(late < d);
        assert!(d < midnight);
        assert_ne!(d, midnight);
        assert_eq!(d.cmp(&d), Ordering::Equal);
    }

    #[test]
    fn test_instant_parse_and_display() {
        let d: Instant = "2024-06-13".parse().unwrap();
        assert_eq!(d, Instant::Date(date(2024, 6, 13)));
        assert_eq!(d.to_string(), "2024-06-13");

        let t: Instant = "2024-06-13T03:00:00".parse().unwrap();
        assert_eq!(t, Instant::DateTime(datetime(2024, 6, 13, 3, 0, 0)));
        assert_eq!(t.to_string(), "2024-06-13T03:00:00");

        let spaced: Instant = "2024-06-13 03:00:00.25".parse().unwrap();
        assert_eq!(spaced.to_string(), "2024-06-13T03:00:00.250");
    }

    #[test]
    fn test_instant_parse_rejects_invalid_dates() {
        let err = "2024-02-30".parse::<Instant>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInstant {
                input: "2024-02-30".into()
            }
        );
        assert!("yesterday".parse::<Instant>().is_err());
    }

    #[test]
    fn test_calendar_instant_resolution() {
        assert_eq!(NaiveDate::resolution(), TimeDelta::days(1));
        assert_eq!(NaiveDateTime::resolution(), TimeDelta::microseconds(1));

        let a = date(2024, 3, 1);
        let b = date(2024, 2, 1);
        assert_eq!(a.difference(&b), TimeDelta::days(29));
        assert_eq!(b.add_duration(TimeDelta::days(29)), a);
        assert_eq!(a.sub_duration(TimeDelta::days(29)), b);
    }
}
