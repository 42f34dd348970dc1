// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Period boundary functions.
//!
//! Each `start_of_*` / `end_of_*` pair returns the first and last instant of
//! the period enclosing its argument.  Both bounds are inclusive: the end of
//! a period is one resolution step (a day, or a microsecond for the day
//! kinds) before the start of the next one.
//!
//! | Kind | Precision | Starts on |
//! |------|-----------|-----------|
//! | day | date-time | 00:00 |
//! | broadcast day | date-time | 06:00 |
//! | week | date | Monday |
//! | month | date | the 1st |
//! | broadcast month | date | Monday of the week holding the 1st |

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};

use crate::instant::{as_date, as_datetime, as_duration, as_time_of_day, Instant};
use crate::step::broadcast_month_increment;

/// Hour of the civil day at which a broadcast day begins.
pub const BROADCAST_DAY_OFFSET_HOURS: i64 = 6;

#[inline]
pub(crate) fn broadcast_day_offset() -> TimeDelta {
    TimeDelta::hours(BROADCAST_DAY_OFFSET_HOURS)
}

// ── days ──────────────────────────────────────────────────────────────────

/// Midnight at the start of the day containing `t`.
pub fn start_of_day(t: impl Into<Instant>) -> NaiveDateTime {
    as_datetime(as_date(t))
}

/// Last microsecond of the day containing `t`.
pub fn end_of_day(t: impl Into<Instant>) -> NaiveDateTime {
    start_of_day(t) + TimeDelta::days(1) - TimeDelta::microseconds(1)
}

// ── broadcast days ────────────────────────────────────────────────────────

/// The broadcast day `t` belongs to, named by its calendar date.
///
/// A bare date already names a broadcast day and is returned unchanged; a
/// date-time before 06:00 belongs to the previous day's broadcast day.
///
/// ```
/// use calperiod::broadcast_day;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
/// assert_eq!(broadcast_day(d.and_hms_opt(3, 0, 0).unwrap()), d.pred_opt().unwrap());
/// assert_eq!(broadcast_day(d.and_hms_opt(7, 0, 0).unwrap()), d);
/// assert_eq!(broadcast_day(d), d);
/// ```
pub fn broadcast_day(t: impl Into<Instant>) -> NaiveDate {
    match t.into() {
        Instant::Date(d) => d,
        Instant::DateTime(t) if as_duration(t.time()) < broadcast_day_offset() => {
            t.date() - TimeDelta::days(1)
        }
        Instant::DateTime(t) => t.date(),
    }
}

/// 06:00 on the broadcast day containing `t`.
pub fn start_of_broadcast_day(t: impl Into<Instant>) -> NaiveDateTime {
    broadcast_day(t).and_time(as_time_of_day(broadcast_day_offset()))
}

/// 05:59:59.999999 on the calendar day after the broadcast day containing `t`.
pub fn end_of_broadcast_day(t: impl Into<Instant>) -> NaiveDateTime {
    let last = as_time_of_day(broadcast_day_offset() - TimeDelta::microseconds(1));
    (broadcast_day(t) + TimeDelta::days(1)).and_time(last)
}

// ── weeks ─────────────────────────────────────────────────────────────────

#[inline]
fn weekday_index(d: NaiveDate) -> i64 {
    i64::from(d.weekday().num_days_from_monday())
}

/// Monday of the week containing `d`.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - TimeDelta::days(weekday_index(d))
}

/// Sunday of the week containing `d`.
pub fn end_of_week(d: NaiveDate) -> NaiveDate {
    d + TimeDelta::days(6 - weekday_index(d))
}

// ── months ────────────────────────────────────────────────────────────────

/// First day of the calendar month containing `d`.
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d - TimeDelta::days(i64::from(d.day0()))
}

/// Last day of the calendar month containing `d`.
pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    start_of_month(d) + Months::new(1) - TimeDelta::days(1)
}

// ── broadcast months ──────────────────────────────────────────────────────

/// The calendar month a broadcast week is assigned to, as its 1st day.
///
/// A week belongs to the month holding its Sunday.
pub fn broadcast_month(d: NaiveDate) -> NaiveDate {
    start_of_month(end_of_week(d))
}

/// First day (a Monday) of the broadcast month containing `d`.
pub fn start_of_broadcast_month(d: NaiveDate) -> NaiveDate {
    start_of_week(start_of_month(broadcast_month(d)))
}

/// Last day (a Sunday) of the broadcast month containing `d`.
pub fn end_of_broadcast_month(d: NaiveDate) -> NaiveDate {
    broadcast_month_increment(d) - TimeDelta::days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, mi, s).unwrap()
    }

    fn last_micro(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_micro_opt(h, 59, 59, 999_999).unwrap()
    }

    #[test]
    fn test_day_bounds() {
        let t = datetime(2024, 6, 13, 15, 42, 7);
        assert_eq!(start_of_day(t), datetime(2024, 6, 13, 0, 0, 0));
        assert_eq!(end_of_day(t), last_micro(2024, 6, 13, 23));
        assert_eq!(start_of_day(date(2024, 6, 13)), datetime(2024, 6, 13, 0, 0, 0));
        assert_eq!(end_of_day(date(2024, 12, 31)), last_micro(2024, 12, 31, 23));
    }

    #[test]
    fn test_broadcast_day_rolls_back_before_six() {
        assert_eq!(broadcast_day(datetime(2024, 6, 13, 3, 0, 0)), date(2024, 6, 12));
        assert_eq!(broadcast_day(datetime(2024, 6, 13, 7, 0, 0)), date(2024, 6, 13));
        assert_eq!(broadcast_day(datetime(2024, 6, 13, 6, 0, 0)), date(2024, 6, 13));
        assert_eq!(broadcast_day(last_micro(2024, 6, 13, 5)), date(2024, 6, 12));
        assert_eq!(broadcast_day(datetime(2024, 1, 1, 0, 0, 0)), date(2023, 12, 31));
    }

    #[test]
    fn test_broadcast_day_is_identity_on_dates() {
        // The midnight date-time rolls back, the bare date does not.
        assert_eq!(broadcast_day(date(2024, 6, 13)), date(2024, 6, 13));
        assert_eq!(broadcast_day(datetime(2024, 6, 13, 0, 0, 0)), date(2024, 6, 12));
    }

    #[test]
    fn test_broadcast_day_bounds() {
        let t = datetime(2024, 6, 13, 3, 0, 0);
        assert_eq!(start_of_broadcast_day(t), datetime(2024, 6, 12, 6, 0, 0));
        assert_eq!(end_of_broadcast_day(t), last_micro(2024, 6, 13, 5));

        let d = date(2024, 6, 13);
        assert_eq!(start_of_broadcast_day(d), datetime(2024, 6, 13, 6, 0, 0));
        assert_eq!(end_of_broadcast_day(d), last_micro(2024, 6, 14, 5));
    }

    #[test]
    fn test_week_bounds() {
        assert_eq!(start_of_week(date(2024, 6, 13)), date(2024, 6, 10));
        assert_eq!(end_of_week(date(2024, 6, 13)), date(2024, 6, 16));
        assert_eq!(start_of_week(date(2024, 6, 10)), date(2024, 6, 10));
        assert_eq!(end_of_week(date(2024, 6, 16)), date(2024, 6, 16));
        // across a year boundary
        assert_eq!(start_of_week(date(2025, 1, 1)), date(2024, 12, 30));
        assert_eq!(end_of_week(date(2024, 12, 30)), date(2025, 1, 5));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(start_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(end_of_month(date(2024, 12, 31)), date(2024, 12, 31));
        assert_eq!(end_of_month(date(2024, 4, 30)), date(2024, 4, 30));
    }

    #[test]
    fn test_broadcast_month_follows_the_sunday() {
        // 2024-07-01 is a Monday; the week of 2024-06-30 (Sunday) stays in June.
        assert_eq!(broadcast_month(date(2024, 6, 30)), date(2024, 6, 1));
        assert_eq!(broadcast_month(date(2024, 7, 1)), date(2024, 7, 1));
        // 2024-09-01 is a Sunday, so Aug 26..Sep 1 belongs to September.
        assert_eq!(broadcast_month(date(2024, 8, 26)), date(2024, 9, 1));
        assert_eq!(broadcast_month(date(2024, 8, 25)), date(2024, 8, 1));
    }

    #[test]
    fn test_broadcast_month_bounds() {
        // Broadcast June 2024: Mon 2024-05-27 .. Sun 2024-06-30.
        let d = date(2024, 6, 13);
        assert_eq!(start_of_broadcast_month(d), date(2024, 5, 27));
        assert_eq!(end_of_broadcast_month(d), date(2024, 6, 30));

        // Broadcast September 2024 starts on Mon 2024-08-26 and runs 5 weeks.
        let d = date(2024, 8, 28);
        assert_eq!(start_of_broadcast_month(d), date(2024, 8, 26));
        assert_eq!(end_of_broadcast_month(d), date(2024, 9, 29));
    }

    #[test]
    fn test_broadcast_month_starts_on_monday_ends_on_sunday() {
        let mut d = date(2023, 1, 1);
        while d <= date(2025, 12, 31) {
            assert_eq!(start_of_broadcast_month(d).weekday(), Weekday::Mon);
            assert_eq!(end_of_broadcast_month(d).weekday(), Weekday::Sun);
            let len = (end_of_broadcast_month(d) - start_of_broadcast_month(d)).num_days() + 1;
            assert!(len == 28 || len == 35, "unexpected length {len} at {d}");
            d += TimeDelta::days(1);
        }
    }
}
