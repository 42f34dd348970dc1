// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Stepping between consecutive period starts.
//!
//! Every `*_increment` / `*_decrement` returns the start of the next or
//! previous period of its kind.  The result is always a valid period start,
//! whatever the argument, so these functions double as the `increment`
//! argument of [`period_range`](crate::period_range) and
//! [`segment`](crate::segment).
//!
//! All functions are total over chrono's representable range and panic on
//! overflow past it, like chrono's own arithmetic operators.

use chrono::{Months, NaiveDate, NaiveDateTime, TimeDelta};

use crate::boundary::{
    broadcast_month, start_of_broadcast_day, start_of_broadcast_month, start_of_month,
    start_of_week,
};
use crate::instant::{as_datetime, Instant};

/// The following calendar day.
#[inline]
pub fn day_increment(d: NaiveDate) -> NaiveDate {
    d + TimeDelta::days(1)
}

/// The preceding calendar day.
#[inline]
pub fn day_decrement(d: NaiveDate) -> NaiveDate {
    d - TimeDelta::days(1)
}

/// Start (06:00) of the broadcast day after the one containing `t`.
pub fn broadcast_day_increment(t: impl Into<Instant>) -> NaiveDateTime {
    start_of_broadcast_day(step_instant(t.into(), TimeDelta::days(1)))
}

/// Start (06:00) of the broadcast day before the one containing `t`.
pub fn broadcast_day_decrement(t: impl Into<Instant>) -> NaiveDateTime {
    start_of_broadcast_day(step_instant(t.into(), TimeDelta::days(-1)))
}

// Keeps the precision of `t`, so a bare date is still read as a broadcast day.
fn step_instant(t: Instant, delta: TimeDelta) -> Instant {
    match t {
        Instant::Date(d) => Instant::Date(d + delta),
        Instant::DateTime(_) => Instant::DateTime(as_datetime(t) + delta),
    }
}

/// Monday of the week after the one containing `d`.
pub fn week_increment(d: NaiveDate) -> NaiveDate {
    start_of_week(d + TimeDelta::days(7))
}

/// Monday of the week before the one containing `d`.
pub fn week_decrement(d: NaiveDate) -> NaiveDate {
    start_of_week(d - TimeDelta::days(7))
}

/// The 1st of the month after the one containing `d`.
///
/// ```
/// use calperiod::month_increment;
/// use chrono::NaiveDate;
///
/// let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(month_increment(jan31), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// ```
pub fn month_increment(d: NaiveDate) -> NaiveDate {
    start_of_month(d) + Months::new(1)
}

/// The 1st of the month before the one containing `d`.
pub fn month_decrement(d: NaiveDate) -> NaiveDate {
    start_of_month(d) - Months::new(1)
}

/// Start of the broadcast month after the one containing `d`.
pub fn broadcast_month_increment(d: NaiveDate) -> NaiveDate {
    start_of_broadcast_month(month_increment(broadcast_month(d)))
}

/// Start of the broadcast month before the one containing `d`.
pub fn broadcast_month_decrement(d: NaiveDate) -> NaiveDate {
    start_of_broadcast_month(month_decrement(broadcast_month(d)))
}
