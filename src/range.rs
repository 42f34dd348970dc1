// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy sequences of period starts.
//!
//! [`period_range`] walks from a start value with a caller-supplied
//! increment until the bound is passed.  The named specializations snap the
//! starting point to the enclosing period first, so e.g. [`months_in_range`]
//! always yields whole calendar months.
//!
//! Ranges are single-pass: each value is computed when the consumer asks for
//! it, and iterating again means calling the constructor again.  An inverted
//! range (`to < from`) is simply empty.

use chrono::NaiveDate;
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

use crate::boundary::{
    broadcast_month, end_of_broadcast_month, end_of_month, end_of_week, start_of_broadcast_month,
    start_of_month, start_of_week,
};
use crate::step::{broadcast_month_increment, day_increment, month_increment, week_increment};

/// Increment function type used by the named date ranges.
pub type DateStep = fn(NaiveDate) -> NaiveDate;

/// Range of period starts at calendar-date precision.
pub type DateRange = PeriodRange<NaiveDate, DateStep>;

enum Cursor<T> {
    Start(T),
    After(T),
    Done,
}

/// Iterator over `from, increment(from), increment(increment(from)), …`
/// up to and including the last value `<= to`.
///
/// Created by [`period_range`] and the `*_in_range` functions.
pub struct PeriodRange<T, F> {
    cursor: Cursor<T>,
    to: T,
    increment: F,
}

/// Lazily yields period starts from `from` while they stay `<= to`.
///
/// `increment` must map a period start to a strictly later one; a function
/// that fails to advance makes the range infinite.  The increment is only
/// called when the next element is requested, so stopping early costs
/// nothing.
///
/// ```
/// use calperiod::{month_increment, period_range};
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let months: Vec<_> = period_range(from, to, month_increment).collect();
/// assert_eq!(months.len(), 3);
/// ```
pub fn period_range<T, F>(from: T, to: T, increment: F) -> PeriodRange<T, F>
where
    T: Copy + PartialOrd + fmt::Debug,
    F: FnMut(T) -> T,
{
    trace!(?from, ?to, "period range");
    PeriodRange {
        cursor: Cursor::Start(from),
        to,
        increment,
    }
}

impl<T, F> Iterator for PeriodRange<T, F>
where
    T: Copy + PartialOrd,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let candidate = match self.cursor {
            Cursor::Start(t) => t,
            Cursor::After(prev) => (self.increment)(prev),
            Cursor::Done => return None,
        };
        if candidate <= self.to {
            self.cursor = Cursor::After(candidate);
            Some(candidate)
        } else {
            self.cursor = Cursor::Done;
            None
        }
    }
}

impl<T, F> FusedIterator for PeriodRange<T, F>
where
    T: Copy + PartialOrd,
    F: FnMut(T) -> T,
{
}

// ── named ranges ──────────────────────────────────────────────────────────

/// Every calendar date in `[from, to]`.
pub fn dates_in_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    period_range(from, to, day_increment as DateStep)
}

/// Mondays of the weeks overlapping `[from, to]`.
pub fn weeks_in_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    period_range(start_of_week(from), to, week_increment as DateStep)
}

/// 1st days of the calendar months overlapping `[from, to]`.
///
/// ```
/// use calperiod::months_in_range;
/// use chrono::NaiveDate;
///
/// let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let months: Vec<_> = months_in_range(ymd(2024, 1, 15), ymd(2024, 3, 10)).collect();
/// assert_eq!(months, [ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 3, 1)]);
/// ```
pub fn months_in_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    period_range(start_of_month(from), to, month_increment as DateStep)
}

/// Start dates of the broadcast months overlapping `[from, to]`.
pub fn broadcast_months_in_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    period_range(
        start_of_broadcast_month(from),
        to,
        broadcast_month_increment as DateStep,
    )
}

/// Calendar-month labels (as 1st days) of the broadcast months overlapping
/// `[from, to]`.
pub fn broadcast_month_labels_in_range(
    from: NaiveDate,
    to: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    broadcast_months_in_range(from, to).map(broadcast_month)
}

/// Every date of the week containing `d`, Monday first.
pub fn dates_in_week(d: NaiveDate) -> DateRange {
    dates_in_range(start_of_week(d), end_of_week(d))
}

/// Every date of the calendar month containing `d`.
pub fn dates_in_month(d: NaiveDate) -> DateRange {
    dates_in_range(start_of_month(d), end_of_month(d))
}

/// Every date of the broadcast month containing `d`.
pub fn dates_in_broadcast_month(d: NaiveDate) -> DateRange {
    dates_in_range(start_of_broadcast_month(d), end_of_broadcast_month(d))
}
