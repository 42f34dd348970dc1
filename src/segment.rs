// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Splitting intervals into period-aligned pieces.
//!
//! [`segment`] cuts `[from, to]` at every period boundary inside it.  The
//! first piece starts exactly at `from` and the last ends exactly at `to`,
//! so concatenating the pieces gives back the original interval with no gap
//! and no overlap.
//!
//! The `align_to_*` helpers go the other way and widen an interval to the
//! smallest run of whole periods covering it.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::iter::FusedIterator;
use tracing::trace;

use crate::boundary::{
    end_of_broadcast_day, end_of_broadcast_month, end_of_day, end_of_month, end_of_week,
    start_of_broadcast_day, start_of_broadcast_month, start_of_day, start_of_month,
    start_of_week,
};
use crate::instant::{CalendarInstant, Instant};
use crate::period::Interval;
use crate::range::DateStep;
use crate::step::{
    broadcast_day_increment, broadcast_month_increment, month_increment, week_increment,
};

/// Increment function type used by the date-time segmentations.
pub type DateTimeStep = fn(NaiveDateTime) -> NaiveDateTime;

/// Segments at calendar-date precision.
pub type DateSegments = Segments<NaiveDate, DateStep>;

/// Segments at date-time precision.
pub type DateTimeSegments = Segments<NaiveDateTime, DateTimeStep>;

/// Iterator over consecutive, contiguous sub-intervals of `[from, to]`.
///
/// Created by [`segment`] and the `segment_to_*` functions.
pub struct Segments<T, F> {
    cursor: T,
    to: T,
    increment: F,
}

/// Lazily splits `[from, to]` at the period starts produced by `increment`.
///
/// Each segment runs from the current cursor to one resolution step before
/// `increment(cursor)`, truncated to `to`.  `increment` must be strictly
/// increasing.  An inverted interval yields nothing.
///
/// ```
/// use calperiod::{month_increment, segment, Interval};
/// use chrono::NaiveDate;
///
/// let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let parts: Vec<_> = segment(ymd(2024, 1, 1), ymd(2024, 2, 15), month_increment).collect();
/// assert_eq!(
///     parts,
///     [
///         Interval::new(ymd(2024, 1, 1), ymd(2024, 1, 31)),
///         Interval::new(ymd(2024, 2, 1), ymd(2024, 2, 15)),
///     ]
/// );
/// ```
pub fn segment<T, F>(from: T, to: T, increment: F) -> Segments<T, F>
where
    T: CalendarInstant,
    F: FnMut(T) -> T,
{
    trace!(?from, ?to, "segment interval");
    Segments {
        cursor: from,
        to,
        increment,
    }
}

impl<T, F> Iterator for Segments<T, F>
where
    T: CalendarInstant,
    F: FnMut(T) -> T,
{
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Interval<T>> {
        if self.cursor > self.to {
            return None;
        }
        let next = (self.increment)(self.cursor);
        let end = self.to.min(next.sub_duration(T::resolution()));
        let start = std::mem::replace(&mut self.cursor, next);
        Some(Interval::new(start, end))
    }
}

impl<T, F> FusedIterator for Segments<T, F>
where
    T: CalendarInstant,
    F: FnMut(T) -> T,
{
}

// ── date-time segmentations ───────────────────────────────────────────────

// Midnight after `t`.
fn next_midnight(t: NaiveDateTime) -> NaiveDateTime {
    start_of_day(t + TimeDelta::days(1))
}

/// Splits `[from, to]` at every midnight.
///
/// A bare-date `from` stands for its 00:00 and a bare-date `to` for its
/// 23:59:59.999999.
pub fn segment_to_days(from: impl Into<Instant>, to: impl Into<Instant>) -> DateTimeSegments {
    let from = match from.into() {
        Instant::Date(d) => start_of_day(d),
        Instant::DateTime(t) => t,
    };
    let to = match to.into() {
        Instant::Date(d) => end_of_day(d),
        Instant::DateTime(t) => t,
    };
    segment(from, to, next_midnight as DateTimeStep)
}

/// Splits `[from, to]` at every 06:00.
///
/// A bare-date `from` stands for the start of that broadcast day and a
/// bare-date `to` for its end (05:59:59.999999 the next morning).
pub fn segment_to_broadcast_days(
    from: impl Into<Instant>,
    to: impl Into<Instant>,
) -> DateTimeSegments {
    let from = match from.into() {
        Instant::Date(d) => start_of_broadcast_day(d),
        Instant::DateTime(t) => t,
    };
    let to = match to.into() {
        Instant::Date(d) => end_of_broadcast_day(d),
        Instant::DateTime(t) => t,
    };
    let step: DateTimeStep = |t| broadcast_day_increment(t);
    segment(from, to, step)
}

// ── date segmentations ────────────────────────────────────────────────────

/// Splits `[from, to]` at every Monday.
pub fn segment_to_weeks(from: NaiveDate, to: NaiveDate) -> DateSegments {
    segment(from, to, week_increment as DateStep)
}

/// Splits `[from, to]` at every 1st of the month.
pub fn segment_to_months(from: NaiveDate, to: NaiveDate) -> DateSegments {
    segment(from, to, month_increment as DateStep)
}

/// Splits `[from, to]` at every broadcast-month start.
pub fn segment_to_broadcast_months(from: NaiveDate, to: NaiveDate) -> DateSegments {
    segment(from, to, broadcast_month_increment as DateStep)
}

// ── alignment ─────────────────────────────────────────────────────────────

/// Widens `[from, to]` to whole days.
pub fn align_to_days(from: impl Into<Instant>, to: impl Into<Instant>) -> Interval<NaiveDateTime> {
    Interval::new(start_of_day(from), end_of_day(to))
}

/// Widens `[from, to]` to whole broadcast days.
pub fn align_to_broadcast_days(
    from: impl Into<Instant>,
    to: impl Into<Instant>,
) -> Interval<NaiveDateTime> {
    Interval::new(start_of_broadcast_day(from), end_of_broadcast_day(to))
}

/// Widens `[from, to]` to whole weeks.
pub fn align_to_weeks(from: NaiveDate, to: NaiveDate) -> Interval<NaiveDate> {
    Interval::new(start_of_week(from), end_of_week(to))
}

/// Widens `[from, to]` to whole calendar months.
pub fn align_to_months(from: NaiveDate, to: NaiveDate) -> Interval<NaiveDate> {
    Interval::new(start_of_month(from), end_of_month(to))
}

/// Widens `[from, to]` to whole broadcast months.
pub fn align_to_broadcast_months(from: NaiveDate, to: NaiveDate) -> Interval<NaiveDate> {
    Interval::new(start_of_broadcast_month(from), end_of_broadcast_month(to))
}

/// The day containing `t`.
pub fn day_range(t: impl Into<Instant>) -> Interval<NaiveDateTime> {
    let t = t.into();
    align_to_days(t, t)
}

/// The broadcast day containing `t`.
pub fn broadcast_day_range(t: impl Into<Instant>) -> Interval<NaiveDateTime> {
    let t = t.into();
    align_to_broadcast_days(t, t)
}

/// The week containing `d`.
pub fn week_range(d: NaiveDate) -> Interval<NaiveDate> {
    align_to_weeks(d, d)
}

/// The calendar month containing `d`.
pub fn month_range(d: NaiveDate) -> Interval<NaiveDate> {
    align_to_months(d, d)
}

/// The broadcast month containing `d`.
pub fn broadcast_month_range(d: NaiveDate) -> Interval<NaiveDate> {
    align_to_broadcast_months(d, d)
}
