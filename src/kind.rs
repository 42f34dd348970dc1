// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Period kinds selected at runtime.
//!
//! [`PeriodKind`] dispatches to the boundary, stepping, range and
//! segmentation functions of one kind, working on [`Instant`]s so that the
//! precision of a kind does not leak into the caller's types.  The day kinds
//! produce date-time instants; the week and month kinds produce dates.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::*;
use crate::instant::{as_date, as_datetime, Instant};
use crate::period::Interval;
use crate::range::{broadcast_months_in_range, months_in_range, period_range, weeks_in_range};
use crate::segment::{
    align_to_broadcast_days, align_to_broadcast_months, align_to_days, align_to_months,
    align_to_weeks, segment_to_broadcast_days, segment_to_broadcast_months, segment_to_days,
    segment_to_months, segment_to_weeks,
};
use crate::step::*;
use crate::Error;

/// The kinds of calendar period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PeriodKind {
    /// Civil day, 00:00 to 23:59:59.999999.
    Day,
    /// Broadcast day, 06:00 to 05:59:59.999999 the next morning.
    BroadcastDay,
    /// Monday to Sunday.
    Week,
    /// Calendar month.
    Month,
    /// Week-aligned month assigned by the Sunday of each week.
    BroadcastMonth,
}

fn next_midnight(t: NaiveDateTime) -> NaiveDateTime {
    start_of_day(t + TimeDelta::days(1))
}

fn prev_midnight(t: NaiveDateTime) -> NaiveDateTime {
    start_of_day(t - TimeDelta::days(1))
}

impl PeriodKind {
    /// Every kind, shortest first.
    pub const ALL: [PeriodKind; 5] = [
        PeriodKind::Day,
        PeriodKind::BroadcastDay,
        PeriodKind::Week,
        PeriodKind::Month,
        PeriodKind::BroadcastMonth,
    ];

    /// Stable textual name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::BroadcastDay => "broadcast-day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::BroadcastMonth => "broadcast-month",
        }
    }

    /// Returns `true` for the kinds whose bounds carry a time-of-day.
    pub const fn is_time_of_day(self) -> bool {
        matches!(self, PeriodKind::Day | PeriodKind::BroadcastDay)
    }

    /// First instant of the period containing `t`.
    pub fn start_of(self, t: impl Into<Instant>) -> Instant {
        let t = t.into();
        match self {
            PeriodKind::Day => start_of_day(t).into(),
            PeriodKind::BroadcastDay => start_of_broadcast_day(t).into(),
            PeriodKind::Week => start_of_week(as_date(t)).into(),
            PeriodKind::Month => start_of_month(as_date(t)).into(),
            PeriodKind::BroadcastMonth => start_of_broadcast_month(as_date(t)).into(),
        }
    }

    /// Last instant of the period containing `t`.
    pub fn end_of(self, t: impl Into<Instant>) -> Instant {
        let t = t.into();
        match self {
            PeriodKind::Day => end_of_day(t).into(),
            PeriodKind::BroadcastDay => end_of_broadcast_day(t).into(),
            PeriodKind::Week => end_of_week(as_date(t)).into(),
            PeriodKind::Month => end_of_month(as_date(t)).into(),
            PeriodKind::BroadcastMonth => end_of_broadcast_month(as_date(t)).into(),
        }
    }

    /// Start of the period after the one containing `t`.
    pub fn increment(self, t: impl Into<Instant>) -> Instant {
        let t = t.into();
        match self {
            PeriodKind::Day => next_midnight(as_datetime(t)).into(),
            PeriodKind::BroadcastDay => broadcast_day_increment(t).into(),
            PeriodKind::Week => week_increment(as_date(t)).into(),
            PeriodKind::Month => month_increment(as_date(t)).into(),
            PeriodKind::BroadcastMonth => broadcast_month_increment(as_date(t)).into(),
        }
    }

    /// Start of the period before the one containing `t`.
    pub fn decrement(self, t: impl Into<Instant>) -> Instant {
        let t = t.into();
        match self {
            PeriodKind::Day => prev_midnight(start_of_day(t)).into(),
            PeriodKind::BroadcastDay => broadcast_day_decrement(t).into(),
            PeriodKind::Week => week_decrement(as_date(t)).into(),
            PeriodKind::Month => month_decrement(as_date(t)).into(),
            PeriodKind::BroadcastMonth => broadcast_month_decrement(as_date(t)).into(),
        }
    }

    /// Smallest run of whole periods covering `[from, to]`.
    pub fn align(self, from: impl Into<Instant>, to: impl Into<Instant>) -> Interval<Instant> {
        let (from, to) = (from.into(), to.into());
        match self {
            PeriodKind::Day => align_to_days(from, to).into_instants(),
            PeriodKind::BroadcastDay => align_to_broadcast_days(from, to).into_instants(),
            PeriodKind::Week => align_to_weeks(as_date(from), as_date(to)).into_instants(),
            PeriodKind::Month => align_to_months(as_date(from), as_date(to)).into_instants(),
            PeriodKind::BroadcastMonth => {
                align_to_broadcast_months(as_date(from), as_date(to)).into_instants()
            }
        }
    }

    /// The single period containing `t`.
    pub fn range(self, t: impl Into<Instant>) -> Interval<Instant> {
        let t = t.into();
        self.align(t, t)
    }

    /// Starts of the periods overlapping `[from, to]`.
    pub fn starts_in_range(
        self,
        from: impl Into<Instant>,
        to: impl Into<Instant>,
    ) -> Box<dyn Iterator<Item = Instant>> {
        let (from, to) = (from.into(), to.into());
        match self {
            PeriodKind::Day => Box::new(
                period_range(start_of_day(from), as_datetime(to), next_midnight).map(Instant::from),
            ),
            PeriodKind::BroadcastDay => Box::new(
                period_range(start_of_broadcast_day(from), as_datetime(to), |t: NaiveDateTime| {
                    broadcast_day_increment(t)
                })
                .map(Instant::from),
            ),
            PeriodKind::Week => {
                Box::new(weeks_in_range(as_date(from), as_date(to)).map(Instant::from))
            }
            PeriodKind::Month => {
                Box::new(months_in_range(as_date(from), as_date(to)).map(Instant::from))
            }
            PeriodKind::BroadcastMonth => {
                Box::new(broadcast_months_in_range(as_date(from), as_date(to)).map(Instant::from))
            }
        }
    }

    /// Splits `[from, to]` into pieces aligned to this kind.
    ///
    /// The week and month kinds narrow both bounds to dates first.
    pub fn segment(
        self,
        from: impl Into<Instant>,
        to: impl Into<Instant>,
    ) -> Box<dyn Iterator<Item = Interval<Instant>>> {
        let (from, to) = (from.into(), to.into());
        let date_bounds = |from: Instant, to: Instant| -> (NaiveDate, NaiveDate) {
            (as_date(from), as_date(to))
        };
        match self {
            PeriodKind::Day => Box::new(segment_to_days(from, to).map(Interval::into_instants)),
            PeriodKind::BroadcastDay => {
                Box::new(segment_to_broadcast_days(from, to).map(Interval::into_instants))
            }
            PeriodKind::Week => {
                let (from, to) = date_bounds(from, to);
                Box::new(segment_to_weeks(from, to).map(Interval::into_instants))
            }
            PeriodKind::Month => {
                let (from, to) = date_bounds(from, to);
                Box::new(segment_to_months(from, to).map(Interval::into_instants))
            }
            PeriodKind::BroadcastMonth => {
                let (from, to) = date_bounds(from, to);
                Box::new(segment_to_broadcast_months(from, to).map(Interval::into_instants))
            }
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PeriodKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        PeriodKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::UnknownPeriodKind {
                input: s.to_string(),
            })
    }
}
