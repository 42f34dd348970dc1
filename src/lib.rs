// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Period Engine
//!
//! Pure functions computing calendar-aligned periods, stepping between them,
//! and splitting arbitrary intervals into aligned pieces.
//!
//! # Layers
//!
//! - **Normalization**: [`Instant`] (date or date-time), [`as_date`],
//!   [`as_datetime`], [`as_time_of_day`], [`as_duration`].
//! - **Boundaries**: `start_of_*` / `end_of_*` for every [`PeriodKind`].
//! - **Stepping**: `*_increment` / `*_decrement` between period starts.
//! - **Ranges & segmentation**: [`period_range`], [`segment`], their named
//!   specializations, and the `align_to_*` helpers returning [`Interval`]s.
//!
//! # Period kinds
//!
//! | Kind | Precision | Bounds |
//! |------|-----------|--------|
//! | day | date-time | 00:00 to 23:59:59.999999 |
//! | broadcast day | date-time | 06:00 to 05:59:59.999999 next day |
//! | week | date | Monday to Sunday |
//! | month | date | 1st to last day |
//! | broadcast month | date | Monday of the week of the 1st to the last Sunday of the month |
//!
//! # Example
//!
//! ```
//! use calperiod::{months_in_range, segment_to_months, start_of_week};
//! use chrono::NaiveDate;
//!
//! let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//!
//! assert_eq!(start_of_week(ymd(2024, 6, 13)), ymd(2024, 6, 10));
//! assert_eq!(months_in_range(ymd(2024, 1, 15), ymd(2024, 3, 10)).count(), 3);
//!
//! let last = segment_to_months(ymd(2024, 1, 1), ymd(2024, 2, 15)).last().unwrap();
//! assert_eq!(last.end, ymd(2024, 2, 15));
//! ```

mod boundary;
mod error;
mod instant;
mod kind;
mod period;
mod range;
mod segment;
mod step;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use boundary::{
    broadcast_day, broadcast_month, end_of_broadcast_day, end_of_broadcast_month, end_of_day,
    end_of_month, end_of_week, start_of_broadcast_day, start_of_broadcast_month, start_of_day,
    start_of_month, start_of_week, BROADCAST_DAY_OFFSET_HOURS,
};
pub use error::Error;
pub use instant::{as_date, as_datetime, as_duration, as_time_of_day, CalendarInstant, Instant};
pub use kind::PeriodKind;
pub use period::{DateInterval, DateTimeInterval, Interval};
pub use range::{
    broadcast_month_labels_in_range, broadcast_months_in_range, dates_in_broadcast_month,
    dates_in_month, dates_in_range, dates_in_week, months_in_range, period_range, weeks_in_range,
    DateRange, DateStep, PeriodRange,
};
pub use segment::{
    align_to_broadcast_days, align_to_broadcast_months, align_to_days, align_to_months,
    align_to_weeks, broadcast_day_range, broadcast_month_range, day_range, month_range, segment,
    segment_to_broadcast_days, segment_to_broadcast_months, segment_to_days, segment_to_months,
    segment_to_weeks, week_range, DateSegments, DateTimeSegments, DateTimeStep, Segments,
};
pub use step::{
    broadcast_day_decrement, broadcast_day_increment, broadcast_month_decrement,
    broadcast_month_increment, day_decrement, day_increment, month_decrement, month_increment,
    week_decrement, week_increment,
};
