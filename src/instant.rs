// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-aware instants.
//!
//! [`CalendarInstant`] is the single abstraction the selection engine and the
//! time evaluator are written against.  It exposes exactly the calendar
//! operations a range picker needs: whole-day arithmetic, calendar-day
//! differences, start-of-day truncation and hour/minute replacement.
//!
//! Implementations are provided for [`NaiveDateTime`] (wall-clock values, the
//! usual choice for a UI picker) and [`DateTime<Utc>`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// CalendarInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for date/time values that can be picked on a calendar.
///
/// Day arithmetic saturates at the representable bounds of the underlying
/// type instead of panicking, so callers can feed arbitrary picks.
pub trait CalendarInstant: Copy + Ord + Timelike + fmt::Debug + Sized {
    /// Latest representable instant.
    const MAX: Self;
    /// Earliest representable instant.
    const MIN: Self;

    /// The calendar date this instant falls on.
    fn calendar_date(&self) -> NaiveDate;

    /// Rebuild an instant on the same "axis" from a naive wall-clock value.
    fn from_naive(naive: NaiveDateTime) -> Self;

    /// Shift by a whole number of days, keeping the time of day.
    fn add_days(self, days: i64) -> Self;

    /// Midnight of the calendar day this instant falls on.
    #[inline]
    fn start_of_day(&self) -> Self {
        Self::from_naive(self.calendar_date().and_time(NaiveTime::MIN))
    }

    /// Number of calendar-day boundaries between `other` and `self`.
    ///
    /// Positive when `self` lies on a later day.  Times of day are ignored, so
    /// `23:59` and `00:01` of the following day are one day apart.
    #[inline]
    fn calendar_days_since(&self, other: &Self) -> i64 {
        (self.calendar_date() - other.calendar_date()).num_days()
    }

    /// Copy hour and minute of `source` onto `self`.
    ///
    /// Seconds and sub-second fields of `self` are kept.
    fn with_time_of(self, source: &Self) -> Self {
        self.with_hour(source.hour())
            .and_then(|t| t.with_minute(source.minute()))
            .unwrap_or(self)
    }
}

/// `value` moved by `days`, or the bound in the direction of travel on overflow.
#[inline]
fn saturating_shift<T: CalendarInstant>(
    value: T,
    days: i64,
    add: impl FnOnce(T, TimeDelta) -> Option<T>,
) -> T {
    TimeDelta::try_days(days)
        .and_then(|delta| add(value, delta))
        .unwrap_or(if days >= 0 { T::MAX } else { T::MIN })
}

impl CalendarInstant for NaiveDateTime {
    const MAX: Self = NaiveDateTime::MAX;
    const MIN: Self = NaiveDateTime::MIN;

    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    #[inline]
    fn from_naive(naive: NaiveDateTime) -> Self {
        naive
    }

    fn add_days(self, days: i64) -> Self {
        saturating_shift(self, days, |value: Self, delta| value.checked_add_signed(delta))
    }
}

impl CalendarInstant for DateTime<Utc> {
    const MAX: Self = DateTime::<Utc>::MAX_UTC;
    const MIN: Self = DateTime::<Utc>::MIN_UTC;

    #[inline]
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    #[inline]
    fn from_naive(naive: NaiveDateTime) -> Self {
        naive.and_utc()
    }

    fn add_days(self, days: i64) -> Self {
        saturating_shift(self, days, |value: Self, delta| value.checked_add_signed(delta))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
