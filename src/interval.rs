// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive date intervals.
//!
//! This module provides [`Interval<T>`], a closed `[start, end]` span over any
//! [`CalendarInstant`], plus the containment queries used for disabled-date
//! repair.

use crate::CalendarInstant;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a closed interval between two instants.
///
/// Unlike a half-open span, both endpoints belong to the interval: a disabled
/// date equal to `start` or `end` is inside it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rangepick::Interval;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let interval = Interval::new(day(15), day(10)).ordered();
///
/// assert_eq!(interval.start, day(10));
/// assert!(interval.contains(&day(15)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T: CalendarInstant> Interval<T> {
    /// Creates a new interval. No ordering is enforced.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// `true` when `end` lies strictly before `start`.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Returns the interval with its endpoints swapped when reversed.
    pub fn ordered(self) -> Self {
        if self.is_reversed() {
            Self::new(self.end, self.start)
        } else {
            self
        }
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Every instant of `dates` that lies inside the interval.
    pub fn conflicts(&self, dates: &[T]) -> Vec<T> {
        dates
            .iter()
            .filter(|date| self.contains(date))
            .copied()
            .collect()
    }

    /// Number of calendar days from `start` to `end`.
    pub fn calendar_days(&self) -> i64 {
        self.end.calendar_days_since(&self.start)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
