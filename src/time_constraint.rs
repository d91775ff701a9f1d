// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day constraints for the hour/minute wheels.
//!
//! Bounds are expressed as a [`TimeBound`]: either a full instant
//! ([`TimeBound::Absolute`]) or a wall-clock offset from midnight
//! ([`TimeBound::ClockOffset`]).  Only absolute bounds restrict the
//! datetime-level checks; a bare clock offset carries no calendar day and is
//! treated as non-restrictive there.

use crate::{CalendarInstant, RangePickError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ═══════════════════════════════════════════════════════════════════════════
// TimeUnit
// ═══════════════════════════════════════════════════════════════════════════

/// Which wheel a candidate value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeUnit {
    Hour,
    Minute,
}

impl TimeUnit {
    /// Number of slots on this unit's wheel.
    pub const fn slots(self) -> u32 {
        match self {
            TimeUnit::Hour => 24,
            TimeUnit::Minute => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
        }
    }

    /// Validate `value` against the wheel size.
    pub fn check(self, value: u32) -> Result<u32, RangePickError> {
        if value < self.slots() {
            Ok(value)
        } else {
            Err(RangePickError::TimeValueOutOfRange {
                unit: self.name(),
                value,
            })
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = RangePickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hours" | "h" => Ok(TimeUnit::Hour),
            "minute" | "minutes" | "m" | "min" => Ok(TimeUnit::Minute),
            _ => Err(RangePickError::UnknownTimeUnit(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeBound
// ═══════════════════════════════════════════════════════════════════════════

/// Lower or upper limit for selectable times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeBound<T> {
    /// A full instant: only its exact position on the time line matters.
    Absolute(T),
    /// Minutes after midnight.  Kept for display; never restricts a pick.
    ClockOffset(u32),
}

// Offsets are validated on the way in, the same way `TimeBound::clock` does.
#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for TimeBound<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "snake_case")]
        enum Raw<I> {
            Absolute(I),
            ClockOffset(u32),
        }

        match Raw::<T>::deserialize(deserializer)? {
            Raw::Absolute(instant) => Ok(TimeBound::Absolute(instant)),
            Raw::ClockOffset(minutes) if minutes < MINUTES_PER_DAY => {
                Ok(TimeBound::ClockOffset(minutes))
            }
            Raw::ClockOffset(minutes) => Err(serde::de::Error::custom(
                RangePickError::ClockOffsetOutOfRange(minutes),
            )),
        }
    }
}

impl<T: CalendarInstant> TimeBound<T> {
    /// A clock-offset bound, rejecting offsets past the end of the day.
    pub fn clock(minutes_from_midnight: u32) -> Result<Self, RangePickError> {
        if minutes_from_midnight < MINUTES_PER_DAY {
            Ok(TimeBound::ClockOffset(minutes_from_midnight))
        } else {
            Err(RangePickError::ClockOffsetOutOfRange(minutes_from_midnight))
        }
    }

    /// A clock-offset bound at `hour:minute`.
    pub fn at(hour: u32, minute: u32) -> Result<Self, RangePickError> {
        let hour = TimeUnit::Hour.check(hour)?;
        let minute = TimeUnit::Minute.check(minute)?;
        Self::clock(hour * 60 + minute)
    }

    /// The instant of an absolute bound; `None` for a clock offset.
    pub fn absolute(&self) -> Option<T> {
        match *self {
            TimeBound::Absolute(instant) => Some(instant),
            TimeBound::ClockOffset(_) => None,
        }
    }

    pub fn clock_offset(&self) -> Option<u32> {
        match *self {
            TimeBound::Absolute(_) => None,
            TimeBound::ClockOffset(minutes) => Some(minutes),
        }
    }

    /// Whether `instant` lies strictly before this bound.
    pub fn is_after(&self, instant: &T) -> bool {
        self.absolute().is_some_and(|bound| *instant < bound)
    }

    /// Whether `instant` lies strictly after this bound.
    pub fn is_before(&self, instant: &T) -> bool {
        self.absolute().is_some_and(|bound| *instant > bound)
    }
}

/// Whether `instant` falls strictly outside `[min, max]`.
fn out_of_bounds<T: CalendarInstant>(
    instant: &T,
    min: Option<&TimeBound<T>>,
    max: Option<&TimeBound<T>>,
) -> bool {
    min.is_some_and(|bound| bound.is_after(instant))
        || max.is_some_and(|bound| bound.is_before(instant))
}

// ═══════════════════════════════════════════════════════════════════════════
// Evaluator
// ═══════════════════════════════════════════════════════════════════════════

/// Whether `candidate` is unavailable on the `unit` wheel for `date`.
///
/// The tested instant is midnight of `date` with the hour set to `candidate`
/// (hour wheel), or with `date`'s own hour and the minute set to `candidate`
/// (minute wheel).  It is disabled when it lies strictly before `min_time`
/// or strictly after `max_time`.  With no `date` or no bounds nothing is
/// disabled; otherwise candidates off the wheel always are.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rangepick::{is_time_disabled, TimeBound, TimeUnit};
///
/// let t = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let min = TimeBound::Absolute(t.and_hms_opt(8, 0, 0).unwrap());
/// let max = TimeBound::Absolute(t.and_hms_opt(18, 0, 0).unwrap());
/// let date = t.and_hms_opt(12, 0, 0);
///
/// assert!(is_time_disabled(7, date, Some(&min), Some(&max), TimeUnit::Hour));
/// assert!(!is_time_disabled(9, date, Some(&min), Some(&max), TimeUnit::Hour));
/// ```
pub fn is_time_disabled<T: CalendarInstant>(
    candidate: u32,
    date: Option<T>,
    min_time: Option<&TimeBound<T>>,
    max_time: Option<&TimeBound<T>>,
    unit: TimeUnit,
) -> bool {
    let Some(date) = date else {
        return false;
    };
    if min_time.is_none() && max_time.is_none() {
        return false;
    }
    if unit.check(candidate).is_err() {
        return true;
    }

    let (hour, minute) = match unit {
        TimeUnit::Hour => (candidate, 0),
        TimeUnit::Minute => (date.hour(), candidate),
    };
    let tested = date
        .start_of_day()
        .with_hour(hour)
        .and_then(|t| t.with_minute(minute));

    match tested {
        Some(tested) => out_of_bounds(&tested, min_time, max_time),
        None => true,
    }
}

/// Apply a wheel pick to `date`, keeping every other field.
///
/// An absent `date` starts from `now`.  Returns `None`, leaving the caller's
/// value untouched, when the value is off the wheel or the resulting instant
/// falls outside `[min_time, max_time]`.
pub fn apply_time_pick<T: CalendarInstant>(
    date: Option<T>,
    value: u32,
    unit: TimeUnit,
    min_time: Option<&TimeBound<T>>,
    max_time: Option<&TimeBound<T>>,
    now: T,
) -> Option<T> {
    let base = date.unwrap_or(now);
    let picked = match unit {
        TimeUnit::Hour => base.with_hour(value),
        TimeUnit::Minute => base.with_minute(value),
    };

    match picked {
        Some(picked) if !out_of_bounds(&picked, min_time, max_time) => Some(picked),
        _ => {
            log::debug!("rejected {unit} pick {value} on {base:?}");
            None
        }
    }
}

/// One slot of an hour or minute wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelItem {
    pub value: u32,
    pub disabled: bool,
    /// The slot matching the current value of `date`.
    pub active: bool,
}

/// Every slot of the `unit` wheel for `date`, with its availability.
///
/// Re-evaluate whenever the focused range or its date changes.
pub fn wheel_items<T: CalendarInstant>(
    date: Option<T>,
    min_time: Option<&TimeBound<T>>,
    max_time: Option<&TimeBound<T>>,
    unit: TimeUnit,
) -> Vec<WheelItem> {
    let current = date.map(|d| match unit {
        TimeUnit::Hour => d.hour(),
        TimeUnit::Minute => d.minute(),
    });

    (0..unit.slots())
        .map(|value| WheelItem {
            value,
            disabled: is_time_disabled(value, date, min_time, max_time, unit),
            active: current == Some(value),
        })
        .collect()
}
