// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Range selection engine.
//!
//! [`compute_selection`] turns `(ranges, focus, one pick)` into the next state
//! of the focused range:
//!
//! 1. A pick on the start endpoint sets `start_date` and derives `end_date`
//!    from the [`SelectionPolicy`], then moves the focus to the end endpoint.
//! 2. A pick on the end endpoint sets `end_date` only.
//! 3. A reversed result is swapped so that `start <= end`.
//! 4. Disabled dates inside the inclusive interval are repaired away by
//!    moving the bound that was just picked.
//! 5. After an end pick the focus advances to the next focusable range.
//!
//! [`apply_selection`] then carries the previous hour and minute of each bound
//! over to the new value, so picking a new day never resets a chosen time.

use crate::focus::next_range_index;
use crate::{CalendarInstant, DateRange, Endpoint, FocusTuple, Interval, RangeUpdate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options shaping the first (start) pick of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionPolicy<T> {
    /// Shift the whole range, preserving its length in days.
    pub move_range_on_first_selection: bool,
    /// Keep the old end unless it does not lie after the new start.
    pub retain_end_date_on_first_selection: bool,
    /// Hard ceiling for the end derived from a start pick.
    pub max_date: Option<T>,
}

impl<T> Default for SelectionPolicy<T> {
    fn default() -> Self {
        Self {
            move_range_on_first_selection: false,
            retain_end_date_on_first_selection: false,
            max_date: None,
        }
    }
}

/// A single user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick<T> {
    /// One date, applied to the focused endpoint.
    Single(T),
    /// A drag across the calendar setting both bounds at once.
    Span(Interval<T>),
}

impl<T> From<T> for Pick<T> {
    fn from(value: T) -> Self {
        Pick::Single(value)
    }
}

/// Outcome of one [`compute_selection`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionResult<T> {
    /// `false` when disabled dates had to be repaired out of the interval.
    pub was_valid: bool,
    pub start_date: Option<T>,
    pub end_date: Option<T>,
    pub next_focus: FocusTuple,
}

impl<T: CalendarInstant> SelectionResult<T> {
    /// The resulting bounds as an interval, when both are set.
    pub fn interval(&self) -> Option<Interval<T>> {
        Some(Interval::new(self.start_date?, self.end_date?))
    }
}

/// Compute the next state of the focused range for one pick.
///
/// Returns `None` when `focus` points past the end of `ranges`; the caller
/// treats that as "no change".  `now` stands in for an absent end date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rangepick::{compute_selection, DateRange, FocusTuple, Pick, SelectionPolicy};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let ranges = vec![DateRange::new(day(10), day(15))];
/// let policy = SelectionPolicy {
///     move_range_on_first_selection: true,
///     ..SelectionPolicy::default()
/// };
///
/// let result = compute_selection(
///     Pick::Single(day(12)),
///     FocusTuple::start_of(0),
///     &ranges,
///     &policy,
///     &[],
///     day(1),
/// )
/// .unwrap();
///
/// assert_eq!(result.start_date, Some(day(12)));
/// assert_eq!(result.end_date, Some(day(17)));
/// assert_eq!(result.next_focus, FocusTuple::end_of(0));
/// ```
pub fn compute_selection<T: CalendarInstant>(
    pick: Pick<T>,
    focus: FocusTuple,
    ranges: &[DateRange<T>],
    policy: &SelectionPolicy<T>,
    disabled_dates: &[T],
    now: T,
) -> Option<SelectionResult<T>> {
    let Some(selected) = ranges.get(focus.range_index) else {
        log::debug!("focus {focus} has no range among {}, ignoring pick", ranges.len());
        return None;
    };

    let mut start_date = selected.start_date;
    let mut end_date = selected.end_date;
    let mut next_focus = None;

    match pick {
        Pick::Span(span) => {
            start_date = Some(span.start);
            end_date = Some(span.end);
        }
        Pick::Single(value) if focus.endpoint == Endpoint::Start => {
            end_date = Some(first_selection_end(value, start_date, end_date, policy, now));
            start_date = Some(value);
            next_focus = Some(FocusTuple::end_of(focus.range_index));
        }
        Pick::Single(value) => end_date = Some(value),
    }

    // Which bound counts as "just picked" once reversal is accounted for.
    let mut start_selected = focus.endpoint == Endpoint::Start;
    let mut was_valid = true;

    if let (Some(start), Some(end)) = (start_date, end_date) {
        let interval = Interval::new(start, end);
        if interval.is_reversed() {
            start_selected = !start_selected;
        }
        let mut interval = interval.ordered();

        let conflicts = interval.conflicts(disabled_dates);
        if let (Some(earliest), Some(latest)) = (conflicts.iter().min(), conflicts.iter().max()) {
            was_valid = false;
            if start_selected {
                interval.start = latest.add_days(1);
            } else {
                interval.end = earliest.add_days(-1);
            }
            log::debug!(
                "{} disabled date(s) inside selection, repaired to {:?}..{:?}",
                conflicts.len(),
                interval.start,
                interval.end
            );
        }

        start_date = Some(interval.start);
        end_date = Some(interval.end);
    }

    let next_focus = next_focus.unwrap_or_else(|| {
        FocusTuple::start_of(next_range_index(ranges, focus.range_index))
    });

    Some(SelectionResult {
        was_valid,
        start_date,
        end_date,
        next_focus,
    })
}

/// End date derived from a pick on the start endpoint.
fn first_selection_end<T: CalendarInstant>(
    value: T,
    start_date: Option<T>,
    end_date: Option<T>,
    policy: &SelectionPolicy<T>,
    now: T,
) -> T {
    let end = if policy.move_range_on_first_selection {
        let day_offset = start_date
            .map(|start| end_date.unwrap_or(now).calendar_days_since(&start))
            .unwrap_or(0);
        value.add_days(day_offset)
    } else if policy.retain_end_date_on_first_selection {
        match end_date {
            Some(end) if value < end => end,
            _ => value,
        }
    } else {
        value
    };

    match policy.max_date {
        Some(max_date) => end.min(max_date),
        None => end,
    }
}

/// Build the committed range from a selection result.
///
/// Each bound that was set both before and after the selection keeps its
/// previous hour and minute; every other field of `previous` is carried over.
/// When the carried-over times would put the start after the end of an
/// ordered result (both bounds on one day), the two bounds are swapped.
pub fn apply_selection<T: CalendarInstant>(
    previous: &DateRange<T>,
    result: &SelectionResult<T>,
) -> DateRange<T> {
    let keep_time = |old: Option<T>, new: Option<T>| match (old, new) {
        (Some(old), Some(new)) => Some(new.with_time_of(&old)),
        (_, new) => new,
    };

    let mut start_date = keep_time(previous.start_date, result.start_date);
    let mut end_date = keep_time(previous.end_date, result.end_date);

    // A repaired, fully disabled result is reversed on purpose and stays so.
    let result_ordered = result.interval().is_some_and(|i| !i.is_reversed());
    if let (true, Some(start), Some(end)) = (result_ordered, start_date, end_date) {
        let committed = Interval::new(start, end).ordered();
        start_date = Some(committed.start);
        end_date = Some(committed.end);
    }

    previous.merged(
        RangeUpdate::new()
            .start_date(start_date)
            .end_date(end_date),
    )
}
