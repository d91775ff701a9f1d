// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Focus cursor over a collection of ranges.

use crate::DateRange;

/// Index of the first focusable range after `current`, wrapping to the front.
///
/// The forward scan starts at `current + 1`; when it finds nothing the scan
/// restarts at index `0` (and may land on `current` itself).  Ranges that are
/// disabled or opt out of auto focus are skipped.  Returns `0` when no range
/// qualifies, including for an empty collection, so callers must bounds-check
/// before dereferencing.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use rangepick::{next_range_index, DateRange};
///
/// let ranges: Vec<DateRange<NaiveDateTime>> = vec![
///     DateRange::default().with_disabled(true),
///     DateRange::default(),
///     DateRange::default(),
/// ];
/// assert_eq!(next_range_index(&ranges, 0), 1);
/// assert_eq!(next_range_index(&ranges, 2), 1);
/// ```
pub fn next_range_index<T: Copy>(ranges: &[DateRange<T>], current: usize) -> usize {
    scan(ranges, current.saturating_add(1))
}

/// Index of the first focusable range, or `0` when there is none.
pub fn first_range_index<T: Copy>(ranges: &[DateRange<T>]) -> usize {
    scan(ranges, 0)
}

fn scan<T: Copy>(ranges: &[DateRange<T>], from: usize) -> usize {
    let found = ranges
        .iter()
        .enumerate()
        .skip(from)
        .chain(ranges.iter().enumerate())
        .find(|(_, range)| range.is_focusable())
        .map(|(index, _)| index);

    log::trace!("focus scan from {from} over {} ranges -> {found:?}", ranges.len());
    found.unwrap_or(0)
}
