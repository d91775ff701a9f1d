// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named ranges, focus tuples and keyed patches.
//!
//! The caller owns the collection of [`DateRange`] values.  The engine only
//! ever reads a snapshot of it and hands back a [`RangePatch`], which the caller
//! merges by key.

use crate::RangePickError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Colors assigned to ranges that do not carry their own.
pub const DEFAULT_RANGE_COLORS: [&str; 3] = ["#3d91ff", "#3ecf8e", "#fed14c"];

// ═══════════════════════════════════════════════════════════════════════════
// Endpoint / FocusTuple
// ═══════════════════════════════════════════════════════════════════════════

/// Which bound of a range the next pick sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Endpoint {
    #[default]
    Start,
    End,
}

impl Endpoint {
    /// The other bound.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Endpoint::Start => Endpoint::End,
            Endpoint::End => Endpoint::Start,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Start => "start",
            Endpoint::End => "end",
        })
    }
}

impl FromStr for Endpoint {
    type Err = RangePickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "0" => Ok(Endpoint::Start),
            "end" | "1" => Ok(Endpoint::End),
            _ => Err(RangePickError::UnknownEndpoint(s.to_string())),
        }
    }
}

/// The `(range, endpoint)` pair receiving the next pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FocusTuple {
    pub range_index: usize,
    pub endpoint: Endpoint,
}

impl FocusTuple {
    pub const fn new(range_index: usize, endpoint: Endpoint) -> Self {
        Self {
            range_index,
            endpoint,
        }
    }

    pub const fn start_of(range_index: usize) -> Self {
        Self::new(range_index, Endpoint::Start)
    }

    pub const fn end_of(range_index: usize) -> Self {
        Self::new(range_index, Endpoint::End)
    }
}

impl fmt::Display for FocusTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.range_index, self.endpoint)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DateRange
// ═══════════════════════════════════════════════════════════════════════════

/// A named interval with optional bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateRange<T> {
    pub key: Option<String>,
    pub start_date: Option<T>,
    pub end_date: Option<T>,
    pub disabled: bool,
    /// `false` keeps the focus cursor from landing on this range.
    pub auto_focus: bool,
    pub color: Option<String>,
}

impl<T> Default for DateRange<T> {
    fn default() -> Self {
        Self {
            key: None,
            start_date: None,
            end_date: None,
            disabled: false,
            auto_focus: true,
            color: None,
        }
    }
}

impl<T: Copy> DateRange<T> {
    /// An unkeyed range spanning `start..=end`.
    pub fn new(start_date: T, end_date: T) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Whether the focus cursor may land on this range.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.auto_focus && !self.disabled
    }

    /// The identity this range is patched under.
    ///
    /// Unkeyed ranges fall back to their 1-based position: `range1`, `range2`, …
    pub fn resolved_key(&self, index: usize) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| format!("range{}", index + 1))
    }

    /// The bound selected by `endpoint`.
    pub fn endpoint(&self, endpoint: Endpoint) -> Option<T> {
        match endpoint {
            Endpoint::Start => self.start_date,
            Endpoint::End => self.end_date,
        }
    }

    /// A copy of this range with `update` applied.
    ///
    /// Fields the update leaves untouched keep their previous value.
    pub fn merged(&self, update: RangeUpdate<T>) -> Self {
        Self {
            start_date: update.start_date.unwrap_or(self.start_date),
            end_date: update.end_date.unwrap_or(self.end_date),
            ..self.clone()
        }
    }
}

/// Field overrides for [`DateRange::merged`].
///
/// The outer `Option` means "override", the inner one is the new value, so a
/// bound can also be explicitly cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeUpdate<T> {
    pub start_date: Option<Option<T>>,
    pub end_date: Option<Option<T>>,
}

impl<T> Default for RangeUpdate<T> {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
        }
    }
}

impl<T> RangeUpdate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, value: Option<T>) -> Self {
        self.start_date = Some(value);
        self
    }

    pub fn end_date(mut self, value: Option<T>) -> Self {
        self.end_date = Some(value);
        self
    }

    /// Override the bound selected by `endpoint`.
    pub fn endpoint(self, endpoint: Endpoint, value: Option<T>) -> Self {
        match endpoint {
            Endpoint::Start => self.start_date(value),
            Endpoint::End => self.end_date(value),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RangePatch
// ═══════════════════════════════════════════════════════════════════════════

/// Sparse, keyed set of updated ranges.
///
/// Only the ranges touched by an operation appear in the patch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangePatch<T>(pub BTreeMap<String, DateRange<T>>);

impl<T> Default for RangePatch<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Copy> RangePatch<T> {
    /// A patch updating the single range at `index`.
    pub fn single(index: usize, range: DateRange<T>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(range.resolved_key(index), range);
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&DateRange<T>> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge the patch into `ranges` by key, returning a fresh collection.
    ///
    /// Ranges are matched by [`DateRange::resolved_key`]; patch entries with
    /// no matching range are ignored.
    pub fn apply_to(&self, ranges: &[DateRange<T>]) -> Vec<DateRange<T>> {
        ranges
            .iter()
            .enumerate()
            .map(|(index, range)| {
                self.0
                    .get(&range.resolved_key(index))
                    .cloned()
                    .unwrap_or_else(|| range.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_resolved_key_falls_back_to_position() {
        let keyed = DateRange::new(day(1), day(2)).with_key("selection");
        let unkeyed = DateRange::new(day(1), day(2));
        assert_eq!(keyed.resolved_key(4), "selection");
        assert_eq!(unkeyed.resolved_key(0), "range1");
        assert_eq!(unkeyed.resolved_key(2), "range3");
    }

    #[test]
    fn test_merged_keeps_untouched_fields() {
        let range = DateRange::new(day(1), day(5))
            .with_key("trip")
            .with_color("#ff0000")
            .with_auto_focus(false);
        let merged = range.merged(RangeUpdate::new().end_date(Some(day(9))));

        assert_eq!(merged.key.as_deref(), Some("trip"));
        assert_eq!(merged.color.as_deref(), Some("#ff0000"));
        assert!(!merged.auto_focus);
        assert_eq!(merged.start_date, Some(day(1)));
        assert_eq!(merged.end_date, Some(day(9)));
    }

    #[test]
    fn test_merged_can_clear_a_bound() {
        let range = DateRange::new(day(1), day(5));
        let merged = range.merged(RangeUpdate::new().endpoint(Endpoint::Start, None));
        assert_eq!(merged.start_date, None);
        assert_eq!(merged.end_date, Some(day(5)));
    }

    #[test]
    fn test_patch_apply_to_replaces_by_key() {
        let ranges = vec![
            DateRange::new(day(1), day(2)).with_key("a"),
            DateRange::new(day(3), day(4)),
        ];
        let updated = ranges[1].merged(RangeUpdate::new().start_date(Some(day(10))));
        let patch = RangePatch::single(1, updated.clone());

        assert!(patch.get("range2").is_some());
        let merged = patch.apply_to(&ranges);
        assert_eq!(merged[0], ranges[0]);
        assert_eq!(merged[1], updated);
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let ranges = vec![DateRange::new(day(1), day(2)).with_key("a")];
        let patch = RangePatch::single(0, DateRange::new(day(5), day(6)).with_key("b"));
        assert_eq!(patch.apply_to(&ranges), ranges);
    }

    #[test]
    fn test_endpoint_parsing() {
        assert_eq!("start".parse::<Endpoint>().unwrap(), Endpoint::Start);
        assert_eq!(" END ".parse::<Endpoint>().unwrap(), Endpoint::End);
        assert_eq!("1".parse::<Endpoint>().unwrap(), Endpoint::End);
        assert!(matches!(
            "middle".parse::<Endpoint>(),
            Err(RangePickError::UnknownEndpoint(_))
        ));
        assert_eq!(Endpoint::Start.flipped(), Endpoint::End);
    }

    #[test]
    fn test_focus_tuple_display() {
        assert_eq!(FocusTuple::end_of(2).to_string(), "[2, end]");
        assert_eq!(FocusTuple::default(), FocusTuple::start_of(0));
    }
}
