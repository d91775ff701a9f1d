// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Range Selection Module
//!
//! This crate provides the decision logic behind an interactive date/time
//! range picker: turning one picked date into the next state of a set of
//! named ranges, and deciding which hours and minutes are selectable.
//!
//! # Core types
//!
//! - [`CalendarInstant`] — trait for the date/time values being picked.
//! - [`Interval<T>`] — closed `[start, end]` interval with containment checks.
//! - [`DateRange<T>`] — a named range with optional bounds, owned by the caller.
//! - [`FocusTuple`] / [`Endpoint`] — which range and bound the next pick sets.
//! - [`RangePatch<T>`] — sparse keyed update the caller merges back.
//! - [`SelectionPolicy<T>`] — options shaping the first pick of a range.
//! - [`TimeBound<T>`] — absolute or clock-offset limit for time picks.
//! - [`DateRangePicker<T>`] — stateful shell holding focus and preview.
//!
//! # Operations
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`compute_selection`] | next range + focus for one pick |
//! | [`apply_selection`] | commit a result, preserving times of day |
//! | [`next_range_index`] | advance the focus cursor |
//! | [`is_time_disabled`] | hour/minute availability for a date |
//! | [`apply_time_pick`] | set an hour or minute within bounds |
//!
//! Every operation is a pure function of its inputs.  Where "now" matters
//! it is passed in explicitly.

#[cfg(feature = "serde")]
mod config;
mod error;
mod focus;
pub(crate) mod instant;
mod interval;
mod picker;
pub(crate) mod range;
mod selection;
mod time_constraint;

// ── Re-exports ────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
pub use config::PickerConfig;
pub use error::RangePickError;
pub use focus::{first_range_index, next_range_index};
pub use instant::CalendarInstant;
pub use interval::Interval;
pub use picker::{DateRangePicker, Preview, SelectionSink};
pub use range::{
    DateRange, Endpoint, FocusTuple, RangePatch, RangeUpdate, DEFAULT_RANGE_COLORS,
};
pub use selection::{apply_selection, compute_selection, Pick, SelectionPolicy, SelectionResult};
pub use time_constraint::{
    apply_time_pick, is_time_disabled, wheel_items, TimeBound, TimeUnit, WheelItem,
    MINUTES_PER_DAY,
};
