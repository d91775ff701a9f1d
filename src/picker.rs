// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Stateful shell around the selection engine.
//!
//! [`DateRangePicker`] keeps the only state a range picker needs between
//! events (the focus and the hover preview) and forwards everything else to
//! pure functions such as [`compute_selection`](crate::compute_selection) and
//! [`is_time_disabled`](crate::is_time_disabled).  Results leave through a
//! [`SelectionSink`].

use crate::focus::first_range_index;
use crate::range::DEFAULT_RANGE_COLORS;
use crate::{
    apply_selection, apply_time_pick, compute_selection, is_time_disabled, wheel_items,
    CalendarInstant, DateRange, Endpoint, FocusTuple, Interval, Pick, RangePatch, RangeUpdate,
    SelectionPolicy, SelectionResult, TimeBound, TimeUnit, WheelItem,
};

/// A proposed, uncommitted range shown while hovering or dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview<T> {
    pub start_date: Option<T>,
    pub end_date: Option<T>,
    pub color: Option<String>,
}

/// Receiver for everything the picker emits.
///
/// Only [`on_change`](SelectionSink::on_change) is required.
pub trait SelectionSink<T> {
    /// A committed, sparse update keyed by range identity.
    fn on_change(&mut self, patch: RangePatch<T>);

    /// The focus moved.
    fn on_range_focus_change(&mut self, _focus: FocusTuple) {}

    /// The hover preview changed; `None` clears it.
    fn on_preview(&mut self, _preview: Option<&Preview<T>>) {}
}

/// Interactive date range picker.
///
/// The caller keeps ownership of the ranges and passes a snapshot to every
/// call; the picker never stores them.
#[derive(Debug, Clone)]
pub struct DateRangePicker<T> {
    policy: SelectionPolicy<T>,
    disabled_dates: Vec<T>,
    min_time: Option<TimeBound<T>>,
    max_time: Option<TimeBound<T>>,
    range_colors: Vec<String>,
    focused_range: FocusTuple,
    preview: Option<Preview<T>>,
}

impl<T: CalendarInstant> DateRangePicker<T> {
    /// A picker focused on the start of the first focusable range.
    pub fn new(ranges: &[DateRange<T>]) -> Self {
        Self {
            policy: SelectionPolicy::default(),
            disabled_dates: Vec::new(),
            min_time: None,
            max_time: None,
            range_colors: DEFAULT_RANGE_COLORS.iter().map(|c| c.to_string()).collect(),
            focused_range: FocusTuple::start_of(first_range_index(ranges)),
            preview: None,
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy<T>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_disabled_dates(mut self, disabled_dates: Vec<T>) -> Self {
        self.disabled_dates = disabled_dates;
        self
    }

    pub fn with_time_bounds(
        mut self,
        min_time: Option<TimeBound<T>>,
        max_time: Option<TimeBound<T>>,
    ) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self
    }

    pub fn with_range_colors(mut self, range_colors: Vec<String>) -> Self {
        self.range_colors = range_colors;
        self
    }

    pub fn with_focused_range(mut self, focus: FocusTuple) -> Self {
        self.focused_range = focus;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────

    pub fn focused_range(&self) -> FocusTuple {
        self.focused_range
    }

    pub fn preview(&self) -> Option<&Preview<T>> {
        self.preview.as_ref()
    }

    pub fn policy(&self) -> &SelectionPolicy<T> {
        &self.policy
    }

    pub fn disabled_dates(&self) -> &[T] {
        &self.disabled_dates
    }

    // ── date picks ────────────────────────────────────────────────────

    /// Run the engine for `pick` against the current focus without committing.
    pub fn compute(
        &self,
        ranges: &[DateRange<T>],
        pick: Pick<T>,
        now: T,
    ) -> Option<SelectionResult<T>> {
        compute_selection(
            pick,
            self.focused_range,
            ranges,
            &self.policy,
            &self.disabled_dates,
            now,
        )
    }

    /// Commit `pick`: emit the updated range and advance the focus.
    ///
    /// Without a sink, or with the focus on a missing range, nothing happens
    /// and `None` is returned.
    pub fn set_selection(
        &mut self,
        ranges: &[DateRange<T>],
        pick: Pick<T>,
        now: T,
        sink: Option<&mut dyn SelectionSink<T>>,
    ) -> Option<SelectionResult<T>> {
        let sink = sink?;
        let index = self.focused_range.range_index;
        let selected = ranges.get(index)?;
        let result = self.compute(ranges, pick, now)?;

        let committed = apply_selection(selected, &result);
        sink.on_change(RangePatch::single(index, committed));

        self.focused_range = result.next_focus;
        self.preview = None;
        sink.on_range_focus_change(result.next_focus);
        Some(result)
    }

    /// Move the focus explicitly, e.g. when the user clicks a range's input.
    pub fn handle_range_focus_change(
        &mut self,
        focus: FocusTuple,
        sink: Option<&mut dyn SelectionSink<T>>,
    ) {
        self.focused_range = focus;
        if let Some(sink) = sink {
            sink.on_range_focus_change(focus);
        }
    }

    /// Show what `pick` would produce, or clear the preview with `None`.
    pub fn update_preview(
        &mut self,
        ranges: &[DateRange<T>],
        pick: Option<Pick<T>>,
        now: T,
        sink: Option<&mut dyn SelectionSink<T>>,
    ) {
        self.preview = pick
            .and_then(|pick| self.compute(ranges, pick, now))
            .map(|result| Preview {
                start_date: result.start_date,
                end_date: result.end_date,
                color: self.range_color(ranges, self.focused_range.range_index),
            });

        if let Some(sink) = sink {
            sink.on_preview(self.preview.as_ref());
        }
    }

    /// Display color of the range at `index`.
    pub fn range_color(&self, ranges: &[DateRange<T>], index: usize) -> Option<String> {
        ranges
            .get(index)
            .and_then(|range| range.color.clone())
            .or_else(|| self.range_colors.get(index).cloned())
    }

    /// The preview as an interval, when both bounds are set.
    pub fn preview_interval(&self) -> Option<Interval<T>> {
        let preview = self.preview.as_ref()?;
        Some(Interval::new(preview.start_date?, preview.end_date?))
    }

    // ── time picks ────────────────────────────────────────────────────

    /// Commit a new date/time for one bound of the focused range.
    ///
    /// A value outside the configured absolute time bounds is dropped.
    pub fn handle_time_change(
        &self,
        ranges: &[DateRange<T>],
        date: T,
        endpoint: Endpoint,
        sink: Option<&mut dyn SelectionSink<T>>,
    ) -> Option<RangePatch<T>> {
        let sink = sink?;
        let index = self.focused_range.range_index;
        let selected = ranges.get(index)?;

        let below = self.min_time.is_some_and(|min| min.is_after(&date));
        let above = self.max_time.is_some_and(|max| max.is_before(&date));
        if below || above {
            log::debug!("time {date:?} for {endpoint} of range {index} is outside bounds");
            return None;
        }

        let patch = RangePatch::single(
            index,
            selected.merged(RangeUpdate::new().endpoint(endpoint, Some(date))),
        );
        sink.on_change(patch.clone());
        Some(patch)
    }

    /// A click on the hour or minute wheel of one bound of the focused range.
    pub fn pick_time(
        &self,
        ranges: &[DateRange<T>],
        endpoint: Endpoint,
        value: u32,
        unit: TimeUnit,
        now: T,
        sink: Option<&mut dyn SelectionSink<T>>,
    ) -> Option<RangePatch<T>> {
        let selected = ranges.get(self.focused_range.range_index)?;
        if selected.disabled {
            return None;
        }
        let date = apply_time_pick(
            selected.endpoint(endpoint),
            value,
            unit,
            self.min_time.as_ref(),
            self.max_time.as_ref(),
            now,
        )?;
        self.handle_time_change(ranges, date, endpoint, sink)
    }

    /// Whether `candidate` is selectable on the `unit` wheel of `endpoint`.
    pub fn is_time_disabled(
        &self,
        ranges: &[DateRange<T>],
        endpoint: Endpoint,
        candidate: u32,
        unit: TimeUnit,
    ) -> bool {
        let date = ranges
            .get(self.focused_range.range_index)
            .and_then(|range| range.endpoint(endpoint));
        is_time_disabled(
            candidate,
            date,
            self.min_time.as_ref(),
            self.max_time.as_ref(),
            unit,
        )
    }

    /// The `unit` wheel for `endpoint` of the focused range.
    pub fn wheel(&self, ranges: &[DateRange<T>], endpoint: Endpoint, unit: TimeUnit) -> Vec<WheelItem> {
        let date = ranges
            .get(self.focused_range.range_index)
            .and_then(|range| range.endpoint(endpoint));
        wheel_items(date, self.min_time.as_ref(), self.max_time.as_ref(), unit)
    }
}
