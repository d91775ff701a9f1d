// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Declarative picker configuration.
//!
//! A [`PickerConfig`] gathers every option of a [`DateRangePicker`] in one
//! serde-friendly value, so a picker can be described in TOML:
//!
//! ```toml
//! move_range_on_first_selection = true
//! max_date = "2024-12-31T00:00:00"
//! disabled_dates = ["2024-01-12T00:00:00"]
//! min_time = { absolute = "2024-01-01T08:00:00" }
//! max_time = { absolute = "2024-12-31T18:00:00" }
//! range_colors = ["#3d91ff"]
//! ```

use crate::range::DEFAULT_RANGE_COLORS;
use crate::{
    CalendarInstant, DateRange, DateRangePicker, FocusTuple, RangePickError, SelectionPolicy,
    TimeBound,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig<T> {
    pub move_range_on_first_selection: bool,
    pub retain_end_date_on_first_selection: bool,
    pub max_date: Option<T>,
    pub disabled_dates: Vec<T>,
    pub min_time: Option<TimeBound<T>>,
    pub max_time: Option<TimeBound<T>>,
    pub range_colors: Vec<String>,
    pub initial_focused_range: Option<FocusTuple>,
}

impl<T> Default for PickerConfig<T> {
    fn default() -> Self {
        Self {
            move_range_on_first_selection: false,
            retain_end_date_on_first_selection: false,
            max_date: None,
            disabled_dates: Vec::new(),
            min_time: None,
            max_time: None,
            range_colors: DEFAULT_RANGE_COLORS.iter().map(|c| c.to_string()).collect(),
            initial_focused_range: None,
        }
    }
}

impl<T: CalendarInstant + DeserializeOwned> PickerConfig<T> {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, RangePickError> {
        toml::from_str(text).map_err(|err| RangePickError::Config(Box::new(err)))
    }
}

impl<T: CalendarInstant> PickerConfig<T> {
    pub fn policy(&self) -> SelectionPolicy<T> {
        SelectionPolicy {
            move_range_on_first_selection: self.move_range_on_first_selection,
            retain_end_date_on_first_selection: self.retain_end_date_on_first_selection,
            max_date: self.max_date,
        }
    }

    /// Build a picker for `ranges` from this configuration.
    pub fn into_picker(self, ranges: &[DateRange<T>]) -> DateRangePicker<T> {
        let policy = self.policy();
        let mut picker = DateRangePicker::new(ranges)
            .with_policy(policy)
            .with_disabled_dates(self.disabled_dates)
            .with_time_bounds(self.min_time, self.max_time)
            .with_range_colors(self.range_colors);
        if let Some(focus) = self.initial_focused_range {
            picker = picker.with_focused_range(focus);
        }
        picker
    }
}
