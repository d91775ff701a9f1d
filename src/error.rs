// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Errors raised at the input boundary of the crate.
///
/// The selection core never fails: rejected picks are reported through
/// `was_valid` flags or `None` results.  These errors only cover parsing and
/// constructing inputs.
#[derive(Debug, Error)]
pub enum RangePickError {
    /// A time unit name other than `hour` / `minute`.
    #[error("unknown time unit: {0}")]
    UnknownTimeUnit(String),

    /// An endpoint name other than `start` / `end`.
    #[error("unknown range endpoint: {0}")]
    UnknownEndpoint(String),

    /// A wall-clock offset past the end of the day.
    #[error("clock offset of {0} minutes is outside a single day")]
    ClockOffsetOutOfRange(u32),

    /// An hour or minute outside its wheel.
    #[error("{unit} value {value} is out of range")]
    TimeValueOutOfRange { unit: &'static str, value: u32 },

    /// The picker configuration could not be decoded.
    #[error("invalid picker configuration: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}
