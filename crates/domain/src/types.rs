// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Iso8601;
use time::{Date, PrimitiveDateTime};

/// Sentinel duty title that marks the end of an astronaut's career.
///
/// Comparison is exact and case-sensitive; `Retired` is an ordinary title.
pub const RETIRED_DUTY_TITLE: &str = "RETIRED";

/// A person's name.
///
/// Names identify people uniquely across the system. Matching is exact and
/// case-sensitive everywhere a name is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    value: String,
}

impl PersonName {
    /// Creates a new `PersonName`.
    ///
    /// # Arguments
    ///
    /// * `value` - The name value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        // Rule: name must not be empty
        if value.is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Name cannot be empty",
            )));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A military rank carried by a duty assignment (e.g. `1LT`, `CPT`).
///
/// Ranks are free-form labels; no roster of valid ranks is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rank {
    value: String,
}

impl Rank {
    /// Creates a new `Rank`.
    ///
    /// # Arguments
    ///
    /// * `value` - The rank value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRank` if the rank is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        // Rule: rank must not be empty
        if value.is_empty() {
            return Err(DomainError::InvalidRank(String::from(
                "Rank cannot be empty",
            )));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the rank value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A duty title carried by a duty assignment (e.g. `Commander`, `Pilot`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DutyTitle {
    value: String,
}

impl DutyTitle {
    /// Creates a new `DutyTitle`.
    ///
    /// # Arguments
    ///
    /// * `value` - The duty title value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDutyTitle` if the title is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        // Rule: duty title must not be empty
        if value.is_empty() {
            return Err(DomainError::InvalidDutyTitle(String::from(
                "Duty title cannot be empty",
            )));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the duty title value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether this title is the retirement sentinel.
    #[must_use]
    pub fn is_retirement(&self) -> bool {
        self.value == RETIRED_DUTY_TITLE
    }
}

impl std::fmt::Display for DutyTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The start of a duty assignment as submitted by the caller.
///
/// Callers may submit either a calendar date (`2020-01-01`) or a full
/// date-time (`2020-01-01T14:30:00`). Storage and all date arithmetic use
/// the truncated calendar date; the value as supplied (time-of-day intact)
/// is kept because the duplicate-duty check compares against it. A stored
/// start date compares as midnight, so a submitted time-of-day component
/// makes the duplicate check miss even when the calendar date collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyStart {
    supplied: PrimitiveDateTime,
}

impl DutyStart {
    /// Parses a duty start from an ISO 8601 date or date-time string.
    ///
    /// # Arguments
    ///
    /// * `value` - The date string as submitted
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is neither an
    /// ISO 8601 date-time nor an ISO 8601 calendar date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if let Ok(date_time) = PrimitiveDateTime::parse(value, &Iso8601::DEFAULT) {
            return Ok(Self {
                supplied: date_time,
            });
        }
        match Date::parse(value, &Iso8601::DEFAULT) {
            Ok(date) => Ok(Self {
                supplied: date.midnight(),
            }),
            Err(e) => Err(DomainError::DateParseError {
                date_string: String::from(value),
                error: e.to_string(),
            }),
        }
    }

    /// Creates a duty start from a calendar date, at midnight.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self {
            supplied: date.midnight(),
        }
    }

    /// Returns the truncated calendar date used for storage and arithmetic.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.supplied.date()
    }

    /// Returns the day before the truncated start date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the start date is
    /// the minimum representable date.
    pub fn prior_day(&self) -> Result<Date, DomainError> {
        self.date()
            .previous_day()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("computing the day before the duty start date"),
            })
    }

    /// Compares the value as supplied against a recorded start date.
    ///
    /// Recorded start dates carry no time-of-day and compare as midnight.
    #[must_use]
    pub fn matches_recorded_start(&self, recorded: Date) -> bool {
        self.supplied == recorded.midnight()
    }
}
