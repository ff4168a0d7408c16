// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between `time::Date` and the stored ISO 8601 text form.

use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::PersistenceError;

/// Storage format for calendar dates.
const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Formats a date into the stored `YYYY-MM-DD` text form.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format date '{date}': {e}")))
}

/// Parses a stored `YYYY-MM-DD` text value back into a date.
///
/// # Errors
///
/// Returns `PersistenceError::CorruptRecord` if the stored text is not a
/// valid date.
pub(crate) fn parse_stored_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| {
        PersistenceError::CorruptRecord(format!("Failed to parse stored date '{value}': {e}"))
    })
}
