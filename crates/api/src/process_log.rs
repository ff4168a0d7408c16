// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-request process logging.
//!
//! A `ProcessLog` is an explicit value created at the HTTP boundary for
//! each inbound request and threaded `&mut` through the handler. The
//! handler records what operation ran and with which inputs; the boundary
//! records the outcome and persists one `log_entries` row after the handler
//! returns. There is no shared logging context.

use crate::error::ApiError;
use acts_persistence::NewLogEntry;
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// A process-log accumulator for a single handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessLog {
    description: String,
    details: Vec<(String, String)>,
    success: bool,
    error: Option<String>,
}

impl ProcessLog {
    /// Creates an empty process log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: String::new(),
            details: Vec::new(),
            success: true,
            error: None,
        }
    }

    /// Records the operation description and its salient input fields.
    ///
    /// # Arguments
    ///
    /// * `description` - A short operation name (e.g. `CreatePerson`)
    /// * `details` - Key/value pairs naming the request's inputs
    pub fn initiate(&mut self, description: &str, details: &[(&str, &str)]) {
        self.description = String::from(description);
        self.details = details
            .iter()
            .map(|(key, value)| (String::from(*key), String::from(*value)))
            .collect();
    }

    /// Marks the request as failed and records the error message.
    pub fn record_error(&mut self, message: &str) {
        self.success = false;
        self.error = Some(String::from(message));
    }

    /// Finishes the log, producing the row to persist.
    ///
    /// # Arguments
    ///
    /// * `elapsed_ms` - Wall-clock time spent handling the request
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn finish(&self, elapsed_ms: i64) -> Result<NewLogEntry, ApiError> {
        let logged_at: String = OffsetDateTime::now_utc()
            .format(&Iso8601::DEFAULT)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to format log timestamp: {e}"),
            })?;
        let detail: String = self
            .details
            .iter()
            .map(|(key, value)| format!("{key}: '{value}'"))
            .collect::<Vec<String>>()
            .join(", ");

        Ok(NewLogEntry {
            logged_at,
            description: self.description.clone(),
            detail,
            success: self.success,
            error: self.error.clone(),
            elapsed_ms,
        })
    }
}

impl Default for ProcessLog {
    fn default() -> Self {
        Self::new()
    }
}
