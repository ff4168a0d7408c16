// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row data returned by the persistence layer.
//!
//! Dates travel as ISO 8601 strings exactly as stored; callers parse them
//! into `time::Date` values where they need calendar semantics.

/// A person row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonData {
    pub person_id: i64,
    pub name: String,
}

/// A person joined with their astronaut detail record, if any.
///
/// The detail-side fields are `None` for people with no duty history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonAstronautData {
    pub person_id: i64,
    pub name: String,
    pub current_rank: Option<String>,
    pub current_duty_title: Option<String>,
    pub career_start_date: Option<String>,
    pub career_end_date: Option<String>,
}

/// An astronaut detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstronautDetailData {
    pub astronaut_detail_id: i64,
    pub person_id: i64,
    pub current_rank: String,
    pub current_duty_title: String,
    pub career_start_date: String,
    pub career_end_date: Option<String>,
}

/// An astronaut duty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstronautDutyData {
    pub astronaut_duty_id: i64,
    pub person_id: i64,
    pub rank: String,
    pub duty_title: String,
    pub duty_start_date: String,
    pub duty_end_date: Option<String>,
}

/// A process-log row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub logged_at: String,
    pub description: String,
    pub detail: String,
    pub success: bool,
    pub error: Option<String>,
    pub elapsed_ms: i64,
}

/// A persisted process-log row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntryData {
    pub log_entry_id: i64,
    pub logged_at: String,
    pub description: String,
    pub detail: String,
    pub success: bool,
    pub error: Option<String>,
    pub elapsed_ms: i64,
}
