// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Process-log queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::LogEntryData;
use crate::diesel_schema::log_entries;
use crate::error::PersistenceError;

/// Diesel Queryable struct for log entry rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = log_entries)]
struct LogEntryRow {
    log_entry_id: i64,
    logged_at: String,
    description: String,
    detail: String,
    success: i32,
    error: Option<String>,
    elapsed_ms: i64,
}

/// Retrieves all process-log entries in insertion order.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_log_entries(
    conn: &mut SqliteConnection,
) -> Result<Vec<LogEntryData>, PersistenceError> {
    debug!("Listing process-log entries");

    let rows: Vec<LogEntryRow> = log_entries::table
        .order(log_entries::log_entry_id.asc())
        .select(LogEntryRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| LogEntryData {
            log_entry_id: row.log_entry_id,
            logged_at: row.logged_at,
            description: row.description,
            detail: row.detail,
            success: row.success != 0,
            error: row.error,
            elapsed_ms: row.elapsed_ms,
        })
        .collect())
}
