// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::NewLogEntry;
use crate::diesel_schema::log_entries;
use crate::error::PersistenceError;
use crate::sqlite;

/// Inserts a process log entry.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entry` - The log entry to record
///
/// # Returns
///
/// The generated ID of the new log entry.
///
/// # Errors
///
/// Returns a `PersistenceError` if the insert fails.
pub fn insert_log_entry(
    conn: &mut SqliteConnection,
    entry: &NewLogEntry,
) -> Result<i64, PersistenceError> {
    debug!("Recording log entry: {}", entry.description);

    diesel::insert_into(log_entries::table)
        .values((
            log_entries::logged_at.eq(&entry.logged_at),
            log_entries::description.eq(&entry.description),
            log_entries::detail.eq(&entry.detail),
            log_entries::success.eq(i32::from(entry.success)),
            log_entries::error.eq(entry.error.as_deref()),
            log_entries::elapsed_ms.eq(entry.elapsed_ms),
        ))
        .execute(conn)?;

    sqlite::get_last_insert_rowid(conn)
}
