// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Astronaut Career Tracking System.
//!
//! This crate provides database persistence for people, astronaut details,
//! astronaut duties, and process-log entries. It is built on Diesel over
//! `SQLite`.
//!
//! ## Storage Model
//!
//! - **people** — one row per person, name unique
//! - **`astronaut_details`** — at most one row per person, the current
//!   career summary (rank, duty title, career start/end)
//! - **`astronaut_duties`** — append-only duty history; the open duty has a
//!   `NULL` end date
//! - **`log_entries`** — one row per handled request, written by the server
//!
//! Dates are stored as ISO 8601 `TEXT` (`YYYY-MM-DD`), which orders
//! correctly under lexicographic comparison.
//!
//! ## Testing Philosophy
//!
//! - All tests run against in-memory `SQLite`
//! - Each test receives a unique shared-memory database via an atomic
//!   counter, so tests are isolated without external infrastructure
//! - Foreign key enforcement is verified at construction time and tests
//!   fail fast if it is off

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use acts_domain::{DutyStart, DutyTitle, PersonName, Rank};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod data_models;
mod dates;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    AstronautDetailData, AstronautDutyData, LogEntryData, NewLogEntry, PersonAstronautData,
    PersonData,
};
pub use error::PersistenceError;

/// Persistence adapter for the career-tracking database.
///
/// Owns a single `SQLite` connection. Construction runs migrations and
/// verifies foreign key enforcement, so a successfully constructed adapter
/// is ready for use.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("acts_memdb_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        // Verify foreign key enforcement is active
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        sqlite::enable_wal_mode(&mut conn)?;

        // Verify foreign key enforcement is active
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // People
    // ========================================================================

    /// Creates a new person.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name (must be unique)
    ///
    /// # Returns
    ///
    /// The generated ID of the new person.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicatePerson` if a person with this
    /// name already exists, or an error if the database operation fails.
    pub fn create_person(&mut self, name: &PersonName) -> Result<i64, PersistenceError> {
        mutations::people::create_person(&mut self.conn, name)
    }

    /// Renames an existing person.
    ///
    /// # Arguments
    ///
    /// * `current_name` - The person's current name
    /// * `new_name` - The name to change to (must be unique)
    ///
    /// # Returns
    ///
    /// The ID of the renamed person.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicatePerson` if the new name is
    /// already taken, or `PersistenceError::PersonNotFound` if no person
    /// has the current name.
    pub fn rename_person(
        &mut self,
        current_name: &PersonName,
        new_name: &PersonName,
    ) -> Result<i64, PersistenceError> {
        mutations::people::rename_person(&mut self.conn, current_name, new_name)
    }

    /// Retrieves all people joined with their astronaut details.
    ///
    /// People without an astronaut record come back with `None` in every
    /// detail-side field.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_person_astronauts(&mut self) -> Result<Vec<PersonAstronautData>, PersistenceError> {
        queries::people::get_person_astronauts(&mut self.conn)
    }

    /// Retrieves one person joined with their astronaut detail by exact name.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name (exact, case-sensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if no person has that name.
    pub fn get_person_astronaut_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<PersonAstronautData>, PersistenceError> {
        queries::people::get_person_astronaut_by_name(&mut self.conn, name)
    }

    /// Retrieves a bare person row by exact name.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name (exact, case-sensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if no person has that name.
    pub fn get_person_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<PersonData>, PersistenceError> {
        queries::people::get_person_by_name(&mut self.conn, name)
    }

    // ========================================================================
    // Astronaut Duties
    // ========================================================================

    /// Records a new duty assignment for a person, atomically.
    ///
    /// Closes the currently-open duty, upserts the career summary, and
    /// appends the new duty row, all inside one transaction.
    ///
    /// # Arguments
    ///
    /// * `name` - The person's name
    /// * `rank` - The rank of the new duty
    /// * `duty_title` - The title of the new duty
    /// * `duty_start` - The start of the new duty as submitted
    ///
    /// # Returns
    ///
    /// The generated ID of the new duty row.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PersonNotFound` if no person has `name`,
    /// `PersistenceError::DuplicateDuty` if the person already has a duty
    /// with this title and start date, or an error if any database step
    /// fails.
    pub fn create_astronaut_duty(
        &mut self,
        name: &PersonName,
        rank: &Rank,
        duty_title: &DutyTitle,
        duty_start: &DutyStart,
    ) -> Result<i64, PersistenceError> {
        mutations::duties::create_astronaut_duty(&mut self.conn, name, rank, duty_title, duty_start)
    }

    /// Retrieves the full duty history for a person, most recent start first.
    ///
    /// # Arguments
    ///
    /// * `person_id` - The person's ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_astronaut_duties(
        &mut self,
        person_id: i64,
    ) -> Result<Vec<AstronautDutyData>, PersistenceError> {
        queries::duties::get_astronaut_duties(&mut self.conn, person_id)
    }

    /// Retrieves the astronaut detail record for a person, if one exists.
    ///
    /// # Arguments
    ///
    /// * `person_id` - The person's ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if the person has no astronaut record.
    pub fn get_astronaut_detail(
        &mut self,
        person_id: i64,
    ) -> Result<Option<AstronautDetailData>, PersistenceError> {
        queries::duties::get_astronaut_detail(&mut self.conn, person_id)
    }

    // ========================================================================
    // Process Log
    // ========================================================================

    /// Inserts a process log entry.
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to record
    ///
    /// # Returns
    ///
    /// The generated ID of the new log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_log_entry(&mut self, entry: &NewLogEntry) -> Result<i64, PersistenceError> {
        mutations::log_entries::insert_log_entry(&mut self.conn, entry)
    }

    /// Retrieves all process log entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_log_entries(&mut self) -> Result<Vec<LogEntryData>, PersistenceError> {
        queries::log_entries::get_log_entries(&mut self.conn)
    }

    // ========================================================================
    // Demo Seed
    // ========================================================================

    /// Seeds the database with a small demo data set.
    ///
    /// Runs only against an empty database; if any person already exists
    /// the seed is skipped.
    ///
    /// # Returns
    ///
    /// `true` if the demo data was written, `false` if the seed was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if any database step fails.
    pub fn seed_demo_data(&mut self) -> Result<bool, PersistenceError> {
        mutations::seed::seed_demo_data(&mut self.conn)
    }
}
