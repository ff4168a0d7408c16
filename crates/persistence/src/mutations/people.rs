// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Person mutations.

use acts_domain::PersonName;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::people;
use crate::error::PersistenceError;
use crate::sqlite;

/// Creates a new person.
///
/// Uniqueness of the name is re-checked inside the transaction before the
/// insert, so a concurrent insert of the same name cannot slip through
/// between check and write.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The person's name
///
/// # Returns
///
/// The generated person ID.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicatePerson` if a person with that name
/// already exists, or an error if the database write fails.
pub fn create_person(
    conn: &mut SqliteConnection,
    name: &PersonName,
) -> Result<i64, PersistenceError> {
    info!("Creating person: {}", name);

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let existing: Option<i64> = people::table
            .filter(people::name.eq(name.value()))
            .select(people::person_id)
            .first(conn)
            .optional()?;

        if existing.is_some() {
            return Err(PersistenceError::DuplicatePerson(String::from(
                name.value(),
            )));
        }

        diesel::insert_into(people::table)
            .values(people::name.eq(name.value()))
            .execute(conn)?;

        let person_id: i64 = sqlite::get_last_insert_rowid(conn)?;

        info!(person_id, "Person created successfully");
        Ok(person_id)
    })
}

/// Renames a person.
///
/// The new name's uniqueness is checked before the current name is
/// resolved; renaming a person to their own current name is therefore a
/// duplicate, not a no-op.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `current_name` - The person's current name
/// * `new_name` - The name to assign
///
/// # Returns
///
/// The renamed person's ID.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicatePerson` if any person already has
/// `new_name`, `PersistenceError::PersonNotFound` if no person has
/// `current_name`, or an error if the database write fails.
pub fn rename_person(
    conn: &mut SqliteConnection,
    current_name: &PersonName,
    new_name: &PersonName,
) -> Result<i64, PersistenceError> {
    info!("Renaming person '{}' to '{}'", current_name, new_name);

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let taken: Option<i64> = people::table
            .filter(people::name.eq(new_name.value()))
            .select(people::person_id)
            .first(conn)
            .optional()?;

        if taken.is_some() {
            return Err(PersistenceError::DuplicatePerson(String::from(
                new_name.value(),
            )));
        }

        let person_id: i64 = people::table
            .filter(people::name.eq(current_name.value()))
            .select(people::person_id)
            .first(conn)
            .optional()?
            .ok_or_else(|| {
                PersistenceError::PersonNotFound(String::from(current_name.value()))
            })?;

        diesel::update(people::table.filter(people::person_id.eq(person_id)))
            .set(people::name.eq(new_name.value()))
            .execute(conn)?;

        info!(person_id, "Person renamed successfully");
        Ok(person_id)
    })
}
