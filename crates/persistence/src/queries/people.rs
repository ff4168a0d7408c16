// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Person queries.
//!
//! The joined projection pairs every person with their astronaut detail
//! record via a left join; people without a detail record come back with
//! `None` in every detail-side field.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{PersonAstronautData, PersonData};
use crate::diesel_schema::{astronaut_details, people};
use crate::error::PersistenceError;

/// Row shape of the person/detail left join.
type PersonAstronautRow = (
    i64,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

fn to_person_astronaut(row: PersonAstronautRow) -> PersonAstronautData {
    let (person_id, name, current_rank, current_duty_title, career_start_date, career_end_date) =
        row;
    PersonAstronautData {
        person_id,
        name,
        current_rank,
        current_duty_title,
        career_start_date,
        career_end_date,
    }
}

/// Retrieves all people joined with their astronaut details, ordered by id.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_person_astronauts(
    conn: &mut SqliteConnection,
) -> Result<Vec<PersonAstronautData>, PersistenceError> {
    debug!("Listing all people with astronaut details");

    let rows: Vec<PersonAstronautRow> = people::table
        .left_join(astronaut_details::table)
        .select((
            people::person_id,
            people::name,
            astronaut_details::current_rank.nullable(),
            astronaut_details::current_duty_title.nullable(),
            astronaut_details::career_start_date.nullable(),
            astronaut_details::career_end_date.nullable(),
        ))
        .order(people::person_id.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(to_person_astronaut).collect())
}

/// Retrieves one person joined with their astronaut detail by exact name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The person's name (exact, case-sensitive)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no person has that name.
pub fn get_person_astronaut_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<PersonAstronautData>, PersistenceError> {
    debug!("Looking up person with astronaut detail by name: {}", name);

    let row: Option<PersonAstronautRow> = people::table
        .left_join(astronaut_details::table)
        .filter(people::name.eq(name))
        .select((
            people::person_id,
            people::name,
            astronaut_details::current_rank.nullable(),
            astronaut_details::current_duty_title.nullable(),
            astronaut_details::career_start_date.nullable(),
            astronaut_details::career_end_date.nullable(),
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(to_person_astronaut))
}

/// Retrieves a bare person row by exact name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The person's name (exact, case-sensitive)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no person has that name.
pub fn get_person_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<PersonData>, PersistenceError> {
    debug!("Looking up person by name: {}", name);

    let row: Option<(i64, String)> = people::table
        .filter(people::name.eq(name))
        .select((people::person_id, people::name))
        .first(conn)
        .optional()?;

    Ok(row.map(|(person_id, name)| PersonData { person_id, name }))
}
