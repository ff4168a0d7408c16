// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Astronaut duty and detail queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{AstronautDetailData, AstronautDutyData};
use crate::diesel_schema::{astronaut_details, astronaut_duties};
use crate::error::PersistenceError;

/// Diesel Queryable struct for astronaut duty rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = astronaut_duties)]
struct AstronautDutyRow {
    astronaut_duty_id: i64,
    person_id: i64,
    rank: String,
    duty_title: String,
    duty_start_date: String,
    duty_end_date: Option<String>,
}

/// Diesel Queryable struct for astronaut detail rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = astronaut_details)]
struct AstronautDetailRow {
    astronaut_detail_id: i64,
    person_id: i64,
    current_rank: String,
    current_duty_title: String,
    career_start_date: String,
    career_end_date: Option<String>,
}

/// Retrieves a person's duty history, most recent start date first.
///
/// Stored dates are ISO 8601 text, so lexicographic order is chronological
/// order. Ties on the start date fall back to insertion (id) order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `person_id` - The person ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_astronaut_duties(
    conn: &mut SqliteConnection,
    person_id: i64,
) -> Result<Vec<AstronautDutyData>, PersistenceError> {
    debug!("Listing astronaut duties for person ID: {}", person_id);

    let rows: Vec<AstronautDutyRow> = astronaut_duties::table
        .filter(astronaut_duties::person_id.eq(person_id))
        .order((
            astronaut_duties::duty_start_date.desc(),
            astronaut_duties::astronaut_duty_id.asc(),
        ))
        .select(AstronautDutyRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| AstronautDutyData {
            astronaut_duty_id: row.astronaut_duty_id,
            person_id: row.person_id,
            rank: row.rank,
            duty_title: row.duty_title,
            duty_start_date: row.duty_start_date,
            duty_end_date: row.duty_end_date,
        })
        .collect())
}

/// Retrieves a person's astronaut detail record.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `person_id` - The person ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the person has no detail record.
pub fn get_astronaut_detail(
    conn: &mut SqliteConnection,
    person_id: i64,
) -> Result<Option<AstronautDetailData>, PersistenceError> {
    debug!("Looking up astronaut detail for person ID: {}", person_id);

    let result: Result<AstronautDetailRow, diesel::result::Error> = astronaut_details::table
        .filter(astronaut_details::person_id.eq(person_id))
        .select(AstronautDetailRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AstronautDetailData {
            astronaut_detail_id: row.astronaut_detail_id,
            person_id: row.person_id,
            current_rank: row.current_rank,
            current_duty_title: row.current_duty_title,
            career_start_date: row.career_start_date,
            career_end_date: row.career_end_date,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
