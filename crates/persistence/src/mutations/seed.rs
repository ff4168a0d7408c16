// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use tracing::info;

use crate::dates::format_date;
use crate::diesel_schema::{astronaut_details, astronaut_duties, people};
use crate::error::PersistenceError;
use crate::sqlite;

/// Seeds the database with a small demo data set.
///
/// Creates two people: John Doe, a serving astronaut with a Commander duty
/// starting today, and Jane Doe, who has no astronaut record. Runs only
/// against an empty database; if any person already exists the seed is
/// skipped.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// `true` if the demo data was written, `false` if the database already
/// contained people and the seed was skipped.
///
/// # Errors
///
/// Returns a `PersistenceError` if any database step fails.
pub fn seed_demo_data(conn: &mut SqliteConnection) -> Result<bool, PersistenceError> {
    conn.transaction::<bool, PersistenceError, _>(|conn| {
        let existing_people: i64 = people::table.count().get_result(conn)?;

        if existing_people > 0 {
            info!(
                "Database already contains {} people, skipping demo seed",
                existing_people
            );
            return Ok(false);
        }

        let today: String = format_date(OffsetDateTime::now_utc().date())?;

        diesel::insert_into(people::table)
            .values(people::name.eq("John Doe"))
            .execute(conn)?;
        let john_id: i64 = sqlite::get_last_insert_rowid(conn)?;

        diesel::insert_into(astronaut_details::table)
            .values((
                astronaut_details::person_id.eq(john_id),
                astronaut_details::current_rank.eq("1LT"),
                astronaut_details::current_duty_title.eq("Commander"),
                astronaut_details::career_start_date.eq(&today),
                astronaut_details::career_end_date.eq(None::<String>),
            ))
            .execute(conn)?;

        diesel::insert_into(astronaut_duties::table)
            .values((
                astronaut_duties::person_id.eq(john_id),
                astronaut_duties::rank.eq("1LT"),
                astronaut_duties::duty_title.eq("Commander"),
                astronaut_duties::duty_start_date.eq(&today),
                astronaut_duties::duty_end_date.eq(None::<String>),
            ))
            .execute(conn)?;

        diesel::insert_into(people::table)
            .values(people::name.eq("Jane Doe"))
            .execute(conn)?;

        info!("Demo data seeded");
        Ok(true)
    })
}
