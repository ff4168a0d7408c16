// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The duty-assignment transaction.
//!
//! Recording a new duty is the one operation that touches several rows at
//! once: it closes the previous open-ended duty, upserts the denormalized
//! career record, and appends the new duty row. Everything runs inside a
//! single database transaction; a failure at any step leaves no partial
//! writes behind.

use acts_domain::{CareerRecord, DutyStart, DutyTitle, PersonName, Rank, apply_duty_assignment};
use diesel::prelude::*;
use diesel::SqliteConnection;
use time::Date;
use tracing::{debug, info};

use crate::data_models::AstronautDetailData;
use crate::dates::{format_date, parse_stored_date};
use crate::diesel_schema::{astronaut_details, astronaut_duties, people};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite;

fn to_career_record(detail: &AstronautDetailData) -> Result<CareerRecord, PersistenceError> {
    let current_rank: Rank = Rank::new(&detail.current_rank)
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
    let current_duty_title: DutyTitle = DutyTitle::new(&detail.current_duty_title)
        .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
    let career_start_date: Date = parse_stored_date(&detail.career_start_date)?;
    let career_end_date: Option<Date> = detail
        .career_end_date
        .as_deref()
        .map(parse_stored_date)
        .transpose()?;

    Ok(CareerRecord {
        current_rank,
        current_duty_title,
        career_start_date,
        career_end_date,
    })
}

/// Records a new duty assignment for a person, atomically.
///
/// Steps, all inside one transaction:
///
/// 1. Resolve the person by exact name.
/// 2. Reject a duplicate `(dutyTitle, dutyStartDate)` pair. The comparison
///    uses the start as submitted: stored starts compare as midnight, so a
///    submitted time-of-day component bypasses the check even when the
///    calendar date collides.
/// 3. Upsert the career record per the domain rules.
/// 4. Close the currently-open duty (the row with the latest start date on
///    record, regardless of its end date) to the day before the new start.
/// 5. Append the new duty row with no end date.
///
/// # Arguments
///
/// * `conn` - The database connection
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
/// `PersistenceError::DuplicateDuty` if the person already has a duty with
/// this title and start date, or an error if any database step fails. Any
/// error rolls the whole transaction back.
pub fn create_astronaut_duty(
    conn: &mut SqliteConnection,
    name: &PersonName,
    rank: &Rank,
    duty_title: &DutyTitle,
    duty_start: &DutyStart,
) -> Result<i64, PersistenceError> {
    info!(
        "Recording duty '{}' ({}) for person '{}' starting {}",
        duty_title,
        rank,
        name,
        duty_start.date()
    );

    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let person_id: i64 = people::table
            .filter(people::name.eq(name.value()))
            .select(people::person_id)
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::PersonNotFound(String::from(name.value())))?;

        let existing_starts: Vec<(String, String)> = astronaut_duties::table
            .filter(astronaut_duties::person_id.eq(person_id))
            .select((
                astronaut_duties::duty_title,
                astronaut_duties::duty_start_date,
            ))
            .load(conn)?;

        for (title, start) in &existing_starts {
            if title == duty_title.value()
                && duty_start.matches_recorded_start(parse_stored_date(start)?)
            {
                return Err(PersistenceError::DuplicateDuty);
            }
        }

        let existing_detail: Option<AstronautDetailData> =
            queries::duties::get_astronaut_detail(conn, person_id)?;
        let existing_record: Option<CareerRecord> = match &existing_detail {
            Some(detail) => Some(to_career_record(detail)?),
            None => None,
        };

        let record: CareerRecord =
            apply_duty_assignment(existing_record.as_ref(), rank, duty_title, duty_start)
                .map_err(|e| PersistenceError::Other(e.to_string()))?;

        let career_start_date: String = format_date(record.career_start_date)?;
        let career_end_date: Option<String> = match record.career_end_date {
            Some(date) => Some(format_date(date)?),
            None => None,
        };

        if let Some(detail) = &existing_detail {
            debug!(
                "Updating astronaut detail {} for person {}",
                detail.astronaut_detail_id, person_id
            );
            diesel::update(
                astronaut_details::table
                    .filter(astronaut_details::astronaut_detail_id.eq(detail.astronaut_detail_id)),
            )
            .set((
                astronaut_details::current_rank.eq(record.current_rank.value()),
                astronaut_details::current_duty_title.eq(record.current_duty_title.value()),
                astronaut_details::career_start_date.eq(&career_start_date),
                astronaut_details::career_end_date.eq(career_end_date.as_deref()),
            ))
            .execute(conn)?;
        } else {
            debug!("Creating astronaut detail for person {}", person_id);
            diesel::insert_into(astronaut_details::table)
                .values((
                    astronaut_details::person_id.eq(person_id),
                    astronaut_details::current_rank.eq(record.current_rank.value()),
                    astronaut_details::current_duty_title.eq(record.current_duty_title.value()),
                    astronaut_details::career_start_date.eq(&career_start_date),
                    astronaut_details::career_end_date.eq(career_end_date.as_deref()),
                ))
                .execute(conn)?;
        }

        // The open duty is the one with the latest start date on record, not
        // the one with a null end date. Ties go to the newest row.
        let open_duty: Option<i64> = astronaut_duties::table
            .filter(astronaut_duties::person_id.eq(person_id))
            .order((
                astronaut_duties::duty_start_date.desc(),
                astronaut_duties::astronaut_duty_id.desc(),
            ))
            .select(astronaut_duties::astronaut_duty_id)
            .first(conn)
            .optional()?;

        if let Some(open_duty_id) = open_duty {
            let prior_day: String = format_date(
                duty_start
                    .prior_day()
                    .map_err(|e| PersistenceError::Other(e.to_string()))?,
            )?;
            debug!("Closing duty {} at {}", open_duty_id, prior_day);
            diesel::update(
                astronaut_duties::table
                    .filter(astronaut_duties::astronaut_duty_id.eq(open_duty_id)),
            )
            .set(astronaut_duties::duty_end_date.eq(Some(prior_day.as_str())))
            .execute(conn)?;
        }

        let start_date: String = format_date(duty_start.date())?;
        diesel::insert_into(astronaut_duties::table)
            .values((
                astronaut_duties::person_id.eq(person_id),
                astronaut_duties::rank.eq(rank.value()),
                astronaut_duties::duty_title.eq(duty_title.value()),
                astronaut_duties::duty_start_date.eq(&start_date),
                astronaut_duties::duty_end_date.eq(None::<String>),
            ))
            .execute(conn)?;

        let duty_id: i64 = sqlite::get_last_insert_rowid(conn)?;

        info!(duty_id, "Duty assignment recorded successfully");
        Ok(duty_id)
    })
}
