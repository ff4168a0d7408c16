// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the atomic duty-assignment transaction.

use crate::tests::{
    create_test_duty_title, create_test_name, create_test_persistence, create_test_rank,
    create_test_start,
};
use crate::{AstronautDetailData, AstronautDutyData, PersistenceError};
use acts_domain::DutyStart;
use diesel::prelude::*;
use time::Month;

#[test]
fn test_first_duty_creates_astronaut_record() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    let duty_id = persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();
    assert!(duty_id > 0);

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // Career record starts at the first duty's start date, with no end
    let detail: AstronautDetailData = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_rank, "1LT");
    assert_eq!(detail.current_duty_title, "Pilot");
    assert_eq!(detail.career_start_date, "2024-01-01");
    assert!(detail.career_end_date.is_none());

    // One duty on record, open-ended
    let duties: Vec<AstronautDutyData> = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties.len(), 1);
    assert_eq!(duties[0].astronaut_duty_id, duty_id);
    assert_eq!(duties[0].duty_start_date, "2024-01-01");
    assert!(duties[0].duty_end_date.is_none());
}

#[test]
fn test_duty_for_unknown_person_fails() {
    let mut persistence = create_test_persistence();

    let result = persistence.create_astronaut_duty(
        &create_test_name("Amy"),
        &create_test_rank("1LT"),
        &create_test_duty_title("Pilot"),
        &create_test_start(2024, Month::January, 1),
    );
    assert!(result.is_err());
    match result.unwrap_err() {
        PersistenceError::PersonNotFound(name) => {
            assert_eq!(name, "Amy");
        }
        other => panic!("Expected PersonNotFound error, got: {other:?}"),
    }
}

#[test]
fn test_subsequent_duty_closes_previous_and_keeps_career_start() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("CPT"),
            &create_test_duty_title("Commander"),
            &create_test_start(2025, Month::February, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // History is most recent start first; the old duty ends the day before
    // the new one begins
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties.len(), 2);
    assert_eq!(duties[0].duty_title, "Commander");
    assert_eq!(duties[0].duty_start_date, "2025-02-01");
    assert!(duties[0].duty_end_date.is_none());
    assert_eq!(duties[1].duty_title, "Pilot");
    assert_eq!(duties[1].duty_start_date, "2024-01-01");
    assert_eq!(duties[1].duty_end_date.as_deref(), Some("2025-01-31"));

    // Career record reflects the new duty but keeps the original start
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_rank, "CPT");
    assert_eq!(detail.current_duty_title, "Commander");
    assert_eq!(detail.career_start_date, "2024-01-01");
    assert!(detail.career_end_date.is_none());
}

#[test]
fn test_career_record_rebuilt_fresh_when_missing_despite_prior_duties() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // Plant a bare duty row with no accompanying career record, as if the
    // record had been lost
    {
        use crate::diesel_schema::astronaut_duties;
        diesel::insert_into(astronaut_duties::table)
            .values((
                astronaut_duties::person_id.eq(person_id),
                astronaut_duties::rank.eq("1LT"),
                astronaut_duties::duty_title.eq("Pilot"),
                astronaut_duties::duty_start_date.eq("2024-01-01"),
                astronaut_duties::duty_end_date.eq(None::<String>),
            ))
            .execute(&mut persistence.conn)
            .unwrap();
    }

    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("CPT"),
            &create_test_duty_title("Commander"),
            &create_test_start(2025, Month::February, 1),
        )
        .unwrap();

    // The career start comes from the new duty, not the planted history
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.career_start_date, "2025-02-01");
    assert!(detail.career_end_date.is_none());

    // The planted duty still gets closed
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties[1].duty_end_date.as_deref(), Some("2025-01-31"));
}

#[test]
fn test_retirement_on_fresh_record_ends_career_same_day() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("COL"),
            &create_test_duty_title("RETIRED"),
            &create_test_start(2024, Month::June, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_duty_title, "RETIRED");
    assert_eq!(detail.career_start_date, "2024-06-01");
    assert_eq!(detail.career_end_date.as_deref(), Some("2024-06-01"));
}

#[test]
fn test_retirement_on_existing_record_ends_career_prior_day() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("COL"),
            &create_test_duty_title("RETIRED"),
            &create_test_start(2025, Month::February, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_duty_title, "RETIRED");
    assert_eq!(detail.career_start_date, "2024-01-01");
    assert_eq!(detail.career_end_date.as_deref(), Some("2025-01-31"));

    // The retirement itself is recorded as an open-ended duty
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties[0].duty_title, "RETIRED");
    assert!(duties[0].duty_end_date.is_none());
    assert_eq!(duties[1].duty_end_date.as_deref(), Some("2025-01-31"));
}

#[test]
fn test_retired_title_is_case_sensitive() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("COL"),
            &create_test_duty_title("Retired"),
            &create_test_start(2024, Month::June, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // "Retired" is an ordinary title; the career does not end
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_duty_title, "Retired");
    assert!(detail.career_end_date.is_none());
}

#[test]
fn test_duty_after_retirement_keeps_career_end() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("COL"),
            &create_test_duty_title("RETIRED"),
            &create_test_start(2025, Month::February, 1),
        )
        .unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("COL"),
            &create_test_duty_title("Instructor"),
            &create_test_start(2026, Month::March, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // The new assignment updates rank and title but never clears the end date
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_duty_title, "Instructor");
    assert_eq!(detail.career_end_date.as_deref(), Some("2025-01-31"));
}

#[test]
fn test_duplicate_duty_fails_and_writes_nothing() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();

    // Same title and start date, different rank: still a duplicate
    let result = persistence.create_astronaut_duty(
        &create_test_name("Amy"),
        &create_test_rank("CPT"),
        &create_test_duty_title("Pilot"),
        &create_test_start(2024, Month::January, 1),
    );
    assert!(matches!(result, Err(PersistenceError::DuplicateDuty)));

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // The rejected call must not have touched the career record or history
    let detail = persistence
        .get_astronaut_detail(person_id)
        .unwrap()
        .unwrap();
    assert_eq!(detail.current_rank, "1LT");
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties.len(), 1);
    assert!(duties[0].duty_end_date.is_none());
}

#[test]
fn test_duplicate_check_compares_start_as_supplied() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &DutyStart::parse("2024-01-01").unwrap(),
        )
        .unwrap();

    // A midnight date-time equals the stored date
    let result = persistence.create_astronaut_duty(
        &create_test_name("Amy"),
        &create_test_rank("1LT"),
        &create_test_duty_title("Pilot"),
        &DutyStart::parse("2024-01-01T00:00:00").unwrap(),
    );
    assert!(matches!(result, Err(PersistenceError::DuplicateDuty)));

    // A non-midnight time on the same calendar date slips past the check
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &DutyStart::parse("2024-01-01T08:30:00").unwrap(),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;

    // Both rows carry the same truncated start date
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties.len(), 2);
    assert_eq!(duties[0].duty_start_date, "2024-01-01");
    assert_eq!(duties[1].duty_start_date, "2024-01-01");
}

#[test]
fn test_close_targets_latest_start_even_when_already_ended() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();

    // Backdated assignment: the duty with the latest start date is the one
    // that gets closed, so the 2024 duty ends before it began
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Navigator"),
            &create_test_start(2023, Month::June, 1),
        )
        .unwrap();

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    assert_eq!(duties.len(), 2);
    assert_eq!(duties[0].duty_title, "Pilot");
    assert_eq!(duties[0].duty_end_date.as_deref(), Some("2023-05-31"));
    assert_eq!(duties[1].duty_title, "Navigator");
    assert!(duties[1].duty_end_date.is_none());
}

#[test]
fn test_duty_history_is_most_recent_start_first() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    for (title, year) in [("Pilot", 2023), ("Navigator", 2024), ("Commander", 2025)] {
        persistence
            .create_astronaut_duty(
                &create_test_name("Amy"),
                &create_test_rank("1LT"),
                &create_test_duty_title(title),
                &create_test_start(year, Month::January, 1),
            )
            .unwrap();
    }

    let person_id = persistence
        .get_person_by_name("Amy")
        .unwrap()
        .unwrap()
        .person_id;
    let duties = persistence.get_astronaut_duties(person_id).unwrap();
    let titles: Vec<&str> = duties.iter().map(|d| d.duty_title.as_str()).collect();
    assert_eq!(titles, vec!["Commander", "Navigator", "Pilot"]);
}

#[test]
fn test_duties_are_scoped_to_their_person() {
    let mut persistence = create_test_persistence();

    persistence.create_person(&create_test_name("Amy")).unwrap();
    persistence.create_person(&create_test_name("Ben")).unwrap();
    persistence
        .create_astronaut_duty(
            &create_test_name("Amy"),
            &create_test_rank("1LT"),
            &create_test_duty_title("Pilot"),
            &create_test_start(2024, Month::January, 1),
        )
        .unwrap();

    let ben_id = persistence
        .get_person_by_name("Ben")
        .unwrap()
        .unwrap()
        .person_id;
    assert!(persistence.get_astronaut_duties(ben_id).unwrap().is_empty());
    assert!(persistence.get_astronaut_detail(ben_id).unwrap().is_none());
}
