// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, DutyStart, DutyTitle, PersonName, RETIRED_DUTY_TITLE, Rank};
use time::Date;
use time::macros::date;

#[test]
fn test_person_name_accepts_non_empty_value() {
    let name: PersonName = PersonName::new("John Doe").unwrap();
    assert_eq!(name.value(), "John Doe");
}

#[test]
fn test_person_name_rejects_empty_value() {
    let result: Result<PersonName, DomainError> = PersonName::new("");
    assert!(matches!(result, Err(DomainError::InvalidName(_))));
}

#[test]
fn test_person_name_preserves_case() {
    let name: PersonName = PersonName::new("john doe").unwrap();
    assert_ne!(name, PersonName::new("John Doe").unwrap());
}

#[test]
fn test_rank_rejects_empty_value() {
    let result: Result<Rank, DomainError> = Rank::new("");
    assert!(matches!(result, Err(DomainError::InvalidRank(_))));
}

#[test]
fn test_duty_title_rejects_empty_value() {
    let result: Result<DutyTitle, DomainError> = DutyTitle::new("");
    assert!(matches!(result, Err(DomainError::InvalidDutyTitle(_))));
}

#[test]
fn test_duty_title_retirement_sentinel_is_exact() {
    let retired: DutyTitle = DutyTitle::new(RETIRED_DUTY_TITLE).unwrap();
    assert!(retired.is_retirement());

    let mixed_case: DutyTitle = DutyTitle::new("Retired").unwrap();
    assert!(!mixed_case.is_retirement());

    let ordinary: DutyTitle = DutyTitle::new("Commander").unwrap();
    assert!(!ordinary.is_retirement());
}

#[test]
fn test_duty_start_parses_calendar_date() {
    let start: DutyStart = DutyStart::parse("2020-01-01").unwrap();
    assert_eq!(start.date(), date!(2020 - 01 - 01));
}

#[test]
fn test_duty_start_parses_date_time_and_truncates() {
    let start: DutyStart = DutyStart::parse("2020-01-01T14:30:00").unwrap();
    assert_eq!(start.date(), date!(2020 - 01 - 01));
}

#[test]
fn test_duty_start_rejects_garbage() {
    let result: Result<DutyStart, DomainError> = DutyStart::parse("not-a-date");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_duty_start_rejects_empty_string() {
    let result: Result<DutyStart, DomainError> = DutyStart::parse("");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_duty_start_prior_day_crosses_year_boundary() {
    let start: DutyStart = DutyStart::parse("2021-01-01").unwrap();
    assert_eq!(start.prior_day().unwrap(), date!(2020 - 12 - 31));
}

#[test]
fn test_duty_start_prior_day_overflows_at_minimum_date() {
    let start: DutyStart = DutyStart::from_date(Date::MIN);
    assert!(matches!(
        start.prior_day(),
        Err(DomainError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_duty_start_midnight_matches_recorded_date() {
    let start: DutyStart = DutyStart::parse("2020-01-01").unwrap();
    assert!(start.matches_recorded_start(date!(2020 - 01 - 01)));
    assert!(!start.matches_recorded_start(date!(2020 - 01 - 02)));
}

#[test]
fn test_duty_start_with_time_of_day_misses_recorded_date() {
    // A recorded start compares as midnight, so a submitted time-of-day
    // component slips past the duplicate comparison.
    let start: DutyStart = DutyStart::parse("2020-01-01T14:30:00").unwrap();
    assert!(!start.matches_recorded_start(date!(2020 - 01 - 01)));
}
