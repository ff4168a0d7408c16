// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for person and duty operations.
//!
//! Each handler translates its wire request into domain types, executes the
//! operation against persistence, and translates the outcome back into the
//! API contract. Expected persistence outcomes (unknown names, duplicate
//! rejections) get operation-specific messages; anything unexpected becomes
//! an internal error.

use acts_domain::{DutyStart, DutyTitle, PersonName, Rank};
use acts_persistence::{AstronautDutyData, Persistence, PersistenceError, PersonAstronautData};
use tracing::debug;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::process_log::ProcessLog;
use crate::request_response::{
    AstronautDutyInfo, CreateAstronautDutyRequest, CreateAstronautDutyResponse,
    CreatePersonRequest, CreatePersonResponse, GetAstronautDutiesResponse, GetPeopleResponse,
    GetPersonByNameResponse, PersonAstronautInfo, RenamePersonRequest, RenamePersonResponse,
};

fn to_person_info(data: PersonAstronautData) -> PersonAstronautInfo {
    PersonAstronautInfo {
        person_id: data.person_id,
        name: data.name,
        current_rank: data.current_rank.unwrap_or_default(),
        current_duty_title: data.current_duty_title.unwrap_or_default(),
        career_start_date: data.career_start_date,
        career_end_date: data.career_end_date,
    }
}

fn to_duty_info(data: AstronautDutyData) -> AstronautDutyInfo {
    AstronautDutyInfo {
        id: data.astronaut_duty_id,
        person_id: data.person_id,
        rank: data.rank,
        duty_title: data.duty_title,
        duty_start_date: data.duty_start_date,
        duty_end_date: data.duty_end_date,
    }
}

/// Maps persistence outcomes of person mutations to the API contract.
fn person_mutation_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicatePerson(name) => ApiError::DuplicateResource {
            message: format!("Duplicate astronaut name '{name}'"),
        },
        PersistenceError::PersonNotFound(name) => ApiError::ResourceNotFound {
            message: format!("No person found with name '{name}'."),
        },
        other => translate_persistence_error(other),
    }
}

/// Maps persistence outcomes of the duty-assignment transaction to the API contract.
fn duty_assignment_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::PersonNotFound(name) => ApiError::ResourceNotFound {
            message: format!("No astronaut found with name '{name}'."),
        },
        PersistenceError::DuplicateDuty => ApiError::DuplicateResource {
            message: String::from("Duplicate astronaut duty."),
        },
        other => translate_persistence_error(other),
    }
}

/// Lists all people joined with their current astronaut status.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
///
/// # Errors
///
/// Returns an error if the read fails.
pub fn get_people(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
) -> Result<GetPeopleResponse, ApiError> {
    log.initiate("GetPeople", &[]);
    debug!("Handling GetPeople");

    let people: Vec<PersonAstronautData> = persistence
        .get_person_astronauts()
        .map_err(translate_persistence_error)?;

    Ok(GetPeopleResponse {
        people: people.into_iter().map(to_person_info).collect(),
    })
}

/// Looks up a single person by exact name.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
/// * `name` - The person's name (exact, case-sensitive)
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no person has that name, or an
/// error if the read fails.
pub fn get_person_by_name(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
    name: &str,
) -> Result<GetPersonByNameResponse, ApiError> {
    log.initiate("GetPersonByName", &[("name", name)]);
    debug!("Handling GetPersonByName for '{}'", name);

    let person: PersonAstronautData = persistence
        .get_person_astronaut_by_name(name)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: format!("No person found with name '{name}'."),
        })?;

    Ok(GetPersonByNameResponse {
        person: to_person_info(person),
    })
}

/// Creates a new person.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
/// * `request` - The creation request
///
/// # Returns
///
/// The generated ID of the new person.
///
/// # Errors
///
/// Returns `ApiError::DuplicateResource` if the name is already taken, or
/// `ApiError::InvalidInput` if the name fails validation.
pub fn create_person(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
    request: CreatePersonRequest,
) -> Result<CreatePersonResponse, ApiError> {
    log.initiate("CreatePerson", &[("name", &request.name)]);
    debug!("Handling CreatePerson for '{}'", request.name);

    let name: PersonName = PersonName::new(&request.name).map_err(translate_domain_error)?;

    let person_id: i64 = persistence
        .create_person(&name)
        .map_err(person_mutation_error)?;

    Ok(CreatePersonResponse { id: person_id })
}

/// Renames an existing person.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
/// * `current_name` - The person's current name
/// * `request` - The rename request carrying the new name
///
/// # Returns
///
/// The ID of the renamed person.
///
/// # Errors
///
/// Returns `ApiError::DuplicateResource` if the new name is already taken,
/// `ApiError::ResourceNotFound` if no person has the current name, or
/// `ApiError::InvalidInput` if either name fails validation.
pub fn rename_person(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
    current_name: &str,
    request: RenamePersonRequest,
) -> Result<RenamePersonResponse, ApiError> {
    log.initiate(
        "RenamePerson",
        &[("name", current_name), ("newName", &request.new_name)],
    );
    debug!(
        "Handling RenamePerson from '{}' to '{}'",
        current_name, request.new_name
    );

    let current: PersonName = PersonName::new(current_name).map_err(translate_domain_error)?;
    let new: PersonName = PersonName::new(&request.new_name).map_err(translate_domain_error)?;

    let person_id: i64 = persistence
        .rename_person(&current, &new)
        .map_err(person_mutation_error)?;

    Ok(RenamePersonResponse { id: person_id })
}

/// Retrieves a person's full duty history.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
/// * `name` - The person's name (exact, case-sensitive)
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no person has that name, or an
/// error if the read fails.
pub fn get_astronaut_duties_by_name(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
    name: &str,
) -> Result<GetAstronautDutiesResponse, ApiError> {
    log.initiate("GetAstronautDutiesByName", &[("name", name)]);
    debug!("Handling GetAstronautDutiesByName for '{}'", name);

    let person: PersonAstronautData = persistence
        .get_person_astronaut_by_name(name)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            message: format!("No astronaut found with name '{name}'."),
        })?;

    let duties: Vec<AstronautDutyData> = persistence
        .get_astronaut_duties(person.person_id)
        .map_err(translate_persistence_error)?;

    Ok(GetAstronautDutiesResponse {
        person: to_person_info(person),
        astronaut_duties: duties.into_iter().map(to_duty_info).collect(),
    })
}

/// Records a new duty assignment.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `log` - The process log for this request
/// * `request` - The duty-assignment request
///
/// # Returns
///
/// The generated ID of the new duty row.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the person is unknown,
/// `ApiError::DuplicateResource` if the person already holds a duty with this title
/// and start date, or `ApiError::InvalidInput` if any field fails
/// validation.
pub fn create_astronaut_duty(
    persistence: &mut Persistence,
    log: &mut ProcessLog,
    request: CreateAstronautDutyRequest,
) -> Result<CreateAstronautDutyResponse, ApiError> {
    log.initiate(
        "CreateAstronautDuty",
        &[
            ("name", &request.name),
            ("rank", &request.rank),
            ("dutyTitle", &request.duty_title),
            ("dutyStartDate", &request.duty_start_date),
        ],
    );
    debug!(
        "Handling CreateAstronautDuty for '{}' ({} {})",
        request.name, request.rank, request.duty_title
    );

    let name: PersonName = PersonName::new(&request.name).map_err(translate_domain_error)?;
    let rank: Rank = Rank::new(&request.rank).map_err(translate_domain_error)?;
    let duty_title: DutyTitle =
        DutyTitle::new(&request.duty_title).map_err(translate_domain_error)?;
    let duty_start: DutyStart =
        DutyStart::parse(&request.duty_start_date).map_err(translate_domain_error)?;

    let duty_id: i64 = persistence
        .create_astronaut_duty(&name, &rank, &duty_title, &duty_start)
        .map_err(duty_assignment_error)?;

    Ok(CreateAstronautDutyResponse { id: duty_id })
}
