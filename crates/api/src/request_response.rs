// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are the JSON wire contract. Field names serialize in
//! camelCase; dates travel as ISO 8601 strings.

/// A person joined with their current astronaut status.
///
/// People with no duty history carry empty rank/title strings and null
/// career dates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAstronautInfo {
    /// The person's generated identifier.
    pub person_id: i64,
    /// The person's unique name.
    pub name: String,
    /// The current rank, or an empty string if the person has no astronaut record.
    pub current_rank: String,
    /// The current duty title, or an empty string if the person has no astronaut record.
    pub current_duty_title: String,
    /// The career start date (ISO 8601), if an astronaut record exists.
    pub career_start_date: Option<String>,
    /// The career end date (ISO 8601), set once the person retires.
    pub career_end_date: Option<String>,
}

/// A single duty assignment in a person's history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronautDutyInfo {
    /// The duty row's generated identifier.
    pub id: i64,
    /// The identifier of the person this duty belongs to.
    pub person_id: i64,
    /// The rank held during this duty.
    pub rank: String,
    /// The duty title.
    pub duty_title: String,
    /// The duty start date (ISO 8601).
    pub duty_start_date: String,
    /// The duty end date (ISO 8601), or null for the open duty.
    pub duty_end_date: Option<String>,
}

/// API response for listing all people.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPeopleResponse {
    /// All people, each joined with their current astronaut status.
    pub people: Vec<PersonAstronautInfo>,
}

/// API response for looking up one person by name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPersonByNameResponse {
    /// The matched person.
    pub person: PersonAstronautInfo,
}

/// API request to create a new person.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    /// The person's name (must be unique).
    pub name: String,
}

/// API response for a successful person creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonResponse {
    /// The generated identifier of the new person.
    pub id: i64,
}

/// API request to rename an existing person.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePersonRequest {
    /// The name to change to (must be unique).
    pub new_name: String,
}

/// API response for a successful rename.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenamePersonResponse {
    /// The identifier of the renamed person.
    pub id: i64,
}

/// API response for a person's duty history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAstronautDutiesResponse {
    /// The person the history belongs to.
    pub person: PersonAstronautInfo,
    /// All duty assignments, most recent start first.
    pub astronaut_duties: Vec<AstronautDutyInfo>,
}

/// API request to record a new duty assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAstronautDutyRequest {
    /// The person's name.
    pub name: String,
    /// The rank of the new duty.
    pub rank: String,
    /// The title of the new duty.
    pub duty_title: String,
    /// The duty start as an ISO 8601 date or date-time string.
    pub duty_start_date: String,
}

/// API response for a successful duty assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAstronautDutyResponse {
    /// The generated identifier of the new duty row.
    pub id: i64,
}
