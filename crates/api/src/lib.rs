// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod process_log;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    create_astronaut_duty, create_person, get_astronaut_duties_by_name, get_people,
    get_person_by_name, rename_person,
};
pub use process_log::ProcessLog;
pub use request_response::{
    AstronautDutyInfo, CreateAstronautDutyRequest, CreateAstronautDutyResponse,
    CreatePersonRequest, CreatePersonResponse, GetAstronautDutiesResponse, GetPeopleResponse,
    GetPersonByNameResponse, PersonAstronautInfo, RenamePersonRequest, RenamePersonResponse,
};
