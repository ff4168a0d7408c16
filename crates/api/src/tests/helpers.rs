// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use acts_persistence::Persistence;

use crate::process_log::ProcessLog;
use crate::request_response::{CreateAstronautDutyRequest, CreatePersonRequest};
use crate::{create_astronaut_duty, create_person};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_log() -> ProcessLog {
    ProcessLog::new()
}

/// Creates a person through the handler and returns the new ID.
pub fn add_person(persistence: &mut Persistence, name: &str) -> i64 {
    let mut log: ProcessLog = ProcessLog::new();
    let request: CreatePersonRequest = CreatePersonRequest {
        name: String::from(name),
    };
    create_person(persistence, &mut log, request)
        .expect("Failed to create person")
        .id
}

pub fn duty_request(
    name: &str,
    rank: &str,
    duty_title: &str,
    duty_start_date: &str,
) -> CreateAstronautDutyRequest {
    CreateAstronautDutyRequest {
        name: String::from(name),
        rank: String::from(rank),
        duty_title: String::from(duty_title),
        duty_start_date: String::from(duty_start_date),
    }
}

/// Records a duty assignment through the handler and returns the new ID.
pub fn add_duty(
    persistence: &mut Persistence,
    name: &str,
    rank: &str,
    duty_title: &str,
    duty_start_date: &str,
) -> i64 {
    let mut log: ProcessLog = ProcessLog::new();
    create_astronaut_duty(
        persistence,
        &mut log,
        duty_request(name, rank, duty_title, duty_start_date),
    )
    .expect("Failed to create astronaut duty")
    .id
}
