// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod duty_tests;

use crate::Persistence;
use acts_domain::{DutyStart, DutyTitle, PersonName, Rank};
use time::{Date, Month};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Valid in-memory database")
}

pub fn create_test_name(name: &str) -> PersonName {
    PersonName::new(name).expect("Valid test name")
}

pub fn create_test_rank(rank: &str) -> Rank {
    Rank::new(rank).expect("Valid test rank")
}

pub fn create_test_duty_title(title: &str) -> DutyTitle {
    DutyTitle::new(title).expect("Valid test duty title")
}

/// Creates a duty start at midnight on the given calendar date.
pub fn create_test_start(year: i32, month: Month, day: u8) -> DutyStart {
    DutyStart::from_date(Date::from_calendar_date(year, month, day).expect("Valid test date"))
}
