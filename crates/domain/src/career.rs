// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Career-record update rules.
//!
//! A person's career record is a denormalized snapshot of their most recent
//! rank, duty title, and career span, derived from their duty history. It
//! exists if and only if the person has at least one duty assignment, and it
//! is mutated in place (never recreated) on every new assignment.
//!
//! The rules applied when a new duty arrives:
//!
//! - No record yet: the career starts at the new duty's start date. If the
//!   duty is the retirement sentinel, the career also ends on that same
//!   date.
//! - Record exists: the rank and title are overwritten; the career start
//!   date is untouched. If the duty is the retirement sentinel, the career
//!   ends the day before the new start date. A career end date, once set,
//!   is never cleared; reassigning a retired astronaut leaves it in place.

use crate::error::DomainError;
use crate::types::{DutyStart, DutyTitle, Rank};
use serde::{Deserialize, Serialize};
use time::Date;

/// Denormalized snapshot of a person's current astronaut status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    /// The rank of the most recent duty assignment.
    pub current_rank: Rank,
    /// The title of the most recent duty assignment.
    pub current_duty_title: DutyTitle,
    /// The date the career began.
    pub career_start_date: Date,
    /// The date the career ended, if a retirement has been recorded.
    pub career_end_date: Option<Date>,
}

/// Computes the career record that results from a new duty assignment.
///
/// # Arguments
///
/// * `existing` - The person's current career record, if one exists
/// * `rank` - The rank of the new duty
/// * `duty_title` - The title of the new duty
/// * `duty_start` - The start of the new duty
///
/// # Returns
///
/// The career record to store. When `existing` is `None` the result is a
/// fresh record to insert; otherwise it replaces the existing one.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the retirement end date
/// cannot be computed because the start date is the minimum representable
/// date.
pub fn apply_duty_assignment(
    existing: Option<&CareerRecord>,
    rank: &Rank,
    duty_title: &DutyTitle,
    duty_start: &DutyStart,
) -> Result<CareerRecord, DomainError> {
    match existing {
        None => Ok(CareerRecord {
            current_rank: rank.clone(),
            current_duty_title: duty_title.clone(),
            career_start_date: duty_start.date(),
            // Rule: a career that begins retired ends the day it begins
            career_end_date: if duty_title.is_retirement() {
                Some(duty_start.date())
            } else {
                None
            },
        }),
        Some(record) => {
            let career_end_date: Option<Date> = if duty_title.is_retirement() {
                Some(duty_start.prior_day()?)
            } else {
                // Rule: an end date is never cleared by a later assignment
                record.career_end_date
            };
            Ok(CareerRecord {
                current_rank: rank.clone(),
                current_duty_title: duty_title.clone(),
                career_start_date: record.career_start_date,
                career_end_date,
            })
        }
    }
}
