// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod types;

use crate::{DutyTitle, Rank};

pub fn create_test_rank() -> Rank {
    Rank::new("1LT").expect("Valid test rank")
}

pub fn create_test_duty_title() -> DutyTitle {
    DutyTitle::new("Commander").expect("Valid test duty title")
}
