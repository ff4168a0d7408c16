// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! All mutations use Diesel DSL, with the `SQLite`-specific
//! `last_insert_rowid()` helper imported from the `sqlite` module. Each
//! mutation that touches more than one row runs inside a database
//! transaction.
//!
//! ## Module Organization
//!
//! - `people` — Person creation and renaming
//! - `duties` — The atomic duty-assignment transaction
//! - `log_entries` — Process-log inserts
//! - `seed` — Demo fixture loading

pub mod duties;
pub mod log_entries;
pub mod people;
pub mod seed;
