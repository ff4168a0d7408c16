// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `people` — Person rows and the person/detail joined projection
//! - `duties` — Astronaut duty history and detail records
//! - `log_entries` — Process-log rows

pub mod duties;
pub mod log_entries;
pub mod people;
