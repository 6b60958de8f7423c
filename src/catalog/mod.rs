// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model cataloging
//!
//! Classifies fetched items into a fixed set of categories, aggregates
//! them per run, and renders the plain-text report.

pub mod classify;
pub mod report;
pub mod result;

pub use classify::{training_data_files, Category};
pub use report::write_report;
pub use result::CategorizedResult;
