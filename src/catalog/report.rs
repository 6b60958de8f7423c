// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Plain-text report writer
//!
//! Renders a completed [`CategorizedResult`] into `<username>.txt`: a
//! summary of per-category counts followed by a detailed listing with one
//! line per entry. The file is rewritten from scratch each run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::catalog::classify::Category;
use crate::catalog::result::CategorizedResult;
use crate::error::Result;

/// Write the report for one run and return its path.
/// An existing report for the same username is overwritten.
pub fn write_report(dir: &Path, username: &str, result: &CategorizedResult) -> Result<PathBuf> {
    let path = dir.join(format!("{}.txt", username));
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(out, "Summary:")?;
    writeln!(out, "Total - Count: {}", result.total())?;
    for category in Category::ALL {
        writeln!(
            out,
            "{} - Count: {}",
            category.display_name(),
            result.count(category)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Detailed Listing:")?;
    for category in Category::ALL {
        writeln!(
            out,
            "{} - Count: {}",
            category.display_name(),
            result.count(category)
        )?;
        if category == Category::Other {
            // Other carries the raw type alongside each name
            for (name, kind) in result.other_types() {
                writeln!(
                    out,
                    "{} - Item: {} - Type: {}",
                    category.display_name(),
                    name,
                    kind
                )?;
            }
        } else {
            for name in result.names(category) {
                writeln!(out, "{} - Item: {}", category.display_name(), name)?;
            }
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(path)
}
