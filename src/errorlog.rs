// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Run-scoped error log
//!
//! An explicitly constructed sink for per-item failures, opened once per
//! run and passed into the fetch loop. Appends across runs so earlier
//! failures stay visible.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;

/// File name of the error log, created next to the report
pub const ERROR_LOG_FILE: &str = "civicat_errors.log";

/// Append-only sink for per-item classification failures
pub struct ErrorLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl ErrorLog {
    /// Open (or create) the error log inside `dir`
    pub fn open_in(dir: &Path) -> Result<Self> {
        let path = dir.join(ERROR_LOG_FILE);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped record. A failing sink must not take the
    /// run down with it, so write errors are reported through tracing.
    pub fn record(&mut self, message: &str) {
        let line = format!(
            "{} - ERROR - {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            message
        );
        if let Err(e) = writeln!(self.writer, "{}", line) {
            tracing::warn!("Failed to write error log entry: {}", e);
        }
    }

    /// Flush buffered records and release the handle
    pub fn close(mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!("Failed to flush error log: {}", e);
        }
    }
}
