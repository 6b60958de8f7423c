// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! civicat - fetch and categorize a user's Civitai models
//!
//! Entry point for the civicat CLI.

use clap::Parser;

use civicat::api::ModelFetcher;
use civicat::catalog;
use civicat::cli::Cli;
use civicat::error::Result;
use civicat::errorlog::ErrorLog;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let token = cli.token.unwrap_or_default();
    let username = cli.username.unwrap_or_default();

    // Report and error log land next to where the tool is run
    let output_dir = std::env::current_dir()?;
    let mut errors = ErrorLog::open_in(&output_dir)?;

    let fetcher = ModelFetcher::new(token, username.clone());
    let result = fetcher.fetch_all(&mut errors).await?;

    let report_path = catalog::write_report(&output_dir, &username, &result)?;
    errors.close();

    println!("Report written to {}", report_path.display());
    Ok(())
}
