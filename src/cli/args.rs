// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::Parser;

/// civicat - fetch and categorize a user's Civitai models
#[derive(Parser, Debug)]
#[command(name = "civicat")]
#[command(version, about = "Fetch and categorize a user's Civitai models")]
pub struct Cli {
    /// Civitai API token
    #[arg(long)]
    pub token: Option<String>,

    /// Username whose models to fetch
    #[arg(long)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_flags() {
        let cli = Cli::parse_from(["civicat"]);
        assert!(cli.token.is_none());
        assert!(cli.username.is_none());
    }

    #[test]
    fn test_cli_token() {
        let cli = Cli::parse_from(["civicat", "--token", "abc123"]);
        assert_eq!(cli.token, Some("abc123".to_string()));
    }

    #[test]
    fn test_cli_username() {
        let cli = Cli::parse_from(["civicat", "--username", "alice"]);
        assert_eq!(cli.username, Some("alice".to_string()));
    }

    #[test]
    fn test_cli_both_flags() {
        let cli = Cli::parse_from(["civicat", "--token", "abc123", "--username", "alice"]);
        assert_eq!(cli.token, Some("abc123".to_string()));
        assert_eq!(cli.username, Some("alice".to_string()));
    }
}
