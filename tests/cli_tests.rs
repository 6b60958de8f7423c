// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use civicat::cli::Cli;

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["civicat"]).expect("Valid command parsing");
    assert!(cli.token.is_none());
    assert!(cli.username.is_none());
}

#[test]
fn test_parse_token_and_username() {
    let cli = Cli::try_parse_from(["civicat", "--token", "tok", "--username", "alice"])
        .expect("Valid command parsing");
    assert_eq!(cli.token, Some("tok".to_string()));
    assert_eq!(cli.username, Some("alice".to_string()));
}

#[test]
fn test_parse_username_only() {
    let cli = Cli::try_parse_from(["civicat", "--username", "alice"])
        .expect("Valid command parsing");
    assert!(cli.token.is_none());
    assert_eq!(cli.username, Some("alice".to_string()));
}

#[test]
fn test_parse_rejects_unknown_flag() {
    let result = Cli::try_parse_from(["civicat", "--nsfw"]);
    assert!(result.is_err());
}
