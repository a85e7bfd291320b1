//! Tests for process, info, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_process_without_vars() {
    match parse(&["opurl", "process"]) {
        CliCommand::Process { vars } => assert!(vars.is_empty()),
        _ => panic!("expected Process"),
    }
}

#[test]
fn cli_parse_process_vars() {
    match parse(&["opurl", "process", "source=CacheFly", "base_url=https://x.example"]) {
        CliCommand::Process { vars } => {
            assert_eq!(vars, ["source=CacheFly", "base_url=https://x.example"]);
        }
        _ => panic!("expected Process"),
    }
}

#[test]
fn cli_parse_info() {
    assert!(matches!(parse(&["opurl", "info"]), CliCommand::Info));
}

#[test]
fn cli_parse_completions() {
    match parse(&["opurl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["opurl", "man"]), CliCommand::Man));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["opurl", "download"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["opurl"]).is_err());
}
