//! Tests for resolve and sources.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["opurl", "resolve"]) {
        CliCommand::Resolve { base_url, source } => {
            assert!(base_url.is_none());
            assert!(source.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_with_source_containing_space() {
    match parse(&["opurl", "resolve", "--source", "Amazon CloudFront"]) {
        CliCommand::Resolve { source, .. } => {
            assert_eq!(source.as_deref(), Some("Amazon CloudFront"))
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_base_url() {
    match parse(&[
        "opurl",
        "resolve",
        "--base-url",
        "https://mirror.example/check",
        "--source",
        "CacheFly",
    ]) {
        CliCommand::Resolve { base_url, source } => {
            assert_eq!(base_url.as_deref(), Some("https://mirror.example/check"));
            assert_eq!(source.as_deref(), Some("CacheFly"));
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_sources() {
    match parse(&["opurl", "sources"]) {
        CliCommand::Sources { base_url } => assert!(base_url.is_none()),
        _ => panic!("expected Sources"),
    }
    match parse(&["opurl", "sources", "--base-url", "file:///tmp/m.json"]) {
        CliCommand::Sources { base_url } => {
            assert_eq!(base_url.as_deref(), Some("file:///tmp/m.json"))
        }
        _ => panic!("expected Sources"),
    }
}
