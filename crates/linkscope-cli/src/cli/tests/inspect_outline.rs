//! Tests for inspect and outline subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use linkscope_core::render::OutputFormat;

#[test]
fn cli_parse_inspect() {
    match parse(&["linkscope", "inspect", "https://example.com/?a=1"]) {
        CliCommand::Inspect {
            url,
            format,
            max_depth,
        } => {
            assert_eq!(url, "https://example.com/?a=1");
            assert!(format.is_none());
            assert!(max_depth.is_none());
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_inspect_empty_url() {
    match parse(&["linkscope", "inspect", ""]) {
        CliCommand::Inspect { url, .. } => assert_eq!(url, ""),
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_inspect_format_and_depth() {
    match parse(&[
        "linkscope",
        "inspect",
        "https://example.com/",
        "--format",
        "html",
        "--max-depth",
        "3",
    ]) {
        CliCommand::Inspect {
            format, max_depth, ..
        } => {
            assert_eq!(format, Some(OutputFormat::Html));
            assert_eq!(max_depth, Some(3));
        }
        _ => panic!("expected Inspect with --format --max-depth"),
    }
}

#[test]
fn cli_parse_inspect_unknown_format_fails() {
    assert!(Cli::try_parse_from(["linkscope", "inspect", "x", "--format", "yaml"]).is_err());
}

#[test]
fn cli_parse_outline() {
    match parse(&["linkscope", "outline", "?a=1", "--format", "json"]) {
        CliCommand::Outline {
            url,
            format,
            max_depth,
        } => {
            assert_eq!(url, "?a=1");
            assert_eq!(format, Some(OutputFormat::Json));
            assert!(max_depth.is_none());
        }
        _ => panic!("expected Outline"),
    }
}
