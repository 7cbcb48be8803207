//! Shared helpers for integration tests

#![allow(dead_code)]


use haproxy_config::parser::ast::ConfigurationFile;
use haproxy_config::{ParseFailure, parse};

/// Parse a fixture that must be valid, printing the failure otherwise
pub fn parse_ok(source: &str) -> ConfigurationFile {
    match parse(source) {
        Ok(parse) => parse.tree(),
        Err(failure) => panic!("fixture failed to parse: {failure}\n{source}"),
    }
}

/// Parse input that must be rejected
pub fn parse_err(source: &str) -> ParseFailure {
    match parse(source) {
        Ok(parse) => panic!("expected a parse failure, got:\n{:#?}", parse.syntax()),
        Err(failure) => failure,
    }
}
