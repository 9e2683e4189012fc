mod engine_tests;
mod error_tests;
mod expression_tests;

use crate::{ParseOptions, parse_expression, parse_module};

/// Parses a module and renders the AST dump, panicking on failure.
fn dump(source: &str) -> String {
    match parse_module(source, &ParseOptions::default()) {
        Ok(module) => module.dump(),
        Err(err) => panic!("parse failed: {err}\nsource: {source:?}"),
    }
}

/// Parses in eval mode and renders the AST dump.
fn dump_expr(source: &str) -> String {
    match parse_expression(source, &ParseOptions::default()) {
        Ok(module) => module.dump(),
        Err(err) => panic!("parse failed: {err}\nsource: {source:?}"),
    }
}

/// Parses a module expecting failure; returns the error display.
fn err(source: &str) -> String {
    match parse_module(source, &ParseOptions::default()) {
        Ok(module) => panic!("expected failure, got:\n{}", module.dump()),
        Err(err) => err.to_string(),
    }
}
