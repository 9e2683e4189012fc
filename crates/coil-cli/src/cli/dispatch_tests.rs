//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::commands::{ast_command, check_command, tokens_command};
use super::*;

#[test]
fn ast_extracts_positional_source() {
    let m = ast_command()
        .try_get_matches_from(["ast", "app.py"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("app.py")));
    assert_eq!(params.source_text, None);
    assert_eq!(params.mode, "module");
    assert!(!params.json);
}

#[test]
fn ast_extracts_inline_source_and_flags() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-s", "x = 1", "--json", "--mode", "eval"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.source_text.as_deref(), Some("x = 1"));
    assert_eq!(params.mode, "eval");
    assert!(params.json);
}

#[test]
fn ast_rejects_unknown_mode() {
    let result = ast_command().try_get_matches_from(["ast", "app.py", "--mode", "exec"]);
    assert!(result.is_err());
}

#[test]
fn check_extracts_python_version() {
    let m = check_command()
        .try_get_matches_from(["check", "app.py", "--python-version", "3.7"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.python_version.as_deref(), Some("3.7"));
}

#[test]
fn color_flag_parses_all_choices() {
    for (value, colorize) in [("always", true), ("never", false)] {
        let m = tokens_command()
            .try_get_matches_from(["tokens", "app.py", "--color", value])
            .unwrap();
        let params = TokensParams::from_matches(&m);
        assert_eq!(params.color.should_colorize(), colorize);
    }
}

#[test]
fn tokens_rejects_ast_only_flags() {
    let result = tokens_command().try_get_matches_from(["tokens", "app.py", "--json"]);
    assert!(result.is_err());
}
