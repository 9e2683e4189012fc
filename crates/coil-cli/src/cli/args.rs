//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same definition is reused across `ast`, `check` and `tokens`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to parse (positional). `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Python source file to parse ('-' for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Start symbol (--mode).
pub fn mode_arg() -> Arg {
    Arg::new("mode")
        .long("mode")
        .value_name("MODE")
        .default_value("module")
        .value_parser(["module", "eval", "single"])
        .help("Start symbol: whole file, lone expression, or one interactive statement")
}

/// Accepted language version (--python-version).
pub fn python_version_arg() -> Arg {
    Arg::new("python_version")
        .long("python-version")
        .value_name("3.N")
        .help("Reject syntax newer than this version (e.g. 3.8)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit the AST as JSON instead of the indented tree")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
