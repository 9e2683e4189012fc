//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("coil")
        .about("PEG parser for Python source with CPython-compatible errors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
}

/// Parse a source and print its AST.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Parse Python source and print its AST")
        .override_usage(
            "\
  coil ast <FILE>
  coil ast -s <TEXT>
  coil ast <FILE> --json",
        )
        .after_help(
            r#"EXAMPLES:
  coil ast app.py                       # indented AST tree
  coil ast app.py --json                # AST as JSON
  coil ast -s 'x = 1'                   # inline source
  coil ast -s '1 + 2' --mode eval       # expression input
  coil ast app.py --python-version 3.7  # reject walrus etc."#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(mode_arg())
        .arg(python_version_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Parse a source and report the diagnostic, if any.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check Python source for syntax errors (silent on success)")
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(mode_arg())
        .arg(python_version_arg())
        .arg(color_arg())
}

/// Dump the structural token stream.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Dump the token stream, including INDENT/DEDENT/NEWLINE")
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(color_arg())
}
