//! Shared input handling for the commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use coil_lib::{InputType, ParseOptions};

/// Load source code from inline text, a file, or stdin (`-`).
pub fn load_source(source_text: Option<&str>, source_path: Option<&Path>) -> String {
    if let Some(text) = source_text {
        return text.to_owned();
    }
    if let Some(path) = source_path {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {}", e);
                std::process::exit(1);
            }
            return buf;
        }
        return fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("error: failed to read '{}': {}", path.display(), e);
            std::process::exit(1);
        });
    }
    eprintln!("error: source required (FILE or -s TEXT)");
    std::process::exit(1);
}

/// Map a `--mode` value to the parser's start symbol.
pub fn input_type(mode: &str) -> InputType {
    match mode {
        "eval" => InputType::Eval,
        "single" => InputType::Interactive,
        // clap's value_parser restricts the choices.
        _ => InputType::Module,
    }
}

/// Build [`ParseOptions`] from the optional `--python-version` flag.
pub fn parse_options(python_version: Option<&str>) -> ParseOptions {
    let mut options = ParseOptions::default();
    if let Some(version) = python_version {
        options.feature_version = feature_version(version).unwrap_or_else(|| {
            eprintln!("error: invalid Python version '{}' (expected e.g. 3.8)", version);
            std::process::exit(1);
        });
    }
    options
}

/// Parse "3.N" (or bare "N") into the minor version number.
fn feature_version(version: &str) -> Option<u32> {
    let minor = match version.split_once('.') {
        Some(("3", minor)) => minor,
        Some(_) => return None,
        None => version,
    };
    minor.parse().ok()
}

/// Path string for diagnostics, when the source came from a real file.
pub fn display_path(source_path: Option<&Path>) -> Option<String> {
    let path = source_path?;
    if path.as_os_str() == "-" {
        return None;
    }
    Some(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings() {
        assert_eq!(feature_version("3.8"), Some(8));
        assert_eq!(feature_version("3.12"), Some(12));
        assert_eq!(feature_version("8"), Some(8));
        assert_eq!(feature_version("2.7"), None);
        assert_eq!(feature_version("3.x"), None);
    }

    #[test]
    fn modes_map_to_start_symbols() {
        assert_eq!(input_type("module"), InputType::Module);
        assert_eq!(input_type("eval"), InputType::Eval);
        assert_eq!(input_type("single"), InputType::Interactive);
    }
}
