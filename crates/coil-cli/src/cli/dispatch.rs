//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::tokens::TokensArgs;

pub struct AstParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub mode: String,
    pub python_version: Option<String>,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            mode: mode(m),
            python_version: m.get_one::<String>("python_version").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            mode: p.mode,
            python_version: p.python_version,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub mode: String,
    pub python_version: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            mode: mode(m),
            python_version: m.get_one::<String>("python_version").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            mode: p.mode,
            python_version: p.python_version,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            color: p.color.should_colorize(),
        }
    }
}

fn mode(m: &ArgMatches) -> String {
    m.get_one::<String>("mode")
        .cloned()
        .unwrap_or_else(|| "module".to_string())
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
