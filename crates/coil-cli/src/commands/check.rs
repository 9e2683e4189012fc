//! Check a source for syntax errors.

use std::path::PathBuf;

use coil_lib::{Error, parse};

use super::input;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub mode: String,
    pub python_version: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = input::load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let options = input::parse_options(args.python_version.as_deref());

    match parse(&source, input::input_type(&args.mode), &options) {
        // Silent on success (like cargo check).
        Ok(_) => {}
        Err(Error::Parse(err)) => {
            let path = input::display_path(args.source_path.as_deref());
            let mut printer = err.printer().source(&source).colored(args.color);
            if let Some(ref p) = path {
                printer = printer.path(p);
            }
            eprintln!("{}", printer.render());
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
