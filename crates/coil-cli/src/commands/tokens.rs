//! Dump the structural token stream.

use std::path::PathBuf;

use coil_lib::lexer::{TokenKind, tokenize};

use super::input;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let source = input::load_source(args.source_text.as_deref(), args.source_path.as_deref());
    let stream = tokenize(&source);

    for tok in &stream.tokens {
        let span = tok.span;
        match tok.kind {
            TokenKind::Newline
            | TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::EndMarker
            | TokenKind::ErrorToken => {
                println!("{:>5}..{:<5} {}", span.start, span.end, tok.kind.name());
            }
            _ => {
                println!(
                    "{:>5}..{:<5} {} {:?}",
                    span.start,
                    span.end,
                    tok.kind.name(),
                    tok.text(&source)
                );
            }
        }
    }

    if let Some(err) = &stream.error {
        let path = input::display_path(args.source_path.as_deref());
        let mut printer = err.printer().source(&source).colored(args.color);
        if let Some(ref p) = path {
            printer = printer.path(p);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1);
    }
}
