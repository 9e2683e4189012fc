mod cli;
mod commands;

use cli::{AstParams, CheckParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
