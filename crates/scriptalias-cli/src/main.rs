mod cli;
mod commands;
mod logging;

use cli::{GenerateParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
