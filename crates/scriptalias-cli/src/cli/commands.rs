//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("scriptalias")
        .about("Generate script alias declarations from compiled modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
}

/// Generate alias declarations for one module.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate alias declarations for a compiled module")
        .after_help(
            r#"EXAMPLES:
  scriptalias generate tools/Cake.Tools.dll
  scriptalias generate tools/Cake.Tools.dll --verify --format json
  scriptalias generate tools/Cake.Tools.dll --format source --no-qualify -o aliases.cake"#,
        )
        .arg(module_arg())
        .arg(verify_arg())
        .arg(format_arg())
        .arg(no_qualify_arg())
        .arg(indent_arg())
        .arg(context_arg())
        .arg(output_arg())
}
