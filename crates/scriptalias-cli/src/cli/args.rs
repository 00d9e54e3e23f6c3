//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use scriptalias_codegen::EmitConfig;
use scriptalias_core::identifier::{is_identifier, is_keyword};

/// Compiled module to generate aliases for (positional).
pub fn module_arg() -> Arg {
    Arg::new("module")
        .value_name("MODULE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Compiled module to scan for aliases")
}

/// Validate discovered aliases (--verify).
pub fn verify_arg() -> Arg {
    Arg::new("verify")
        .long("verify")
        .action(ArgAction::SetTrue)
        .help("Validate discovered aliases before generating")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("script")
        .value_parser(["script", "source", "json"])
        .help("Output format")
}

/// Write type names without namespaces (--no-qualify).
pub fn no_qualify_arg() -> Arg {
    Arg::new("no_qualify")
        .long("no-qualify")
        .action(ArgAction::SetTrue)
        .help("Don't namespace-qualify type names (rely on using directives)")
}

/// Indentation width (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("N")
        .default_value("4")
        .value_parser(value_parser!(u8).range(0..=EmitConfig::MAX_INDENT as i64))
        .help("Spaces per indentation level")
}

/// Receiver forwarded to aliased members (--context).
pub fn context_arg() -> Arg {
    Arg::new("context")
        .long("context")
        .value_name("NAME")
        .default_value("Context")
        .value_parser(parse_context_name)
        .help("Script host member passed as the alias receiver")
}

fn parse_context_name(value: &str) -> Result<String, String> {
    if is_identifier(value) && !is_keyword(value) {
        Ok(value.to_string())
    } else {
        Err(format!("`{value}` is not a valid identifier"))
    }
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to a file instead of stdout")
}
