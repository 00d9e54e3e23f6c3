//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::generate_command;
use crate::commands::generate::GenerateArgs;

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "Tools.dll"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.module, PathBuf::from("Tools.dll"));
    assert!(!params.verify);
    assert_eq!(params.format, OutputFormat::Script);
    assert!(params.qualify);
    assert_eq!(params.indent, 4);
    assert_eq!(params.context, "Context");
    assert_eq!(params.output, None);
}

#[test]
fn generate_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "lib/Tools.dll",
            "--verify",
            "--format",
            "json",
            "--no-qualify",
            "--indent",
            "2",
            "--context",
            "Host",
            "-o",
            "aliases.json",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.module, PathBuf::from("lib/Tools.dll"));
    assert!(params.verify);
    assert_eq!(params.format, OutputFormat::Json);
    assert!(!params.qualify);
    assert_eq!(params.indent, 2);
    assert_eq!(params.context, "Host");
    assert_eq!(params.output, Some(PathBuf::from("aliases.json")));

    let args: GenerateArgs = params.into();
    assert_eq!(args.module, PathBuf::from("lib/Tools.dll"));
    assert!(args.verify);
}

#[test]
fn module_is_required() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn unknown_format_is_rejected() {
    let result =
        generate_command().try_get_matches_from(["generate", "Tools.dll", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn indent_must_be_a_number() {
    let result =
        generate_command().try_get_matches_from(["generate", "Tools.dll", "--indent", "wide"]);
    assert!(result.is_err());
}

#[test]
fn indent_is_bounded() {
    let m = generate_command()
        .try_get_matches_from(["generate", "Tools.dll", "--indent", "16"])
        .unwrap();
    assert_eq!(GenerateParams::from_matches(&m).indent, 16);

    for value in ["17", "18446744073709551615", "-1"] {
        let result =
            generate_command().try_get_matches_from(["generate", "Tools.dll", "--indent", value]);
        assert!(result.is_err(), "--indent {value} was accepted");
    }
}

#[test]
fn context_must_be_an_identifier() {
    let m = generate_command()
        .try_get_matches_from(["generate", "Tools.dll", "--context", "_host"])
        .unwrap();
    assert_eq!(GenerateParams::from_matches(&m).context, "_host");

    for value in ["my ctx", "", "1st", "Context()", "class"] {
        let result =
            generate_command().try_get_matches_from(["generate", "Tools.dll", "--context", value]);
        assert!(result.is_err(), "--context {value:?} was accepted");
    }
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["scriptalias"]);
    assert!(result.is_err());

    let m = build_cli()
        .try_get_matches_from(["scriptalias", "generate", "Tools.dll"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("generate"));
}

#[test]
fn format_names() {
    assert_eq!(OutputFormat::from_name("script"), Some(OutputFormat::Script));
    assert_eq!(OutputFormat::from_name("source"), Some(OutputFormat::Source));
    assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name("yaml"), None);
}
