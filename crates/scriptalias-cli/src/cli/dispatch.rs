//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use scriptalias_codegen::EmitConfig;

use super::OutputFormat;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub module: PathBuf,
    pub verify: bool,
    pub format: OutputFormat,
    pub qualify: bool,
    pub indent: usize,
    pub context: String,
    pub output: Option<PathBuf>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module: m
                .get_one::<PathBuf>("module")
                .cloned()
                .unwrap_or_default(),
            verify: m.get_flag("verify"),
            format: m
                .get_one::<String>("format")
                .and_then(|f| OutputFormat::from_name(f))
                .unwrap_or_default(),
            qualify: !m.get_flag("no_qualify"),
            indent: m.get_one::<u8>("indent").map_or(4, |&n| usize::from(n)),
            context: m
                .get_one::<String>("context")
                .cloned()
                .unwrap_or_else(|| "Context".to_string()),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            module: p.module,
            verify: p.verify,
            format: p.format,
            config: EmitConfig::new()
                .qualify_types(p.qualify)
                .indent(p.indent)
                .context_name(p.context),
            output: p.output,
        }
    }
}
