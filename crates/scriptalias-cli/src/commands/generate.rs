use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use scriptalias_codegen::{AliasGenerator, EmitConfig, GeneratedScript};

use crate::cli::OutputFormat;

pub struct GenerateArgs {
    pub module: PathBuf,
    pub verify: bool,
    pub format: OutputFormat,
    pub config: EmitConfig,
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) {
    tracing::debug!(
        module = %args.module.display(),
        verify = args.verify,
        format = ?args.format,
        "generate"
    );

    let script = AliasGenerator::local(&args.config)
        .generate(&args.module, args.verify)
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

    if script.is_empty() {
        eprintln!(
            "warning: module not found: {}; nothing generated",
            args.module.display()
        );
    }

    let output = render(&script, args.format).unwrap_or_else(|e| {
        eprintln!("error: failed to serialize result: {}", e);
        std::process::exit(1);
    });

    if let Some(ref path) = args.output {
        tracing::debug!(path = %path.display(), bytes = output.len(), "writing output");
        fs::write(path, &output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}

pub fn render(script: &GeneratedScript, format: OutputFormat) -> Result<String, serde_json::Error> {
    let output = match format {
        OutputFormat::Source => script.source().to_string(),
        OutputFormat::Script => {
            let mut out = script.render_references();
            out.push_str(&script.render_usings());
            if !out.is_empty() && !script.source().is_empty() {
                out.push('\n');
            }
            out.push_str(script.source());
            out
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(script)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}
