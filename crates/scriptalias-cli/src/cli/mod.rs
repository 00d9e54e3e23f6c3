mod args;
mod commands;
mod dispatch;

#[cfg(test)]
mod dispatch_tests;

pub use commands::build_cli;
pub use dispatch::GenerateParams;

/// Shape of the generated output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `#r` references, `using` directives, then the declarations.
    #[default]
    Script,
    /// Declarations only.
    Source,
    /// The full result as JSON.
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "script" => Some(Self::Script),
            "source" => Some(Self::Source),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
