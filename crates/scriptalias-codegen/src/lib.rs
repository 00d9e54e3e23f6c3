//! Script alias generation.
//!
//! This crate turns the aliases discovered in a compiled module into source
//! declarations a script host can compile against:
//! - `finder` - alias discovery from a module (manifest-backed by default)
//! - `fs` - module existence checks
//! - `emit` - type, parameter, method and property rendering
//! - `generator` - the generation pipeline producing a `GeneratedScript`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod finder;
pub mod fs;
pub mod generator;
pub mod script;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod script_tests;

pub use emit::{EmitConfig, RenderError};
pub use finder::{AliasFinder, ManifestAliasFinder, ScanError};
pub use fs::{FileSystem, LocalFileSystem};
pub use generator::AliasGenerator;
pub use script::GeneratedScript;

/// Errors that can occur during alias generation.
///
/// Collaborator failures are wrapped transparently: their message reaches
/// the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input was missing. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
