//! Declaration emission for discovered aliases.
//!
//! Renders descriptors into C# source:
//! - `TypeEmitter` - type references
//! - `ParameterEmitter` - parameter lists and forwarding arguments
//! - `MethodAliasEmitter` - method alias declarations
//! - `PropertyAliasEmitter` - property alias declarations

mod config;
mod error;
mod literal;
mod method;
mod parameters;
mod property;
mod types;

#[cfg(test)]
mod parameters_tests;

pub use config::EmitConfig;
pub use error::RenderError;
pub use method::MethodAliasEmitter;
pub use parameters::ParameterEmitter;
pub use property::PropertyAliasEmitter;
pub use types::TypeEmitter;

use std::fmt::Write;

use scriptalias_core::Obsolete;

/// Write `[System.Obsolete(...)]` on its own line.
fn write_obsolete<W: Write>(out: &mut W, obsolete: &Obsolete) -> Result<(), RenderError> {
    match (&obsolete.message, obsolete.error) {
        (None, false) => writeln!(out, "[System.Obsolete]")?,
        (Some(message), false) => {
            writeln!(out, "[System.Obsolete({})]", literal::string(message))?
        }
        (Some(message), true) => writeln!(
            out,
            "[System.Obsolete({}, true)]",
            literal::string(message)
        )?,
        (None, true) => writeln!(out, "[System.Obsolete(null, true)]")?,
    }
    Ok(())
}
