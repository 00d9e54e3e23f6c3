//! Alias discovery.

mod manifest;
mod verify;


use std::io;
use std::path::{Path, PathBuf};

use scriptalias_core::ScriptAlias;

pub use manifest::ManifestAliasFinder;
pub use verify::verify_aliases;

/// Discovers the script aliases a module exports.
///
/// Implementations must return aliases in a stable order for the same module.
pub trait AliasFinder {
    /// Scan `module`. With `verify`, aliases are structurally validated and a
    /// module with invalid aliases fails with [`ScanError::Verification`].
    fn find_aliases(&self, module: &Path, verify: bool) -> Result<Vec<ScriptAlias>, ScanError>;
}

impl<T: AliasFinder + ?Sized> AliasFinder for &T {
    fn find_aliases(&self, module: &Path, verify: bool) -> Result<Vec<ScriptAlias>, ScanError> {
        (*self).find_aliases(module, verify)
    }
}

/// A module that can't be introspected.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("no alias manifest for `{}` (expected `{}`)", .module.display(), .manifest.display())]
    ManifestNotFound { module: PathBuf, manifest: PathBuf },

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed alias manifest `{}`: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "`{}` failed verification with {} problem(s):\n{}",
        .module.display(),
        .problems.len(),
        bullet_list(.problems)
    )]
    Verification {
        module: PathBuf,
        problems: Vec<String>,
    },
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
