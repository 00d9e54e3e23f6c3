//! Alias manifest: the scan result written next to a compiled module.
//!
//! ```json
//! {
//!   "module": "Cake.Tools",
//!   "aliases": [
//!     { "kind": "property", "namespaces": ["Cake.Tools"], "name": "Verbose", ... }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ScriptAlias;

/// File name suffix replacing the module's extension.
pub const MANIFEST_EXTENSION: &str = "aliases.json";

/// Aliases discovered in one module, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasManifest {
    /// Name of the scanned module.
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub aliases: Vec<ScriptAlias>,
}

/// Parse manifest JSON.
pub fn parse_manifest(json: &str) -> Result<AliasManifest, serde_json::Error> {
    serde_json::from_str(json)
}

/// Manifest location for a module: `Tools.dll` → `Tools.aliases.json`.
pub fn manifest_path(module: &Path) -> PathBuf {
    module.with_extension(MANIFEST_EXTENSION)
}
