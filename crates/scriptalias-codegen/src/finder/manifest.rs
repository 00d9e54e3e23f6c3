//! Manifest-backed alias discovery.

use std::fs;
use std::io;
use std::path::Path;

use scriptalias_core::ScriptAlias;
use scriptalias_core::manifest::{manifest_path, parse_manifest};

use super::{AliasFinder, ScanError, verify_aliases};

/// Reads aliases from the `<module>.aliases.json` manifest next to a module.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManifestAliasFinder;

impl ManifestAliasFinder {
    pub fn new() -> Self {
        Self
    }
}

impl AliasFinder for ManifestAliasFinder {
    fn find_aliases(&self, module: &Path, verify: bool) -> Result<Vec<ScriptAlias>, ScanError> {
        let path = manifest_path(module);
        let json = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ScanError::ManifestNotFound {
                    module: module.to_path_buf(),
                    manifest: path.clone(),
                }
            } else {
                ScanError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let manifest = parse_manifest(&json).map_err(|source| ScanError::Manifest {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            manifest = %path.display(),
            aliases = manifest.aliases.len(),
            "read alias manifest"
        );

        if verify {
            let problems = verify_aliases(&manifest.aliases);
            if !problems.is_empty() {
                return Err(ScanError::Verification {
                    module: module.to_path_buf(),
                    problems,
                });
            }
        }

        Ok(manifest.aliases)
    }
}
