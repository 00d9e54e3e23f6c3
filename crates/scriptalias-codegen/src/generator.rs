//! The generation pipeline: existence check, discovery, emission, aggregation.

use std::collections::BTreeSet;
use std::path::Path;

use scriptalias_core::{AliasSignature, ScriptAlias};

use crate::emit::{
    EmitConfig, MethodAliasEmitter, ParameterEmitter, PropertyAliasEmitter, TypeEmitter,
};
use crate::finder::{AliasFinder, ManifestAliasFinder};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::{Error, GeneratedScript, Result};

/// Written after every declaration.
pub const DECLARATION_SEPARATOR: &str = "\n\n";

/// Generates alias declarations for a module.
///
/// Holds no per-call state: `generate` can be called repeatedly, and from
/// several threads when the collaborators allow it.
pub struct AliasGenerator<F, A> {
    file_system: F,
    finder: A,
    methods: MethodAliasEmitter,
    properties: PropertyAliasEmitter,
}

impl AliasGenerator<LocalFileSystem, ManifestAliasFinder> {
    /// Generator over the local disk and alias manifests.
    pub fn local(config: &EmitConfig) -> Self {
        Self::with_config(LocalFileSystem, ManifestAliasFinder::new(), config)
    }
}

impl<F: FileSystem, A: AliasFinder> AliasGenerator<F, A> {
    pub fn new(file_system: F, finder: A) -> Self {
        Self::with_config(file_system, finder, &EmitConfig::default())
    }

    pub fn with_config(file_system: F, finder: A, config: &EmitConfig) -> Self {
        let types = TypeEmitter::new(config);
        let parameters = ParameterEmitter::new(types.clone());
        Self {
            file_system,
            finder,
            methods: MethodAliasEmitter::new(config, types.clone(), parameters),
            properties: PropertyAliasEmitter::new(config, types),
        }
    }

    /// Generate the aliases of `module`.
    ///
    /// A module that doesn't exist yields [`GeneratedScript::empty`]. Otherwise
    /// the result references `module` even when it has no aliases. `verify` is
    /// passed through to the finder. Finder and emitter errors are returned as is.
    pub fn generate(&self, module: &Path, verify: bool) -> Result<GeneratedScript> {
        if module.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("module path is required"));
        }
        if !self.file_system.exists(module) {
            tracing::debug!(module = %module.display(), "module not found, nothing to generate");
            return Ok(GeneratedScript::empty());
        }

        let aliases = self.finder.find_aliases(module, verify)?;
        tracing::debug!(module = %module.display(), aliases = aliases.len(), "found aliases");

        let source = self.generate_source(&aliases)?;
        let namespaces: BTreeSet<String> = aliases
            .iter()
            .flat_map(|alias| alias.namespaces.iter().cloned())
            .collect();
        tracing::debug!(
            module = %module.display(),
            bytes = source.len(),
            namespaces = namespaces.len(),
            "generated aliases"
        );

        Ok(GeneratedScript::new(
            source,
            namespaces,
            vec![module.to_path_buf()],
        ))
    }

    fn generate_source(&self, aliases: &[ScriptAlias]) -> Result<String> {
        let mut source = String::new();
        for alias in aliases {
            tracing::trace!(alias = alias.name(), kind = ?alias.kind(), "emit");
            match &alias.signature {
                AliasSignature::Method(method) => self.methods.emit(&mut source, method)?,
                AliasSignature::Property(property) => {
                    self.properties.emit(&mut source, property)?
                }
            }
            source.push_str(DECLARATION_SEPARATOR);
        }
        Ok(source)
    }
}
