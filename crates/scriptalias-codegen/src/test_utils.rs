//! Fake collaborators and alias fixtures.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use scriptalias_core::{MethodSignature, Parameter, PropertySignature, ScriptAlias, TypeRef};

use crate::finder::{AliasFinder, ScanError};
use crate::fs::FileSystem;

/// File system with a fixed set of existing paths that records every query.
#[derive(Default)]
pub struct SpyFileSystem {
    existing: HashSet<PathBuf>,
    pub queries: RefCell<Vec<PathBuf>>,
}

impl SpyFileSystem {
    pub fn with(paths: &[&str]) -> Self {
        Self {
            existing: paths.iter().map(PathBuf::from).collect(),
            queries: RefCell::default(),
        }
    }
}

impl FileSystem for SpyFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.queries.borrow_mut().push(path.to_path_buf());
        self.existing.contains(path)
    }
}

/// Finder returning canned aliases (or a scan failure) that records every call.
#[derive(Default)]
pub struct FakeFinder {
    aliases: Vec<ScriptAlias>,
    fail: bool,
    pub calls: RefCell<Vec<(PathBuf, bool)>>,
}

impl FakeFinder {
    pub fn returning(aliases: Vec<ScriptAlias>) -> Self {
        Self {
            aliases,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl AliasFinder for FakeFinder {
    fn find_aliases(&self, module: &Path, verify: bool) -> Result<Vec<ScriptAlias>, ScanError> {
        self.calls.borrow_mut().push((module.to_path_buf(), verify));
        if self.fail {
            return Err(ScanError::Verification {
                module: module.to_path_buf(),
                problems: vec!["`Broken`: missing `this` receiver parameter".to_string()],
            });
        }
        Ok(self.aliases.clone())
    }
}

pub fn context() -> Parameter {
    Parameter::receiver("context", TypeRef::named("Cake.Core", "ICakeContext"))
}

pub fn tool_aliases() -> TypeRef {
    TypeRef::named("Cake.Tools", "ToolAliases")
}

/// `void Build()` in `Cake.Tools`.
pub fn build_alias() -> ScriptAlias {
    ScriptAlias::method(
        MethodSignature::new("Build", tool_aliases(), TypeRef::void()).parameter(context()),
    )
    .with_namespace("Cake.Tools")
}

/// `bool Verbose` in `Cake.Tools`.
pub fn verbose_alias() -> ScriptAlias {
    ScriptAlias::property(PropertySignature::new(
        "Verbose",
        tool_aliases(),
        TypeRef::named("System", "Boolean"),
    ))
    .with_namespace("Cake.Tools")
}

/// Method alias named `name` requiring `namespaces`.
pub fn method_alias(name: &str, namespaces: &[&str]) -> ScriptAlias {
    let mut alias = ScriptAlias::method(
        MethodSignature::new(name, tool_aliases(), TypeRef::void()).parameter(context()),
    );
    for namespace in namespaces {
        alias = alias.with_namespace(*namespace);
    }
    alias
}
