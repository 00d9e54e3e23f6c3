//! The output of one generation call.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Generated alias source with everything needed to compile it.
///
/// Built once at the end of a generation call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    source: String,
    namespaces: BTreeSet<String>,
    references: Vec<PathBuf>,
}

impl GeneratedScript {
    pub(crate) fn new(
        source: String,
        namespaces: BTreeSet<String>,
        references: Vec<PathBuf>,
    ) -> Self {
        Self {
            source,
            namespaces,
            references,
        }
    }

    /// The result for a module that doesn't exist: no source, no namespaces,
    /// no references.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Concatenated declarations, each followed by a blank-line separator.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Namespaces the source needs in scope.
    pub fn namespaces(&self) -> &BTreeSet<String> {
        &self.namespaces
    }

    /// Modules the source must be compiled against.
    pub fn references(&self) -> &[PathBuf] {
        &self.references
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.namespaces.is_empty() && self.references.is_empty()
    }

    pub fn into_parts(self) -> (String, BTreeSet<String>, Vec<PathBuf>) {
        (self.source, self.namespaces, self.references)
    }

    /// One `using N;` line per namespace, sorted.
    pub fn render_usings(&self) -> String {
        let mut out = String::new();
        for namespace in &self.namespaces {
            let _ = writeln!(out, "using {namespace};");
        }
        out
    }

    /// One `#r "path"` directive per reference.
    pub fn render_references(&self) -> String {
        let mut out = String::new();
        for reference in &self.references {
            let _ = writeln!(out, "#r \"{}\"", escape_reference(reference));
        }
        out
    }
}

fn escape_reference(path: &Path) -> String {
    path.display().to_string().replace('"', "\\\"")
}
