//! Configuration types for declaration emission.

/// Configuration for alias emission.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Whether named types are written with their namespace
    pub(crate) qualify_types: bool,
    /// Spaces per indentation level
    pub(crate) indent: usize,
    /// Name of the script host member forwarded as the receiver
    pub(crate) context_name: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            qualify_types: true,
            indent: 4,
            context_name: "Context".to_string(),
        }
    }
}

impl EmitConfig {
    /// Widest accepted indentation level.
    pub const MAX_INDENT: usize = 16;

    /// Create a new EmitConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to namespace-qualify named types.
    pub fn qualify_types(mut self, value: bool) -> Self {
        self.qualify_types = value;
        self
    }

    /// Set the number of spaces per indentation level, capped at [`Self::MAX_INDENT`].
    pub fn indent(mut self, value: usize) -> Self {
        self.indent = value.min(Self::MAX_INDENT);
        self
    }

    /// Set the receiver forwarded to aliased members.
    pub fn context_name(mut self, value: impl Into<String>) -> Self {
        self.context_name = value.into();
        self
    }

    pub(crate) fn indentation(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}
