//! Error types for declaration emission.

/// Descriptor data that can't be rendered as a declaration.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("invalid name: `{0}`")]
    InvalidName(String),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: &'static str },

    #[error("failed to write declaration")]
    Write(#[from] std::fmt::Error),
}
