//! Contract error types for provider settings
//!
//! These errors are transport-agnostic and surface directly to callers of the registry.

/// Message carried by every rejected null write.
pub const NULL_VALUE_MESSAGE: &str = "value cannot be null";

/// Provider settings errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A mutation tried to store a null value
    #[error("{message}")]
    InvalidArgument {
        /// Human-readable reason
        message: String,
    },
    /// A stored value could not be read as the requested type
    #[error("setting '{name}' cannot be read as {expected}")]
    TypeMismatch {
        /// Setting name
        name: String,
        /// Requested Rust type
        expected: &'static str,
    },
    /// Configuration could not be loaded
    #[error("invalid provider settings configuration: {0}")]
    Config(String),
}

impl SettingsError {
    /// The error raised for a null write
    pub fn null_value() -> Self {
        Self::InvalidArgument {
            message: NULL_VALUE_MESSAGE.to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
