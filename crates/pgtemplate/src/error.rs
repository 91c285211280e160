//! Error types for pgtemplate

use thiserror::Error;

/// Result type alias for pgtemplate operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Error types for template formatting and parameter preparation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A positional placeholder had no argument left to consume
    #[error("Missing positional argument #{index} ({supplied} supplied)")]
    MissingPositionalArgument { index: usize, supplied: usize },

    /// A named placeholder had no matching named argument
    #[error("Missing named argument '{0}'")]
    MissingNamedArgument(String),

    /// A passthrough placeholder received a plain value instead of a fragment
    #[error("Placeholder '{placeholder}' expects a fragment, got a plain value")]
    NotAFragment { placeholder: String },

    /// The argument kind does not fit the selected format
    #[error("Placeholder '{placeholder}' with format '{format}' expects {expected}, got {found}")]
    TypeMismatch {
        placeholder: String,
        format: char,
        expected: &'static str,
        found: &'static str,
    },

    /// No parameter value was supplied for a bind placeholder slot
    #[error("Missing parameter for {0}")]
    MissingParameter(String),

    /// Invalid template configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TemplateError {
    /// Create a missing named argument error
    pub fn missing_named(name: impl Into<String>) -> Self {
        Self::MissingNamedArgument(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Check if this is a missing argument error (positional or named)
    pub fn is_missing_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingPositionalArgument { .. } | Self::MissingNamedArgument(_)
        )
    }

    /// Check if this error came from an argument of the wrong kind
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotAFragment { .. } | Self::TypeMismatch { .. })
    }
}
