use crate::error::{TemplateError, TemplateResult};
use serde::Deserialize;

/// Marker character used when none is configured.
pub const DEFAULT_MARKER: char = '@';

/// Configuration for [`Template`](crate::Template) construction.
///
/// Deserializable so it can live in an application's own config file:
///
/// ```toml
/// [template]
/// marker = "#"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Character separating a placeholder name from its format code (`{name@I}`).
    pub marker: char,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

impl TemplateConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker character.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Reject markers that can never act as a delimiter.
    pub fn validate(&self) -> TemplateResult<()> {
        if matches!(self.marker, '{' | '}') {
            return Err(TemplateError::invalid_config(format!(
                "marker cannot be a brace, got '{}'",
                self.marker
            )));
        }
        Ok(())
    }
}
