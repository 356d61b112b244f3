//! Configuration for the argument sanitizer.
//!
//! The pattern and separator are fixed at build time; this module only
//! exists to keep them in one place and validate them before use.

use crate::error::ArgstripError;
use crate::Result;

/// Flag pattern the tool strips from its arguments
pub const DEFAULT_PATTERN: &str = "-O";

/// Separator used when joining arguments into one string
pub const DEFAULT_SEPARATOR: &str = " ";

/// Settings for a sanitizer instance
#[derive(Debug, Clone)]
pub struct SanitizerConfig {
    /// Regular expression removed from the joined arguments
    pub pattern: String,
    /// Separator placed between arguments
    pub separator: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SanitizerConfig {
    /// Create a new configuration with custom settings
    pub fn new(pattern: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            separator: separator.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // An empty pattern matches everywhere and removes nothing
        if self.pattern.is_empty() {
            return Err(ArgstripError::Config("Pattern must not be empty".to_string()));
        }

        Ok(())
    }
}
