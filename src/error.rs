//! Error types for the argstrip application.
use thiserror::Error;

/// Custom error type for argstrip operations
#[derive(Debug, Error)]
pub enum ArgstripError {
    /// Argument text left over after the removal pass
    #[error("Could not remove all arguments. Remaining: {0}")]
    Unconsumed(String),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// The configured pattern is not a valid regular expression
    #[error("Pattern error: {0}")]
    Pattern(regex::Error),
}

impl From<regex::Error> for ArgstripError {
    fn from(err: regex::Error) -> Self {
        ArgstripError::Pattern(err)
    }
}
