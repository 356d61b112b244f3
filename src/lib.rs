//! argstrip validates a command line against a single known flag.
//!
//! The arguments are joined into one string, the first match of the flag
//! pattern is removed and any remaining text is reported as an error.

pub mod cli;
pub mod config;
pub mod error;
pub mod sanitizer;

// Re-export commonly used types
pub use cli::Cli;
pub use config::SanitizerConfig;
pub use error::ArgstripError;
pub use sanitizer::{join_args, remove_find, Sanitizer};
pub type Result<T> = std::result::Result<T, ArgstripError>;
