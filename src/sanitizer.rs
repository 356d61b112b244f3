//! Argument sanitizer.
//!
//! Joins the process arguments into a single string, removes the first
//! match of the configured pattern and reports whatever is left.

use regex::Regex;
use tracing::debug;

use crate::config::SanitizerConfig;
use crate::error::ArgstripError;
use crate::Result;

/// Remove the first match of `pattern` from `text` and trim the result.
///
/// Text without a match is returned trimmed but otherwise unchanged.
pub fn remove_find(pattern: &Regex, text: &str) -> String {
    match pattern.find(text) {
        Some(m) => {
            debug!("Pattern matched at {}..{}", m.start(), m.end());
            let mut residual = String::with_capacity(text.len() - m.len());
            residual.push_str(&text[..m.start()]);
            residual.push_str(&text[m.end()..]);
            residual.trim().to_string()
        }
        None => {
            debug!("Pattern not found");
            text.trim().to_string()
        }
    }
}

/// Join arguments with `separator`
pub fn join_args<S: AsRef<str>>(args: &[S], separator: &str) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Compiled sanitizer
#[derive(Debug, Clone)]
pub struct Sanitizer {
    pattern: Regex,
    separator: String,
}

impl Sanitizer {
    /// Validate the configuration and compile its pattern
    pub fn new(config: &SanitizerConfig) -> Result<Self> {
        config.validate()?;
        let pattern = Regex::new(&config.pattern)?;
        Ok(Self {
            pattern,
            separator: config.separator.clone(),
        })
    }

    /// Join `args` and run a single removal pass, returning the residual text
    pub fn sanitize<S: AsRef<str>>(&self, args: &[S]) -> String {
        let joined = join_args(args, &self.separator);
        debug!("Joined arguments: {:?}", joined);
        let residual = remove_find(&self.pattern, &joined);
        debug!("Residual: {:?}", residual);
        residual
    }

    /// Fail with [`ArgstripError::Unconsumed`] if anything survives the removal pass
    pub fn check<S: AsRef<str>>(&self, args: &[S]) -> Result<()> {
        let residual = self.sanitize(args);
        if residual.is_empty() {
            Ok(())
        } else {
            Err(ArgstripError::Unconsumed(residual))
        }
    }
}
