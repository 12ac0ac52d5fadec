//! Search pattern compilation
//!
//! User-supplied patterns compile to case-insensitive, unanchored
//! matchers (substring semantics). A pattern the engine rejects is a
//! normal, recoverable user-input condition: it becomes a
//! [`PatternError`] carrying the engine's message for display, never a
//! panic.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// A search pattern the regex engine rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Regex inválida: {message}")]
pub struct PatternError {
    /// The regex engine's own description of the problem.
    pub message: String,
}

/// Compile a user-supplied pattern into a matcher.
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|error| PatternError {
            message: error.to_string(),
        })
}
