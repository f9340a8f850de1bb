//! Error types for snippet parameter tags.
//!
//! Two kinds of failure exist in this crate and only one of them lives
//! here: **usage errors** (a template author invoked a tag wrongly) are
//! surfaced as [`TagError`] values and halt the current evaluation. The
//! **missing-parameter condition** is deliberately not an error: `var`
//! degrades to a diagnostic string and `if_var`/`unless_var` to a false
//! condition, so template authors can build optional-parameter snippets
//! without error handling in template markup.

use thiserror::Error;

/// Result type alias for tag evaluation.
pub type TagResult<T> = std::result::Result<T, TagError>;

/// Errors raised while evaluating a snippet parameter tag.
#[derive(Error, Debug)]
pub enum TagError {
    /// A required attribute was missing or empty on the tag invocation.
    #[error("Missing required attribute '{attribute}' for tag '{tag}'")]
    MissingAttribute {
        /// Full tag name, e.g. `snippet:var`
        tag: String,
        /// Name of the offending attribute
        attribute: String,
    },

    /// The user-supplied `matches` pattern failed to compile.
    ///
    /// Distinct from a pattern that compiled but did not match; a
    /// non-match is an ordinary false condition, never an error.
    #[error("Invalid 'matches' pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text as written in the template
        pattern: String,
        /// Compilation failure reported by the regex engine
        #[source]
        source: regex::Error,
    },

    /// No tag with the given name is registered.
    #[error("Unknown snippet tag: {0}")]
    UnknownTag(String),

    /// The host's body expansion callback failed.
    #[error("Body expansion failed: {0}")]
    Expansion(String),
}
