//! Error types for the filter crate.

use thiserror::Error;

/// Errors raised while building or assigning filter rules.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The pattern of a `RegEx` rule does not compile.
    ///
    /// When returned from an assignment, the rule has already been
    /// downgraded to `Contains` matching.
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
