//! Error types for matcher construction.

use thiserror::Error;

/// Errors raised while building a matcher.
///
/// Matching itself never fails: a path that does not fit, or a capture a
/// rule rejects, is reported as `None` by `parse`.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// The generated or supplied regular expression did not compile.
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for matcher construction.
pub type Result<T> = std::result::Result<T, MatcherError>;
