//! Matchers built directly from a regular expression.

use std::fmt;

use regex::Regex;

use crate::error::{MatcherError, Result};

/// Positional capture groups from a [`PatternMatcher`] match.
///
/// Group 0 (the whole match) is excluded. A group that did not take part in
/// the match is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    /// Capture group values, in group order.
    pub captures: Vec<Option<String>>,
}

impl Captures {
    /// Gets the value of the `index`th capture group (0-based, whole match
    /// excluded).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.captures.get(index)?.as_deref()
    }

    /// Number of capture groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Returns true if the pattern has no capture groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

/// A matcher wrapping a caller-supplied regex.
///
/// The regex is used as-is: add `^`/`$` anchors yourself for whole-path
/// matching. There is no inverse, so [`stringify`](Self::stringify) always
/// returns an empty string.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Wraps a compiled regex.
    #[must_use]
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// Compiles `pattern` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if `pattern` is not a valid
    /// regex.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self::new)
            .map_err(|source| MatcherError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Matches `url` and returns its positional captures.
    ///
    /// # Example
    ///
    /// ```
    /// use regex::Regex;
    /// use route_matcher::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Regex::new(r"^/(\w+)/(\d+)$").unwrap());
    /// let caps = matcher.parse("/foo/12").unwrap();
    /// assert_eq!(caps.get(0), Some("foo"));
    /// assert_eq!(caps.get(1), Some("12"));
    /// assert!(matcher.parse("/foo/bar").is_none());
    /// ```
    #[must_use]
    pub fn parse(&self, url: &str) -> Option<Captures> {
        let caps = self.regex.captures(url)?;
        Some(Captures {
            captures: caps
                .iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
        })
    }

    /// Always returns an empty string.
    #[must_use]
    pub fn stringify<T: ?Sized>(&self, _values: &T) -> String {
        String::new()
    }

    /// Returns the wrapped regex.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl From<Regex> for PatternMatcher {
    fn from(regex: Regex) -> Self {
        Self::new(regex)
    }
}

impl fmt::Display for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
