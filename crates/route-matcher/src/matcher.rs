//! Construction entry point selecting a matcher by route shape.

use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::params::Params;
use crate::pattern::{Captures, PatternMatcher};
use crate::rule::Rules;
use crate::template::TemplateMatcher;

/// What a matcher is built from.
#[derive(Debug, Clone)]
pub enum RouteSource {
    /// A `:param` / `*splat` template string.
    Template(String),
    /// A precompiled regex.
    Pattern(Regex),
}

impl From<&str> for RouteSource {
    fn from(s: &str) -> Self {
        Self::Template(s.to_string())
    }
}

impl From<String> for RouteSource {
    fn from(s: String) -> Self {
        Self::Template(s)
    }
}

impl From<Regex> for RouteSource {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Named values from a template matcher.
    Params(Params),
    /// Positional captures from a pattern matcher.
    Captures(Captures),
}

impl Match {
    /// Returns the named values, if this came from a template matcher.
    #[must_use]
    pub const fn params(&self) -> Option<&Params> {
        match self {
            Self::Params(params) => Some(params),
            Self::Captures(_) => None,
        }
    }

    /// Returns the positional captures, if this came from a pattern matcher.
    #[must_use]
    pub const fn captures(&self) -> Option<&Captures> {
        match self {
            Self::Captures(captures) => Some(captures),
            Self::Params(_) => None,
        }
    }
}

/// A compiled route, either from a template or a regex.
///
/// Immutable after construction; share freely across threads.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Built from a template string.
    Template(TemplateMatcher),
    /// Built from a precompiled regex.
    Pattern(PatternMatcher),
}

impl Matcher {
    /// Builds a matcher from a template string or a precompiled regex.
    ///
    /// `rules` only apply to templates and are ignored for regex routes.
    ///
    /// # Example
    ///
    /// ```
    /// use regex::Regex;
    /// use route_matcher::{Matcher, Params};
    ///
    /// let template = Matcher::new("/user/:id", None).unwrap();
    /// let m = template.parse("/user/7").unwrap();
    /// assert_eq!(m.params().unwrap().get("id"), Some("7"));
    ///
    /// let pattern = Matcher::new(Regex::new(r"^/(\w+)$").unwrap(), None).unwrap();
    /// let m = pattern.parse("/foo").unwrap();
    /// assert_eq!(m.captures().unwrap().get(0), Some("foo"));
    /// assert_eq!(pattern.stringify(&Params::new()), "");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`](crate::MatcherError::InvalidPattern)
    /// if a template compiles to an invalid regex.
    pub fn new(route: impl Into<RouteSource>, rules: Option<Rules>) -> Result<Self> {
        match route.into() {
            RouteSource::Pattern(regex) => {
                if rules.as_ref().is_some_and(|r| !r.is_empty()) {
                    debug!(pattern = %regex.as_str(), "ignoring rules for regex route");
                }
                Ok(Self::Pattern(PatternMatcher::new(regex)))
            }
            RouteSource::Template(template) => {
                TemplateMatcher::with_rules(&template, rules.unwrap_or_default())
                    .map(Self::Template)
            }
        }
    }

    /// Matches `url`, returning named params or positional captures
    /// depending on how the matcher was built.
    #[must_use]
    pub fn parse(&self, url: &str) -> Option<Match> {
        match self {
            Self::Template(m) => m.parse(url).map(Match::Params),
            Self::Pattern(m) => m.parse(url).map(Match::Captures),
        }
    }

    /// Builds a path from `values`. Regex routes always yield `""`.
    #[must_use]
    pub fn stringify(&self, values: &Params) -> String {
        match self {
            Self::Template(m) => m.stringify(values),
            Self::Pattern(m) => m.stringify(values),
        }
    }

    /// Returns the template matcher, if this was built from a template.
    #[must_use]
    pub const fn as_template(&self) -> Option<&TemplateMatcher> {
        match self {
            Self::Template(m) => Some(m),
            Self::Pattern(_) => None,
        }
    }

    /// Returns the pattern matcher, if this was built from a regex.
    #[must_use]
    pub const fn as_pattern(&self) -> Option<&PatternMatcher> {
        match self {
            Self::Pattern(m) => Some(m),
            Self::Template(_) => None,
        }
    }
}

impl From<TemplateMatcher> for Matcher {
    fn from(m: TemplateMatcher) -> Self {
        Self::Template(m)
    }
}

impl From<PatternMatcher> for Matcher {
    fn from(m: PatternMatcher) -> Self {
        Self::Pattern(m)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(m) => fmt::Display::fmt(m, f),
            Self::Pattern(m) => fmt::Display::fmt(m, f),
        }
    }
}

/// Builds a [`Matcher`] from a template string or a precompiled regex.
///
/// Shorthand for [`Matcher::new`].
///
/// # Errors
///
/// Returns [`MatcherError::InvalidPattern`](crate::MatcherError::InvalidPattern)
/// if a template compiles to an invalid regex.
pub fn compile(route: impl Into<RouteSource>, rules: Option<Rules>) -> Result<Matcher> {
    Matcher::new(route, rules)
}
