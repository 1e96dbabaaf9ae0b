//! # route-matcher
//!
//! Compile route templates into matchers that parse paths and build them
//! back.
//!
//! This crate provides:
//! - `:name` segment and `*name` splat placeholders
//! - Per-name validation rules (regex, predicate, or exact value)
//! - Reverse path building from placeholder values
//! - Regex-backed matchers for routes a template cannot express
//!
//! ## Quick Start
//!
//! ```
//! use route_matcher::{Matcher, Params};
//!
//! let matcher = Matcher::new("/posts/:post_id/comments/:id", None).unwrap();
//!
//! let m = matcher.parse("/posts/42/comments/7").unwrap();
//! let params = m.params().unwrap();
//! assert_eq!(params.get("post_id"), Some("42"));
//! assert_eq!(params.get("id"), Some("7"));
//!
//! let path = matcher.stringify(&Params::from([("post_id", "1"), ("id", "2")]));
//! assert_eq!(path, "/posts/1/comments/2");
//! ```
//!
//! ## Splats
//!
//! A `*name` placeholder captures across `/`:
//!
//! ```
//! use route_matcher::TemplateMatcher;
//!
//! let matcher = TemplateMatcher::new("/files/*path").unwrap();
//! let params = matcher.parse("/files/docs/readme.md").unwrap();
//! assert_eq!(params.get("path"), Some("docs/readme.md"));
//! ```
//!
//! ## Rules
//!
//! A rule rejecting any captured value rejects the whole match:
//!
//! ```
//! use regex::Regex;
//! use route_matcher::{Rule, Rules, TemplateMatcher};
//!
//! let rules = Rules::new()
//!     .rule("id", Regex::new(r"^\d+$").unwrap())
//!     .rule("action", Rule::predicate(|v| v == "view" || v == "edit"));
//!
//! let matcher = TemplateMatcher::with_rules("/user/:id/:action", rules).unwrap();
//! assert!(matcher.parse("/user/42/edit").is_some());
//! assert!(matcher.parse("/user/abc/edit").is_none());
//! assert!(matcher.parse("/user/42/delete").is_none());
//! ```
//!
//! ## Regex Routes
//!
//! ```
//! use regex::Regex;
//! use route_matcher::Matcher;
//!
//! let matcher = Matcher::new(Regex::new(r"^/(\w+)/(\d+)$").unwrap(), None).unwrap();
//! let m = matcher.parse("/foo/12").unwrap();
//! let caps = m.captures().unwrap();
//! assert_eq!(caps.get(0), Some("foo"));
//! assert_eq!(caps.get(1), Some("12"));
//! ```

mod error;
mod matcher;
mod params;
mod pattern;
mod rule;
mod template;

pub use error::{MatcherError, Result};
pub use matcher::{compile, Match, Matcher, RouteSource};
pub use params::Params;
pub use pattern::{Captures, PatternMatcher};
pub use rule::{Predicate, Rule, Rules};
pub use template::{Placeholder, PlaceholderKind, TemplateMatcher};
