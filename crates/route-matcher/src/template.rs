//! Route template compilation and matching.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{MatcherError, Result};
use crate::params::Params;
use crate::rule::Rules;

/// How much of the path a placeholder may capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `:name`, captures up to the next `/`.
    Segment,
    /// `*name`, captures anything, including `/`.
    Splat,
}

impl PlaceholderKind {
    fn from_sigil(b: u8) -> Option<Self> {
        match b {
            b':' => Some(Self::Segment),
            b'*' => Some(Self::Splat),
            _ => None,
        }
    }

    /// The character introducing this kind of placeholder.
    #[must_use]
    pub const fn sigil(self) -> char {
        match self {
            Self::Segment => ':',
            Self::Splat => '*',
        }
    }

    const fn capture_group(self) -> &'static str {
        match self {
            Self::Segment => "([^/]*)",
            Self::Splat => "(?s:.*)",
        }
    }
}

/// A named placeholder and the capture group it compiled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Placeholder name, without its sigil.
    pub name: String,
    /// Segment or splat.
    pub kind: PlaceholderKind,
    /// 1-based capture group index in the compiled pattern.
    pub group: usize,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.sigil(), self.name)
    }
}

/// A piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Placeholder(Placeholder),
}

const fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Splits a template into literal text and placeholders.
///
/// A sigil not followed by at least one word character stays literal text.
fn tokenize(template: &str) -> Vec<Token> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut group = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(kind) = PlaceholderKind::from_sigil(bytes[i]) {
            let len = bytes[i + 1..].iter().take_while(|b| is_word(**b)).count();
            if len > 0 {
                if literal_start < i {
                    tokens.push(Token::Literal(template[literal_start..i].to_string()));
                }
                group += 1;
                tokens.push(Token::Placeholder(Placeholder {
                    name: template[i + 1..=i + len].to_string(),
                    kind,
                    group,
                }));
                i += 1 + len;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(template[literal_start..].to_string()));
    }

    tokens
}

/// A compiled route template.
///
/// Templates are literal path text with two kinds of placeholder:
/// - `:name` matches one path segment (no `/`, possibly empty)
/// - `*name` matches anything, including `/`
///
/// Names are ASCII word characters (`[A-Za-z0-9_]`). The whole input must
/// match; there are no prefix matches.
#[derive(Debug, Clone)]
pub struct TemplateMatcher {
    /// The original template string.
    template: String,
    /// Tokenized template, used for stringify.
    tokens: Vec<Token>,
    /// Anchored regex for matching.
    regex: Regex,
    /// Per-name validation rules.
    rules: Rules,
}

impl TemplateMatcher {
    /// Compiles a template without rules.
    ///
    /// # Example
    ///
    /// ```
    /// use route_matcher::TemplateMatcher;
    ///
    /// let matcher = TemplateMatcher::new("/posts/:id/*rest").unwrap();
    /// let params = matcher.parse("/posts/123/a/b").unwrap();
    /// assert_eq!(params.get("id"), Some("123"));
    /// assert_eq!(params.get("rest"), Some("a/b"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if the generated regex does
    /// not compile.
    pub fn new(template: &str) -> Result<Self> {
        Self::with_rules(template, Rules::new())
    }

    /// Compiles a template whose captures are validated against `rules`.
    ///
    /// # Example
    ///
    /// ```
    /// use regex::Regex;
    /// use route_matcher::{Rules, TemplateMatcher};
    ///
    /// let rules = Rules::new().rule("id", Regex::new(r"^\d+$").unwrap());
    /// let matcher = TemplateMatcher::with_rules("/user/:id", rules).unwrap();
    /// assert!(matcher.parse("/user/42").is_some());
    /// assert!(matcher.parse("/user/abc").is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if the generated regex does
    /// not compile.
    pub fn with_rules(template: &str, rules: Rules) -> Result<Self> {
        let tokens = tokenize(template);

        let mut pattern = String::from("^");
        for token in &tokens {
            match token {
                Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                Token::Placeholder(p) => pattern.push_str(p.kind.capture_group()),
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern)
            .map_err(|source| MatcherError::InvalidPattern { pattern, source })?;

        let matcher = Self {
            template: template.to_string(),
            tokens,
            regex,
            rules,
        };
        debug_assert_eq!(
            matcher.placeholders().count() + 1,
            matcher.regex.captures_len()
        );
        debug!(
            template,
            pattern = %matcher.regex.as_str(),
            placeholders = matcher.placeholders().count(),
            rules = matcher.rules.len(),
            "compiled route template"
        );

        Ok(matcher)
    }

    /// Matches `url` against the template.
    ///
    /// Returns `None` if the path does not fit the template or a rule
    /// rejects a captured value. If a name appears more than once, the first
    /// capture is reported and every capture must pass the name's rule.
    #[must_use]
    pub fn parse(&self, url: &str) -> Option<Params> {
        let Some(caps) = self.regex.captures(url) else {
            trace!(template = %self.template, url, "route did not match");
            return None;
        };

        let mut params = Params::new();
        for placeholder in self.placeholders() {
            let value = caps.get(placeholder.group).map_or("", |m| m.as_str());
            if !self.rules.check(&placeholder.name, value) {
                trace!(
                    template = %self.template,
                    name = %placeholder.name,
                    value,
                    "rule rejected captured value"
                );
                return None;
            }
            if !params.contains(&placeholder.name) {
                params.insert(placeholder.name.as_str(), value);
            }
        }

        Some(params)
    }

    /// Builds a path by substituting `values` into the template.
    ///
    /// Every occurrence of a name is replaced. Placeholders without a value
    /// become empty. Values are inserted as-is and are not checked against
    /// the rules.
    ///
    /// # Example
    ///
    /// ```
    /// use route_matcher::{Params, TemplateMatcher};
    ///
    /// let matcher = TemplateMatcher::new("/posts/:id/:action").unwrap();
    /// let path = matcher.stringify(&Params::from([("id", "123")]));
    /// assert_eq!(path, "/posts/123/");
    /// ```
    #[must_use]
    pub fn stringify(&self, values: &Params) -> String {
        let mut path = String::with_capacity(self.template.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => path.push_str(text),
                Token::Placeholder(p) => path.push_str(values.get(&p.name).unwrap_or("")),
            }
        }
        path
    }

    /// Returns the original template string.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the placeholders in template order, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Placeholder(p) => Some(p),
            Token::Literal(_) => None,
        })
    }

    /// Returns the placeholder names in template order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.placeholders().map(|p| p.name.as_str())
    }

    /// Returns the source of the compiled, anchored regex.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the compiled, anchored regex.
    #[must_use]
    pub const fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns the rules captures are validated against.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl fmt::Display for TemplateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for TemplateMatcher {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(matcher: &TemplateMatcher) -> Vec<&str> {
        matcher.names().collect()
    }

    #[test]
    fn test_literal_template() {
        let matcher = TemplateMatcher::new("/users").unwrap();
        assert!(matcher.parse("/users").unwrap().is_empty());
        assert!(matcher.parse("/users/").is_none());
        assert!(matcher.parse("/posts").is_none());
    }

    #[test]
    fn test_segment_param() {
        let matcher = TemplateMatcher::new("/users/:id").unwrap();
        let params = matcher.parse("/users/123").unwrap();
        assert_eq!(params.get("id"), Some("123"));
        assert!(matcher.parse("/users/1/2").is_none());
    }

    #[test]
    fn test_segment_may_be_empty() {
        let matcher = TemplateMatcher::new("/users/:id").unwrap();
        assert_eq!(matcher.parse("/users/").unwrap().get("id"), Some(""));
    }

    #[test]
    fn test_splat_param() {
        let matcher = TemplateMatcher::new("/files/*path").unwrap();
        let params = matcher.parse("/files/docs/readme.md").unwrap();
        assert_eq!(params.get("path"), Some("docs/readme.md"));
    }

    #[test]
    fn test_splat_matches_newlines() {
        let matcher = TemplateMatcher::new("/files/*path").unwrap();
        let path = matcher.stringify(&Params::from([("path", "a\nb")]));
        assert_eq!(path, "/files/a\nb");
        assert_eq!(matcher.parse(&path).unwrap().get("path"), Some("a\nb"));
    }

    #[test]
    fn test_splat_before_literal() {
        let matcher = TemplateMatcher::new("/*dir/file.:ext").unwrap();
        let params = matcher.parse("/a/b/file.txt").unwrap();
        assert_eq!(params.get("dir"), Some("a/b"));
        assert_eq!(params.get("ext"), Some("txt"));
    }

    #[test]
    fn test_placeholder_groups_follow_template_order() {
        let matcher = TemplateMatcher::new("/:a/*b/:c").unwrap();
        let groups: Vec<(&str, PlaceholderKind, usize)> = matcher
            .placeholders()
            .map(|p| (p.name.as_str(), p.kind, p.group))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("a", PlaceholderKind::Segment, 1),
                ("b", PlaceholderKind::Splat, 2),
                ("c", PlaceholderKind::Segment, 3),
            ]
        );
        let tokens: Vec<String> = matcher.placeholders().map(ToString::to_string).collect();
        assert_eq!(tokens, vec![":a", "*b", ":c"]);
    }

    #[test]
    fn test_generated_pattern() {
        let matcher = TemplateMatcher::new("/a.b/:x/*y").unwrap();
        assert_eq!(matcher.pattern(), matcher.as_regex().as_str());
        assert_eq!(matcher.as_regex().as_str(), r"^/a\.b/([^/]*)/(?s:.*)$");
    }

    #[test]
    fn test_special_characters_are_literal() {
        let matcher = TemplateMatcher::new("/a.b/:x").unwrap();
        assert!(matcher.parse("/a.b/5").is_some());
        assert!(matcher.parse("/axb/5").is_none());

        let matcher = TemplateMatcher::new("/(v1)+[x]{2}?$|^#,").unwrap();
        assert!(matcher.parse("/(v1)+[x]{2}?$|^#,").is_some());
        assert!(matcher.parse("/v1v1").is_none());
    }

    #[test]
    fn test_bare_sigils_are_literal() {
        let matcher = TemplateMatcher::new("/a:/b*/::id").unwrap();
        assert_eq!(names(&matcher), vec!["id"]);
        assert_eq!(matcher.parse("/a:/b*/:7").unwrap().get("id"), Some("7"));
        assert!(matcher.parse("/a:/bbb/:7").is_none());
    }

    #[test]
    fn test_names_are_ascii_words() {
        let matcher = TemplateMatcher::new("/:naïve").unwrap();
        assert_eq!(names(&matcher), vec!["na"]);
        assert_eq!(matcher.parse("/xyïve").unwrap().get("na"), Some("xy"));
    }

    #[test]
    fn test_placeholder_mid_segment() {
        let matcher = TemplateMatcher::new("/v:major.:minor").unwrap();
        let params = matcher.parse("/v1.2").unwrap();
        assert_eq!(params.get("major"), Some("1"));
        assert_eq!(params.get("minor"), Some("2"));
    }

    #[test]
    fn test_duplicate_names_report_first_capture() {
        let matcher = TemplateMatcher::new("/:x/:x").unwrap();
        assert_eq!(names(&matcher), vec!["x", "x"]);
        assert_eq!(matcher.parse("/1/2").unwrap().get("x"), Some("1"));
        assert_eq!(matcher.stringify(&Params::from([("x", "9")])), "/9/9");
    }

    #[test]
    fn test_stringify() {
        let matcher = TemplateMatcher::new("/posts/:id/*rest").unwrap();
        let params = Params::from([("id", "123"), ("rest", "a/b")]);
        assert_eq!(matcher.stringify(&params), "/posts/123/a/b");
    }

    #[test]
    fn test_stringify_missing_values() {
        let matcher = TemplateMatcher::new("/posts/:id/*rest").unwrap();
        assert_eq!(matcher.stringify(&Params::new()), "/posts//");
    }

    #[test]
    fn test_stringify_respects_name_boundaries() {
        let matcher = TemplateMatcher::new("/:id/:idx").unwrap();
        let params = Params::from([("id", "1")]);
        assert_eq!(matcher.stringify(&params), "/1/");
    }

    #[test]
    fn test_stringify_inserts_values_literally() {
        let matcher = TemplateMatcher::new("/:a/:b").unwrap();
        let params = Params::from([("a", ":b$1"), ("b", "x")]);
        assert_eq!(matcher.stringify(&params), "/:b$1/x");
    }

    #[test]
    fn test_display_and_from_str() {
        let matcher: TemplateMatcher = "/user/:id".parse().unwrap();
        assert_eq!(matcher.to_string(), "/user/:id");
        assert_eq!(matcher.template(), "/user/:id");
    }
}
