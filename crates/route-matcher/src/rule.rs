//! Validation rules applied to captured placeholder values.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

/// A shared predicate over a captured value.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A check a captured value must pass for a parse to succeed.
#[derive(Clone)]
pub enum Rule {
    /// The value must contain a match of the pattern. Anchor the pattern
    /// (`^...$`) to require a full match.
    Pattern(Regex),
    /// The predicate must return `true` for the value.
    Predicate(Predicate),
    /// The value must equal this string exactly.
    Literal(String),
}

impl Rule {
    /// Creates a predicate rule.
    #[must_use]
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Returns true if `value` passes this rule.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(value),
            Self::Predicate(f) => f(value),
            Self::Literal(expected) => expected == value,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
        }
    }
}

impl From<Regex> for Rule {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<&str> for Rule {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for Rule {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

macro_rules! literal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rule {
                fn from(n: $t) -> Self {
                    Self::Literal(n.to_string())
                }
            }
        )*
    };
}

literal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Rules keyed by placeholder name.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: HashMap<String, Rule>,
}

impl Rules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for `name`, replacing any previous one.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.insert(name, rule);
        self
    }

    /// Inserts a rule for `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<Rule>) {
        self.rules.insert(name.into(), rule.into());
    }

    /// Gets the rule for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns true if `value` passes the rule for `name`, or if there is no
    /// rule for `name`.
    #[must_use]
    pub fn check(&self, name: &str, value: &str) -> bool {
        self.get(name).is_none_or(|rule| rule.accepts(value))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K, R> FromIterator<(K, R)> for Rules
where
    K: Into<String>,
    R: Into<Rule>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (name, rule) in iter {
            rules.insert(name, rule);
        }
        rules
    }
}
