#![allow(dead_code)]

use route_matcher::{Params, Rules, TemplateMatcher};

pub fn template(t: &str) -> TemplateMatcher {
    TemplateMatcher::new(t).unwrap_or_else(|e| panic!("Failed to compile: {t}\nError: {e:?}"))
}

pub fn template_with(t: &str, rules: Rules) -> TemplateMatcher {
    TemplateMatcher::with_rules(t, rules)
        .unwrap_or_else(|e| panic!("Failed to compile: {t}\nError: {e:?}"))
}

pub fn parse(t: &str, url: &str) -> Params {
    template(t)
        .parse(url)
        .unwrap_or_else(|| panic!("Expected {url} to match {t}"))
}

pub fn assert_no_match(t: &str, url: &str) {
    if let Some(params) = template(t).parse(url) {
        panic!("Expected {url} not to match {t}, got {params:?}");
    }
}
