//! Test utilities for URL matching tests
//!
//! Provides logging setup, fixtures, and assertion helpers shared by the
//! integration test crates.

#![allow(dead_code)]

use url_template_matcher::{Mappings, UrlMatcher};

/// Send crate diagnostics to the test output. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Match `url` against a fresh matcher for `pattern`.
///
/// Panics if the pattern is invalid.
pub fn mappings_of(pattern: &str, url: &str) -> Option<Mappings> {
    init_logging();
    UrlMatcher::new(pattern)
        .mappings(url)
        .unwrap_or_else(|err| panic!("pattern '{}' should compile: {}", pattern, err))
}

/// Build mappings from `(name, value)` pairs.
pub fn mappings_with(pairs: &[(&str, &str)]) -> Mappings {
    pairs.iter().copied().collect()
}

/// Assert that `url` matches `pattern` with exactly the given mappings.
pub fn assert_extracts(pattern: &str, url: &str, expected: &[(&str, &str)]) {
    let actual = mappings_of(pattern, url);
    assert!(
        actual.is_some(),
        "'{}' should match pattern '{}'",
        url,
        pattern
    );
    assert_eq!(
        actual.unwrap(),
        mappings_with(expected),
        "wrong mappings for '{}' against '{}'",
        url,
        pattern
    );
}

/// Assert that `url` does NOT match `pattern`.
pub fn assert_no_match(pattern: &str, url: &str) {
    assert!(
        mappings_of(pattern, url).is_none(),
        "'{}' should not match pattern '{}'",
        url,
        pattern
    );
}
