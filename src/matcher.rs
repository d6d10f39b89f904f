//! URL matching against a pattern.
//!
//! [`UrlMatcher`] owns one pattern. Its sub-templates are compiled on first
//! use and kept for the matcher's lifetime; every query after that is a pure
//! function of the URL.
//!
//! # Extraction
//!
//! Components are visited in decomposition order (scheme, user, password,
//! host, port, path, query, fragment):
//!
//! - no sub-template: the component is unconstrained and contributes nothing
//! - the URL's component matches: its captures are merged into the result
//! - otherwise, for query and fragment only, the component is retried with
//!   its `?` / `#` delimiter put back in front
//! - still no match: the whole URL is a no-match and later components are
//!   not looked at

use crate::compiler::ComponentTemplates;
use crate::error::MatcherError;
use crate::expect::Expectations;
use crate::mappings::Mappings;
use crate::template::UriTemplate;
use crate::uri::{Component, UriParts};
use crate::{debug_log, trace_log};
use once_cell::sync::OnceCell;

/// Matches URLs against a URL template pattern.
///
/// # Examples
///
/// ```
/// use url_template_matcher::{Expectations, UrlMatcher};
///
/// let matcher = UrlMatcher::new("https://{sub}.example.com/users/{id}");
///
/// let mappings = matcher.mappings("https://api.example.com/users/7").unwrap().unwrap();
/// assert_eq!(mappings.get("sub"), Some("api"));
/// assert_eq!(mappings.get("id"), Some("7"));
///
/// assert!(matcher.mappings("https://api.example.com/orders/7").unwrap().is_none());
///
/// let expected = Expectations::new().with("id", 7);
/// assert!(matcher.matches_with("https://api.example.com/users/7", &expected).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    pattern: String,
    templates: OnceCell<Result<ComponentTemplates, MatcherError>>,
}

impl UrlMatcher {
    /// Create a matcher. Never fails; an invalid pattern is reported on first
    /// use.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            templates: OnceCell::new(),
        }
    }

    /// Create a matcher and compile its pattern immediately.
    pub fn compile(pattern: impl Into<String>) -> Result<Self, MatcherError> {
        let matcher = Self::new(pattern);
        matcher.templates()?;
        Ok(matcher)
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Compiled per-component sub-templates.
    ///
    /// Compiles on the first call. Concurrent first calls are serialised and
    /// all observe the same result.
    pub fn templates(&self) -> Result<&ComponentTemplates, MatcherError> {
        self.templates
            .get_or_init(|| ComponentTemplates::compile(&self.pattern))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Extract placeholder values from `url`.
    ///
    /// Returns `Ok(None)` if the URL does not conform to the pattern,
    /// including when the URL cannot be decomposed at all.
    pub fn mappings(&self, url: &str) -> Result<Option<Mappings>, MatcherError> {
        let templates = self.templates()?;

        let parts = match UriParts::parse(url) {
            Ok(parts) => parts,
            Err(err) => {
                debug_log!("Rejecting unparseable URL '{}': {}", url, err);
                return Ok(None);
            }
        };

        let mut result = Mappings::new();
        for (component, template) in templates.iter() {
            match component_matches(component, template, parts.component(component)) {
                Some(mappings) => result.merge(mappings),
                None => {
                    trace_log!(
                        "'{}' does not match '{}': {} differs",
                        url,
                        self.pattern,
                        component
                    );
                    return Ok(None);
                }
            }
        }
        Ok(Some(result))
    }

    /// Return `true` if `url` conforms to the pattern.
    pub fn matches(&self, url: &str) -> Result<bool, MatcherError> {
        Ok(self.mappings(url)?.is_some())
    }

    /// Return `true` if `url` conforms to the pattern and its extracted values
    /// satisfy every expectation.
    ///
    /// Empty expectations behave like [`matches`](Self::matches).
    pub fn matches_with(&self, url: &str, expected: &Expectations) -> Result<bool, MatcherError> {
        let Some(actual) = self.mappings(url)? else {
            return Ok(false);
        };
        Ok(expected.is_empty() || expected.check(&actual))
    }
}

/// Extract one component, retrying with its delimiter for query and fragment.
fn component_matches(component: Component, template: &UriTemplate, value: &str) -> Option<Mappings> {
    trace_log!(
        "Extracting {} '{}' with template '{}'",
        component,
        value,
        template.source()
    );
    if let Some(mappings) = template.extract(value) {
        return Some(mappings);
    }
    let prefix = component.prefix()?;
    template.extract(&format!("{prefix}{value}"))
}
