//! Error types for pattern compilation and URL decomposition.
//!
//! Only a broken *pattern* is an error. A URL that does not conform to the
//! pattern is an ordinary negative result (`Ok(None)` / `Ok(false)`), and a
//! candidate URL that cannot even be decomposed is treated the same way.
//!
//! - [`MatcherError`]: returned by [`UrlMatcher`](crate::UrlMatcher) when its
//!   pattern cannot be turned into per-component sub-templates.
//! - [`UriError`]: the structural reason a string could not be split into
//!   URL components.
//!
//! # Examples
//!
//! ```
//! use url_template_matcher::{MatcherError, UrlMatcher};
//!
//! let matcher = UrlMatcher::new("http://localhost:{port}/");
//! let err = matcher.matches("http://localhost:8080/").unwrap_err();
//! assert!(matches!(err, MatcherError::InvalidPattern { .. }));
//! ```

use std::fmt;

// ============================================================================
// Matcher errors
// ============================================================================

/// Error raised when a matcher's pattern is unusable.
///
/// Construction never fails; the error surfaces on first use and is returned
/// again on every later call for the same matcher. The fix is always to
/// change the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    /// The pattern, once its placeholders were substituted, is not a URL.
    InvalidPattern { pattern: String, reason: String },
}

impl MatcherError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl fmt::Display) -> Self {
        MatcherError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The pattern this error was raised for.
    pub fn pattern(&self) -> &str {
        match self {
            MatcherError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid URL pattern '{}': {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for MatcherError {}

// ============================================================================
// URI decomposition errors
// ============================================================================

/// Structural problems found while splitting a string into URL components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// Scheme does not match `[A-Za-z][A-Za-z0-9+.-]*`.
    InvalidScheme { scheme: String },

    /// Port is present but not made of ASCII digits.
    InvalidPort { port: String },

    /// Host contains whitespace or a delimiter character.
    InvalidHost { host: String },

    /// Userinfo or a port given without a host, e.g. `http://user@:80/`.
    MissingHost { authority: String },

    /// An ip-based scheme with neither a host nor a path.
    MissingHierarchy { scheme: String },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::InvalidScheme { scheme } => {
                write!(f, "Invalid scheme format: '{}'", scheme)
            }
            UriError::InvalidPort { port } => {
                write!(f, "Invalid port number: '{}'", port)
            }
            UriError::InvalidHost { host } => {
                write!(f, "Invalid character in host: '{}'", host)
            }
            UriError::MissingHost { authority } => {
                write!(f, "Hostname not supplied: '{}'", authority)
            }
            UriError::MissingHierarchy { scheme } => {
                write!(f, "Absolute URI missing hierarchical segment: '{}:'", scheme)
            }
        }
    }
}

impl std::error::Error for UriError {}

// ============================================================================
// Tests
// ============================================================================
