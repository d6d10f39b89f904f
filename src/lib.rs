//! # url-template-matcher
//!
//! Decide whether a URL conforms to a URL template and pull out the values
//! of its placeholders.
//!
//! A pattern is ordinary URL text with RFC 6570 style placeholders anywhere a
//! literal character could appear:
//!
//! ```text
//! https://{sub}.example.com/users/{id}
//! https://example.com/search{?query}
//! /docs/{+path}{#section}
//! ```
//!
//! The pattern is split into the eight URL components (scheme, user,
//! password, host, port, path, query, fragment) and each non-empty component
//! becomes its own sub-template. A candidate URL matches when every
//! sub-template matches the corresponding component of the URL; components
//! the pattern leaves empty are unconstrained.
//!
//! # Quick start
//!
//! ```
//! use regex::Regex;
//! use url_template_matcher::{Expectations, UrlMatcher};
//!
//! let matcher = UrlMatcher::new("https://example.com/search{?query}");
//!
//! let mappings = matcher
//!     .mappings("https://example.com/search?query=cats")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(mappings.get("query"), Some("cats"));
//!
//! let expected = Expectations::new().with("query", Regex::new("^ca").unwrap());
//! assert!(matcher
//!     .matches_with("https://example.com/search?query=cats", &expected)
//!     .unwrap());
//! assert!(!matcher.matches("https://example.com/browse?query=cats").unwrap());
//! ```
//!
//! # Errors
//!
//! Only the pattern can be wrong. [`UrlMatcher::new`] never fails; a pattern
//! that is not a URL once its placeholders are substituted reports
//! [`MatcherError::InvalidPattern`] from the first (and every later) call.
//! A URL that does not conform is `Ok(None)` / `Ok(false)`.
//!
//! # Features
//!
//! | Feature   | Default | Purpose                                   |
//! |-----------|---------|-------------------------------------------|
//! | `log`     | yes     | Diagnostics through the `log` crate       |
//! | `tracing` | no      | Diagnostics through the `tracing` crate   |
//! | `cache`   | yes     | [`cache::MatcherCache`], an LRU of matchers |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

#[cfg(feature = "cache")]
#[cfg_attr(docsrs, doc(cfg(feature = "cache")))]
pub mod cache;
pub mod compiler;
pub mod error;
pub mod expect;
pub mod mappings;
pub mod matcher;
pub mod slug;
pub mod template;
pub mod uri;

pub use compiler::ComponentTemplates;
pub use error::{MatcherError, UriError};
pub use expect::{Expectations, Expected};
pub use mappings::Mappings;
pub use matcher::UrlMatcher;
pub use slug::{Slug, SlugTable};
pub use template::UriTemplate;
pub use uri::{Component, UriParts};

#[cfg(feature = "cache")]
pub use cache::{CacheStats, MatcherCache};
