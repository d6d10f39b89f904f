//! Placeholder substitution.
//!
//! A pattern such as `https://{sub}.example.com/search{?query}` is not a
//! parseable URL: braces are not allowed in a host, and `{?query}` hides the
//! start of the query component. Before decomposition every placeholder
//! (slug) is swapped for a short alphabetic token, keeping any leading
//! non-alphabetic characters so that `?` and `#` still open the query and
//! fragment. After decomposition each component is mapped back to template
//! text by reversing the swap.
//!
//! Tokens depend only on the slug's ordinal position, so the same pattern
//! always produces the same substituted URL.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use once_cell::sync::Lazy;
use regex::Regex;
use sha1::{Digest, Sha1};

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+\}").expect("slug expression is a valid regex"));

const TOKEN_LEN: usize = 6;

/// A single `{...}` occurrence in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    /// Original text including braces, e.g. `{?query}`.
    pub text: String,
    /// Leading non-alphabetic characters inside the braces, e.g. `?`.
    pub prefix: String,
    /// Alphabetic stand-in used while the pattern is parsed as a URL.
    pub token: String,
}

impl Slug {
    fn new(text: &str, ordinal: usize) -> Self {
        Self {
            text: text.to_string(),
            prefix: slug_prefix(text).to_string(),
            token: substitution_token(ordinal),
        }
    }

    /// Text written into the pattern in place of the slug.
    pub fn substitute(&self) -> String {
        format!("{}{}", self.prefix, self.token)
    }
}

/// Forward and reverse substitution tables for one pattern.
#[derive(Debug, Clone, Default)]
pub struct SlugTable {
    slugs: Vec<Slug>,
}

impl SlugTable {
    /// Scan `pattern` for slugs, in order of appearance.
    pub fn scan(pattern: &str) -> Self {
        let slugs = SLUG
            .find_iter(pattern)
            .enumerate()
            .map(|(ordinal, m)| Slug::new(m.as_str(), ordinal))
            .collect();
        Self { slugs }
    }

    /// Slugs in pattern order.
    pub fn slugs(&self) -> &[Slug] {
        &self.slugs
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Replace every slug in `pattern` with its prefixed token.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_template_matcher::SlugTable;
    ///
    /// let pattern = "https://example.com/search{?query}";
    /// let table = SlugTable::scan(pattern);
    /// assert_eq!(table.substitute(pattern), "https://example.com/search?tlifxq");
    /// ```
    pub fn substitute(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len());
        let mut last = 0;
        for (m, slug) in SLUG.find_iter(pattern).zip(&self.slugs) {
            out.push_str(&pattern[last..m.start()]);
            out.push_str(&slug.substitute());
            last = m.end();
        }
        out.push_str(&pattern[last..]);
        out
    }

    /// Turn one substituted URL component back into template text.
    ///
    /// For each slug the first prefixed token is restored, then the first
    /// bare token, which covers components whose delimiter was consumed by
    /// decomposition (a query of `tlifxq` came from `?tlifxq`).
    pub fn restore(&self, component: &str) -> String {
        let mut restored = component.to_string();
        for slug in &self.slugs {
            restored = restored.replacen(&slug.substitute(), &slug.text, 1);
            if !slug.prefix.is_empty() {
                restored = restored.replacen(&slug.token, &slug.text, 1);
            }
        }
        restored
    }
}

/// Leading non-alphabetic characters of a slug's contents.
fn slug_prefix(slug: &str) -> &str {
    let inner = slug.strip_prefix('{').unwrap_or(slug);
    let end = inner
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(inner.len());
    // The closing brace is never part of the prefix.
    inner[..end].trim_end_matches('}')
}

/// Repeatable alphabetic token for the slug at `ordinal`.
///
/// First six letters of the URL-safe Base64 SHA-1 digest of the ordinal's
/// decimal form.
pub fn substitution_token(ordinal: usize) -> String {
    let digest = Sha1::digest(ordinal.to_string().as_bytes());
    URL_SAFE
        .encode(digest)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(TOKEN_LEN)
        .collect()
}
