//! Placeholder values extracted from a matching URL.
//!
//! [`Mappings`] is the result of a successful match: placeholder name to the
//! (percent-decoded) text it captured. Values are always strings; typed access
//! goes through [`get_as`](Mappings::get_as).
//!
//! # Example
//!
//! ```
//! use url_template_matcher::UrlMatcher;
//!
//! let matcher = UrlMatcher::new("https://{sub}.example.com/users/{id}");
//! let mappings = matcher.mappings("https://api.example.com/users/7").unwrap().unwrap();
//!
//! assert_eq!(mappings.get("sub"), Some("api"));
//! assert_eq!(mappings.get_as::<u32>("id"), Some(7));
//! ```

use std::collections::hash_map;
use std::collections::HashMap;

/// Placeholder name to captured value.
///
/// # Example
///
/// ```
/// use url_template_matcher::Mappings;
///
/// let mut mappings = Mappings::new();
/// mappings.insert("id", "123");
///
/// assert_eq!(mappings.get("id"), Some("123"));
/// assert_eq!(mappings.get_as::<i32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mappings {
    values: HashMap<String, String>,
}

impl Mappings {
    /// Create empty mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from an existing `HashMap`.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Get a captured value by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Get a value and parse it as a specific type
    ///
    /// Returns `None` if the name is absent or the value does not parse.
    pub fn get_as<T>(&self, name: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.values.get(name)?.parse().ok()
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Return `true` if the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Merge `other` into `self`.
    ///
    /// Values from `other` override existing ones on collision. Extraction
    /// merges components in decomposition order, so the later component wins.
    ///
    /// # Example
    ///
    /// ```
    /// use url_template_matcher::Mappings;
    ///
    /// let mut host: Mappings = [("id", "host-id"), ("sub", "api")].into_iter().collect();
    /// let path: Mappings = [("id", "7")].into_iter().collect();
    ///
    /// host.merge(path);
    /// assert_eq!(host.get("sub"), Some("api"));
    /// assert_eq!(host.get("id"), Some("7"));
    /// ```
    pub fn merge(&mut self, other: Mappings) {
        self.values.extend(other.values);
    }

    /// Iterate over all `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the number of captured values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Consume and return the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.values
    }
}

impl<K, V> FromIterator<(K, V)> for Mappings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Mappings {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
