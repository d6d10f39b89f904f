//! Expected values for extracted mappings.
//!
//! Callers can assert more than "the URL matches": [`Expectations`] pins
//! individual placeholders to a literal string, a number, or a regular
//! expression.
//!
//! | Expected           | Satisfied when the actual value...            |
//! |--------------------|-----------------------------------------------|
//! | `"text"`           | equals the string exactly                     |
//! | `42`, `4.5`        | equals the number's string form               |
//! | `Regex::new(...)`  | is present and contains a match of the regex  |
//!
//! A placeholder missing from the mappings never satisfies an expectation.
//! Floats keep their fractional part, so `42.0` expects `"42.0"`, not `"42"`.

use crate::mappings::Mappings;
use regex::Regex;
use std::fmt;

/// One expected value.
#[derive(Clone)]
pub enum Expected {
    /// Exact string equality.
    Text(String),
    /// Equality against the decimal string form of a number.
    Number(String),
    /// Unanchored regex match.
    Pattern(Regex),
}

impl Expected {
    /// Check `actual` against this expectation.
    pub fn is_satisfied_by(&self, actual: Option<&str>) -> bool {
        match (self, actual) {
            (Expected::Text(expected) | Expected::Number(expected), Some(actual)) => {
                actual == expected
            }
            (Expected::Pattern(regex), Some(actual)) => regex.is_match(actual),
            (_, None) => false,
        }
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Expected::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Expected::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
        }
    }
}

impl PartialEq for Expected {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expected::Text(a), Expected::Text(b)) | (Expected::Number(a), Expected::Number(b)) => a == b,
            (Expected::Pattern(a), Expected::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Expected {
    fn from(text: &str) -> Self {
        Expected::Text(text.to_string())
    }
}

impl From<String> for Expected {
    fn from(text: String) -> Self {
        Expected::Text(text)
    }
}

impl From<Regex> for Expected {
    fn from(regex: Regex) -> Self {
        Expected::Pattern(regex)
    }
}

impl From<&Regex> for Expected {
    fn from(regex: &Regex) -> Self {
        Expected::Pattern(regex.clone())
    }
}

macro_rules! impl_from_number {
    ($fmt:literal: $($ty:ty),*) => {
        $(
            impl From<$ty> for Expected {
                fn from(number: $ty) -> Self {
                    Expected::Number(format!($fmt, number))
                }
            }
        )*
    };
}

impl_from_number!("{}": i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_number!("{:?}": f32, f64);

/// Ordered set of expected placeholder values.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use url_template_matcher::{Expectations, Mappings};
///
/// let actual: Mappings = [("id", "42")].into_iter().collect();
///
/// assert!(Expectations::new().with("id", 42).check(&actual));
/// assert!(Expectations::new().with("id", Regex::new(r"4\d").unwrap()).check(&actual));
/// assert!(!Expectations::new().with("id", "43").check(&actual));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expectations {
    entries: Vec<(String, Expected)>,
}

impl Expectations {
    /// Create an empty set; it is satisfied by any mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation (builder style).
    pub fn with(mut self, name: impl Into<String>, expected: impl Into<Expected>) -> Self {
        self.insert(name, expected);
        self
    }

    /// Add an expectation.
    ///
    /// A later expectation for the same name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, expected: impl Into<Expected>) {
        let name = name.into();
        let expected = expected.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = expected,
            None => self.entries.push((name, expected)),
        }
    }

    /// Return the expectation for `name`.
    pub fn get(&self, name: &str) -> Option<&Expected> {
        self.entries
            .iter()
            .find_map(|(existing, expected)| (existing == name).then_some(expected))
    }

    /// Iterate over `(name, expected)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expected)> {
        self.entries.iter().map(|(name, expected)| (name.as_str(), expected))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if every expectation is satisfied by `actual`.
    ///
    /// Stops at the first unsatisfied expectation.
    pub fn check(&self, actual: &Mappings) -> bool {
        self.entries
            .iter()
            .all(|(name, expected)| expected.is_satisfied_by(actual.get(name)))
    }
}

impl<K, V> FromIterator<(K, V)> for Expectations
where
    K: Into<String>,
    V: Into<Expected>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut expectations = Self::new();
        for (name, expected) in iter {
            expectations.insert(name, expected);
        }
        expectations
    }
}
