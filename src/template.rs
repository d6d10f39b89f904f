//! URI template extraction.
//!
//! A [`UriTemplate`] is the compiled form of one component's template text,
//! e.g. `{sub}.example.com` or `{?query}`. It understands RFC 6570
//! expressions and runs them in reverse: given a concrete string it either
//! recovers the variable values or reports that the string could not have
//! been produced by the template.
//!
//! # Expressions
//!
//! | Form        | Leader | Joiner | Value characters        |
//! |-------------|--------|--------|-------------------------|
//! | `{var}`     |        | `,`    | unreserved              |
//! | `{+var}`    |        | `,`    | reserved + unreserved   |
//! | `{#var}`    | `#`    | `,`    | reserved + unreserved   |
//! | `{.var}`    | `.`    | `.`    | unreserved except `.`   |
//! | `{/var}`    | `/`    | `/`    | unreserved              |
//! | `{;var}`    | `;`    | `;`    | `var` or `var=value`    |
//! | `{?var}`    | `?`    | `&`    | `var=value`             |
//! | `{&var}`    | `&`    | `&`    | `var=value`             |
//!
//! The `name=value` pairs of a `{?...}` or `{&...}` expression may appear in
//! any order. Each pair is assigned to the declared variable with the same
//! key; a key the expression does not declare is a mismatch unless one of
//! its variables is exploded.
//!
//! Every expression may also match nothing at all. Values are matched lazily
//! and the whole string must be consumed. `%XX` escapes are accepted in every
//! value and decoded in the result. Brace groups that are not valid
//! expressions are matched as literal text.

use crate::mappings::Mappings;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};

const UNRESERVED: &str = r"(?:[A-Za-z0-9\-._~]|%[A-Fa-f0-9]{2})";
const UNRESERVED_NO_DOT: &str = r"(?:[A-Za-z0-9\-_~]|%[A-Fa-f0-9]{2})";
const RESERVED: &str = r"(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[A-Fa-f0-9]{2})";

static EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("expression delimiter is a valid regex"));

static VARSPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\A((?:[A-Za-z0-9_]|%[0-9A-Fa-f]{2})(?:\.?(?:[A-Za-z0-9_]|%[0-9A-Fa-f]{2}))*)(\*|:[0-9]{1,4})?\z",
    )
    .expect("varspec expression is a valid regex")
});

/// RFC 6570 expression operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Simple,
    Reserved,
    Fragment,
    Label,
    PathSegment,
    PathParameter,
    Query,
    QueryContinuation,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Reserved),
            '#' => Some(Operator::Fragment),
            '.' => Some(Operator::Label),
            '/' => Some(Operator::PathSegment),
            ';' => Some(Operator::PathParameter),
            '?' => Some(Operator::Query),
            '&' => Some(Operator::QueryContinuation),
            _ => None,
        }
    }

    const fn leader(self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved => "",
            Operator::Fragment => "#",
            Operator::Label => ".",
            Operator::PathSegment => "/",
            Operator::PathParameter => ";",
            Operator::Query => "?",
            Operator::QueryContinuation => "&",
        }
    }

    const fn joiner(self) -> &'static str {
        match self {
            Operator::Simple | Operator::Reserved | Operator::Fragment => ",",
            Operator::Label => ".",
            Operator::PathSegment => "/",
            Operator::PathParameter => ";",
            Operator::Query | Operator::QueryContinuation => "&",
        }
    }

    const fn value_class(self) -> &'static str {
        match self {
            Operator::Reserved | Operator::Fragment => RESERVED,
            Operator::Label => UNRESERVED_NO_DOT,
            _ => UNRESERVED,
        }
    }

    /// Operators that render `name=value` pairs.
    const fn is_named(self) -> bool {
        matches!(
            self,
            Operator::PathParameter | Operator::Query | Operator::QueryContinuation
        )
    }
}

/// One variable of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Variable {
    name: String,
    operator: Operator,
    explode: bool,
}

impl Variable {
    /// Regex fragment capturing this variable. Exactly one capture group.
    fn pattern(&self) -> String {
        let value = self.operator.value_class();
        let joiner = regex::escape(self.operator.joiner());
        let name = regex::escape(&self.name);
        match (self.operator, self.explode) {
            (Operator::PathParameter, false) => format!("({name}(?:={value}*?)?)?"),
            (Operator::PathParameter, true) => {
                let pair = format!("{value}*=?{value}*?");
                format!("({pair}(?:{joiner}?{pair})*)?")
            }
            (_, true) => format!("({value}*?(?:{joiner}?{value}*?)*)?"),
            (_, false) => format!("({value}*?)"),
        }
    }

    /// Record what this variable captured.
    fn collect(&self, raw: &str, mappings: &mut Mappings) {
        match (self.operator, self.explode) {
            (Operator::PathParameter, false) => {
                let rest = &raw[self.name.len()..];
                put_first(mappings, self.name.clone(), decode(rest.strip_prefix('=').unwrap_or(rest)));
            }
            (operator, true) if operator.is_named() => {
                for pair in raw.split(operator.joiner()).filter(|p| !p.is_empty()) {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    put_first(mappings, decode(key), decode(value));
                }
            }
            _ => put_first(mappings, self.name.clone(), decode(raw)),
        }
    }
}

/// A `{...}` group: one operator applied to a list of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expression {
    operator: Operator,
    variables: Vec<Variable>,
}

impl Expression {
    /// `{?...}` and `{&...}` match their pairs as one unordered list.
    fn is_query(&self) -> bool {
        matches!(self.operator, Operator::Query | Operator::QueryContinuation)
    }

    fn has_explode(&self) -> bool {
        self.variables.iter().any(|v| v.explode)
    }

    /// Number of capture groups emitted by [`pattern`](Self::pattern).
    fn group_count(&self) -> usize {
        if self.is_query() {
            1
        } else {
            self.variables.len()
        }
    }

    /// Regex fragment for the whole expression, optional and lazy.
    fn pattern(&self) -> String {
        let leader = regex::escape(self.operator.leader());
        let joiner = regex::escape(self.operator.joiner());
        let body = if self.is_query() {
            let pair = format!("{UNRESERVED}+={}*?", self.operator.value_class());
            let more = match (self.has_explode(), self.variables.len()) {
                (true, _) => "*".to_string(),
                (false, 1) => String::new(),
                (false, n) => format!("{{0,{}}}", n - 1),
            };
            format!("({pair}(?:{joiner}{pair}){more})")
        } else {
            self.variables
                .iter()
                .map(Variable::pattern)
                .collect::<Vec<_>>()
                .join(&format!("{joiner}?"))
        };
        // Lazy: prefer matching the expression as empty.
        format!("(?:{leader}{body})??")
    }

    /// Assign each captured `key=value` pair to the declared variable with
    /// that key. `None` if a key is undeclared and nothing is exploded.
    fn collect_pairs(&self, raw: &str, mappings: &mut Mappings) -> Option<()> {
        let exploded = self.has_explode();
        for pair in raw.split(self.operator.joiner()) {
            let (key, value) = pair.split_once('=')?;
            let declared = self
                .variables
                .iter()
                .find(|variable| !variable.explode && variable.name == key);
            let name = match declared {
                Some(variable) => variable.name.clone(),
                None if exploded => decode(key),
                None => return None,
            };
            put_first(mappings, name, decode(value));
        }
        Some(())
    }
}

/// A compiled template for a single URL component.
///
/// # Examples
///
/// ```
/// use url_template_matcher::UriTemplate;
///
/// let template = UriTemplate::new("/users/{id}{?tab}").unwrap();
/// let mappings = template.extract("/users/7?tab=posts").unwrap();
/// assert_eq!(mappings.get("id"), Some("7"));
/// assert_eq!(mappings.get("tab"), Some("posts"));
///
/// assert!(template.extract("/orders/7").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct UriTemplate {
    source: String,
    regex: Regex,
    expressions: Vec<Expression>,
}

impl UriTemplate {
    /// Compile template text.
    ///
    /// Fails only if the generated expression exceeds the regex engine's
    /// size limits.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let mut pattern = String::from(r"\A");
        let mut expressions = Vec::new();
        let mut last = 0;

        for caps in EXPRESSION.captures_iter(source) {
            let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Some(expression) = parse_expression(body.as_str()) else {
                continue;
            };
            pattern.push_str(&regex::escape(&source[last..whole.start()]));
            pattern.push_str(&expression.pattern());
            expressions.push(expression);
            last = whole.end();
        }
        pattern.push_str(&regex::escape(&source[last..]));
        pattern.push_str(r"\z");

        Ok(Self {
            source: source.to_string(),
            regex: Regex::new(&pattern)?,
            expressions,
        })
    }

    /// The template text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the template's variables, in order of appearance.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.expressions
            .iter()
            .flat_map(|expression| &expression.variables)
            .map(|v| v.name.as_str())
    }

    /// Return `true` if the template has no expressions.
    pub fn is_literal(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Extract variable values from `input`.
    ///
    /// Returns `None` if `input` does not conform to the template. Variables
    /// whose expression matched nothing are left out of the result.
    pub fn extract(&self, input: &str) -> Option<Mappings> {
        let caps = self.regex.captures(input)?;
        self.collect(&caps)
    }

    /// The first value seen for a name within one template is kept.
    fn collect(&self, caps: &Captures<'_>) -> Option<Mappings> {
        let mut mappings = Mappings::new();
        let mut group = 1;
        for expression in &self.expressions {
            if expression.is_query() {
                if let Some(m) = caps.get(group) {
                    expression.collect_pairs(m.as_str(), &mut mappings)?;
                }
            } else {
                for (offset, variable) in expression.variables.iter().enumerate() {
                    if let Some(m) = caps.get(group + offset) {
                        variable.collect(m.as_str(), &mut mappings);
                    }
                }
            }
            group += expression.group_count();
        }
        Some(mappings)
    }
}

/// Parse the inside of a `{...}` group, or `None` if it is not an expression.
fn parse_expression(body: &str) -> Option<Expression> {
    let mut chars = body.chars();
    let (operator, varlist) = match chars.next().and_then(Operator::from_char) {
        Some(operator) => (operator, chars.as_str()),
        None => (Operator::Simple, body),
    };

    let variables = varlist
        .split(',')
        .map(|varspec| {
            let caps = VARSPEC.captures(varspec)?;
            Some(Variable {
                name: caps.get(1)?.as_str().to_string(),
                operator,
                explode: caps.get(2).is_some_and(|m| m.as_str() == "*"),
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(Expression {
        operator,
        variables,
    })
}

fn put_first(mappings: &mut Mappings, name: String, value: String) {
    if !mappings.contains(&name) {
        mappings.insert(name, value);
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

// ============================================================================
// Tests
// ============================================================================
