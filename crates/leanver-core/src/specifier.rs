//! Range specifier normalization.
//!
//! A raw range string is split into an operator and exactly three version
//! components, each either a literal token or a wildcard:
//!
//! - `1.2.3` => `1.2.3`
//! - `>=1.2.3` => `>=1.2.3`
//! - `~1.2` => `~1.2.x`
//! - `^1` => `^1.x.x`
//! - `1.2.*` => `1.2.x`
//! - `1.x` => `1.x.x`
//! - `=1.2.3` => `1.2.3`
//! - `^v1.2` => `^1.2.x`
//! - `*`, `x`, `""` => `x.x.x`
//!
//! Components are kept as text. Nothing here checks that a literal is a
//! number; that is left to specificity ranking and version matching.

use std::fmt;

/// Characters that make up a leading operator run.
const OPERATOR_CHARS: &[char] = &['~', '^', '>', '<', '='];

/// The comparison operator in front of a range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator, or a bare `=`.
    None,
    Tilde,
    Caret,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    /// Any other run of operator characters, kept verbatim (e.g. `>>`, `=<`).
    Other(String),
}

impl Operator {
    /// Classify a run of operator characters.
    pub fn parse(run: &str) -> Self {
        match run {
            "" | "=" => Operator::None,
            "~" | "~>" => Operator::Tilde,
            "^" => Operator::Caret,
            ">" => Operator::Greater,
            ">=" => Operator::GreaterEq,
            "<" => Operator::Less,
            "<=" => Operator::LessEq,
            other => Operator::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Operator::None => "",
            Operator::Tilde => "~",
            Operator::Caret => "^",
            Operator::Greater => ">",
            Operator::GreaterEq => ">=",
            Operator::Less => "<",
            Operator::LessEq => "<=",
            Operator::Other(run) => run.as_str(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three version components of a range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Literal(String),
    Wildcard,
}

impl Component {
    fn parse(token: &str) -> Self {
        match token {
            "*" | "x" | "X" => Component::Wildcard,
            _ => Component::Literal(token.to_string()),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Component::Wildcard)
    }

    /// True when the component is a literal starting with a digit.
    pub fn is_digit(&self) -> bool {
        match self {
            Component::Literal(text) => text.starts_with(|c: char| c.is_ascii_digit()),
            Component::Wildcard => false,
        }
    }

    /// The numeric value of a literal made only of ASCII digits, without
    /// leading zeros.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Component::Literal(text)
                if !text.is_empty()
                    && text.bytes().all(|b| b.is_ascii_digit())
                    && (text == "0" || !text.starts_with('0')) =>
            {
                text.parse().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Literal(text) => f.write_str(text),
            Component::Wildcard => f.write_str("x"),
        }
    }
}

/// A range specifier in structured form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSpecifier {
    /// The string the caller passed in, used as the result key.
    pub raw: String,
    pub operator: Operator,
    pub major: Component,
    pub minor: Component,
    pub patch: Component,
}

impl RangeSpecifier {
    pub fn components(&self) -> [&Component; 3] {
        [&self.major, &self.minor, &self.patch]
    }
}

/// Canonical form, e.g. `~1.2.x` for `~1.2`.
impl fmt::Display for RangeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.operator, self.major, self.minor, self.patch
        )
    }
}

/// Normalize a raw range string into a [`RangeSpecifier`].
///
/// Never fails: unusual input is tokenized as-is and left for ranking and
/// matching to reject.
pub fn normalize(raw: &str) -> RangeSpecifier {
    let text = raw.trim();
    let rest = text.trim_start_matches(OPERATOR_CHARS);
    let operator = Operator::parse(&text[..text.len() - rest.len()]);
    let rest = rest.strip_prefix(['v', 'V']).unwrap_or(rest);

    let rest = if rest.is_empty() { "*" } else { rest };
    // A fourth dot-separated piece stays glued to the patch so it is never
    // silently dropped.
    let mut parts = rest.splitn(3, '.').map(Component::parse);
    let major = parts.next().unwrap_or(Component::Wildcard);
    let minor = parts.next().unwrap_or(Component::Wildcard);
    let patch = parts.next().unwrap_or(Component::Wildcard);

    RangeSpecifier {
        raw: raw.to_string(),
        operator,
        major,
        minor,
        patch,
    }
}
