//! Specificity ranking of range specifiers.
//!
//! Each normalized range gets a rank describing how narrowly it constrains a
//! version. Lower ranks are narrower and are resolved first, so that broader
//! ranges can reuse the versions chosen for them.
//!
//! | Rank | Shape | Example |
//! |------|-------|---------|
//! | 1    | exact pin | `1.2.3` |
//! | 2    | tilde with patch | `~1.2.3` |
//! | 3    | partial pin | `1.2.x` |
//! | 4    | caret with patch | `^1.2.3` |
//! | 5    | greater than | `>1.2.3` |
//! | 5.5  | greater or equal | `>=1.2.3` |
//! | 6    | less than | `<1.2.3` |
//! | 6.5  | less or equal | `<=1.2.3` |
//! | 7    | caret with minor | `^1.2` |
//! | 8    | major only | `1.x`, `~1`, `^1` |
//! | 9    | anything | `*` |
//!
//! Shapes outside this table (`~1.2`, `^*`, `abc`, ...) are
//! [`Specificity::Unranked`] and sort after everything else.

use std::fmt;

use crate::specifier::{Component, Operator, RangeSpecifier};

/// How narrowly a range constrains a version. Ordered narrowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    ExactPin,
    TildePatch,
    PartialPin,
    CaretPatch,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    CaretMinor,
    MajorOnly,
    Any,
    Unranked,
}

impl Specificity {
    /// Numeric priority, lower is narrower.
    pub fn rank(self) -> f32 {
        match self {
            Specificity::ExactPin => 1.0,
            Specificity::TildePatch => 2.0,
            Specificity::PartialPin => 3.0,
            Specificity::CaretPatch => 4.0,
            Specificity::Greater => 5.0,
            Specificity::GreaterEq => 5.5,
            Specificity::Less => 6.0,
            Specificity::LessEq => 6.5,
            Specificity::CaretMinor => 7.0,
            Specificity::MajorOnly => 8.0,
            Specificity::Any => 9.0,
            Specificity::Unranked => 10.0,
        }
    }

    pub fn is_ranked(self) -> bool {
        self != Specificity::Unranked
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ranked() {
            write!(f, "{}", self.rank())
        } else {
            f.write_str("unranked")
        }
    }
}

/// Which components of a range carry a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Patch is a digit.
    Patch,
    /// Patch is a wildcard, minor is a digit.
    Minor,
    /// Patch and minor are wildcards, major is a digit.
    Major,
    /// All wildcards.
    Any,
    /// Non-digit literals where a digit or wildcard belongs.
    Irregular,
}

impl Shape {
    fn of(spec: &RangeSpecifier) -> Self {
        let class = |c: &Component| (c.is_digit(), c.is_wildcard());
        match (class(&spec.major), class(&spec.minor), class(&spec.patch)) {
            (_, _, (true, _)) => Shape::Patch,
            (_, (true, _), (_, true)) => Shape::Minor,
            ((true, _), (_, true), (_, true)) => Shape::Major,
            ((_, true), (_, true), (_, true)) => Shape::Any,
            _ => Shape::Irregular,
        }
    }
}

/// A range specifier together with its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSpecifier {
    spec: RangeSpecifier,
    specificity: Specificity,
}

impl ScoredSpecifier {
    pub fn spec(&self) -> &RangeSpecifier {
        &self.spec
    }

    pub fn raw(&self) -> &str {
        &self.spec.raw
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn into_spec(self) -> RangeSpecifier {
        self.spec
    }
}

/// Rank a normalized range.
pub fn score(spec: RangeSpecifier) -> ScoredSpecifier {
    let specificity = classify(&spec.operator, Shape::of(&spec));
    ScoredSpecifier { spec, specificity }
}

fn classify(operator: &Operator, shape: Shape) -> Specificity {
    match (operator, shape) {
        (Operator::None, Shape::Patch) => Specificity::ExactPin,
        (Operator::Tilde, Shape::Patch) => Specificity::TildePatch,
        (Operator::None, Shape::Minor) => Specificity::PartialPin,
        (Operator::Caret, Shape::Patch) => Specificity::CaretPatch,
        (Operator::Greater, _) => Specificity::Greater,
        (Operator::GreaterEq, _) => Specificity::GreaterEq,
        (Operator::Less, _) => Specificity::Less,
        (Operator::LessEq, _) => Specificity::LessEq,
        (Operator::Caret, Shape::Minor) => Specificity::CaretMinor,
        (_, Shape::Major) => Specificity::MajorOnly,
        (Operator::None, Shape::Any) => Specificity::Any,
        (Operator::Tilde, Shape::Minor)
        | (Operator::Other(_), Shape::Patch | Shape::Minor)
        | (Operator::Tilde | Operator::Caret | Operator::Other(_), Shape::Any)
        | (_, Shape::Irregular) => Specificity::Unranked,
    }
}
