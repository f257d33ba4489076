//! Range matching against concrete versions.
//!
//! The resolver only needs one question answered: which is the greatest
//! candidate a range accepts. [`VersionComparator`] is that seam, and
//! [`SemverComparator`] answers it with the `semver` crate.

use leanver_core::specifier::{Component, Operator, RangeSpecifier};
use semver::{Comparator, Op, Prerelease, Version, VersionReq};

/// Picks the greatest candidate version satisfying a range.
pub trait VersionComparator {
    /// Returns the candidate string as given, or `None` when no candidate
    /// satisfies `spec`. Candidates that are not valid versions are ignored.
    fn max_satisfying<'a, I>(&self, candidates: I, spec: &RangeSpecifier) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>;
}

/// [`VersionComparator`] backed by `semver::VersionReq`.
///
/// Bare versions are exact matches: `1.2.3` accepts only `1.2.3`, while a
/// partial bare version such as `1.2` accepts the whole `1.2.x` line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverComparator;

impl SemverComparator {
    /// Translate a range into a single-comparator `VersionReq`.
    ///
    /// Returns `None` for ranges that can match nothing: unknown operators,
    /// non-numeric components, and `>*` / `<*`.
    pub fn requirement(spec: &RangeSpecifier) -> Option<VersionReq> {
        let op = match spec.operator {
            Operator::None => Op::Exact,
            Operator::Tilde => Op::Tilde,
            Operator::Caret => Op::Caret,
            Operator::Greater => Op::Greater,
            Operator::GreaterEq => Op::GreaterEq,
            Operator::Less => Op::Less,
            Operator::LessEq => Op::LessEq,
            Operator::Other(_) => return None,
        };

        // Components after the first wildcard are ignored: `1.x.3` is `1.x`.
        let mut numbers = Vec::with_capacity(3);
        for component in spec.components() {
            match component {
                Component::Wildcard => break,
                literal => numbers.push(literal.as_number()?),
            }
        }

        let Some(&major) = numbers.first() else {
            return match op {
                Op::Greater | Op::Less => None,
                _ => Some(VersionReq::STAR),
            };
        };

        Some(VersionReq {
            comparators: vec![Comparator {
                op,
                major,
                minor: numbers.get(1).copied(),
                patch: numbers.get(2).copied(),
                pre: Prerelease::EMPTY,
            }],
        })
    }
}

impl VersionComparator for SemverComparator {
    fn max_satisfying<'a, I>(&self, candidates: I, spec: &RangeSpecifier) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let req = Self::requirement(spec)?;
        let mut best: Option<(Version, &str)> = None;
        for candidate in candidates {
            let text = candidate.trim();
            let text = text.strip_prefix(['v', 'V']).unwrap_or(text);
            let version = match Version::parse(text) {
                Ok(v) => v,
                Err(e) => {
                    tracing::trace!("Ignoring candidate `{candidate}`: {e}");
                    continue;
                }
            };
            if !req.matches(&version) {
                continue;
            }
            if best.as_ref().map_or(true, |(current, _)| version > *current) {
                best = Some((version, candidate));
            }
        }
        best.map(|(_, candidate)| candidate.to_string())
    }
}
