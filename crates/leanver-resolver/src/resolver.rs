//! Greedy leanest-version resolution.
//!
//! The pipeline is four independent stages composed here:
//! [`normalize`] and [`score`] every range, [`order`] them narrowest first,
//! then [`fold`] over them choosing versions.

use leanver_core::config::{ResolverConfig, UnrankedPolicy};
use leanver_core::priority::{score, ScoredSpecifier};
use leanver_core::resolution::ResolutionMap;
use leanver_core::specifier::normalize;
use leanver_util::errors::{LeanverError, LeanverResult};

use crate::comparator::{SemverComparator, VersionComparator};
use crate::order::order;

/// Resolve every range to the leanest satisfying version in `versions`.
///
/// Ranges that no version satisfies map to `None`. Ranges outside the
/// specificity table are resolved after all others.
pub fn resolve<R, V>(ranges: &[R], versions: &[V]) -> ResolutionMap
where
    R: AsRef<str>,
    V: AsRef<str>,
{
    let _span = tracing::debug_span!("resolve", ranges = ranges.len(), pool = versions.len())
        .entered();
    fold(&order(score_all(ranges)), versions, &SemverComparator)
}

/// Like [`resolve`], but honours `config.ranking.unranked`.
pub fn try_resolve<R, V>(
    ranges: &[R],
    versions: &[V],
    config: &ResolverConfig,
) -> LeanverResult<ResolutionMap>
where
    R: AsRef<str>,
    V: AsRef<str>,
{
    resolve_with(ranges, versions, config, &SemverComparator)
}

/// Resolve with an explicit configuration and version comparator.
pub fn resolve_with<R, V, C>(
    ranges: &[R],
    versions: &[V],
    config: &ResolverConfig,
    comparator: &C,
) -> LeanverResult<ResolutionMap>
where
    R: AsRef<str>,
    V: AsRef<str>,
    C: VersionComparator,
{
    let _span = tracing::debug_span!("resolve", ranges = ranges.len(), pool = versions.len())
        .entered();
    let scored = score_all(ranges);
    if config.ranking.unranked == UnrankedPolicy::Reject {
        if let Some(unranked) = scored.iter().find(|s| !s.specificity().is_ranked()) {
            return Err(LeanverError::Unranked {
                range: unranked.raw().to_string(),
            }
            .into());
        }
    }
    Ok(fold(&order(scored), versions, comparator))
}

fn score_all<R: AsRef<str>>(ranges: &[R]) -> Vec<ScoredSpecifier> {
    ranges
        .iter()
        .map(|raw| {
            let scored = score(normalize(raw.as_ref()));
            if !scored.specificity().is_ranked() {
                tracing::warn!(
                    "Range `{}` has no specificity rank, resolving it last",
                    scored.raw()
                );
            }
            scored
        })
        .collect()
}

/// Choose a version for each range of `sorted`, in order.
///
/// A range first tries the versions already chosen for earlier ranges and
/// only consults `pool` when none of them fits. Repeated ranges overwrite
/// their earlier result.
pub fn fold<V, C>(sorted: &[ScoredSpecifier], pool: &[V], comparator: &C) -> ResolutionMap
where
    V: AsRef<str>,
    C: VersionComparator,
{
    sorted.iter().fold(ResolutionMap::new(), |mut map, scored| {
        let spec = scored.spec();
        let version = match comparator.max_satisfying(map.chosen_versions(), spec) {
            Some(reused) => {
                tracing::debug!(range = %spec.raw, version = %reused, "reusing chosen version");
                Some(reused)
            }
            None => {
                let fresh = comparator.max_satisfying(pool.iter().map(|v| v.as_ref()), spec);
                match &fresh {
                    Some(version) => {
                        tracing::debug!(range = %spec.raw, version = %version, "chose from pool")
                    }
                    None => tracing::debug!(range = %spec.raw, "no version satisfies range"),
                }
                fresh
            }
        };
        map.insert(spec.raw.clone(), version);
        map
    })
}
