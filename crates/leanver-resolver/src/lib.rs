//! Leanest-version resolution.
//!
//! Ranges are normalized, ranked by specificity, ordered narrowest first and
//! then resolved greedily: each range reuses a version already chosen for a
//! narrower range when it can, and only falls back to the full pool when it
//! cannot. The result references as few distinct versions as the order allows.

pub mod comparator;
pub mod order;
pub mod report;
pub mod resolver;

pub use resolver::{fold, resolve, resolve_with, try_resolve};
