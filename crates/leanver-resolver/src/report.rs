//! Summary of a finished resolution.

use std::fmt;

use leanver_core::resolution::ResolutionMap;

/// How lean a resolution turned out: which distinct versions it references
/// and which ranges went unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub ranges: usize,
    /// Distinct chosen versions, in the order they were first chosen.
    pub distinct_versions: Vec<String>,
    pub unresolved: Vec<String>,
}

impl ResolutionReport {
    pub fn from_map(map: &ResolutionMap) -> Self {
        Self {
            ranges: map.len(),
            distinct_versions: map
                .distinct_versions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            unresolved: map.unresolved().map(str::to_string).collect(),
        }
    }

    /// True when every resolved range shares a single version.
    pub fn is_lean(&self) -> bool {
        self.distinct_versions.len() <= 1
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ranges == 0 {
            return write!(f, "No ranges resolved.");
        }
        write!(
            f,
            "Resolved {} range(s) to {} version(s)",
            self.ranges,
            self.distinct_versions.len()
        )?;
        if !self.distinct_versions.is_empty() {
            write!(f, ": {}", self.distinct_versions.join(", "))?;
        }
        if !self.unresolved.is_empty() {
            write!(f, "\nUnresolved ({}):", self.unresolved.len())?;
            for range in &self.unresolved {
                write!(f, "\n  {range:?}")?;
            }
        }
        Ok(())
    }
}
