use leanver_util::errors::LeanverError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resolver configuration, usually loaded from a `leanver.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolverConfig {
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// Ranking settings from `[ranking]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RankingConfig {
    #[serde(default)]
    pub unranked: UnrankedPolicy,
}

/// What to do with a range whose shape has no specificity rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrankedPolicy {
    /// Resolve it after every ranked range.
    Last,
    /// Fail resolution with [`LeanverError::Unranked`].
    Reject,
}

impl Default for UnrankedPolicy {
    fn default() -> Self {
        Self::Last
    }
}

impl ResolverConfig {
    /// A configuration that rejects unranked ranges.
    pub fn strict() -> Self {
        Self {
            ranking: RankingConfig {
                unranked: UnrankedPolicy::Reject,
            },
        }
    }

    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            LeanverError::Config {
                message: format!("Failed to parse resolver config: {e}"),
            }
            .into()
        })
    }

    /// Load the configuration at `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No resolver config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(LeanverError::from)?;
        Self::from_toml_str(&content)
    }
}
