//! Knobs for the gap analysis. The defaults reproduce the dashboard's
//! historical numbers exactly, so most callers can just use
//! `AnalyzerConfig::default()`.
//!
//! ```rust
//! use skillgap_core::system::config::{AnalyzerConfig, CombinedMetric, LevelConflict};
//!
//! let config = AnalyzerConfig::builder()
//!     .metric(CombinedMetric::DistinctPairs)
//!     .conflicts(LevelConflict::LastWins)
//!     .build().unwrap();
//! assert_eq!(config.metric(), &CombinedMetric::DistinctPairs);
//! assert_eq!(config.skip_archived(), &false);
//! ```

use getset::Getters;
use serde::{Serialize, Deserialize};

/// How the headline "combined" number is computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CombinedMetric {
    /// `|skills with gap| × |employees with gap|`. Coarse, but it's what the
    /// dashboard has always shown.
    Product,
    /// The number of distinct `(employee, skill)` pairs with a gap.
    DistinctPairs,
}

impl Default for CombinedMetric {
    fn default() -> Self {
        CombinedMetric::Product
    }
}

/// Which required level applies when more than one of an employee's jobs
/// requires the same skill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LevelConflict {
    /// The most demanding requirement applies. This is equivalent to testing
    /// every job's requirement on its own.
    Highest,
    /// The requirement from whichever of the employee's jobs comes last in
    /// the job catalog applies. The order the jobs were assigned in plays no
    /// part.
    LastWins,
}

impl Default for LevelConflict {
    fn default() -> Self {
        LevelConflict::Highest
    }
}

/// Configures a gap analysis run.
#[derive(Clone, Debug, Default, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into), default)]
#[getset(get = "pub")]
#[serde(default)]
pub struct AnalyzerConfig {
    /// How to compute the combined metric
    metric: CombinedMetric,
    /// How to reconcile conflicting required levels
    conflicts: LevelConflict,
    /// Ignore archived employees and jobs
    skip_archived: bool,
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.metric(), &CombinedMetric::Product);
        assert_eq!(config.conflicts(), &LevelConflict::Highest);
        assert_eq!(config.skip_archived(), &false);
        assert_eq!(AnalyzerConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn deserializes() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"metric":"DistinctPairs","conflicts":"LastWins","skip_archived":true}"#).unwrap();
        assert_eq!(config.metric(), &CombinedMetric::DistinctPairs);
        assert_eq!(config.conflicts(), &LevelConflict::LastWins);
        assert_eq!(config.skip_archived(), &true);

        let config: AnalyzerConfig = serde_json::from_str(r#"{"skip_archived":true}"#).unwrap();
        assert_eq!(config.metric(), &CombinedMetric::Product);
        assert_eq!(config.skip_archived(), &true);
    }
}
