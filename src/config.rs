//! Association run configuration.
//!
//! All knobs of the epoch cycle live here: scorer tuning, solver choice, and
//! the matching policy. Configurations deserialize from TOML files so an
//! embedding pipeline can swap behavior without recompiling.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::algorithms::assignment::{AssignmentSolver, GreedySolver, HungarianSolver};
use crate::algorithms::compatibility::ScorerConfig;

/// Which assignment solver the cycle runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Exact cubic-time Kuhn-Munkres.
    #[default]
    Hungarian,
    /// Approximate global-best-first.
    Greedy,
}

impl SolverKind {
    /// Instantiate the solver this kind names.
    pub fn build(&self) -> Box<dyn AssignmentSolver> {
        match self {
            SolverKind::Hungarian => Box::new(HungarianSolver),
            SolverKind::Greedy => Box::new(GreedySolver),
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hungarian" => Ok(SolverKind::Hungarian),
            "greedy" => Ok(SolverKind::Greedy),
            other => Err(crate::error::Error::UnknownSolver(other.to_string())),
        }
    }
}

/// How the cycle treats epochs whose observation count differs from the
/// tracked source count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingPolicy {
    /// Require exactly one observation per tracked source; anything else is a
    /// cardinality-mismatch error.
    #[default]
    Strict,
    /// Tolerate unequal counts: unmatched observations seed new sources,
    /// unmatched sources skip the epoch.
    AllowUnmatched,
}

/// Solver section of the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default)]
    pub kind: SolverKind,
}

fn default_unmatched_score() -> f64 {
    1e-6
}

/// Matching section of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub policy: MatchingPolicy,
    /// Score granted to the "stays unmatched" slots under
    /// [`MatchingPolicy::AllowUnmatched`]. Any real pairing scoring above
    /// this wins over leaving the pair unmatched.
    #[serde(default = "default_unmatched_score")]
    pub unmatched_score: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            policy: MatchingPolicy::default(),
            unmatched_score: default_unmatched_score(),
        }
    }
}

/// Full configuration of the association cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociationConfig {
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub solver: SolverSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
}

impl AssociationConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse association configuration TOML")
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::compatibility::FluxWeighting;

    #[test]
    fn test_default_configuration() {
        let config = AssociationConfig::default();
        assert_eq!(config.scorer.flux_weighting, FluxWeighting::Disabled);
        assert_eq!(config.solver.kind, SolverKind::Hungarian);
        assert_eq!(config.matching.policy, MatchingPolicy::Strict);
        assert_eq!(config.matching.unmatched_score, 1e-6);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AssociationConfig::from_toml_str("").unwrap();
        assert_eq!(config, AssociationConfig::default());
    }

    #[test]
    fn test_full_toml_round_trip() {
        let text = r#"
[scorer]
flux_weighting = "multiplicative"

[solver]
kind = "greedy"

[matching]
policy = "allow_unmatched"
unmatched_score = 1e-4
"#;
        let config = AssociationConfig::from_toml_str(text).unwrap();
        assert_eq!(config.scorer.flux_weighting, FluxWeighting::Multiplicative);
        assert_eq!(config.solver.kind, SolverKind::Greedy);
        assert_eq!(config.matching.policy, MatchingPolicy::AllowUnmatched);
        assert_eq!(config.matching.unmatched_score, 1e-4);

        let serialized = toml::to_string(&config).unwrap();
        let back = AssociationConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_solver_kind_from_str() {
        assert_eq!("hungarian".parse::<SolverKind>().unwrap(), SolverKind::Hungarian);
        assert_eq!("Greedy".parse::<SolverKind>().unwrap(), SolverKind::Greedy);
        assert!("simplex".parse::<SolverKind>().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(AssociationConfig::from_toml_str("[solver]\nkind = \"simplex\"").is_err());
    }
}
