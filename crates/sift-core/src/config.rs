//! Scoring weights, priority thresholds, and config-file loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::PriorityLevel;

/// Assumed effort in hours when a task carries no usable estimate.
///
/// "No estimate" reads as medium effort, not minimal effort. The
/// divide-by-zero floor in the fastest-wins strategy is a separate constant
/// with different semantics.
pub const ASSUMED_EFFORT_HOURS: f64 = 5.0;

/// Weights for the smart-balance strategy's weighted sum.
///
/// Expected to sum to 1.0. This is not enforced and the weighted sum is not
/// re-normalized, so off-unit weights scale final scores accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl Default for BalanceWeights {
    fn default() -> Self {
        Self {
            urgency: 0.4,
            importance: 0.3,
            effort: 0.2,
            dependencies: 0.1,
        }
    }
}

/// Score cutoffs for the [`PriorityLevel`] buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high: 8.0,
            medium: 5.0,
        }
    }
}

impl PriorityThresholds {
    /// Bucket a score: `>= high` is High, then `>= medium` is Medium,
    /// otherwise Low.
    #[must_use]
    pub fn classify(&self, score: f64) -> PriorityLevel {
        if score >= self.high {
            PriorityLevel::High
        } else if score >= self.medium {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }
}

/// Caller-supplied scoring overrides. Every field defaults, so a partial
/// config file overrides only what it names.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: BalanceWeights,
    pub thresholds: PriorityThresholds,
}

impl ScoringConfig {
    /// Load a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }
}
