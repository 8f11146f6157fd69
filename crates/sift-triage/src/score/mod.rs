//! Scoring strategies: pluggable algorithms turning task attributes into a
//! comparable score.
//!
//! # Overview
//!
//! Every strategy implements [`ScoringStrategy`] and honors the same
//! contract: stateless and side-effect-free, scores rounded to two decimal
//! places, priority buckets assigned through
//! [`PriorityThresholds::classify`], and output sorted strictly descending
//! by score with a stable sort (equal scores keep input order). Strategies
//! add enrichment fields only; identity, title, dates, effort, and
//! importance pass through untouched.
//!
//! Strategies are selected through [`StrategyKind`], a static registry —
//! the implementations carry no state, so a `&'static` reference to a unit
//! struct is the whole "instance".
//!
//! [`PriorityThresholds::classify`]: sift_core::config::PriorityThresholds::classify

mod balance;
mod deadline;
mod fastest_wins;
mod high_impact;

pub use balance::SmartBalance;
pub use deadline::DeadlineDriven;
pub use fastest_wins::FastestWins;
pub use high_impact::HighImpact;

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use sift_core::config::ScoringConfig;
use sift_core::model::{ScoredTask, Task};

/// Anything that can score a task collection.
pub trait ScoringStrategy {
    /// Score, classify, and sort `tasks`.
    ///
    /// `config` overrides weights and thresholds; `today` fixes the
    /// reference date for due-date math (defaults to the current local
    /// date).
    fn score_tasks(
        &self,
        tasks: &[Task],
        config: Option<&ScoringConfig>,
        today: Option<NaiveDate>,
    ) -> Vec<ScoredTask>;
}

/// The selectable scoring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    FastestWins,
    HighImpact,
    DeadlineDriven,
    SmartBalance,
}

impl StrategyKind {
    /// Every strategy, in registry order.
    pub const ALL: [Self; 4] = [
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
        Self::SmartBalance,
    ];

    /// Wire name of this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastestWins => "fastest_wins",
            Self::HighImpact => "high_impact",
            Self::DeadlineDriven => "deadline_driven",
            Self::SmartBalance => "smart_balance",
        }
    }

    /// The implementation behind this tag.
    #[must_use]
    pub fn scorer(self) -> &'static dyn ScoringStrategy {
        match self {
            Self::FastestWins => &FastestWins,
            Self::HighImpact => &HighImpact,
            Self::DeadlineDriven => &DeadlineDriven,
            Self::SmartBalance => &SmartBalance,
        }
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::SmartBalance
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ScoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fastest_wins" => Ok(Self::FastestWins),
            "high_impact" => Ok(Self::HighImpact),
            "deadline_driven" => Ok(Self::DeadlineDriven),
            "smart_balance" => Ok(Self::SmartBalance),
            other => Err(ScoreError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Errors surfaced by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The caller named a strategy that is not registered.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Reference date for due-date math: the supplied date, or today.
pub(crate) fn effective_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Round a score to two decimal places for output.
pub(crate) fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Stable descending sort by score; equal scores keep input order.
pub(crate) fn sort_by_score(scored: &mut [ScoredTask]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
