//! Analysis orchestration: graph → cycle → dependents → strategy →
//! cycle annotation.

use std::collections::HashSet;

use chrono::NaiveDate;
use sift_core::config::ScoringConfig;
use sift_core::model::{ScoredTask, Task, TaskId};
use tracing::{debug, warn};

use crate::graph::{DependencyGraph, annotate_dependents, detect_cycle};
use crate::score::{ScoreError, StrategyKind};

/// Prefix added to the explanation of every task inside a detected cycle.
pub const CYCLE_MARKER: &str = "[CYCLE DETECTED]";

/// How many tasks [`suggest`] returns at most.
const SUGGEST_LIMIT: usize = 3;

/// Rank `tasks` with the named strategy.
///
/// Resolves the strategy name, then delegates to [`analyze_with`].
///
/// # Errors
///
/// [`ScoreError::UnknownStrategy`] when `strategy` names no registered
/// strategy. No partial result is produced.
pub fn analyze(
    tasks: Vec<Task>,
    strategy: &str,
    config: Option<&ScoringConfig>,
    today: Option<NaiveDate>,
) -> Result<Vec<ScoredTask>, ScoreError> {
    let kind: StrategyKind = strategy.parse()?;
    Ok(analyze_with(kind, tasks, config, today))
}

/// Rank `tasks` with an already-resolved strategy tag.
///
/// Pipeline: build the dependency graph, detect one cycle, annotate
/// dependents counts, score with the strategy, then flag cycle members by
/// setting `has_cycle` and prefixing their explanation with
/// [`CYCLE_MARKER`].
///
/// Takes the collection by value: the dependents counter annotates the
/// task records in place, and ownership keeps that mutation invisible to
/// the caller.
#[must_use]
pub fn analyze_with(
    kind: StrategyKind,
    mut tasks: Vec<Task>,
    config: Option<&ScoringConfig>,
    today: Option<NaiveDate>,
) -> Vec<ScoredTask> {
    let graph = DependencyGraph::from_tasks(&tasks);
    let cycle = detect_cycle(&graph);
    annotate_dependents(&mut tasks);

    let mut scored = kind.scorer().score_tasks(&tasks, config, today);

    if let Some(cycle) = &cycle {
        warn!(members = cycle.len(), "dependency cycle detected");
        let members: HashSet<&TaskId> = cycle.iter().collect();

        for task in &mut scored {
            if task.id().is_some_and(|id| members.contains(id)) {
                task.has_cycle = true;
                task.explanation = format!("{CYCLE_MARKER} {}", task.explanation);
            }
        }
    }

    debug!(strategy = %kind, tasks = scored.len(), "analysis complete");
    scored
}

/// The top picks for "what should I work on today".
///
/// Fixed to the smart-balance strategy; returns at most the first three
/// results of [`analyze_with`], in the same order — no re-sort, no dedup,
/// no filtering.
#[must_use]
pub fn suggest(
    tasks: Vec<Task>,
    config: Option<&ScoringConfig>,
    today: Option<NaiveDate>,
) -> Vec<ScoredTask> {
    let mut scored = analyze_with(StrategyKind::SmartBalance, tasks, config, today);
    scored.truncate(SUGGEST_LIMIT);
    scored
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
