#![forbid(unsafe_code)]
//! sift-triage: dependency-graph analysis and task scoring.
//!
//! # Conventions
//!
//! - **Errors**: the engine surfaces [`ScoreError`] for caller mistakes
//!   (an unknown strategy name). Irregular task data never errors — each
//!   field defaults as documented on the model types.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).
//!
//! # Pipeline
//!
//! ```text
//! Vec<Task>
//!    ↓  graph::DependencyGraph::from_tasks()
//! DependencyGraph ──→ graph::detect_cycle() ──→ Option<Vec<TaskId>>
//!    ↓  graph::annotate_dependents()
//! Vec<Task> (dependents_count set)
//!    ↓  score::StrategyKind → ScoringStrategy::score_tasks()
//! Vec<ScoredTask> (sorted; analyze() flags cycle members)
//! ```

pub mod analyze;
pub mod graph;
pub mod score;

pub use analyze::{CYCLE_MARKER, analyze, analyze_with, suggest};
pub use graph::{DependencyGraph, annotate_dependents, detect_cycle};
pub use score::{ScoreError, ScoringStrategy, StrategyKind};
