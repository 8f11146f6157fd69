//! Dependency graph construction and analysis.
//!
//! # Overview
//!
//! This module turns a task collection into a [`petgraph`] directed graph
//! over task identifiers, finds circular dependency chains, and counts how
//! many tasks depend on each task.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A **depends on** B" — B must be completed before
//! A can start. Dependency entries are normalized to identifiers at
//! insertion time; the graph never refers back to task records.
//!
//! ## Pipeline
//!
//! ```text
//! &[Task]
//!    ↓  build::DependencyGraph::from_tasks()
//! DependencyGraph (identifiers only; dangling references become leaves)
//!    ↓  cycles::detect_cycle()
//! Option<Vec<TaskId>>   (first cycle found, DFS path at detection)
//!
//! &mut [Task]
//!    ↓  dependents::annotate_dependents()
//! dependents_count set on every task with an identifier
//! ```
//!
//! The dependents counter deliberately does not consume the graph: it runs
//! its own identifier extraction over the raw task list and shares no state
//! with the builder.

pub mod build;
pub mod cycles;
pub mod dependents;

// Re-export primary types at module level for convenience.
pub use build::DependencyGraph;
pub use cycles::detect_cycle;
pub use dependents::annotate_dependents;
