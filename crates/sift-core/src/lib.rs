#![forbid(unsafe_code)]
//! sift-core: the task model and scoring configuration.
//!
//! # Conventions
//!
//! - **Errors**: `anyhow::Result` at loading edges. Irregular *data* is not
//!   an error — unknown field shapes are normalized or defaulted at the
//!   deserialization boundary so ranking stays available.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod model;

pub use config::{BalanceWeights, PriorityThresholds, ScoringConfig};
pub use model::{DependencyRef, DueDate, PriorityLevel, ScoredTask, Task, TaskId};
