//! Input and output records for task analysis.
//!
//! [`Task`] is the read-only input entity; [`ScoredTask`] is the enriched
//! output. Heterogeneous caller input (string vs. integer ids, structured
//! vs. plain dependency references, unparseable due dates) is normalized
//! once, here, at the serde boundary — everything downstream sees one shape.

pub mod scored;
pub mod task;

pub use scored::{PriorityLevel, ScoredTask};
pub use task::{DependencyRef, DueDate, Task, TaskId};
