//! Reverse-edge counting: how many tasks depend on each task.
//!
//! Deliberately independent of [`DependencyGraph`](super::DependencyGraph):
//! the counter runs its own identifier extraction over the raw task list
//! and shares no state with the builder, so either component can change
//! without the other noticing.

use std::collections::{HashMap, HashSet};

use sift_core::model::{Task, TaskId};
use tracing::trace;

/// Set `dependents_count` on every task that has an identifier.
///
/// The count for a task is the number of distinct input tasks whose
/// dependency list names it; a task repeating the same dependency
/// contributes once. References to identifiers outside the input set count
/// nowhere. Tasks without identifiers pass through untouched, with the
/// field left unset.
pub fn annotate_dependents(tasks: &mut [Task]) {
    let mut counts: HashMap<TaskId, usize> = tasks
        .iter()
        .filter_map(|task| task.id.clone())
        .map(|id| (id, 0))
        .collect();

    for task in tasks.iter() {
        let mut seen: HashSet<&TaskId> = HashSet::new();
        for dep in &task.dependencies {
            let dep_id = dep.id();
            if !seen.insert(dep_id) {
                continue;
            }
            if let Some(count) = counts.get_mut(dep_id) {
                *count += 1;
            }
        }
    }

    for task in tasks.iter_mut() {
        if let Some(id) = &task.id {
            let count = counts.get(id).copied().unwrap_or(0);
            trace!(id = %id, count, "annotated dependents");
            task.dependents_count = Some(count);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
