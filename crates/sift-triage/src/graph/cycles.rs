//! First-cycle detection over the dependency graph.
//!
//! # Overview
//!
//! Depth-first search with two marker sets: `visited` (nodes fully
//! processed or in progress) and an on-path ancestor set. A back-edge to a
//! node on the active path signals a cycle, and the DFS path stack at that
//! moment is the reported cycle.
//!
//! The reported path is the ancestor chain, not a minimal cycle: when the
//! search branched before the loop closed, ancestors outside the loop stay
//! on the path. Callers treat the result as "these ids participate in a
//! circular chain", not as an exact loop.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use sift_core::model::TaskId;
use tracing::debug;

use super::build::DependencyGraph;

/// Find one dependency cycle, if any exists.
///
/// Starts from every graph key in input order and follows edges in input
/// order, so the same input always reports the same cycle. Self-loops are
/// one-node cycles. Dangling dependency ids are leaves and cannot extend a
/// path. Disconnected components are all searched; the walk is `O(V + E)`
/// and terminates on any finite graph.
#[must_use]
pub fn detect_cycle(graph: &DependencyGraph) -> Option<Vec<TaskId>> {
    let mut visited: HashSet<NodeIndex> = HashSet::new();

    for &start in graph.keys_in_order() {
        if visited.contains(&start) {
            continue;
        }
        if let Some(path) = dfs_from(graph, start, &mut visited) {
            debug!(len = path.len(), "dependency cycle detected");
            return Some(path);
        }
    }

    None
}

/// Iterative DFS from `start`; returns the path stack at the moment a
/// back-edge is found.
///
/// Each frame is `(node, successors, next successor index)` so large graphs
/// cannot overflow the call stack.
fn dfs_from(
    graph: &DependencyGraph,
    start: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
) -> Option<Vec<TaskId>> {
    let mut call_stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> = Vec::new();
    let mut on_path: HashSet<NodeIndex> = HashSet::new();
    let mut path: Vec<NodeIndex> = Vec::new();

    visited.insert(start);
    on_path.insert(start);
    path.push(start);
    call_stack.push((start, graph.successors_in_order(start), 0));

    while let Some(frame) = call_stack.last_mut() {
        let current = frame.0;

        if frame.2 < frame.1.len() {
            let next = frame.1[frame.2];
            frame.2 += 1;

            if on_path.contains(&next) {
                // Back-edge: the active path closes a loop.
                return Some(path.iter().map(|&idx| graph.id_of(idx)).collect());
            }
            if !visited.contains(&next) {
                visited.insert(next);
                on_path.insert(next);
                path.push(next);
                call_stack.push((next, graph.successors_in_order(next), 0));
            }
        } else {
            call_stack.pop();
            on_path.remove(&current);
            path.pop();
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use sift_core::model::{DependencyRef, Task};

    use super::*;

    fn graph_of(defs: &[(&str, &[&str])]) -> DependencyGraph {
        let tasks: Vec<Task> = defs
            .iter()
            .map(|(id, deps)| Task {
                id: Some(TaskId::from(*id)),
                dependencies: deps
                    .iter()
                    .map(|d| DependencyRef::Id(TaskId::from(*d)))
                    .collect(),
                ..Task::default()
            })
            .collect();
        DependencyGraph::from_tasks(&tasks)
    }

    fn ids(cycle: &[TaskId]) -> Vec<&str> {
        cycle.iter().map(TaskId::as_str).collect()
    }

    #[test]
    fn acyclic_chain_has_no_cycle() {
        let graph = graph_of(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        assert_eq!(detect_cycle(&graph), None);
    }

    #[test]
    fn empty_graph_has_no_cycle() {
        let graph = graph_of(&[]);
        assert_eq!(detect_cycle(&graph), None);
    }

    #[test]
    fn two_node_cycle_detected() {
        let graph = graph_of(&[("a", &["b"]), ("b", &["a"])]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["a", "b"]);
    }

    #[test]
    fn self_loop_is_a_one_node_cycle() {
        let graph = graph_of(&[("a", &["a"])]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["a"]);
    }

    #[test]
    fn dangling_reference_is_not_a_cycle() {
        let graph = graph_of(&[("a", &["ghost"]), ("b", &["a"])]);
        assert_eq!(detect_cycle(&graph), None);
    }

    #[test]
    fn cycle_found_in_later_component() {
        let graph = graph_of(&[("a", &["b"]), ("b", &[]), ("c", &["d"]), ("d", &["c"])]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["c", "d"]);
    }

    #[test]
    fn path_is_ancestor_chain_not_minimal_cycle() {
        // a explores the leaf b first (popped from the path), then closes
        // the loop through c. The report is the active path [a, c].
        let graph = graph_of(&[("a", &["b", "c"]), ("b", &[]), ("c", &["a"])]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["a", "c"]);
    }

    #[test]
    fn branch_prefix_can_remain_on_the_path() {
        // The loop is b ⇄ c, reached through a. The reported path keeps
        // the ancestor a — accepted approximation, not a minimal cycle.
        let graph = graph_of(&[("a", &["b"]), ("b", &["c"]), ("c", &["b"])]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["a", "b", "c"]);
    }

    #[test]
    fn first_key_order_determines_reported_cycle() {
        // Two independent cycles; the one reachable from the earliest
        // input key wins.
        let graph = graph_of(&[
            ("x", &["y"]),
            ("y", &["x"]),
            ("p", &["q"]),
            ("q", &["p"]),
        ]);
        let cycle = detect_cycle(&graph).expect("cycle expected");
        assert_eq!(ids(&cycle), vec!["x", "y"]);
    }

    #[test]
    fn terminates_on_dense_graph() {
        // Fully-connected five nodes; just has to finish and find a cycle.
        let all = ["a", "b", "c", "d", "e"];
        let defs: Vec<(&str, Vec<&str>)> = all
            .iter()
            .map(|id| (*id, all.iter().filter(|o| *o != id).copied().collect()))
            .collect();
        let borrowed: Vec<(&str, &[&str])> = defs
            .iter()
            .map(|(id, deps)| (*id, deps.as_slice()))
            .collect();

        let graph = graph_of(&borrowed);
        assert!(detect_cycle(&graph).is_some());
    }
}
