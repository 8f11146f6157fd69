//! Graph construction from a task collection.
//!
//! # Overview
//!
//! [`DependencyGraph::from_tasks`] builds a [`petgraph`] directed graph in
//! two passes: one node per task that has an identifier (in input order),
//! then one edge per dependency entry (in input order). Dependency ids that
//! match no input task are added as nodes on the fly — they stay in the
//! graph as leaves with no outgoing edges, but they are not graph *keys*
//! and never receive a dependents count.
//!
//! The dependency list of each task is preserved verbatim: repeated entries
//! produce parallel edges and nothing is deduplicated, so traversal order
//! downstream matches what the caller wrote.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use sift_core::model::{Task, TaskId};
use tracing::debug;

/// A directed dependency graph over task identifiers.
///
/// Nodes are task ids. Tasks without an identifier are skipped entirely;
/// malformed or missing dependency fields never raise an error.
#[derive(Debug)]
pub struct DependencyGraph {
    graph: DiGraph<TaskId, ()>,
    node_map: HashMap<TaskId, NodeIndex>,
    /// Nodes created from input tasks, in input order. These are the graph
    /// keys; dangling dependency targets are excluded.
    keys: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Build the graph from `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut graph = DiGraph::<TaskId, ()>::new();
        let mut node_map: HashMap<TaskId, NodeIndex> = HashMap::with_capacity(tasks.len());
        let mut keys = Vec::with_capacity(tasks.len());

        // Pass 1: every task with an identifier becomes a node.
        for task in tasks {
            let Some(id) = &task.id else { continue };
            let idx = *node_map
                .entry(id.clone())
                .or_insert_with(|| graph.add_node(id.clone()));
            keys.push(idx);
        }

        // Pass 2: add dependency edges, creating nodes for targets that
        // name no input task (dangling references).
        for task in tasks {
            let Some(id) = &task.id else { continue };
            let Some(&from) = node_map.get(id) else { continue };

            for dep in &task.dependencies {
                let dep_id = dep.id();
                let to = *node_map
                    .entry(dep_id.clone())
                    .or_insert_with(|| graph.add_node(dep_id.clone()));
                graph.add_edge(from, to, ());
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built dependency graph"
        );

        Self {
            graph,
            node_map,
            keys,
        }
    }

    /// Number of identifiers in the graph (task keys plus dangling targets).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `id` appears in the graph, as a key or a dangling target.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.node_map.contains_key(id)
    }

    /// Dependency ids recorded for `id`, in input order.
    #[must_use]
    pub fn dependencies_of(&self, id: &TaskId) -> Vec<&TaskId> {
        let Some(&idx) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut deps: Vec<&TaskId> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .collect();
        deps.reverse();
        deps
    }

    /// Graph keys (task-derived nodes) in input order. Traversal restart
    /// points for cycle detection.
    pub(crate) fn keys_in_order(&self) -> &[NodeIndex] {
        &self.keys
    }

    /// Successors of `idx` in input order.
    ///
    /// petgraph stores adjacency most-recent-first, so the successor list
    /// is materialized and reversed to restore insertion order.
    pub(crate) fn successors_in_order(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        next.reverse();
        next
    }

    /// The identifier label for a node.
    pub(crate) fn id_of(&self, idx: NodeIndex) -> TaskId {
        self.graph
            .node_weight(idx)
            .cloned()
            .unwrap_or_else(|| TaskId::new(format!("#{}", idx.index())))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
