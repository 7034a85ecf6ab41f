// Rust guideline compliant 2026-10-19

//! Graph view over a status transition ruleset.
//!
//! Nodes are status names (both rule keys and destinations); edges are
//! allowed transitions. Cycles are expected (Active ⇄ Leave) and are not
//! an error here.

use crate::references::ReferenceSet;
use crate::rules::TransitionRules;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap};

/// Directed graph of allowed status transitions.
pub struct TransitionGraph {
    /// Petgraph directed graph where nodes are status names.
    graph: DiGraph<String, ()>,
    /// Map of status names to their NodeIndex in the graph.
    status_to_node: HashMap<String, NodeIndex>,
    /// Statuses that have an entry in the ruleset.
    constrained: BTreeSet<String>,
}

impl TransitionGraph {
    /// Builds the graph from a ruleset.
    pub fn from_rules(rules: &TransitionRules) -> Self {
        let mut graph = DiGraph::new();
        let mut status_to_node: HashMap<String, NodeIndex> = HashMap::new();
        let mut constrained = BTreeSet::new();

        let mut node_for = |graph: &mut DiGraph<String, ()>, status: &str| -> NodeIndex {
            *status_to_node
                .entry(status.to_string())
                .or_insert_with(|| graph.add_node(status.to_string()))
        };

        for (from, allowed) in rules.iter() {
            constrained.insert(from.clone());
            let from_idx = node_for(&mut graph, from);
            for to in allowed {
                let to_idx = node_for(&mut graph, to);
                graph.update_edge(from_idx, to_idx, ());
            }
        }

        Self {
            graph,
            status_to_node,
            constrained,
        }
    }

    /// Returns every status named by the ruleset, sorted.
    #[must_use]
    pub fn statuses(&self) -> Vec<String> {
        let mut statuses: Vec<String> = self.status_to_node.keys().cloned().collect();
        statuses.sort();
        statuses
    }

    /// Returns the statuses a student in `status` can eventually reach.
    ///
    /// `status` itself is included only when a cycle leads back to it. An
    /// unconstrained or unknown status yields an empty list, since the
    /// ruleset does not describe where it may go.
    #[must_use]
    pub fn reachable_from(&self, status: &str) -> Vec<String> {
        let Some(&start) = self.status_to_node.get(status) else {
            return Vec::new();
        };

        let mut reached = BTreeSet::new();
        let mut returns_to_start = false;
        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(node) = dfs.next(&self.graph) {
            if node != start {
                reached.insert(self.graph[node].clone());
            }
            if self.graph.find_edge(node, start).is_some() {
                returns_to_start = true;
            }
        }
        if returns_to_start {
            reached.insert(status.to_string());
        }

        reached.into_iter().collect()
    }

    /// Returns constrained statuses with no allowed destinations, sorted.
    #[must_use]
    pub fn terminal_statuses(&self) -> Vec<String> {
        self.constrained
            .iter()
            .filter(|status| {
                self.status_to_node.get(status.as_str()).is_some_and(|&idx| {
                    self.graph
                        .neighbors_directed(idx, Direction::Outgoing)
                        .next()
                        .is_none()
                })
            })
            .cloned()
            .collect()
    }

    /// Returns destinations that are not members of `known`, sorted.
    #[must_use]
    pub fn unknown_targets(&self, known: &ReferenceSet) -> Vec<String> {
        let mut unknown = BTreeSet::new();
        for edge in self.graph.raw_edges() {
            let target = &self.graph[edge.target()];
            if !known.contains(target) {
                unknown.insert(target.clone());
            }
        }
        unknown.into_iter().collect()
    }

    /// Returns rule keys that are not members of `known`, sorted.
    #[must_use]
    pub fn unknown_sources(&self, known: &ReferenceSet) -> Vec<String> {
        self.constrained
            .iter()
            .filter(|status| !known.contains(status))
            .cloned()
            .collect()
    }

    /// Returns the number of statuses in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of allowed transitions in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
