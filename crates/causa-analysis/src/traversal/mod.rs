//! Bounded, cycle-safe traversals over an [`IndexedGraph`].
//!
//! All traversals use explicit work-lists and a visited set keyed by node
//! index, never native recursion. `max_depth` bounds hop count and
//! `max_nodes` bounds total work on dense graphs.
//!
//! [`IndexedGraph`]: crate::graph::IndexedGraph

pub mod backward;
pub mod forward;
pub mod path;
pub mod reach;
pub mod upstream;

use std::collections::HashSet;

use petgraph::stable_graph::NodeIndex;

/// Bounds for a single traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum hops from the start node.
    pub max_depth: usize,
    /// Maximum nodes visited before the traversal stops early.
    pub max_nodes: usize,
}

impl TraversalConfig {
    pub fn new(max_depth: usize, max_nodes: usize) -> Self {
        Self {
            max_depth,
            max_nodes,
        }
    }
}

/// Visited set with a hard cap. Once the cap is hit, `truncated` is set and
/// no further node is admitted.
#[derive(Debug)]
pub struct VisitBudget {
    visited: HashSet<NodeIndex>,
    limit: usize,
    truncated: bool,
}

impl VisitBudget {
    pub fn new(limit: usize) -> Self {
        Self {
            visited: HashSet::new(),
            limit,
            truncated: false,
        }
    }

    /// Mark `node` visited. Returns false if it already was, or if the cap is spent.
    pub fn visit(&mut self, node: NodeIndex) -> bool {
        if self.visited.contains(&node) {
            return false;
        }
        if self.visited.len() >= self.limit {
            self.truncated = true;
            return false;
        }
        self.visited.insert(node)
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.visited.contains(&node)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn truncated(&self) -> bool {
        self.truncated
    }
}
