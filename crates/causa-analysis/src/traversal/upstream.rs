//! Backward walk over every incoming edge, used for contributing factors.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::IndexedGraph;

use super::VisitBudget;

/// A node reached walking upstream from the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpstreamNode {
    pub node: NodeIndex,
    /// The edge through which the node was first reached.
    pub via_edge: EdgeIndex,
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct UpstreamWalk {
    /// Every distinct upstream node, in discovery order. Excludes the target.
    pub nodes: Vec<UpstreamNode>,
    pub truncated: bool,
}

/// Collect every node upstream of `target`. Only the visited cap bounds
/// the walk; there is no hop limit.
pub fn walk(graph: &IndexedGraph, target: NodeIndex, max_nodes: usize) -> UpstreamWalk {
    let mut result = UpstreamWalk::default();
    let mut budget = VisitBudget::new(max_nodes);
    budget.visit(target);

    let mut stack = vec![(target, 0_usize)];
    while let Some((current, depth)) = stack.pop() {
        for (edge, predecessor) in graph.incoming(current) {
            if budget.visit(predecessor) {
                result.nodes.push(UpstreamNode {
                    node: predecessor,
                    via_edge: edge,
                    depth: depth + 1,
                });
                stack.push((predecessor, depth + 1));
            } else if budget.truncated() {
                result.truncated = true;
                return result;
            }
        }
    }
    result
}
