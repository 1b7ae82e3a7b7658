//! Forward depth-first traversal: "what did this cause?" Follows outgoing edges.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::IndexedGraph;

use super::{TraversalConfig, VisitBudget};

/// One traversed edge, with the propagation state accumulated to its target.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardStep {
    pub target: NodeIndex,
    pub via_edge: EdgeIndex,
    /// Product of edge strengths from the source.
    pub strength: f64,
    /// Sum of edge lags from the source, in milliseconds.
    pub lag_ms: u64,
    pub depth: usize,
    /// Source → target, inclusive.
    pub path: Vec<NodeIndex>,
}

#[derive(Debug, Clone, Default)]
pub struct ForwardTrace {
    pub steps: Vec<ForwardStep>,
    pub nodes_visited: usize,
    pub max_depth_reached: usize,
    pub truncated: bool,
}

struct Frame {
    node: NodeIndex,
    strength: f64,
    lag_ms: u64,
    depth: usize,
    path: Vec<NodeIndex>,
}

/// Trace forward from `source`, recording one step per outgoing edge of
/// every expanded node.
///
/// Each node is expanded at most once. Nodes `max_depth` hops out are
/// recorded but not expanded. An edge leading back into an already expanded
/// node, the source included, is still recorded as a step.
pub fn trace(graph: &IndexedGraph, source: NodeIndex, config: &TraversalConfig) -> ForwardTrace {
    let mut result = ForwardTrace::default();
    let mut budget = VisitBudget::new(config.max_nodes);

    let mut stack = vec![Frame {
        node: source,
        strength: 1.0,
        lag_ms: 0,
        depth: 0,
        path: vec![source],
    }];

    while let Some(frame) = stack.pop() {
        if !budget.visit(frame.node) {
            if budget.truncated() {
                break;
            }
            continue;
        }
        if frame.depth >= config.max_depth {
            continue;
        }

        let mut children = Vec::new();
        for (edge, next) in graph.outgoing(frame.node) {
            let weight = graph.edge(edge);
            let strength = frame.strength * weight.strength;
            let lag_ms = frame.lag_ms.saturating_add(weight.lag_ms());
            let depth = frame.depth + 1;
            let mut path = frame.path.clone();
            path.push(next);

            result.max_depth_reached = result.max_depth_reached.max(depth);
            result.steps.push(ForwardStep {
                target: next,
                via_edge: edge,
                strength,
                lag_ms,
                depth,
                path: path.clone(),
            });
            children.push(Frame {
                node: next,
                strength,
                lag_ms,
                depth,
                path,
            });
        }
        // Reverse so the first edge is expanded first.
        stack.extend(children.into_iter().rev());
    }

    result.nodes_visited = budget.len();
    result.truncated = budget.truncated();
    result
}
