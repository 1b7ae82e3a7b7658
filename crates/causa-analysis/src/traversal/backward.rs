//! Backward breadth-first search for root candidates: "where did this come from?"

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;

use super::{TraversalConfig, VisitBudget};

/// A node with no incoming edges found upstream of the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootCandidate {
    pub node: NodeIndex,
    /// Product of edge strengths along the path that first reached the node.
    pub path_strength: f64,
    /// Hops from the target.
    pub depth: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BackwardSearch {
    /// Candidates in discovery order.
    pub candidates: Vec<RootCandidate>,
    pub nodes_visited: usize,
    pub truncated: bool,
}

/// Walk incoming edges breadth-first from `target`.
///
/// A node is expanded at most once; the first (fewest-hop) arrival fixes its
/// path strength. Predecessors beyond `max_depth` hops are never enqueued,
/// so roots further out are not reported. The target itself is never a
/// candidate, even when it has no incoming edges.
pub fn find_root_candidates(
    graph: &IndexedGraph,
    target: NodeIndex,
    config: &TraversalConfig,
) -> BackwardSearch {
    let mut result = BackwardSearch::default();
    let mut budget = VisitBudget::new(config.max_nodes);

    let mut queue = VecDeque::new();
    queue.push_back((target, 0_usize, 1.0_f64));

    while let Some((current, depth, path_strength)) = queue.pop_front() {
        if !budget.visit(current) {
            if budget.truncated() {
                break;
            }
            continue;
        }

        let incoming = graph.incoming(current);
        if incoming.is_empty() {
            if current != target {
                result.candidates.push(RootCandidate {
                    node: current,
                    path_strength,
                    depth,
                });
            }
            continue;
        }

        if depth >= config.max_depth {
            continue;
        }

        for (edge, predecessor) in incoming {
            if budget.contains(predecessor) {
                continue;
            }
            let strength = path_strength * graph.edge(edge).strength;
            queue.push_back((predecessor, depth + 1, strength));
        }
    }

    result.nodes_visited = budget.len();
    result.truncated = budget.truncated();
    result
}

/// Sort candidates by path strength, strongest first, and keep the top `limit`.
///
/// The sort is stable: equal strengths keep discovery order.
pub fn rank(candidates: &mut Vec<RootCandidate>, limit: usize) {
    candidates.sort_by(|a, b| b.path_strength.total_cmp(&a.path_strength));
    candidates.truncate(limit);
}
