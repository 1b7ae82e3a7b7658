//! First-match path search from a root to a target.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::IndexedGraph;

use super::VisitBudget;

/// Depth-first search along outgoing edges, returning the edges of the
/// first path that reaches `to`.
///
/// Edges are tried in input order and the first complete path wins. This is
/// not the shortest or strongest path; callers that need optimality must not
/// rely on it. Returns `None` when `to` is unreachable within the budget.
pub fn first_path(
    graph: &IndexedGraph,
    from: NodeIndex,
    to: NodeIndex,
    max_nodes: usize,
) -> Option<Vec<EdgeIndex>> {
    if from == to {
        return Some(Vec::new());
    }

    let mut budget = VisitBudget::new(max_nodes);
    budget.visit(from);

    let mut path: Vec<EdgeIndex> = Vec::new();
    // Each frame is the outgoing edge list of a node on the current path and a cursor into it.
    let mut stack: Vec<(Vec<(EdgeIndex, NodeIndex)>, usize)> = vec![(graph.outgoing(from), 0)];

    while let Some((edges, cursor)) = stack.last_mut() {
        let Some(&(edge, next)) = edges.get(*cursor) else {
            stack.pop();
            path.pop();
            continue;
        };
        *cursor += 1;

        if next == to {
            path.push(edge);
            return Some(path);
        }
        if !budget.visit(next) {
            if budget.truncated() {
                return None;
            }
            continue;
        }
        path.push(edge);
        stack.push((graph.outgoing(next), 0));
    }

    None
}
