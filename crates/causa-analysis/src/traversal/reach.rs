//! Forward reach depth, used for resource dependency depth.

use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;

use super::VisitBudget;

/// Length of the longest forward path found from `start` by a visited-guarded
/// depth-first walk in edge input order.
///
/// A node is marked when it is entered, not when it is first seen as a
/// neighbour, so a sibling reached again along a longer branch is counted at
/// the deeper level. Each node is still entered once; on graphs where a
/// shorter branch enters a node first, the result is a lower bound.
pub fn dependency_depth(graph: &IndexedGraph, start: NodeIndex, max_nodes: usize) -> usize {
    let mut budget = VisitBudget::new(max_nodes);

    let mut deepest = 0;
    let mut stack = vec![(start, 0_usize)];
    while let Some((current, depth)) = stack.pop() {
        if !budget.visit(current) {
            if budget.truncated() {
                break;
            }
            continue;
        }
        deepest = deepest.max(depth);
        for (_, next) in graph.outgoing(current).into_iter().rev() {
            if !budget.contains(next) {
                stack.push((next, depth + 1));
            }
        }
    }
    deepest
}
