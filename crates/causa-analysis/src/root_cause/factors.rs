//! Contributing factors: upstream nodes that are not ranked root causes.

use std::collections::HashSet;

use causa_core::models::ContributingFactor;
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;
use crate::traversal::upstream::{self, UpstreamWalk};

/// Walk every incoming edge upstream of `target` and keep each distinct
/// node that is not one of `root_nodes`. Returns the factors and whether the
/// walk hit the visited cap.
pub fn collect_factors(
    graph: &IndexedGraph,
    target: NodeIndex,
    root_nodes: &HashSet<NodeIndex>,
    max_nodes: usize,
) -> (Vec<ContributingFactor>, bool) {
    let UpstreamWalk { nodes, truncated } = upstream::walk(graph, target, max_nodes);

    let factors = nodes
        .into_iter()
        .filter(|n| !root_nodes.contains(&n.node))
        .map(|n| {
            let node = graph.node(n.node);
            ContributingFactor {
                contribution_weight: graph.edge(n.via_edge).strength,
                is_removable: node.node_type.is_removable(),
                depth: n.depth,
                node: node.clone(),
            }
        })
        .collect();

    (factors, truncated)
}
