//! Causal chain construction: one first-match path per ranked root.

use causa_core::graph::CausalEdge;
use causa_core::ids::IdGenerator;
use causa_core::models::CausalChain;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::IndexedGraph;
use crate::scoring::path_strength;
use crate::traversal::backward::RootCandidate;
use crate::traversal::path::first_path;

/// Build a chain for every candidate that can reach `target`. Candidates
/// with no forward path are skipped.
pub fn build_chains(
    graph: &IndexedGraph,
    candidates: &[RootCandidate],
    target: NodeIndex,
    max_nodes: usize,
    ids: &dyn IdGenerator,
) -> Vec<CausalChain> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let edges = first_path(graph, candidate.node, target, max_nodes)?;
            build_chain(graph, candidate.node, &edges, ids)
        })
        .collect()
}

/// Materialize a path into a chain. `None` for an empty path.
pub fn build_chain(
    graph: &IndexedGraph,
    root: NodeIndex,
    path: &[EdgeIndex],
    ids: &dyn IdGenerator,
) -> Option<CausalChain> {
    let edges: Vec<&CausalEdge> = path.iter().map(|&e| graph.edge(e)).collect();
    let weakest_link = edges
        .iter()
        .copied()
        .min_by(|a, b| a.strength.total_cmp(&b.strength))?
        .clone();

    let mut nodes = Vec::with_capacity(path.len() + 1);
    nodes.push(graph.node(root).clone());
    for &edge in path {
        if let Some((_, target)) = graph.graph.edge_endpoints(edge) {
            nodes.push(graph.node(target).clone());
        }
    }

    Some(CausalChain {
        id: ids.next_id(),
        root_cause_id: graph.node(root).id.clone(),
        total_lag_time: edges.iter().map(|e| e.lag_ms()).fold(0, u64::saturating_add),
        overall_strength: path_strength(edges.iter().map(|e| e.strength)),
        weakest_link,
        edges: edges.into_iter().cloned().collect(),
        nodes,
    })
}
