//! Advisory structural checks over a causal graph.
//!
//! Analyzers never require a clean report: cycles, dangling edges, and
//! duplicates are all handled as defined behavior. This is for callers that
//! want to surface graph quality problems upstream.

use std::collections::HashSet;

use causa_core::graph::CausalGraph;
use petgraph::algo::tarjan_scc;
use serde::Serialize;

use super::indexed::IndexedGraph;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphValidationReport {
    /// Edge ids whose source or target names no node.
    pub dangling_edges: Vec<String>,
    /// Node ids that appear more than once.
    pub duplicate_node_ids: Vec<String>,
    /// Edge ids whose source equals their target.
    pub self_loops: Vec<String>,
    /// Strongly connected components with more than one node, as node ids.
    pub cycles: Vec<Vec<String>>,
    /// Edge ids with strength or confidence outside [0, 1].
    pub out_of_range_edges: Vec<String>,
}

impl GraphValidationReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_edges.is_empty()
            && self.duplicate_node_ids.is_empty()
            && self.self_loops.is_empty()
            && self.cycles.is_empty()
            && self.out_of_range_edges.is_empty()
    }

    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty() && self.self_loops.is_empty()
    }
}

/// Check a graph for dangling references, duplicates, self-loops, cycles,
/// and out-of-range weights.
pub fn validate(graph: &CausalGraph) -> GraphValidationReport {
    let mut report = GraphValidationReport::default();

    let mut seen = HashSet::new();
    for node in &graph.nodes {
        if !seen.insert(node.id.as_str()) && !report.duplicate_node_ids.contains(&node.id) {
            report.duplicate_node_ids.push(node.id.clone());
        }
    }

    for edge in &graph.edges {
        if !seen.contains(edge.source_id.as_str()) || !seen.contains(edge.target_id.as_str()) {
            report.dangling_edges.push(edge.id.clone());
        }
        if edge.source_id == edge.target_id {
            report.self_loops.push(edge.id.clone());
        }
        if !(0.0..=1.0).contains(&edge.strength) || !(0.0..=1.0).contains(&edge.confidence) {
            report.out_of_range_edges.push(edge.id.clone());
        }
    }

    let indexed = IndexedGraph::build(graph);
    report.cycles = tarjan_scc(&indexed.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| scc.into_iter().map(|idx| indexed.node(idx).id.clone()).collect())
        .collect();

    report
}
