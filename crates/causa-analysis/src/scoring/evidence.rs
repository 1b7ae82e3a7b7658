//! Evidence gathering for root causes.

use causa_core::constants::{STATISTICAL_EVIDENCE_CONFIDENCE, TEMPORAL_EVIDENCE_CONFIDENCE};
use causa_core::graph::{CausalEvidence, EvidenceType};
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;

/// Evidence for a root node: one temporal entry from its timestamp, one
/// statistical entry per metric, then every evidence entry on its outgoing edges.
pub fn gather_root_evidence(graph: &IndexedGraph, node: NodeIndex) -> Vec<CausalEvidence> {
    let root = graph.node(node);
    let mut evidence = Vec::with_capacity(1 + root.metrics.len());

    evidence.push(CausalEvidence::new(
        EvidenceType::Temporal,
        format!("{} occurred at {}", root.name, root.timestamp.to_rfc3339()),
        TEMPORAL_EVIDENCE_CONFIDENCE,
        "timeline",
        root.timestamp,
    ));

    for (metric, value) in &root.metrics {
        evidence.push(CausalEvidence::new(
            EvidenceType::Statistical,
            format!("{metric} observed at {value}"),
            STATISTICAL_EVIDENCE_CONFIDENCE,
            "metrics",
            root.timestamp,
        ));
    }

    for (edge, _) in graph.outgoing(node) {
        evidence.extend(graph.edge(edge).evidence.iter().cloned());
    }

    evidence
}
