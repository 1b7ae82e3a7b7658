//! Confidence and strength aggregation.
//!
//! Strength (propagation amplitude) and confidence (belief in an edge) are
//! aggregated separately and never mixed within a single score.

use causa_core::constants::DEFAULT_NODE_CONFIDENCE;
use causa_core::graph::CausalNode;
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedGraph;

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Clamp to `[0, 1]`. NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Mean confidence of a node's outgoing edges, 0.5 when it has none.
pub fn node_confidence(graph: &IndexedGraph, node: NodeIndex) -> f64 {
    mean(
        graph
            .outgoing(node)
            .into_iter()
            .map(|(edge, _)| graph.edge(edge).confidence),
    )
    .unwrap_or(DEFAULT_NODE_CONFIDENCE)
}

/// Product of edge strengths. An empty path has strength 1.
pub fn path_strength(strengths: impl IntoIterator<Item = f64>) -> f64 {
    strengths.into_iter().product()
}

/// Overall analysis confidence: the average of mean root-cause confidence and
/// mean chain strength. Zero when there are no root causes; a missing chain
/// set counts as zero strength.
pub fn overall_confidence(root_confidences: &[f64], chain_strengths: &[f64]) -> f64 {
    let Some(root_mean) = mean(root_confidences.iter().copied()) else {
        return 0.0;
    };
    let chain_mean = mean(chain_strengths.iter().copied()).unwrap_or(0.0);
    clamp_unit((root_mean + chain_mean) / 2.0)
}

/// How much damage a root cause represents: the severity weight of the node
/// when it declares one, otherwise the strength of its path to the target.
pub fn impact_magnitude(node: &CausalNode, path_strength: f64) -> f64 {
    node.properties
        .severity
        .map(|s| s.weight())
        .unwrap_or(path_strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use causa_core::graph::{CausalEdge, CausalGraph, NodeType};
    use causa_core::models::Severity;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert!((mean(vec![0.2, 0.4]).unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn node_confidence_averages_outgoing_edges() {
        let graph = CausalGraph::new("c")
            .with_node(CausalNode::new("a", NodeType::Event, "a"))
            .with_node(CausalNode::new("b", NodeType::Event, "b"))
            .with_node(CausalNode::new("c", NodeType::Event, "c"))
            .with_edge(CausalEdge::new("1", "a", "b", 0.9).with_confidence(0.6))
            .with_edge(CausalEdge::new("2", "a", "c", 0.1).with_confidence(1.0));
        let idx = IndexedGraph::build(&graph);
        let a = idx.get_node("a").unwrap();
        let b = idx.get_node("b").unwrap();
        assert!((node_confidence(&idx, a) - 0.8).abs() < 1e-9);
        assert_eq!(node_confidence(&idx, b), DEFAULT_NODE_CONFIDENCE);
    }

    #[test]
    fn overall_confidence_is_zero_without_roots() {
        assert_eq!(overall_confidence(&[], &[0.9]), 0.0);
        assert!((overall_confidence(&[0.8], &[0.4]) - 0.6).abs() < 1e-9);
        assert!((overall_confidence(&[0.8], &[]) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn impact_magnitude_prefers_declared_severity() {
        let plain = CausalNode::new("a", NodeType::Event, "a");
        assert_eq!(impact_magnitude(&plain, 0.42), 0.42);
        let severe = plain.with_severity(Severity::High);
        assert_eq!(impact_magnitude(&severe, 0.42), 0.75);
    }

    #[test]
    fn clamp_unit_bounds_and_zeroes_nan() {
        assert_eq!(clamp_unit(1.2), 1.0);
        assert_eq!(clamp_unit(-0.1), 0.0);
        assert_eq!(clamp_unit(0.4), 0.4);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn path_strength_multiplies() {
        assert!((path_strength([0.8, 0.5]) - 0.4).abs() < 1e-12);
        assert_eq!(path_strength(std::iter::empty::<f64>()), 1.0);
    }
}
