//! Property tests: termination, depth and work bounds, ranking order, and
//! probability ranges on random, possibly cyclic graphs.

use proptest::prelude::*;

use causa_analysis::graph::validate;
use causa_analysis::{ImpactAssessor, RootCauseAnalyzer};
use causa_core::graph::{CausalEdge, CausalGraph, CausalNode, NodeType};
use causa_core::CausalEngineConfig;

/// Build a graph over `n` nodes. Edge endpoints at or beyond `n` become
/// dangling references; self-loops and cycles are kept.
fn build_graph(n: usize, edges: &[(usize, usize, f64)]) -> CausalGraph {
    let mut graph = CausalGraph::new("random");
    for i in 0..n {
        let node_type = NodeType::ALL[i % NodeType::ALL.len()];
        graph.add_node(CausalNode::new(format!("n{i}"), node_type, format!("Node {i}")));
    }
    for (k, &(src, tgt, strength)) in edges.iter().enumerate() {
        graph.add_edge(CausalEdge::new(
            format!("e{k}"),
            format!("n{src}"),
            format!("n{tgt}"),
            strength,
        ));
    }
    graph
}

// Endpoints range one past `n` so some edges dangle.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n + 1, 0..n + 1, 0.0_f64..=1.0_f64), 0..n * 3)
}

fn unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

proptest! {
    #[test]
    fn root_cause_terminates_with_bounded_scores(
        edges in edge_strategy(20),
        target in 0_usize..20,
    ) {
        let graph = build_graph(20, &edges);
        let analysis = RootCauseAnalyzer::new(CausalEngineConfig::default())
            .unwrap()
            .analyze(&graph, &format!("n{target}"))
            .unwrap();

        prop_assert!(unit(analysis.overall_confidence));
        for root in &analysis.root_causes {
            prop_assert!(unit(root.probability));
            prop_assert!(unit(root.confidence));
            prop_assert!(root.node.id != analysis.target_event.id);
        }
        for chain in &analysis.causal_chains {
            prop_assert!(unit(chain.overall_strength));
            prop_assert!(chain.overall_strength <= chain.weakest_link.strength + 1e-12);
            prop_assert_eq!(chain.nodes.first().map(|n| n.id.as_str()), Some(chain.root_cause_id.as_str()));
            prop_assert_eq!(chain.nodes.last().map(|n| n.id.as_str()), Some(analysis.target_event.id.as_str()));
            prop_assert_eq!(chain.nodes.len(), chain.edges.len() + 1);
        }
    }
}

proptest! {
    #[test]
    fn root_causes_are_ranked_and_capped(
        edges in edge_strategy(25),
        target in 0_usize..25,
        max_root_causes in 1_usize..6,
    ) {
        let graph = build_graph(25, &edges);
        let config = CausalEngineConfig::default().with_max_root_causes(max_root_causes);
        let analysis = RootCauseAnalyzer::new(config)
            .unwrap()
            .analyze(&graph, &format!("n{target}"))
            .unwrap();

        prop_assert!(analysis.root_causes.len() <= max_root_causes);
        for pair in analysis.root_causes.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }
}

proptest! {
    #[test]
    fn root_depth_bounded(
        edges in edge_strategy(15),
        target in 0_usize..15,
        max_depth in 1_usize..8,
    ) {
        let graph = build_graph(15, &edges);
        let config = CausalEngineConfig::default().with_max_graph_depth(max_depth);
        let analysis = RootCauseAnalyzer::new(config)
            .unwrap()
            .analyze(&graph, &format!("n{target}"))
            .unwrap();

        for root in &analysis.root_causes {
            prop_assert!(root.depth <= max_depth, "root depth {} > {}", root.depth, max_depth);
        }
        // Factors are bounded by the visited cap, not by the root search depth.
        for factor in &analysis.contributing_factors {
            prop_assert!(factor.depth >= 1);
            prop_assert!(factor.node.id != analysis.target_event.id);
        }
    }
}

proptest! {
    #[test]
    fn impact_terminates_with_bounded_depth_and_probability(
        edges in edge_strategy(20),
        source in 0_usize..20,
        max_depth in 1_usize..8,
    ) {
        let graph = build_graph(20, &edges);
        let config = CausalEngineConfig::default().with_max_impact_depth(max_depth);
        let analysis = ImpactAssessor::new(config)
            .unwrap()
            .assess(&graph, &format!("n{source}"))
            .unwrap();

        prop_assert!(analysis.summary.max_depth_reached <= max_depth);
        prop_assert!(unit(analysis.risk_assessment.risk_score));
        prop_assert!(unit(analysis.risk_assessment.mitigation_potential));
        for impact in &analysis.projected_impacts {
            prop_assert!(impact.depth >= 1 && impact.depth <= max_depth);
            prop_assert!(unit(impact.magnitude));
            prop_assert!(unit(impact.probability));
            prop_assert_eq!(impact.path.first(), Some(&analysis.source_event.id));
            prop_assert_eq!(impact.path.len(), impact.depth + 1);
        }
    }
}

proptest! {
    #[test]
    fn visited_nodes_bounded(
        edges in edge_strategy(30),
        start in 0_usize..30,
        max_nodes in 1_usize..20,
    ) {
        let graph = build_graph(30, &edges);
        let config = CausalEngineConfig::default()
            .with_max_graph_depth(100)
            .with_max_impact_depth(100)
            .with_max_visited_nodes(max_nodes);
        let id = format!("n{start}");

        let rca = RootCauseAnalyzer::new(config.clone()).unwrap().analyze(&graph, &id).unwrap();
        prop_assert!(rca.methodology.nodes_visited <= max_nodes);

        let impact = ImpactAssessor::new(config).unwrap().assess(&graph, &id).unwrap();
        prop_assert!(impact.summary.nodes_visited <= max_nodes);
    }
}

proptest! {
    #[test]
    fn forward_only_graphs_validate_as_acyclic(
        edges in prop::collection::vec((0_usize..15, 0_usize..15, 0.1_f64..1.0), 0..40)
    ) {
        let forward: Vec<_> = edges
            .into_iter()
            .filter(|&(s, t, _)| s < t)
            .collect();
        let graph = build_graph(15, &forward);
        let report = validate(&graph);
        prop_assert!(report.is_acyclic());
        prop_assert!(report.dangling_edges.is_empty());
    }
}
