//! Golden scenarios from `test-fixtures/golden/causal`.
//!
//! Each file carries a graph, the node to analyze from, and the expected
//! ranking, chains, impacts, and risk. Numbers are compared with a small
//! tolerance since they come from products of edge strengths.

use causa_analysis::{ImpactAssessor, RootCauseAnalyzer};
use causa_core::models::{ImpactAnalysis, RootCauseAnalysis};
use causa_core::{CausalEngineConfig, CausalGraph};
use serde::Deserialize;
use test_fixtures::{load_causal_scenarios, GoldenScenario, ScenarioKind};

const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedRootCause {
    root_cause_ids: Vec<String>,
    probabilities: Vec<f64>,
    categories: Vec<String>,
    evidence_counts: Vec<usize>,
    chains: Vec<Vec<String>>,
    chain_strengths: Vec<f64>,
    weakest_links: Vec<String>,
    total_lag_times: Vec<u64>,
    contributing_factor_ids: Vec<String>,
    contribution_weights: Vec<f64>,
    overall_confidence: f64,
    dangling_edges_skipped: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedImpact {
    target_id: String,
    impact_type: String,
    magnitude: f64,
    probability: f64,
    depth: usize,
    expected_lag_time: u64,
    time_to_recover: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedResource {
    id: String,
    impact_severity: String,
    dependency_depth: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedImpactAnalysis {
    impacts: Vec<ExpectedImpact>,
    overall_risk: String,
    risk_score: f64,
    mitigation_potential: f64,
    recommendation_types: Vec<String>,
    affected_resources: Vec<ExpectedResource>,
    total_impacts: usize,
    max_depth_reached: usize,
    nodes_visited: usize,
}

fn assert_close(name: &str, what: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{name}: {what} expected {expected}, got {actual}"
    );
}

fn assert_all_close(name: &str, what: &str, actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{name}: {what} length");
    for (a, e) in actual.iter().zip(expected) {
        assert_close(name, what, *a, *e);
    }
}

fn config_for(scenario: &GoldenScenario) -> CausalEngineConfig {
    scenario
        .config
        .clone()
        .map(|c| serde_json::from_value(c).unwrap())
        .unwrap_or_default()
}

fn graph_for(name: &str, scenario: &GoldenScenario) -> CausalGraph {
    serde_json::from_value(scenario.graph.clone())
        .unwrap_or_else(|e| panic!("{name}: graph does not deserialize: {e}"))
}

/// Serialize an enum to its wire name, e.g. `RootCauseCategory::CodeChange` -> "code_change".
fn wire_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn check_root_cause(name: &str, analysis: &RootCauseAnalysis, expected: &ExpectedRootCause) {
    let ids: Vec<&str> = analysis.root_causes.iter().map(|r| r.node.id.as_str()).collect();
    assert_eq!(ids, expected.root_cause_ids, "{name}: root cause ranking");

    let probabilities: Vec<f64> = analysis.root_causes.iter().map(|r| r.probability).collect();
    assert_all_close(name, "probabilities", &probabilities, &expected.probabilities);

    let categories: Vec<String> = analysis.root_causes.iter().map(|r| wire_name(&r.category)).collect();
    assert_eq!(categories, expected.categories, "{name}: categories");

    let evidence_counts: Vec<usize> = analysis.root_causes.iter().map(|r| r.evidence.len()).collect();
    assert_eq!(evidence_counts, expected.evidence_counts, "{name}: evidence counts");

    let chains: Vec<Vec<&str>> = analysis.causal_chains.iter().map(|c| c.node_ids()).collect();
    assert_eq!(chains, expected.chains, "{name}: chains");

    let strengths: Vec<f64> = analysis.causal_chains.iter().map(|c| c.overall_strength).collect();
    assert_all_close(name, "chain strengths", &strengths, &expected.chain_strengths);

    let weakest: Vec<&str> = analysis.causal_chains.iter().map(|c| c.weakest_link.id.as_str()).collect();
    assert_eq!(weakest, expected.weakest_links, "{name}: weakest links");

    let lags: Vec<u64> = analysis.causal_chains.iter().map(|c| c.total_lag_time).collect();
    assert_eq!(lags, expected.total_lag_times, "{name}: total lag times");

    let factor_ids: Vec<&str> = analysis
        .contributing_factors
        .iter()
        .map(|f| f.node.id.as_str())
        .collect();
    assert_eq!(factor_ids, expected.contributing_factor_ids, "{name}: contributing factors");

    let weights: Vec<f64> = analysis
        .contributing_factors
        .iter()
        .map(|f| f.contribution_weight)
        .collect();
    assert_all_close(name, "contribution weights", &weights, &expected.contribution_weights);

    assert_close(name, "overall confidence", analysis.overall_confidence, expected.overall_confidence);
    assert_eq!(
        analysis.methodology.dangling_edges_skipped, expected.dangling_edges_skipped,
        "{name}: dangling edges"
    );
}

fn check_impact(name: &str, analysis: &ImpactAnalysis, expected: &ExpectedImpactAnalysis) {
    assert_eq!(analysis.projected_impacts.len(), expected.impacts.len(), "{name}: impact count");
    for (actual, want) in analysis.projected_impacts.iter().zip(&expected.impacts) {
        assert_eq!(actual.target.id, want.target_id, "{name}: impact order");
        assert_eq!(wire_name(&actual.impact_type), want.impact_type, "{name}: {} type", want.target_id);
        assert_close(name, "magnitude", actual.magnitude, want.magnitude);
        assert_close(name, "probability", actual.probability, want.probability);
        assert_eq!(actual.depth, want.depth, "{name}: {} depth", want.target_id);
        assert_eq!(actual.expected_lag_time, want.expected_lag_time, "{name}: {} lag", want.target_id);
        assert_eq!(actual.time_to_recover, want.time_to_recover, "{name}: {} recovery", want.target_id);
    }

    let risk = &analysis.risk_assessment;
    assert_eq!(wire_name(&risk.overall_risk), expected.overall_risk, "{name}: overall risk");
    assert_close(name, "risk score", risk.risk_score, expected.risk_score);
    assert_close(name, "mitigation potential", risk.mitigation_potential, expected.mitigation_potential);

    let rec_types: Vec<String> = analysis
        .recommendations
        .iter()
        .map(|r| wire_name(&r.recommendation_type))
        .collect();
    assert_eq!(rec_types, expected.recommendation_types, "{name}: recommendations");

    assert_eq!(
        analysis.affected_resources.len(),
        expected.affected_resources.len(),
        "{name}: affected resource count"
    );
    for (actual, want) in analysis.affected_resources.iter().zip(&expected.affected_resources) {
        assert_eq!(actual.resource.id, want.id, "{name}: resource order");
        assert_eq!(wire_name(&actual.impact_severity), want.impact_severity, "{name}: {} severity", want.id);
        assert_eq!(actual.dependency_depth, want.dependency_depth, "{name}: {} depth", want.id);
    }

    assert_eq!(analysis.summary.total_impacts, expected.total_impacts, "{name}: total impacts");
    assert_eq!(analysis.summary.max_depth_reached, expected.max_depth_reached, "{name}: max depth");
    assert_eq!(analysis.summary.nodes_visited, expected.nodes_visited, "{name}: nodes visited");
}

#[test]
fn golden_causal_scenarios() {
    let scenarios = load_causal_scenarios();
    assert!(!scenarios.is_empty(), "no golden causal scenarios found");

    for (name, scenario) in &scenarios {
        let graph = graph_for(name, scenario);
        let config = config_for(scenario);

        match scenario.analysis {
            ScenarioKind::RootCause => {
                let analysis = RootCauseAnalyzer::new(config)
                    .unwrap()
                    .analyze(&graph, &scenario.node_id)
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
                let expected: ExpectedRootCause = serde_json::from_value(scenario.expected.clone())
                    .unwrap_or_else(|e| panic!("{name}: bad expectation: {e}"));
                check_root_cause(name, &analysis, &expected);
            }
            ScenarioKind::Impact => {
                let analysis = ImpactAssessor::new(config)
                    .unwrap()
                    .assess(&graph, &scenario.node_id)
                    .unwrap_or_else(|e| panic!("{name}: {e}"));
                let expected: ExpectedImpactAnalysis =
                    serde_json::from_value(scenario.expected.clone())
                        .unwrap_or_else(|e| panic!("{name}: bad expectation: {e}"));
                check_impact(name, &analysis, &expected);
            }
        }
    }
}

#[test]
fn golden_results_serialize_with_camel_case_fields() {
    let scenarios = load_causal_scenarios();
    let (name, scenario) = scenarios
        .iter()
        .find(|(_, s)| s.analysis == ScenarioKind::RootCause)
        .expect("at least one root-cause scenario");
    let graph = graph_for(name, scenario);
    let analysis = RootCauseAnalyzer::new(CausalEngineConfig::default())
        .unwrap()
        .analyze(&graph, &scenario.node_id)
        .unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json.get("rootCauses").is_some());
    assert!(json.get("causalChains").is_some());
    assert!(json.get("overallConfidence").is_some());
    assert!(json["methodology"].get("danglingEdgesSkipped").is_some());
}
