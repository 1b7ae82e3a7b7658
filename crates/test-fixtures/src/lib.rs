//! Golden causal scenarios and benchmark graphs for the Causa crates.
//!
//! Data files sit beside this crate's manifest under `golden/` and
//! `benchmarks/`. Paths passed to the loaders are relative to that directory.
//! Loaders panic on missing or malformed files; they are only meant for
//! tests and benches.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

const CRATE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Directory holding golden scenarios, one JSON file each.
pub const GOLDEN_CAUSAL_DIR: &str = "golden/causal";

/// Absolute path of a fixture file.
pub fn fixture_path(relative: &str) -> PathBuf {
    Path::new(CRATE_DIR).join(relative)
}

/// Read a fixture as text, for callers that drive their own parsing.
pub fn load_fixture_str(relative: &str) -> String {
    let path = fixture_path(relative);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {e}", path.display()))
}

/// Read and deserialize a JSON fixture.
pub fn load_fixture<T: DeserializeOwned>(relative: &str) -> T {
    let text = load_fixture_str(relative);
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("parsing {relative}: {e}"))
}

/// File names of the `.json` fixtures in `dir`, sorted. Empty when the
/// directory is absent.
pub fn list_fixtures(dir: &str) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(fixture_path(dir)) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

/// Which analyzer a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    RootCause,
    Impact,
}

/// A graph, the node to analyze from, and the expected outcome. `graph`,
/// `config` and `expected` stay untyped so this crate does not depend on the
/// model crates it exercises.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldenScenario {
    pub description: String,
    pub analysis: ScenarioKind,
    pub node_id: String,
    #[serde(default)]
    pub config: Option<serde_json::Value>,
    pub graph: serde_json::Value,
    pub expected: serde_json::Value,
}

/// Every golden causal scenario, keyed by file name.
pub fn load_causal_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures(GOLDEN_CAUSAL_DIR)
        .into_iter()
        .map(|name| {
            let scenario = load_fixture(&format!("{GOLDEN_CAUSAL_DIR}/{name}"));
            (name, scenario)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_directory_lists_every_scenario() {
        let names = list_fixtures(GOLDEN_CAUSAL_DIR);
        assert_eq!(
            names,
            [
                "cyclic_root_cause.json",
                "dangling_edges.json",
                "decay_chain_impact.json",
                "diamond_root_cause.json",
                "fanout_impact.json",
                "single_edge_root_cause.json",
            ]
        );
        assert!(list_fixtures("no-such-dir").is_empty());
    }

    #[test]
    fn scenarios_cover_both_analyzers() {
        let scenarios = load_causal_scenarios();
        let impacts = scenarios
            .iter()
            .filter(|(_, s)| s.analysis == ScenarioKind::Impact)
            .count();
        assert_eq!(impacts, 2);
        assert_eq!(scenarios.len() - impacts, 4);
        for (name, scenario) in &scenarios {
            assert!(!scenario.description.is_empty(), "{name}: no description");
            assert!(scenario.graph["nodes"].is_array(), "{name}: graph has no nodes array");
        }
    }

    #[test]
    fn golden_graphs_deserialize_into_the_model() {
        for (name, scenario) in load_causal_scenarios() {
            let graph: Result<causa_core::CausalGraph, _> = serde_json::from_value(scenario.graph);
            assert!(graph.is_ok(), "{name}: {:?}", graph.err());
        }
    }

    #[test]
    fn benchmark_graph_has_expected_shape() {
        let graph: serde_json::Value = load_fixture("benchmarks/causal_graph_1k_edges.json");
        assert_eq!(graph["edges"].as_array().map(Vec::len), Some(1000));
        assert_eq!(graph["nodes"].as_array().map(Vec::len), Some(250));
    }
}
