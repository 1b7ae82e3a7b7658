//! `CausalEngine`: one config and id source shared by both analyzers.

use std::sync::Arc;

use causa_core::config::CausalEngineConfig;
use causa_core::errors::CausalResult;
use causa_core::graph::CausalGraph;
use causa_core::ids::{IdGenerator, UuidIdGenerator};
use causa_core::models::{ImpactAnalysis, RootCauseAnalysis};

use crate::impact::ImpactAssessor;
use crate::root_cause::RootCauseAnalyzer;

/// Entry point for callers that want both directions of analysis.
pub struct CausalEngine {
    root_cause: RootCauseAnalyzer,
    impact: ImpactAssessor,
}

impl CausalEngine {
    pub fn new(config: CausalEngineConfig) -> CausalResult<Self> {
        Self::with_id_generator(config, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(
        config: CausalEngineConfig,
        ids: Arc<dyn IdGenerator>,
    ) -> CausalResult<Self> {
        Ok(Self {
            root_cause: RootCauseAnalyzer::new(config.clone())?.with_id_generator(Arc::clone(&ids)),
            impact: ImpactAssessor::new(config)?.with_id_generator(ids),
        })
    }

    pub fn config(&self) -> &CausalEngineConfig {
        self.root_cause.config()
    }

    pub fn analyze_root_causes(
        &self,
        graph: &CausalGraph,
        target_event_id: &str,
    ) -> CausalResult<RootCauseAnalysis> {
        self.root_cause.analyze(graph, target_event_id)
    }

    pub fn assess_impact(
        &self,
        graph: &CausalGraph,
        source_event_id: &str,
    ) -> CausalResult<ImpactAnalysis> {
        self.impact.assess(graph, source_event_id)
    }

    /// Parse a graph from JSON, run root-cause analysis, and return the result as JSON.
    pub fn analyze_json(&self, graph_json: &str, target_event_id: &str) -> CausalResult<String> {
        let graph: CausalGraph = serde_json::from_str(graph_json)?;
        let analysis = self.analyze_root_causes(&graph, target_event_id)?;
        Ok(serde_json::to_string(&analysis)?)
    }

    /// Parse a graph from JSON, run impact assessment, and return the result as JSON.
    pub fn assess_json(&self, graph_json: &str, source_event_id: &str) -> CausalResult<String> {
        let graph: CausalGraph = serde_json::from_str(graph_json)?;
        let analysis = self.assess_impact(&graph, source_event_id)?;
        Ok(serde_json::to_string(&analysis)?)
    }
}
