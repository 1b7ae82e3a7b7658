//! Forward analysis: projected downstream impacts, affected resources, risk,
//! and recommendations.

pub mod projection;
pub mod recommendations;
pub mod resources;
pub mod risk;

use std::sync::Arc;

use causa_core::config::CausalEngineConfig;
use causa_core::errors::{CausalError, CausalResult};
use causa_core::graph::CausalGraph;
use causa_core::ids::{IdGenerator, UuidIdGenerator};
use causa_core::models::{ImpactAnalysis, ImpactSummary, ProjectedImpact};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::graph::IndexedGraph;
use crate::traversal::forward;
use crate::traversal::TraversalConfig;

pub use risk::assess_risk;

/// Projects the downstream impact of a change or event.
///
/// Stateless between calls, like [`RootCauseAnalyzer`](crate::RootCauseAnalyzer).
pub struct ImpactAssessor {
    config: CausalEngineConfig,
    ids: Arc<dyn IdGenerator>,
}

impl ImpactAssessor {
    /// Create an assessor. Fails fast on an invalid config.
    pub fn new(config: CausalEngineConfig) -> CausalResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ids: Arc::new(UuidIdGenerator),
        })
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &CausalEngineConfig {
        &self.config
    }

    /// Assess `graph` forward from `source_event_id`.
    ///
    /// Returns `NotFound` when the id names no node.
    pub fn assess(&self, graph: &CausalGraph, source_event_id: &str) -> CausalResult<ImpactAnalysis> {
        let span = causa_core::impact_span!(graph.id, source_event_id);
        let _enter = span.enter();

        let indexed = IndexedGraph::build(graph);
        let source = indexed
            .get_node(source_event_id)
            .ok_or_else(|| CausalError::not_found(source_event_id))?;

        let limits = TraversalConfig::new(self.config.max_impact_depth, self.config.max_visited_nodes);
        let trace = forward::trace(&indexed, source, &limits);
        debug!(
            steps = trace.steps.len(),
            nodes_visited = trace.nodes_visited,
            max_depth_reached = trace.max_depth_reached,
            "forward trace complete"
        );
        if trace.truncated {
            warn!(
                max_visited_nodes = self.config.max_visited_nodes,
                "impact traversal hit the visited-node cap, results are partial"
            );
        }

        let projected_impacts: Vec<ProjectedImpact> = trace
            .steps
            .iter()
            .map(|step| {
                projection::project(
                    &indexed,
                    step,
                    self.config.probability_amplification,
                    self.ids.next_id(),
                )
            })
            .collect();

        let affected_resources = resources::aggregate(
            &indexed,
            &trace.steps,
            &projected_impacts,
            self.config.max_visited_nodes,
        );
        let risk_assessment = assess_risk(&projected_impacts);
        let recommendations = recommendations::generate(&risk_assessment, self.ids.as_ref());

        info!(
            impacts = projected_impacts.len(),
            affected_resources = affected_resources.len(),
            overall_risk = %risk_assessment.overall_risk,
            risk_score = risk_assessment.risk_score,
            "impact assessment complete"
        );

        Ok(ImpactAnalysis {
            id: self.ids.next_id(),
            graph_id: graph.id.clone(),
            source_event: indexed.node(source).clone(),
            summary: ImpactSummary {
                total_impacts: projected_impacts.len(),
                max_depth_reached: trace.max_depth_reached,
                nodes_visited: trace.nodes_visited,
                dangling_edges_skipped: indexed.dangling_edges(),
                truncated: trace.truncated,
            },
            projected_impacts,
            affected_resources,
            risk_assessment,
            recommendations,
            created_at: Utc::now(),
        })
    }
}
