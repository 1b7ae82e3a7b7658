//! Backward analysis: ranked root causes, causal chains, and contributing factors.

pub mod chains;
pub mod factors;

use std::collections::HashSet;
use std::sync::Arc;

use causa_core::config::CausalEngineConfig;
use causa_core::errors::{CausalError, CausalResult};
use causa_core::graph::CausalGraph;
use causa_core::ids::{IdGenerator, UuidIdGenerator};
use causa_core::models::{Methodology, RootCause, RootCauseAnalysis};
use chrono::Utc;
use petgraph::stable_graph::NodeIndex;
use tracing::{debug, info, warn};

use crate::classify::classify_root_cause;
use crate::graph::IndexedGraph;
use crate::scoring::{gather_root_evidence, impact_magnitude, node_confidence, overall_confidence};
use crate::traversal::backward::{self, RootCandidate};
use crate::traversal::TraversalConfig;

const ALGORITHM: &str = "backward_bfs_path_strength";

/// Finds and ranks the most probable origins of a target event.
///
/// Stateless between calls: every `analyze` builds its own index, queue, and
/// visited set, so a shared analyzer is safe to call concurrently.
pub struct RootCauseAnalyzer {
    config: CausalEngineConfig,
    ids: Arc<dyn IdGenerator>,
}

impl RootCauseAnalyzer {
    /// Create an analyzer. Fails fast on an invalid config.
    pub fn new(config: CausalEngineConfig) -> CausalResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ids: Arc::new(UuidIdGenerator),
        })
    }

    /// Replace the result id source (for reproducible tests).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &CausalEngineConfig {
        &self.config
    }

    /// Analyze `graph` backward from `target_event_id`.
    ///
    /// Returns `NotFound` when the id names no node. Every other input,
    /// including empty, cyclic, or dangling graphs, yields a result.
    pub fn analyze(
        &self,
        graph: &CausalGraph,
        target_event_id: &str,
    ) -> CausalResult<RootCauseAnalysis> {
        let span = causa_core::root_cause_span!(graph.id, target_event_id);
        let _enter = span.enter();

        let indexed = IndexedGraph::build(graph);
        let target = indexed
            .get_node(target_event_id)
            .ok_or_else(|| CausalError::not_found(target_event_id))?;

        let limits = TraversalConfig::new(self.config.max_graph_depth, self.config.max_visited_nodes);

        let search = backward::find_root_candidates(&indexed, target, &limits);
        debug!(
            candidates = search.candidates.len(),
            nodes_visited = search.nodes_visited,
            "backward search complete"
        );
        let mut candidates = search.candidates;
        backward::rank(&mut candidates, self.config.max_root_causes);

        let root_causes: Vec<RootCause> = candidates
            .iter()
            .map(|c| self.build_root_cause(&indexed, c))
            .collect();

        let causal_chains = chains::build_chains(
            &indexed,
            &candidates,
            target,
            self.config.max_visited_nodes,
            self.ids.as_ref(),
        );

        let root_nodes: HashSet<NodeIndex> = candidates.iter().map(|c| c.node).collect();
        let (contributing_factors, factors_truncated) =
            factors::collect_factors(&indexed, target, &root_nodes, self.config.max_visited_nodes);

        let root_confidences: Vec<f64> = root_causes.iter().map(|r| r.confidence).collect();
        let chain_strengths: Vec<f64> = causal_chains.iter().map(|c| c.overall_strength).collect();
        let overall_confidence = overall_confidence(&root_confidences, &chain_strengths);

        let truncated = search.truncated || factors_truncated;
        if truncated {
            warn!(
                max_visited_nodes = self.config.max_visited_nodes,
                "root-cause traversal hit the visited-node cap, results are partial"
            );
        }

        info!(
            root_causes = root_causes.len(),
            chains = causal_chains.len(),
            contributing_factors = contributing_factors.len(),
            overall_confidence,
            "root-cause analysis complete"
        );

        Ok(RootCauseAnalysis {
            id: self.ids.next_id(),
            graph_id: graph.id.clone(),
            target_event: indexed.node(target).clone(),
            root_causes,
            causal_chains,
            contributing_factors,
            overall_confidence,
            methodology: self.methodology(&indexed, search.nodes_visited, truncated),
            created_at: Utc::now(),
        })
    }

    fn build_root_cause(&self, graph: &IndexedGraph, candidate: &RootCandidate) -> RootCause {
        let node = graph.node(candidate.node);
        let category = classify_root_cause(node);
        RootCause {
            id: self.ids.next_id(),
            category,
            probability: candidate.path_strength,
            confidence: node_confidence(graph, candidate.node),
            path_strength: candidate.path_strength,
            depth: candidate.depth,
            evidence: gather_root_evidence(graph, candidate.node),
            impact_magnitude: impact_magnitude(node, candidate.path_strength),
            description: format!(
                "{} ({}) classified as {}, {} hop(s) upstream with path strength {:.2}",
                node.name,
                node.node_type.as_str(),
                category.as_str(),
                candidate.depth,
                candidate.path_strength
            ),
            node: node.clone(),
        }
    }

    fn methodology(&self, graph: &IndexedGraph, nodes_visited: usize, truncated: bool) -> Methodology {
        Methodology {
            algorithm: ALGORITHM.to_string(),
            max_depth: self.config.max_graph_depth,
            nodes_visited,
            dangling_edges_skipped: graph.dangling_edges(),
            truncated,
            assumptions: vec![
                "Edge strengths are independent propagation probabilities".to_string(),
                "Nodes with no incoming edges in the supplied graph are origins".to_string(),
            ],
            limitations: vec![
                "Causal chains are the first root-to-target path found depth-first, not the strongest or shortest".to_string(),
                "A root's path strength comes from the fewest-hop path that first reached it".to_string(),
                format!(
                    "Roots more than {} hops from the target are not considered",
                    self.config.max_graph_depth
                ),
            ],
        }
    }
}
