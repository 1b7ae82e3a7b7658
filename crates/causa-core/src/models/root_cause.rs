use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::ConfidenceLevel;
use crate::graph::{CausalEdge, CausalEvidence, CausalNode};

/// Classification of a root cause, in rule-evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RootCauseCategory {
    DataQuality,
    ModelDrift,
    Infrastructure,
    Configuration,
    CodeChange,
    ExternalDependency,
    HumanError,
    ResourceConstraint,
    SecurityIncident,
    Unknown,
}

impl RootCauseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataQuality => "data_quality",
            Self::ModelDrift => "model_drift",
            Self::Infrastructure => "infrastructure",
            Self::Configuration => "configuration",
            Self::CodeChange => "code_change",
            Self::ExternalDependency => "external_dependency",
            Self::HumanError => "human_error",
            Self::ResourceConstraint => "resource_constraint",
            Self::SecurityIncident => "security_incident",
            Self::Unknown => "unknown",
        }
    }
}

/// A ranked candidate origin of the target event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RootCause {
    pub id: String,
    pub node: CausalNode,
    pub category: RootCauseCategory,
    /// Product of edge strengths on the backward path that discovered the node.
    pub probability: f64,
    /// Mean confidence of the node's outgoing edges.
    pub confidence: f64,
    pub path_strength: f64,
    /// Hops from the target at discovery.
    pub depth: usize,
    pub evidence: Vec<CausalEvidence>,
    pub impact_magnitude: f64,
    pub description: String,
}

/// A root → target path through the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CausalChain {
    pub id: String,
    /// Id of the root node this chain starts from.
    pub root_cause_id: String,
    pub nodes: Vec<CausalNode>,
    pub edges: Vec<CausalEdge>,
    /// Sum of edge lag times in milliseconds.
    pub total_lag_time: u64,
    pub weakest_link: CausalEdge,
    pub overall_strength: f64,
}

impl CausalChain {
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// An intermediate node upstream of the target that is not a ranked root cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContributingFactor {
    pub node: CausalNode,
    /// Strength of the edge through which the factor was first reached.
    pub contribution_weight: f64,
    pub is_removable: bool,
    pub depth: usize,
}

/// How an analysis was produced and what it does not promise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Methodology {
    pub algorithm: String,
    pub max_depth: usize,
    pub nodes_visited: usize,
    pub dangling_edges_skipped: usize,
    /// True when the visited-node cap stopped a traversal early.
    pub truncated: bool,
    pub assumptions: Vec<String>,
    pub limitations: Vec<String>,
}

/// Output of backward analysis from a target event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RootCauseAnalysis {
    pub id: String,
    pub graph_id: String,
    pub target_event: CausalNode,
    /// Sorted by probability, highest first.
    pub root_causes: Vec<RootCause>,
    pub causal_chains: Vec<CausalChain>,
    pub contributing_factors: Vec<ContributingFactor>,
    pub overall_confidence: f64,
    pub methodology: Methodology,
    pub created_at: DateTime<Utc>,
}

impl RootCauseAnalysis {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.overall_confidence)
    }

    /// Highest-ranked root cause, if any was found.
    pub fn primary(&self) -> Option<&RootCause> {
        self.root_causes.first()
    }

    pub fn chain_for(&self, root_node_id: &str) -> Option<&CausalChain> {
        self.causal_chains
            .iter()
            .find(|c| c.root_cause_id == root_node_id)
    }
}
