use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::edge::CausalEdge;
use super::node::CausalNode;

/// Time window a graph covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Which part of the platform a graph describes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct CausalScope {
    pub domain: String,
    pub services: Vec<String>,
    pub environment: Option<String>,
    pub time_window: Option<TimeWindow>,
}

/// A directed, possibly cyclic multigraph of causal assertions.
///
/// Edges SHOULD reference existing node ids. Analyzers skip edges that
/// don't, so a graph with dangling references is still valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CausalGraph {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub nodes: Vec<CausalNode>,
    #[serde(default)]
    pub edges: Vec<CausalEdge>,
    #[serde(default)]
    pub scope: CausalScope,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub last_validated: Option<DateTime<Utc>>,
}

impl CausalGraph {
    /// Empty graph with a fresh UUID.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            nodes: Vec::new(),
            edges: Vec::new(),
            scope: CausalScope::default(),
            confidence: 1.0,
            last_validated: None,
        }
    }

    pub fn with_node(mut self, node: CausalNode) -> Self {
        self.add_node(node);
        self
    }

    pub fn with_edge(mut self, edge: CausalEdge) -> Self {
        self.add_edge(edge);
        self
    }

    pub fn add_node(&mut self, node: CausalNode) {
        self.nodes.push(node);
        self.updated_at = Utc::now();
    }

    pub fn add_edge(&mut self, edge: CausalEdge) {
        self.edges.push(edge);
        self.updated_at = Utc::now();
    }

    /// First node with the given id.
    pub fn find_node(&self, id: &str) -> Option<&CausalNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving `node_id`, in input order.
    pub fn outgoing_edges(&self, node_id: &str) -> Vec<&CausalEdge> {
        self.edges.iter().filter(|e| e.source_id == node_id).collect()
    }

    /// Edges entering `node_id`, in input order.
    pub fn incoming_edges(&self, node_id: &str) -> Vec<&CausalEdge> {
        self.edges.iter().filter(|e| e.target_id == node_id).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
