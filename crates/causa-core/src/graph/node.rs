use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Severity;

/// What a node in the causal graph represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NodeType {
    Event,
    Change,
    MetricAnomaly,
    Decision,
    Deployment,
    DataChange,
    Infrastructure,
    External,
    Outcome,
}

impl NodeType {
    pub const ALL: [NodeType; 9] = [
        Self::Event,
        Self::Change,
        Self::MetricAnomaly,
        Self::Decision,
        Self::Deployment,
        Self::DataChange,
        Self::Infrastructure,
        Self::External,
        Self::Outcome,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Change => "change",
            Self::MetricAnomaly => "metric_anomaly",
            Self::Decision => "decision",
            Self::Deployment => "deployment",
            Self::DataChange => "data_change",
            Self::Infrastructure => "infrastructure",
            Self::External => "external",
            Self::Outcome => "outcome",
        }
    }

    /// Whether an operator could plausibly take this factor out of the system.
    /// Infrastructure and external dependencies are treated as fixed.
    pub fn is_removable(&self) -> bool {
        !matches!(self, Self::External | Self::Infrastructure)
    }
}

/// Descriptive properties carried by every node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct NodeProperties {
    pub severity: Option<Severity>,
    pub category: String,
    pub tags: Vec<String>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// The platform resource a node is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ResourceRef {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
            name: None,
        }
    }
}

/// An immutable fact about the world at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CausalNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: NodeProperties,
    pub timestamp: DateTime<Utc>,
    /// Duration of the event in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub resource: Option<ResourceRef>,
    /// Observed metric values. Ordered by name, so "first metric" is stable.
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl CausalNode {
    pub fn new(id: impl Into<String>, node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type,
            name: name.into(),
            description: String::new(),
            properties: NodeProperties::default(),
            timestamp: Utc::now(),
            duration: None,
            actor: None,
            resource: None,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.properties.severity = Some(severity);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_resource(mut self, resource: ResourceRef) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// First metric by name, if the node carries any.
    pub fn first_metric(&self) -> Option<(&str, f64)> {
        self.metrics
            .iter()
            .next()
            .map(|(name, value)| (name.as_str(), *value))
    }
}
