use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::evidence::CausalEvidence;

/// The nature of the cause → effect link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RelationshipType {
    #[default]
    Causes,
    Triggers,
    Enables,
    Amplifies,
    Mitigates,
    Prevents,
    Correlates,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Causes => "causes",
            Self::Triggers => "triggers",
            Self::Enables => "enables",
            Self::Amplifies => "amplifies",
            Self::Mitigates => "mitigates",
            Self::Prevents => "prevents",
            Self::Correlates => "correlates",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub reversible: bool,
    #[serde(default = "default_direct_effect")]
    pub direct_effect: bool,
}

fn default_direct_effect() -> bool {
    true
}

impl Default for Relationship {
    fn default() -> Self {
        Self {
            relationship_type: RelationshipType::default(),
            mechanism: None,
            reversible: false,
            direct_effect: true,
        }
    }
}

/// A directed, weighted, evidenced cause → effect link.
///
/// `strength` is how strongly the cause propagates to the effect.
/// `confidence` is how much the edge itself is believed. They are
/// independent axes: a weak edge can be certain and a strong one doubtful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CausalEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub relationship: Relationship,
    pub strength: f64,
    pub confidence: f64,
    /// Propagation lag in milliseconds.
    #[serde(default)]
    pub lag_time: Option<u64>,
    #[serde(default)]
    pub evidence: Vec<CausalEvidence>,
}

impl CausalEdge {
    /// New edge with full confidence and no evidence. Strength is clamped to [0, 1].
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        strength: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            relationship: Relationship::default(),
            strength: strength.clamp(0.0, 1.0),
            confidence: 1.0,
            lag_time: None,
            evidence: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_lag_ms(mut self, lag: u64) -> Self {
        self.lag_time = Some(lag);
        self
    }

    pub fn with_relationship(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship.relationship_type = relationship_type;
        self
    }

    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.relationship.mechanism = Some(mechanism.into());
        self
    }

    pub fn with_evidence(mut self, evidence: CausalEvidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Lag in milliseconds, zero when unknown.
    pub fn lag_ms(&self) -> u64 {
        self.lag_time.unwrap_or(0)
    }
}
