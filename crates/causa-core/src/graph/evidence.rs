use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kind of support behind a causal assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvidenceType {
    Statistical,
    Temporal,
    DomainKnowledge,
    Intervention,
    Counterfactual,
    ExpertAnnotation,
}

impl EvidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statistical => "statistical",
            Self::Temporal => "temporal",
            Self::DomainKnowledge => "domain_knowledge",
            Self::Intervention => "intervention",
            Self::Counterfactual => "counterfactual",
            Self::ExpertAnnotation => "expert_annotation",
        }
    }
}

/// An append-only fact justifying an edge or node assertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CausalEvidence {
    #[serde(rename = "type")]
    pub evidence_type: EvidenceType,
    pub description: String,
    pub confidence: f64,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl CausalEvidence {
    pub fn new(
        evidence_type: EvidenceType,
        description: impl Into<String>,
        confidence: f64,
        source: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            evidence_type,
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
            source: source.into(),
            timestamp,
        }
    }
}
