use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::severity::Severity;
use crate::graph::{CausalNode, ResourceRef};

/// Kind of downstream effect, in rule-evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImpactType {
    LatencyIncrease,
    AccuracyDecrease,
    AvailabilityReduction,
    PerformanceDegradation,
    CostIncrease,
    SecurityRisk,
    ComplianceViolation,
    UserExperienceDegradation,
}

impl ImpactType {
    pub const ALL: [ImpactType; 8] = [
        Self::LatencyIncrease,
        Self::AccuracyDecrease,
        Self::AvailabilityReduction,
        Self::PerformanceDegradation,
        Self::CostIncrease,
        Self::SecurityRisk,
        Self::ComplianceViolation,
        Self::UserExperienceDegradation,
    ];

    /// Whether the affected metric moves up (latency, cost, risk exposure)
    /// rather than down (accuracy, availability, throughput, experience).
    pub fn is_increase(&self) -> bool {
        matches!(
            self,
            Self::LatencyIncrease | Self::CostIncrease | Self::SecurityRisk | Self::ComplianceViolation
        )
    }

    /// Typical recovery time in hours before scaling by magnitude.
    pub fn base_recovery_hours(&self) -> f64 {
        match self {
            Self::LatencyIncrease => 2.0,
            Self::AccuracyDecrease => 24.0,
            Self::AvailabilityReduction => 1.0,
            Self::PerformanceDegradation => 4.0,
            Self::CostIncrease => 168.0,
            Self::SecurityRisk => 48.0,
            Self::ComplianceViolation => 72.0,
            Self::UserExperienceDegradation => 8.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatencyIncrease => "latency_increase",
            Self::AccuracyDecrease => "accuracy_decrease",
            Self::AvailabilityReduction => "availability_reduction",
            Self::PerformanceDegradation => "performance_degradation",
            Self::CostIncrease => "cost_increase",
            Self::SecurityRisk => "security_risk",
            Self::ComplianceViolation => "compliance_violation",
            Self::UserExperienceDegradation => "user_experience_degradation",
        }
    }
}

/// Projected shift of the first metric a node carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuantifiedEffect {
    pub metric: String,
    pub current_value: f64,
    pub projected_value: f64,
    /// Signed percentage change.
    pub change_percent: f64,
    pub confidence: f64,
}

/// A forward-propagated estimate of the effect on one downstream node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProjectedImpact {
    pub id: String,
    pub target: CausalNode,
    pub impact_type: ImpactType,
    /// Product of edge strengths from the source.
    pub magnitude: f64,
    pub probability: f64,
    /// Accumulated lag in milliseconds.
    pub expected_lag_time: u64,
    /// Estimated hours to recover.
    pub time_to_recover: Option<u64>,
    pub quantified_effect: Option<QuantifiedEffect>,
    pub depth: usize,
    /// Node ids from the source to the target, inclusive.
    pub path: Vec<String>,
    pub description: String,
}

impl ProjectedImpact {
    pub fn severity(&self) -> Severity {
        Severity::from_magnitude(self.magnitude)
    }
}

/// A platform resource touched by one or more projected impacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AffectedResource {
    pub resource: ResourceRef,
    /// Worst severity among the impacts on this resource.
    pub impact_severity: Severity,
    pub impact_types: BTreeSet<ImpactType>,
    /// Longest forward path length reachable from the impacted node.
    pub dependency_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImpactRiskAssessment {
    pub overall_risk: Severity,
    pub risk_score: f64,
    /// Per impact type, the largest magnitude observed.
    pub breakdown_by_category: BTreeMap<ImpactType, f64>,
    pub mitigation_potential: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationType {
    Prevent,
    Mitigate,
    Monitor,
    Rollback,
    Scale,
    Notify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EffortLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImpactRecommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub priority: Severity,
    pub description: String,
    pub estimated_effort: EffortLevel,
    pub expected_risk_reduction: f64,
    /// Impact type this recommendation addresses, if it targets one.
    pub impact_type: Option<ImpactType>,
}

/// Traversal bookkeeping for an impact assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImpactSummary {
    pub total_impacts: usize,
    pub max_depth_reached: usize,
    pub nodes_visited: usize,
    pub dangling_edges_skipped: usize,
    pub truncated: bool,
}

/// Output of forward analysis from a source event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImpactAnalysis {
    pub id: String,
    pub graph_id: String,
    pub source_event: CausalNode,
    pub projected_impacts: Vec<ProjectedImpact>,
    pub affected_resources: Vec<AffectedResource>,
    pub risk_assessment: ImpactRiskAssessment,
    pub recommendations: Vec<ImpactRecommendation>,
    pub summary: ImpactSummary,
    pub created_at: DateTime<Utc>,
}

impl ImpactAnalysis {
    /// Impacts whose target is the given node.
    pub fn impacts_on(&self, node_id: &str) -> Vec<&ProjectedImpact> {
        self.projected_impacts
            .iter()
            .filter(|i| i.target.id == node_id)
            .collect()
    }
}
