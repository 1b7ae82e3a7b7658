use causa_core::graph::CausalNode;
use causa_core::models::ImpactType;

use super::{first_match, KeywordRule};

/// Impact types in priority order, matched on the node name only.
/// `PerformanceDegradation` is the fallback.
pub static IMPACT_RULES: [KeywordRule<ImpactType>; 8] = [
    KeywordRule {
        outcome: ImpactType::LatencyIncrease,
        node_types: &[],
        keywords: &["latency", "slow", "response time", "delay", "timeout"],
    },
    KeywordRule {
        outcome: ImpactType::AccuracyDecrease,
        node_types: &[],
        keywords: &["accuracy", "precision", "recall", "prediction quality", "model quality"],
    },
    KeywordRule {
        outcome: ImpactType::AvailabilityReduction,
        node_types: &[],
        keywords: &["availability", "outage", "downtime", "unavailable", "error rate", "5xx", "crash"],
    },
    KeywordRule {
        outcome: ImpactType::PerformanceDegradation,
        node_types: &[],
        keywords: &["performance", "throughput", "degrad", "saturation"],
    },
    KeywordRule {
        outcome: ImpactType::CostIncrease,
        node_types: &[],
        keywords: &["cost", "spend", "billing", "budget", "price"],
    },
    KeywordRule {
        outcome: ImpactType::SecurityRisk,
        node_types: &[],
        keywords: &["security", "vulnerab", "exposure", "breach", "leak"],
    },
    KeywordRule {
        outcome: ImpactType::ComplianceViolation,
        node_types: &[],
        keywords: &["compliance", "regulat", "gdpr", "audit", "policy"],
    },
    KeywordRule {
        outcome: ImpactType::UserExperienceDegradation,
        node_types: &[],
        keywords: &["user", "customer", "ux", "experience", "churn"],
    },
];

pub fn infer_impact_type(node: &CausalNode) -> ImpactType {
    first_match(&IMPACT_RULES, node).unwrap_or(ImpactType::PerformanceDegradation)
}
