use causa_core::graph::{CausalNode, NodeType};
use causa_core::models::RootCauseCategory;

use super::{first_match, KeywordRule};

/// Root-cause categories in priority order. `Unknown` is the fallback.
pub static ROOT_CAUSE_RULES: [KeywordRule<RootCauseCategory>; 9] = [
    KeywordRule {
        outcome: RootCauseCategory::DataQuality,
        node_types: &[NodeType::DataChange],
        keywords: &[
            "data quality",
            "schema",
            "null value",
            "missing data",
            "corrupt",
            "duplicate record",
            "data pipeline",
            "label",
        ],
    },
    KeywordRule {
        outcome: RootCauseCategory::ModelDrift,
        node_types: &[],
        keywords: &["drift", "model", "retrain", "feature distribution", "concept shift"],
    },
    KeywordRule {
        outcome: RootCauseCategory::Infrastructure,
        node_types: &[NodeType::Infrastructure],
        keywords: &[
            "server",
            "host",
            "cluster",
            "node failure",
            "node pool",
            "disk",
            "network",
            "gpu",
            "kubernetes",
            "outage",
        ],
    },
    KeywordRule {
        outcome: RootCauseCategory::Configuration,
        node_types: &[],
        keywords: &["config", "setting", "parameter", "feature flag", "threshold", "ttl"],
    },
    KeywordRule {
        outcome: RootCauseCategory::CodeChange,
        node_types: &[NodeType::Deployment],
        keywords: &["deploy", "release", "commit", "code", "rollout", "merge", "upgrade"],
    },
    KeywordRule {
        outcome: RootCauseCategory::ExternalDependency,
        node_types: &[NodeType::External],
        keywords: &["third-party", "third party", "vendor", "external", "provider", "upstream api"],
    },
    KeywordRule {
        outcome: RootCauseCategory::HumanError,
        node_types: &[],
        keywords: &["manual", "human", "operator", "mistake", "typo"],
    },
    KeywordRule {
        outcome: RootCauseCategory::ResourceConstraint,
        node_types: &[],
        keywords: &["memory", "cpu", "quota", "capacity", "oom", "throttl", "exhaust", "limit"],
    },
    KeywordRule {
        outcome: RootCauseCategory::SecurityIncident,
        node_types: &[],
        keywords: &["security", "breach", "attack", "unauthorized", "vulnerab", "intrusion"],
    },
];

pub fn classify_root_cause(node: &CausalNode) -> RootCauseCategory {
    first_match(&ROOT_CAUSE_RULES, node).unwrap_or(RootCauseCategory::Unknown)
}
