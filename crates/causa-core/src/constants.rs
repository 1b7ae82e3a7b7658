/// Causa system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound accepted for either traversal depth setting.
pub const MAX_TRAVERSAL_DEPTH: usize = 1024;

/// Default backward search depth for root-cause analysis.
pub const DEFAULT_MAX_GRAPH_DEPTH: usize = 10;

/// Default forward search depth for impact assessment.
pub const DEFAULT_MAX_IMPACT_DEPTH: usize = 5;

/// Default number of ranked root causes returned.
pub const DEFAULT_MAX_ROOT_CAUSES: usize = 5;

/// Default cap on nodes visited by a single traversal.
pub const DEFAULT_MAX_VISITED_NODES: usize = 10_000;

/// Heuristic factor turning a projected magnitude into a probability.
/// Tunable, not derived from data.
pub const DEFAULT_PROBABILITY_AMPLIFICATION: f64 = 1.2;

/// Confidence assigned to a node with no outgoing edges to average over.
pub const DEFAULT_NODE_CONFIDENCE: f64 = 0.5;

/// Confidence of the temporal evidence synthesized from a root node's timestamp.
pub const TEMPORAL_EVIDENCE_CONFIDENCE: f64 = 0.7;

/// Confidence of the statistical evidence synthesized from a node metric.
pub const STATISTICAL_EVIDENCE_CONFIDENCE: f64 = 0.6;

/// Relative metric shift applied per unit of impact magnitude.
pub const METRIC_SHIFT_PER_MAGNITUDE: f64 = 0.2;

/// Floor for the confidence of a quantified metric projection.
pub const MIN_QUANTIFIED_CONFIDENCE: f64 = 0.3;

/// Impact types whose strongest magnitude is below this get no recommendation.
pub const RECOMMENDATION_MAGNITUDE_FLOOR: f64 = 0.2;
