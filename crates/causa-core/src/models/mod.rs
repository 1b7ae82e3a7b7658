//! Result types produced by the analyzers, plus shared scoring enums.

pub mod confidence;
pub mod impact;
pub mod root_cause;
pub mod severity;

pub use confidence::ConfidenceLevel;
pub use impact::{
    AffectedResource, EffortLevel, ImpactAnalysis, ImpactRecommendation, ImpactRiskAssessment,
    ImpactSummary, ImpactType, ProjectedImpact, QuantifiedEffect, RecommendationType,
};
pub use root_cause::{
    CausalChain, ContributingFactor, Methodology, RootCause, RootCauseAnalysis,
    RootCauseCategory,
};
pub use severity::Severity;
