//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p causa-core export_bindings
//! Generated files appear in causa-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs writes a .ts file for every type with #[ts(export)] when `cargo test` runs.
    // This test ensures the API-facing types are importable and TS-derivable.
    use causa_core::config::CausalEngineConfig;
    use causa_core::graph::{
        CausalEdge, CausalEvidence, CausalGraph, CausalNode, CausalScope, EvidenceType,
        NodeProperties, NodeType, Relationship, RelationshipType, ResourceRef, TimeWindow,
    };
    use causa_core::models::{
        AffectedResource, CausalChain, ConfidenceLevel, ContributingFactor, EffortLevel,
        ImpactAnalysis, ImpactRecommendation, ImpactRiskAssessment, ImpactSummary, ImpactType,
        Methodology, ProjectedImpact, QuantifiedEffect, RecommendationType, RootCause,
        RootCauseAnalysis, RootCauseCategory, Severity,
    };
    // ts-rs export is triggered by the derive macro at compile time.
    let _ = std::any::type_name::<CausalEngineConfig>();
    let _ = std::any::type_name::<CausalGraph>();
    let _ = std::any::type_name::<CausalNode>();
    let _ = std::any::type_name::<CausalEdge>();
    let _ = std::any::type_name::<CausalEvidence>();
    let _ = std::any::type_name::<CausalScope>();
    let _ = std::any::type_name::<TimeWindow>();
    let _ = std::any::type_name::<NodeProperties>();
    let _ = std::any::type_name::<NodeType>();
    let _ = std::any::type_name::<EvidenceType>();
    let _ = std::any::type_name::<Relationship>();
    let _ = std::any::type_name::<RelationshipType>();
    let _ = std::any::type_name::<ResourceRef>();
    let _ = std::any::type_name::<RootCauseAnalysis>();
    let _ = std::any::type_name::<RootCause>();
    let _ = std::any::type_name::<RootCauseCategory>();
    let _ = std::any::type_name::<CausalChain>();
    let _ = std::any::type_name::<ContributingFactor>();
    let _ = std::any::type_name::<Methodology>();
    let _ = std::any::type_name::<ConfidenceLevel>();
    let _ = std::any::type_name::<ImpactAnalysis>();
    let _ = std::any::type_name::<ProjectedImpact>();
    let _ = std::any::type_name::<ImpactType>();
    let _ = std::any::type_name::<QuantifiedEffect>();
    let _ = std::any::type_name::<AffectedResource>();
    let _ = std::any::type_name::<ImpactRiskAssessment>();
    let _ = std::any::type_name::<ImpactRecommendation>();
    let _ = std::any::type_name::<RecommendationType>();
    let _ = std::any::type_name::<EffortLevel>();
    let _ = std::any::type_name::<ImpactSummary>();
    let _ = std::any::type_name::<Severity>();
}
