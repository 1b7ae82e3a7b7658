//! # causa-core
//!
//! Foundation crate for the Causa analysis engine.
//! Defines the causal graph model, analysis result types, errors, config,
//! ID generation, and constants. The analyzers in `causa-analysis` depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod ids;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::CausalEngineConfig;
pub use errors::{CausalError, CausalResult, ErrorCode};
pub use graph::{
    CausalEdge, CausalEvidence, CausalGraph, CausalNode, CausalScope, EvidenceType, NodeType,
};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use models::{ImpactAnalysis, RootCauseAnalysis, Severity};
