//! # causa-analysis
//!
//! Backward (root-cause) and forward (impact) analysis over a [`CausalGraph`].
//!
//! Each call indexes the supplied graph into a petgraph arena, runs bounded,
//! cycle-safe traversals with explicit work-lists, and returns freshly built
//! result objects. Analyzers keep no state between calls, so one instance can
//! serve concurrent requests against the same or different graphs.
//!
//! [`CausalGraph`]: causa_core::CausalGraph

pub mod classify;
pub mod engine;
pub mod graph;
pub mod impact;
pub mod root_cause;
pub mod scoring;
pub mod traversal;

pub use engine::CausalEngine;
pub use impact::ImpactAssessor;
pub use root_cause::RootCauseAnalyzer;
