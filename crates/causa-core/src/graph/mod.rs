//! The causal graph model: nodes, edges, evidence, and scope.
//!
//! A graph is an immutable fact base for the duration of one analysis.
//! Analyzers only read it; all working state lives in the analyzer call.

pub mod causal_graph;
pub mod edge;
pub mod evidence;
pub mod node;

pub use causal_graph::{CausalGraph, CausalScope, TimeWindow};
pub use edge::{CausalEdge, Relationship, RelationshipType};
pub use evidence::{CausalEvidence, EvidenceType};
pub use node::{CausalNode, NodeProperties, NodeType, ResourceRef};
