//! Shared scoring primitives: confidence aggregation and evidence gathering.

pub mod confidence;
pub mod evidence;

pub use confidence::{
    clamp_unit, impact_magnitude, mean, node_confidence, overall_confidence, path_strength,
};
pub use evidence::gather_root_evidence;
