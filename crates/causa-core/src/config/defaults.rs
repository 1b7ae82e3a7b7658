//! Default values for every config field.

pub use crate::constants::{
    DEFAULT_MAX_GRAPH_DEPTH, DEFAULT_MAX_IMPACT_DEPTH, DEFAULT_MAX_ROOT_CAUSES,
    DEFAULT_MAX_VISITED_NODES, DEFAULT_PROBABILITY_AMPLIFICATION,
};
