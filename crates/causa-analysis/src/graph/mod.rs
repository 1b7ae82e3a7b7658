//! Per-call graph indexing and advisory validation.

pub mod indexed;
pub mod validation;

pub use indexed::IndexedGraph;
pub use validation::{validate, GraphValidationReport};
