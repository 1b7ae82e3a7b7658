//! Error types for the Causa engine.

pub mod causal_error;
pub mod error_code;

pub use causal_error::CausalError;
pub use error_code::ErrorCode;

/// Result alias used across the workspace.
pub type CausalResult<T> = Result<T, CausalError>;
