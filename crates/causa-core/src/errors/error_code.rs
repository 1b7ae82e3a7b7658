//! Stable error codes for the API boundary.

use super::CausalError;

/// Maps an error onto the code and HTTP status the API layer reports.
pub trait ErrorCode {
    /// Machine-readable code string (e.g., "NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// HTTP status the REST layer should answer with.
    fn status_code(&self) -> u16;

    /// `[ERROR_CODE] message`, safe to hand to API clients.
    fn display_for_api(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const INVALID_INPUT: &str = "INVALID_INPUT";

impl ErrorCode for CausalError {
    fn error_code(&self) -> &'static str {
        match self {
            CausalError::NotFound { .. } => NOT_FOUND,
            CausalError::Configuration { .. } | CausalError::ConfigParse { .. } => {
                CONFIGURATION_ERROR
            }
            CausalError::InvalidInput { .. } => INVALID_INPUT,
        }
    }

    fn status_code(&self) -> u16 {
        match self {
            CausalError::NotFound { .. } => 404,
            CausalError::InvalidInput { .. } => 400,
            // A misconfigured engine is a server fault, not a caller fault.
            CausalError::Configuration { .. } | CausalError::ConfigParse { .. } => 500,
        }
    }
}
