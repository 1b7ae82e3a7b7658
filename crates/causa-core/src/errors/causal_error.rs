/// Errors surfaced by the analyzers and their configuration.
///
/// Traversal itself is total: dangling edges, empty graphs, and cycles are
/// handled as defined behavior and never produce an error.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("node not found in causal graph: {id}")]
    NotFound { id: String },

    #[error("invalid engine configuration for {field}: {message}")]
    Configuration { field: String, message: String },

    #[error("engine configuration could not be parsed: {message}")]
    ConfigParse { message: String },

    #[error("invalid analysis input: {message}")]
    InvalidInput { message: String },
}

impl CausalError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by a bad engine setup rather than a bad request.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::ConfigParse { .. })
    }
}

impl From<toml::de::Error> for CausalError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CausalError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: err.to_string(),
        }
    }
}
