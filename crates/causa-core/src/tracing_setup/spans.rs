//! Span definitions per analysis entry point.

/// Create a root-cause analysis span.
#[macro_export]
macro_rules! root_cause_span {
    ($graph_id:expr, $target_id:expr) => {
        tracing::info_span!("causa.root_cause", graph_id = %$graph_id, target_id = %$target_id)
    };
}

/// Create an impact assessment span.
#[macro_export]
macro_rules! impact_span {
    ($graph_id:expr, $source_id:expr) => {
        tracing::info_span!("causa.impact", graph_id = %$graph_id, source_id = %$source_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ROOT_CAUSE: &str = "causa.root_cause";
    pub const IMPACT: &str = "causa.impact";
}
