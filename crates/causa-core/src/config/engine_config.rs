use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::constants::MAX_TRAVERSAL_DEPTH;
use crate::errors::{CausalError, CausalResult};

/// Settings shared by the root-cause analyzer and the impact assessor.
///
/// Supplied once at construction, never per call. Depth bounds and the
/// visited-node cap are the only termination guarantees against very deep or
/// dense graphs, so they are validated up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct CausalEngineConfig {
    /// Maximum backward hops from the target during root-cause search.
    pub max_graph_depth: usize,
    /// Maximum forward hops from the source during impact projection.
    pub max_impact_depth: usize,
    /// Number of ranked root causes kept.
    pub max_root_causes: usize,
    /// Cap on nodes any single traversal may visit.
    pub max_visited_nodes: usize,
    /// Multiplier from projected magnitude to probability (clamped to 1).
    pub probability_amplification: f64,
}

impl Default for CausalEngineConfig {
    fn default() -> Self {
        Self {
            max_graph_depth: defaults::DEFAULT_MAX_GRAPH_DEPTH,
            max_impact_depth: defaults::DEFAULT_MAX_IMPACT_DEPTH,
            max_root_causes: defaults::DEFAULT_MAX_ROOT_CAUSES,
            max_visited_nodes: defaults::DEFAULT_MAX_VISITED_NODES,
            probability_amplification: defaults::DEFAULT_PROBABILITY_AMPLIFICATION,
        }
    }
}

impl CausalEngineConfig {
    /// Parse a config from TOML. Missing fields take their defaults.
    /// The result is validated before it is returned.
    pub fn from_toml(input: &str) -> CausalResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> CausalResult<String> {
        toml::to_string(self).map_err(|e| CausalError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Check every bound. Fails on the first invalid field.
    pub fn validate(&self) -> CausalResult<()> {
        check_depth("max_graph_depth", self.max_graph_depth)?;
        check_depth("max_impact_depth", self.max_impact_depth)?;

        if self.max_root_causes == 0 {
            return Err(CausalError::configuration(
                "max_root_causes",
                "must be at least 1",
            ));
        }
        if self.max_visited_nodes == 0 {
            return Err(CausalError::configuration(
                "max_visited_nodes",
                "must be at least 1",
            ));
        }
        if !self.probability_amplification.is_finite() || self.probability_amplification <= 0.0
        {
            return Err(CausalError::configuration(
                "probability_amplification",
                format!(
                    "must be a positive finite number, got {}",
                    self.probability_amplification
                ),
            ));
        }
        Ok(())
    }

    pub fn with_max_graph_depth(mut self, depth: usize) -> Self {
        self.max_graph_depth = depth;
        self
    }

    pub fn with_max_impact_depth(mut self, depth: usize) -> Self {
        self.max_impact_depth = depth;
        self
    }

    pub fn with_max_root_causes(mut self, count: usize) -> Self {
        self.max_root_causes = count;
        self
    }

    pub fn with_max_visited_nodes(mut self, count: usize) -> Self {
        self.max_visited_nodes = count;
        self
    }
}

fn check_depth(field: &str, depth: usize) -> CausalResult<()> {
    if depth == 0 || depth > MAX_TRAVERSAL_DEPTH {
        return Err(CausalError::configuration(
            field,
            format!("must be between 1 and {MAX_TRAVERSAL_DEPTH}, got {depth}"),
        ));
    }
    Ok(())
}
