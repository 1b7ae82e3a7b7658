//! Impact projection for one forward step.

use causa_core::constants::{METRIC_SHIFT_PER_MAGNITUDE, MIN_QUANTIFIED_CONFIDENCE};
use causa_core::graph::CausalNode;
use causa_core::models::{ImpactType, ProjectedImpact, QuantifiedEffect};

use crate::classify::infer_impact_type;
use crate::graph::IndexedGraph;
use crate::scoring::clamp_unit;
use crate::traversal::forward::ForwardStep;

/// `min(1, magnitude * amplification)`. The amplification is a tunable
/// heuristic, not a derived probability.
pub fn impact_probability(magnitude: f64, amplification: f64) -> f64 {
    clamp_unit(magnitude * amplification)
}

/// `ceil(base_hours(type) * (1 + magnitude))`. A zero-magnitude impact still
/// costs the base recovery time.
pub fn time_to_recover(impact_type: ImpactType, magnitude: f64) -> Option<u64> {
    let magnitude = clamp_unit(magnitude);
    Some((impact_type.base_recovery_hours() * (1.0 + magnitude)).ceil() as u64)
}

/// Shift the node's first metric by ±20% per unit magnitude: up for impact
/// types that increase their metric, down for degradations.
pub fn quantify(node: &CausalNode, impact_type: ImpactType, magnitude: f64) -> Option<QuantifiedEffect> {
    let (metric, current_value) = node.first_metric()?;
    let shift = METRIC_SHIFT_PER_MAGNITUDE * magnitude;
    let signed = if impact_type.is_increase() { shift } else { -shift };
    Some(QuantifiedEffect {
        metric: metric.to_string(),
        current_value,
        projected_value: current_value * (1.0 + signed),
        change_percent: signed * 100.0,
        confidence: (1.0 - magnitude * 0.5).max(MIN_QUANTIFIED_CONFIDENCE),
    })
}

/// Project the effect of the source on one step's target.
pub fn project(graph: &IndexedGraph, step: &ForwardStep, amplification: f64, id: String) -> ProjectedImpact {
    let target = graph.node(step.target);
    let impact_type = infer_impact_type(target);
    let magnitude = step.strength;

    ProjectedImpact {
        id,
        impact_type,
        magnitude,
        probability: impact_probability(magnitude, amplification),
        expected_lag_time: step.lag_ms,
        time_to_recover: time_to_recover(impact_type, magnitude),
        quantified_effect: quantify(target, impact_type, magnitude),
        depth: step.depth,
        path: step.path.iter().map(|&n| graph.node(n).id.clone()).collect(),
        description: format!(
            "{}: {} at {:.0}% magnitude, {} hop(s) downstream",
            target.name,
            impact_type.as_str().replace('_', " "),
            magnitude * 100.0,
            step.depth
        ),
        target: target.clone(),
    }
}
