//! Risk scoring over projected impacts.

use std::collections::BTreeMap;

use causa_core::models::{ImpactRiskAssessment, ProjectedImpact, Severity};

use crate::scoring::{clamp_unit, mean};

/// `risk_score = mean(magnitude * probability)` capped at 1, bucketed at
/// 0.7 / 0.5 / 0.3. `mitigation_potential = 1 - mean(probability)`.
/// With no impacts the risk is low and there is nothing to mitigate.
pub fn assess_risk(impacts: &[ProjectedImpact]) -> ImpactRiskAssessment {
    let risk_score = clamp_unit(
        mean(impacts.iter().map(|i| i.magnitude * i.probability)).unwrap_or(0.0),
    );

    let mut breakdown_by_category = BTreeMap::new();
    for impact in impacts {
        breakdown_by_category
            .entry(impact.impact_type)
            .and_modify(|m: &mut f64| *m = m.max(impact.magnitude))
            .or_insert(impact.magnitude);
    }

    let mitigation_potential = mean(impacts.iter().map(|i| i.probability))
        .map(|p| clamp_unit(1.0 - p))
        .unwrap_or(0.0);

    ImpactRiskAssessment {
        overall_risk: Severity::from_risk_score(risk_score),
        risk_score,
        breakdown_by_category,
        mitigation_potential,
    }
}
