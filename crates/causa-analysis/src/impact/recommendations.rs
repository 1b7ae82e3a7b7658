//! Recommendation generation from a risk assessment.

use causa_core::constants::RECOMMENDATION_MAGNITUDE_FLOOR;
use causa_core::ids::IdGenerator;
use causa_core::models::{
    EffortLevel, ImpactRecommendation, ImpactRiskAssessment, ImpactType, RecommendationType,
    Severity,
};

use crate::scoring::clamp_unit;

/// Per-impact-type recommendation template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationTemplate {
    pub recommendation_type: RecommendationType,
    pub description: &'static str,
    pub effort: EffortLevel,
    /// Risk reduction at magnitude 1.0; scaled linearly by the observed magnitude.
    pub base_risk_reduction: f64,
}

pub fn template_for(impact_type: ImpactType) -> RecommendationTemplate {
    use RecommendationType::*;
    let (recommendation_type, description, effort, base_risk_reduction) = match impact_type {
        ImpactType::LatencyIncrease => (
            Scale,
            "Scale serving capacity or enable response caching on the affected path",
            EffortLevel::Medium,
            0.4,
        ),
        ImpactType::AccuracyDecrease => (
            Rollback,
            "Roll back to the last validated model or retrain on current data",
            EffortLevel::High,
            0.6,
        ),
        ImpactType::AvailabilityReduction => (
            Mitigate,
            "Enable failover and tighten health checks on the affected services",
            EffortLevel::Medium,
            0.5,
        ),
        ImpactType::PerformanceDegradation => (
            Scale,
            "Add capacity or shed load on the degraded components",
            EffortLevel::Medium,
            0.3,
        ),
        ImpactType::CostIncrease => (
            Mitigate,
            "Set spend alerts and cap autoscaling on the affected resources",
            EffortLevel::Low,
            0.3,
        ),
        ImpactType::SecurityRisk => (
            Prevent,
            "Restrict access and rotate credentials exposed along the impact path",
            EffortLevel::High,
            0.7,
        ),
        ImpactType::ComplianceViolation => (
            Notify,
            "Notify compliance owners and document the exposure window",
            EffortLevel::Low,
            0.4,
        ),
        ImpactType::UserExperienceDegradation => (
            Notify,
            "Post a status update and prepare customer-facing communication",
            EffortLevel::Low,
            0.2,
        ),
    };
    RecommendationTemplate {
        recommendation_type,
        description,
        effort,
        base_risk_reduction,
    }
}

/// Recommendations for an assessment, in this order:
/// a critical `prevent` when risk is critical, one per impact type whose
/// strongest magnitude reaches the floor, and a standing `monitor` unless
/// risk is low.
pub fn generate(risk: &ImpactRiskAssessment, ids: &dyn IdGenerator) -> Vec<ImpactRecommendation> {
    let mut recommendations = Vec::new();

    if risk.overall_risk == Severity::Critical {
        recommendations.push(ImpactRecommendation {
            id: ids.next_id(),
            recommendation_type: RecommendationType::Prevent,
            priority: Severity::Critical,
            description: "Halt or roll back the source change before its effects propagate"
                .to_string(),
            estimated_effort: EffortLevel::High,
            expected_risk_reduction: risk.risk_score * 0.8,
            impact_type: None,
        });
    }

    for (&impact_type, &magnitude) in &risk.breakdown_by_category {
        if magnitude < RECOMMENDATION_MAGNITUDE_FLOOR {
            continue;
        }
        let template = template_for(impact_type);
        recommendations.push(ImpactRecommendation {
            id: ids.next_id(),
            recommendation_type: template.recommendation_type,
            priority: Severity::from_magnitude(magnitude),
            description: template.description.to_string(),
            estimated_effort: template.effort,
            expected_risk_reduction: clamp_unit(template.base_risk_reduction * magnitude),
            impact_type: Some(impact_type),
        });
    }

    if risk.overall_risk != Severity::Low {
        recommendations.push(ImpactRecommendation {
            id: ids.next_id(),
            recommendation_type: RecommendationType::Monitor,
            priority: Severity::Medium,
            description:
                "Alert on the projected downstream metrics and watch them through the expected lag window"
                    .to_string(),
            estimated_effort: EffortLevel::Low,
            expected_risk_reduction: 0.1,
            impact_type: None,
        });
    }

    recommendations
}
