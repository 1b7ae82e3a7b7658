//! Property tests for the severity and confidence scales.

use proptest::prelude::*;

use causa_core::models::{ConfidenceLevel, Severity};

fn confidence_rank(level: ConfidenceLevel) -> u8 {
    match level {
        ConfidenceLevel::VeryLow => 0,
        ConfidenceLevel::Low => 1,
        ConfidenceLevel::Medium => 2,
        ConfidenceLevel::High => 3,
    }
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

proptest! {
    #[test]
    fn from_magnitude_is_monotonic(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Severity::from_magnitude(lo) <= Severity::from_magnitude(hi));
    }

    #[test]
    fn from_risk_score_is_monotonic(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Severity::from_risk_score(lo) <= Severity::from_risk_score(hi));
    }

    #[test]
    fn confidence_level_is_monotonic(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            confidence_rank(ConfidenceLevel::from_score(lo))
                <= confidence_rank(ConfidenceLevel::from_score(hi))
        );
    }

    #[test]
    fn worst_is_the_maximum(a in severity(), b in severity()) {
        prop_assert_eq!(a.worst(b), a.max(b));
        prop_assert_eq!(a.worst(b), b.worst(a));
        prop_assert!(a.weight() > 0.0 && a.weight() <= 1.0);
    }
}
