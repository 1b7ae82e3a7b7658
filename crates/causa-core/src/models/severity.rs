use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-level severity scale used for nodes, impacts, risk, and priorities.
///
/// Variants are declared low → critical so the derived `Ord` agrees with `rank()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// critical=4, high=3, medium=2, low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// `rank / 4`, a weight in (0, 1].
    pub fn weight(&self) -> f64 {
        f64::from(self.rank()) / 4.0
    }

    /// Classify an impact magnitude: critical ≥ 0.8, high ≥ 0.6, medium ≥ 0.3.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 0.8 {
            Self::Critical
        } else if magnitude >= 0.6 {
            Self::High
        } else if magnitude >= 0.3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Classify an aggregate risk score: critical ≥ 0.7, high ≥ 0.5, medium ≥ 0.3.
    pub fn from_risk_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::Critical
        } else if score >= 0.5 {
            Self::High
        } else if score >= 0.3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The more severe of two levels.
    pub fn worst(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
