//! Risk assessment inputs.
//!
//! A [`RiskAssessment`] carries the raw quantitative rating, the qualitative
//! factor assessments, and the three independent override slots. Factor
//! weights are snapshots taken when the assessment was created; they do not
//! move when the factor's current weight is later edited, so a historical
//! assessment re-derives to the same score forever.

use serde::{Deserialize, Serialize};

use crate::tier::{RiskLevel, RiskTier};

/// One qualitative factor's contribution to an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorAssessment {
    /// Factor name, for display and audit only.
    pub factor: String,

    /// The factor's weight at assessment time. Immutable after creation.
    pub weight_snapshot: f64,

    /// The assessed rating. `None` for partial saves; unrated factors do
    /// not contribute to the score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RiskLevel>,
}

impl FactorAssessment {
    /// A rated factor assessment.
    #[must_use]
    pub fn rated(factor: &str, weight_snapshot: f64, rating: RiskLevel) -> Self {
        Self {
            factor: factor.to_string(),
            weight_snapshot,
            rating: Some(rating),
        }
    }
}

/// The current risk assessment for one (model, region) pair.
///
/// `region: None` is the global assessment. Overrides apply independently:
/// each slot replaces exactly one upstream value and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Region this assessment covers; `None` = global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Measured quantitative rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantitative_rating: Option<RiskLevel>,

    /// Override for the quantitative rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantitative_override: Option<RiskLevel>,

    /// Override for the computed qualitative level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualitative_override: Option<RiskLevel>,

    /// Override for the derived tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_tier_override: Option<RiskTier>,

    /// Factor assessments with their weight snapshots.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<FactorAssessment>,
}
