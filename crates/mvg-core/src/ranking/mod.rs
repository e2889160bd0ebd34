// AGENT-AUTHORED
//! Final residual risk ranking.
//!
//! The final ranking penalizes stale validations: the measured scorecard
//! outcome is downgraded by the notches of the past-due bucket matching the
//! model's days-overdue, then the residual risk matrix is looked up against
//! the model's normalized tier. The no-penalty baseline
//! (`matrix[tier][measured]`) is reported alongside so reviewers can see
//! exactly what the staleness penalty cost.
//!
//! The whole result is `None` when any required input cannot be
//! interpreted: no approved validation with a scorecard outcome, an
//! unrecognized tier label, or a missing/inactive matrix configuration.
//! Nothing is guessed; callers decide whether `None` is an exclusion or a
//! reportable failure.

mod bucket;
mod matrix;
mod scorecard;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use bucket::{BucketConfigError, PastDueBucket, PastDueSchedule};
pub use matrix::ResidualRiskMatrix;
pub use scorecard::downgrade;

use crate::compliance::ComplianceOutcome;
use crate::domain::{ModelSnapshot, ScorecardOutcome};
use crate::tier::RiskTier;

/// The derived final ranking and its audit context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRanking {
    /// Residual rating after the staleness penalty.
    pub final_rating: RiskTier,

    /// Residual rating the model would have received with no penalty.
    /// `None` when the matrix has no cell for the measured outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_rating: Option<RiskTier>,

    /// Normalized tier used for the matrix row.
    pub tier: RiskTier,

    /// Scorecard outcome of the latest approved validation.
    pub measured_outcome: ScorecardOutcome,

    /// Outcome after the downgrade.
    pub adjusted_outcome: ScorecardOutcome,

    /// Notches applied (0 when days-overdue matched no bucket).
    pub notches_applied: u32,

    /// Label of the matched past-due bucket, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_label: Option<String>,
}

/// Computes the final residual risk ranking for one model.
///
/// `compliance` must be the outcome computed for the same snapshot and
/// evaluation date; its `days_overdue` drives the bucket lookup.
#[must_use]
pub fn compute_final_ranking(
    snapshot: &ModelSnapshot,
    schedule: &PastDueSchedule,
    matrix: Option<&ResidualRiskMatrix>,
    compliance: &ComplianceOutcome,
) -> Option<FinalRanking> {
    let measured_outcome = snapshot
        .latest_approved_validation()
        .and_then(|request| request.scorecard_outcome)?;

    let tier = snapshot
        .model
        .tier_label
        .as_deref()
        .and_then(RiskTier::normalize_label)?;

    let bucket = compliance
        .days_overdue
        .and_then(|days| schedule.bucket_for(days));
    let notches_applied = bucket.map_or(0, |matched| matched.downgrade_notches);
    let adjusted_outcome = downgrade(measured_outcome, notches_applied);

    let matrix = matrix?;
    let final_rating = matrix.rating_for(tier, adjusted_outcome)?;
    let baseline_rating = matrix.rating_for(tier, measured_outcome);

    debug!(
        model_id = %snapshot.model.id,
        %measured_outcome,
        %adjusted_outcome,
        notches_applied,
        %final_rating,
        "final ranking derived"
    );

    Some(FinalRanking {
        final_rating,
        baseline_rating,
        tier,
        measured_outcome,
        adjusted_outcome,
        notches_applied,
        bucket_label: bucket.map(|matched| matched.label.clone()),
    })
}

// =============================================================================
// Tests
// =============================================================================
