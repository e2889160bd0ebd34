//! Engine facade: snapshot-in, evaluation-out.
//!
//! [`GovernanceSnapshot`] is the immutable, pre-validated configuration
//! (policies, past-due schedule, active matrix) loaded once per request or
//! batch run. [`evaluate_model`] runs the full derivation chain for one
//! model against it; [`evaluate_and_journal`] additionally records the
//! approval status transition. Batch callers loop over models reusing the
//! same snapshot reference; the configuration tables are effectively
//! static for a run's duration and are never re-fetched or re-validated
//! per model.

mod cache;
mod report;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use cache::ReportCache;
pub use report::ComplianceReport;

use crate::approval::{
    ApprovalEvaluation, RecomputeTrigger, StatusHistoryRecord, StatusJournal, evaluate_approval,
};
use crate::compliance::{ComplianceOutcome, compute_compliance};
use crate::domain::ModelSnapshot;
use crate::policy::PolicySet;
use crate::ranking::{FinalRanking, PastDueSchedule, ResidualRiskMatrix, compute_final_ranking};
use crate::tier::EffectiveRisk;

/// Immutable, pre-validated configuration for one request or batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    /// Validation policies keyed by tier.
    pub policies: PolicySet,

    /// Validated past-due bucket schedule.
    pub schedule: PastDueSchedule,

    /// The single active residual risk matrix, if one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<ResidualRiskMatrix>,
}

/// Everything derived for one model: the per-model API response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    /// Model evaluated.
    pub model_id: String,

    /// Revalidation compliance outcome.
    pub compliance: ComplianceOutcome,

    /// Effective risk values from the global assessment, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<EffectiveRisk>,

    /// Final residual risk ranking, when computable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<FinalRanking>,

    /// Approval status and completeness flags.
    pub approval: ApprovalEvaluation,
}

/// Runs the full derivation chain for one model.
#[must_use]
pub fn evaluate_model(
    snapshot: &ModelSnapshot,
    config: &GovernanceSnapshot,
    today: chrono::NaiveDate,
) -> ModelEvaluation {
    let compliance = compute_compliance(snapshot, &config.policies, today);
    let risk = snapshot.global_assessment().map(EffectiveRisk::derive);
    let ranking = compute_final_ranking(
        snapshot,
        &config.schedule,
        config.matrix.as_ref(),
        &compliance,
    );
    let approval = evaluate_approval(snapshot, &compliance);

    ModelEvaluation {
        model_id: snapshot.model.id.clone(),
        compliance,
        risk,
        ranking,
        approval,
    }
}

/// Evaluates a model and journals the approval status transition, if any.
///
/// The evaluation date is `now.date_naive()`, so the journal row timestamp
/// and the derivation agree on "today". Callers serialize this call per
/// model, one transaction per trigger.
pub fn evaluate_and_journal(
    snapshot: &ModelSnapshot,
    config: &GovernanceSnapshot,
    journal: &mut StatusJournal,
    trigger: RecomputeTrigger,
    now: DateTime<Utc>,
) -> (ModelEvaluation, Option<StatusHistoryRecord>) {
    let evaluation = evaluate_model(snapshot, config, now.date_naive());
    let transition = journal
        .record(&evaluation.model_id, evaluation.approval.status, trigger, now)
        .cloned();
    (evaluation, transition)
}
