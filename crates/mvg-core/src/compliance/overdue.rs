// AGENT-AUTHORED
//! The overdue status calculator.
//!
//! Derives a model's [`ComplianceOutcome`] from its validation history, the
//! policy for its tier, and an evaluation date. The derivation walks a fixed
//! decision ladder; every rung returns, so each model lands in exactly one
//! state:
//!
//! 1. No tier label, or no policy for the tier -> `NO_POLICY_CONFIGURED`.
//! 2. The latest approved validation is an INTERIM: live ->
//!    `PENDING_FULL_VALIDATION`, unless its expiry is inside the submission
//!    lead-time window -> `SUBMISSION_OVERDUE`; expired -> `INTERIM_EXPIRED`.
//! 3. Otherwise anchor on the latest approved COMPREHENSIVE completion;
//!    none -> `NEVER_VALIDATED`.
//! 4. `next_submission_due = completion + frequency` (calendar months),
//!    `grace_end = next_submission_due + grace` (calendar months).
//! 5. Before the due date -> `UPCOMING`, or `VALIDATION_IN_PROGRESS` /
//!    `AWAITING_SUBMISSION` when an active revalidation request exists.
//! 6. On the due date through `grace_end` -> `IN_GRACE_PERIOD`. Not overdue.
//! 7. Past `grace_end`: a received submission is checked against
//!    `submission + lead_time` (`VALIDATION_OVERDUE` past it, otherwise
//!    `VALIDATION_IN_PROGRESS`); an active request with no submission is
//!    `SUBMISSION_OVERDUE`; no active request is
//!    `REVALIDATION_OVERDUE_NO_REQUEST`. Every rung of this step is overdue.
//!
//! # Boundary Semantics
//!
//! On the due date itself the model enters grace: a completion exactly one
//! frequency before "today" reads `IN_GRACE_PERIOD`, not `UPCOMING`. The
//! grace end is inclusive; overdue starts the day after.
//!
//! # Calendar Months
//!
//! Month arithmetic is calendar-aware (`Jan 31 + 1 month = Feb 28/29`),
//! saturating at the far end of the date range rather than panicking.

use chrono::{Months, NaiveDate};
use tracing::{debug, warn};

use super::{ComplianceOutcome, ComplianceStatus};
use crate::domain::{ModelSnapshot, ValidationRequest, ValidationType};
use crate::policy::{PolicySet, ValidationPolicy};

/// Adds calendar months, saturating instead of overflowing.
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Computes the compliance outcome for one model as of `today`.
#[must_use]
pub fn compute_compliance(
    snapshot: &ModelSnapshot,
    policies: &PolicySet,
    today: NaiveDate,
) -> ComplianceOutcome {
    let model = &snapshot.model;

    // Step 1: resolve the policy for the model's tier.
    let policy = model
        .tier_label
        .as_deref()
        .and_then(|label| policies.policy_for(label));
    let Some(policy) = policy else {
        warn!(
            model_id = %model.id,
            tier_label = model.tier_label.as_deref().unwrap_or("<none>"),
            "no validation policy configured; model excluded from compliance aggregates"
        );
        return ComplianceOutcome::bare(&model.id, ComplianceStatus::NoPolicyConfigured, false);
    };

    // Step 2: a live interim validation defers the comprehensive cycle.
    if let Some(interim) = snapshot
        .latest_approved_validation()
        .filter(|request| request.validation_type == ValidationType::Interim)
    {
        return interim_outcome(snapshot, interim, policy, today);
    }

    // Step 3: anchor on the latest approved comprehensive validation.
    let Some(anchor) = snapshot.latest_approved_comprehensive() else {
        return ComplianceOutcome::bare(&model.id, ComplianceStatus::NeverValidated, false);
    };
    let Some(completion) = anchor.completion_date else {
        // is_approved_validation() filters on completion_date; unreachable
        // for selected anchors, handled without panicking regardless.
        return ComplianceOutcome::bare(&model.id, ComplianceStatus::NeverValidated, false);
    };

    // Step 4: the submission window.
    let next_submission_due = add_months(completion, policy.frequency_months);
    let grace_end = add_months(next_submission_due, policy.grace_period_months);
    let days_overdue = (today - grace_end).num_days();
    let days_until_due = (next_submission_due - today).num_days();
    let active = snapshot.active_revalidation_request();

    let mut outcome = ComplianceOutcome {
        model_id: model.id.clone(),
        status: ComplianceStatus::Upcoming,
        is_overdue: false,
        days_overdue: Some(days_overdue),
        days_until_due: Some(days_until_due),
        next_submission_due: Some(next_submission_due),
        grace_end: Some(grace_end),
        validation_due: None,
        interim_expiration: None,
        latest_completion: Some(completion),
        active_request_id: active.map(|request| request.id.clone()),
    };

    if today < next_submission_due {
        // Step 5: inside the window.
        outcome.status = match active {
            Some(request) if request.submission_date.is_some() => {
                ComplianceStatus::ValidationInProgress
            }
            Some(_) => ComplianceStatus::AwaitingSubmission,
            None => ComplianceStatus::Upcoming,
        };
    } else if today <= grace_end {
        // Step 6: due but inside grace.
        outcome.status = ComplianceStatus::InGracePeriod;
    } else {
        // Step 7: past grace. Everything below is overdue.
        outcome.is_overdue = true;
        outcome.status = match active {
            Some(request) => match request.submission_date {
                Some(submission) => {
                    let validation_due = submission
                        .checked_add_days(chrono::Days::new(
                            policy.submission_lead_time_days.unsigned_abs(),
                        ))
                        .unwrap_or(NaiveDate::MAX);
                    outcome.validation_due = Some(validation_due);
                    if today > validation_due {
                        ComplianceStatus::ValidationOverdue
                    } else {
                        ComplianceStatus::ValidationInProgress
                    }
                }
                None => ComplianceStatus::SubmissionOverdue,
            },
            None => ComplianceStatus::RevalidationOverdueNoRequest,
        };
    }

    debug!(
        model_id = %model.id,
        status = %outcome.status,
        days_overdue,
        "compliance derived"
    );
    outcome
}

/// Step 2: outcomes while an interim validation governs the model.
fn interim_outcome(
    snapshot: &ModelSnapshot,
    interim: &ValidationRequest,
    policy: &ValidationPolicy,
    today: NaiveDate,
) -> ComplianceOutcome {
    let model = &snapshot.model;
    let completion = interim.completion_date;
    let expiration = interim.expiration_date.or_else(|| {
        completion.map(|date| add_months(date, policy.frequency_months))
    });
    let Some(expiration) = expiration else {
        // No completion and no explicit expiry: nothing to anchor a window
        // on. Treat the interim as expired paperwork.
        return ComplianceOutcome::bare(&model.id, ComplianceStatus::InterimExpired, true);
    };

    let mut outcome = ComplianceOutcome::bare(&model.id, ComplianceStatus::InterimExpired, true);
    outcome.interim_expiration = Some(expiration);
    outcome.latest_completion = completion;
    outcome.active_request_id = snapshot
        .active_revalidation_request()
        .map(|request| request.id.clone());

    if expiration > today {
        let days_left = (expiration - today).num_days();
        if days_left <= policy.submission_lead_time_days {
            // The full-validation submission window has already opened and
            // nothing has landed: overdue even though the interim is live.
            outcome.status = ComplianceStatus::SubmissionOverdue;
            outcome.is_overdue = true;
        } else {
            outcome.status = ComplianceStatus::PendingFullValidation;
            outcome.is_overdue = false;
        }
        outcome.days_until_due = Some(days_left);
    }

    outcome
}

// =============================================================================
// Tests
// =============================================================================
