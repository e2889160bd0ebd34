// AGENT-AUTHORED
//! Approval status state machine.
//!
//! Combines the compliance outcome with approval-completeness checks into a
//! five-state approval status. The status is recomputed from scratch on
//! every trigger; there is no incremental update path, so a recompute can
//! never drift from the inputs.
//!
//! # Decision Ladder
//!
//! 1. No approved validation -> `NEVER_VALIDATED`.
//! 2. Approval completeness is evaluated (all required, non-voided
//!    approvals `APPROVED`; any conditional-approver approval additionally
//!    requires the model's use-approval date). Informational only: it is
//!    reported but never gates the status.
//! 3. Overdue is read from the compliance outcome's boolean.
//! 4. Not overdue -> `INTERIM_APPROVED` when the governing validation is an
//!    INTERIM, else `APPROVED`. A model stays approved through its
//!    compliance window even while paperwork is finishing.
//! 5. Overdue -> `VALIDATION_IN_PROGRESS` when any active request is in a
//!    substantive status (INTAKE excluded), else `EXPIRED`.
//!
//! Status transitions are journaled by [`StatusJournal`]; callers must
//! serialize the recompute-and-append sequence per model (a transaction in
//! practice) so concurrent triggers cannot duplicate or drop a history row.

mod history;

use serde::{Deserialize, Serialize};

pub use history::{RecomputeTrigger, StatusHistoryRecord, StatusJournal};

use crate::compliance::ComplianceOutcome;
use crate::domain::{ApprovalDecision, ApprovalRole, ModelSnapshot, ValidationType};

// =============================================================================
// ApprovalStatus Enum
// =============================================================================

/// Current approval standing of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ApprovalStatus {
    /// No approved validation exists.
    NeverValidated,
    /// Approved on the strength of a comprehensive validation.
    Approved,
    /// Approved on the strength of an interim validation.
    InterimApproved,
    /// Overdue, but substantive revalidation work is underway.
    ValidationInProgress,
    /// Overdue with no substantive work in flight.
    Expired,
}

impl ApprovalStatus {
    /// Lifecycle rank for stable report ordering.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Approved => 0,
            Self::InterimApproved => 1,
            Self::ValidationInProgress => 2,
            Self::Expired => 3,
            Self::NeverValidated => 4,
        }
    }

    /// Returns an iterator over all statuses in rank order.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Approved,
            Self::InterimApproved,
            Self::ValidationInProgress,
            Self::Expired,
            Self::NeverValidated,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NeverValidated => "Never Validated",
            Self::Approved => "Approved",
            Self::InterimApproved => "Interim Approved",
            Self::ValidationInProgress => "Validation In Progress",
            Self::Expired => "Expired",
        };
        f.write_str(label)
    }
}

impl PartialOrd for ApprovalStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApprovalStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

// =============================================================================
// ApprovalEvaluation
// =============================================================================

/// The derived approval status plus the completeness flags UI banners show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEvaluation {
    /// The derived status.
    pub status: ApprovalStatus,

    /// All required, non-voided approvals signed off (and the use-approval
    /// date present when a conditional approver is attached). Informational;
    /// never gates the status.
    pub approvals_complete: bool,

    /// A conditional-approver approval exists on the governing validation.
    pub has_conditional_approver: bool,
}

/// Recomputes the approval status for one model from scratch.
///
/// `compliance` must come from the same snapshot and evaluation date.
#[must_use]
pub fn evaluate_approval(
    snapshot: &ModelSnapshot,
    compliance: &ComplianceOutcome,
) -> ApprovalEvaluation {
    // Step 1: nothing approved, nothing to stand on.
    let Some(governing) = snapshot.latest_approved_validation() else {
        return ApprovalEvaluation {
            status: ApprovalStatus::NeverValidated,
            approvals_complete: false,
            has_conditional_approver: false,
        };
    };

    // Step 2: completeness over the governing validation's paperwork.
    let live_approvals: Vec<_> = governing
        .approvals
        .iter()
        .filter(|record| !record.voided)
        .collect();
    let has_conditional_approver = live_approvals
        .iter()
        .any(|record| record.role == ApprovalRole::ConditionalApprover);
    let required_signed = live_approvals
        .iter()
        .filter(|record| record.required)
        .all(|record| record.decision == ApprovalDecision::Approved);
    let approvals_complete = required_signed
        && (!has_conditional_approver || snapshot.model.use_approval_date.is_some());

    // Steps 3-5.
    let status = if compliance.is_overdue {
        match snapshot.active_substantive_request() {
            Some(_) => ApprovalStatus::ValidationInProgress,
            None => ApprovalStatus::Expired,
        }
    } else if governing.validation_type == ValidationType::Interim {
        ApprovalStatus::InterimApproved
    } else {
        ApprovalStatus::Approved
    };

    ApprovalEvaluation {
        status,
        approvals_complete,
        has_conditional_approver,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::compliance::compute_compliance;
    use crate::domain::{
        ApprovalRecord, Model, RequestStatus, ScorecardOutcome, ValidationRequest,
    };
    use crate::policy::{PolicySet, ValidationPolicy};

    fn date(text: &str) -> NaiveDate {
        text.parse().unwrap()
    }

    fn policies() -> PolicySet {
        PolicySet::new(vec![ValidationPolicy {
            tier_label: "High".to_string(),
            frequency_months: 12,
            grace_period_months: 3,
            submission_lead_time_days: 90,
        }])
        .unwrap()
    }

    fn approved(
        validation_type: ValidationType,
        completed: &str,
        approvals: Vec<ApprovalRecord>,
    ) -> ValidationRequest {
        ValidationRequest {
            id: "V-1".to_string(),
            validation_type,
            status: RequestStatus::Approved,
            completion_date: Some(date(completed)),
            submission_date: None,
            expiration_date: None,
            scorecard_outcome: Some(ScorecardOutcome::Green),
            approvals,
        }
    }

    fn snapshot(requests: Vec<ValidationRequest>) -> ModelSnapshot {
        ModelSnapshot {
            model: Model {
                id: "M-001".to_string(),
                name: "PD model".to_string(),
                tier_label: Some("High".to_string()),
                active: true,
                use_approval_date: None,
            },
            requests,
            assessments: Vec::new(),
        }
    }

    fn evaluate(snap: &ModelSnapshot, today: &str) -> ApprovalEvaluation {
        let compliance = compute_compliance(snap, &policies(), date(today));
        evaluate_approval(snap, &compliance)
    }

    // =========================================================================
    // Ladder
    // =========================================================================

    #[test]
    fn test_no_approved_validation_is_never_validated() {
        let evaluation = evaluate(&snapshot(Vec::new()), "2025-01-01");
        assert_eq!(evaluation.status, ApprovalStatus::NeverValidated);
        assert!(!evaluation.approvals_complete);
    }

    #[test]
    fn test_current_comprehensive_is_approved() {
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            Vec::new(),
        )]);
        assert_eq!(evaluate(&snap, "2025-01-01").status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_live_interim_is_interim_approved() {
        let mut request = approved(ValidationType::Interim, "2024-10-01", Vec::new());
        request.expiration_date = Some(date("2025-10-01"));
        let snap = snapshot(vec![request]);
        assert_eq!(
            evaluate(&snap, "2025-01-01").status,
            ApprovalStatus::InterimApproved
        );
    }

    #[test]
    fn test_model_stays_approved_through_grace() {
        // Due 2025-06-01, grace to 2025-09-01: still approved mid-grace.
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            Vec::new(),
        )]);
        let evaluation = evaluate(&snap, "2025-07-15");
        assert_eq!(evaluation.status, ApprovalStatus::Approved);
    }

    #[test]
    fn test_overdue_with_substantive_request_is_in_progress() {
        let mut requests = vec![approved(
            ValidationType::Comprehensive,
            "2024-01-12",
            Vec::new(),
        )];
        requests.push(ValidationRequest {
            id: "V-2".to_string(),
            validation_type: ValidationType::Comprehensive,
            status: RequestStatus::Planning,
            completion_date: None,
            submission_date: None,
            expiration_date: None,
            scorecard_outcome: None,
            approvals: Vec::new(),
        });
        let evaluation = evaluate(&snapshot(requests), "2025-07-12");
        assert_eq!(evaluation.status, ApprovalStatus::ValidationInProgress);
    }

    #[test]
    fn test_overdue_with_only_intake_request_is_expired() {
        let mut requests = vec![approved(
            ValidationType::Comprehensive,
            "2024-01-12",
            Vec::new(),
        )];
        requests.push(ValidationRequest {
            id: "V-2".to_string(),
            validation_type: ValidationType::Comprehensive,
            status: RequestStatus::Intake,
            completion_date: None,
            submission_date: None,
            expiration_date: None,
            scorecard_outcome: None,
            approvals: Vec::new(),
        });
        let evaluation = evaluate(&snapshot(requests), "2025-07-12");
        assert_eq!(evaluation.status, ApprovalStatus::Expired);
    }

    #[test]
    fn test_overdue_with_no_request_is_expired() {
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-01-12",
            Vec::new(),
        )]);
        assert_eq!(evaluate(&snap, "2025-07-12").status, ApprovalStatus::Expired);
    }

    // =========================================================================
    // Completeness
    // =========================================================================

    #[test]
    fn test_incomplete_paperwork_does_not_gate_status() {
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            vec![ApprovalRecord::required_pending(ApprovalRole::Validator)],
        )]);
        let evaluation = evaluate(&snap, "2025-01-01");
        assert_eq!(evaluation.status, ApprovalStatus::Approved);
        assert!(!evaluation.approvals_complete);
    }

    #[test]
    fn test_voided_approvals_are_ignored() {
        let mut voided = ApprovalRecord::required_pending(ApprovalRole::Validator);
        voided.voided = true;
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            vec![
                voided,
                ApprovalRecord::required_approved(ApprovalRole::ModelOwner),
            ],
        )]);
        assert!(evaluate(&snap, "2025-01-01").approvals_complete);
    }

    #[test]
    fn test_optional_approvals_never_block() {
        let optional = ApprovalRecord {
            role: ApprovalRole::RiskOfficer,
            required: false,
            decision: ApprovalDecision::Pending,
            voided: false,
        };
        let snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            vec![
                optional,
                ApprovalRecord::required_approved(ApprovalRole::Validator),
            ],
        )]);
        assert!(evaluate(&snap, "2025-01-01").approvals_complete);
    }

    #[test]
    fn test_conditional_approver_requires_use_approval_date() {
        let mut snap = snapshot(vec![approved(
            ValidationType::Comprehensive,
            "2024-06-01",
            vec![ApprovalRecord::required_approved(
                ApprovalRole::ConditionalApprover,
            )],
        )]);
        let evaluation = evaluate(&snap, "2025-01-01");
        assert!(evaluation.has_conditional_approver);
        assert!(!evaluation.approvals_complete);

        snap.model.use_approval_date = Some(date("2024-07-01"));
        assert!(evaluate(&snap, "2025-01-01").approvals_complete);
    }

    // =========================================================================
    // Overdue/Status Invariant
    // =========================================================================

    #[test]
    fn test_overdue_flag_partitions_statuses() {
        let fixtures: Vec<(ModelSnapshot, &str)> = vec![
            (snapshot(Vec::new()), "2025-01-01"),
            (
                snapshot(vec![approved(ValidationType::Comprehensive, "2024-06-01", Vec::new())]),
                "2025-01-01",
            ),
            (
                snapshot(vec![approved(ValidationType::Comprehensive, "2024-01-12", Vec::new())]),
                "2025-07-12",
            ),
            (
                snapshot(vec![approved(ValidationType::Interim, "2024-01-01", Vec::new())]),
                "2025-07-12",
            ),
        ];
        for (snap, today) in fixtures {
            let compliance = compute_compliance(&snap, &policies(), date(today));
            let evaluation = evaluate_approval(&snap, &compliance);
            if compliance.is_overdue {
                assert!(matches!(
                    evaluation.status,
                    ApprovalStatus::ValidationInProgress
                        | ApprovalStatus::Expired
                        | ApprovalStatus::NeverValidated
                ));
            } else {
                assert!(matches!(
                    evaluation.status,
                    ApprovalStatus::Approved
                        | ApprovalStatus::InterimApproved
                        | ApprovalStatus::NeverValidated
                ));
            }
        }
    }
}
