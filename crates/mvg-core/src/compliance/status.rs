// AGENT-AUTHORED
//! Compliance status vocabulary and outcome context.
//!
//! The status enum is exhaustively matched everywhere it is consumed; adding
//! a variant is a compile error at every consumer, which is the point. The
//! overdue flag is NOT derivable from the status alone:
//! `VALIDATION_IN_PROGRESS` is reached both before the due date (not
//! overdue) and after the grace period with a timely submission (overdue),
//! so consumers must read [`ComplianceOutcome::is_overdue`], never infer it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// ComplianceStatus Enum
// =============================================================================

/// Revalidation compliance status of one model as of the evaluation date.
///
/// # Ordering
///
/// Statuses order by lifecycle severity (healthy states first, overdue
/// states last) via explicit rank mapping, so report maps iterate in a
/// stable, meaningful order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ComplianceStatus {
    /// The model's tier has no validation policy. Excluded from all
    /// aggregates; a misconfigured tier never aborts a batch.
    NoPolicyConfigured,

    /// No approved validation exists yet. Not counted overdue.
    NeverValidated,

    /// A live interim validation defers full revalidation.
    PendingFullValidation,

    /// The interim validation expired without a comprehensive replacement.
    InterimExpired,

    /// Inside the current validation window, nothing due yet.
    Upcoming,

    /// An active revalidation request has a received submission and work is
    /// underway. Reached both before the due date and past grace; check
    /// [`ComplianceOutcome::is_overdue`].
    ValidationInProgress,

    /// An active revalidation request exists but the owner's submission
    /// package has not arrived. Not yet due.
    AwaitingSubmission,

    /// Past the submission due date but inside the grace period. Not
    /// overdue.
    InGracePeriod,

    /// The owner's submission is overdue: either the interim expiry is
    /// within the lead-time window, or the grace period lapsed with no
    /// submission received.
    SubmissionOverdue,

    /// A submission arrived but validation blew through its lead time.
    ValidationOverdue,

    /// Past the grace period with no active revalidation request at all.
    RevalidationOverdueNoRequest,
}

impl ComplianceStatus {
    /// Lifecycle rank for stable report ordering (healthy -> overdue).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Upcoming => 0,
            Self::AwaitingSubmission => 1,
            Self::ValidationInProgress => 2,
            Self::PendingFullValidation => 3,
            Self::InGracePeriod => 4,
            Self::SubmissionOverdue => 5,
            Self::ValidationOverdue => 6,
            Self::RevalidationOverdueNoRequest => 7,
            Self::InterimExpired => 8,
            Self::NeverValidated => 9,
            Self::NoPolicyConfigured => 10,
        }
    }

    /// Returns an iterator over all statuses in rank order.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::Upcoming,
            Self::AwaitingSubmission,
            Self::ValidationInProgress,
            Self::PendingFullValidation,
            Self::InGracePeriod,
            Self::SubmissionOverdue,
            Self::ValidationOverdue,
            Self::RevalidationOverdueNoRequest,
            Self::InterimExpired,
            Self::NeverValidated,
            Self::NoPolicyConfigured,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NoPolicyConfigured => "No Policy Configured",
            Self::NeverValidated => "Never Validated",
            Self::PendingFullValidation => "Pending Full Validation",
            Self::InterimExpired => "INTERIM Expired",
            Self::Upcoming => "Upcoming",
            Self::ValidationInProgress => "Validation In Progress",
            Self::AwaitingSubmission => "Awaiting Submission",
            Self::InGracePeriod => "In Grace Period",
            Self::SubmissionOverdue => "Submission Overdue",
            Self::ValidationOverdue => "Validation Overdue",
            Self::RevalidationOverdueNoRequest => "Revalidation Overdue (No Request)",
        };
        f.write_str(label)
    }
}

impl PartialOrd for ComplianceStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplianceStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

// =============================================================================
// ComplianceOutcome
// =============================================================================

/// Full result of one compliance derivation: the status plus the
/// explanatory context API responses and report renderers surface.
///
/// Date fields are present only when the corresponding window exists; a
/// never-validated model has no due date and the engine does not invent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceOutcome {
    /// Model this outcome describes.
    pub model_id: String,

    /// The derived status.
    pub status: ComplianceStatus,

    /// True for every past-grace outcome and both interim-overdue cases.
    /// False otherwise, including `NEVER_VALIDATED` and
    /// `NO_POLICY_CONFIGURED`.
    pub is_overdue: bool,

    /// `(today - grace_end)` in days; negative inside the window. `None`
    /// when no grace end exists (no policy, never validated, interim
    /// states).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<i64>,

    /// `(next_submission_due - today)` in days; negative once past due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<i64>,

    /// When the next comprehensive submission falls due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_submission_due: Option<NaiveDate>,

    /// End of the grace period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_end: Option<NaiveDate>,

    /// Submission date + lead time, when an active request has a received
    /// submission past grace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_due: Option<NaiveDate>,

    /// Expiry of the live interim validation, when one governs the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interim_expiration: Option<NaiveDate>,

    /// Completion date of the anchoring approved validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_completion: Option<NaiveDate>,

    /// The active revalidation request considered, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_request_id: Option<String>,
}

impl ComplianceOutcome {
    /// An outcome with only a status and no window context, for the
    /// early-exit states.
    #[must_use]
    pub(crate) fn bare(model_id: &str, status: ComplianceStatus, is_overdue: bool) -> Self {
        Self {
            model_id: model_id.to_string(),
            status,
            is_overdue,
            days_overdue: None,
            days_until_due: None,
            next_submission_due: None,
            grace_end: None,
            validation_due: None,
            interim_expiration: None,
            latest_completion: None,
            active_request_id: None,
        }
    }
}
