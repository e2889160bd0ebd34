//! Sign-off records attached to validation requests.

use serde::{Deserialize, Serialize};

/// Role of the approver on a validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ApprovalRole {
    /// The validator who performed the work.
    Validator,
    /// The model's business owner.
    ModelOwner,
    /// Second-line risk officer.
    RiskOfficer,
    /// Approver attached to a conditional approval. Presence of this role
    /// additionally requires the model's use-approval date to be set before
    /// paperwork counts as complete.
    ConditionalApprover,
}

/// Decision state of one approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ApprovalDecision {
    /// Not yet decided.
    Pending,
    /// Signed off.
    Approved,
    /// Declined.
    Rejected,
}

/// One sign-off slot on a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    /// Who must sign.
    pub role: ApprovalRole,

    /// Whether this sign-off is required for completeness. Optional
    /// approvals are informational and never block.
    pub required: bool,

    /// Current decision.
    pub decision: ApprovalDecision,

    /// Voided approvals are ignored entirely (superseded slots, departed
    /// approvers).
    #[serde(default)]
    pub voided: bool,
}

impl ApprovalRecord {
    /// A required, pending approval for `role`.
    #[must_use]
    pub fn required_pending(role: ApprovalRole) -> Self {
        Self {
            role,
            required: true,
            decision: ApprovalDecision::Pending,
            voided: false,
        }
    }

    /// A required, approved approval for `role`.
    #[must_use]
    pub fn required_approved(role: ApprovalRole) -> Self {
        Self {
            role,
            required: true,
            decision: ApprovalDecision::Approved,
            voided: false,
        }
    }
}
