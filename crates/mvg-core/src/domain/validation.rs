// AGENT-AUTHORED
//! Validation request history types.
//!
//! A [`ValidationRequest`] is one entry in a model's validation history: an
//! interim or comprehensive validation, its lifecycle status, and; once
//! completed; its completion date and scorecard outcome. The derivation
//! functions never look at a request in isolation; they select from the
//! history ("latest approved comprehensive", "active revalidation request")
//! via the helpers on [`ModelSnapshot`](crate::domain::ModelSnapshot).
//!
//! # Status Lifecycle
//!
//! ```text
//! INTAKE -> PLANNING -> ASSIGNED -> IN_PROGRESS -> REVIEW -> PENDING_APPROVAL
//!        -> APPROVED | REJECTED | CANCELLED   (terminal)
//! ```
//!
//! "Active" means non-terminal. "Substantive" is the subset of active
//! statuses past INTAKE; work that has actually started, which is what
//! keeps an overdue model in `VALIDATION_IN_PROGRESS` rather than `EXPIRED`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// ValidationType
// =============================================================================

/// The two validation flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ValidationType {
    /// A lighter, time-boxed validation that defers full revalidation.
    Interim,
    /// A full periodic revalidation.
    Comprehensive,
}

impl std::fmt::Display for ValidationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interim => write!(f, "INTERIM"),
            Self::Comprehensive => write!(f, "COMPREHENSIVE"),
        }
    }
}

// =============================================================================
// RequestStatus
// =============================================================================

/// Lifecycle status of a validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RequestStatus {
    /// Request created, no work assigned yet.
    Intake,
    /// Validation work is being planned.
    Planning,
    /// A validator has been assigned.
    Assigned,
    /// Validation work underway.
    InProgress,
    /// Validation output under review.
    Review,
    /// Review done, awaiting sign-offs.
    PendingApproval,
    /// Approved and effective. Terminal.
    Approved,
    /// Rejected. Terminal.
    Rejected,
    /// Cancelled before completion. Terminal.
    Cancelled,
}

impl RequestStatus {
    /// True for statuses that end a request's lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }

    /// True for any non-terminal status.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// True for active statuses where validation work has substantively
    /// started. INTAKE is excluded: a request that merely exists does not
    /// count as validation in progress.
    #[must_use]
    pub const fn is_substantive(self) -> bool {
        matches!(
            self,
            Self::Planning | Self::Assigned | Self::InProgress | Self::Review | Self::PendingApproval
        )
    }
}

// =============================================================================
// ScorecardOutcome
// =============================================================================

/// Ordered scorecard rating produced by a validation, best to worst.
///
/// The ordering index drives the overdue downgrade in the final ranking:
/// each downgrade notch moves one step toward `Red`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ScorecardOutcome {
    /// Best outcome.
    Green,
    /// Green with reservations.
    GreenMinus,
    /// Upper yellow band.
    YellowPlus,
    /// Middle yellow band.
    Yellow,
    /// Lower yellow band.
    YellowMinus,
    /// Worst outcome.
    Red,
}

impl ScorecardOutcome {
    /// All outcomes in order, best to worst.
    pub const ORDER: [Self; 6] = [
        Self::Green,
        Self::GreenMinus,
        Self::YellowPlus,
        Self::Yellow,
        Self::YellowMinus,
        Self::Red,
    ];

    /// Position in the best-to-worst order (`Green` -> 0, `Red` -> 5).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::GreenMinus => 1,
            Self::YellowPlus => 2,
            Self::Yellow => 3,
            Self::YellowMinus => 4,
            Self::Red => 5,
        }
    }

    /// Parses a rendered label ("Green-", "Yellow+") back to an outcome.
    ///
    /// Unrecognized labels return `None`; never guessed.
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Green" => Some(Self::Green),
            "Green-" => Some(Self::GreenMinus),
            "Yellow+" => Some(Self::YellowPlus),
            "Yellow" => Some(Self::Yellow),
            "Yellow-" => Some(Self::YellowMinus),
            "Red" => Some(Self::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScorecardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => write!(f, "Green"),
            Self::GreenMinus => write!(f, "Green-"),
            Self::YellowPlus => write!(f, "Yellow+"),
            Self::Yellow => write!(f, "Yellow"),
            Self::YellowMinus => write!(f, "Yellow-"),
            Self::Red => write!(f, "Red"),
        }
    }
}

impl PartialOrd for ScorecardOutcome {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScorecardOutcome {
    /// Orders best (`Green`) to worst (`Red`).
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

// =============================================================================
// ValidationRequest
// =============================================================================

/// One entry in a model's validation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// Stable request identifier.
    pub id: String,

    /// Interim or comprehensive.
    pub validation_type: ValidationType,

    /// Current lifecycle status.
    pub status: RequestStatus,

    /// Date the validation was completed. Set for approved validations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,

    /// Date the model owner's submission package was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<NaiveDate>,

    /// Explicit expiration for time-boxed (interim) validations. When
    /// absent, an interim expires one policy frequency after completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,

    /// Scorecard outcome recorded at completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorecard_outcome: Option<ScorecardOutcome>,

    /// Sign-offs attached to this request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approvals: Vec<crate::domain::ApprovalRecord>,
}

impl ValidationRequest {
    /// True when this request is an approved, completed validation.
    #[must_use]
    pub fn is_approved_validation(&self) -> bool {
        self.status == RequestStatus::Approved && self.completion_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_partitions() {
        for status in [
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(!status.is_active());
            assert!(!status.is_substantive());
        }
        assert!(RequestStatus::Intake.is_active());
        assert!(!RequestStatus::Intake.is_substantive());
        for status in [
            RequestStatus::Planning,
            RequestStatus::Assigned,
            RequestStatus::InProgress,
            RequestStatus::Review,
            RequestStatus::PendingApproval,
        ] {
            assert!(status.is_active());
            assert!(status.is_substantive());
        }
    }

    #[test]
    fn test_scorecard_order_matches_index() {
        for (position, outcome) in ScorecardOutcome::ORDER.iter().enumerate() {
            assert_eq!(outcome.index(), position);
        }
        assert!(ScorecardOutcome::Green < ScorecardOutcome::Red);
    }

    #[test]
    fn test_scorecard_label_roundtrip() {
        for outcome in ScorecardOutcome::ORDER {
            assert_eq!(
                ScorecardOutcome::parse_label(&outcome.to_string()),
                Some(outcome)
            );
        }
        assert_eq!(ScorecardOutcome::parse_label("Chartreuse"), None);
    }

    #[test]
    fn test_scorecard_serde_names() {
        assert_eq!(
            serde_json::to_string(&ScorecardOutcome::YellowPlus).unwrap(),
            "\"YELLOW_PLUS\""
        );
    }
}
