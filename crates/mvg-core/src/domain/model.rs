// AGENT-AUTHORED
//! Model and per-model input snapshot.
//!
//! [`ModelSnapshot`] bundles everything the derivation functions need for
//! one model: the model row, its full validation history, and its current
//! risk assessments. Callers load it once (e.g., inside a request handler or
//! a batch loop) and pass it by reference into every calculator; the engine
//! never re-fetches.
//!
//! # History Ordering
//!
//! `requests` is expected in creation order. Selection helpers that break
//! ties ("the active revalidation request") take the latest matching entry;
//! helpers keyed on completion date sort explicitly and do not depend on
//! list order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{RiskAssessment, ValidationRequest, ValidationType};

/// A governed model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Stable model identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form risk tier label as stored ("High", "VERY_LOW", ...).
    /// Normalized on use; an unrecognized label means tier-dependent
    /// derivations return nothing rather than guessing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_label: Option<String>,

    /// Inactive models are still computable; callers filter.
    pub active: bool,

    /// Date conditional use approval was granted, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_approval_date: Option<NaiveDate>,
}

/// Everything the engine needs to evaluate one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    /// The model row.
    pub model: Model,

    /// Full validation history, in creation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<ValidationRequest>,

    /// Current risk assessments, one per region (`None` = global).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessments: Vec<RiskAssessment>,
}

impl ModelSnapshot {
    /// The most recently completed approved validation of either type.
    ///
    /// "Most recent" is by completion date; ties fall to the later history
    /// entry.
    #[must_use]
    pub fn latest_approved_validation(&self) -> Option<&ValidationRequest> {
        self.requests
            .iter()
            .filter(|request| request.is_approved_validation())
            .max_by_key(|request| request.completion_date)
    }

    /// The most recently completed approved COMPREHENSIVE validation.
    #[must_use]
    pub fn latest_approved_comprehensive(&self) -> Option<&ValidationRequest> {
        self.requests
            .iter()
            .filter(|request| {
                request.is_approved_validation()
                    && request.validation_type == ValidationType::Comprehensive
            })
            .max_by_key(|request| request.completion_date)
    }

    /// The active (non-terminal) COMPREHENSIVE revalidation request, if any.
    ///
    /// In-flight interim requests do not track comprehensive revalidation.
    #[must_use]
    pub fn active_revalidation_request(&self) -> Option<&ValidationRequest> {
        self.requests
            .iter()
            .filter(|request| {
                request.status.is_active()
                    && request.validation_type == ValidationType::Comprehensive
            })
            .next_back()
    }

    /// Any active request in a substantive status, of either type.
    #[must_use]
    pub fn active_substantive_request(&self) -> Option<&ValidationRequest> {
        self.requests
            .iter()
            .filter(|request| request.status.is_substantive())
            .next_back()
    }

    /// The global risk assessment (`region: None`), if present.
    #[must_use]
    pub fn global_assessment(&self) -> Option<&RiskAssessment> {
        self.assessments
            .iter()
            .find(|assessment| assessment.region.is_none())
    }

    /// The assessment for a specific region, falling back to global.
    #[must_use]
    pub fn assessment_for_region(&self, region: Option<&str>) -> Option<&RiskAssessment> {
        match region {
            Some(name) => self
                .assessments
                .iter()
                .find(|assessment| assessment.region.as_deref() == Some(name))
                .or_else(|| self.global_assessment()),
            None => self.global_assessment(),
        }
    }
}
