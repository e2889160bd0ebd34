//! Governance configuration parsing and validation.
//!
//! This module handles parsing of the admin-configured governance tables
//! (validation policies, past-due buckets, residual risk matrices) from a
//! YAML or JSON document into a pre-validated [`GovernanceSnapshot`].
//! Validation happens once, at load or admin-edit time; every violation
//! blocks the save with an error naming the offender. The engine itself
//! only ever sees a snapshot that passed.
//!
//! # Schema Overview
//!
//! ```yaml
//! policies:
//!   - tier_label: "High"
//!     frequency_months: 12
//!     grace_period_months: 3
//!     submission_lead_time_days: 90
//! past_due_buckets:
//!   - label: "current"
//!     max_days: 0
//!     downgrade_notches: 0
//!   - label: "late"
//!     min_days: 1
//!     downgrade_notches: 1
//! residual_matrices:
//!   - name: "default"
//!     active: true
//!     table:
//!       HIGH: { GREEN: HIGH, RED: HIGH }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::GovernanceSnapshot;
use crate::policy::{PolicyConfigError, PolicySet, ValidationPolicy};
use crate::ranking::{BucketConfigError, PastDueBucket, PastDueSchedule, ResidualRiskMatrix};

/// The raw, unvalidated governance configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceConfigDocument {
    /// Validation policies, one per tier.
    #[serde(default)]
    pub policies: Vec<ValidationPolicy>,

    /// Past-due bucket set.
    #[serde(default)]
    pub past_due_buckets: Vec<PastDueBucket>,

    /// Residual risk matrix configurations; at most one may be active.
    #[serde(default)]
    pub residual_matrices: Vec<ResidualRiskMatrix>,
}

/// Errors raised while loading or validating governance configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GovernanceConfigError {
    /// The YAML document failed to parse.
    #[error("invalid governance config YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    /// The JSON document failed to parse.
    #[error("invalid governance config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// A policy violated the per-tier uniqueness rule.
    #[error(transparent)]
    Policy(#[from] PolicyConfigError),

    /// The bucket set violated the contiguity invariants.
    #[error(transparent)]
    Buckets(#[from] BucketConfigError),

    /// More than one residual matrix is marked active.
    #[error("{count} residual matrices are active ({names:?}); at most one may be")]
    MultipleActiveMatrices {
        /// How many were active.
        count: usize,
        /// Their configured names.
        names: Vec<String>,
    },
}

impl GovernanceConfigDocument {
    /// Parses a YAML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceConfigError::ParseYaml`] on malformed input.
    pub fn from_yaml(content: &str) -> Result<Self, GovernanceConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceConfigError::ParseJson`] on malformed input.
    pub fn from_json(content: &str) -> Result<Self, GovernanceConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validates the document into an immutable snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: duplicate policy tiers, bucket
    /// contiguity errors, or multiple active matrices. Note that an absent
    /// or inactive matrix is NOT an error here; final rankings degrade to
    /// `None` at derivation time instead.
    pub fn into_snapshot(self) -> Result<GovernanceSnapshot, GovernanceConfigError> {
        let policies = PolicySet::new(self.policies)?;
        let schedule = PastDueSchedule::validate(self.past_due_buckets)?;

        let active: Vec<&ResidualRiskMatrix> = self
            .residual_matrices
            .iter()
            .filter(|matrix| matrix.active)
            .collect();
        if active.len() > 1 {
            return Err(GovernanceConfigError::MultipleActiveMatrices {
                count: active.len(),
                names: active.iter().map(|matrix| matrix.name.clone()).collect(),
            });
        }
        let matrix = self.residual_matrices.into_iter().find(|matrix| matrix.active);

        Ok(GovernanceSnapshot {
            policies,
            schedule,
            matrix,
        })
    }
}
