//! Revalidation policy configuration.
//!
//! One [`ValidationPolicy`] per risk tier sets the revalidation cadence:
//! how often a comprehensive validation is due (months), how long the grace
//! period runs after the due date (months), and how many days before a
//! deadline the owner's submission package must arrive. A model whose tier
//! has no policy is `NO_POLICY_CONFIGURED` and excluded from all aggregates;
//! a misconfigured tier must never abort a batch of thousands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Revalidation cadence for one risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Tier label this policy applies to. Matched case-insensitively.
    pub tier_label: String,

    /// Months between comprehensive validations.
    pub frequency_months: u32,

    /// Months after the due date before the model counts overdue.
    pub grace_period_months: u32,

    /// Days of lead time the validation team needs after receiving the
    /// owner's submission package.
    pub submission_lead_time_days: i64,
}

/// Errors raised when assembling a policy set from admin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PolicyConfigError {
    /// Two policies claim the same tier.
    #[error("duplicate validation policy for tier '{tier_label}'")]
    DuplicateTier {
        /// The tier label configured twice (normalized form).
        tier_label: String,
    },
}

/// Immutable policy lookup keyed by normalized tier label.
///
/// Built once per request or batch run and passed by reference into every
/// per-model call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySet {
    by_tier: BTreeMap<String, ValidationPolicy>,
}

impl PolicySet {
    /// Builds a policy set, rejecting duplicate tiers.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError::DuplicateTier`] when two policies
    /// normalize to the same tier label.
    pub fn new(policies: Vec<ValidationPolicy>) -> Result<Self, PolicyConfigError> {
        let mut by_tier = BTreeMap::new();
        for policy in policies {
            let key = normalize_tier_key(&policy.tier_label);
            if by_tier.insert(key.clone(), policy).is_some() {
                return Err(PolicyConfigError::DuplicateTier { tier_label: key });
            }
        }
        Ok(Self { by_tier })
    }

    /// Looks up the policy for a tier label, case-insensitively.
    #[must_use]
    pub fn policy_for(&self, tier_label: &str) -> Option<&ValidationPolicy> {
        self.by_tier.get(&normalize_tier_key(tier_label))
    }

    /// Number of configured policies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_tier.len()
    }

    /// True when no policies are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_tier.is_empty()
    }
}

fn normalize_tier_key(label: &str) -> String {
    label.trim().to_ascii_uppercase().replace('_', " ")
}
