// AGENT-AUTHORED
//! Inherent risk tier derivation.
//!
//! This module defines the closed rating vocabularies ([`RiskLevel`],
//! [`RiskTier`], [`TierCode`]) and the derivation chain that turns a model's
//! quantitative and qualitative inputs into an effective risk tier:
//!
//! 1. [`qualitative::qualitative_score`] folds weighted factor assessments
//!    into a score and a [`RiskLevel`].
//! 2. [`inherent_risk`] combines the quantitative and qualitative levels
//!    through a fixed 3×3 matrix into a [`RiskTier`].
//! 3. [`EffectiveRisk::derive`] applies the three independent override slots
//!    (quantitative, qualitative, final tier) and maps the result to a
//!    [`TierCode`].
//!
//! # Inherent Risk Matrix
//!
//! | quant \ qual | HIGH   | MEDIUM | LOW      |
//! |--------------|--------|--------|----------|
//! | **HIGH**     | HIGH   | MEDIUM | LOW      |
//! | **MEDIUM**   | MEDIUM | MEDIUM | LOW      |
//! | **LOW**      | LOW    | LOW    | VERY_LOW |
//!
//! The matrix is total over its 3×3 domain. Inputs outside the domain cannot
//! be represented (the vocabularies are closed enums); a missing input
//! propagates as `None` without substitution.
//!
//! # Override Independence
//!
//! Each override slot is independent: setting only the final-tier override
//! changes the effective tier and tier code while leaving the effective
//! quantitative, effective qualitative, and derived tier untouched. A missing
//! upstream value legitimately propagates to `None`; the derivation never
//! guesses.
//!
//! # Example
//!
//! ```rust
//! use mvg_core::tier::{RiskLevel, RiskTier, TierCode, inherent_risk, tier_code};
//!
//! let tier = inherent_risk(Some(RiskLevel::High), Some(RiskLevel::Medium));
//! assert_eq!(tier, Some(RiskTier::Medium));
//! assert_eq!(tier.map(tier_code), Some(TierCode::Tier2));
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::RiskAssessment;

pub mod qualitative;

pub use qualitative::{QualitativeScore, qualitative_score};

// =============================================================================
// RiskLevel Enum
// =============================================================================

/// Three-point rating scale for quantitative and qualitative inputs.
///
/// # Ordering
///
/// Levels are ordered by severity: `High > Medium > Low`. The `Ord`
/// implementation uses explicit rank mapping, not enum ordinal, to ensure
/// correctness if variants are reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RiskLevel {
    /// Highest input rating.
    High,
    /// Middle input rating.
    Medium,
    /// Lowest input rating.
    Low,
}

impl RiskLevel {
    /// Returns the numeric rank of this level (`High` -> 2, `Low` -> 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 2,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    /// Returns the factor-scoring points for this level.
    ///
    /// Used by the qualitative score: HIGH = 3, MEDIUM = 2, LOW = 1.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Returns an iterator over all levels in descending severity.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::High, Self::Medium, Self::Low].into_iter()
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

impl PartialOrd for RiskLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

// =============================================================================
// RiskTier Enum
// =============================================================================

/// Canonical four-level risk tier.
///
/// Produced by the inherent-risk matrix and consumed by the residual risk
/// matrix lookup. Also the normalization target for free-form tier labels
/// carried on models (see [`RiskTier::normalize_label`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RiskTier {
    /// Highest inherent or residual risk.
    High,
    /// Elevated risk.
    Medium,
    /// Standard risk.
    Low,
    /// Minimal risk. Only reachable as LOW/LOW on the inherent matrix.
    VeryLow,
}

impl RiskTier {
    /// Returns the numeric rank of this tier (`High` -> 3, `VeryLow` -> 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::VeryLow => 0,
        }
    }

    /// Returns an iterator over all tiers in descending severity.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::High, Self::Medium, Self::Low, Self::VeryLow].into_iter()
    }

    /// Normalizes a free-form tier label to a canonical tier.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace
    /// and the underscore/space spelling of "very low". Unrecognized labels
    /// return `None`; the caller decides whether that is an exclusion or a
    /// reportable failure; this function never guesses.
    #[must_use]
    pub fn normalize_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_uppercase().replace('_', " ");
        match normalized.as_str() {
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            "VERY LOW" => Some(Self::VeryLow),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::VeryLow => write!(f, "Very Low"),
        }
    }
}

impl PartialOrd for RiskTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RiskTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

// =============================================================================
// TierCode Enum
// =============================================================================

/// Reporting code for a canonical tier: TIER_1 (highest) through TIER_4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TierCode {
    /// HIGH inherent risk.
    Tier1,
    /// MEDIUM inherent risk.
    Tier2,
    /// LOW inherent risk.
    Tier3,
    /// VERY_LOW inherent risk.
    Tier4,
}

impl std::fmt::Display for TierCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier1 => write!(f, "TIER_1"),
            Self::Tier2 => write!(f, "TIER_2"),
            Self::Tier3 => write!(f, "TIER_3"),
            Self::Tier4 => write!(f, "TIER_4"),
        }
    }
}

// =============================================================================
// Derivation Functions
// =============================================================================

/// Combines quantitative and qualitative levels into an inherent risk tier.
///
/// Implements the fixed 3×3 matrix documented at module level. The matrix is
/// total over present inputs; a missing input propagates as `None` without
/// substitution.
#[must_use]
pub const fn inherent_risk(
    quantitative: Option<RiskLevel>,
    qualitative: Option<RiskLevel>,
) -> Option<RiskTier> {
    use RiskLevel::{High, Low, Medium};

    let (quant, qual) = match (quantitative, qualitative) {
        (Some(quant), Some(qual)) => (quant, qual),
        _ => return None,
    };

    Some(match (quant, qual) {
        (High, High) => RiskTier::High,
        (High, Medium) | (Medium, High) | (Medium, Medium) => RiskTier::Medium,
        (High, Low) | (Medium, Low) | (Low, High) | (Low, Medium) => RiskTier::Low,
        (Low, Low) => RiskTier::VeryLow,
    })
}

/// Maps a canonical tier to its reporting code.
#[must_use]
pub const fn tier_code(tier: RiskTier) -> TierCode {
    match tier {
        RiskTier::High => TierCode::Tier1,
        RiskTier::Medium => TierCode::Tier2,
        RiskTier::Low => TierCode::Tier3,
        RiskTier::VeryLow => TierCode::Tier4,
    }
}

// =============================================================================
// EffectiveRisk
// =============================================================================

/// Fully resolved risk values for one assessment, after overrides.
///
/// Every field is independently derived; consumers get both the measured
/// chain (`derived_tier`) and the override-resolved chain (`effective_tier`,
/// `tier_code`) so reports can show what an override changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveRisk {
    /// Quantitative level after the quantitative override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_quantitative: Option<RiskLevel>,

    /// Qualitative level after the qualitative override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_qualitative: Option<RiskLevel>,

    /// Weighted qualitative score over rated factors, rounded to 2 decimals.
    /// `None` when no factor has been rated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualitative_score: Option<f64>,

    /// Matrix result over the effective levels, before the final override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_tier: Option<RiskTier>,

    /// Tier after the final override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_tier: Option<RiskTier>,

    /// Reporting code for the effective tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_code: Option<TierCode>,
}

impl EffectiveRisk {
    /// Resolves the effective risk values for an assessment.
    ///
    /// The qualitative level is recomputed from the factor weight snapshots
    /// (immutable after assessment creation), not from the factors' current
    /// weights. Each override slot applies independently:
    ///
    /// - `effective_quantitative = quantitative_override ?? quantitative_rating`
    /// - `effective_qualitative = qualitative_override ?? computed level`
    /// - `effective_tier = final_tier_override ?? derived_tier`
    #[must_use]
    pub fn derive(assessment: &RiskAssessment) -> Self {
        let qualitative = qualitative_score(&assessment.factors);

        let effective_quantitative = assessment
            .quantitative_override
            .or(assessment.quantitative_rating);
        let effective_qualitative = assessment
            .qualitative_override
            .or(qualitative.as_ref().map(|q| q.level));

        let derived_tier = inherent_risk(effective_quantitative, effective_qualitative);
        let effective_tier = assessment.final_tier_override.or(derived_tier);

        Self {
            effective_quantitative,
            effective_qualitative,
            qualitative_score: qualitative.map(|q| q.score),
            derived_tier,
            effective_tier,
            tier_code: effective_tier.map(tier_code),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
