//! Weighted qualitative factor scoring.
//!
//! Folds a set of factor assessments into a single score and level. Only
//! rated factors contribute; unrated entries (partial saves) are skipped.
//! Partial weight coverage is NOT renormalized; the score reflects the
//! factors "as rated so far", so a half-rated assessment reads low until the
//! remaining factors are filled in.
//!
//! # Thresholds
//!
//! Scores are rounded to 2 decimals and compared in integer centipoints so
//! the documented boundaries are exact:
//!
//! - `score >= 2.10` -> HIGH
//! - `score >= 1.60` -> MEDIUM
//! - otherwise -> LOW

use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::domain::FactorAssessment;

/// HIGH level threshold, in centipoints (2.10).
pub const HIGH_THRESHOLD_CENTS: i64 = 210;

/// MEDIUM level threshold, in centipoints (1.60).
pub const MEDIUM_THRESHOLD_CENTS: i64 = 160;

/// A computed qualitative score and its level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualitativeScore {
    /// `round(sum(weight_snapshot * points(rating)), 2)` over rated factors.
    pub score: f64,
    /// Level implied by the rounded score.
    pub level: RiskLevel,
}

/// Computes the weighted qualitative score over rated factors.
///
/// Weights are the snapshots taken at assessment time, immutable even if the
/// factor's current weight later changes. Returns `None` when no factor has
/// been rated; an unsaved assessment has no score, and the caller must not
/// substitute one.
#[must_use]
pub fn qualitative_score(factors: &[FactorAssessment]) -> Option<QualitativeScore> {
    let mut raw = 0.0_f64;
    let mut rated = 0_usize;

    for factor in factors {
        let Some(rating) = factor.rating else {
            continue;
        };
        raw += factor.weight_snapshot * f64::from(rating.points());
        rated += 1;
    }

    if rated == 0 {
        return None;
    }

    // Round to 2 decimals once, then classify on the rounded value in
    // centipoints. Keeps the 2.10 / 1.60 boundaries exact under f64.
    #[allow(clippy::cast_possible_truncation)]
    let cents = (raw * 100.0).round() as i64;
    let level = if cents >= HIGH_THRESHOLD_CENTS {
        RiskLevel::High
    } else if cents >= MEDIUM_THRESHOLD_CENTS {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Some(QualitativeScore {
        score: cents as f64 / 100.0,
        level,
    })
}
