//! Residual risk matrix configuration.
//!
//! The matrix maps (normalized inherent tier, adjusted scorecard outcome)
//! to a residual risk rating. At most one configuration is active at a time;
//! lookups against an inactive configuration return nothing, so one missing
//! admin toggle degrades batch results to "cannot compute" instead of
//! inventing ratings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ScorecardOutcome;
use crate::tier::RiskTier;

/// One residual risk matrix configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualRiskMatrix {
    /// Configuration name, for admin screens and error messages.
    pub name: String,

    /// Only the active configuration serves lookups.
    pub active: bool,

    /// `table[tier][outcome] -> residual rating`. Missing cells read as
    /// "cannot compute".
    pub table: BTreeMap<RiskTier, BTreeMap<ScorecardOutcome, RiskTier>>,
}

impl ResidualRiskMatrix {
    /// Looks up the residual rating for a tier and outcome.
    ///
    /// Returns `None` when the configuration is inactive or the cell is
    /// missing.
    #[must_use]
    pub fn rating_for(&self, tier: RiskTier, outcome: ScorecardOutcome) -> Option<RiskTier> {
        if !self.active {
            return None;
        }
        self.table.get(&tier)?.get(&outcome).copied()
    }

    /// A fully populated matrix where the residual rating starts at the
    /// inherent tier and worsens one tier per band below `Green`, floored
    /// at the tier scale's ends. Useful as a test fixture and a sane
    /// default for new installations.
    #[must_use]
    pub fn standard(name: &str) -> Self {
        let mut table = BTreeMap::new();
        for tier in RiskTier::all() {
            let mut row = BTreeMap::new();
            for outcome in ScorecardOutcome::ORDER {
                // Worse outcomes push the residual rating toward High.
                let bump = match outcome {
                    ScorecardOutcome::Green | ScorecardOutcome::GreenMinus => 0,
                    ScorecardOutcome::YellowPlus | ScorecardOutcome::Yellow => 1,
                    ScorecardOutcome::YellowMinus => 2,
                    ScorecardOutcome::Red => 3,
                };
                let rank = (tier.rank() + bump).min(RiskTier::High.rank());
                let rating = RiskTier::all()
                    .find(|candidate| candidate.rank() == rank)
                    .unwrap_or(RiskTier::High);
                row.insert(outcome, rating);
            }
            table.insert(tier, row);
        }
        Self {
            name: name.to_string(),
            active: true,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_matrix_returns_none() {
        let mut matrix = ResidualRiskMatrix::standard("m1");
        matrix.active = false;
        assert_eq!(
            matrix.rating_for(RiskTier::High, ScorecardOutcome::Green),
            None
        );
    }

    #[test]
    fn test_missing_cell_returns_none() {
        let mut matrix = ResidualRiskMatrix::standard("m1");
        matrix.table.get_mut(&RiskTier::Low).unwrap().remove(&ScorecardOutcome::Red);
        assert_eq!(matrix.rating_for(RiskTier::Low, ScorecardOutcome::Red), None);
        assert!(matrix.rating_for(RiskTier::Low, ScorecardOutcome::Yellow).is_some());
    }

    #[test]
    fn test_standard_matrix_is_total() {
        let matrix = ResidualRiskMatrix::standard("m1");
        for tier in RiskTier::all() {
            for outcome in ScorecardOutcome::ORDER {
                assert!(matrix.rating_for(tier, outcome).is_some());
            }
        }
    }

    #[test]
    fn test_standard_matrix_worsens_with_outcome() {
        let matrix = ResidualRiskMatrix::standard("m1");
        assert_eq!(
            matrix.rating_for(RiskTier::Low, ScorecardOutcome::Green),
            Some(RiskTier::Low)
        );
        assert_eq!(
            matrix.rating_for(RiskTier::Low, ScorecardOutcome::Yellow),
            Some(RiskTier::Medium)
        );
        assert_eq!(
            matrix.rating_for(RiskTier::Low, ScorecardOutcome::Red),
            Some(RiskTier::High)
        );
        assert_eq!(
            matrix.rating_for(RiskTier::High, ScorecardOutcome::Red),
            Some(RiskTier::High)
        );
    }
}
