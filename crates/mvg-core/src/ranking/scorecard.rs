//! Scorecard downgrade arithmetic.
//!
//! A downgrade shifts an outcome toward `Red` along the fixed best-to-worst
//! order, one step per notch, capped at `Red`. Downgrades never improve an
//! outcome and never panic; zero notches is the identity.

use crate::domain::ScorecardOutcome;

/// Worsens `outcome` by `notches` steps, capped at `Red`.
#[must_use]
pub fn downgrade(outcome: ScorecardOutcome, notches: u32) -> ScorecardOutcome {
    if notches == 0 {
        return outcome;
    }
    let shifted = outcome.index().saturating_add(notches as usize);
    let capped = shifted.min(ScorecardOutcome::ORDER.len() - 1);
    ScorecardOutcome::ORDER[capped]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_zero_notches_is_identity() {
        for outcome in ScorecardOutcome::ORDER {
            assert_eq!(downgrade(outcome, 0), outcome);
        }
    }

    #[test]
    fn test_single_notch_steps() {
        assert_eq!(
            downgrade(ScorecardOutcome::Green, 1),
            ScorecardOutcome::GreenMinus
        );
        assert_eq!(
            downgrade(ScorecardOutcome::YellowMinus, 1),
            ScorecardOutcome::Red
        );
    }

    #[test]
    fn test_caps_at_red() {
        assert_eq!(downgrade(ScorecardOutcome::Green, 5), ScorecardOutcome::Red);
        assert_eq!(downgrade(ScorecardOutcome::Green, 100), ScorecardOutcome::Red);
        assert_eq!(downgrade(ScorecardOutcome::Red, u32::MAX), ScorecardOutcome::Red);
    }

    proptest! {
        /// Red is absorbing for any notch count.
        #[test]
        fn red_is_absorbing(notches in 0u32..1000) {
            prop_assert_eq!(downgrade(ScorecardOutcome::Red, notches), ScorecardOutcome::Red);
        }

        /// Downgrading never improves an outcome, and more notches never
        /// read better than fewer.
        #[test]
        fn monotonically_non_improving(
            index in 0usize..6,
            notches_a in 0u32..10,
            notches_b in 0u32..10,
        ) {
            let outcome = ScorecardOutcome::ORDER[index];
            let (fewer, more) = if notches_a <= notches_b {
                (notches_a, notches_b)
            } else {
                (notches_b, notches_a)
            };
            prop_assert!(downgrade(outcome, fewer) >= outcome);
            prop_assert!(downgrade(outcome, more) >= downgrade(outcome, fewer));
        }
    }
}
