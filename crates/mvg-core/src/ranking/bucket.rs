// AGENT-AUTHORED
//! Past-due bucket configuration and lookup.
//!
//! Admins configure an ordered set of day-range buckets mapping overdue
//! severity to downgrade notches ("1-90 days overdue -> 1 notch"). The set
//! must tile the integer day line exactly:
//!
//! - A single-bucket configuration is valid iff both bounds are null (it
//!   covers everything).
//! - A multi-bucket configuration is valid iff exactly one bucket has a null
//!   minimum (the lowest), exactly one has a null maximum (the highest),
//!   every other bucket has both bounds set, and adjacent bounds are
//!   contiguous with no gap or overlap.
//!
//! Violations are rejected at admin-edit time with errors naming the
//! offending bucket label(s) and, for gaps, the first missing day value;
//! the save is blocked, so the engine only ever computes against a valid
//! schedule. [`PastDueSchedule::validate_edit`] simulates an insert or an
//! in-place bound change before committing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PastDueBucket
// =============================================================================

/// One admin-configured day-range bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDueBucket {
    /// Display label, also the identity used by edit simulation.
    pub label: String,

    /// Inclusive lower bound in days overdue; `None` = unbounded below.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_days: Option<i64>,

    /// Inclusive upper bound in days overdue; `None` = unbounded above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<i64>,

    /// Scorecard notches to downgrade for models landing in this bucket.
    pub downgrade_notches: u32,
}

impl PastDueBucket {
    /// True when `days` falls inside this bucket's inclusive bounds.
    #[must_use]
    pub fn contains(&self, days: i64) -> bool {
        self.min_days.is_none_or(|min| days >= min)
            && self.max_days.is_none_or(|max| days <= max)
    }
}

// =============================================================================
// BucketConfigError
// =============================================================================

/// Contiguity violations detected at admin-edit time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BucketConfigError {
    /// A lone bucket must cover everything (both bounds null).
    #[error("single bucket '{label}' must leave both bounds open to cover all values")]
    SingleBucketBounded {
        /// The offending bucket.
        label: String,
    },

    /// A bucket's minimum exceeds its maximum.
    #[error("bucket '{label}' has min {min} greater than max {max}")]
    InvertedBounds {
        /// The offending bucket.
        label: String,
        /// Configured minimum.
        min: i64,
        /// Configured maximum.
        max: i64,
    },

    /// No bucket is open below; the lowest values are uncovered.
    #[error("no bucket has an open lower bound; lowest bucket is '{label}'")]
    NoOpenLowerBound {
        /// The lowest configured bucket.
        label: String,
    },

    /// More than one bucket is open below.
    #[error("multiple buckets have open lower bounds: {labels:?}")]
    MultipleOpenLowerBounds {
        /// Every offending bucket.
        labels: Vec<String>,
    },

    /// No bucket is open above; the highest values are uncovered.
    #[error("no bucket has an open upper bound; highest bucket is '{label}'")]
    NoOpenUpperBound {
        /// The highest configured bucket.
        label: String,
    },

    /// More than one bucket is open above.
    #[error("multiple buckets have open upper bounds: {labels:?}")]
    MultipleOpenUpperBounds {
        /// Every offending bucket.
        labels: Vec<String>,
    },

    /// Adjacent buckets leave days uncovered.
    #[error(
        "gap between '{lower_label}' and '{upper_label}': day {missing_day} is in no bucket"
    )]
    Gap {
        /// Bucket below the gap.
        lower_label: String,
        /// Bucket above the gap.
        upper_label: String,
        /// First uncovered day value.
        missing_day: i64,
    },

    /// Adjacent buckets claim the same days.
    #[error("buckets '{lower_label}' and '{upper_label}' overlap")]
    Overlap {
        /// Bucket below the overlap.
        lower_label: String,
        /// Bucket above the overlap.
        upper_label: String,
    },
}

// =============================================================================
// PastDueSchedule
// =============================================================================

/// A validated, sorted bucket set. Construction is the proof of validity;
/// lookups never re-check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDueSchedule {
    buckets: Vec<PastDueBucket>,
}

impl PastDueSchedule {
    /// Validates a bucket set and returns the sorted schedule.
    ///
    /// An empty set is a valid schedule that downgrades nothing.
    ///
    /// # Errors
    ///
    /// Returns the first [`BucketConfigError`] found, naming the offending
    /// bucket label(s); for gaps, the first missing day value.
    pub fn validate(buckets: Vec<PastDueBucket>) -> Result<Self, BucketConfigError> {
        let mut sorted = buckets;
        // Null minimum sorts first (unbounded below).
        sorted.sort_by_key(|bucket| (bucket.min_days.is_some(), bucket.min_days));

        for bucket in &sorted {
            if let (Some(min), Some(max)) = (bucket.min_days, bucket.max_days) {
                if min > max {
                    return Err(BucketConfigError::InvertedBounds {
                        label: bucket.label.clone(),
                        min,
                        max,
                    });
                }
            }
        }

        match sorted.as_slice() {
            [] => {}
            [only] => {
                if only.min_days.is_some() || only.max_days.is_some() {
                    return Err(BucketConfigError::SingleBucketBounded {
                        label: only.label.clone(),
                    });
                }
            }
            many => {
                check_open_ends(many)?;
                check_contiguity(many)?;
            }
        }

        Ok(Self { buckets: sorted })
    }

    /// Re-validates with `candidate` applied: replaces the existing bucket
    /// with the same label, or inserts a new one. The stored schedule is
    /// untouched; admins commit only the returned schedule.
    ///
    /// # Errors
    ///
    /// Same as [`PastDueSchedule::validate`].
    pub fn validate_edit(
        &self,
        candidate: PastDueBucket,
    ) -> Result<Self, BucketConfigError> {
        let mut edited: Vec<PastDueBucket> = self
            .buckets
            .iter()
            .filter(|bucket| bucket.label != candidate.label)
            .cloned()
            .collect();
        edited.push(candidate);
        Self::validate(edited)
    }

    /// The unique bucket containing `days`, if any.
    #[must_use]
    pub fn bucket_for(&self, days: i64) -> Option<&PastDueBucket> {
        self.buckets.iter().find(|bucket| bucket.contains(days))
    }

    /// Downgrade notches for a days-overdue value. No bucket match (or no
    /// measurable overdue) means no penalty.
    #[must_use]
    pub fn notches_for(&self, days_overdue: Option<i64>) -> u32 {
        days_overdue
            .and_then(|days| self.bucket_for(days))
            .map_or(0, |bucket| bucket.downgrade_notches)
    }

    /// The validated buckets in ascending order.
    #[must_use]
    pub fn buckets(&self) -> &[PastDueBucket] {
        &self.buckets
    }
}

/// Exactly one open lower end and one open upper end, at the extremes.
fn check_open_ends(sorted: &[PastDueBucket]) -> Result<(), BucketConfigError> {
    let open_lower: Vec<&PastDueBucket> = sorted
        .iter()
        .filter(|bucket| bucket.min_days.is_none())
        .collect();
    match open_lower.as_slice() {
        [] => {
            return Err(BucketConfigError::NoOpenLowerBound {
                label: sorted[0].label.clone(),
            });
        }
        [_] => {}
        many => {
            return Err(BucketConfigError::MultipleOpenLowerBounds {
                labels: many.iter().map(|bucket| bucket.label.clone()).collect(),
            });
        }
    }

    let open_upper: Vec<&PastDueBucket> = sorted
        .iter()
        .filter(|bucket| bucket.max_days.is_none())
        .collect();
    match open_upper.as_slice() {
        [] => Err(BucketConfigError::NoOpenUpperBound {
            label: sorted[sorted.len() - 1].label.clone(),
        }),
        [only] => {
            // The open-above bucket must be the highest one; anywhere else
            // it would swallow every bucket after it.
            if !std::ptr::eq(*only, &sorted[sorted.len() - 1]) {
                return Err(BucketConfigError::Overlap {
                    lower_label: only.label.clone(),
                    upper_label: sorted[sorted.len() - 1].label.clone(),
                });
            }
            Ok(())
        }
        many => Err(BucketConfigError::MultipleOpenUpperBounds {
            labels: many.iter().map(|bucket| bucket.label.clone()).collect(),
        }),
    }
}

/// Adjacent bounds must satisfy `next.min == prev.max + 1`.
fn check_contiguity(sorted: &[PastDueBucket]) -> Result<(), BucketConfigError> {
    for pair in sorted.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let (Some(prev_max), Some(next_min)) = (prev.max_days, next.min_days) else {
            // Open ends already verified to sit at the extremes.
            continue;
        };
        if next_min <= prev_max {
            return Err(BucketConfigError::Overlap {
                lower_label: prev.label.clone(),
                upper_label: next.label.clone(),
            });
        }
        if next_min > prev_max + 1 {
            return Err(BucketConfigError::Gap {
                lower_label: prev.label.clone(),
                upper_label: next.label.clone(),
                missing_day: prev_max + 1,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
