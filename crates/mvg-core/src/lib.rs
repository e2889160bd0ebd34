// AGENT-AUTHORED
//! Model validation governance core.
//!
//! `mvg-core` is the derivation engine behind a model governance
//! application: given a model's configuration and validation history as of
//! an evaluation date, it computes
//!
//! - the model's revalidation **compliance status** (an 11-state machine:
//!   on time, in grace, or one of several overdue flavors),
//! - its **approval status** (a 5-state machine combining compliance with
//!   approval-completeness checks, journaling transitions),
//! - its **inherent risk tier** from weighted qualitative factors, a
//!   quantitative rating, and three independent override slots, and
//! - its **final residual risk ranking**, which penalizes stale validations
//!   by downgrading the measured scorecard outcome before a matrix lookup.
//!
//! # Purity Contract
//!
//! Every derivation is a pure, synchronous function over a caller-supplied
//! snapshot: no I/O, no clock reads, no shared mutable state. Different
//! models may be evaluated concurrently without coordination. For one
//! model, callers must serialize the recompute-and-journal sequence (a
//! database transaction in practice) so concurrent triggers cannot
//! duplicate or drop a status history row.
//!
//! # Error Posture
//!
//! Three kinds of failure, three postures:
//!
//! - **Configuration gaps** (no policy for a tier, inactive/absent matrix):
//!   the derivation returns a named "unknown" status or `None`; one
//!   misconfigured model never aborts a batch of thousands.
//! - **Malformed admin input** (bucket gaps/overlaps, duplicate policy
//!   tiers, multiple active matrices): rejected synchronously at edit time
//!   with a [`config::GovernanceConfigError`], blocking the save.
//! - **Unrecognized values** (tier labels, scorecard labels outside the
//!   known vocabularies): propagated as `None`, never guessed.
//!
//! # Example
//!
//! ```rust
//! use mvg_core::config::GovernanceConfigDocument;
//! use mvg_core::domain::{Model, ModelSnapshot};
//! use mvg_core::engine::evaluate_model;
//!
//! let config = GovernanceConfigDocument::from_yaml(
//!     r"
//! policies:
//!   - tier_label: High
//!     frequency_months: 12
//!     grace_period_months: 3
//!     submission_lead_time_days: 90
//! ",
//! )
//! .unwrap()
//! .into_snapshot()
//! .unwrap();
//!
//! let snapshot = ModelSnapshot {
//!     model: Model {
//!         id: "M-001".to_string(),
//!         name: "PD model".to_string(),
//!         tier_label: Some("High".to_string()),
//!         active: true,
//!         use_approval_date: None,
//!     },
//!     requests: Vec::new(),
//!     assessments: Vec::new(),
//! };
//!
//! let evaluation = evaluate_model(&snapshot, &config, "2025-07-12".parse().unwrap());
//! assert_eq!(
//!     evaluation.compliance.status,
//!     mvg_core::compliance::ComplianceStatus::NeverValidated
//! );
//! ```

pub mod approval;
pub mod compliance;
pub mod config;
pub mod domain;
pub mod engine;
pub mod policy;
pub mod ranking;
pub mod tier;

pub use approval::{ApprovalEvaluation, ApprovalStatus, StatusJournal, evaluate_approval};
pub use compliance::{ComplianceOutcome, ComplianceStatus, compute_compliance};
pub use engine::{GovernanceSnapshot, ModelEvaluation, evaluate_and_journal, evaluate_model};
pub use ranking::{FinalRanking, compute_final_ranking};
pub use tier::{EffectiveRisk, RiskLevel, RiskTier, TierCode};
