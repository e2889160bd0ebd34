//! Input snapshot types for the governance derivations.
//!
//! Everything in this module is plain data handed in by collaborators
//! (routing, persistence); the engine performs no I/O and never mutates a
//! snapshot. Types derive serde so API layers can pass their own
//! deserialized rows straight through.

mod approval;
mod assessment;
mod model;
mod validation;

pub use approval::{ApprovalDecision, ApprovalRecord, ApprovalRole};
pub use assessment::{FactorAssessment, RiskAssessment};
pub use model::{Model, ModelSnapshot};
pub use validation::{RequestStatus, ScorecardOutcome, ValidationRequest, ValidationType};
