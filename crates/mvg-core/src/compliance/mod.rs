//! Periodic revalidation compliance.
//!
//! [`ComplianceStatus`] is the 11-state answer to "is this model's periodic
//! revalidation on time, in grace, or overdue as of today", and
//! [`compute_compliance`] is the derivation that produces it from a model
//! snapshot, the policy set, and an evaluation date. Pure and synchronous:
//! no I/O, no clock reads, no shared state.

mod overdue;
mod status;

pub use overdue::compute_compliance;
pub use status::{ComplianceOutcome, ComplianceStatus};
