//! Append-only approval status journal.
//!
//! One [`StatusHistoryRecord`] is appended per actual change: recording the
//! same status twice is a no-op, and every genuine transition produces
//! exactly one row. The journal is in-memory and carries no persistence;
//! callers drain [`StatusJournal::records`] into their audit store.
//!
//! # Thread Safety
//!
//! `StatusJournal` is **not** internally synchronized. For one model, the
//! read-compute-append sequence must be serialized by the caller (a database
//! transaction in practice) so two near-simultaneous triggers cannot both
//! observe the same last-recorded status and duplicate a row, or both miss a
//! genuine transition.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApprovalStatus;

/// What caused an approval status recompute. Journaled with each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RecomputeTrigger {
    /// A validation request changed (created, submitted, approved...).
    ValidationEvent,
    /// A validation policy was edited.
    PolicyChange,
    /// The nightly compliance sweep.
    ScheduledSweep,
    /// An interactive read recomputed the status.
    ApiRequest,
}

impl std::fmt::Display for RecomputeTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::ValidationEvent => "validation event",
            Self::PolicyChange => "policy change",
            Self::ScheduledSweep => "scheduled sweep",
            Self::ApiRequest => "api request",
        };
        f.write_str(label)
    }
}

/// One approval status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryRecord {
    /// Model whose status changed.
    pub model_id: String,

    /// Status before the change; `None` for a model's first record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<ApprovalStatus>,

    /// Status after the change.
    pub new_status: ApprovalStatus,

    /// What caused the recompute.
    pub trigger: RecomputeTrigger,

    /// When the transition was recorded (caller-supplied; the journal reads
    /// no clock).
    pub recorded_at: DateTime<Utc>,
}

/// In-memory, append-only transition journal.
#[derive(Debug, Clone, Default)]
pub struct StatusJournal {
    last: HashMap<String, ApprovalStatus>,
    records: Vec<StatusHistoryRecord>,
}

impl StatusJournal {
    /// An empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A journal seeded with the last recorded status per model, as loaded
    /// from the caller's audit store.
    #[must_use]
    pub fn with_last_statuses(last: HashMap<String, ApprovalStatus>) -> Self {
        Self {
            last,
            records: Vec::new(),
        }
    }

    /// Appends a transition row iff `status` differs from the model's last
    /// recorded status. Returns the appended record, or `None` when nothing
    /// changed.
    pub fn record(
        &mut self,
        model_id: &str,
        status: ApprovalStatus,
        trigger: RecomputeTrigger,
        at: DateTime<Utc>,
    ) -> Option<&StatusHistoryRecord> {
        let old_status = self.last.get(model_id).copied();
        if old_status == Some(status) {
            return None;
        }

        info!(
            model_id,
            old_status = old_status.map(|old| old.to_string()).as_deref().unwrap_or("<none>"),
            new_status = %status,
            %trigger,
            "approval status transition"
        );
        self.last.insert(model_id.to_string(), status);
        self.records.push(StatusHistoryRecord {
            model_id: model_id.to_string(),
            old_status,
            new_status: status,
            trigger,
            recorded_at: at,
        });
        self.records.last()
    }

    /// The last recorded status for a model.
    #[must_use]
    pub fn last_status(&self, model_id: &str) -> Option<ApprovalStatus> {
        self.last.get(model_id).copied()
    }

    /// All transition rows, in append order.
    #[must_use]
    pub fn records(&self) -> &[StatusHistoryRecord] {
        &self.records
    }

    /// Transition rows for one model, in append order.
    pub fn records_for<'journal>(
        &'journal self,
        model_id: &'journal str,
    ) -> impl Iterator<Item = &'journal StatusHistoryRecord> {
        self.records
            .iter()
            .filter(move |record| record.model_id == model_id)
    }
}
