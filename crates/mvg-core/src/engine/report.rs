// AGENT-AUTHORED
//! Batch compliance KPI report.
//!
//! Pure aggregation over a batch of [`ModelEvaluation`]s: status counts,
//! the overdue rate, and the compliance rate. Models without a configured
//! policy are listed in the counts but excluded from every rate denominator,
//! so one misconfigured tier cannot skew a KPI. `BTreeMap` keys keep report
//! output deterministic run to run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ModelEvaluation;
use crate::approval::ApprovalStatus;
use crate::compliance::ComplianceStatus;

/// Aggregate compliance KPIs for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Evaluation date the batch ran against.
    pub as_of: Option<NaiveDate>,

    /// Total models evaluated.
    pub total_models: u64,

    /// Models with a configured policy (the rate denominator).
    pub rated_models: u64,

    /// Models excluded for missing policy configuration.
    pub no_policy_models: u64,

    /// Per-status counts, in lifecycle order.
    pub compliance_counts: BTreeMap<ComplianceStatus, u64>,

    /// Per-approval-status counts, in lifecycle order.
    pub approval_counts: BTreeMap<ApprovalStatus, u64>,

    /// Models whose compliance outcome is overdue.
    pub overdue_models: u64,

    /// `overdue_models / rated_models`, as a percentage. Zero when nothing
    /// is rated.
    pub overdue_pct: f64,

    /// `100 - overdue_pct`. Zero when nothing is rated.
    pub compliance_rate_pct: f64,
}

impl ComplianceReport {
    /// Builds the report from a batch of evaluations.
    #[must_use]
    pub fn build(as_of: NaiveDate, evaluations: &[ModelEvaluation]) -> Self {
        let mut report = Self {
            as_of: Some(as_of),
            ..Self::default()
        };

        for evaluation in evaluations {
            report.total_models += 1;
            *report
                .compliance_counts
                .entry(evaluation.compliance.status)
                .or_insert(0) += 1;
            *report
                .approval_counts
                .entry(evaluation.approval.status)
                .or_insert(0) += 1;

            if evaluation.compliance.status == ComplianceStatus::NoPolicyConfigured {
                report.no_policy_models += 1;
                continue;
            }
            report.rated_models += 1;
            if evaluation.compliance.is_overdue {
                report.overdue_models += 1;
            }
        }

        if report.rated_models > 0 {
            #[allow(clippy::cast_precision_loss)]
            let rated = report.rated_models as f64;
            #[allow(clippy::cast_precision_loss)]
            let overdue = report.overdue_models as f64;
            report.overdue_pct = overdue / rated * 100.0;
            report.compliance_rate_pct = 100.0 - report.overdue_pct;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::ApprovalEvaluation;
    use crate::compliance::ComplianceOutcome;

    fn evaluation(
        model_id: &str,
        status: ComplianceStatus,
        is_overdue: bool,
        approval: ApprovalStatus,
    ) -> ModelEvaluation {
        let compliance = ComplianceOutcome::bare(model_id, status, is_overdue);
        ModelEvaluation {
            model_id: model_id.to_string(),
            compliance,
            risk: None,
            ranking: None,
            approval: ApprovalEvaluation {
                status: approval,
                approvals_complete: true,
                has_conditional_approver: false,
            },
        }
    }

    #[test]
    fn test_rates_exclude_unconfigured_models() {
        let evaluations = vec![
            evaluation("M-1", ComplianceStatus::Upcoming, false, ApprovalStatus::Approved),
            evaluation(
                "M-2",
                ComplianceStatus::SubmissionOverdue,
                true,
                ApprovalStatus::Expired,
            ),
            evaluation(
                "M-3",
                ComplianceStatus::NoPolicyConfigured,
                false,
                ApprovalStatus::Approved,
            ),
            evaluation(
                "M-4",
                ComplianceStatus::InGracePeriod,
                false,
                ApprovalStatus::Approved,
            ),
        ];
        let report = ComplianceReport::build("2025-01-01".parse().unwrap(), &evaluations);

        assert_eq!(report.total_models, 4);
        assert_eq!(report.rated_models, 3);
        assert_eq!(report.no_policy_models, 1);
        assert_eq!(report.overdue_models, 1);
        assert!((report.overdue_pct - 33.333_333).abs() < 0.001);
        assert!((report.compliance_rate_pct - 66.666_666).abs() < 0.001);
        assert_eq!(
            report.compliance_counts[&ComplianceStatus::NoPolicyConfigured],
            1
        );
    }

    #[test]
    fn test_empty_batch_has_zero_rates() {
        let report = ComplianceReport::build("2025-01-01".parse().unwrap(), &[]);
        assert_eq!(report.total_models, 0);
        assert_eq!(report.overdue_pct, 0.0);
        assert_eq!(report.compliance_rate_pct, 0.0);
    }

    #[test]
    fn test_counts_key_in_lifecycle_order() {
        let evaluations = vec![
            evaluation(
                "M-1",
                ComplianceStatus::NoPolicyConfigured,
                false,
                ApprovalStatus::NeverValidated,
            ),
            evaluation("M-2", ComplianceStatus::Upcoming, false, ApprovalStatus::Approved),
        ];
        let report = ComplianceReport::build("2025-01-01".parse().unwrap(), &evaluations);
        let keys: Vec<_> = report.compliance_counts.keys().copied().collect();
        assert_eq!(
            keys,
            vec![ComplianceStatus::Upcoming, ComplianceStatus::NoPolicyConfigured]
        );
    }
}
