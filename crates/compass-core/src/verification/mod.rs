//! Verification engine: checklists from intents, results from checklists.
//!
//! The engine never runs anything. Checklist items are marked by whoever
//! executes the plan; [`VerificationEngine::evaluate`] only reads those marks.

pub mod report;

use jiff::Timestamp;
use log::debug;

use crate::{
    classify,
    models::{
        short_id, CheckResult, CheckStatus, CheckType, ChecklistItem, Intent,
        VerificationChecklist, VerificationResult, VerificationStatus, CONSTRAINT_PREFIX,
    },
};

pub use report::{render, ReportFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct VerificationEngine;

impl VerificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// One pending item per verification entry, then one per constraint.
    pub fn build_checklist(&self, intent: &Intent) -> VerificationChecklist {
        let verification = intent.verification.iter().map(|entry| ChecklistItem {
            id: short_id(),
            criterion: entry.clone(),
            check_type: classify::check_type(entry),
            status: CheckStatus::Pending,
            notes: None,
            is_constraint: false,
            completed_at: None,
        });
        let constraints = intent.constraints.iter().map(|constraint| ChecklistItem {
            id: short_id(),
            criterion: format!("{CONSTRAINT_PREFIX}{constraint}"),
            check_type: CheckType::CodeReview,
            status: CheckStatus::Pending,
            notes: None,
            is_constraint: true,
            completed_at: None,
        });

        let items: Vec<ChecklistItem> = verification.chain(constraints).collect();
        debug!("Built checklist with {} items for intent {}", items.len(), intent.id);

        VerificationChecklist {
            intent_id: intent.id.clone(),
            items,
            created_at: Timestamp::now(),
        }
    }

    /// Passed only if every item passed. Skipped items count as not passed.
    pub fn evaluate(&self, checklist: &VerificationChecklist) -> VerificationResult {
        let checks: Vec<CheckResult> = checklist.items.iter().map(CheckResult::from).collect();
        let total = checks.len();
        let passed = checks.iter().filter(|check| check.passed).count();

        let status = if passed == total {
            VerificationStatus::Passed
        } else {
            VerificationStatus::Failed
        };

        let summary = match status {
            VerificationStatus::Passed => {
                format!("Verification passed: {passed}/{total} checks passed.")
            }
            _ => format!(
                "Verification failed: {passed}/{total} checks passed, {} not passed.",
                total - passed
            ),
        };

        let suggestions = checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| format!("Address: {}", check.criterion))
            .collect();

        VerificationResult {
            intent_id: checklist.intent_id.clone(),
            status,
            checks,
            summary,
            suggestions,
            verified_at: Timestamp::now(),
        }
    }
}
