//! Verification result model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{CheckStatus, CheckType, ChecklistItem, VerificationStatus};

/// Snapshot of one checklist item as a pass/fail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    pub criterion: String,
    #[serde(rename = "type")]
    pub check_type: CheckType,
    pub status: CheckStatus,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_constraint: bool,
}

impl From<&ChecklistItem> for CheckResult {
    fn from(item: &ChecklistItem) -> Self {
        Self {
            criterion: item.criterion.clone(),
            check_type: item.check_type,
            status: item.status,
            passed: item.status == CheckStatus::Passed,
            notes: item.notes.clone(),
            is_constraint: item.is_constraint,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationResult {
    pub intent_id: String,
    pub status: VerificationStatus,
    pub checks: Vec<CheckResult>,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub verified_at: Timestamp,
}

impl VerificationResult {
    pub fn passed(&self) -> bool {
        self.status == VerificationStatus::Passed
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|check| !check.passed)
    }
}
