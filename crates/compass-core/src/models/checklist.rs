//! Verification checklist built from an intent and marked by its executor.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::CheckStatus;

/// Prefix identifying checklist items that came from a constraint.
pub const CONSTRAINT_PREFIX: &str = "Constraint: ";

/// How a criterion is expected to be checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    UnitTest,
    IntegrationTest,
    CodeReview,
    Linter,
    Build,
    Security,
    Manual,
}

impl CheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::UnitTest => "unit_test",
            CheckType::IntegrationTest => "integration_test",
            CheckType::CodeReview => "code_review",
            CheckType::Linter => "linter",
            CheckType::Build => "build",
            CheckType::Security => "security",
            CheckType::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub criterion: String,
    #[serde(rename = "type")]
    pub check_type: CheckType,
    #[serde(default)]
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_constraint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl ChecklistItem {
    /// Records an outcome for this item.
    pub fn mark(&mut self, status: CheckStatus, notes: Option<String>) {
        self.status = status;
        self.notes = notes;
        self.completed_at = Some(Timestamp::now());
    }
}

/// Mutable verification state for one intent.
///
/// Completeness and pass/fail are always derived from the items; nothing is
/// cached on the checklist itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationChecklist {
    pub intent_id: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
    pub created_at: Timestamp,
}

impl VerificationChecklist {
    /// Finds the first item whose criterion contains `needle`, ignoring case.
    ///
    /// Only the first match is ever returned: if two criteria share the
    /// substring, the later one cannot be reached through this lookup.
    pub fn find_mut(&mut self, needle: &str) -> Option<&mut ChecklistItem> {
        let needle = needle.to_lowercase();
        self.items
            .iter_mut()
            .find(|item| item.criterion.to_lowercase().contains(&needle))
    }

    /// Marks the first matching item. Returns `false` when nothing matched.
    pub fn mark(&mut self, needle: &str, status: CheckStatus, notes: Option<String>) -> bool {
        match self.find_mut(needle) {
            Some(item) => {
                item.mark(status, notes);
                true
            }
            None => false,
        }
    }

    /// True when every item is passed or skipped.
    ///
    /// Deliberately more lenient than verification, where a skipped item
    /// counts as not passed.
    pub fn is_complete(&self) -> bool {
        self.items
            .iter()
            .all(|item| matches!(item.status, CheckStatus::Passed | CheckStatus::Skipped))
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }

    pub fn constraint_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| item.is_constraint)
    }
}
