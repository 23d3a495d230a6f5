//! Intent model definition and validation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{short_id, IntentStatus, Priority};
use crate::error::{CompassError, Result};

/// Structured description of a desired code change.
///
/// The intent is the sole input of the generation pipeline. Order inside
/// `scope`, `constraints` and `verification` is significant: it decides the
/// order of generated steps, tasks and checklist items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    /// Short opaque identifier, assigned once at creation
    #[serde(default = "short_id")]
    pub id: String,

    /// Human-readable objective
    #[serde(default)]
    pub goal: String,

    /// Target files, classes or modules. An entry containing `(new)` names
    /// something that does not exist yet.
    #[serde(default)]
    pub scope: Vec<String>,

    /// Rules that must still hold after the change
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Success criteria
    #[serde(default)]
    pub verification: Vec<String>,

    /// Free-form background for whoever executes the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Lifecycle state; not part of the stored document
    #[serde(skip)]
    pub status: IntentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Intent {
    /// Creates an empty intent with a fresh id and the given goal.
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            id: short_id(),
            goal: goal.into(),
            scope: Vec::new(),
            constraints: Vec::new(),
            verification: Vec::new(),
            context: None,
            priority: Priority::default(),
            tags: Vec::new(),
            status: IntentStatus::default(),
            created_at: Some(Timestamp::now()),
        }
    }

    /// Checks every business rule and reports all violations at once.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("Id is required".to_string());
        }
        if self.goal.trim().is_empty() {
            errors.push("Goal is required".to_string());
        }
        if self.scope.is_empty() {
            errors.push("Scope must contain at least one item".to_string());
        }
        for (index, item) in self.scope.iter().enumerate() {
            if item.trim().is_empty() {
                errors.push(format!("Scope item {} is empty", index + 1));
            }
        }

        ValidationResult { errors }
    }

    /// Validates and converts any violation into [`CompassError::Validation`].
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().into_result()
    }
}

/// Outcome of [`Intent::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CompassError::Validation {
                errors: self.errors,
            })
        }
    }
}
