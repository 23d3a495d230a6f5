//! Plan step model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StepStatus;

/// Kind of work a plan step performs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Create,
    Modify,
    Delete,
    Test,
    Review,
    Configure,
    Document,
}

impl StepAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Create => "create",
            StepAction::Modify => "modify",
            StepAction::Delete => "delete",
            StepAction::Test => "test",
            StepAction::Review => "review",
            StepAction::Configure => "configure",
            StepAction::Document => "document",
        }
    }
}

impl FromStr for StepAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(StepAction::Create),
            "modify" => Ok(StepAction::Modify),
            "delete" => Ok(StepAction::Delete),
            "test" => Ok(StepAction::Test),
            "review" => Ok(StepAction::Review),
            "configure" => Ok(StepAction::Configure),
            "document" => Ok(StepAction::Document),
            _ => Err(format!("Invalid step action: {s}")),
        }
    }
}

/// A single ordered step of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanStep {
    /// 1-based position; identity of the step within its plan
    pub number: u32,

    pub action: StepAction,

    /// File, class or module the step operates on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_outcome: Option<String>,

    #[serde(default)]
    pub status: StepStatus,
}

impl PlanStep {
    /// Creates a pending step with only the required fields set.
    pub fn new(number: u32, action: StepAction, description: impl Into<String>) -> Self {
        Self {
            number,
            action,
            target: None,
            description: description.into(),
            details: None,
            expected_outcome: None,
            status: StepStatus::Pending,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_expected_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.expected_outcome = Some(outcome.into());
        self
    }
}
