//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanStatus, PlanStep, StepStatus};

/// Ordered execution blueprint derived from one intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Identifier of the plan itself
    pub id: String,

    /// Back-reference to the intent the plan was generated from
    pub intent_id: String,

    pub summary: String,

    /// Steps in execution order, numbered from 1
    #[serde(default)]
    pub steps: Vec<PlanStep>,

    /// Glob hints for files likely to change; not checked against disk
    #[serde(default)]
    pub affected_files: Vec<String>,

    #[serde(default)]
    pub risks: Vec<String>,

    /// Free-text external dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub status: PlanStatus,

    pub created_at: Timestamp,
}

/// Completed versus total steps of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub completed: usize,
    pub total: usize,
}

impl Plan {
    /// Looks up a step by its 1-based number.
    pub fn step(&self, number: u32) -> Option<&PlanStep> {
        self.steps.iter().find(|step| step.number == number)
    }

    /// Updates the status of one step. Returns `false` when no step has that
    /// number.
    pub fn set_step_status(&mut self, number: u32, status: StepStatus) -> bool {
        match self.steps.iter_mut().find(|step| step.number == number) {
            Some(step) => {
                step.status = status;
                true
            }
            None => false,
        }
    }

    pub fn progress(&self) -> StepProgress {
        StepProgress {
            completed: self
                .steps
                .iter()
                .filter(|step| step.status == StepStatus::Completed)
                .count(),
            total: self.steps.len(),
        }
    }

    /// True when step numbers are exactly `1..=steps.len()` in order.
    pub fn is_step_contiguous(&self) -> bool {
        self.steps
            .iter()
            .zip(1u32..)
            .all(|(step, expected)| step.number == expected)
    }
}
