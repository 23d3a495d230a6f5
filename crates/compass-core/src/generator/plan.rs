//! Expands an intent into an ordered plan of typed steps.

use jiff::Timestamp;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    classify,
    error::Result,
    models::{short_id, Intent, Plan, PlanStatus, PlanStep, StepAction},
};

/// Scope sizes above this get a "large scope" risk.
const LARGE_SCOPE_THRESHOLD: usize = 3;

/// Options for [`PlanGenerator`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanConfig {
    /// Start with a review of the current implementation
    pub include_analysis_step: bool,
    /// Finish with a review and cleanup step
    pub include_review_step: bool,
    /// Advisory limit; exceeding it only logs a warning
    pub max_steps: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            include_analysis_step: true,
            include_review_step: true,
            max_steps: 20,
        }
    }
}

/// Deterministic intent-to-plan expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerator {
    config: PlanConfig,
}

impl PlanGenerator {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Builds a plan for `intent`.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::Validation` listing every violated rule when the
    /// intent is invalid; no partial plan is produced.
    pub fn generate(&self, intent: &Intent) -> Result<Plan> {
        intent.ensure_valid()?;

        let mut steps = StepSequence::default();

        if self.config.include_analysis_step {
            steps.push(
                StepAction::Review,
                "Analyze current implementation",
                |step| step.with_details(bullet_section("Scope", &intent.scope)),
            );
        }

        for item in &intent.scope {
            let mut details = format!("Goal: {}", intent.goal);
            if !intent.constraints.is_empty() {
                details.push_str("\n\n");
                details.push_str(&bullet_section("Constraints", &intent.constraints));
            }
            steps.push(
                StepAction::Modify,
                format!("Implement changes in {item}"),
                |step| step.with_target(item.as_str()).with_details(details),
            );
        }

        for entry in &intent.verification {
            let action = classify::plan_step_action(entry);
            let description = match action {
                StepAction::Test => format!("Create/run: {entry}"),
                _ => entry.clone(),
            };
            steps.push(action, description, |step| {
                step.with_expected_outcome(format!("Verified: {entry}"))
            });
        }

        if self.config.include_review_step {
            steps.push(StepAction::Review, "Final review and cleanup", |step| step);
        }

        let steps = steps.into_inner();
        if steps.len() > self.config.max_steps {
            warn!(
                "Plan for intent {} has {} steps, above the advisory limit of {}",
                intent.id,
                steps.len(),
                self.config.max_steps
            );
        }
        debug!("Generated plan with {} steps for intent {}", steps.len(), intent.id);

        Ok(Plan {
            id: short_id(),
            intent_id: intent.id.clone(),
            summary: format!("Implementation plan for: {}", intent.goal),
            steps,
            affected_files: intent.scope.iter().map(|item| format!("{item}.*")).collect(),
            risks: risks_for(intent),
            dependencies: Vec::new(),
            status: PlanStatus::Ready,
            created_at: Timestamp::now(),
        })
    }
}

/// Numbers steps from 1 in push order.
#[derive(Default)]
struct StepSequence {
    steps: Vec<PlanStep>,
}

impl StepSequence {
    fn push<F>(&mut self, action: StepAction, description: impl Into<String>, build: F)
    where
        F: FnOnce(PlanStep) -> PlanStep,
    {
        let number = self.steps.len() as u32 + 1;
        self.steps.push(build(PlanStep::new(number, action, description)));
    }

    fn into_inner(self) -> Vec<PlanStep> {
        self.steps
    }
}

fn bullet_section(title: &str, items: &[String]) -> String {
    let mut section = format!("{title}:");
    for item in items {
        section.push_str("\n- ");
        section.push_str(item);
    }
    section
}

fn risks_for(intent: &Intent) -> Vec<String> {
    let mut risks: Vec<String> = intent
        .constraints
        .iter()
        .map(|constraint| format!("Change may violate constraint: {constraint}"))
        .collect();

    if intent.scope.len() > LARGE_SCOPE_THRESHOLD {
        risks.push(format!(
            "Large scope ({} items) increases integration risk; consider splitting the intent",
            intent.scope.len()
        ));
    }
    risks
}
