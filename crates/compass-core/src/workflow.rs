//! Stateful session sequencing intent, plan, tasks, checklist and result.
//!
//! A [`Workflow`] wraps exactly one [`Intent`] and lazily creates the
//! artefacts derived from it. Generation always validates first, and
//! regeneration replaces the previous artefact wholesale.
//!
//! # Examples
//!
//! ```rust
//! use compass_core::{models::IntentStatus, Workflow};
//!
//! let mut workflow = Workflow::new("Add logging");
//! workflow
//!     .with_scope(["AuthService", "Logger"])
//!     .with_verification(["Test 1", "Test 2"]);
//!
//! workflow.create_plan()?;
//! assert_eq!(workflow.intent().status, IntentStatus::Planned);
//!
//! workflow.mark_passed("Test 1", None);
//! workflow.mark_failed("Test 2", Some("flaky".to_string()));
//! let result = workflow.verify();
//! assert_eq!(result.suggestions, vec!["Address: Test 2"]);
//! assert_eq!(workflow.intent().status, IntentStatus::Failed);
//! # Ok::<(), compass_core::CompassError>(())
//! ```

use log::debug;

use crate::{
    error::Result,
    generator::{PlanConfig, PlanGenerator, TaskConfig, TaskGenerator},
    models::{
        CheckStatus, Intent, IntentStatus, Plan, Priority, TaskBreakdown, VerificationChecklist,
        VerificationResult, VerificationStatus,
    },
    verification::VerificationEngine,
};

/// Single-owner session over one intent.
#[derive(Debug, Clone)]
pub struct Workflow {
    intent: Intent,
    plan: Option<Plan>,
    tasks: Option<TaskBreakdown>,
    checklist: Option<VerificationChecklist>,
    result: Option<VerificationResult>,
    plan_generator: PlanGenerator,
    task_generator: TaskGenerator,
    engine: VerificationEngine,
}

impl Workflow {
    /// Starts a session for a fresh intent with the given goal.
    pub fn new(goal: impl Into<String>) -> Self {
        Self::from_intent(Intent::new(goal))
    }

    /// Starts a session around an existing intent, e.g. one loaded from disk.
    pub fn from_intent(intent: Intent) -> Self {
        Self {
            intent,
            plan: None,
            tasks: None,
            checklist: None,
            result: None,
            plan_generator: PlanGenerator::default(),
            task_generator: TaskGenerator::default(),
            engine: VerificationEngine::new(),
        }
    }

    pub fn with_plan_config(&mut self, config: PlanConfig) -> &mut Self {
        self.plan_generator = PlanGenerator::new(config);
        self
    }

    pub fn with_task_config(&mut self, config: TaskConfig) -> &mut Self {
        self.task_generator = TaskGenerator::new(config);
        self
    }

    pub fn plan_config(&self) -> PlanConfig {
        *self.plan_generator.config()
    }

    pub fn task_config(&self) -> TaskConfig {
        *self.task_generator.config()
    }

    /// Appends scope items. Order is kept.
    pub fn with_scope<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intent.scope.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_constraints<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intent.constraints.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_verification<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intent.verification.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_tags<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intent.tags.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn with_priority(&mut self, priority: Priority) -> &mut Self {
        self.intent.priority = priority;
        self
    }

    pub fn with_context(&mut self, context: impl Into<String>) -> &mut Self {
        self.intent.context = Some(context.into());
        self
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// Mutable access for external tools that drive the remaining lifecycle
    /// states directly.
    pub fn intent_mut(&mut self) -> &mut Intent {
        &mut self.intent
    }

    pub fn into_intent(self) -> Intent {
        self.intent
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn plan_mut(&mut self) -> Option<&mut Plan> {
        self.plan.as_mut()
    }

    pub fn tasks(&self) -> Option<&TaskBreakdown> {
        self.tasks.as_ref()
    }

    pub fn tasks_mut(&mut self) -> Option<&mut TaskBreakdown> {
        self.tasks.as_mut()
    }

    pub fn checklist(&self) -> Option<&VerificationChecklist> {
        self.checklist.as_ref()
    }

    pub fn result(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    /// Validates the held intent. Does not change its status.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::Validation` carrying every violated rule.
    pub fn validate(&self) -> Result<()> {
        self.intent.ensure_valid()
    }

    /// Generates a plan from scratch, replacing any earlier one, and moves the
    /// intent to `Planned`.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::Validation` if the intent is invalid.
    pub fn create_plan(&mut self) -> Result<&Plan> {
        self.validate()?;
        let plan = self.plan_generator.generate(&self.intent)?;
        self.intent.status = IntentStatus::Planned;
        Ok(self.plan.insert(plan))
    }

    /// Generates a task breakdown from scratch. The intent status is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::Validation` if the intent is invalid.
    pub fn create_tasks(&mut self) -> Result<&TaskBreakdown> {
        self.validate()?;
        let tasks = self.task_generator.generate(&self.intent)?;
        Ok(self.tasks.insert(tasks))
    }

    /// Rebuilds the checklist from the current intent. Any marks recorded on
    /// a previous checklist are lost.
    pub fn create_checklist(&mut self) -> &VerificationChecklist {
        let checklist = self.engine.build_checklist(&self.intent);
        self.checklist.insert(checklist)
    }

    /// Returns the current checklist, building it on first use.
    fn ensure_checklist(&mut self) -> &mut VerificationChecklist {
        let engine = self.engine;
        let intent = &self.intent;
        self.checklist
            .get_or_insert_with(|| engine.build_checklist(intent))
    }

    /// Marks the first item whose criterion contains `needle` (ignoring case)
    /// as passed. Returns `false` without error when nothing matches.
    ///
    /// Only the first match is reachable: if two criteria share `needle`,
    /// the later one cannot be marked through this call.
    pub fn mark_passed(&mut self, needle: &str, notes: Option<String>) -> bool {
        self.mark(needle, CheckStatus::Passed, notes)
    }

    /// Same matching rules as [`Workflow::mark_passed`].
    pub fn mark_failed(&mut self, needle: &str, notes: Option<String>) -> bool {
        self.mark(needle, CheckStatus::Failed, notes)
    }

    /// Same matching rules as [`Workflow::mark_passed`].
    pub fn mark_skipped(&mut self, needle: &str, notes: Option<String>) -> bool {
        self.mark(needle, CheckStatus::Skipped, notes)
    }

    /// Marks one item per needle with `status` and returns the needles that
    /// matched nothing.
    pub fn mark_all(&mut self, needles: &[String], status: CheckStatus) -> Vec<String> {
        needles
            .iter()
            .filter(|needle| !self.mark(needle, status, None))
            .cloned()
            .collect()
    }

    fn mark(&mut self, needle: &str, status: CheckStatus, notes: Option<String>) -> bool {
        let matched = self.ensure_checklist().mark(needle, status, notes);
        if !matched {
            debug!("No checklist item matches '{needle}'");
        }
        matched
    }

    /// Evaluates the checklist (building it if needed) and moves the intent to
    /// `Completed` or `Failed`.
    pub fn verify(&mut self) -> &VerificationResult {
        let engine = self.engine;
        let result = engine.evaluate(self.ensure_checklist());
        self.intent.status = match result.status {
            VerificationStatus::Passed => IntentStatus::Completed,
            _ => IntentStatus::Failed,
        };
        self.result.insert(result)
    }
}
