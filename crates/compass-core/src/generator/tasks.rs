//! Expands an intent into a dependency graph of implementation tasks.
//!
//! Dependencies only ever point at tasks generated earlier, which keeps the
//! graph acyclic by construction. Verification, constraint and review tasks
//! depend on the code-changing tasks rather than on each other so sibling
//! checks never acquire an ordering between them.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    classify,
    error::Result,
    models::{ImplementationTask, Intent, TaskBreakdown, TaskProgress, TaskStatus, TaskType},
};

const VERIFICATION_TITLE_LIMIT: usize = 50;
const CONSTRAINT_TITLE_LIMIT: usize = 40;
const MAX_COMPLEXITY: u8 = 5;

/// Options for [`TaskGenerator`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TaskConfig {
    pub include_analysis_task: bool,
    pub include_constraint_verification: bool,
    pub include_final_review_task: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            include_analysis_task: true,
            include_constraint_verification: true,
            include_final_review_task: true,
        }
    }
}

/// Deterministic intent-to-tasks expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskGenerator {
    config: TaskConfig,
}

impl TaskGenerator {
    pub fn new(config: TaskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaskConfig {
        &self.config
    }

    /// Builds a task breakdown for `intent`.
    ///
    /// # Errors
    ///
    /// Returns `CompassError::Validation` when the intent is invalid.
    pub fn generate(&self, intent: &Intent) -> Result<TaskBreakdown> {
        intent.ensure_valid()?;

        let mut tasks = TaskSequence::default();

        let analysis_id = self.config.include_analysis_task.then(|| {
            tasks.push(
                TaskType::Analyze,
                "Analyze existing code",
                format!(
                    "Review the current implementation of {} before changing it.",
                    intent.scope.join(", ")
                ),
                None,
                vec![
                    "Current code structure understood".to_string(),
                    "Integration points identified".to_string(),
                    "Potential concerns documented".to_string(),
                ],
                Vec::new(),
                1,
            )
        });

        for item in &intent.scope {
            let task_type = classify::scope_task_type(item);
            let mut criteria = vec![
                format!("Changes to {item} complete"),
                "Code compiles without errors".to_string(),
            ];
            criteria.extend(
                intent
                    .constraints
                    .iter()
                    .take(2)
                    .map(|constraint| format!("Respects: {constraint}")),
            );

            tasks.push(
                task_type,
                scope_title(task_type, item),
                format!("{} as part of: {}", scope_title(task_type, item), intent.goal),
                Some(item.clone()),
                criteria,
                analysis_id.iter().cloned().collect(),
                scope_complexity(item, intent.constraints.len()),
            );
        }

        // Snapshot before verification work is added; later tasks must not
        // depend on each other.
        let impl_ids: Vec<String> = tasks
            .iter()
            .filter(|task| task.task_type.changes_code())
            .map(|task| task.id.clone())
            .collect();

        for entry in &intent.verification {
            tasks.push(
                classify::verification_task_type(entry),
                truncate(&capitalize(entry), VERIFICATION_TITLE_LIMIT),
                format!("Confirm the change satisfies: {entry}"),
                None,
                vec![
                    format!("Criterion met: {entry}"),
                    "Result recorded on the verification checklist".to_string(),
                ],
                impl_ids.clone(),
                2,
            );
        }

        if self.config.include_constraint_verification {
            for constraint in &intent.constraints {
                tasks.push(
                    TaskType::Verify,
                    format!("Verify: {}", truncate(constraint, CONSTRAINT_TITLE_LIMIT)),
                    format!("Confirm the constraint still holds: {constraint}"),
                    None,
                    vec![format!("Constraint holds: {constraint}")],
                    impl_ids.clone(),
                    1,
                );
            }
        }

        if self.config.include_final_review_task {
            let all_ids: Vec<String> = tasks.iter().map(|task| task.id.clone()).collect();
            tasks.push(
                TaskType::Review,
                "Final review",
                format!("Review the complete change against the goal: {}", intent.goal),
                None,
                vec![
                    "All implementation tasks complete".to_string(),
                    "All verification tasks pass".to_string(),
                    "All constraints verified".to_string(),
                    "Code reviewed and cleaned up".to_string(),
                ],
                all_ids,
                2,
            );
        }

        let tasks = tasks.into_inner();
        debug!(
            "Generated {} tasks ({} code-changing) for intent {}",
            tasks.len(),
            impl_ids.len(),
            intent.id
        );

        let mut breakdown = TaskBreakdown {
            intent_id: intent.id.clone(),
            goal: intent.goal.clone(),
            tasks,
            progress: TaskProgress::default(),
        };
        breakdown.recompute_progress();
        Ok(breakdown)
    }
}

/// Assigns `T1`, `T2`, ... in push order.
#[derive(Default)]
struct TaskSequence {
    tasks: Vec<ImplementationTask>,
}

impl TaskSequence {
    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        task_type: TaskType,
        title: impl Into<String>,
        description: String,
        target: Option<String>,
        acceptance_criteria: Vec<String>,
        depends_on: Vec<String>,
        complexity: u8,
    ) -> String {
        let id = format!("T{}", self.tasks.len() + 1);
        self.tasks.push(ImplementationTask {
            id: id.clone(),
            title: title.into(),
            description,
            task_type,
            status: TaskStatus::Pending,
            target,
            acceptance_criteria,
            depends_on,
            complexity,
        });
        id
    }

    fn iter(&self) -> std::slice::Iter<'_, ImplementationTask> {
        self.tasks.iter()
    }

    fn into_inner(self) -> Vec<ImplementationTask> {
        self.tasks
    }
}

fn scope_title(task_type: TaskType, item: &str) -> String {
    let name = classify::display_name(item);
    match task_type {
        TaskType::Create => format!("Create {name}"),
        TaskType::Test => format!("Update tests in {name}"),
        TaskType::Configure => format!("Update configuration in {name}"),
        TaskType::Document => format!("Update documentation in {name}"),
        _ => format!("Implement changes in {name}"),
    }
}

/// `2 + min(constraints / 2, 2)`, one more for new items, capped at 5.
fn scope_complexity(item: &str, constraint_count: usize) -> u8 {
    let mut complexity = 2 + (constraint_count / 2).min(2) as u8;
    if classify::is_new_item(item) {
        complexity += 1;
    }
    complexity.min(MAX_COMPLEXITY)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keeps the first `limit` characters, appending "..." when anything was cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(limit).collect();
        cut.push_str("...");
        cut
    }
}
