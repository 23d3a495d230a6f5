//! Task breakdown model: dependency-linked implementation tasks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Category of an implementation task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Analyze,
    Design,
    Create,
    Implement,
    Test,
    Review,
    Document,
    Configure,
    Verify,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Analyze => "analyze",
            TaskType::Design => "design",
            TaskType::Create => "create",
            TaskType::Implement => "implement",
            TaskType::Test => "test",
            TaskType::Review => "review",
            TaskType::Document => "document",
            TaskType::Configure => "configure",
            TaskType::Verify => "verify",
        }
    }

    /// Tasks of these types change code; verification work depends on them.
    pub fn changes_code(&self) -> bool {
        matches!(self, TaskType::Implement | TaskType::Create)
    }
}

/// One unit of work in a [`TaskBreakdown`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImplementationTask {
    /// `T<n>`, sequential within the breakdown
    pub id: String,

    pub title: String,

    pub description: String,

    #[serde(rename = "type")]
    pub task_type: TaskType,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    /// Ids of earlier tasks that must finish first
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Effort estimate from 1 to 5
    pub complexity: u8,
}

/// Derived status counts of a breakdown.
///
/// Skipped tasks are counted as completed so the four buckets always sum to
/// `total`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskProgress {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub blocked: usize,
    pub total: usize,
    pub percentage: u8,
}

impl TaskProgress {
    /// Full scan over `tasks`.
    pub fn compute(tasks: &[ImplementationTask]) -> Self {
        let mut progress = TaskProgress {
            total: tasks.len(),
            ..Default::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Completed | TaskStatus::Skipped => progress.completed += 1,
                TaskStatus::InProgress => progress.in_progress += 1,
                TaskStatus::Pending => progress.pending += 1,
                TaskStatus::Blocked => progress.blocked += 1,
            }
        }

        if progress.total > 0 {
            progress.percentage = (progress.completed * 100 / progress.total) as u8;
        }
        progress
    }
}

/// Dependency-aware blueprint derived from one intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskBreakdown {
    /// Back-reference to the source intent
    pub intent_id: String,

    /// Goal copied at generation time
    pub goal: String,

    #[serde(default)]
    pub tasks: Vec<ImplementationTask>,

    #[serde(default)]
    pub progress: TaskProgress,
}

impl TaskBreakdown {
    pub fn task(&self, id: &str) -> Option<&ImplementationTask> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Recomputes `progress` from scratch and returns it.
    pub fn recompute_progress(&mut self) -> TaskProgress {
        self.progress = TaskProgress::compute(&self.tasks);
        self.progress
    }

    /// Sets a task's status and recomputes progress. Returns `false` when the
    /// id is unknown.
    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.status = status;
        self.recompute_progress();
        true
    }

    /// Pending tasks whose dependencies are all done.
    pub fn ready_tasks(&self) -> Vec<&ImplementationTask> {
        self.tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Pending)
            .filter(|task| {
                task.depends_on.iter().all(|dep| {
                    self.task(dep)
                        .map(|found| found.status.is_done())
                        .unwrap_or(false)
                })
            })
            .collect()
    }

    /// Checks that every dependency names a task appearing earlier in the
    /// list. Returns one message per offending reference.
    pub fn validate_dependencies(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut problems = Vec::new();

        for task in &self.tasks {
            for dep in &task.depends_on {
                if !seen.contains(dep.as_str()) {
                    problems.push(format!(
                        "Task {} depends on {} which is not an earlier task",
                        task.id, dep
                    ));
                }
            }
            seen.insert(task.id.as_str());
        }
        problems
    }
}
