//! Display implementations for domain models.
//!
//! All models render as markdown for the terminal renderer and MCP clients.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        CheckStatus, ChecklistItem, ImplementationTask, Intent, IntentStatus, Plan, PlanStatus,
        PlanStep, Priority, StepStatus, TaskBreakdown, TaskStatus, VerificationChecklist,
        VerificationResult, VerificationStatus,
    },
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    IntentStatus,
    Priority,
    PlanStatus,
    StepStatus,
    TaskStatus,
    CheckStatus,
    VerificationStatus,
);

fn write_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    if items.is_empty() {
        writeln!(f, "None.")?;
    } else {
        for item in items {
            writeln!(f, "- {item}")?;
        }
    }
    writeln!(f)
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Status: {}", self.status)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(created) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created))?;
        }

        if let Some(context) = &self.context {
            writeln!(f)?;
            writeln!(f, "{context}")?;
        }
        writeln!(f)?;

        write_list(f, "Scope", &self.scope)?;
        write_list(f, "Constraints", &self.constraints)?;
        write_list(f, "Verification", &self.verification)
    }
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. [{}] {} ({})",
            self.number,
            self.action.as_str(),
            self.description,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(target) = &self.target {
            writeln!(f, "- Target: {target}")?;
        }
        if let Some(outcome) = &self.expected_outcome {
            writeln!(f, "- Expected: {outcome}")?;
        }
        if self.target.is_some() || self.expected_outcome.is_some() {
            writeln!(f)?;
        }

        if let Some(details) = &self.details {
            writeln!(f, "{details}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.progress();

        writeln!(f, "# Plan {}: {}", self.id, self.summary)?;
        writeln!(f)?;
        writeln!(f, "- Intent: {}", self.intent_id)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Progress: {}/{} steps", progress.completed, progress.total)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        if self.steps.is_empty() {
            writeln!(f, "No steps in this plan.")?;
            writeln!(f)?;
        } else {
            writeln!(f, "## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        write_list(f, "Affected Files", &self.affected_files)?;
        write_list(f, "Risks", &self.risks)?;
        if !self.dependencies.is_empty() {
            write_list(f, "Dependencies", &self.dependencies)?;
        }
        Ok(())
    }
}

impl fmt::Display for ImplementationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} [{}] ({})",
            self.id,
            self.title,
            self.task_type.as_str(),
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(target) = &self.target {
            writeln!(f, "- Target: {target}")?;
        }
        writeln!(f, "- Complexity: {}/5", self.complexity)?;
        if !self.depends_on.is_empty() {
            writeln!(f, "- Depends on: {}", self.depends_on.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if !self.acceptance_criteria.is_empty() {
            writeln!(f, "#### Acceptance")?;
            writeln!(f)?;
            let mark = if self.status.is_done() { "x" } else { " " };
            for criterion in &self.acceptance_criteria {
                writeln!(f, "- [{mark}] {criterion}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TaskBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = &self.progress;

        writeln!(f, "# Tasks: {}", self.goal)?;
        writeln!(f)?;
        writeln!(f, "- Intent: {}", self.intent_id)?;
        writeln!(
            f,
            "- Progress: {}/{} complete ({}%)",
            progress.completed, progress.total, progress.percentage
        )?;
        if progress.in_progress > 0 {
            writeln!(f, "- In progress: {}", progress.in_progress)?;
        }
        if progress.blocked > 0 {
            writeln!(f, "- Blocked: {}", progress.blocked)?;
        }
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "No tasks in this breakdown.");
        }
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.status {
            CheckStatus::Pending => " ",
            CheckStatus::Passed => "x",
            CheckStatus::Failed => "!",
            CheckStatus::Skipped => "~",
        };
        write!(f, "- [{mark}] {} ({})", self.criterion, self.check_type.as_str())?;
        if let Some(notes) = &self.notes {
            write!(f, " - {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for VerificationChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Verification Checklist")?;
        writeln!(f)?;
        writeln!(f, "- Intent: {}", self.intent_id)?;
        writeln!(
            f,
            "- Passed: {}/{}",
            self.count(CheckStatus::Passed),
            self.items.len()
        )?;
        writeln!(
            f,
            "- Complete: {}",
            if self.is_complete() { "yes" } else { "no" }
        )?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "No verification criteria or constraints.");
        }
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Verification Report")?;
        writeln!(f)?;
        writeln!(f, "- Intent: {}", self.intent_id)?;
        writeln!(f, "- Status: **{}**", self.status)?;
        writeln!(f, "- Verified: {}", LocalDateTime(&self.verified_at))?;
        writeln!(f)?;

        if self.checks.is_empty() {
            writeln!(f, "No checks recorded.")?;
        } else {
            writeln!(f, "| Status | Type | Criterion | Notes |")?;
            writeln!(f, "|--------|------|-----------|-------|")?;
            for check in &self.checks {
                writeln!(
                    f,
                    "| {} | {} | {} | {} |",
                    check.status.with_icon(),
                    check.check_type.as_str(),
                    escape_cell(&check.criterion),
                    check.notes.as_deref().map(escape_cell).unwrap_or_default()
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Suggestions")?;
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "- {suggestion}")?;
            }
        }
        Ok(())
    }
}

/// Keeps table cells on one row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
