//! Result wrapper types for operations that write documents to disk.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::models::{Intent, Plan, TaskBreakdown};

/// Wrapper type for displaying a document that was created in the store.
///
/// # Examples
///
/// ```rust
/// use std::path::PathBuf;
///
/// use compass_core::{display::CreateResult, models::Intent};
///
/// let mut intent = Intent::new("Add login");
/// intent.scope = vec!["src/auth.rs".to_string()];
///
/// let result = CreateResult::new(intent, PathBuf::from(".compass/intents/login.intent.yaml"));
/// let output = result.to_string();
/// assert!(output.starts_with("Created intent at .compass/intents/login.intent.yaml"));
/// assert!(output.contains("# Add login"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
    pub path: PathBuf,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T, path: PathBuf) -> Self {
        Self { resource, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CreateResult<Intent> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created intent at {}", self.path.display())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a generated document and where it was saved.
///
/// The path is optional because MCP tools return generated documents without
/// writing them.
pub struct GenerateResult<T> {
    pub resource: T,
    pub path: Option<PathBuf>,
}

impl<T> GenerateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            path: None,
        }
    }

    pub fn saved(resource: T, path: PathBuf) -> Self {
        Self {
            resource,
            path: Some(path),
        }
    }
}

impl fmt::Display for GenerateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            writeln!(
                f,
                "Generated plan with {} steps, saved to {}",
                self.resource.steps.len(),
                path.display()
            )?;
            writeln!(f)?;
        }
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for GenerateResult<TaskBreakdown> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            writeln!(
                f,
                "Generated {} tasks, saved to {}",
                self.resource.tasks.len(),
                path.display()
            )?;
            writeln!(f)?;
        }
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{PlanGenerator, TaskGenerator};

    fn create_test_intent() -> Intent {
        let mut intent = Intent::new("Add caching");
        intent.scope = vec!["CacheLayer (new)".to_string(), "src/api.rs".to_string()];
        intent.verification = vec!["Unit test for cache hits".to_string()];
        intent
    }

    #[test]
    fn test_generate_result_with_path() {
        let plan = PlanGenerator::default()
            .generate(&create_test_intent())
            .unwrap();
        let steps = plan.steps.len();
        let output = GenerateResult::saved(plan, PathBuf::from("x.plan.yaml")).to_string();

        assert!(output.starts_with(&format!(
            "Generated plan with {steps} steps, saved to x.plan.yaml"
        )));
        assert!(output.contains("## Steps"));
    }

    #[test]
    fn test_generate_result_without_path() {
        let tasks = TaskGenerator::default()
            .generate(&create_test_intent())
            .unwrap();
        let output = GenerateResult::new(tasks).to_string();

        assert!(output.starts_with("# Tasks: Add caching"));
        assert!(!output.contains("saved to"));
    }
}
