//! Parameter structures for Compass operations
//!
//! Shared by the CLI and the MCP server. Each interface wraps these in its own
//! framework-specific types (clap `Args` on the CLI side, `Parameters<T>` with
//! a JSON schema on the MCP side) and converts into them, so the core stays
//! free of interface dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Intents are referenced by store name or file path. When no reference is
//! given the most recently modified intent in the store is used.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    generator::{PlanConfig, TaskConfig},
    verification::ReportFormat,
};

/// Reference to one intent document.
///
/// Used by show, generate_tasks and build_checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct IntentRef {
    /// Intent name in the store, or a path to an intent YAML file. Defaults
    /// to the most recently modified intent.
    #[serde(default)]
    pub intent: Option<String>,
}

/// Parameters for creating a new intent from a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NewIntent {
    /// Template to start from: basic, feature, bugfix, refactor or security
    #[serde(default)]
    pub template: Option<String>,
    /// File name in the store, without the `.intent.yaml` suffix
    #[serde(default)]
    pub name: Option<String>,
    /// Subject of the change, woven into the template goal
    #[serde(default)]
    pub hint: Option<String>,
}

/// Parameters for plan generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    #[serde(default)]
    pub intent: Option<String>,
    /// Omit the leading analysis step
    #[serde(default)]
    pub no_analysis: bool,
    /// Omit the trailing review step
    #[serde(default)]
    pub no_review: bool,
}

impl GeneratePlan {
    /// Applies the flags on top of a configured `PlanConfig`. Flags can only
    /// turn steps off.
    pub fn plan_config(&self, base: PlanConfig) -> PlanConfig {
        PlanConfig {
            include_analysis_step: base.include_analysis_step && !self.no_analysis,
            include_review_step: base.include_review_step && !self.no_review,
            ..base
        }
    }
}

/// Parameters for task generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateTasks {
    #[serde(default)]
    pub intent: Option<String>,
    /// Omit the leading analysis task
    #[serde(default)]
    pub no_analysis: bool,
    /// Omit the "Verify: <constraint>" tasks
    #[serde(default)]
    pub no_constraint_checks: bool,
}

impl GenerateTasks {
    pub fn task_config(&self, base: TaskConfig) -> TaskConfig {
        TaskConfig {
            include_analysis_task: base.include_analysis_task && !self.no_analysis,
            include_constraint_verification: base.include_constraint_verification
                && !self.no_constraint_checks,
            ..base
        }
    }
}

/// Parameters for a verification run.
///
/// Each entry in `passed`, `failed` and `skipped` is matched
/// case-insensitively as a substring against checklist criteria; the first
/// matching item is marked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VerifyIntent {
    #[serde(default)]
    pub intent: Option<String>,
    /// Criteria that passed
    #[serde(default)]
    pub passed: Vec<String>,
    /// Criteria that failed
    #[serde(default)]
    pub failed: Vec<String>,
    /// Criteria that were not checked
    #[serde(default)]
    pub skipped: Vec<String>,
    /// Report format: text, markdown or json. Defaults to the project config.
    #[serde(default)]
    pub format: Option<String>,
}

impl VerifyIntent {
    /// Parses the requested format, falling back to `default`.
    pub fn report_format(&self, default: ReportFormat) -> Result<ReportFormat, String> {
        match &self.format {
            Some(format) => format.parse(),
            None => Ok(default),
        }
    }
}
