//! Per-project configuration stored in `.compass/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::{
    generator::{PlanConfig, TaskConfig},
    verification::ReportFormat,
};

/// Generator and report defaults for one project.
///
/// Every field has a default so a partial (or missing) file is fine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub plan: PlanConfig,
    pub tasks: TaskConfig,
    pub report_format: ReportFormat,
}
