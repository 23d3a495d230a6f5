//! MCP tool handlers implementation
//!
//! Tools never write to the store: generated plans, tasks and reports are
//! returned as markdown and the caller decides what to keep.

use std::sync::Arc;

use compass_core::{
    display::{GenerateResult, IntentEntries},
    models::CheckStatus,
    params as core, render, IntentStore, ReportFormat,
};
use log::{debug, warn};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types only derive `JsonSchema` behind the `schema` feature.
// The transparent wrapper passes deserialization straight through to the
// core type and forwards its schema, so tool signatures stay in this crate.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type IntentRef = McpParams<core::IntentRef>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type GenerateTasks = McpParams<core::GenerateTasks>;
pub type VerifyIntent = McpParams<core::VerifyIntent>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    store: Arc<IntentStore>,
}

impl McpHandlers {
    pub fn new(store: Arc<IntentStore>) -> Self {
        Self { store }
    }

    pub fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);
        let params = params.as_ref();

        let (_path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .map_err(|e| to_mcp_error("Failed to open intent", &e))?;
        let config = params.plan_config(workflow.plan_config());
        let plan = workflow
            .with_plan_config(config)
            .create_plan()
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?
            .clone();

        Ok(CallToolResult::success(vec![Content::text(
            GenerateResult::new(plan).to_string(),
        )]))
    }

    pub fn generate_tasks(&self, Parameters(params): Parameters<GenerateTasks>) -> McpResult {
        debug!("generate_tasks: {:?}", params);
        let params = params.as_ref();

        let (_path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .map_err(|e| to_mcp_error("Failed to open intent", &e))?;
        let config = params.task_config(workflow.task_config());
        let tasks = workflow
            .with_task_config(config)
            .create_tasks()
            .map_err(|e| to_mcp_error("Failed to generate tasks", &e))?
            .clone();

        Ok(CallToolResult::success(vec![Content::text(
            GenerateResult::new(tasks).to_string(),
        )]))
    }

    pub fn build_checklist(&self, Parameters(params): Parameters<IntentRef>) -> McpResult {
        debug!("build_checklist: {:?}", params);

        let (_path, mut workflow) = self
            .store
            .open(params.as_ref().intent.as_deref())
            .map_err(|e| to_mcp_error("Failed to open intent", &e))?;
        workflow
            .validate()
            .map_err(|e| to_mcp_error("Invalid intent", &e))?;

        let checklist = workflow.create_checklist();
        Ok(CallToolResult::success(vec![Content::text(
            checklist.to_string(),
        )]))
    }

    /// A failed verification is still a successful tool call; the outcome is
    /// in the report.
    pub fn verify_intent(&self, Parameters(params): Parameters<VerifyIntent>) -> McpResult {
        debug!("verify_intent: {:?}", params);
        let params = params.as_ref();

        let config = self
            .store
            .load_config()
            .map_err(|e| to_mcp_error("Failed to load config", &e))?;
        let format: ReportFormat = params
            .report_format(config.report_format)
            .map_err(|message| ErrorData::invalid_params(message, None))?;

        let (_path, mut workflow) = self
            .store
            .open(params.intent.as_deref())
            .map_err(|e| to_mcp_error("Failed to open intent", &e))?;
        workflow
            .validate()
            .map_err(|e| to_mcp_error("Invalid intent", &e))?;
        workflow.create_checklist();

        let mut unmatched = Vec::new();
        for (needles, status) in [
            (&params.passed, CheckStatus::Passed),
            (&params.failed, CheckStatus::Failed),
            (&params.skipped, CheckStatus::Skipped),
        ] {
            unmatched.extend(workflow.mark_all(needles, status));
        }

        let report = render(workflow.verify(), format)
            .map_err(|e| to_mcp_error("Failed to render report", &e))?;

        let mut content = vec![Content::text(report)];
        if !unmatched.is_empty() {
            warn!("Unmatched checklist needles: {unmatched:?}");
            let notes: Vec<String> = unmatched
                .iter()
                .map(|needle| format!("Warning: no checklist item matches '{needle}'"))
                .collect();
            content.push(Content::text(notes.join("\n")));
        }
        Ok(CallToolResult::success(content))
    }

    pub fn list_intents(&self) -> McpResult {
        debug!("list_intents");

        let entries = self
            .store
            .list()
            .map_err(|e| to_mcp_error("Failed to list intents", &e))?;
        let title = if entries.is_empty() { "No intents" } else { "Intents" };

        let result = format!("# {title}\n\n{}", IntentEntries(entries));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub fn show_intent(&self, Parameters(params): Parameters<IntentRef>) -> McpResult {
        debug!("show_intent: {:?}", params);

        let path = self
            .store
            .resolve(params.as_ref().intent.as_deref())
            .map_err(|e| to_mcp_error("Failed to find intent", &e))?;
        let intent = self
            .store
            .read(&path)
            .map_err(|e| to_mcp_error("Failed to read intent", &e))?;

        let mut result = intent.to_string();
        let validation = intent.validate();
        if !validation.is_valid() {
            result.push_str("## Problems\n\n");
            for error in &validation.errors {
                result.push_str(&format!("- {error}\n"));
            }
        }
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }
}

#[cfg(test)]
mod tests {
    use compass_core::{templates::TemplateKind, template, StoreBuilder};
    use rmcp::model::RawContent;
    use tempfile::TempDir;

    use super::*;

    fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = StoreBuilder::new()
            .with_root(Some(temp_dir.path()))
            .build()
            .expect("Failed to build store");
        store
            .create(Some("login"), &template(TemplateKind::Feature, Some("login")))
            .expect("Failed to create intent");
        (temp_dir, McpHandlers::new(Arc::new(store)))
    }

    fn params<T: serde::de::DeserializeOwned>(json: serde_json::Value) -> Parameters<T> {
        Parameters(serde_json::from_value(json).expect("valid params"))
    }

    fn text(result: &CallToolResult, index: usize) -> String {
        match &result.content[index].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_plan_returns_markdown_without_writing() {
        let (_temp_dir, handlers) = create_test_handlers();

        let result = handlers
            .generate_plan(params(serde_json::json!({ "intent": "login" })))
            .expect("plan");
        let output = text(&result, 0);
        assert!(output.starts_with("# Plan "), "{output}");
        assert!(!output.contains("saved to"));
        assert!(!handlers
            .store
            .intents_dir()
            .join("login.plan.yaml")
            .exists());
    }

    #[test]
    fn test_verify_reports_unmatched_needles_separately() {
        let (_temp_dir, handlers) = create_test_handlers();

        let result = handlers
            .verify_intent(params(serde_json::json!({
                "passed": ["nothing like this"],
                "format": "json"
            })))
            .expect("verify");
        assert_eq!(result.content.len(), 2);
        let report: serde_json::Value =
            serde_json::from_str(&text(&result, 0)).expect("json report");
        assert_eq!(report["status"], "failed");
        assert!(text(&result, 1).contains("nothing like this"));
    }

    #[test]
    fn test_unknown_intent_is_invalid_params() {
        let (_temp_dir, handlers) = create_test_handlers();

        let err = handlers
            .build_checklist(params(serde_json::json!({ "intent": "missing" })))
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_list_intents() {
        let (_temp_dir, handlers) = create_test_handlers();
        let output = text(&handlers.list_intents().expect("list"), 0);
        assert!(output.starts_with("# Intents"));
        assert!(output.contains("## login"));
    }
}
