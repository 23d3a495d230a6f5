//! MCP server implementation for Compass
//!
//! Exposes intent planning and verification to AI assistants over the Model
//! Context Protocol. Tools read intents from the store and return markdown;
//! they never modify files.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use compass_core::IntentStore;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{GeneratePlan, GenerateTasks, IntentRef, McpResult, VerifyIntent};

const INSTRUCTIONS: &str = r#"Compass turns a change intent into an implementation plan, a dependency-ordered task breakdown and a verification checklist.

## Core Concepts
- **Intent**: a YAML document under `.compass/intents/` with a goal, scope (files or components, suffix " (new)" for ones to create), constraints and verification criteria
- **Plan**: numbered steps (analysis, one per scope item, review) with affected files and risks
- **Tasks**: T1, T2, ... with types, complexity 1-5 and dependencies that always point to earlier tasks
- **Checklist**: one item per verification criterion plus one per constraint

## Workflow
1. `list_intents` to find the intent, `show_intent` to read it
2. `generate_plan` and `generate_tasks` to decide how to implement it
3. `build_checklist` to see what has to be proven
4. `verify_intent` with the criteria that passed, failed or were skipped

## Verification Rules
- Each entry in passed/failed/skipped marks the first checklist item whose criterion contains it, ignoring case
- Verification passes only when every item passed; skipped and unmarked items fail it
- Entries that match nothing are reported as warnings

Omit `intent` to use the most recently modified intent."#;

/// MCP server for Compass
#[derive(Clone)]
pub struct CompassMcpServer {
    store: Arc<IntentStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CompassMcpServer {
    pub fn new(store: IntentStore) -> Self {
        Self {
            store: Arc::new(store),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.store.clone())
    }

    #[tool(
        name = "list_intents",
        description = "List intents in the project store with their goals and file paths. Use the name with other tools to select an intent."
    )]
    async fn list_intents(&self) -> McpResult {
        self.handlers().list_intents()
    }

    #[tool(
        name = "show_intent",
        description = "Show an intent's goal, scope, constraints and verification criteria, plus any validation problems that would stop plan or task generation."
    )]
    async fn show_intent(&self, params: Parameters<IntentRef>) -> McpResult {
        self.handlers().show_intent(params)
    }

    #[tool(
        name = "generate_plan",
        description = "Generate an implementation plan for an intent: an analysis step, one modify step per scope item and a review step, with affected files and risks derived from the intent. Set no_analysis or no_review to drop the first or last step. The plan is returned, not saved."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params)
    }

    #[tool(
        name = "generate_tasks",
        description = "Generate a task breakdown for an intent. Tasks are numbered T1, T2, ... and only depend on earlier tasks: analysis first, one implement or create task per scope item, test tasks per verification criterion, constraint checks and a final review. Set no_analysis or no_constraint_checks to drop those tasks. The breakdown is returned, not saved."
    )]
    async fn generate_tasks(&self, params: Parameters<GenerateTasks>) -> McpResult {
        self.handlers().generate_tasks(params)
    }

    #[tool(
        name = "build_checklist",
        description = "Build the verification checklist for an intent: one item per verification criterion, typed as test, lint, build, review or manual, followed by one item per constraint. All items start pending."
    )]
    async fn build_checklist(&self, params: Parameters<IntentRef>) -> McpResult {
        self.handlers().build_checklist(params)
    }

    #[tool(
        name = "verify_intent",
        description = "Mark checklist items and evaluate them. passed, failed and skipped are lists of case-insensitive substrings; each marks the first item whose criterion contains it. Returns a report in the requested format (text, markdown or json; default from project config). Verification passes only if every item passed."
    )]
    async fn verify_intent(&self, params: Parameters<VerifyIntent>) -> McpResult {
        self.handlers().verify_intent(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CompassMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "compass".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CompassMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Starting Compass MCP server on stdio for {}",
        server.store.root().display()
    );
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
