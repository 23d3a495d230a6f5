use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{IntentArgs, NewArgs, PlanArgs, TasksArgs, VerifyArgs};

/// Turn change intents into plans, task breakdowns and checklists
///
/// An intent is a small YAML document stating the goal of a change, the files
/// or components it touches, the constraints it must respect and how it will
/// be verified. Compass keeps intents under `.compass/intents/` in the project
/// root and derives implementation plans, dependency-ordered tasks and a
/// verification checklist from them. The `serve` command exposes the same
/// operations to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "compass")]
pub struct Args {
    /// Project root containing the .compass directory. Defaults to the
    /// current directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Compass CLI
///
/// Commands that take an intent name fall back to the most recently modified
/// intent when the name is omitted. Running without a command lists intents.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the .compass directory and a default config
    Init,
    /// Create a new intent from a template
    #[command(alias = "n")]
    New(NewArgs),
    /// List intents in the store
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an intent and any validation problems
    #[command(alias = "s")]
    Show(IntentArgs),
    /// Generate an implementation plan and save it next to the intent
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Generate a task breakdown and save it next to the intent
    #[command(alias = "t")]
    Tasks(TasksArgs),
    /// Show the verification checklist for an intent
    #[command(alias = "c")]
    Checklist(IntentArgs),
    /// Mark checklist items and print a verification report
    #[command(alias = "v")]
    Verify(VerifyArgs),
    /// Start the MCP server
    Serve,
}
