//! Core library for Compass, an intent-driven change planner.
//!
//! An [`Intent`](models::Intent) is a YAML document stating what should
//! change (goal), where (scope), under which rules (constraints) and how to
//! prove it (verification). From it the crate derives, deterministically:
//!
//! - a [`Plan`](models::Plan) of typed, numbered steps ([`PlanGenerator`]),
//! - a [`TaskBreakdown`](models::TaskBreakdown) whose dependencies always
//!   point backwards ([`TaskGenerator`]),
//! - a [`VerificationChecklist`](models::VerificationChecklist) that the
//!   executor marks and [`VerificationEngine`] turns into a pass/fail
//!   [`VerificationResult`](models::VerificationResult).
//!
//! [`Workflow`] sequences these stages for one intent, and [`IntentStore`]
//! keeps intents and their generated documents under `.compass/` in a
//! project root.
//!
//! # Display Architecture
//!
//! Every model implements [`std::fmt::Display`] as markdown; [`display`] adds
//! collection and operation-result wrappers. The CLI renders that markdown in
//! the terminal and the MCP server returns it verbatim.
//!
//! # Quick Start
//!
//! ```rust
//! use compass_core::{codec, Workflow};
//!
//! let intent = codec::parse_intent(
//!     "goal: Add rate limiting\n\
//!      scope: [src/api/middleware.rs]\n\
//!      verification: [Unit test for rejected requests]\n",
//! )?;
//!
//! let mut workflow = Workflow::from_intent(intent);
//! let plan = workflow.create_plan()?;
//! assert_eq!(plan.steps.first().map(|step| step.number), Some(1));
//!
//! workflow.mark_passed("rejected", None);
//! assert!(workflow.verify().passed());
//! # Ok::<(), compass_core::CompassError>(())
//! ```

pub mod classify;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod store;
pub mod templates;
pub mod verification;
pub mod workflow;

// Re-export commonly used types
pub use config::ProjectConfig;
pub use display::{
    CreateResult, GenerateResult, IntentEntries, LocalDateTime, OperationStatus, Tasks,
};
pub use error::{CompassError, ParseError, Result};
pub use generator::{PlanConfig, PlanGenerator, TaskConfig, TaskGenerator};
pub use models::{
    CheckStatus, Intent, IntentStatus, Plan, PlanStatus, Priority, StepStatus,
    TaskBreakdown, TaskStatus, VerificationChecklist, VerificationResult, VerificationStatus,
};
pub use params::{GeneratePlan, GenerateTasks, IntentRef, NewIntent, VerifyIntent};
pub use store::{IntentEntry, IntentStore, StoreBuilder};
pub use templates::{template, TemplateKind};
pub use verification::{render, ReportFormat, VerificationEngine};
pub use workflow::Workflow;
