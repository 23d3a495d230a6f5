//! Deterministic generators turning a validated intent into work items.
//!
//! Both generators are pure functions of an [`Intent`](crate::models::Intent)
//! and their configuration: the same input always yields the same step and
//! task structure (only freshly minted ids and timestamps differ). They share
//! no state and may run concurrently on distinct intents.
//!
//! - [`plan`]: ordered [`Plan`](crate::models::Plan) of typed steps
//! - [`tasks`]: [`TaskBreakdown`](crate::models::TaskBreakdown) with
//!   dependencies and acceptance criteria

pub mod plan;
pub mod tasks;

pub use plan::{PlanConfig, PlanGenerator};
pub use tasks::{TaskConfig, TaskGenerator};
