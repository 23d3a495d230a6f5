//! Data models for intents and the artefacts generated from them.
//!
//! The [`Intent`] is the only input. Everything else is derived from it and
//! carries the intent's id as a non-owning back-reference:
//!
//! - [`Plan`]: ordered [`PlanStep`]s numbered from 1
//! - [`TaskBreakdown`]: [`ImplementationTask`]s linked by `depends_on`, plus
//!   derived [`TaskProgress`]
//! - [`VerificationChecklist`]: one [`ChecklistItem`] per verification entry
//!   and constraint
//! - [`VerificationResult`]: a pass/fail snapshot of a checklist
//!
//! Display implementations live in [`crate::display::models`] so that the
//! models stay plain data.
//!
//! # Examples
//!
//! ```rust
//! use compass_core::models::Intent;
//!
//! let mut intent = Intent::new("Add logging");
//! assert!(!intent.validate().is_valid());
//!
//! intent.scope.push("AuthService".to_string());
//! assert!(intent.validate().is_valid());
//! ```

pub mod checklist;
pub mod intent;
pub mod plan;
pub mod status;
pub mod step;
pub mod task;
pub mod verification;

#[cfg(test)]
mod tests;

pub use checklist::{CheckType, ChecklistItem, VerificationChecklist, CONSTRAINT_PREFIX};
pub use intent::{Intent, ValidationResult};
pub use plan::{Plan, StepProgress};
pub use status::{
    CheckStatus, IntentStatus, PlanStatus, Priority, StepStatus, TaskStatus, VerificationStatus,
};
pub use step::{PlanStep, StepAction};
pub use task::{ImplementationTask, TaskBreakdown, TaskProgress, TaskType};
pub use verification::{CheckResult, VerificationResult};

/// Generates a short opaque identifier (8 hex characters).
pub fn short_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
