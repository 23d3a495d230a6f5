//! Display formatting for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); this module
//! adds newtype wrappers for collections and result types for operations that
//! write to the store. Everything renders as markdown so the same text feeds
//! the terminal renderer and MCP tool responses.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers &    │    │   Markdown      │
//! │ (Intent, Plan)  │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (IntentEntries, Tasks)
//! - [`results`]: Operation result types (CreateResult, GenerateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Local timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use compass_core::{display::OperationStatus, models::Intent};
//!
//! let mut intent = Intent::new("Add rate limiting");
//! intent.scope = vec!["src/api/middleware.rs".to_string()];
//! intent.constraints = vec!["No new dependencies".to_string()];
//!
//! let output = intent.to_string();
//! assert!(output.starts_with("# Add rate limiting"));
//! assert!(output.contains("## Constraints\n\n- No new dependencies"));
//!
//! let status = OperationStatus::success("Store initialized");
//! assert_eq!(status.to_string(), "Success: Store initialized\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{IntentEntries, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, GenerateResult};
pub use status::OperationStatus;
