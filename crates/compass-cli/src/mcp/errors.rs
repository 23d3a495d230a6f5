//! Error handling utilities for MCP server

use compass_core::CompassError;
use rmcp::ErrorData;

/// Convert a compass error into an MCP error.
///
/// Problems with the caller's input (bad intent, unknown name) become
/// `invalid_params`; everything else is reported as an internal error.
pub fn to_mcp_error(message: &str, error: &CompassError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        CompassError::Validation { .. }
        | CompassError::Parse(_)
        | CompassError::InvalidInput { .. }
        | CompassError::IntentNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
