//! One-line confirmations for CLI and MCP responses.

use std::fmt;

/// A success or failure message, rendered with a leading label.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Store initialized");
        assert_eq!(success.to_string(), "Success: Store initialized\n");

        let failure = OperationStatus::failure(format!("Intent not found: {}", "x"));
        assert!(failure.to_string().starts_with("Error:"));
    }
}
