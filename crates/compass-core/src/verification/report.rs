//! Rendering of verification results for people and tools.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{display::LocalDateTime, error::Result, models::VerificationResult};

/// Presentation format of a verification report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text, one line per check
    Text,
    /// Markdown with a results table
    #[default]
    Markdown,
    /// Complete JSON serialization of the result
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Invalid report format: {s}")),
        }
    }
}

/// Renders `result` in the requested format. Purely a view; no state changes.
///
/// Markdown is the result's own `Display` output.
///
/// # Errors
///
/// Returns `CompassError::Serialization` if JSON encoding fails.
pub fn render(result: &VerificationResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReport(result).to_string()),
        ReportFormat::Markdown => Ok(result.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// Plain-text view of a verification result, one line per check.
pub struct TextReport<'a>(pub &'a VerificationResult);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Verification report for intent {}", result.intent_id)?;
        writeln!(f, "Status: {}", result.status.as_str().to_uppercase())?;
        writeln!(f, "Verified: {}", LocalDateTime(&result.verified_at))?;
        writeln!(f)?;

        for check in &result.checks {
            let mark = if check.passed { "PASS" } else { "FAIL" };
            write!(f, "[{mark}] {}", check.criterion)?;
            if let Some(notes) = &check.notes {
                write!(f, " ({notes})")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", result.summary)?;

        if !result.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "Suggestions:")?;
            for suggestion in &result.suggestions {
                writeln!(f, "  - {suggestion}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CheckStatus, Intent, VerificationStatus},
        verification::VerificationEngine,
    };

    fn failed_result() -> VerificationResult {
        let mut intent = Intent::new("Goal");
        intent.scope = vec!["A".to_string()];
        intent.verification = vec!["Test 1".to_string(), "Test | pipes".to_string()];

        let engine = VerificationEngine::new();
        let mut checklist = engine.build_checklist(&intent);
        checklist.mark("Test 1", CheckStatus::Passed, Some("green".to_string()));
        checklist.mark("pipes", CheckStatus::Failed, None);
        engine.evaluate(&checklist)
    }

    #[test]
    fn test_text_report() {
        let output = render(&failed_result(), ReportFormat::Text).expect("render");
        assert!(output.contains("Status: FAILED"));
        assert!(output.contains("[PASS] Test 1 (green)"));
        assert!(output.contains("[FAIL] Test | pipes"));
        assert!(output.contains("Suggestions:"));
    }

    #[test]
    fn test_markdown_report_escapes_pipes() {
        let output = render(&failed_result(), ReportFormat::Markdown).expect("render");
        assert!(output.starts_with("# Verification Report"));
        assert!(output.contains("| Status | Type | Criterion | Notes |"));
        assert!(output.contains("Test \\| pipes"));
        assert!(output.contains("## Suggestions"));
    }

    #[test]
    fn test_markdown_report_matches_display() {
        let result = failed_result();
        let output = render(&result, ReportFormat::Markdown).expect("render");
        assert_eq!(output, result.to_string());
        assert_eq!(
            render(&result, ReportFormat::Text).expect("render"),
            TextReport(&result).to_string()
        );
    }

    #[test]
    fn test_json_report_is_complete() {
        let result = failed_result();
        let output = render(&result, ReportFormat::Json).expect("render");
        let decoded: VerificationResult = serde_json::from_str(&output).expect("decode");
        assert_eq!(decoded, result);
        assert_eq!(decoded.status, VerificationStatus::Failed);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
