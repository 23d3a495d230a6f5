//! Canned starter intents by change category.
//!
//! Templates only seed a new document for the user to edit; the generators
//! never read them.

use std::str::FromStr;

use crate::models::{Intent, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    #[default]
    Basic,
    Feature,
    Bugfix,
    Refactor,
    Security,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Basic,
        TemplateKind::Feature,
        TemplateKind::Bugfix,
        TemplateKind::Refactor,
        TemplateKind::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Feature => "feature",
            TemplateKind::Bugfix => "bugfix",
            TemplateKind::Refactor => "refactor",
            TemplateKind::Security => "security",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(TemplateKind::Basic),
            "feature" | "feat" => Ok(TemplateKind::Feature),
            "bugfix" | "bug" | "fix" => Ok(TemplateKind::Bugfix),
            "refactor" => Ok(TemplateKind::Refactor),
            "security" | "sec" => Ok(TemplateKind::Security),
            _ => Err(format!("Invalid template: {s}")),
        }
    }
}

/// Builds a starter intent of `kind`. The `hint` names the subject of the
/// change and is woven into the goal.
pub fn template(kind: TemplateKind, hint: Option<&str>) -> Intent {
    let subject = hint.map(str::trim).filter(|h| !h.is_empty());

    let (goal, scope, constraints, verification, priority) = match kind {
        TemplateKind::Basic => (
            subject.map_or_else(|| "Describe the change".to_string(), str::to_string),
            vec!["path/to/file"],
            vec!["Existing behaviour is preserved"],
            vec!["All tests pass"],
            Priority::Medium,
        ),
        TemplateKind::Feature => (
            format!("Add {}", subject.unwrap_or("a new feature")),
            vec!["FeatureModule (new)", "ExistingService"],
            vec!["Public API stays backwards compatible", "No new dependencies"],
            vec![
                "Unit test for the new behaviour",
                "Integration test for the end-to-end flow",
                "Document the feature in the README",
            ],
            Priority::Medium,
        ),
        TemplateKind::Bugfix => (
            format!("Fix {}", subject.unwrap_or("the reported bug")),
            vec!["AffectedModule"],
            vec!["Fix is minimal and targeted"],
            vec![
                "Unit test reproducing the bug now passes",
                "Existing tests pass",
            ],
            Priority::High,
        ),
        TemplateKind::Refactor => (
            format!("Refactor {}", subject.unwrap_or("the target module")),
            vec!["TargetModule"],
            vec!["Behaviour is unchanged", "Public interfaces are unchanged"],
            vec!["All tests pass", "Code review confirms readability"],
            Priority::Low,
        ),
        TemplateKind::Security => (
            format!("Harden {}", subject.unwrap_or("the affected component")),
            vec!["AffectedComponent"],
            vec!["No secrets in logs or errors", "Inputs are validated"],
            vec![
                "Security scan reports no vulnerability",
                "Unit test for the rejected input",
                "Code review by a second maintainer",
            ],
            Priority::Critical,
        ),
    };

    let mut intent = Intent::new(goal);
    intent.scope = to_strings(&scope);
    intent.constraints = to_strings(&constraints);
    intent.verification = to_strings(&verification);
    intent.priority = priority;
    intent.tags = vec![kind.as_str().to_string()];
    intent
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_valid() {
        for kind in TemplateKind::ALL {
            let intent = template(kind, None);
            assert!(intent.validate().is_valid(), "{} template", kind.as_str());
            assert_eq!(intent.tags, vec![kind.as_str()]);
        }
    }

    #[test]
    fn test_hint_is_woven_into_goal() {
        assert_eq!(
            template(TemplateKind::Bugfix, Some("login timeout")).goal,
            "Fix login timeout"
        );
        assert_eq!(template(TemplateKind::Basic, Some("  ")).goal, "Describe the change");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("BUG".parse::<TemplateKind>(), Ok(TemplateKind::Bugfix));
        assert!("chore".parse::<TemplateKind>().is_err());
    }
}
