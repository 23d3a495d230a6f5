//! YAML encoding of intents, plans and task breakdowns.
//!
//! Parsing only checks document structure. Business rules are checked later by
//! [`Intent::validate`], so a caller can always tell "could not be parsed"
//! ([`ParseError`]) apart from "parsed but invalid".

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{ParseError, Result},
    models::{Intent, Plan, TaskBreakdown},
};

fn parse<T: DeserializeOwned>(text: &str) -> std::result::Result<T, ParseError> {
    let body = text.trim();
    if body.is_empty() || body == "---" {
        return Err(ParseError::Empty);
    }
    serde_yaml::from_str(body).map_err(|source| ParseError::Invalid { source })
}

/// Parses an intent document. A document without an `id` gets a fresh one.
pub fn parse_intent(text: &str) -> std::result::Result<Intent, ParseError> {
    parse(text)
}

/// Whether an intent document carries its own `id` key. Parsed documents
/// without one receive a fresh id that exists only in memory.
pub fn declares_id(text: &str) -> bool {
    serde_yaml::from_str::<serde_yaml::Value>(text)
        .ok()
        .and_then(|value| value.get("id").cloned())
        .is_some_and(|id| !id.is_null())
}

pub fn parse_plan(text: &str) -> std::result::Result<Plan, ParseError> {
    parse(text)
}

pub fn parse_tasks(text: &str) -> std::result::Result<TaskBreakdown, ParseError> {
    parse(text)
}

/// Serializes any document to YAML.
pub fn to_yaml<T: Serialize>(document: &T) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generator::{PlanGenerator, TaskGenerator},
        models::{IntentStatus, Priority},
    };

    const DOCUMENT: &str = r#"
id: abc12345
goal: Add structured logging
scope:
  - AuthService
  - Logger (new)
constraints:
  - Do not log secrets
verification:
  - Unit test for login logs
priority: high
tags: [observability]
"#;

    #[test]
    fn test_parse_intent_document() {
        let intent = parse_intent(DOCUMENT).expect("parse");
        assert_eq!(intent.id, "abc12345");
        assert_eq!(intent.scope, vec!["AuthService", "Logger (new)"]);
        assert_eq!(intent.priority, Priority::High);
        assert_eq!(intent.tags, vec!["observability"]);
        assert_eq!(intent.status, IntentStatus::Pending);
        assert!(intent.validate().is_valid());
    }

    #[test]
    fn test_missing_id_is_assigned() {
        let intent = parse_intent("goal: g\nscope: [A]\n").expect("parse");
        assert_eq!(intent.id.len(), 8);
        assert_eq!(intent.priority, Priority::Medium);
    }

    #[test]
    fn test_declares_id() {
        assert!(declares_id(DOCUMENT));
        assert!(!declares_id("goal: g\nscope: [A]\n"));
        assert!(!declares_id("id:\ngoal: g\n"));
        assert!(!declares_id("goal: [unclosed"));
    }

    #[test]
    fn test_empty_input_is_distinct() {
        assert!(matches!(parse_intent(""), Err(ParseError::Empty)));
        assert!(matches!(parse_intent("  \n---\n"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_structurally_invalid_input() {
        assert!(matches!(
            parse_intent("goal: [unclosed"),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(
            parse_intent("scope: not-a-list"),
            Err(ParseError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parsed_but_invalid_document() {
        let intent = parse_intent("goal: ''\nscope: []\n").expect("parse");
        let validation = intent.validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 2);
    }

    #[test]
    fn test_generated_documents_survive_yaml() {
        let intent = parse_intent(DOCUMENT).expect("parse");

        let plan = PlanGenerator::default().generate(&intent).expect("plan");
        assert_eq!(parse_plan(&to_yaml(&plan).expect("yaml")).expect("plan"), plan);

        let tasks = TaskGenerator::default().generate(&intent).expect("tasks");
        assert_eq!(parse_tasks(&to_yaml(&tasks).expect("yaml")).expect("tasks"), tasks);

        let again = parse_intent(&to_yaml(&intent).expect("yaml")).expect("intent");
        assert_eq!(again, intent);
    }
}
