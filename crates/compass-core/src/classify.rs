//! Keyword classification of free-text intent entries.
//!
//! Each table is an ordered list of `(keywords, tag)` rules evaluated top to
//! bottom against the lowercased text; the first rule with any keyword
//! contained in the text wins. Order matters: more specific keywords must
//! come before general ones (e.g. "unit test" before "test").

use crate::models::{CheckType, StepAction, TaskType};

/// An ordered rule: if any keyword is a substring, the text gets `tag`.
pub type Rule<T> = (&'static [&'static str], T);

const NEW_ITEM_MARKERS: &[&str] = &["(new)", "new "];

const PLAN_VERIFICATION_RULES: &[Rule<StepAction>] = &[
    (&["review"], StepAction::Review),
    (&["document"], StepAction::Document),
];

const SCOPE_RULES: &[Rule<TaskType>] = &[
    (NEW_ITEM_MARKERS, TaskType::Create),
    (&["test"], TaskType::Test),
    (&["config", "setting"], TaskType::Configure),
    (&["doc", "readme"], TaskType::Document),
];

const TASK_VERIFICATION_RULES: &[Rule<TaskType>] = &[
    (&["test"], TaskType::Test),
    (&["review"], TaskType::Review),
    (&["document"], TaskType::Document),
];

const CHECK_RULES: &[Rule<CheckType>] = &[
    (&["unit test"], CheckType::UnitTest),
    (&["integration test"], CheckType::IntegrationTest),
    (&["test"], CheckType::UnitTest),
    (&["review", "check"], CheckType::CodeReview),
    (&["lint"], CheckType::Linter),
    (&["build", "compile"], CheckType::Build),
    (&["security", "vulnerability"], CheckType::Security),
];

/// Applies `rules` to `text`, falling back to `default`.
pub fn classify<T: Copy>(text: &str, rules: &[Rule<T>], default: T) -> T {
    let text = text.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map_or(default, |(_, tag)| *tag)
}

/// True when a scope item names something that does not exist yet.
pub fn is_new_item(item: &str) -> bool {
    let item = item.to_lowercase();
    NEW_ITEM_MARKERS.iter().any(|marker| item.contains(marker))
}

/// Scope item with any `(new)` marker removed.
pub fn display_name(item: &str) -> String {
    match item.to_ascii_lowercase().find("(new)") {
        Some(pos) => format!("{}{}", &item[..pos], &item[pos + "(new)".len()..])
            .trim()
            .to_string(),
        None => item.trim().to_string(),
    }
}

/// Plan step action for a verification entry.
pub fn plan_step_action(entry: &str) -> StepAction {
    classify(entry, PLAN_VERIFICATION_RULES, StepAction::Test)
}

/// Task type for a scope item.
pub fn scope_task_type(item: &str) -> TaskType {
    classify(item, SCOPE_RULES, TaskType::Implement)
}

/// Task type for a verification entry.
pub fn verification_task_type(entry: &str) -> TaskType {
    classify(entry, TASK_VERIFICATION_RULES, TaskType::Verify)
}

/// Checklist item type for a verification entry.
pub fn check_type(entry: &str) -> CheckType {
    classify(entry, CHECK_RULES, CheckType::Manual)
}
