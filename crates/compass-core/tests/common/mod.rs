use compass_core::{models::Intent, IntentStore, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store rooted in a fresh temporary directory
pub fn create_test_store() -> (TempDir, IntentStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StoreBuilder::new()
        .with_root(Some(temp_dir.path()))
        .build()
        .expect("Failed to create store");
    (temp_dir, store)
}

/// A valid intent touching two existing components and one new one
#[allow(dead_code)]
pub fn create_test_intent(goal: &str) -> Intent {
    let mut intent = Intent::new(goal);
    intent.scope = vec![
        "AuthService".to_string(),
        "Logger".to_string(),
        "AuditTrail (new)".to_string(),
    ];
    intent.constraints = vec!["No breaking API changes".to_string()];
    intent.verification = vec![
        "Unit test for login logs".to_string(),
        "Code review by security team".to_string(),
    ];
    intent
}
