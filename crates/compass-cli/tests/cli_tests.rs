use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary project root for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and --root set
fn compass_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("compass").expect("Failed to find compass binary");
    cmd.arg("--no-color").arg("--root").arg(root.path());
    cmd
}

/// Creates the feature template intent named "login"
fn create_login_intent(root: &TempDir) {
    compass_cmd(root)
        .args(["new", "feature", "--name", "login", "--hint", "login"])
        .assert()
        .success();
}

#[test]
fn test_cli_init_is_idempotent() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Initialized store at"));
    assert!(temp_dir.path().join(".compass/config.yaml").is_file());

    compass_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_cli_list_empty_store() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No intents found."));

    // No command lists as well
    compass_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No intents found."));
}

#[test]
fn test_cli_new_and_show() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["new", "bugfix", "-n", "timeout", "--hint", "login timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created intent at"))
        .stdout(predicate::str::contains("# Fix login timeout"));
    assert!(temp_dir
        .path()
        .join(".compass/intents/timeout.intent.yaml")
        .is_file());

    compass_cmd(&temp_dir)
        .args(["show", "timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Fix login timeout"))
        .stdout(predicate::str::contains("AffectedModule"))
        .stdout(predicate::str::contains("## Problems").not());

    compass_cmd(&temp_dir)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("## timeout"))
        .stdout(predicate::str::contains("- Goal: Fix login timeout"));
}

#[test]
fn test_cli_new_refuses_existing_name() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .args(["new", "--name", "login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_cli_plan_saves_next_to_intent() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .args(["plan", "login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated plan with 4 steps, saved to"))
        .stdout(predicate::str::contains("# Plan "))
        .stdout(predicate::str::contains(
            "[modify] Implement changes in FeatureModule (new)",
        ));
    assert!(temp_dir
        .path()
        .join(".compass/intents/login.plan.yaml")
        .is_file());

    compass_cmd(&temp_dir)
        .args(["plan", "--no-analysis", "--no-review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated plan with 2 steps"));
}

#[test]
fn test_cli_tasks_and_ready() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .args(["tasks", "login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks: Add login"))
        .stdout(predicate::str::contains("### T2. Create FeatureModule"))
        .stdout(predicate::str::contains("saved to"));
    assert!(temp_dir
        .path()
        .join(".compass/intents/login.tasks.yaml")
        .is_file());

    compass_cmd(&temp_dir)
        .args(["t", "--ready"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Ready tasks: Add login"))
        .stdout(predicate::str::contains("### T1."))
        .stdout(predicate::str::contains("### T2.").not());
}

#[test]
fn test_cli_checklist() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Verification Checklist"))
        .stdout(predicate::str::contains("Passed: 0/5"))
        .stdout(predicate::str::contains(
            "- [ ] Constraint: No new dependencies",
        ));
}

#[test]
fn test_cli_verify_passes_when_every_item_passes() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .args([
            "verify",
            "login",
            "--pass",
            "unit test",
            "--pass",
            "integration test",
            "--pass",
            "document",
            "--pass",
            "backwards compatible",
            "--pass",
            "new dependencies",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: PASSED"))
        .stdout(predicate::str::contains(
            "Verification passed: 5/5 checks passed.",
        ));
}

#[test]
fn test_cli_verify_failure_exits_non_zero() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    compass_cmd(&temp_dir)
        .args([
            "v",
            "--pass",
            "unit test",
            "--fail",
            "integration",
            "--skip",
            "no such criterion",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("# Verification Report"))
        .stdout(predicate::str::contains("## Suggestions"))
        .stderr(predicate::str::contains(
            "no checklist item matches 'no such criterion'",
        ));
}

#[test]
fn test_cli_verify_json_report() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);

    let output = compass_cmd(&temp_dir)
        .args(["verify", "--format", "json"])
        .output()
        .expect("Failed to run compass");
    assert!(!output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["status"], "failed");
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_cli_invalid_intent_is_rejected() {
    let temp_dir = create_cli_test_environment();
    compass_cmd(&temp_dir).arg("init").assert().success();
    fs::write(
        temp_dir.path().join(".compass/intents/empty-scope.intent.yaml"),
        "goal: Nothing to touch\nscope: []\n",
    )
    .expect("Failed to write intent");

    compass_cmd(&temp_dir)
        .args(["show", "empty-scope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Problems"))
        .stdout(predicate::str::contains(
            "- Scope must contain at least one item",
        ));

    compass_cmd(&temp_dir)
        .args(["plan", "empty-scope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Intent validation failed"));
}

#[test]
fn test_cli_unknown_intent() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["tasks", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Intent 'missing' not found"));
}

#[test]
fn test_cli_project_config_sets_report_format() {
    let temp_dir = create_cli_test_environment();
    create_login_intent(&temp_dir);
    fs::write(
        temp_dir.path().join(".compass/config.yaml"),
        "report_format: text\n",
    )
    .expect("Failed to write config");

    compass_cmd(&temp_dir)
        .arg("verify")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Verification report for intent"));
}
