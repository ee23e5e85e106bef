//! CLI Integration Tests
//!
//! Tests the command-line interface end-to-end.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Get the binary to test.
fn workscout() -> Command {
    Command::cargo_bin("workscout").unwrap()
}

/// A temp project with a React/Express/Jest stack and matching layout.
fn full_stack_project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();

    temp.child("package.json")
        .write_str(
            r#"{
                "name": "demo",
                "dependencies": { "react": "^18.0.0", "express": "^4.18.0" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
        )
        .unwrap();
    temp.child("src/components/.gitkeep").write_str("").unwrap();
    temp.child("src/api/.gitkeep").write_str("").unwrap();
    temp.child("tests/.gitkeep").write_str("").unwrap();
    temp.child("README.md").write_str("# demo").unwrap();

    temp
}

// ============================================================================
// Help & Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    workscout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow discovery"));
}

#[test]
fn test_version_flag() {
    workscout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Suggest Command Tests
// ============================================================================

#[test]
fn test_suggest_full_stack_project() {
    let temp = full_stack_project();

    workscout()
        .args(["suggest", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("component-library"))
        .stdout(predicate::str::contains("react"));
}

#[test]
fn test_suggest_json_output() {
    let temp = full_stack_project();

    workscout()
        .args(["suggest", temp.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"confidence\""));
}

#[test]
fn test_suggest_category_filter() {
    let temp = full_stack_project();

    workscout()
        .args([
            "suggest",
            temp.path().to_str().unwrap(),
            "--category",
            "testing",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("testing"))
        .stdout(predicate::str::contains("component-library").not());
}

#[test]
fn test_suggest_empty_project() {
    let temp = assert_fs::TempDir::new().unwrap();

    workscout()
        .args(["suggest", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflow suggestions"));
}

// ============================================================================
// Analyze Command Tests
// ============================================================================

#[test]
fn test_analyze_reports_architecture() {
    let temp = full_stack_project();

    workscout()
        .args(["analyze", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture: full-stack"))
        .stdout(predicate::str::contains("Total dependencies: 3"));
}

#[test]
fn test_analyze_json_output() {
    let temp = full_stack_project();

    workscout()
        .args(["analyze", temp.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dependencies\""))
        .stdout(predicate::str::contains("\"structure\""));
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_workflows_lists_categories() {
    workscout()
        .arg("workflows")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontend"))
        .stdout(predicate::str::contains("component-library"));
}

#[test]
fn test_show_known_workflow() {
    workscout()
        .args(["show", "docker-setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deployment"))
        .stdout(predicate::str::contains("dockerfile"));
}

#[test]
fn test_show_unknown_workflow() {
    workscout()
        .args(["show", "no-such-workflow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No workflow named"));
}
