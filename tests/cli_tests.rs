//! CLI surface tests - everything here runs without a live server

mod common;

use common::{schoolctl, temp_home};
use predicates::prelude::*;

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let home = temp_home();
    schoolctl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("back office"));
}

#[test]
fn test_version_displays() {
    let home = temp_home();
    schoolctl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schoolctl"));
}

#[test]
fn test_unknown_command_fails() {
    let home = temp_home();
    schoolctl(&home).arg("unknown-command").assert().failure();
}

#[test]
fn test_completions_generate_bash() {
    let home = temp_home();
    schoolctl(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("schoolctl"));
}

// ============================================================================
// Session Gating Tests
// ============================================================================

#[test]
fn test_logout_without_session_is_noop() {
    let home = temp_home();
    schoolctl(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
}

#[test]
fn test_student_list_requires_session() {
    let home = temp_home();
    schoolctl(&home)
        .args(["student", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_teacher_list_requires_session() {
    let home = temp_home();
    schoolctl(&home)
        .args(["teacher", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_ledger_list_requires_session() {
    let home = temp_home();
    schoolctl(&home)
        .args(["ledger", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_data_sample_requires_session() {
    let home = temp_home();
    schoolctl(&home)
        .args(["data", "sample"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

// ============================================================================
// Argument Validation Tests
// ============================================================================

#[test]
fn test_student_show_rejects_bad_id() {
    let home = temp_home();
    schoolctl(&home)
        .args(["student", "show", "not-a-guid"])
        .assert()
        .failure();
}

#[test]
fn test_ledger_add_rejects_bad_type() {
    let home = temp_home();
    schoolctl(&home)
        .args(["ledger", "add", "--name", "Cash", "--type", "equity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid account type"));
}

#[test]
fn test_teacher_list_rejects_bad_class_id() {
    let home = temp_home();
    schoolctl(&home)
        .args(["teacher", "list", "--class", "not-a-guid"])
        .assert()
        .failure();
}

#[test]
fn test_teacher_list_accepts_repeated_assignment_filters() {
    let home = temp_home();
    // Flags parse; the command then stops at the missing session, offline
    schoolctl(&home)
        .args([
            "teacher",
            "list",
            "--class",
            "11111111-1111-1111-1111-111111111111",
            "--subject",
            "22222222-2222-2222-2222-222222222222",
            "--subject",
            "33333333-3333-3333-3333-333333333333",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_student_list_rejects_bad_format() {
    let home = temp_home();
    schoolctl(&home)
        .args(["student", "list", "--format", "xml"])
        .assert()
        .failure();
}
