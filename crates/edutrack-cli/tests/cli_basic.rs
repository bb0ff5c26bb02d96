//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let home = tempfile::tempdir().expect("Failed to create temp home");
    run_cli_in(home.path(), args)
}

fn run_cli_in(home: &std::path::Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_edutrack"))
        .args(args)
        .env("HOME", home)
        .env_remove("EDUTRACK_ENV")
        .env_remove("EDUTRACK_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_validate_email() {
    let (code, stdout, _) = run_cli(&["validate", "email", "alex@upp.edu.mx"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["valid"], true);

    let (code, stdout, _) = run_cli(&["validate", "email", "alex upp"]);
    assert_eq!(code, 0, "an invalid value is still a successful command");
    assert_eq!(json(&stdout)["valid"], false);
}

#[test]
fn test_validate_strength() {
    let (code, stdout, _) = run_cli(&["validate", "strength", "Abcdef12!xyz"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["strength"], 100);
}

#[test]
fn test_xp_reward() {
    let (code, stdout, _) = run_cli(&["xp", "reward", "high"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["xp_reward"], 50);
}

#[test]
fn test_xp_next_level() {
    let (code, stdout, _) = run_cli(&["xp", "next-level", "5"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["xp_for_next_level"], 350);
}

#[test]
fn test_task_list_pending() {
    let (code, stdout, _) = run_cli(&["task", "list", "--filter", "pending"]);
    assert_eq!(code, 0, "Task list failed");
    let ids: Vec<_> = json(&stdout)
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["1", "2", "4"]);
}

#[test]
fn test_task_toggle_with_subtasks_fails() {
    let (code, _, stderr) = run_cli(&["task", "toggle", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_task_toggle_unknown_fails() {
    let (code, _, stderr) = run_cli(&["task", "toggle", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Task not found: nope"));
}

#[test]
fn test_task_toggle_subtask() {
    let (code, stdout, _) = run_cli(&["task", "toggle-subtask", "3", "1"]);
    assert_eq!(code, 0, "Subtask toggle failed");
    let out = json(&stdout);
    assert_eq!(out["task"]["completed"], false);
    assert_eq!(out["current_xp"], 340);
}

#[test]
fn test_notification_read_all() {
    let (code, stdout, _) = run_cli(&["notification", "read-all"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["unread_count"], 0);
}

#[test]
fn test_profile_show() {
    let (code, stdout, _) = run_cli(&["profile", "show"]);
    assert_eq!(code, 0);
    let out = json(&stdout);
    assert_eq!(out["user"]["current_level"], 5);
    assert_eq!(out["level_up_pending"], true);
    assert_eq!(out["badges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_calendar_day() {
    let (code, stdout, _) = run_cli(&["calendar", "day", "2026-10-14"]);
    assert_eq!(code, 0);
    assert_eq!(json(&stdout)["weekday"], "Wed");
}

#[test]
fn test_calendar_month() {
    let (code, stdout, _) = run_cli(&["calendar", "month", "--year", "2028", "--month", "2"]);
    assert_eq!(code, 0);
    let grid = json(&stdout);
    assert_eq!(grid["year"], 2028);
    assert_eq!(grid["days_in_month"], 29);
}

#[test]
fn test_calendar_month_out_of_range() {
    for year in ["2000000000", "500000", "-2000000000"] {
        let year_arg = format!("--year={year}");
        let (code, stdout, stderr) = run_cli(&["calendar", "month", year_arg.as_str(), "--month", "1"]);
        assert_eq!(code, 1, "year {year} should be rejected");
        assert!(stdout.is_empty());
        assert!(stderr.contains("error:"), "stderr: {stderr}");
    }

    let (code, _, stderr) = run_cli(&["calendar", "month", "--month", "13"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("month must be between 1 and 12"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let home = tempfile::tempdir().expect("Failed to create temp home");
    let output = Command::new(env!("CARGO_BIN_EXE_edutrack"))
        .args(["calendar", "month", "--year", "2027", "--month", "1"])
        .env("HOME", home.path())
        .env_remove("EDUTRACK_ENV")
        .env("EDUTRACK_LOG", "debug")
        .output()
        .expect("Failed to execute CLI command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("shifting calendar"), "stderr: {stderr}");
    assert_eq!(json(&stdout)["month"], 1);

    let (_, _, quiet) = run_cli(&["calendar", "month", "--year", "2027", "--month", "1"]);
    assert!(!quiet.contains("shifting calendar"));
}

#[test]
fn test_config_init_set_get() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli_in(home.path(), &["config", "init"]);
    assert_eq!(code, 0, "Config init failed");
    let (code, _, _) = run_cli_in(home.path(), &["config", "init"]);
    assert_eq!(code, 1, "second init without --force must fail");

    let (code, _, _) =
        run_cli_in(home.path(), &["config", "set", "gamification.xp_high_priority", "80"]);
    assert_eq!(code, 0);
    let (code, stdout, _) =
        run_cli_in(home.path(), &["config", "get", "gamification.xp_high_priority"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "80");

    let (_, stdout, _) = run_cli_in(home.path(), &["xp", "reward", "high"]);
    assert_eq!(json(&stdout)["xp_reward"], 80);
}

#[test]
fn test_config_get_unknown_key() {
    let (code, _, stderr) = run_cli(&["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}
