//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. All
//! invocations pin DEFOCUS_ENV=dev so they hit the development data
//! directory, never a real install.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "defocus-cli", "--"])
        .args(args)
        .env("DEFOCUS_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_stats_show() {
    let (stdout, _stderr, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");

    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("stats show should print JSON");
    let obj = parsed.as_object().expect("stats show should print an object");
    for field in [
        "cycles_completed_today",
        "is_defocus_available",
        "is_focus_active",
        "quick_reset_active",
        "quick_reset_remaining_secs",
    ] {
        assert!(obj.contains_key(field), "missing stats field {field}");
    }
}

#[test]
fn test_stats_messages() {
    let (stdout, _stderr, code) = run_cli(&["stats", "messages"]);
    assert_eq!(code, 0, "stats messages failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_quickreset_status_is_idle_json() {
    let (stdout, _stderr, code) = run_cli(&["quickreset", "status"]);
    assert_eq!(code, 0, "quickreset status failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // Quick reset state is never persisted; a fresh process is idle.
    assert_eq!(parsed["is_active"], false);
    assert_eq!(parsed["remaining_secs"], 0);
}

#[test]
fn test_quickreset_end_is_idempotent() {
    let first = run_cli(&["quickreset", "end"]);
    let second = run_cli(&["quickreset", "end"]);
    assert_eq!(first.2, 0);
    assert_eq!(second.2, 0);
}

#[test]
fn test_quickreset_runs_to_completion() {
    let (stdout, _stderr, code) = run_cli(&["quickreset", "start", "--duration", "2"]);
    assert_eq!(code, 0, "quickreset start failed");
    assert!(stdout.contains("quick reset complete"));
    assert!(stdout.contains('0'), "countdown should reach zero");
}

#[test]
fn test_config_list_and_get() {
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());

    let (stdout, _stderr, code) = run_cli(&["config", "get", "session.focus_duration_min"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.trim().parse::<u32>().is_ok());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_stdout, stderr, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_defocus_lock_cycle() {
    // Serialized within one test: reset, then walk the whole lock cycle.
    let (_stdout, _stderr, code) = run_cli(&["session", "reset"]);
    assert_eq!(code, 0, "session reset failed");

    // Fresh state: defocus is available and a start succeeds.
    let (stdout, _stderr, code) = run_cli(&["defocus", "start", "journaling"]);
    assert_eq!(code, 0, "defocus start failed on fresh state");
    assert!(stdout.contains("defocus started"));

    // The usage lock is now engaged: a second start fails.
    let (_stdout, stderr, code) = run_cli(&["defocus", "start", "doodling"]);
    assert_ne!(code, 0, "second defocus start should be locked out");
    assert!(stderr.contains("ready to focus"));

    // Ending the defocus does not unlock.
    let (_stdout, _stderr, code) = run_cli(&["defocus", "end"]);
    assert_eq!(code, 0);
    let (stdout, _stderr, _code) = run_cli(&["defocus", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["available"], false);

    // Completing a focus session unlocks and counts the cycle.
    let (_stdout, _stderr, code) = run_cli(&["focus", "start", "--duration", "25"]);
    assert_eq!(code, 0, "focus start failed");
    let (stdout, _stderr, code) = run_cli(&["focus", "end"]);
    assert_eq!(code, 0, "focus end failed");
    assert!(stdout.contains("\"cycle_completed\": true"));

    let (stdout, _stderr, _code) = run_cli(&["defocus", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["available"], true);

    // The record on disk reflects the completed cycle.
    let (stdout, _stderr, code) = run_cli(&["session", "show"]);
    assert_eq!(code, 0);
    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["completed_cycles_today"], 1);
    assert_eq!(record["is_defocus_locked"], false);

    // Reset removes it entirely.
    let (_stdout, _stderr, code) = run_cli(&["session", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _stderr, code) = run_cli(&["session", "show"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "null");
}
