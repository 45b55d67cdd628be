//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated data directory and verify
//! outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_focusblocks-cli"))
        .args(args)
        .env("FOCUSBLOCKS_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_simulate_text_summary() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["simulate", "--target", "2"]);
    assert_eq!(code, 0, "simulate failed");
    assert!(stdout.starts_with("100 days, seed 12345"));
    assert!(stdout.contains("Success rate: 92.0%"));
    assert!(stdout.contains("Session   Mean/day   Days with one"));
}

#[test]
fn test_simulate_json_reports_full_batch() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["simulate", "--target", "2", "--json"]);
    assert_eq!(code, 0, "simulate --json failed");

    let report = parse_json(&stdout);
    assert_eq!(report["success_rate"].as_f64(), Some(0.92));
    assert_eq!(report["persona"].as_str(), Some("maker"));
    assert_eq!(report["summary"]["day_count"].as_u64(), Some(100));
    assert_eq!(report["days"].as_array().map(|d| d.len()), Some(100));
}

#[test]
fn test_simulate_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let args = ["simulate", "--days", "5", "--seed", "-9", "--json"];
    let (_, first, _) = run_cli(dir.path(), &args);
    let (_, second, _) = run_cli(dir.path(), &args);
    assert_eq!(first, second);
    assert_eq!(parse_json(&first)["days"].as_array().map(|d| d.len()), Some(5));
}

#[test]
fn test_simulate_random_seed_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(
        dir.path(),
        &["simulate", "--random-seed", "--days", "3", "--json"],
    );
    assert_eq!(code, 0);
    let seed = parse_json(&stdout)["parameters"]["seed"].as_i64().unwrap();
    assert!((0..1_000_000).contains(&seed));

    let (code, _, _) = run_cli(dir.path(), &["simulate", "--random-seed", "--seed", "1"]);
    assert_ne!(code, 0);
}

#[test]
fn test_day_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["day", "0"]);
    assert_eq!(code, 0, "day failed");
    assert!(stdout.contains("Interruptions: 14"));
    assert!(stdout.contains("9:00am"));
}

#[test]
fn test_day_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["day", "1", "--json"]);
    assert_eq!(code, 0);
    let day = parse_json(&stdout);
    assert_eq!(day["day_index"].as_u64(), Some(1));
    assert_eq!(day["interruption_count"].as_u64(), Some(6));
}

#[test]
fn test_day_opens_on_linked_day() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["day", "--link", "?day=1", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout)["interruption_count"].as_u64(), Some(6));
}

#[test]
fn test_day_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["day", "10", "--days", "10"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_invalid_rate_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["simulate", "--rate=-1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("interruptions_per_hour"));
}

#[test]
fn test_odds_text_table() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["odds", "--max-target", "3"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].ends_with("60m"));
    assert!(lines[4].ends_with("79%"));
}

#[test]
fn test_odds_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["odds", "--max-target", "3", "--json"]);
    assert_eq!(code, 0);
    let rows = parse_json(&stdout);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 9);
    let sixty_three = rows
        .iter()
        .find(|r| r["threshold_minutes"] == 60 && r["target_block_count"] == 3)
        .unwrap();
    assert_eq!(sixty_three["success_rate"].as_f64(), Some(0.79));
}

#[test]
fn test_persona_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["persona", "list"]);
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout).as_array().map(|p| p.len()), Some(5));
}

#[test]
fn test_link_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (code, query, _) = run_cli(dir.path(), &["link", "encode", "--persona", "executive"]);
    assert_eq!(code, 0);
    assert_eq!(query.trim(), "lambda=3.0&delta=25&len=60&target=1&seed=12345&days=100");

    let (code, stdout, _) = run_cli(dir.path(), &["link", "decode", query.trim()]);
    assert_eq!(code, 0);
    let params = parse_json(&stdout);
    assert_eq!(params["interruptions_per_hour"].as_f64(), Some(3.0));
    assert_eq!(params["recovery_minutes"].as_f64(), Some(25.0));
}

#[test]
fn test_link_keeps_fine_rate_and_day() {
    let dir = tempfile::tempdir().unwrap();
    let (code, query, _) = run_cli(
        dir.path(),
        &["link", "encode", "--rate", "0.35", "--recovery", "7.5", "--day", "3"],
    );
    assert_eq!(code, 0);
    assert_eq!(query.trim(), "lambda=0.35&delta=7.5&len=60&target=1&seed=12345&days=100&day=3");

    let (_, stdout, _) = run_cli(dir.path(), &["link", "decode", query.trim()]);
    let params = parse_json(&stdout);
    assert_eq!(params["interruptions_per_hour"].as_f64(), Some(0.35));
    assert_eq!(params["selected_day"].as_u64(), Some(3));

    let (code, _, _) = run_cli(dir.path(), &["link", "encode", "--day", "100"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_changes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "simulation.day_count", "7"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (_, value, _) = run_cli(dir.path(), &["config", "get", "simulation.day_count"]);
    assert_eq!(value.trim(), "7");

    let (_, stdout, _) = run_cli(dir.path(), &["simulate", "--json"]);
    assert_eq!(parse_json(&stdout)["summary"]["day_count"].as_u64(), Some(7));
}

#[test]
fn test_config_reset_restores_every_section() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["config", "set", "heatmap.threshold_minutes", "30"]);
    let (_, value, _) = run_cli(dir.path(), &["config", "get", "heatmap.threshold_minutes"]);
    assert_eq!(value.trim(), "30.0");

    let (code, _, _) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (_, stdout, _) = run_cli(dir.path(), &["config", "list"]);
    let config = parse_json(&stdout);
    assert_eq!(config["heatmap"]["threshold_minutes"].as_f64(), Some(45.0));
    assert_eq!(config["goal"]["threshold_minutes"].as_f64(), Some(60.0));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "ui.theme", "dark"]);
    assert_ne!(code, 0);
}

#[test]
fn test_impact() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["impact", "--rate", "2", "--recovery", "15"]);
    assert_eq!(code, 0);
    let impact = parse_json(&stdout);
    assert_eq!(impact["average_gap_minutes"].as_f64(), Some(30.0));
    assert_eq!(impact["recovery_loss_per_hour"].as_f64(), Some(30.0));
}

#[test]
fn test_heatmap_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["heatmap", "--trials", "3", "--json"]);
    assert_eq!(code, 0);
    let heatmap = parse_json(&stdout);
    assert_eq!(heatmap["threshold_minutes"].as_f64(), Some(45.0));
    assert_eq!(heatmap["rows"].as_array().map(|r| r.len()), Some(6));
    assert_eq!(heatmap["rows"][0].as_array().map(|r| r.len()), Some(9));
}
