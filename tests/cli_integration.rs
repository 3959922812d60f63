//! CLI tests run with an isolated HOME and working directory so no real
//! `.kubemon.toml` leaks in.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/payloads")
        .join(name)
}

fn kubemon(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kubemon").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .arg("--no-color");
    cmd
}

#[test]
fn test_pods_table() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .arg("pods")
        .arg(fixture("pods.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("KUBERNETES POD HEALTH REPORT"))
        .stdout(predicate::str::contains("prod/payments-api-6d4f"))
        .stdout(predicate::str::contains("web/frontend-5c8d").not());
}

#[test]
fn test_pods_table_all() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["pods", "--all"])
        .arg(fixture("pods.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("web/frontend-5c8d"));
}

#[test]
fn test_pods_json_from_stdin() {
    let home = TempDir::new().unwrap();
    let output = kubemon(&home)
        .args(["pods", "-", "--format", "json"])
        .write_stdin(fs::read_to_string(fixture("pods.json")).unwrap())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["stats"]["totalPods"], 5);
    assert_eq!(value["stats"]["restartPods"], 3);
    assert_eq!(value["stats"]["crashLoopPods"], 1);
    assert_eq!(value["stats"]["topRestartingPod"]["name"], "payments-api-6d4f");
    assert_eq!(value["pods"].as_array().unwrap().len(), 5);
}

#[test]
fn test_pods_empty_payload() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["pods", "--format", "summary"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Pods: 0"))
        .stdout(predicate::str::contains("│ Top restarting: -"));
}

#[test]
fn test_analysis_summary() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["analysis", "--format", "summary"])
        .arg(fixture("analysis.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("│ Overall risk: HIGH"))
        .stdout(predicate::str::contains("│ Unclassified: SEVERE"));
}

#[test]
fn test_analysis_table_translates_phrases() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .arg("analysis")
        .arg(fixture("analysis.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("HIGH RISK"))
        .stdout(predicate::str::contains("Sorunun nedeni"))
        .stdout(predicate::str::contains("Model: gpt-4"));
}

#[test]
fn test_analysis_raw_skips_translation() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["analysis", "--raw"])
        .arg(fixture("analysis.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("The issue is likely"))
        .stdout(predicate::str::contains("Sorunun nedeni").not());
}

#[test]
fn test_local_config_sets_default_format() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".kubemon.toml"),
        "[output]\nformat = \"summary\"\n",
    )
    .unwrap();

    kubemon(&home)
        .arg("pods")
        .arg(fixture("pods.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("▶ POD HEALTH SUMMARY"));
}

#[test]
fn test_invalid_format_fails() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["pods", "--format", "yaml"])
        .arg(fixture("pods.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'yaml'"));
}

#[test]
fn test_malformed_payload_fails() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .arg("pods")
        .write_stdin("{\"oops\": true}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON payload"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["--config", "does-not-exist.toml", "pods"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    kubemon(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(home.path().join(".kubemon.toml").exists());

    kubemon(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    kubemon(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[sanitizer]"))
        .stdout(predicate::str::contains("format = \"table\""));
}
