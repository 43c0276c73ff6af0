//! CLI-level tests for the subcommands that work without a network.

use assert_cmd::Command;
use predicates::prelude::*;

fn freeroll() -> Command {
    Command::cargo_bin("freeroll").unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-2,
        "expected ~{expected}, got {actual}"
    );
}

#[test]
fn help_lists_subcommands() {
    freeroll()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sports"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("best"))
        .stdout(predicate::str::contains("allocate"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn allocate_emits_the_expected_numbers_as_json() {
    let output = freeroll()
        .args([
            "--json",
            "allocate",
            "--odds",
            "2.5,3.2,2.8",
            "--cash",
            "100",
            "--freebet",
            "100",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let distribution = &payload["distribution"];

    assert_close(distribution["cash_profit"].as_f64().unwrap(), -6.51);
    assert_close(distribution["freebet_profit"].as_f64().unwrap(), 59.64);
    assert_close(distribution["guaranteed_profit"].as_f64().unwrap(), 53.13);
    assert_close(payload["freebet_profit_per_100"].as_f64().unwrap(), 59.64);
    assert!(payload["cash_roi"].is_null());

    let cash_stakes = distribution["cash_stakes"].as_array().unwrap();
    assert_eq!(cash_stakes.len(), 3);
    assert_close(cash_stakes[0].as_f64().unwrap(), 37.40);
}

#[test]
fn allocate_reports_a_cash_surebet() {
    let output = freeroll()
        .args(["--json", "allocate", "--odds", "2.1,1.95", "--cash", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_close(payload["cash_roi"].as_f64().unwrap(), 1.11);
    assert_close(
        payload["distribution"]["guaranteed_profit"].as_f64().unwrap(),
        1.11,
    );
}

#[test]
fn allocate_rejects_a_single_price() {
    freeroll()
        .args(["allocate", "--odds", "2.5"])
        .assert()
        .failure();
}

#[test]
fn allocate_rejects_more_than_three_prices() {
    freeroll()
        .args(["allocate", "--odds", "2.5,3.2,2.8,4.0"])
        .assert()
        .failure();
}

#[test]
fn allocate_handles_even_money_without_crashing() {
    let output = freeroll()
        .args(["--json", "allocate", "--odds", "1.0,3.2,2.8", "--freebet", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(payload["freebet_profit_per_100"].is_null());
    assert_eq!(
        payload["distribution"]["freebet_profit"].as_f64().unwrap(),
        0.0
    );
}

#[test]
fn config_init_then_validate_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    freeroll()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(dir.path().join("config.toml").exists());

    freeroll()
        .current_dir(dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "# existing\n").unwrap();

    freeroll()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure();
}

#[test]
fn config_validate_fails_on_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "provider = nope").unwrap();

    freeroll()
        .current_dir(dir.path())
        .args(["config", "validate"])
        .assert()
        .failure();
}

#[test]
fn scan_requires_a_group() {
    freeroll().arg("scan").assert().failure();
}
