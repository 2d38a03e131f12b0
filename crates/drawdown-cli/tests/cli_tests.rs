//! End-to-end tests for the drawdown binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn drawdown() -> Command {
    let mut cmd = Command::cargo_bin("drawdown").unwrap();
    cmd.env_remove("DRAWDOWN_CONFIG")
        .env_remove("DRAWDOWN_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn value_of_reference_portfolio() {
    drawdown()
        .args(["--format", "minimal", "value"])
        .assert()
        .success()
        .stdout("15400.00\n");
}

#[test]
fn value_table_lists_holdings() {
    drawdown()
        .arg("value")
        .assert()
        .success()
        .stdout(predicate::str::contains("AAPL"))
        .stdout(predicate::str::contains("TSLA"))
        .stdout(predicate::str::contains("15400.00"));
}

#[test]
fn market_lists_fixture() {
    drawdown()
        .args(["--format", "minimal", "market"])
        .assert()
        .success()
        .stdout("AAPL 185.00\nAMZN 145.00\nGOOG 135.00\nTSLA 240.00\n");
}

#[test]
fn simulate_zero_volatility_has_no_drawdown() {
    drawdown()
        .args(["--seed", "1", "--format", "minimal", "simulate"])
        .args(["--volatility", "0", "--simulations", "20"])
        .assert()
        .success()
        .stdout("0.00%\n");
}

#[test]
fn simulate_json_is_reproducible() {
    let run = || {
        let output = drawdown()
            .args(["--seed", "42", "--format", "json", "simulate", "-n", "200"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first["initial_value"], 15_400.0);
    assert_eq!(first["seed"], 42);
    assert_eq!(first["simulations"], 200);
    let drawdown = first["max_drawdown_pct"].as_f64().unwrap();
    assert!(drawdown > 0.0 && drawdown < 100.0);
}

#[test]
fn seed_from_environment() {
    let output = drawdown()
        .env("DRAWDOWN_SEED", "5")
        .args(["--format", "json", "simulate", "-n", "10"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["seed"], 5);
}

#[test]
fn assess_prints_classification() {
    drawdown()
        .args(["--seed", "7", "assess", "-n", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial Value"))
        .stdout(predicate::str::contains("15400.00"))
        .stdout(
            predicate::str::contains("High Risk").or(predicate::str::contains("Risk Acceptable")),
        );
}

#[test]
fn assess_extreme_volatility_is_high_risk() {
    drawdown()
        .args(["--seed", "3", "--format", "minimal", "assess"])
        .args(["-n", "500", "--stress-vol", "0.5"])
        .assert()
        .success()
        .stdout("High Risk\n");
}

#[test]
fn assess_calm_market_is_acceptable() {
    drawdown()
        .args(["--seed", "3", "--format", "minimal", "assess"])
        .args(["-n", "50", "--normal-vol", "0", "--stress-vol", "0"])
        .assert()
        .success()
        .stdout("Risk Acceptable\n");
}

#[test]
fn config_file_drives_portfolio() {
    let file = config_file(
        r#"
        [market]
        prices = { TSLA = 250.0 }
        instruments = [{ symbol = "MSFT", price = 400.0, category = "technology" }]

        [portfolio]
        holdings = { TSLA = 2, MSFT = 1 }
        "#,
    );
    drawdown()
        .arg("--config")
        .arg(file.path())
        .args(["--format", "minimal", "value"])
        .assert()
        .success()
        .stdout("900.00\n");
}

#[test]
fn value_handles_very_large_holdings() {
    let file = config_file(
        "[portfolio]\nholdings = { AAPL = 9223372036854775807, GOOG = 9223372036854775807, TSLA = 9 }\n",
    );
    drawdown()
        .arg("--config")
        .arg(file.path())
        .arg("value")
        .assert()
        .success()
        .stdout(predicate::str::contains("9223372036854775807"))
        .stdout(predicate::str::contains("TOTAL"));

    let output = drawdown()
        .arg("--config")
        .arg(file.path())
        .args(["--format", "json", "value"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["positions"][2]["quantity"], 9);
    assert!(document["total"].as_f64().unwrap() > 2.9e21);
}

#[test]
fn lowercase_symbols_in_config() {
    let file = config_file(
        "[market]\nprices = { tsla = 300.0 }\n\n[portfolio]\nholdings = { tsla = 2 }\n",
    );
    drawdown()
        .arg("--config")
        .arg(file.path())
        .args(["--format", "minimal", "value"])
        .assert()
        .success()
        .stdout("600.00\n");
}

#[test]
fn missing_symbol_fails() {
    let file = config_file("[portfolio]\nholdings = { NFLX = 3 }\n");
    drawdown()
        .arg("--config")
        .arg(file.path())
        .arg("value")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Symbol not found: NFLX"));
}

#[test]
fn invalid_simulation_count_fails() {
    drawdown()
        .args(["simulate", "--simulations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("simulations must be positive"));
}

#[test]
fn negative_volatility_fails() {
    drawdown()
        .args(["simulate", "--volatility=-0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("volatility"));
}

#[test]
fn malformed_config_fails() {
    let file = config_file("[simulation]\nsimulations = \"many\"\n");
    drawdown()
        .arg("--config")
        .arg(file.path())
        .arg("value")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn missing_config_fails() {
    drawdown()
        .args(["--config", "/nonexistent/drawdown.toml", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read config file"));
}
