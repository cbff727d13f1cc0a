// tests/cli_tests.rs

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::error::Error;
use std::io::Write;

type TestResult = Result<(), Box<dyn Error>>;

/// The binary with no inherited overrides.
fn qftsim() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qftsim"));
    cmd.env_remove("QFTSIM_SHOTS")
        .env_remove("QFTSIM_SEED")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn Error>> {
    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(console::strip_ansi_codes(&String::from_utf8(output)?).into_owned())
}

fn json_of(cmd: &mut Command) -> Result<Value, Box<dyn Error>> {
    Ok(serde_json::from_str(&stdout_of(cmd)?)?)
}

#[test]
fn test_cli_prints_circuit_then_statevector_then_histogram() -> TestResult {
    let out = stdout_of(qftsim().args(["--seed", "3"]))?;

    let circuit = out.find("Circuit[6 gates on 3 qubits]").ok_or("no circuit drawing")?;
    let state = out.find("Statevector:").ok_or("no statevector heading")?;
    let first_amp = out.find("|000>: +0.3536+0.0000i").ok_or("no amplitude row")?;
    let results = out.find("Results (1024 shots, seed 3):").ok_or("no results heading")?;
    let first_bar = out.find("\n000: ").ok_or("no histogram row")?;
    let last_bar = out.find("\n111: ").ok_or("no histogram row")?;

    assert!(circuit < state);
    assert!(state < first_amp);
    assert!(first_amp < results);
    assert!(results < first_bar);
    assert!(first_bar < last_bar);
    Ok(())
}

#[test]
fn test_cli_json_report_shape() -> TestResult {
    let report = json_of(qftsim().args(["--json", "--seed", "7", "--shots", "500"]))?;

    assert_eq!(report["qubits"], 3);
    let gates = report["gates"].as_array().ok_or("gates is not an array")?;
    assert_eq!(gates.len(), 6);
    assert_eq!(gates[0]["name"], "h");
    assert_eq!(gates[1]["name"], "cp");
    assert_eq!(gates[1]["label"], "P(0.5)");
    assert_eq!(gates[1]["qubits"], serde_json::json!([0, 1]));

    assert_eq!(report["result"]["shots"], 500);
    assert_eq!(report["result"]["seed"], 7);
    let counts = report["result"]["counts"].as_object().ok_or("counts is not a map")?;
    let total: u64 = counts.values().filter_map(Value::as_u64).sum();
    assert_eq!(total, 500);

    let bars = report["histogram"]["bars"].as_array().ok_or("bars is not an array")?;
    assert_eq!(bars.len(), 8);
    assert_eq!(bars[0]["bitstring"], "000");
    assert_eq!(report["histogram"]["shots"], 500);
    Ok(())
}

#[test]
fn test_cli_reads_shots_and_seed_from_environment() -> TestResult {
    let report = json_of(
        qftsim()
            .arg("--json")
            .env("QFTSIM_SHOTS", "321")
            .env("QFTSIM_SEED", "9"),
    )?;
    assert_eq!(report["result"]["shots"], 321);
    assert_eq!(report["result"]["seed"], 9);

    // flags win over the environment
    let report = json_of(
        qftsim()
            .args(["--json", "--shots", "10"])
            .env("QFTSIM_SHOTS", "321")
            .env("QFTSIM_SEED", "9"),
    )?;
    assert_eq!(report["result"]["shots"], 10);
    Ok(())
}

#[test]
fn test_cli_same_seed_same_output() -> TestResult {
    let first = stdout_of(qftsim().env("QFTSIM_SEED", "42"))?;
    let second = stdout_of(qftsim().args(["--seed", "42"]))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_cli_config_file_with_flag_override() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "shots": 200, "seed": 3 }}"#)?;
    let path = file.path().to_str().ok_or("non-utf8 temp path")?;

    let report = json_of(qftsim().args(["--json", "--config", path]))?;
    assert_eq!(report["result"]["shots"], 200);
    assert_eq!(report["result"]["seed"], 3);

    let report = json_of(qftsim().args(["--json", "--config", path, "--seed", "4"]))?;
    assert_eq!(report["result"]["shots"], 200);
    assert_eq!(report["result"]["seed"], 4);
    Ok(())
}

#[test]
fn test_cli_textbook_angles() -> TestResult {
    let out = stdout_of(qftsim().args(["-n", "2", "--angles", "pi", "--seed", "1"]))?;
    assert!(out.contains("Circuit[3 gates on 2 qubits]"));
    assert!(out.contains("P(π/2)"));
    Ok(())
}

#[test]
fn test_cli_rejects_oversized_register() {
    for n in ["25", "65"] {
        qftsim()
            .args(["-n", n])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains("at most 24"))
            .stderr(predicate::str::contains("panicked").not());
    }
}

#[test]
fn test_cli_rejects_zero_shots() {
    qftsim()
        .args(["--shots", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
