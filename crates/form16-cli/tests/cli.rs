use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use form16_core::pdf::fixtures;

const TAN_LINE: &str = "Tax Deduction Account Number (TAN) : ABCD12345E";

fn form16() -> Command {
    Command::cargo_bin("form16").unwrap()
}

fn write_config(dir: &TempDir) -> String {
    let path = dir.path().join("config.json");
    form16()
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();
    path.to_string_lossy().into_owned()
}

#[test]
fn extract_text_file_as_json() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("form16.txt");
    fs::write(&input, format!("FORM NO. 16\n{}\n", TAN_LINE)).unwrap();

    let output = form16()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 10);
    assert_eq!(json["tan"], TAN_LINE);
    assert_eq!(json["gross_salary"], "Not Found");
}

#[test]
fn extract_pdf_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("form16.pdf");
    fs::write(&input, fixtures::text_pdf(&["FORM NO. 16", TAN_LINE]).unwrap()).unwrap();

    form16()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCD12345E"));
}

#[test]
fn extract_with_missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("absent.json");
    let input = dir.path().join("form16.txt");
    fs::write(&input, TAN_LINE).unwrap();

    form16()
        .arg("--config")
        .arg(&config)
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCD12345E"));
    assert!(!config.exists());
}

#[test]
fn extract_text_format_and_missing_report() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("form16.txt");
    fs::write(&input, "Gross Salary 8,50,000\n").unwrap();

    form16()
        .args(["--config", &config, "extract", "--format", "text", "--show-missing"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("gross_salary"))
        .stdout(predicate::str::contains("Gross Salary 8,50,000"))
        .stderr(predicate::str::contains("9 field(s) not found"));
}

#[test]
fn extract_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("form16.txt");
    let output = dir.path().join("out.csv");
    fs::write(&input, TAN_LINE).unwrap();

    form16()
        .args(["--config", &config, "extract", "--format", "csv", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("tax_deducted_at_source,tan,"));
    assert!(csv.contains(TAN_LINE));
}

#[test]
fn extract_rejects_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("form16.docx");
    fs::write(&input, "whatever").unwrap();

    form16()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn extract_missing_input() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    form16()
        .args(["--config", &config, "extract"])
        .arg(dir.path().join("nope.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn extract_corrupt_pdf_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let input = dir.path().join("broken.pdf");
    fs::write(&input, "not a pdf").unwrap();

    form16()
        .args(["--config", &config, "extract"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse PDF"));
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    form16()
        .args(["--config", &config, "config", "get", "server.port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8000"));

    form16()
        .args(["--config", &config, "config", "set", "server.port", "9001"])
        .assert()
        .success();

    form16()
        .args(["--config", &config, "config", "get", "server.port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9001"));
}

#[test]
fn config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    form16()
        .args(["--config", &config, "config", "set", "server.colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    form16()
        .args(["config", "init", "--output", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
