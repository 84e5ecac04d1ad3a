//! Integration tests for tacline CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn tacline(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tacline"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Write an input document to a per-test temporary file.
fn input_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tacline-cli-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write input");
    path
}

#[test]
fn families_command_lists_every_family() {
    let output = tacline(&["families"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("FLOT"));
    assert!(stdout.contains("BS_ELLIPSE"));
    assert!(stdout.contains("DOUBLEA"));
    // Header plus one line per family.
    assert_eq!(stdout.lines().count(), 101);
}

#[test]
fn count_command_reef_example() {
    let path = input_file("reef.json", r#"{"family": "REEF", "anchors": [[0, 0], [100, 0]]}"#);
    let output = tacline(&["count", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "14");
}

#[test]
fn count_command_reads_yaml_path_data() {
    let path = input_file("flot.yaml", "family: flot\nthickness: 1\npath: \"M 0 0 L 100 0\"\n");
    let output = tacline(&["count", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "51");
}

#[test]
fn count_command_reports_empty_input() {
    let path = input_file("empty.json", r#"{"family": "PL", "anchors": []}"#);
    let output = tacline(&["count", path.to_str().unwrap()]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-1");
}

#[test]
fn generate_command_produces_json() {
    let path = input_file("ferry.json", r#"{"family": "FERRY", "anchors": [[0, 0], [120, 40]]}"#);
    let output = tacline(&["generate", path.to_str().unwrap()]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(json["family"], "FERRY");
    assert_eq!(json["count"], 8);
    assert_eq!(json["points"].as_array().map(|a| a.len()), Some(8));
}

#[test]
fn generate_command_produces_svg() {
    let path = input_file("seize.json", r#"{"family": "SEIZE", "anchors": [[100, 100], [200, 100], [100, 200]]}"#);
    let output = tacline(&["generate", path.to_str().unwrap(), "--format", "svg"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("viewBox="), "Should have a viewBox");
    assert!(stdout.contains("<path"), "Should have path elements");
    assert!(stdout.contains("<circle"), "Seize marker should be a circle");
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn generate_command_writes_output_file() {
    let input = input_file("pl.json", r#"{"family": "PL", "anchors": [[0, 0], [50, 50], [100, 0]]}"#);
    let out = input.with_file_name("pl-out.json");
    let output = tacline(&["generate", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(output.status.success());

    let written = fs::read_to_string(&out).expect("Output file should exist");
    let json: serde_json::Value = serde_json::from_str(&written).expect("Should be valid JSON");
    assert_eq!(json["count"], 3);
}

#[test]
fn unknown_family_fails() {
    let path = input_file("bad.json", r#"{"family": "NOT_A_FAMILY", "anchors": [[0, 0], [1, 1]]}"#);
    let output = tacline(&["count", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NOT_A_FAMILY"));
}

#[test]
fn harness_command_finds_no_mismatches() {
    let output = tacline(&["harness", "-n", "2", "--seed", "5"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(json["mismatches"].as_array().map(|a| a.len()), Some(0));
}
