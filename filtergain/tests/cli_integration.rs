//! Integration tests for filtergain CLI

use std::io::Write;
use std::process::{Command, Stdio};

fn run_filtergain_with_input(args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_filtergain"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_filtergain(args: &[&str]) -> (String, String, bool) {
    run_filtergain_with_input(args, "")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_filtergain(&["--help"]);

    assert!(success);
    assert!(stdout.contains("filtergain"));
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--frequency"));
    assert!(stdout.contains("--capacitance"));
    assert!(stdout.contains("--inductance"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_filtergain(&["--version"]);

    assert!(success);
    assert!(stdout.contains("filtergain"));
}

#[test]
fn test_rc_low_pass_table() {
    let (stdout, _, success) = run_filtergain(&[
        "-t", "rc-low", "-v", "10", "-f", "0,1000", "-r", "1000", "-c", "1e-7",
    ]);

    assert!(success);
    let expected = "\
+----------------+-------------------+--------------------+---------+
| Frequency (Hz) | Input voltage (V) | Output voltage (V) | Gain    |
+----------------+-------------------+--------------------+---------+
| 0.0            | 10.0              | 10.0               | 1.0     |
| 1000.0         | 10.0              | 8.467              | 0.84673 |
+----------------+-------------------+--------------------+---------+
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_rl_high_pass_json() {
    let (stdout, _, success) = run_filtergain(&[
        "-t", "rl-high", "-v", "5", "-f", "500", "-r", "100", "-l", "0.05", "--output", "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["variant"], "rl-high-pass");
    assert_eq!(parsed["parameters"]["frequencies"][0], 500.0);
    assert_eq!(parsed["rows"][0]["output_voltage"], 4.218);
    assert_eq!(parsed["rows"][0]["gain"], 0.84356);
}

#[test]
fn test_precision_flags() {
    let (stdout, _, success) = run_filtergain(&[
        "-t",
        "rc-low",
        "-v",
        "10",
        "-f",
        "1000",
        "-r",
        "1000",
        "-c",
        "1e-7",
        "--voltage-places",
        "1",
        "--gain-places",
        "2",
    ]);

    assert!(success);
    assert!(stdout.contains("| 8.5 "));
    assert!(stdout.contains("| 0.85 "));
}

#[test]
fn test_interactive_prompts() {
    let (stdout, stderr, success) = run_filtergain_with_input(&[], "4\n5\n500\n100\n0.05\n");

    assert!(success);
    assert!(stderr.contains("Filters:"));
    assert!(stderr.contains("Enter inductance (H): "));
    assert!(stdout.contains("| 500.0 "));
    assert!(stdout.contains("4.218"));
    // prompts stay off stdout
    assert!(stdout.starts_with('+'));
}

#[test]
fn test_wrong_component_fails() {
    let (_, stderr, success) = run_filtergain(&[
        "-t", "rl-low", "-v", "5", "-f", "50", "-r", "100", "-c", "1e-6",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("take no capacitance"));
}

#[test]
fn test_unknown_filter_fails() {
    let (_, _, success) = run_filtergain(&["-t", "band-pass"]);

    assert!(!success);
}

#[test]
fn test_truncated_interactive_input_fails() {
    let (_, stderr, success) = run_filtergain_with_input(&["-t", "rc-high"], "5\n");

    assert!(!success);
    assert!(stderr.contains("Error: unexpected end of input"));
}

#[test]
fn test_out_of_range_gain_places_keep_full_precision() {
    let (stdout, _, success) = run_filtergain(&[
        "-t",
        "rc-low",
        "-v",
        "10",
        "-f",
        "1000",
        "-r",
        "1000",
        "-c",
        "1e-7",
        "--gain-places",
        "4294967295",
    ]);

    assert!(success);
    assert!(stdout.contains("| 8.467 "));
    assert!(stdout.contains("| 0.8467330159648304 |"));
}
