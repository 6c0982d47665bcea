use assert_cmd::Command;
use benchreport::CommandLineConfig;
use std::fs;

#[test]
fn test_from_args_positional_and_flags() {
    let config = CommandLineConfig::from_args(&[
        "benchreport",
        "raw/2026-08-07",
        "reports/current.md",
        "--platform",
        "M1",
        "--compare-with",
        "reports/previous.md",
        "--threshold",
        "7.5",
    ])
    .expect("parse");
    assert_eq!(config.raw_dir, "raw/2026-08-07");
    assert_eq!(config.output_file, "reports/current.md");
    assert_eq!(config.platform.as_deref(), Some("M1"));
    assert_eq!(config.baseline_file.as_deref(), Some("reports/previous.md"));
    assert_eq!(config.threshold_pct, 7.5);
}

#[test]
fn test_from_args_defaults() {
    let config = CommandLineConfig::from_args(&["benchreport", "raw", "out.md"]).expect("parse");
    assert!(config.platform.is_none());
    assert!(config.baseline_file.is_none());
    assert_eq!(config.threshold_pct, 5.0);
}

#[test]
fn test_from_args_rejects_unknown_flag() {
    let err = CommandLineConfig::from_args(&["benchreport", "raw", "out.md", "--bogus"])
        .expect_err("should fail");
    assert!(err.contains("--bogus"));
}

#[test]
fn test_from_args_requires_positionals() {
    assert!(CommandLineConfig::from_args(&["benchreport"]).is_err());
    assert!(CommandLineConfig::from_args(&["benchreport", "raw"]).is_err());
}

#[test]
fn test_from_args_rejects_bad_threshold() {
    let err = CommandLineConfig::from_args(&["benchreport", "raw", "out.md", "--threshold", "abc"])
        .expect_err("should fail");
    assert!(err.contains("abc"));
}

#[test]
fn test_validate_rejects_negative_threshold() {
    let config =
        CommandLineConfig::from_args(&["benchreport", "raw", "out.md", "--threshold", "-1"])
            .expect("negative value is consumed by the flag, not parsed as one");
    assert_eq!(config.threshold_pct, -1.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_exits_with_usage_error_on_missing_args() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.assert().code(2);
}

const RAW_OUTPUT: &str = "\
engine_bench/fast       time:   [10.0 ns 12.0 ns 14.0 ns]
Found 3 outliers among 100 measurements (3.0%)
";

#[test]
fn test_cli_generates_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw_dir = dir.path().join("raw");
    fs::create_dir(&raw_dir).expect("mkdir");
    fs::write(raw_dir.join("engine_bench.txt"), RAW_OUTPUT).expect("write raw");
    fs::write(raw_dir.join("system_info.env"), "PLATFORM=test_rig\n").expect("write env");
    let output = dir.path().join("report.md");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg(&raw_dir).arg(&output);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("Consolidated markdown generated"));
    assert!(stdout.contains("Benchmarks processed: 1/1"));

    let report = fs::read_to_string(&output).expect("read report");
    assert!(report.contains("(test_rig)"));
    assert!(report.contains("| `engine_bench` | fast | 12.00 ns |"));

    let sidecar = dir.path().join("report.md.baseline.json");
    assert!(sidecar.exists());
}

#[test]
fn test_cli_compare_with_prior_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw_dir = dir.path().join("raw");
    fs::create_dir(&raw_dir).expect("mkdir");
    fs::write(raw_dir.join("engine_bench.txt"), RAW_OUTPUT).expect("write raw");
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg(&raw_dir).arg(&first);
    cmd.assert().success();

    // Same raw data compared against itself: nothing beyond the threshold.
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_benchreport"));
    cmd.arg(&raw_dir)
        .arg(&second)
        .arg("--compare-with")
        .arg(&first);
    cmd.assert().success();

    let report = fs::read_to_string(&second).expect("read report");
    assert!(report.contains("within ±5% threshold"));
}
