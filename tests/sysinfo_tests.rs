use std::fs;
use std::path::Path;

use benchreport::SystemInfo;

const SAMPLE: &str = "\
# collected by run_benchmarks.sh
PLATFORM=M1
CPU=Apple M1 Pro
OS=macOS
OS_VERSION=14.5
RUST_VERSION=rustc 1.88.0
GIT_COMMIT=abc1234

this line has no separator
FLAGS=RUSTFLAGS=-Ctarget-cpu=native
";

#[test]
fn test_parse_key_values() {
    let info = SystemInfo::parse(SAMPLE);
    assert_eq!(info.get("PLATFORM"), Some("M1"));
    assert_eq!(info.get("CPU"), Some("Apple M1 Pro"));
    assert_eq!(info.get("OS_VERSION"), Some("14.5"));
}

#[test]
fn test_comments_and_bare_lines_ignored() {
    let info = SystemInfo::parse(SAMPLE);
    assert!(info.get("# collected by run_benchmarks.sh").is_none());
    assert!(info.get("this line has no separator").is_none());
}

#[test]
fn test_value_keeps_embedded_equals() {
    let info = SystemInfo::parse(SAMPLE);
    assert_eq!(info.get("FLAGS"), Some("RUSTFLAGS=-Ctarget-cpu=native"));
}

#[test]
fn test_get_or_na_for_missing_key() {
    let info = SystemInfo::parse(SAMPLE);
    assert_eq!(info.get_or_na("RAM"), "N/A");
    assert_eq!(info.get_or_na("CPU"), "Apple M1 Pro");
}

#[test]
fn test_missing_file_yields_empty() {
    let info = SystemInfo::from_dir(Path::new("/nonexistent"));
    assert!(info.is_empty());
}

#[test]
fn test_from_dir_reads_env_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("system_info.env"), "PLATFORM=ci_runner\n").expect("write");
    let info = SystemInfo::from_dir(dir.path());
    assert_eq!(info.get("PLATFORM"), Some("ci_runner"));
}
