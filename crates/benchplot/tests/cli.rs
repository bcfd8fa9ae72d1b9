// File: crates/benchplot/tests/cli.rs
// Purpose: Command-line behavior: usage error, per-file failures, exit status.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

const SCENARIO: &str = "MyBenchmark,\nN,Algorithm A\n10,5\n100,42\nN,Algorithm B\n10,3\n100,39\n";

fn benchplot() -> Command {
    cargo_bin_cmd!("benchplot")
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let out = benchplot().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("specify file(s)"), "stderr: {stderr}");
}

#[test]
fn renders_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");
    fs::write(&a, SCENARIO).unwrap();
    fs::write(&b, SCENARIO).unwrap();

    benchplot().arg(&a).arg(&b).assert().success();
    assert!(dir.path().join("a.png").is_file());
    assert!(dir.path().join("b.png").is_file());
}

#[test]
fn bad_file_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.csv");
    let good = dir.path().join("good.csv");
    fs::write(&bad, "title\n1,2\n").unwrap();
    fs::write(&good, SCENARIO).unwrap();
    let missing = dir.path().join("missing.csv");

    let out = benchplot().arg(&bad).arg(&missing).arg(&good).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad.csv"), "stderr: {stderr}");
    assert!(stderr.contains("missing.csv"), "stderr: {stderr}");
    assert!(dir.path().join("good.png").is_file());
    assert!(!dir.path().join("bad.png").exists());
}

#[test]
fn failures_are_named_even_with_logging_off() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("broken.csv");
    fs::write(&bad, "title\n1,2\n").unwrap();

    let out = benchplot().env("RUST_LOG", "off").arg(&bad).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("broken.csv:2"), "stderr: {stderr}");
}
