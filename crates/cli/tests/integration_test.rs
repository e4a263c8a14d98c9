//! End-to-end tests for the `sloc_tally` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sloc_tally"))
}

/// Workspace with `src/a.txt` and `src/b.txt` from the two-file scenario.
fn scenario() -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "// header\n\nx = 1\n").unwrap();
    fs::write(src.join("b.txt"), "y = 2\nz = 3\n").unwrap();
    dir
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sloc_tally"))
        .stdout(predicate::str::contains("--keep-going"));
}

#[test]
fn default_scans_src_in_working_directory() {
    let dir = scenario();
    let stdout = stdout_of(bin().current_dir(dir.path()));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    let mut per_file = lines[..2].to_vec();
    per_file.sort_unstable();
    assert_eq!(per_file, ["a.txt: 1/3", "b.txt: 2/2"]);
    assert_eq!(&lines[2..], ["sloc: 3", "tloc: 5"]);
}

#[test]
fn sorted_output_is_exact() {
    let dir = scenario();
    bin()
        .current_dir(dir.path())
        .arg("--sort")
        .assert()
        .success()
        .stdout("a.txt: 1/3\nb.txt: 2/2\nsloc: 3\ntloc: 5\n");
}

#[test]
fn explicit_directory_argument() {
    let dir = scenario();
    let src = dir.path().join("src");
    bin()
        .args(["--sort", src.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("sloc: 3\ntloc: 5\n"));
}

#[test]
fn empty_directory_prints_zero_summary() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("sloc: 0\ntloc: 0\n");
}

#[test]
fn missing_src_fails_without_summary() {
    let dir = TempDir::new().unwrap();
    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("sloc:").not())
        .stderr(predicate::str::contains("Directory not found"));
}

fn with_subdirectory(dir: &Path) {
    fs::create_dir(dir.join("src").join("nested")).unwrap();
}

#[test]
fn subdirectory_entry_halts_by_default() {
    let dir = scenario();
    with_subdirectory(dir.path());
    bin()
        .current_dir(dir.path())
        .arg("--sort")
        .assert()
        .failure()
        .stdout(predicate::str::contains("a.txt: 1/3"))
        .stdout(predicate::str::contains("sloc:").not())
        .stderr(predicate::str::contains("nested"));
}

#[test]
fn keep_going_skips_subdirectory() {
    let dir = scenario();
    with_subdirectory(dir.path());
    bin()
        .current_dir(dir.path())
        .args(["--sort", "--keep-going"])
        .assert()
        .success()
        .stdout("a.txt: 1/3\nb.txt: 2/2\nsloc: 3\ntloc: 5\n")
        .stderr(predicate::str::contains("warn: skipping"));
}

#[test]
fn invalid_utf8_is_an_error() {
    let dir = scenario();
    fs::write(dir.path().join("src").join("c.bin"), b"\xc3\x28\n").unwrap();
    bin()
        .current_dir(dir.path())
        .arg("--sort")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid UTF-8"));
}

#[test]
fn jsonl_format() {
    let dir = scenario();
    let stdout = stdout_of(bin().current_dir(dir.path()).args(["--sort", "--format", "jsonl"]));

    let values: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0]["name"], "a.txt");
    assert_eq!(values[1]["significant"], 2);
    assert_eq!(values[2]["type"], "total");
    assert_eq!(values[2]["sloc"], 3);
    assert_eq!(values[2]["tloc"], 5);
}

#[test]
fn json_format() {
    let dir = scenario();
    let stdout = stdout_of(bin().current_dir(dir.path()).args(["--format", "json"]));

    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["sloc"], 3);
    assert_eq!(doc["tloc"], 5);
    assert_eq!(doc["files"].as_array().unwrap().len(), 2);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = scenario();
    bin()
        .current_dir(dir.path())
        .args(["--sort", "-v"])
        .assert()
        .success()
        .stdout("a.txt: 1/3\nb.txt: 2/2\nsloc: 3\ntloc: 5\n")
        .stderr(predicate::str::contains("info: 2 files counted"));
}

#[test]
fn carriage_return_only_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("mac.txt"), b"a\r// c\rb\r").unwrap();
    fs::write(src.join("mixed.txt"), b"x\r\n\r// y\nz").unwrap();
    bin()
        .current_dir(dir.path())
        .arg("--sort")
        .assert()
        .success()
        .stdout("mac.txt: 2/3\nmixed.txt: 2/4\nsloc: 4\ntloc: 7\n");
}
