//! End-to-end tests for the `practice` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn practice() -> Command {
    Command::cargo_bin("practice").unwrap()
}

#[test]
fn test_demo_prints_array_sum() {
    practice()
        .args(["-q", "demo", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 22 33 44 55 66 77 88"))
        .stdout(predicate::str::contains("found "));
}

#[test]
fn test_demo_is_reproducible_with_seed() {
    let first = practice()
        .args(["-q", "demo", "--seed", "42", "--algorithm", "quick"])
        .output()
        .unwrap();
    let second = practice()
        .args(["-q", "demo", "--seed", "42", "--algorithm", "quick"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_add_lists() {
    practice()
        .args(["-q", "add", "--a", "1,2,3,4,5,6,7,8", "--b", "10,20,30,40,50,60,70,80"])
        .assert()
        .success()
        .stdout("11 22 33 44 55 66 77 88\n");
}

#[test]
fn test_add_wraps_negative_values() {
    practice()
        .args(["-q", "add", "--a=2147483647,-5,0,0", "--b=1,-3,0,0", "--scalar"])
        .assert()
        .success()
        .stdout("-2147483648 -8 0 0\n");
}

#[test]
fn test_add_rejects_partial_group() {
    practice()
        .args(["-q", "add", "--a", "1,2,3,4,5", "--b", "1,2,3,4,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid length"));
}

#[test]
fn test_add_truncates_when_asked() {
    practice()
        .args([
            "-q",
            "add",
            "--a",
            "1,2,3,4,5",
            "--b",
            "1,2,3,4,5",
            "--remainder",
            "truncate",
        ])
        .assert()
        .success()
        .stdout("2 4 6 8\n");
}

#[test]
fn test_add_count_larger_than_buffers() {
    practice()
        .args(["-q", "add", "--a", "1,2,3,4", "--b", "1,2,3,4", "--count", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Buffer too small"));
}

#[test]
fn test_add_parallel() {
    practice()
        .args(["-q", "add", "--a", "1,1,1,1", "--b", "2,2,2,2", "--parallel"])
        .assert()
        .success()
        .stdout("3 3 3 3\n");
}

#[test]
fn test_config_file_sets_truncation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"remainder": "truncate"}}"#).unwrap();

    practice()
        .arg("-q")
        .arg("--config")
        .arg(file.path())
        .args(["add", "--a", "1,1,1,1,1,1", "--b", "1,1,1,1,1,1"])
        .assert()
        .success()
        .stdout("2 2 2 2\n");
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    practice()
        .arg("--config")
        .arg(file.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_sort_outputs_sorted_line() {
    let output = practice()
        .args(["-q", "sort", "--size", "25", "--seed", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let sorted_line = stdout
        .lines()
        .find_map(|line| line.strip_prefix("sorted: "))
        .unwrap();
    let values: Vec<u16> = sorted_line
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 25);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_search_random_target_is_found() {
    practice()
        .args(["-q", "search", "--seed", "11", "--size", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found "));
}

#[test]
fn test_search_empty_input_fails() {
    practice()
        .args(["-q", "search", "--size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_info_reports_level() {
    practice()
        .args(["info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected level:"))
        .stdout(predicate::str::contains("Remainder policy: reject"));
}

#[test]
fn test_scalar_info_with_disabled_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"simd": {{"enable_avx512": false, "enable_avx2": false, "enable_sse2": false, "enable_neon": false}}}}"#
    )
    .unwrap();

    practice()
        .arg("--config")
        .arg(file.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected level: Scalar"));
}
