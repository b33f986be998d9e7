//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fontpack() -> Command {
    Command::cargo_bin("fontpack").expect("binary")
}

#[test]
fn help_describes_the_tool() {
    fontpack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("web font package"))
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::contains("TARGET"));
}

#[test]
fn missing_source_directory_fails() {
    let tmp = tempdir().expect("tempdir");

    fontpack()
        .arg(tmp.path().join("does-not-exist"))
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source is not a directory"));
}

#[test]
fn unknown_subset_fails() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("drop");
    std::fs::create_dir(&source).expect("mkdir");

    fontpack()
        .arg(&source)
        .arg(tmp.path().join("out"))
        .args(["--subsets", "latin,klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown subset: klingon"));
}

#[test]
fn source_and_target_are_required() {
    fontpack()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
