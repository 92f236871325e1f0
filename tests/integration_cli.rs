#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn prints_series_for_dir_argument() {
    let dir = tempdir().unwrap();
    for n in 1..=3 {
        File::create(dir.path().join(format!("shot_{n:03}.exr"))).unwrap();
    }

    let mut cmd = Command::cargo_bin("lss").unwrap();
    cmd.arg(dir.path());
    cmd.assert()
        .success()
        .stdout("3 shot_%03d.exr 1-3 \n");
}

#[test]
fn defaults_to_current_dir() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();

    let mut cmd = Command::cargo_bin("lss").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert().success().stdout("1 notes.txt\n");
}

#[test]
fn empty_dir_prints_nothing() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lss").unwrap();
    cmd.arg(dir.path());
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn logs_stay_off_stdout() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a1")).unwrap();

    let mut cmd = Command::cargo_bin("lss").unwrap();
    cmd.args(["-vv"]).arg(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.assert()
        .success()
        .stdout("1 a1\n")
        .stderr(predicate::str::contains("deferred"))
        .stderr(predicate::str::contains("a%d 1"));
}

#[test]
fn missing_dir_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lss").unwrap();
    cmd.arg(dir.path().join("nope"));
    cmd.assert().failure().stdout(predicate::str::is_empty());
}
