//! CLI surface checks for the dcmcjpeg binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::ImageFixture;

#[test]
fn missing_arguments_print_usage() {
    Command::cargo_bin("dcmcjpeg")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn successful_conversion_reports_success() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mono8.dcm");
    let output = dir.path().join("mono8_jpeg.dcm");
    ImageFixture::monochrome8(8, 8).write(&input);

    Command::cargo_bin("dcmcjpeg")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully converted"));
    assert!(output.exists());
}

#[test]
fn failed_conversion_reports_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("not_there.dcm");
    let output = dir.path().join("never_written.dcm");

    Command::cargo_bin("dcmcjpeg")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading file"));
    assert!(!output.exists());
}
