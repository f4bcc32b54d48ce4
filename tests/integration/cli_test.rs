//! End-to-end runs of the freezesync binary against a fake ffmpeg

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use super::helpers::{fake_ffmpeg, fixture_path};

fn freezesync(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("freezesync").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

#[test]
fn cli_prints_report_to_stdout() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());

    let output = freezesync(temp.path())
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg(fixture("ffmpeg.1.out"))
        .arg(fixture("ffmpeg.2.out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["all_videos_freeze_frame_synced"], true);
    assert_eq!(report["videos"].as_array().unwrap().len(), 2);
    assert_eq!(
        report["videos"][0]["valid_periods"][1],
        serde_json::json!([10.4271, 12.012])
    );
    assert!(report.get("failures").is_none());
}

#[test]
fn cli_writes_report_to_output_file() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());
    let out = temp.path().join("report.json");

    freezesync(temp.path())
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg("-o")
        .arg(&out)
        .arg(fixture("ffmpeg.1.out"))
        .arg(fixture("ffmpeg.3.out"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("{\n    \"all_videos_freeze_frame_synced\": false"));
}

#[test]
fn cli_partial_failure_still_reports() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());
    let missing = temp.path().join("missing.mp4");

    let output = freezesync(temp.path())
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg(fixture("ffmpeg.1.out"))
        .arg(&missing)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Some videos failed"));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["videos"].as_array().unwrap().len(), 1);
    assert_eq!(
        report["failures"][0]["source"],
        missing.to_string_lossy().as_ref()
    );
}

#[test]
fn cli_all_failed_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());

    freezesync(temp.path())
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg(temp.path().join("one.mp4"))
        .arg(temp.path().join("two.mp4"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to process URLs"))
        .stderr(predicate::str::contains("one.mp4"))
        .stderr(predicate::str::contains("two.mp4"));
}

#[test]
fn cli_rejects_duplicate_sources() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());

    freezesync(temp.path())
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg(fixture("ffmpeg.1.out"))
        .arg(fixture("ffmpeg.1.out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));
}

#[test]
fn cli_reads_tolerance_from_config_file() {
    let temp = TempDir::new().unwrap();
    let ffmpeg = fake_ffmpeg(temp.path());
    let config = temp.path().join("config.toml");
    fs::write(&config, "[sync]\ntolerance = 0.01\n").unwrap();

    let output = freezesync(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--ffmpeg")
        .arg(&ffmpeg)
        .arg(fixture("ffmpeg.1.out"))
        .arg(fixture("ffmpeg.2.out"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["all_videos_freeze_frame_synced"], false);
}

#[test]
fn cli_rejects_invalid_noise() {
    let temp = TempDir::new().unwrap();

    freezesync(temp.path())
        .args(["--noise", "5", "a.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings"));
}

#[test]
fn cli_generates_completions() {
    let temp = TempDir::new().unwrap();

    freezesync(temp.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freezesync"));
}

#[test]
fn cli_without_sources_fails() {
    let temp = TempDir::new().unwrap();

    freezesync(temp.path()).assert().failure();
}
