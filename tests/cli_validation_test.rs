//! Integration tests for argument validation that happens before any download.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const URL: &str = "https://example.com/watch?v=abc";

#[test]
fn test_help_spellings_exit_zero() {
    for flag in ["-h", "-help", "-?", "--help"] {
        let mut cmd = cargo_bin_cmd!("ytclip");
        cmd.arg(flag);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Usage"))
            .stdout(predicate::str::contains("mm.ss"));
    }
}

#[test]
fn test_audio_and_video_only_conflict() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.arg(URL).arg("-a").arg("-v");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be used together"));
}

#[test]
fn test_bad_time_token_exits_one() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.arg(URL).arg("-s").arg("1.5");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("mm.ss"));
}

#[test]
fn test_length_with_start_and_end_exits_one() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.args([URL, "-s", "00.10", "-e", "00.50", "-l", "00.20"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "length cannot be combined with both start and end",
        ));
}

#[test]
fn test_length_alone_exits_one() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.args([URL, "-l", "00.20"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("length requires start or end"));
}

#[test]
fn test_missing_url_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.arg("-a");

    cmd.assert().failure().code(2);
}

#[test]
fn test_missing_explicit_config_exits_one() {
    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.args([URL, "--config", "/nonexistent/ytclip/config.toml"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_length_checked_before_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "this is not valid toml {{").unwrap();

    let mut cmd = cargo_bin_cmd!("ytclip");
    cmd.args([URL, "-l", "00.20", "--config"]).arg(&config);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("length requires start or end"));
}
