// SPDX-FileCopyrightText: 2026 Hashtool Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests against the compiled binary.
//!
//! Each run gets an empty environment and a temp working directory, so no
//! ambient config file or input variable leaks in.

use std::path::Path;
use std::process::{Command, Output};

const FOO_SHA256: &str = "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae";
const FOO_MD5: &str = "acbd18db4cc2f85cedef654fccc4a4d8";

fn hashtool(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hashtool"))
        .args(args)
        .env_clear()
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .envs(env.iter().copied())
        .current_dir(dir)
        .output()
        .expect("binary should run")
}

/// Assert a configuration failure: exit 2 and exactly one stdout line.
fn config_failure_line(out: &Output) -> String {
    assert_eq!(out.status.code(), Some(2), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let line = stdout(out);
    assert_eq!(line.lines().count(), 1, "{line:?}");
    assert!(line.ends_with('\n') && !line.trim_end().contains('\n'), "{line:?}");
    line
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

// ---- hash ----

#[test]
fn hash_foo_with_default_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo"), ("ALGO", "")]);

    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        format!("{{\"algo\":\"sha256\",\"hash\":\"{FOO_SHA256}\"}}\n")
    );
}

#[test]
fn hash_foo_with_md5() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo"), ("ALGO", "md5")]);

    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&out).trim_end()).unwrap();
    assert_eq!(json["algo"], "md5");
    assert_eq!(json["hash"], FOO_MD5);
}

#[test]
fn hash_without_data_fails_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &["hash"], &[]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "a non-empty data argument is required\n");
}

#[test]
fn hash_unsupported_algorithm_fails_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(
        dir.path(),
        &["hash"],
        &[("DATA", "foo"), ("ALGO", "whirlpool")],
    );

    assert_eq!(out.status.code(), Some(1));
    let line = stdout(&out);
    assert_eq!(line.lines().count(), 1);
    assert!(line.contains("md5, sha256"), "{line}");
}

#[cfg(unix)]
#[test]
fn hash_non_utf8_data_uses_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let data = [0x66, 0x6f, 0xff, 0xfe];
    let out = Command::new(env!("CARGO_BIN_EXE_hashtool"))
        .arg("hash")
        .env_clear()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env("DATA", OsStr::from_bytes(&data))
        .current_dir(dir.path())
        .output()
        .expect("binary should run");

    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&out).trim_end()).unwrap();
    assert_eq!(
        json["hash"],
        hashtool_core::Algorithm::Sha256.hex_digest(&data)
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let env = [("DATA", "idempotent"), ("ALGO", "md5")];
    let first = hashtool(dir.path(), &["hash"], &env);
    let second = hashtool(dir.path(), &["hash"], &env);
    assert_eq!(first.stdout, second.stdout);
}

// ---- verify ----

#[test]
fn verify_exit_status_tracks_match() {
    let dir = tempfile::tempdir().unwrap();
    let ok = hashtool(
        dir.path(),
        &["verify"],
        &[("DATA", "foo"), ("EXPECTED", FOO_SHA256)],
    );
    assert!(ok.status.success());

    let mismatch = hashtool(
        dir.path(),
        &["verify"],
        &[("DATA", "bar"), ("EXPECTED", FOO_SHA256)],
    );
    assert_eq!(mismatch.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_str(stdout(&mismatch).trim_end()).unwrap();
    assert_eq!(json["match"], false);
}

// ---- dispatch and configuration ----

#[test]
fn unknown_command_fails_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &["sign"], &[("DATA", "foo")]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("unknown command `sign`"));
}

#[test]
fn missing_command_is_a_usage_error_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &[], &[]);

    assert_eq!(out.status.code(), Some(2));
    assert_eq!(stdout(&out).lines().count(), 1);
}

#[test]
fn local_config_changes_default_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hashtool.toml"),
        "[tool]\ndefault_algorithm = \"md5\"\n",
    )
    .unwrap();

    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo")]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(FOO_MD5));
}

#[test]
fn env_config_override_changes_default_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(
        dir.path(),
        &["algorithms"],
        &[("HASHTOOL_TOOL_DEFAULT_ALGORITHM", "md5")],
    );
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "{\"algorithms\":[\"md5\",\"sha256\"],\"default\":\"md5\"}\n"
    );
}

#[test]
fn invalid_config_reports_one_line_and_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[tool]\ndefault_algorithm = \"whirlpool\"\n").unwrap();

    let out = hashtool(
        dir.path(),
        &["--config", config.to_str().unwrap(), "hash"],
        &[("DATA", "foo")],
    );
    let line = config_failure_line(&out);
    assert!(line.contains("whirlpool"), "{line}");
    assert!(!out.stderr.is_empty(), "rich diagnostics should go to stderr");
}

#[test]
fn malformed_config_file_reports_one_line() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hashtool.toml"),
        "[tool\ndefault_algorithm = \"md5\"\n",
    )
    .unwrap();

    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo")]);
    let line = config_failure_line(&out);
    assert!(line.starts_with("configuration error: "), "{line}");
}

#[test]
fn padded_config_value_is_rejected_not_defaulted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("hashtool.toml"),
        "[tool]\ndefault_algorithm = \"md5 \"\n",
    )
    .unwrap();

    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo")]);
    let line = config_failure_line(&out);
    assert!(line.contains("`md5 `"), "{line}");
    assert!(!line.contains(FOO_SHA256), "{line}");
}

#[test]
fn env_override_with_newline_reports_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(
        dir.path(),
        &["hash"],
        &[("DATA", "foo"), ("HASHTOOL_TOOL_DEFAULT_ALGORITHM", "wh\nirl")],
    );
    config_failure_line(&out);
}

#[test]
fn unknown_env_key_reports_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(dir.path(), &["hash"], &[("DATA", "foo"), ("HASHTOOL_FOO", "1")]);
    let line = config_failure_line(&out);
    assert!(line.contains("`foo`"), "{line}");
}

#[test]
fn debug_logging_stays_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = hashtool(
        dir.path(),
        &["--log-level", "debug", "hash"],
        &[("DATA", "foo")],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out).lines().count(), 1);
    assert!(String::from_utf8_lossy(&out.stderr).contains("dispatching"));
}
