//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn confpatch() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("confpatch"))
}

#[test]
fn test_cli_version() {
    let mut cmd = confpatch();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("confpatch"));
}

#[test]
fn test_cli_help_touches_nothing() {
    let mut cmd = confpatch();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CONFIG_FILENAME"))
        .stdout(predicate::str::contains("NEW_MAPPINGS"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_missing_arguments_is_a_usage_error() {
    let mut cmd = confpatch();
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));

    let mut cmd = confpatch();
    cmd.arg("only-one-arg");
    cmd.assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_config_file_names_first_argument() {
    let tmp = TempDir::new().expect("tmp");
    let mappings = tmp.path().join("overrides.txt");
    fs::write(&mappings, "a=1\n").expect("write mappings");

    let mut cmd = confpatch();
    cmd.arg(tmp.path().join("no-such-config")).arg(&mappings);
    cmd.assert().failure().stderr(predicate::str::contains("1st argument"));
}

#[test]
fn test_missing_mappings_file_names_second_argument() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("client.conf");
    fs::write(&config, "a=1\n").expect("write config");

    let mut cmd = confpatch();
    cmd.arg(&config).arg(tmp.path().join("no-such-mappings"));
    cmd.assert().failure().stderr(predicate::str::contains("2nd argument"));
}

#[test]
fn test_merge_rewrites_and_emits_notice() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("up2date");
    fs::write(&config, "serverURL=http://old\nenableProxy=0\n").expect("write config");
    let mappings = tmp.path().join("overrides.txt");
    fs::write(&mappings, "serverURL=https://new\n").expect("write mappings");

    let mut cmd = confpatch();
    cmd.arg(&config).arg(&mappings);
    cmd.assert().success().stdout(predicate::str::contains("written"));

    assert_eq!(
        fs::read_to_string(&config).expect("read back"),
        "serverURL=https://new\nenableProxy=0\n"
    );
}

#[test]
fn test_no_change_emits_no_notice() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("client.conf");
    fs::write(&config, "a=1\n").expect("write config");
    let mappings = tmp.path().join("overrides.txt");
    fs::write(&mappings, "a=1\nmissing=2\n").expect("write mappings");

    let mut cmd = confpatch();
    cmd.arg(&config).arg(&mappings);
    cmd.assert().success().stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&config).expect("read back"), "a=1\n");
}

#[test]
fn test_comment_lines_and_unknown_keys_pass_through() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("client.conf");
    fs::write(&config, "url[comment]=description\nurl=http://x\n# plain comment\n")
        .expect("write config");
    let mappings = tmp.path().join("overrides.txt");
    fs::write(&mappings, "url[comment]=zzz\nurl=http://y\n").expect("write mappings");

    let mut cmd = confpatch();
    cmd.arg(&config).arg(&mappings);
    cmd.assert().success();

    assert_eq!(
        fs::read_to_string(&config).expect("read back"),
        "url[comment]=description\nurl=http://y\n# plain comment\n"
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("client.conf");
    fs::write(&config, "a=1\n").expect("write config");
    let mappings = tmp.path().join("overrides.txt");
    fs::write(&mappings, "a=2\n").expect("write mappings");

    let mut first = confpatch();
    first.arg(&config).arg(&mappings);
    first.assert().success().stdout(predicate::str::contains("written"));

    let mut second = confpatch();
    second.arg(&config).arg(&mappings);
    second.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_dump_prints_parsed_settings() {
    let tmp = TempDir::new().expect("tmp");
    let config = tmp.path().join("client.conf");
    fs::write(&config, "b=2\n# noise\na=x=y\nskip[comment]=doc\n").expect("write config");

    let mut cmd = confpatch();
    cmd.arg("--dump").arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a=x=y"))
        .stdout(predicate::str::contains("b=2"))
        .stdout(predicate::str::contains("skip[comment]").not());
}
