use assert_cmd::Command;
use insta::assert_snapshot;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let assert = cmd().args(args).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.ends_with('\n'));
    stdout.trim_end_matches('\n').to_string()
}

#[test]
fn converts_binary_argument() {
    assert_snapshot!(stdout_of(&["1010"]), @"Hexadecimal value: 0xa");
}

#[test]
fn converts_zero() {
    assert_snapshot!(stdout_of(&["0"]), @"Hexadecimal value: 0x0");
}

#[test]
fn converts_full_byte() {
    assert_snapshot!(stdout_of(&["11111111"]), @"Hexadecimal value: 0xff");
}

#[test]
fn converts_negative_argument() {
    assert_snapshot!(stdout_of(&["-1010"]), @"Hexadecimal value: -0xa");
}

#[test]
fn reports_invalid_binary_number() {
    assert_snapshot!(stdout_of(&["102"]), @"Hexadecimal value: Invalid binary number");
}

#[test]
fn reports_empty_argument_as_invalid() {
    assert_snapshot!(stdout_of(&[""]), @"Hexadecimal value: Invalid binary number");
}

#[test]
fn prints_usage_without_arguments() {
    cmd()
        .assert()
        .success()
        .stdout("Usage: bin2hex <binary_value>\n");
}

#[test]
fn prints_usage_with_too_many_arguments() {
    cmd()
        .args(["1010", "1"])
        .assert()
        .success()
        .stdout("Usage: bin2hex <binary_value>\n");
}

#[test]
fn logging_stays_off_stdout() {
    cmd()
        .env("RUST_LOG", "debug")
        .arg("12")
        .assert()
        .success()
        .stdout("Hexadecimal value: Invalid binary number\n")
        .stderr(predicate::str::contains("Rejected"));
}

#[test]
fn double_dash_counts_as_an_argument() {
    cmd()
        .args(["--", "101"])
        .assert()
        .success()
        .stdout("Usage: bin2hex <binary_value>\n");
}

#[test]
fn lone_double_dash_is_an_invalid_number() {
    assert_snapshot!(stdout_of(&["--"]), @"Hexadecimal value: Invalid binary number");
}

#[test]
fn flag_shaped_arguments_are_converted_like_any_value() {
    for flag in ["-h", "--help", "-V", "--version"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout("Hexadecimal value: Invalid binary number\n");
    }
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_an_invalid_number() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    cmd()
        .arg(OsString::from_vec(vec![b'1', 0xff]))
        .assert()
        .success()
        .stdout("Hexadecimal value: Invalid binary number\n");
}
