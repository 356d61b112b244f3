use assert_cmd::Command;
use predicates::prelude::*;

fn argstrip() -> Command {
    let mut cmd = Command::cargo_bin("argstrip").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_only_flag_succeeds_silently() {
    argstrip()
        .arg("-O")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_flag_with_whitespace_succeeds() {
    argstrip()
        .args(["  -O", " "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_args_succeeds() {
    argstrip()
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_extra_argument_fails() {
    argstrip()
        .args(["-O", "extra"])
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: extra\n");
}

#[test]
fn test_repeated_flag_fails() {
    argstrip()
        .args(["-O", "-O"])
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: -O\n");
}

#[test]
fn test_missing_flag_reports_everything() {
    argstrip()
        .args(["--help", "-g"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Remaining: --help -g"));
}

#[test]
fn test_leading_escape_is_residual() {
    argstrip()
        .arg("--")
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: --\n");

    argstrip()
        .args(["--", "-O"])
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: --\n");
}

#[test]
fn test_short_help_is_residual() {
    argstrip()
        .arg("-h")
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: -h\n");
}

#[test]
fn test_short_version_is_residual() {
    argstrip()
        .arg("-V")
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: -V\n");
}

#[cfg(unix)]
#[test]
fn test_invalid_utf8_is_residual() {
    use std::os::unix::ffi::OsStrExt;

    argstrip()
        .arg(std::ffi::OsStr::from_bytes(b"-O \xff"))
        .assert()
        .code(1)
        .stdout("Could not remove all arguments. Remaining: \u{fffd}\n");
}
