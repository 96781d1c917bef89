// stringo/tests/cli_integration_tests.rs
//! Command-line integration tests for the `stringo` binary.
//!
//! The binary is run through `assert_cmd` with `RUST_LOG=debug`, so logs land
//! on stderr while assertions look at stdout and the exit code. Output is
//! piped, which keeps it free of ANSI color codes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

fn stringo() -> Command {
    let mut cmd = Command::cargo_bin("stringo").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.env_remove("STRINGO_CONFIG");
    cmd
}

#[test]
fn test_check_ok_from_argument() {
    stringo()
        .args(["check", "abc123", "--rule", "deny-spaces,require-numbers"])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn test_check_failure_exits_with_one() {
    stringo()
        .args(["check", "NO NUMBERS", "--max", "100", "--rule", "require-numbers"])
        .assert()
        .code(1)
        .stdout("numbers-not-found\n");
}

#[test]
fn test_check_reads_stdin() {
    stringo()
        .args(["check", "--rule", "deny-more-than-one-word"])
        .write_stdin("two words\n")
        .assert()
        .code(1)
        .stdout("more-than-one-word-denied\n");
}

#[test]
fn test_check_json_report() -> Result<()> {
    let output = stringo()
        .args(["check", "", "--json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["result"], "empty-denied");
    assert_eq!(report["code"], -1);
    assert_eq!(report["ok"], false);
    Ok(())
}

#[test]
fn test_check_with_builtin_policy() {
    stringo()
        .args(["check", "--policy", "username", "john_doe"])
        .assert()
        .code(1)
        .stdout("symbols-denied\n");
    stringo()
        .args(["check", "--policy", "username", "johndoe42"])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn test_unknown_rule_is_an_error() {
    stringo()
        .args(["check", "x", "--rule", "deny-everything"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown check rule 'deny-everything'"));
}

#[test]
fn test_unknown_policy_is_an_error() {
    stringo()
        .args(["check", "x", "--policy", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Policy 'nope' not found"));
}

#[test]
fn test_transform_flag_mode() {
    stringo()
        .args(["transform", "abc123", "--flag", "only-digits"])
        .assert()
        .success()
        .stdout("123\n");
    stringo()
        .args(["transform", "   The Go programming language", "--flag", "trim,uppercase", "--max", "6"])
        .assert()
        .success()
        .stdout("THE GO\n");
}

#[test]
fn test_transform_serial_mode() {
    stringo()
        .args(["transform", "--serial", "--flag", "trim,lowercase"])
        .write_stdin("  Test String  \n")
        .assert()
        .success()
        .stdout("test string\n");
}

#[test]
fn test_transform_with_recipe() {
    stringo()
        .args(["transform", "--recipe", "compact-key", "  Hello, World 42 "])
        .assert()
        .success()
        .stdout("helloworld42\n");
}

#[test]
fn test_hash() {
    stringo()
        .args(["hash", "123456"])
        .assert()
        .success()
        .stdout("8d969eef6ecad3c29a3a629280e686cf0c3f5d5a86aff3ca12020c923adc6c92\n");
}

#[test]
fn test_name_commands() {
    stringo()
        .args(["name", "first-last", "friedrich wilhelm nietzsche", "--flag", "title-case"])
        .assert()
        .success()
        .stdout("Friedrich Nietzsche\n");
    stringo()
        .args(["name", "first", "friedrich wilhelm nietzsche"])
        .assert()
        .success()
        .stdout("friedrich\n");
    stringo()
        .args(["name", "initials", "dom pedro I", "--flag", "uppercase"])
        .assert()
        .success()
        .stdout("D P I\n");
    stringo()
        .args(["name", "check", "ONEWORD"])
        .assert()
        .code(1)
        .stdout("too-few-words\n");
    stringo()
        .args(["name", "check", "", "--accept-empty"])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn test_email() {
    stringo().args(["email", "email@gmail.com"]).assert().success().stdout("valid\n");
    stringo().args(["email", "email-gmail.com"]).assert().code(1).stdout("invalid\n");
    stringo()
        .args(["email", "--contains", "write to someone@example.com today"])
        .assert()
        .success()
        .stdout("found\n");
}

#[test]
fn test_date_reformat() {
    stringo()
        .args(["date", "2018-10-31", "--from", "yyyy-mm-dd", "--to", "dd/mm/yyyy"])
        .assert()
        .success()
        .stdout("31/10/2018\n");
    stringo()
        .args(["date", "31/31/2018", "--from", "dd/mm/yyyy", "--to", "yyyy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse '31/31/2018'"));
}

#[test]
fn test_date_now_prints_something() {
    stringo()
        .args(["date", "--now", "--to", "yyyy"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{4}\n$").unwrap());
}

#[test]
fn test_random_is_reproducible_with_seed() -> Result<()> {
    let first = stringo().args(["random", "--min", "-5", "--max", "5", "--seed", "42", "-n", "10"]).output()?;
    let second = stringo().args(["random", "--min", "-5", "--max", "5", "--seed", "42", "-n", "10"]).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout)?;
    let numbers: Vec<i64> = text.lines().map(|l| l.parse()).collect::<Result<_, _>>()?;
    assert_eq!(numbers.len(), 10);
    assert!(numbers.iter().all(|n| (-5..=5).contains(n)));
    Ok(())
}

#[test]
fn test_password() {
    stringo()
        .args(["password", "abc1", "--min-len", "4", "--require", "require-number"])
        .assert()
        .success()
        .stdout("ok\n");
    stringo()
        .args(["password", "1234AB", "1234A"])
        .assert()
        .code(1)
        .stdout("divergent\n");
    stringo()
        .args(["password", "abcd", "--min-len", "4", "--require", "require-symbol"])
        .assert()
        .code(1)
        .stdout("too-simple\n");
}

#[test]
fn test_policies_listing() {
    stringo()
        .args(["policies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Policies"))
        .stdout(predicate::str::contains("username"))
        .stdout(predicate::str::contains("DENY_SPACES | DENY_SYMBOLS"))
        .stdout(predicate::str::contains("compact-key"));
}

#[test]
fn test_custom_config_is_merged() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
policies:
  - name: username
    min_len: 1
    max_len: 4
    rules: DENY_SPACES
recipes:
  - name: shout
    mode: serial
    steps: [TRIM, UPPERCASE]
"#
    )?;
    let path = file.path().to_str().unwrap().to_string();

    stringo()
        .args(["--config", &path, "check", "--policy", "username", "john_doe"])
        .assert()
        .code(1)
        .stdout("too-long\n");
    stringo()
        .args(["--config", &path, "transform", "--recipe", "shout", " hey "])
        .assert()
        .success()
        .stdout("HEY\n");

    let output = stringo().args(["--config", &path, "policies", "--json"]).output()?;
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = listing["policies"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert!(names.contains(&"username"));
    assert!(names.contains(&"pin"));
    Ok(())
}

#[test]
fn test_invalid_config_file_is_reported() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "policies:\n  - name: \"\"\n")?;
    let path = file.path().to_str().unwrap().to_string();
    stringo()
        .args(["--config", &path, "policies"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Policy validation failed"));
    Ok(())
}

#[test]
fn test_quiet_silences_logs() {
    stringo()
        .args(["-q", "hash", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
