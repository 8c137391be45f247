//! Argument handling and error surface tests.
//!
//! Everything here fails before any network or npm invocation, so the tests
//! run offline.

use assert_cmd::Command;
use predicates::prelude::*;

fn genuary() -> Command {
    Command::cargo_bin("genuary").unwrap()
}

#[test]
fn help_mentions_the_subcommands() {
    genuary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("prompts"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    genuary()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    genuary().assert().failure();
}

#[test]
fn new_help_lists_template_flags() {
    genuary()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--year"))
        .stdout(predicate::str::contains("--p5-version"))
        .stdout(predicate::str::contains("--template-repo"))
        .stdout(predicate::str::contains("--source-dir"))
        .stdout(predicate::str::contains("--resume"));
}

#[test]
fn conflicting_template_sources_exit_2() {
    genuary()
        .args([
            "new",
            "--source-dir",
            "./tpl",
            "--template-repo",
            "user/repo",
        ])
        .assert()
        .code(2);
}

#[test]
fn quiet_and_verbose_conflict_exit_2() {
    genuary().args(["--quiet", "-v", "prompts"]).assert().code(2);
}

#[test]
fn two_digit_year_is_rejected_with_suggestions() {
    genuary()
        .args(["new", "--year", "26"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid year"))
        .stderr(predicate::str::contains("four-digit"));
}

#[test]
fn malformed_p5_version_is_rejected() {
    genuary()
        .args(["new", "--p5-version", "1.11"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1.11"));
}

#[test]
fn prompts_rejects_bad_year_before_fetching() {
    genuary()
        .args(["prompts", "--year", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid year"));
}

#[test]
fn completions_emit_a_bash_script() {
    genuary()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("genuary"));
}

#[test]
fn missing_explicit_config_file_exits_4() {
    genuary()
        .args(["--config", "/definitely/not/here.toml", "prompts"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
