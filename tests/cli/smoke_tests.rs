// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

fn pascal() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pascal_triangle"))
}

#[test]
fn shows_help() {
    pascal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pascal_triangle"))
        .stdout(predicate::str::contains("--strategy"));
}

#[test]
fn shows_version() {
    pascal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn prints_five_rows_by_default() {
    pascal()
        .assert()
        .success()
        .stdout(predicate::eq("     1 \n    1 1 \n   1 2 1 \n  1 3 3 1 \n 1 4 6 4 1 \n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn rows_argument_controls_height() {
    pascal()
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::eq("   1 \n  1 1 \n 1 2 1 \n"));
}

#[test]
fn additive_strategy_prints_the_same_triangle() {
    let factorial = pascal().arg("12").output().unwrap();
    let additive = pascal().args(["12", "--strategy", "additive"]).output().unwrap();
    assert!(factorial.status.success());
    assert_eq!(factorial.stdout, additive.stdout);
}

#[test]
fn zero_rows_fail() {
    pascal()
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn non_numeric_rows_are_rejected_by_the_parser() {
    pascal().arg("five").assert().failure().code(2);
}

#[test]
fn factorial_of_number() {
    pascal()
        .args(["--factorial", "5"])
        .assert()
        .success()
        .stdout(predicate::eq("120\n"));
}

#[test]
fn factorial_of_text_is_invalid_input() {
    pascal()
        .args(["--factorial", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value is not an integer"));
}

#[test]
fn factorial_of_negative_fails() {
    pascal()
        .args(["--factorial", "-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative input"));
}

#[test]
fn single_entry() {
    pascal()
        .args(["--entry", "10", "3"])
        .assert()
        .success()
        .stdout(predicate::eq("120\n"));
}

#[test]
fn entry_past_row_end_fails() {
    pascal()
        .args(["--entry", "3", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("C(3, 5)"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    pascal()
        .args(["2", "-v"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::eq("  1 \n 1 1 \n"))
        .stderr(predicate::str::contains("rows=2"));
}
