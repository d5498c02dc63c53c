/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary with DESKCALC_DATA_DIR pointed at
/// an isolated temp directory and verify command-line behavior
mod common;

use assert_cmd::Command;
use assert_cmd::prelude::*;
use common::DataDirBuilder;
use predicates::prelude::*;

fn deskcalc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deskcalc"))
}

#[test]
fn test_cli_eval_prints_result() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "2+3*4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14"));
}

#[test]
fn test_cli_eval_respects_parens() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "(2+3)*4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn test_cli_eval_records_history() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "1+2"])
        .assert()
        .success();

    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1+2 = 3"));
}

#[test]
fn test_cli_eval_no_save_skips_history() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "--no-save", "1+2"])
        .assert()
        .success();

    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No calculations recorded"));
}

#[test]
fn test_cli_eval_division_by_zero_fails() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "5/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_cli_eval_invalid_expression_fails() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "(1+2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid expression"));
}

#[test]
fn test_cli_eval_percent_flag() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "--percent", "200%50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100"));
}

#[test]
fn test_cli_eval_percent_rejected_without_flag() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["eval", "200%50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("disallowed character"));
}

#[test]
fn test_cli_history_show_groups_by_date() {
    let data_dir = DataDirBuilder::new()
        .with_entry("1+1", 2.0, 14, 9)
        .with_entry("2*3", 6.0, 15, 10)
        .build();

    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("2024-03-14"))
        .stdout(predicate::str::contains("2*3 = 6"));
}

#[test]
fn test_cli_history_clear() {
    let data_dir = DataDirBuilder::new().with_entry("1+1", 2.0, 14, 9).build();

    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));

    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No calculations recorded"));
}

#[test]
fn test_cli_convert() {
    deskcalc()
        .args(["convert", "2.5", "km", "m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5 km = 2500 m"));
}

#[test]
fn test_cli_convert_temperature() {
    deskcalc()
        .args(["convert", "100", "c", "f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("212"));
}

#[test]
fn test_cli_convert_unknown_unit_fails() {
    deskcalc()
        .args(["convert", "1", "parsec", "m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit"));
}

#[test]
fn test_cli_units_lists_categories() {
    deskcalc()
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("length"))
        .stdout(predicate::str::contains("temperature"))
        .stdout(predicate::str::contains("kb"));
}

#[test]
fn test_cli_repl_evaluates_and_quits() {
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .arg("repl")
        .write_stdin("1+2\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1+2 = 3"));
}

#[test]
fn test_cli_repl_history_command() {
    let data_dir = DataDirBuilder::new().with_entry("6*7", 42.0, 15, 10).build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .arg("repl")
        .write_stdin(":history\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("6*7 = 42"));
}

#[test]
fn test_cli_repl_keypad_rules_apply_to_typed_input() {
    // Doubled operator collapses, so "5++3" evaluates as 5+3
    let data_dir = DataDirBuilder::new().build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .arg("repl")
        .write_stdin("5++3\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5+3 = 8"));
}

#[test]
fn test_cli_repl_recall_loads_most_recent() {
    let data_dir = DataDirBuilder::new().with_entry("6*7", 42.0, 15, 10).build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .arg("repl")
        .write_stdin(":recall 1\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recalled: 6*7"));
}

#[test]
fn test_cli_repl_recall_rejects_bad_index() {
    let data_dir = DataDirBuilder::new().with_entry("6*7", 42.0, 15, 10).build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .arg("repl")
        .write_stdin(":recall abc\n:recall 0\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: :recall N"))
        .stdout(predicate::str::contains("Recalled").not());
}

#[test]
fn test_cli_no_command_shows_help_message() {
    deskcalc()
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    deskcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculator with persisted history"))
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_cli_version_flag() {
    deskcalc().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    deskcalc().arg("frobnicate").assert().failure();
}

#[test]
fn test_cli_corrupt_history_reports_error() {
    let data_dir = DataDirBuilder::new().with_raw_history("not json").build();
    deskcalc()
        .env("DESKCALC_DATA_DIR", data_dir.path())
        .args(["history", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}
