use assert_cmd::Command;
use predicates::prelude::*;

const DEFAULT_SORTED_LINE: &str = "SortedList: [0, 1, 3, 3, 4, 4, 6, 8]";

fn ledger_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sorted-ledger").unwrap();
    cmd.env_remove("SORTED_LEDGER_LOG_FORMAT").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_prints_sorted_list_and_cost() {
    ledger_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(DEFAULT_SORTED_LINE))
        .stdout(predicate::str::contains("Gas: 21"))
        .stdout(predicate::str::contains("Free: false"));
}

#[test]
fn test_environment_cannot_change_store_contents_or_output() {
    ledger_cmd()
        .env("SORTED_LEDGER_SEED", "9, -1, 4")
        .env("SORTED_LEDGER_OUTPUT", "json")
        .assert()
        .success()
        .stdout(predicate::str::contains(DEFAULT_SORTED_LINE))
        .stdout(predicate::str::contains("Gas: 21"))
        .stdout(predicate::str::contains("[-1, 4, 9]").not())
        .stdout(predicate::str::starts_with("{").not());
}

#[test]
fn test_logs_stay_on_stderr() {
    ledger_cmd()
        .env("RUST_LOG", "info")
        .env("SORTED_LEDGER_LOG_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(DEFAULT_SORTED_LINE))
        .stderr(predicate::str::contains("request complete"));
}

#[test]
fn test_unknown_log_format_warns_and_still_runs() {
    ledger_cmd()
        .env("SORTED_LEDGER_LOG_FORMAT", "xml")
        .assert()
        .success()
        .stdout(predicate::str::contains(DEFAULT_SORTED_LINE))
        .stderr(predicate::str::contains("unknown log format"));
}
