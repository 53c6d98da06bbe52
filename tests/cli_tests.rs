use assert_cmd::Command;
use predicates::prelude::*;

fn notifeed_cmd() -> Command {
    Command::cargo_bin("notifeed").unwrap()
}

#[test]
fn test_help_shows_once_flag() {
    notifeed_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--once"));
}

#[test]
fn test_help_shows_dry_run_flag() {
    notifeed_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_help_describes_bot() {
    notifeed_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RSS subscription bot"));
}

#[test]
fn test_missing_env_is_fatal() {
    notifeed_cmd()
        .arg("--dry-run")
        .env_remove("NOTEBROOK_URL")
        .env_remove("NOTEBROOK_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing environment variable"));
}

#[test]
fn test_dry_run_with_no_subscriptions_exits_cleanly() {
    // Fresh process starts with an empty registry, so a dry-run tick has
    // nothing to fetch and exits without touching the network.
    notifeed_cmd()
        .arg("--dry-run")
        .env("NOTEBROOK_URL", "http://localhost:8080")
        .env("NOTEBROOK_TOKEN", "test-token")
        .assert()
        .success();
}
