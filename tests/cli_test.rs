use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fbudget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fbudget").unwrap();
    cmd.env("FAMILY_BUDGET_DATA_DIR", data_dir.path())
        .env_remove("FAMILY_BUDGET_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    fbudget(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("accounts"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    fbudget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000"))
        .stdout(predicate::str::contains("Log level:       INFO"))
        .stdout(predicate::str::contains("Settings saved").not());
}

#[test]
fn config_persists_changes() {
    let dir = TempDir::new().unwrap();
    fbudget(&dir)
        .args(["config", "--api-url", "http://budget.lan:9000", "--log-level", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    fbudget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://budget.lan:9000"))
        .stdout(predicate::str::contains("DEBUG"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn config_rejects_unknown_log_level() {
    let dir = TempDir::new().unwrap();
    fbudget(&dir)
        .args(["config", "--log-level", "verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown log level"));
}

#[test]
fn env_override_is_reported() {
    let dir = TempDir::new().unwrap();
    fbudget(&dir)
        .env("FAMILY_BUDGET_API_URL", "http://override:1234")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://override:1234 (from FAMILY_BUDGET_API_URL)"));
}

#[test]
fn listing_fails_cleanly_without_backend() {
    let dir = TempDir::new().unwrap();
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    fbudget(&dir)
        .env("FAMILY_BUDGET_API_URL", format!("http://{}", addr))
        .arg("accounts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}
