// tests/cli_basic.rs
//! Binary-level smoke tests for the terminal client.

use assert_cmd::Command;
use predicates::prelude::*;

fn ticklist() -> Command {
    Command::cargo_bin("ticklist").unwrap()
}

#[test]
fn given_help_flag_when_run_then_subcommands_are_listed() {
    ticklist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add an entry"))
        .stdout(predicate::str::contains("trash"));
}

#[test]
fn given_generate_config_flag_when_run_then_prints_default_toml() {
    ticklist()
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("db_url"))
        .stdout(predicate::str::contains("[openai]"));
}

#[test]
fn given_fresh_db_when_adding_and_listing_then_entry_shows_up() {
    let temp = tempfile::tempdir().unwrap();
    let db_path = temp.path().join("ticklist.db");
    let db_url = db_path.to_str().unwrap();

    ticklist()
        .args(["create-db", db_url])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created database"));

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["add", "买牛奶", "--no-tags"])
        .assert()
        .success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("买牛奶"));
}

#[test]
fn given_no_api_key_when_adding_with_tags_then_text_is_saved_degraded() {
    let temp = tempfile::tempdir().unwrap();
    let db_path = temp.path().join("ticklist.db");
    let db_url = db_path.to_str().unwrap();

    ticklist().args(["create-db", db_url]).assert().success();

    // Extraction fails (no credential) but the entry must still be saved.
    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .env_remove("OPENAI_API_KEY")
        .args(["add", "明天和张三讨论GitHub项目进展"])
        .assert()
        .success()
        .stderr(predicate::str::contains("OPENAI_API_KEY"))
        .stderr(predicate::str::contains("saving without tags"));

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("明天和张三讨论GitHub项目进展"));
}

#[test]
fn given_trash_flow_when_driven_from_cli_then_views_track_state() {
    let temp = tempfile::tempdir().unwrap();
    let db_path = temp.path().join("ticklist.db");
    let db_url = db_path.to_str().unwrap();

    ticklist().args(["create-db", db_url]).assert().success();
    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["add", "disposable", "--no-tags"])
        .assert()
        .success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["delete", "1"])
        .assert()
        .success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("disposable").not());

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("disposable"));

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["restore", "1"])
        .assert()
        .success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("disposable"));

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["delete", "1"])
        .assert()
        .success();
    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["purge", "1", "--yes"])
        .assert()
        .success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("disposable").not());
}

#[test]
fn given_invalid_filter_when_listing_then_fails_with_usage_error() {
    let temp = tempfile::tempdir().unwrap();
    let db_path = temp.path().join("ticklist.db");
    let db_url = db_path.to_str().unwrap();

    ticklist().args(["create-db", db_url]).assert().success();

    ticklist()
        .env("TICKLIST_DB_URL", db_url)
        .args(["list", "--filter", "color=red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tag field"));
}
