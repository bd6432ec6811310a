use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cli, init_db, setup_test_db};

fn add(db_path: &str, args: &[&str]) {
    cli()
        .args(["--db", db_path, "add"])
        .args(args)
        .assert()
        .success();
}

fn seed(db_path: &str) {
    init_db(db_path);
    add(db_path, &["enter", "Doc", "--date", "1985-10-26T09:00:00Z"]);
    add(
        db_path,
        &["comment", "Doc", "-m", "Great Scott!", "--date", "1985-10-26T09:02:00Z"],
    );
    add(
        db_path,
        &["highfive", "Marty", "--other", "Doc", "--date", "1985-10-26T09:03:00Z"],
    );
    add(db_path, &["leave", "Marty", "--date", "1985-10-27T09:00:00Z"]);
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    cli()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    seed(&db_path);

    cli()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(
            contains("Great Scott!")
                .and(contains("highfive"))
                .and(contains("4 event(s)")),
        );
}

#[test]
fn test_add_rejects_unknown_type() {
    let db_path = setup_test_db("cli_add_bad_type");
    init_db(&db_path);

    cli()
        .args(["--db", &db_path, "add", "teleport", "Doc"])
        .assert()
        .failure()
        .stderr(contains("Invalid event"));
}

#[test]
fn test_add_rejects_bare_date() {
    let db_path = setup_test_db("cli_add_bad_date");
    init_db(&db_path);

    cli()
        .args(["--db", &db_path, "add", "enter", "Doc", "--date", "1985-10-26"])
        .assert()
        .failure()
        .stderr(contains("invalid date"));
}

#[test]
fn test_list_json_with_range() {
    let db_path = setup_test_db("cli_list_json");
    seed(&db_path);

    cli()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "1985-10-27T00:00:00Z",
            "--json",
        ])
        .assert()
        .success()
        .stdout(
            contains("\"events\"")
                .and(contains("1985-10-27T09:00:00Z"))
                .and(contains("1985-10-26T09:00:00Z").not()),
        );
}

#[test]
fn test_summary_by_day_json() {
    let db_path = setup_test_db("cli_summary_day");
    seed(&db_path);

    cli()
        .args([
            "--db",
            &db_path,
            "summary",
            "--from",
            "1985-10-26T00:00:00Z",
            "--to",
            "1985-10-27T00:00:00Z",
            "--by",
            "day",
            "--json",
        ])
        .assert()
        .success()
        .stdout(
            contains("\"date\": \"1985-10-26T00:00:00Z\"")
                .and(contains("\"highfives\": 1"))
                .and(contains("1985-10-27T00:00:00Z")),
        );
}

#[test]
fn test_summary_requires_range() {
    let db_path = setup_test_db("cli_summary_missing");
    seed(&db_path);

    cli()
        .args(["--db", &db_path, "summary", "--from", "1985-10-26T00:00:00Z"])
        .assert()
        .failure()
        .stderr(contains("Both 'from' and 'to' are required"));
}

#[test]
fn test_clear_then_list_is_empty() {
    let db_path = setup_test_db("cli_clear");
    seed(&db_path);

    cli()
        .args(["--db", &db_path, "clear"])
        .assert()
        .success()
        .stdout(contains("Removed 4 event(s)"));

    cli()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No events recorded"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log_print");
    seed(&db_path);

    cli()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("insert").and(contains("init")));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db_info");
    seed(&db_path);

    cli()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("4")));
}

#[test]
fn test_config_print_and_check_without_file() {
    let mut home = std::env::temp_dir();
    home.push("chatlog_cli_config_home");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&home).unwrap();

    cli()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("summary_order: chronological").and(contains("port: 3000")));

    cli()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("defaults are in use"));
}
