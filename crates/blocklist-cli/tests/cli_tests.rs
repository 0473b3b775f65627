//! End-to-end tests for the blocklist-sync binary.

use assert_cmd::Command;
use predicates::prelude::*;

use blocklist_formats::parse_blocklist;
use blocklist_test_utils::TestSaveData;

fn blocklist_sync() -> Command {
    Command::cargo_bin("blocklist-sync").unwrap()
}

#[test]
fn test_status_on_empty_save_data() {
    let savedata = TestSaveData::new();

    blocklist_sync()
        .args(["status", "--data-dir"])
        .arg(savedata.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("none at"));
}

#[test]
fn test_status_counts_seeded_files() {
    let savedata = TestSaveData::new();
    savedata.write_blocklist(
        "NODE\n{\n\tUSER\n\t{\n\t\tid = 1\n\t\tsteamName = A\n\t\tpilotName = A\n\t}\n}",
    );
    savedata.write_allowlist(&["2", "3"]);

    blocklist_sync()
        .args(["status", "--data-dir"])
        .arg(savedata.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 users"))
        .stdout(predicate::str::contains("2 ids"));
}

#[test]
fn test_sync_writes_merged_blocklist() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/feed")
        .with_status(200)
        .with_body("1,Alice\n2,Bob\n")
        .create();

    let savedata = TestSaveData::new();
    savedata.write_allowlist(&["2"]);

    blocklist_sync()
        .args(["sync", "--url", &format!("{}/feed", server.url()), "--data-dir"])
        .arg(savedata.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Final blocklist has 1 users"));

    let written = parse_blocklist(&savedata.read_blocklist());
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].id, "1");
}

#[test]
fn test_sync_dry_run_leaves_no_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/feed")
        .with_status(200)
        .with_body("1,Alice\n")
        .create();

    let savedata = TestSaveData::new();

    blocklist_sync()
        .args(["sync", "--dry-run", "--url", &format!("{}/feed", server.url()), "--data-dir"])
        .arg(savedata.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!savedata.blocklist_exists());
}

#[test]
fn test_sync_json_report() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/feed")
        .with_status(200)
        .with_body("1,Alice\n")
        .create();

    let savedata = TestSaveData::new();

    blocklist_sync()
        .args(["sync", "--json", "--url", &format!("{}/feed", server.url()), "--data-dir"])
        .arg(savedata.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 1"))
        .stdout(predicate::str::contains("\"wrote_file\": true"));
}

#[test]
fn test_failed_fetch_exits_nonzero_and_preserves_blocklist() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/feed").with_status(500).create();

    let savedata = TestSaveData::new();
    let seeded = "NODE\n{\n\tUSER\n\t{\n\t\tid = 1\n\t\tsteamName = A\n\t\tpilotName = A\n\t}\n}";
    savedata.write_blocklist(seeded);

    blocklist_sync()
        .args(["sync", "--url", &format!("{}/feed", server.url()), "--data-dir"])
        .arg(savedata.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    assert_eq!(savedata.read_blocklist(), seeded);
}

#[test]
fn test_bare_invocation_syncs_via_config_file() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/feed")
        .with_status(200)
        .with_body("1,Alice\n")
        .create();

    let savedata = TestSaveData::new();
    let config_home = tempfile::TempDir::new().unwrap();
    let config_dir = config_home.path().join("blocklist-sync");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "feed_url = \"{}/feed\"\nsave_data_dir = \"{}\"\n",
            server.url(),
            savedata.root().display()
        ),
    )
    .unwrap();

    blocklist_sync()
        .env("XDG_CONFIG_HOME", config_home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Final blocklist has 1 users"));

    assert!(savedata.blocklist_exists());
}
