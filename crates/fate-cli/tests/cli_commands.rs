#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate – no public API to document

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fresh data directory with a table and one character in it.
fn seeded_table() -> TempDir {
    let dir = TempDir::new().unwrap();
    nexus(&dir).args(["new", "Mara"]).assert().success();
    nexus(&dir)
        .args(["character", "add", "Kira Voss"])
        .assert()
        .success();
    dir
}

/// A `nexus` command pointed at the given data directory.
fn nexus(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nexus").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn new_writes_a_snapshot() {
    let dir = TempDir::new().unwrap();
    nexus(&dir)
        .args(["new", "Mara"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invite code:"));
    assert!(dir.path().join("session.json").exists());
}

#[test]
fn new_refuses_over_an_existing_table() {
    let dir = TempDir::new().unwrap();
    nexus(&dir).args(["new", "Mara"]).assert().success();
    nexus(&dir)
        .args(["new", "Rook"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn status_without_a_table_explains() {
    let dir = TempDir::new().unwrap();
    nexus(&dir)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no active table"));
}

#[test]
fn status_shows_the_table() {
    let dir = seeded_table();
    nexus(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mara's table"))
        .stdout(predicate::str::contains("Characters:   1"));
}

#[test]
fn join_carries_the_code() {
    let dir = TempDir::new().unwrap();
    nexus(&dir)
        .args(["join", "ab12cd", "Rook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AB12CD"));
    nexus(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AB12CD"))
        .stdout(predicate::str::contains("(player)"));
}

#[test]
fn character_list_and_show() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["character", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kira Voss"));
    nexus(&dir)
        .args(["character", "show", "Kira Voss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fate points: 3"))
        .stdout(predicate::str::contains("Mild (-2)"));
}

#[test]
fn character_set_updates_fields() {
    let dir = seeded_table();
    nexus(&dir)
        .args([
            "character",
            "set",
            "Kira Voss",
            "--concept",
            "Disgraced fleet navigator",
        ])
        .assert()
        .success();
    nexus(&dir)
        .args(["character", "show", "Kira Voss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disgraced fleet navigator"));
}

#[test]
fn fate_points_clamp_at_zero() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["fate", "Kira Voss", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fate points: 0"));
    nexus(&dir)
        .args(["fate", "Kira Voss", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fate points: 2"));
}

#[test]
fn stress_toggle_fills_forward() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["stress", "toggle", "Kira Voss", "physical", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physical: [x][x]"));
    // Toggling the tip again undoes only that box.
    nexus(&dir)
        .args(["stress", "toggle", "Kira Voss", "physical", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Physical: [x][ ]"));
}

#[test]
fn protected_track_refuses_removal() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["stress", "remove", "Kira Voss", "physical"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("protected"));
}

#[test]
fn skills_render_highest_first() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["skill", "label", "Kira Voss", "+5", "1", "Athletics"])
        .assert()
        .success();
    let output = nexus(&dir)
        .args(["character", "show", "Kira Voss"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let athletics = stdout.find("Athletics").unwrap();
    let zero_row = stdout.find("  0  ").unwrap();
    assert!(athletics < zero_row, "+5 should render before 0");
}

#[test]
fn roll_records_a_log_entry() {
    let dir = seeded_table();
    nexus(&dir)
        .args(["roll", "--modifier", "2", "--label", "Fight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kira Voss rolls Fight"));
    nexus(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fight"));
}

#[test]
fn say_appends_plain_text() {
    let dir = seeded_table();
    nexus(&dir).args(["say", "hello"]).assert().success();
    nexus(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mara: hello"));
}

#[test]
fn oracle_failure_falls_back() {
    let dir = seeded_table();
    nexus(&dir)
        .env("FATE_ORACLE_URL", "http://127.0.0.1:1/v1/chat/completions")
        .args(["say", "/ai tell me a story"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spirits of the weave"));
    nexus(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("spirits of the weave"));
}

#[test]
fn export_then_import_round_trips() {
    let dir = seeded_table();
    let doc = dir.path().join("kira.json");

    nexus(&dir)
        .args(["character", "set", "Kira Voss", "--trouble", "Hunted"])
        .assert()
        .success();
    nexus(&dir)
        .arg("export")
        .arg("Kira Voss")
        .arg("--output")
        .arg(&doc)
        .assert()
        .success();

    nexus(&dir).args(["reset", "--force"]).assert().success();
    nexus(&dir).args(["new", "Mara"]).assert().success();
    nexus(&dir).arg("import").arg(&doc).assert().success();

    nexus(&dir)
        .args(["character", "show", "Kira Voss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hunted"));
}

#[test]
fn reset_force_deletes_the_snapshot() {
    let dir = seeded_table();
    nexus(&dir).args(["reset", "--force"]).assert().success();
    assert!(!dir.path().join("session.json").exists());
}
