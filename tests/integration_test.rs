use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn notemap_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notemap"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd.env_remove("NOTEMAP_DIR");
    cmd
}

fn run(data_dir: &Path, args: &[&str]) -> Output {
    notemap_cmd(data_dir).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Initialized data dir with first-run seeding switched off.
fn init_without_seeding() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("data");
    assert!(run(&dir, &["init"]).status.success());
    fs::write(dir.join("config.yaml"), "seed_on_first_run: false\n").unwrap();
    (tmp, dir)
}

fn list_json(dir: &Path) -> Vec<Value> {
    let output = run(dir, &["list", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

fn add_json(dir: &Path, args: &[&str]) -> Value {
    let mut full = vec!["add"];
    full.extend_from_slice(args);
    full.push("--json");
    let output = run(dir, &full);
    assert!(output.status.success(), "{}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn test_init_creates_data_directory() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("data");

    let output = run(&dir, &["init"]);
    assert!(output.status.success());
    assert!(dir.join("config.yaml").exists());
    assert!(stdout(&output).contains("Initialized notemap"));
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    run(tmp.path(), &["init"]);

    let output = run(tmp.path(), &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Already initialized"));
}

#[test]
fn test_add_without_init_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["add", "Cafe", "--lat", "10", "--lon", "20"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Run 'notemap init' first"));
}

#[test]
fn test_add_then_list() {
    let (_tmp, dir) = init_without_seeding();

    let created = add_json(&dir, &["Cafe", "--lat", "10", "--lon", "20"]);
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["description"], "No description");

    let notes = list_json(&dir);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0], created);
    assert_eq!(notes[0]["latitude"], 10.0);
    assert_eq!(notes[0]["longitude"], 20.0);
}

#[test]
fn test_notes_file_is_plain_json_array() {
    let (_tmp, dir) = init_without_seeding();
    add_json(
        &dir,
        &["Pin", "--lat", "1", "--lon", "2", "--image", "file:///p.jpg"],
    );

    let raw = fs::read_to_string(dir.join("notemap_notes.json")).unwrap();
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["imageUri"], "file:///p.jpg");
}

#[test]
fn test_negative_coordinates() {
    let (_tmp, dir) = init_without_seeding();
    let created = add_json(&dir, &["Harbour", "--lat", "-33.85", "--lon", "-151.2"]);
    assert_eq!(created["latitude"], -33.85);
    assert_eq!(created["longitude"], -151.2);
}

#[test]
fn test_blank_title_rejected() {
    let (_tmp, dir) = init_without_seeding();
    let output = run(&dir, &["add", "   ", "--lat", "1", "--lon", "2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("title is required"));
    assert!(list_json(&dir).is_empty());
}

#[test]
fn test_first_add_seeds_samples_once() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("data");
    assert!(run(&dir, &["init"]).status.success());

    let output = run(&dir, &["add", "Home", "--lat", "48.85", "--lon", "2.35"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Added 10 sample notes"));
    assert_eq!(list_json(&dir).len(), 11);

    let output = run(&dir, &["add", "Work", "--lat", "48.86", "--lon", "2.34"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("sample notes"));

    let notes = list_json(&dir);
    assert_eq!(notes.len(), 12);
    assert_eq!(notes[11]["title"], "Work");
}

#[test]
fn test_seed_command_runs_once() {
    let (_tmp, dir) = init_without_seeding();

    let output = run(&dir, &["seed", "--lat", "10", "--lon", "20"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Added 10 sample notes"));
    assert!(stdout(&output).contains("Coffee Shop"));

    let output = run(&dir, &["seed", "--lat", "10", "--lon", "20"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already generated"));
    assert_eq!(list_json(&dir).len(), 10);
}

#[test]
fn test_update_keeps_position() {
    let (_tmp, dir) = init_without_seeding();
    let created = add_json(&dir, &["Old", "--lat", "1", "--lon", "2"]);
    let id = created["id"].as_str().unwrap();

    let output = run(&dir, &["update", id, "--title", "X", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let updated: Value = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "X");
    assert_eq!(updated["latitude"], 1.0);
    assert_eq!(updated["longitude"], 2.0);
    assert_eq!(updated["date"], created["date"]);
    assert_eq!(list_json(&dir), vec![updated]);
}

#[test]
fn test_update_clear_image() {
    let (_tmp, dir) = init_without_seeding();
    let created = add_json(
        &dir,
        &["Pic", "--lat", "1", "--lon", "2", "--image", "file:///x.png"],
    );
    let id = created["id"].as_str().unwrap();

    let output = run(&dir, &["update", id, "--clear-image", "--json"]);
    assert!(output.status.success());
    let updated: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(updated.get("imageUri").is_none());
}

#[test]
fn test_update_missing_note_fails() {
    let (_tmp, dir) = init_without_seeding();
    add_json(&dir, &["Keep", "--lat", "1", "--lon", "2"]);
    let before = list_json(&dir);

    let output = run(&dir, &["update", "nonexistent", "--title", "X"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Note not found: nonexistent"));
    assert_eq!(list_json(&dir), before);
}

#[test]
fn test_show() {
    let (_tmp, dir) = init_without_seeding();
    let created = add_json(&dir, &["Cafe", "--lat", "1", "--lon", "2", "-d", "Flat white"]);
    let id = created["id"].as_str().unwrap();

    let output = run(&dir, &["show", id]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Cafe"));
    assert!(out.contains("Flat white"));

    let output = run(&dir, &["show", "nonexistent"]);
    assert!(!output.status.success());
}

#[test]
fn test_delete_force() {
    let (_tmp, dir) = init_without_seeding();
    let a = add_json(&dir, &["A", "--lat", "1", "--lon", "2"]);
    let b = add_json(&dir, &["B", "--lat", "3", "--lon", "4"]);

    let output = run(&dir, &["delete", a["id"].as_str().unwrap(), "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Deleted note \"A\""));
    assert_eq!(list_json(&dir), vec![b]);
}

#[test]
fn test_delete_missing_is_not_an_error() {
    let (_tmp, dir) = init_without_seeding();
    add_json(&dir, &["A", "--lat", "1", "--lon", "2"]);

    let output = run(&dir, &["delete", "nonexistent", "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No note with id nonexistent"));
    assert_eq!(list_json(&dir).len(), 1);
}

#[test]
fn test_delete_without_force_non_interactive_fails() {
    let (_tmp, dir) = init_without_seeding();
    let a = add_json(&dir, &["A", "--lat", "1", "--lon", "2"]);

    let output = run(&dir, &["delete", a["id"].as_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert_eq!(list_json(&dir).len(), 1);
}

#[test]
fn test_corrupt_notes_file_is_reported_and_kept() {
    let (_tmp, dir) = init_without_seeding();
    let path = dir.join("notemap_notes.json");
    fs::write(&path, "{oops").unwrap();

    let output = run(&dir, &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("corrupt"));

    let output = run(&dir, &["add", "A", "--lat", "1", "--lon", "2"]);
    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{oops");
}
