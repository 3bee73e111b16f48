#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("phonebook").unwrap();
        cmd.current_dir(self.dir.path())
            .env("PHONEBOOK_GLOBAL_DATA", self.dir.path().join("global"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn add(&self, surname: &str, name: &str) {
        self.cmd()
            .args(["add", "--surname", surname, "--name", name])
            .assert()
            .success()
            .stdout(predicate::str::contains("Contact added"));
    }
}

#[test]
fn add_then_list_in_project_scope() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "add",
            "--surname",
            "Ivanov",
            "--name",
            "Ivan",
            "--patronymic",
            "Ivanovich",
            "--organization",
            "Acme",
            "--work-phone",
            "123",
            "--personal-phone",
            "456",
        ])
        .assert()
        .success();

    assert!(env.dir.path().join(".phonebook").join("phonebook.txt").exists());

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ivanov Ivan Ivanovich, Acme, Work: 123, Personal: 456",
        ));
}

#[test]
fn empty_phonebook_lists_nothing() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));
}

#[test]
fn list_numbers_continue_across_pages() {
    let env = TestEnv::new();
    for i in 1..=7 {
        env.add(&format!("Person{}", i), "X");
    }

    env.cmd()
        .args(["list", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.").and(predicate::str::contains("Person7")))
        .stdout(predicate::str::contains("Person1 ").not());

    env.cmd()
        .args(["list", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 is empty"));
}

#[test]
fn edit_replaces_by_displayed_number() {
    let env = TestEnv::new();
    env.add("Smith", "Ann");
    env.add("Jones", "Bob");

    env.cmd()
        .args(["edit", "2", "--surname", "Brown", "--name", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact #2 updated"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brown Bob").and(predicate::str::contains("Jones").not()));
}

#[test]
fn edit_out_of_range_changes_nothing() {
    let env = TestEnv::new();
    env.add("Smith", "Ann");
    let path = env.dir.path().join(".phonebook").join("phonebook.txt");
    let before = fs::read_to_string(&path).unwrap();

    for number in ["0", "5"] {
        env.cmd()
            .args(["edit", number, "--surname", "Ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("nothing changed"));
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn search_by_flags_and_terms() {
    let env = TestEnv::new();
    env.add("Smith", "Ann");
    env.add("smith", "Bob");

    env.cmd()
        .args(["search", "--surname", "SMITH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith Ann").and(predicate::str::contains("smith Bob")));

    env.cmd()
        .args(["search", "--surname", "smith", "--where", "name=ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith Ann").and(predicate::str::contains("Bob").not()));

    env.cmd()
        .args(["search", "--surname", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn file_flag_overrides_scope() {
    let env = TestEnv::new();
    let custom = env.dir.path().join("custom.json");

    env.cmd()
        .args(["add", "--surname", "Custom", "--file"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!env.dir.path().join(".phonebook").exists());
}

#[test]
fn global_scope_uses_global_data_dir() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-g", "add", "--surname", "Everywhere"])
        .assert()
        .success();

    assert!(env
        .dir
        .path()
        .join("global")
        .join("phonebook.txt")
        .exists());

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."));
}

#[test]
fn config_page_size_controls_listing() {
    let env = TestEnv::new();
    for i in 1..=3 {
        env.add(&format!("Person{}", i), "X");
    }

    env.cmd()
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    env.cmd()
        .args(["list", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. ").and(predicate::str::contains("Page 2 of 2")));

    env.cmd()
        .args(["config", "page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page-size must be at least 1"));
}

#[test]
fn malformed_file_is_reported() {
    let env = TestEnv::new();
    let dir = env.dir.path().join(".phonebook");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("phonebook.txt"), "{ not a list").unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Malformed storage"));
}
