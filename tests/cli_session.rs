#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn shelf_cmd(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("SHELF_STORE")
        .env_remove("SHELF_LOG")
        .arg("--store")
        .arg(store);
    cmd
}

#[test]
fn test_menu_session_persists_books() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("library.json");

    shelf_cmd(&store)
        .write_stdin("1\nDune\nHerbert\n1965\n1\nFoo\nBar\n2000\n2\n1\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A new one will be created"))
        .stdout(predicate::str::contains("Book 'Dune' added (id 1)."))
        .stdout(predicate::str::contains("Book 'Foo' added (id 2)."))
        .stdout(predicate::str::contains("Book 1 removed."))
        .stdout(predicate::str::contains("Goodbye."));

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&store).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        serde_json::json!([
            {"id": 2, "title": "Foo", "author": "Bar", "year": 2000, "status": "available"}
        ])
    );

    shelf_cmd(&store)
        .write_stdin("3\n2000\n3\nherbert\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A new one will be created").not())
        .stdout(predicate::str::contains(
            "Found books:\nID: 2, Title: 'Foo', Author: 'Bar', Year: 2000, Status: 'available'",
        ))
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn test_menu_reprompts_bad_numbers_and_choices() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("library.json");

    shelf_cmd(&store)
        .write_stdin("7\n1\nDune\nHerbert\nnineteen\n1965\n5\nx\n1\nlost\n5\n1\nchecked-out\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice '7'. Try again."))
        .stdout(predicate::str::contains("Please enter a valid year"))
        .stdout(predicate::str::contains("Please enter a valid id"))
        .stdout(predicate::str::contains("Invalid status 'lost'"))
        .stdout(predicate::str::contains("Status: 'checked-out'"));
}

#[test]
fn test_corrupt_store_is_reset_with_warning() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("library.json");
    fs::write(&store, "[{\"id\": 1,").unwrap();

    shelf_cmd(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("contains invalid data"))
        .stdout(predicate::str::contains("Catalog is empty."));

    shelf_cmd(&store)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();

    let content = fs::read_to_string(&store).unwrap();
    assert!(content.contains("\"title\": \"Dune\""));
}

#[test]
fn test_subcommands() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("nested").join("books.json");

    shelf_cmd(&store)
        .args(["add", "Dune", "Frank Herbert", "1965"])
        .assert()
        .success();
    shelf_cmd(&store)
        .args(["status", "1", "checked-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status changed to 'checked-out'"));
    shelf_cmd(&store)
        .args(["search", "frank", "herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: 'Dune'"));
    shelf_cmd(&store)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: 'checked-out'"));
}

#[test]
fn test_subcommand_errors_exit_nonzero() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("library.json");

    shelf_cmd(&store)
        .args(["remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book with id 3 not found"));
    shelf_cmd(&store)
        .args(["status", "1", "lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status 'lost'"));
    shelf_cmd(&store)
        .args(["add", "Dune", "Herbert", "soon"])
        .assert()
        .failure();

    // nothing was ever written
    assert!(!store.exists());
}

#[test]
fn test_store_from_env() {
    let temp = TempDir::new().unwrap();
    let store = temp.path().join("env.json");

    Command::cargo_bin("shelf")
        .unwrap()
        .env("SHELF_STORE", &store)
        .args(["add", "Dune", "Herbert", "1965"])
        .assert()
        .success();
    assert!(store.exists());
}
