//! Integration tests for the Cafe CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cafe(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cafe").unwrap();
    cmd.env_remove("CAFE_DATABASE_PATH").arg("--db").arg(db);
    cmd
}

fn add_cafe(db: &Path, name: &str, location: &str) {
    cafe(db)
        .args([
            "add",
            "--name",
            name,
            "--map-url",
            "https://goo.gl/maps/abc",
            "--img-url",
            "https://example.com/cafe.jpg",
            "--location",
            location,
            "--seats",
            "20-30",
            "--coffee-price",
            "£2.50",
            "--wifi",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Added {}", name)));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("cafe").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("cafe").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cafe"));
}

#[test]
fn test_init_creates_database() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    cafe(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 cafes"));

    assert!(db.exists());
}

#[test]
fn test_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    add_cafe(&db, "Zebra Coffee", "Peckham");
    add_cafe(&db, "Aardvark Beans", "Hackney");

    let output = cafe(&db).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let cafes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = cafes
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Aardvark Beans", "Zebra Coffee"]);
    assert_eq!(cafes[0]["has_wifi"], true);
    assert_eq!(cafes[0]["has_toilet"], false);
}

#[test]
fn test_add_duplicate_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    add_cafe(&db, "Test Cafe", "Peckham");

    cafe(&db)
        .args([
            "add",
            "--name",
            "Test Cafe",
            "--map-url",
            "m",
            "--img-url",
            "i",
            "--location",
            "Soho",
            "--seats",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_search() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    add_cafe(&db, "One", "Peckham");
    add_cafe(&db, "Two", "Hackney");

    cafe(&db)
        .args(["search", "Peckham"])
        .assert()
        .success()
        .stdout(predicate::str::contains("One"))
        .stdout(predicate::str::contains("Two").not());

    cafe(&db)
        .args(["search", "peckham"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cafes at peckham"));
}

#[test]
fn test_set_price_and_remove() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    add_cafe(&db, "Test Cafe", "Peckham");

    cafe(&db)
        .args(["set-price", "1", "£3.00"])
        .assert()
        .success();

    cafe(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("£3.00"));

    cafe(&db).args(["remove", "1"]).assert().success();

    cafe(&db)
        .args(["remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cafe with id 1"));
}

#[test]
fn test_import() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");
    let input = temp_dir.path().join("cafes.json");

    add_cafe(&db, "Existing", "Soho");

    fs::write(
        &input,
        r#"[
            {"name": "Existing", "map_url": "m", "img_url": "i", "location": "Soho", "seats": "10"},
            {"name": "Fresh", "map_url": "m", "img_url": "i", "location": "Soho", "seats": "10",
             "has_wifi": true, "coffee_price": "£2.20"}
        ]"#,
    )
    .unwrap();

    cafe(&db)
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 of 2 cafes (1 duplicates skipped)"));
}

#[test]
fn test_import_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("cafes.db");

    cafe(&db)
        .args(["import", "/nonexistent/cafes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}
