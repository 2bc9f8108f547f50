//! End-to-end tests for the month-sorter binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn month_sorter() -> Command {
    Command::cargo_bin("month-sorter").expect("binary builds")
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), name.as_bytes()).expect("write fixture");
}

/// Two dated files land in two new month folders
#[test]
fn sorts_dated_files_into_month_folders() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "20240115_img1.jpg");
    touch(dir.path(), "20240220_img2.png");

    month_sorter()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total de arquivos movidos: 2 arquivos movidos",
        ))
        .stdout(predicate::str::contains("Tempo passado:"))
        .stdout(predicate::str::contains("milliseconds"));

    assert!(dir.path().join("janeiro-2024/20240115_img1.jpg").is_file());
    assert!(dir.path().join("fevereiro-2024/20240220_img2.png").is_file());
}

/// Without an argument the current directory is sorted
#[test]
fn defaults_to_current_directory() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "20230704_party.jpg");

    month_sorter()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total de arquivos movidos: 1"));

    assert!(dir.path().join("julho-2023/20230704_party.jpg").is_file());
}

/// Files without a dated name are filed somewhere by their creation time
#[test]
fn undated_file_is_filed_by_creation_time() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "20991231_future.jpg");

    month_sorter()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total de arquivos movidos: 2"));

    assert!(!dir.path().join("notes.txt").exists());
    assert!(!dir.path().join("20991231_future.jpg").exists());
    assert!(!dir.path().join("dezembro-2099").exists());

    let folders: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(folders.iter().all(|p| p.is_dir()));
    assert!(
        folders
            .iter()
            .any(|p| p.join("notes.txt").is_file())
    );
}

/// A missing target directory aborts with status 1 and creates nothing
#[test]
fn missing_directory_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    month_sorter()
        .current_dir(dir.path())
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("erro ao abrir a pasta!"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Dry run reports planned moves and leaves files in place
#[test]
fn dry_run_moves_nothing() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "20240115_img1.jpg");

    month_sorter()
        .arg("--dry-run")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total de arquivos movidos: 0"))
        .stdout(predicate::str::contains("1 arquivos seriam movidos"));

    assert!(dir.path().join("20240115_img1.jpg").is_file());
    assert!(!dir.path().join("janeiro-2024").exists());
}

#[test]
fn rejects_extra_arguments() {
    month_sorter().args(["a", "b"]).assert().failure().code(2);
}
