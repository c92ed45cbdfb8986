use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tree_inventory"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--jobs").and(predicate::str::contains("--output")));
}

#[test]
fn writes_inventory_and_reports_summary() {
    let tree = TempDir::new().unwrap();
    fs::write(tree.path().join("a.txt"), b"hello").unwrap();
    fs::create_dir(tree.path().join("sub")).unwrap();
    fs::write(tree.path().join("sub").join("b.txt"), b"").unwrap();
    let out = TempDir::new().unwrap();
    let csv_path = out.path().join("inv.csv");

    bin()
        .arg(tree.path())
        .arg("--output")
        .arg(&csv_path)
        .args(["--jobs", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("2 rows written").and(predicate::str::contains("elapsed")));

    let text = fs::read_to_string(&csv_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("path-link,path,folder,filename,modified,size,pretty-size,extension,hash")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn default_output_lands_in_working_directory() {
    let tree = TempDir::new().unwrap();
    let root = tree.path().join("photos");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("x.jpg"), b"jpeg").unwrap();
    let cwd = TempDir::new().unwrap();

    bin().current_dir(cwd.path()).arg(&root).assert().success();

    assert!(cwd.path().join("photos_inventory.csv").is_file());
}

#[test]
fn root_is_read_from_stdin_when_omitted() {
    let tree = TempDir::new().unwrap();
    fs::write(tree.path().join("only.txt"), b"1").unwrap();
    let out = TempDir::new().unwrap();
    let csv_path = out.path().join("prompted.csv");

    bin()
        .arg("--output")
        .arg(&csv_path)
        .write_stdin(format!("\"{}\"\n", tree.path().display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Directory to inventory"));

    assert!(csv_path.is_file());
}

#[test]
fn missing_root_exits_with_failure() {
    let out = TempDir::new().unwrap();
    let csv_path = out.path().join("never.csv");

    bin()
        .arg(out.path().join("does-not-exist"))
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!csv_path.exists());
}

#[test]
fn file_as_root_exits_with_failure() {
    let tree = TempDir::new().unwrap();
    let file = tree.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    bin()
        .arg(&file)
        .arg("--output")
        .arg(tree.path().join("out.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn zero_chunk_size_is_rejected() {
    bin().args([".", "--chunk-size", "0"]).assert().failure();
}
