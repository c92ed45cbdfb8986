// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use tree_inventory::{app, cli::LogLevel, config::ScanConfig};
use tree_inventory_infra::Xxh3ContentHasher;
use tree_inventory_ports::sink::COLUMNS;
use tree_inventory_shared_kernel::{Concurrency, InputError, InventoryError};

use crate::common::{Inventory, TreeFixture};

fn config(root: &Path, output: &Path, workers: usize) -> ScanConfig {
    ScanConfig {
        root: root.to_path_buf(),
        output: output.to_path_buf(),
        concurrency: Concurrency::new(workers),
        chunk_size: 7,
        progress: false,
        log_level: LogLevel::Warn,
    }
}

fn hex(data: &[u8]) -> String {
    Xxh3ContentHasher::new().hash_bytes(data).to_string()
}

#[test]
fn small_tree_yields_header_and_one_row_per_file() {
    let fx = TreeFixture::new();
    fx.file("a.txt", b"hello");
    fx.file("sub/b.txt", b"");
    let output = fx.out_dir().join("inv.csv");

    let report = app::run(&config(fx.root(), &output, 2)).unwrap();
    assert_eq!(report.output, output);
    assert_eq!(report.summary.records_written, 2);
    assert!(!report.summary.is_partial());

    let inv = Inventory::read(&output);
    assert_eq!(inv.header, COLUMNS.map(String::from).to_vec());
    assert_eq!(inv.rows.len(), 2);

    let a = inv.row("a.txt");
    assert_eq!(inv.get(a, "filename"), "a.txt");
    assert_eq!(inv.get(a, "size"), "5");
    assert_eq!(inv.get(a, "pretty-size"), "5 B");
    assert_eq!(inv.get(a, "extension"), "txt");
    assert_eq!(inv.get(a, "hash"), hex(b"hello"));
    assert_eq!(Path::new(inv.get(a, "folder")), fx.root());
    assert!(inv.get(a, "path-link").starts_with("file://"));
    assert!(inv.get(a, "modified").contains('T'));

    let b = inv.row("sub/b.txt");
    assert_eq!(inv.get(b, "size"), "0");
    assert_eq!(inv.get(b, "hash"), hex(b""));
    assert_eq!(inv.get(b, "hash").len(), 32);
    assert_eq!(Path::new(inv.get(b, "folder")), fx.root().join("sub"));
}

#[test]
fn empty_root_yields_only_the_header() {
    let fx = TreeFixture::new();
    fx.dir("nothing/here");
    let output = fx.out_dir().join("empty.csv");

    let report = app::run(&config(fx.root(), &output, 4)).unwrap();

    assert_eq!(report.summary.records_written, 0);
    let inv = Inventory::read(&output);
    assert_eq!(inv.header.len(), COLUMNS.len());
    assert!(inv.rows.is_empty());
}

#[test]
fn identical_content_shares_a_hash() {
    let fx = TreeFixture::new();
    let payload = vec![0xA5u8; 100_000];
    fx.file("one/copy.bin", &payload);
    fx.file("two/copy.bin", &payload);
    fx.file("two/other.bin", b"different");
    let output = fx.out_dir().join("dupes.csv");

    app::run(&config(fx.root(), &output, 3)).unwrap();

    let inv = Inventory::read(&output);
    let first = inv.get(inv.row("one/copy.bin"), "hash").to_string();
    assert_eq!(first, inv.get(inv.row("two/copy.bin"), "hash"));
    assert_ne!(first, inv.get(inv.row("two/other.bin"), "hash"));
}

#[test]
fn existing_output_is_never_overwritten() {
    let fx = TreeFixture::new();
    fx.file("a.txt", b"x");
    let desired = fx.out_dir().join("report.csv");
    fs::write(&desired, b"previous run").unwrap();

    let report = app::run(&config(fx.root(), &desired, 1)).unwrap();

    assert_eq!(report.output, fx.out_dir().join("report (1).csv"));
    assert_eq!(fs::read(&desired).unwrap(), b"previous run");
    assert_eq!(Inventory::read(&report.output).rows.len(), 1);
}

#[test]
fn missing_root_fails_before_creating_output() {
    let fx = TreeFixture::new();
    let output = fx.out_dir().join("never.csv");

    let err = app::run(&config(&fx.root().join("absent"), &output, 1)).unwrap_err();

    assert!(matches!(err, InventoryError::Input(InputError::RootNotFound { .. })));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn awkward_names_survive_csv_quoting() {
    let fx = TreeFixture::new();
    fx.file("with, comma.txt", b"1");
    fx.file("say \"hi\".md", b"2");
    fx.file(".bashrc", b"3");
    let output = fx.out_dir().join("quoted.csv");

    app::run(&config(fx.root(), &output, 2)).unwrap();

    let inv = Inventory::read(&output);
    assert_eq!(inv.rows.len(), 3);
    assert_eq!(inv.get(inv.row("with, comma.txt"), "filename"), "with, comma.txt");
    assert_eq!(inv.get(inv.row("say \"hi\".md"), "extension"), "md");
    assert_eq!(inv.get(inv.row(".bashrc"), "extension"), "bashrc");
    assert!(inv.get(inv.row("with, comma.txt"), "path-link").ends_with("with,%20comma.txt"));
}

#[test]
fn output_inside_the_root_is_not_inventoried() {
    let fx = TreeFixture::new();
    fx.file("a.txt", b"a");
    let output = fx.root().join("self.csv");

    let report = app::run(&config(fx.root(), &output, 2)).unwrap();

    assert_eq!(report.summary.records_written, 1);
    assert_eq!(Inventory::read(&output).rows.len(), 1);
}
