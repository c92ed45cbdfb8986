// tests/integration/live_tree.rs
use std::{fs, path::PathBuf};

use tree_inventory::{app, cli::LogLevel, config::ScanConfig};
use tree_inventory_infra::{FsMetadataExtractor, TreeWalker, Xxh3ContentHasher};
use tree_inventory_shared_kernel::Concurrency;
use tree_inventory_usecase::WorkerPool;

use crate::common::{Inventory, TreeFixture};

fn populate(fx: &TreeFixture) {
    for d in 0..12 {
        for f in 0..25 {
            fx.file(&format!("d{d}/n{}/f{f}.dat", f % 3), format!("{d}:{f}").as_bytes());
        }
    }
}

#[test]
fn worker_count_does_not_change_the_row_set() {
    let fx = TreeFixture::new();
    populate(&fx);

    let mut inventories = Vec::new();
    for workers in [1, 8] {
        let config = ScanConfig {
            root: fx.root().to_path_buf(),
            output: fx.out_dir().join(format!("w{workers}.csv")),
            concurrency: Concurrency::new(workers),
            chunk_size: 4096,
            progress: false,
            log_level: LogLevel::Warn,
        };
        let report = app::run(&config).unwrap();
        assert_eq!(report.summary.records_written, 300);
        inventories.push(Inventory::read(&report.output));
    }

    let mut serial = inventories[0].rows.clone();
    let mut parallel = inventories[1].rows.clone();
    serial.sort();
    parallel.sort();
    assert_eq!(serial, parallel);
}

#[test]
fn file_deleted_after_discovery_is_skipped() {
    let fx = TreeFixture::new();
    fx.file("keep/a.txt", b"a");
    fx.file("keep/b.txt", b"b");
    let doomed = fx.file("gone/c.txt", b"c");

    let discovered: Vec<PathBuf> = TreeWalker::new().walk(fx.root()).collect();
    assert_eq!(discovered.len(), 3);
    fs::remove_file(&doomed).unwrap();

    let extractor = FsMetadataExtractor::new(Xxh3ContentHasher::new());
    let records = WorkerPool::new(Concurrency::new(2)).collect(discovered, &extractor).unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.path().as_path() != doomed.as_path()));
}

#[test]
fn very_deep_tree_is_fully_listed() {
    let fx = TreeFixture::new();
    let rel: PathBuf = (0..300).map(|i| format!("d{i}")).collect();
    let deep = fx.dir(&rel.to_string_lossy());
    fs::write(deep.join("bottom.txt"), b"deep").unwrap();
    fx.file("top.txt", b"top");

    let config = ScanConfig {
        root: fx.root().to_path_buf(),
        output: fx.out_dir().join("deep.csv"),
        concurrency: Concurrency::new(2),
        chunk_size: 64,
        progress: false,
        log_level: LogLevel::Warn,
    };
    let report = app::run(&config).unwrap();

    let inv = Inventory::read(&report.output);
    assert_eq!(inv.rows.len(), 2);
    assert_eq!(inv.get(inv.row("bottom.txt"), "size"), "4");
}
