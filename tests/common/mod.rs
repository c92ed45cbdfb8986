// tests/common/mod.rs
//! Shared test utilities.
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// A throwaway directory tree to inventory, plus a separate place for output.
pub struct TreeFixture {
    tree: TempDir,
    out: TempDir,
}

impl TreeFixture {
    pub fn new() -> Self {
        Self {
            tree: TempDir::new().unwrap_or_else(|e| panic!("Failed to create tree dir: {e}")),
            out: TempDir::new().unwrap_or_else(|e| panic!("Failed to create output dir: {e}")),
        }
    }

    pub fn root(&self) -> &Path {
        self.tree.path()
    }

    pub fn out_dir(&self) -> &Path {
        self.out.path()
    }

    /// Create `rel` (and its parents) with `contents`.
    pub fn file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.tree.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create directory {parent:?}: {e}"));
        }
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.tree.path().join(rel);
        fs::create_dir_all(&path).unwrap_or_else(|e| panic!("Failed to create directory {path:?}: {e}"));
        path
    }
}

/// Parsed inventory: header row and data rows.
pub struct Inventory {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Inventory {
    pub fn read(path: &Path) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap_or_else(|e| panic!("Failed to open inventory {path:?}: {e}"));
        let mut records = reader
            .records()
            .map(|r| r.unwrap_or_else(|e| panic!("Malformed row in {path:?}: {e}")))
            .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>());
        let header = records.next().unwrap_or_default();
        Self { header, rows: records.collect() }
    }

    fn column(&self, name: &str) -> usize {
        self.header
            .iter()
            .position(|h| h == name)
            .unwrap_or_else(|| panic!("No column '{name}' in {:?}", self.header))
    }

    /// Row whose `path` column ends with `suffix`.
    pub fn row(&self, suffix: &str) -> &[String] {
        let path = self.column("path");
        self.rows
            .iter()
            .find(|r| Path::new(&r[path]).ends_with(suffix))
            .unwrap_or_else(|| panic!("No row for '{suffix}'"))
    }

    pub fn get<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        &row[self.column(column)]
    }

    pub fn paths(&self) -> Vec<String> {
        let path = self.column("path");
        let mut paths: Vec<String> = self.rows.iter().map(|r| r[path].clone()).collect();
        paths.sort();
        paths
    }
}
