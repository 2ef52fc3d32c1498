//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read a file below the root.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    /// Whether `path` exists below the root.
    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    /// Every path below the root with its content (`None` for directories),
    /// relative and sorted.
    pub fn snapshot(&self) -> Vec<(String, Option<String>)> {
        let mut entries = Vec::new();
        collect(self.dir.path(), self.dir.path(), &mut entries);
        entries.sort();
        entries
    }
}

fn collect(root: &Path, dir: &Path, entries: &mut Vec<(String, Option<String>)>) {
    for entry in fs::read_dir(dir).expect("Failed to read dir") {
        let path = entry.expect("Failed to read entry").path();
        let relative = path
            .strip_prefix(root)
            .expect("entry outside root")
            .to_string_lossy()
            .to_string();
        if path.is_dir() {
            entries.push((relative, None));
            collect(root, &path, entries);
        } else {
            entries.push((relative, fs::read_to_string(&path).ok()));
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lists_files_and_dirs() {
        let tree = TestTree::new();
        tree.add_file("a/b.txt", "b");
        tree.add_dir("empty");

        let snapshot = tree.snapshot();
        assert_eq!(
            snapshot,
            vec![
                ("a".to_string(), None),
                ("a/b.txt".to_string(), Some("b".to_string())),
                ("empty".to_string(), None),
            ]
        );
    }
}
