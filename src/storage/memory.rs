//! An in-memory document store.

use std::collections::BTreeSet;

use crate::domain::DocumentStore;

/// An in-memory document store for tests and embedders that manage their
/// own document tree.
///
/// Directories exist implicitly as ancestors of inserted files, and can
/// also be registered explicitly so an empty sub-root is distinguishable
/// from a missing one.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl MemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, implicitly creating its ancestor directories.
    pub fn insert_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        let mut ancestor = path.as_str();
        while let Some(index) = ancestor.rfind('/') {
            ancestor = &ancestor[..index];
            self.dirs.insert(ancestor.to_string());
        }
        self.files.insert(path);
    }

    /// Adds an (empty) directory.
    pub fn insert_dir(&mut self, path: impl Into<String>) {
        self.dirs.insert(path.into());
    }

    /// Removes a file. Directories it implied are left in place, matching a
    /// real store where deleting a file keeps its folder.
    pub fn remove_file(&mut self, path: &str) {
        self.files.remove(path);
    }

    /// Moves a file to a new path.
    pub fn rename_file(&mut self, from: &str, to: impl Into<String>) {
        self.files.remove(from);
        self.insert_file(to);
    }
}

impl DocumentStore for MemStore {
    fn exists(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    fn files_under(&self, dir: &str) -> Option<Vec<String>> {
        if !self.dirs.contains(dir) {
            return None;
        }

        let prefix = format!("{dir}/");
        Some(
            self.files
                .iter()
                .filter(|file| file.starts_with(&prefix))
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserting_a_file_creates_its_ancestors() {
        let mut store = MemStore::new();
        store.insert_file("a/b/c.md");

        assert!(store.exists("a/b/c.md"));
        assert_eq!(store.files_under("a").unwrap(), ["a/b/c.md"]);
        assert_eq!(store.files_under("a/b").unwrap(), ["a/b/c.md"]);
    }

    #[test]
    fn missing_directory_is_none_but_empty_directory_is_some() {
        let mut store = MemStore::new();
        store.insert_dir("empty");

        assert!(store.files_under("ghost").is_none());
        assert_eq!(store.files_under("empty"), Some(Vec::new()));
    }

    #[test]
    fn rename_moves_the_file() {
        let mut store = MemStore::new();
        store.insert_file("a/x.md");
        store.rename_file("a/x.md", "b/y.md");

        assert!(!store.exists("a/x.md"));
        assert!(store.exists("b/y.md"));
    }
}
