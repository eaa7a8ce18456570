//! A filesystem-backed document store.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::DocumentStore;

/// The error returned when a [`DirStore`] cannot be opened.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    /// The store root does not exist or is not a directory.
    #[error("store root {0} is not a directory")]
    NotADirectory(PathBuf),
}

/// A document store backed by an OS directory.
///
/// Store paths are slash-separated and relative to the root, regardless of
/// the platform's native separator.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Opens the store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenError::NotADirectory`] when `root` does not exist or is
    /// not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, OpenError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(OpenError::NotADirectory(root));
        }
        Ok(Self { root })
    }

    /// The OS path of the store root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a store path onto the filesystem.
    fn os_path(&self, path: &str) -> PathBuf {
        let mut full = self.root.clone();
        full.extend(path.split('/').filter(|segment| !segment.is_empty()));
        full
    }

    /// Converts an OS path below the root back into a store path.
    fn store_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Option<Vec<&str>> = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect();
        Some(segments?.join("/"))
    }
}

impl DocumentStore for DirStore {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && self.os_path(path).is_file()
    }

    fn files_under(&self, dir: &str) -> Option<Vec<String>> {
        let dir_path = self.os_path(dir);
        if !dir_path.is_dir() {
            return None;
        }

        let files = WalkDir::new(&dir_path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.store_path(entry.path()))
            .collect();

        Some(files)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn setup() -> (TempDir, DirStore) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(tmp.path().join("vaultA/sub")).unwrap();
        fs::write(tmp.path().join("vaultA/note1.md"), "one").unwrap();
        fs::write(tmp.path().join("vaultA/sub/note2.md"), "two").unwrap();

        let store = DirStore::open(tmp.path()).unwrap();
        (tmp, store)
    }

    #[test]
    fn open_rejects_a_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nowhere");

        assert!(matches!(
            DirStore::open(missing),
            Err(OpenError::NotADirectory(_))
        ));
    }

    #[test]
    fn exists_checks_files_not_directories() {
        let (_tmp, store) = setup();

        assert!(store.exists("vaultA/note1.md"));
        assert!(store.exists("vaultA/sub/note2.md"));
        assert!(!store.exists("vaultA/sub"));
        assert!(!store.exists("vaultA/missing.md"));
        assert!(!store.exists(""));
    }

    #[test]
    fn files_under_yields_store_relative_slash_paths() {
        let (_tmp, store) = setup();

        let mut files = store.files_under("vaultA").unwrap();
        files.sort();
        assert_eq!(files, ["vaultA/note1.md", "vaultA/sub/note2.md"]);
    }

    #[test]
    fn files_under_a_missing_directory_is_none() {
        let (_tmp, store) = setup();
        assert!(store.files_under("ghost").is_none());
    }

    #[test]
    fn files_under_an_empty_directory_is_an_empty_list() {
        let (tmp, store) = setup();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        assert_eq!(store.files_under("empty"), Some(Vec::new()));
    }

    #[test]
    fn resolves_bare_names_against_a_filesystem_store() {
        use crate::domain::{Resolution, Resolver, RootRegistry};

        let (tmp, store) = setup();
        fs::create_dir_all(tmp.path().join("vaultA/a/b")).unwrap();
        fs::write(tmp.path().join("vaultA/a/b/f.md"), "deep").unwrap();

        let registry = RootRegistry::build(["vaultA"], &store);
        let resolver = Resolver::new(&registry, &store);

        for target in ["f", "f.md"] {
            assert_eq!(
                resolver.resolve(target, "vaultA/note1.md", || None::<String>),
                Resolution::Resolved("vaultA/a/b/f.md".to_string())
            );
        }
    }
}
