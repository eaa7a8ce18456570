//! Per-sub-root mapping from file base names to full store paths.

use std::collections::HashMap;

/// A per-sub-root mapping from a file's base name (including extension) to
/// its full store path.
///
/// At most one entry exists per name; the last write wins. Entries may go
/// stale between store events and a lookup, so consumers must re-check
/// existence against the store before trusting a returned path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameIndex {
    entries: HashMap<String, String>,
}

impl NameIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a base name, retrying with `.md` appended before giving up.
    ///
    /// The retry makes `note` find an indexed `note.md`, the store's default
    /// document extension.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some(path) = self.entries.get(name) {
            return Some(path);
        }
        self.entries.get(&format!("{name}.md")).map(String::as_str)
    }

    /// Inserts or overwrites the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Removes the entry for `name`. Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// The number of indexed names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
