//! The ordered registry of sub-roots and its wholesale rebuild.
//!
//! The registry is built from scratch whenever the sub-root configuration
//! changes; between rebuilds its name indices are mutated only by the
//! [`IndexMaintainer`](crate::IndexMaintainer). Because [`RootRegistry::build`]
//! returns a complete new value that the owner assigns over the old one, a
//! resolver can never observe a half-populated index.

use super::{DocumentStore, NameIndex, path};

/// A directory registered for localized link resolution, together with its
/// name index.
///
/// The `prefix` identifies the sub-root; the `base` is the directory that
/// joined-path resolution is anchored to. The two are currently identical,
/// but the registry keeps them as a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRoot {
    prefix: String,
    base: String,
    index: NameIndex,
}

impl SubRoot {
    /// The registered prefix that documents are matched against.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The directory joined-path resolution is anchored to.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The sub-root's name index.
    #[must_use]
    pub const fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Mutable access to the name index, for incremental maintenance.
    pub const fn index_mut(&mut self) -> &mut NameIndex {
        &mut self.index
    }

    /// Whether `path` lies inside this sub-root's subtree.
    ///
    /// Matching requires a path-separator boundary after the prefix, so a
    /// sub-root `sub` never claims documents under `subdir/`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        path.strip_prefix(&self.prefix)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// The ordered collection of sub-roots, one [`NameIndex`] each.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootRegistry {
    roots: Vec<SubRoot>,
}

impl RootRegistry {
    /// Builds a registry from a list of sub-root prefixes, traversing each
    /// prefix's subtree in `store` to populate its name index.
    ///
    /// Prefixes are trimmed and stripped of trailing separators; entries
    /// that are empty after normalization are skipped. A duplicate prefix
    /// overwrites the earlier entry while keeping its position in the
    /// registration order. A prefix whose directory is absent from the store
    /// produces a non-fatal warning and an empty index, so bare-name
    /// resolution degrades while joined-path resolution still applies.
    pub fn build<S, I>(prefixes: I, store: &S) -> Self
    where
        S: DocumentStore,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut roots: Vec<SubRoot> = Vec::new();

        for raw in prefixes {
            let prefix = raw.as_ref().trim().trim_end_matches('/');
            if prefix.is_empty() {
                continue;
            }

            let mut index = NameIndex::new();
            match store.files_under(prefix) {
                Some(files) => {
                    for file in files {
                        let name = path::file_name(&file).to_string();
                        index.insert(name, file);
                    }
                }
                None => {
                    tracing::warn!("sub-root directory {prefix} not found in store");
                }
            }

            let root = SubRoot {
                prefix: prefix.to_string(),
                base: prefix.to_string(),
                index,
            };

            if let Some(existing) = roots.iter_mut().find(|r| r.prefix == prefix) {
                *existing = root;
            } else {
                roots.push(root);
            }
        }

        Self { roots }
    }

    /// Returns the first registered sub-root whose subtree contains `path`.
    ///
    /// Matching is first-match in registration order, not longest-prefix:
    /// with nested sub-roots the result depends on the order they were
    /// configured in.
    #[must_use]
    pub fn base_root(&self, path: &str) -> Option<&SubRoot> {
        self.roots.iter().find(|root| root.contains(path))
    }

    /// Mutable counterpart of [`Self::base_root`], for index maintenance.
    pub fn base_root_mut(&mut self, path: &str) -> Option<&mut SubRoot> {
        self.roots.iter_mut().find(|root| root.contains(path))
    }

    /// The registered sub-roots, in registration order.
    #[must_use]
    pub fn roots(&self) -> &[SubRoot] {
        &self.roots
    }

    /// Whether no sub-roots are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
