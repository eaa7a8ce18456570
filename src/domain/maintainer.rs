//! Incremental name-index maintenance.
//!
//! Store events mutate exactly one index entry per call; the registry itself
//! is never rebuilt here. Rebuilds happen only on configuration commit, via
//! [`RootRegistry::build`].

use super::{RootRegistry, path};

/// A document-store event, as delivered by the embedder's subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A file appeared at the given path.
    Created(String),
    /// A file moved from one path to another.
    Renamed {
        /// The path before the move.
        from: String,
        /// The path after the move.
        to: String,
    },
    /// The file at the given path is gone.
    Deleted(String),
}

/// Keeps the registry's name indices fresh between rebuilds.
///
/// Create events are suppressed until [`mark_layout_ready`] is called, so
/// the event churn a host produces while restoring its layout at startup
/// does not flood the indices with entries the initial traversal already
/// made.
///
/// [`mark_layout_ready`]: Self::mark_layout_ready
#[derive(Debug, Default, Clone)]
pub struct IndexMaintainer {
    layout_ready: bool,
}

impl IndexMaintainer {
    /// Creates a maintainer that still ignores create events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals that the host finished its startup/layout phase; create
    /// events are honoured from now on.
    pub const fn mark_layout_ready(&mut self) {
        self.layout_ready = true;
    }

    /// Records a newly created file in its sub-root's index.
    ///
    /// Ignored before [`Self::mark_layout_ready`], and when the path falls
    /// outside every registered sub-root.
    pub fn on_create(&self, registry: &mut RootRegistry, path: &str) {
        if !self.layout_ready {
            tracing::debug!("ignoring create of {path} during startup");
            return;
        }
        if let Some(root) = registry.base_root_mut(path) {
            root.index_mut().insert(path::file_name(path), path);
        }
    }

    /// Moves a file's index entry from its old sub-root to its new one.
    ///
    /// A rename crossing sub-root boundaries migrates the entry between
    /// indices; a rename into or out of unmapped territory only inserts or
    /// only removes.
    pub fn on_rename(&self, registry: &mut RootRegistry, old_path: &str, new_path: &str) {
        if let Some(root) = registry.base_root_mut(old_path) {
            root.index_mut().remove(path::file_name(old_path));
        }
        if let Some(root) = registry.base_root_mut(new_path) {
            root.index_mut().insert(path::file_name(new_path), new_path);
        }
    }

    /// Drops a deleted file's entry from its sub-root's index.
    pub fn on_delete(&self, registry: &mut RootRegistry, path: &str) {
        if let Some(root) = registry.base_root_mut(path) {
            root.index_mut().remove(path::file_name(path));
        }
    }

    /// Dispatches a [`StoreEvent`] to the matching handler.
    pub fn apply(&self, registry: &mut RootRegistry, event: &StoreEvent) {
        match event {
            StoreEvent::Created(path) => self.on_create(registry, path),
            StoreEvent::Renamed { from, to } => self.on_rename(registry, from, to),
            StoreEvent::Deleted(path) => self.on_delete(registry, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Resolution, Resolver};
    use crate::storage::MemStore;

    fn ready_maintainer() -> IndexMaintainer {
        let mut maintainer = IndexMaintainer::new();
        maintainer.mark_layout_ready();
        maintainer
    }

    fn fixture() -> (RootRegistry, MemStore) {
        let mut store = MemStore::new();
        store.insert_file("vaultA/x.md");
        store.insert_file("vaultB/other.md");
        let registry = RootRegistry::build(["vaultA", "vaultB"], &store);
        (registry, store)
    }

    fn fallback() -> Option<String> {
        None
    }

    #[test]
    fn create_before_layout_ready_is_ignored() {
        let (mut registry, mut store) = fixture();
        store.insert_file("vaultA/new.md");

        IndexMaintainer::new().on_create(&mut registry, "vaultA/new.md");

        assert_eq!(
            registry.base_root("vaultA/x.md").unwrap().index().len(),
            1
        );
    }

    #[test]
    fn create_after_layout_ready_inserts() {
        let (mut registry, mut store) = fixture();
        store.insert_file("vaultA/new.md");

        ready_maintainer().on_create(&mut registry, "vaultA/new.md");

        let resolver = Resolver::new(&registry, &store);
        assert_eq!(
            resolver.resolve("new", "vaultA/x.md", fallback),
            Resolution::Resolved("vaultA/new.md".to_string())
        );
    }

    #[test]
    fn create_outside_every_sub_root_is_ignored() {
        let (mut registry, _store) = fixture();
        ready_maintainer().on_create(&mut registry, "elsewhere/new.md");

        for root in registry.roots() {
            assert!(root.index().resolve("new.md").is_none());
        }
    }

    #[test]
    fn rename_within_a_sub_root_moves_the_entry() {
        let (mut registry, mut store) = fixture();
        store.remove_file("vaultA/x.md");
        store.insert_file("vaultA/y.md");

        ready_maintainer().on_rename(&mut registry, "vaultA/x.md", "vaultA/y.md");

        let resolver = Resolver::new(&registry, &store);
        assert_eq!(
            resolver.resolve("x", "vaultA/y.md", fallback),
            Resolution::Fallback(None)
        );
        assert_eq!(
            resolver.resolve("y", "vaultA/y.md", fallback),
            Resolution::Resolved("vaultA/y.md".to_string())
        );
    }

    #[test]
    fn rename_across_sub_roots_migrates_the_entry() {
        let (mut registry, mut store) = fixture();
        store.remove_file("vaultA/x.md");
        store.insert_file("vaultB/x.md");

        ready_maintainer().on_rename(&mut registry, "vaultA/x.md", "vaultB/x.md");

        assert!(
            registry
                .base_root("vaultA/doc.md")
                .unwrap()
                .index()
                .resolve("x.md")
                .is_none()
        );
        assert_eq!(
            registry
                .base_root("vaultB/doc.md")
                .unwrap()
                .index()
                .resolve("x.md"),
            Some("vaultB/x.md")
        );
    }

    #[test]
    fn rename_out_of_mapped_territory_only_removes() {
        let (mut registry, _store) = fixture();

        ready_maintainer().on_rename(&mut registry, "vaultA/x.md", "elsewhere/x.md");

        assert!(
            registry
                .base_root("vaultA/doc.md")
                .unwrap()
                .index()
                .resolve("x.md")
                .is_none()
        );
    }

    #[test]
    fn rename_into_mapped_territory_only_inserts() {
        let (mut registry, _store) = fixture();

        ready_maintainer().on_rename(&mut registry, "elsewhere/z.md", "vaultB/z.md");

        assert_eq!(
            registry
                .base_root("vaultB/doc.md")
                .unwrap()
                .index()
                .resolve("z.md"),
            Some("vaultB/z.md")
        );
    }

    #[test]
    fn delete_drops_the_entry_and_resolution_falls_back() {
        let (mut registry, mut store) = fixture();
        store.remove_file("vaultA/x.md");

        ready_maintainer().on_delete(&mut registry, "vaultA/x.md");

        let resolver = Resolver::new(&registry, &store);
        assert_eq!(
            resolver.resolve("x", "vaultA/doc.md", fallback),
            Resolution::Fallback(None)
        );
    }

    #[test]
    fn apply_dispatches_events() {
        let (mut registry, mut store) = fixture();
        store.insert_file("vaultA/new.md");

        let maintainer = ready_maintainer();
        maintainer.apply(&mut registry, &StoreEvent::Created("vaultA/new.md".into()));
        maintainer.apply(
            &mut registry,
            &StoreEvent::Renamed {
                from: "vaultA/new.md".into(),
                to: "vaultB/new.md".into(),
            },
        );
        maintainer.apply(&mut registry, &StoreEvent::Deleted("vaultB/new.md".into()));

        for root in registry.roots() {
            assert!(root.index().resolve("new.md").is_none());
        }
    }
}
