//! The document-store contract consumed by the resolution core.

/// A hierarchical document store, addressed by slash-separated path strings
/// relative to the store root.
///
/// The core only ever needs two questions answered: "does this path exist?"
/// and "what files live under this directory?". Event delivery (create,
/// rename, delete) is the embedder's responsibility; it forwards events to
/// [`IndexMaintainer`](crate::IndexMaintainer).
pub trait DocumentStore {
    /// Whether a document exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Enumerates every file contained in the subtree rooted at `dir`,
    /// returning full store paths.
    ///
    /// Returns `None` when `dir` itself is not a directory in the store,
    /// distinguishing a missing sub-root from an empty one. Enumeration
    /// order is unspecified.
    fn files_under(&self, dir: &str) -> Option<Vec<String>>;
}
