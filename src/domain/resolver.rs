//! Read-only link resolution against a registry snapshot.
//!
//! Resolution is a pure function of the link target, the source document's
//! path, and the registry/store the resolver borrows: identical inputs give
//! identical outputs, and no lookup ever mutates an index. Index writes
//! happen only through the [`IndexMaintainer`](crate::IndexMaintainer).

use super::{DocumentStore, LinkKind, RootRegistry, path};

/// The outcome of a [`Resolver::resolve`] call.
///
/// `R` is whatever result type the host's native link resolution produces;
/// the resolver only ever returns it untouched, exactly when no local
/// strategy applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<R> {
    /// A store path confirmed to exist at resolve time.
    Resolved(String),
    /// The caller-supplied fallback's result.
    Fallback(R),
}

impl<R> Resolution<R> {
    /// The locally resolved path, if any.
    #[must_use]
    pub fn resolved(self) -> Option<String> {
        match self {
            Self::Resolved(path) => Some(path),
            Self::Fallback(_) => None,
        }
    }
}

/// Resolves link targets written in documents that live under a registered
/// sub-root.
///
/// The resolver borrows a registry snapshot and a store; it is constructed
/// cheaply at each call site by the embedding shell. The optional active
/// document stands in for an empty source path, mirroring how a host's
/// link-following feature resolves from the currently focused document.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, S> {
    registry: &'a RootRegistry,
    store: &'a S,
    active: Option<&'a str>,
}

impl<'a, S: DocumentStore> Resolver<'a, S> {
    /// Creates a resolver over a registry snapshot and a store.
    #[must_use]
    pub const fn new(registry: &'a RootRegistry, store: &'a S) -> Self {
        Self {
            registry,
            store,
            active: None,
        }
    }

    /// Sets the currently focused document, used when `source` is empty.
    #[must_use]
    pub const fn with_active(mut self, active: Option<&'a str>) -> Self {
        self.active = active;
        self
    }

    /// Resolves `target` as written in the document at `source`.
    ///
    /// An empty `source` is substituted with the active document; with no
    /// active document either, the fallback decides. Bare-name targets are
    /// looked up in the source's sub-root index (stale entries are detected
    /// by re-checking existence and fall through); relative and nested
    /// targets, and any bare name the index misses, are joined onto the
    /// sub-root's base, first verbatim and then with `.md` appended. When no
    /// candidate exists in the store, the fallback's result is returned.
    ///
    /// Never fails: the result is always either a confirmed existing path or
    /// [`Resolution::Fallback`].
    pub fn resolve<R>(
        &self,
        target: &str,
        source: &str,
        fallback: impl FnOnce() -> R,
    ) -> Resolution<R> {
        let source = if source.is_empty() {
            match self.active {
                Some(active) => active,
                None => {
                    tracing::debug!("no source document and nothing focused");
                    return Resolution::Fallback(fallback());
                }
            }
        } else {
            source
        };

        let Some(root) = self.registry.base_root(source) else {
            tracing::debug!("{source} is outside every registered sub-root");
            return Resolution::Fallback(fallback());
        };

        // Relative and nested targets share the joined-path branch below;
        // only bare names consult the index.
        if LinkKind::of(target) == LinkKind::BareName {
            if let Some(indexed) = root.index().resolve(target) {
                if self.store.exists(indexed) {
                    return Resolution::Resolved(indexed.to_string());
                }
                tracing::debug!("stale index entry {indexed} for {target}");
            }
        }

        let joined = format!("{}/{}", root.base(), path::canonicalize(target));
        if self.store.exists(&joined) {
            return Resolution::Resolved(joined);
        }

        let with_md = format!("{joined}.md");
        if self.store.exists(&with_md) {
            return Resolution::Resolved(with_md);
        }

        Resolution::Fallback(fallback())
    }
}
