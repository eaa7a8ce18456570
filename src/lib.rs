//! Sub-root Aware Link Resolution
//!
//! Documents in a hierarchical store often link to each other by bare file
//! name or by relative path. This crate resolves such links against a
//! configured "sub-root" directory containing the linking document, rather
//! than against the store's global root.
//!
//! The resolution core lives in [`domain`]: a registry of sub-roots, one
//! name index per sub-root, a read-only resolver, and an incremental index
//! maintainer driven by store events. Concrete document-store backends live
//! in [`storage`]; configuration parsing and the debounced commit buffer
//! live in [`config`].

pub mod domain;
pub use domain::{
    DocumentStore, IndexMaintainer, LinkKind, NameIndex, Resolution, Resolver, RootRegistry,
    StoreEvent, SubRoot,
};

pub mod config;
pub use config::{DebouncedEdits, RootsConfig};

pub mod storage;
pub use storage::{DirStore, MemStore};
