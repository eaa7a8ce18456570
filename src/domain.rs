//! The resolution core.
//!
//! Everything in this module is filesystem-agnostic: the registry, the name
//! indices, the resolver, and the index maintainer all talk to the document
//! store through the [`DocumentStore`] trait and operate on slash-separated
//! path strings.

/// Path canonicalization and link-target classification.
pub mod path;
pub use path::{LinkKind, canonicalize, file_name};

mod index;
pub use index::NameIndex;

/// The sub-root registry and its wholesale rebuild.
pub mod registry;
pub use registry::{RootRegistry, SubRoot};

mod store;
pub use store::DocumentStore;

/// Read-only link resolution.
pub mod resolver;
pub use resolver::{Resolution, Resolver};

/// Incremental index maintenance driven by store events.
pub mod maintainer;
pub use maintainer::{IndexMaintainer, StoreEvent};
