//! Concrete document-store backends.
//!
//! [`DirStore`] adapts an OS directory to the [`DocumentStore`] contract;
//! [`MemStore`] is a purely in-memory store for tests and embedders that
//! manage their own document tree.
//!
//! [`DocumentStore`]: crate::DocumentStore

mod fs;
pub use fs::{DirStore, OpenError};

mod memory;
pub use memory::MemStore;
