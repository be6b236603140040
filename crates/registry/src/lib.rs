//! File-backed implementation of the `JobRegistry` capability.
//!
//! Stands in for the host system that owns jobs and builds: a JSON
//! document is read once at startup into an immutable in-memory store.
//! The badge service never writes to it.

pub mod format;
pub mod store;

pub use format::{BuildEntry, JobEntry, RegistryDocument};
pub use store::{InMemoryRegistry, RegistryError};
