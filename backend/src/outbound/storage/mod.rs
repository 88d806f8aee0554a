//! Key-value store adapters.
//!
//! - [`MemoryKeyValueStore`]: process-local map, used by tests and as a
//!   scratch store.
//! - [`DirectoryKeyValueStore`]: one JSON file per key inside a
//!   capability-scoped directory, written atomically.

mod directory_store;
mod memory_store;

pub use directory_store::DirectoryKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
