//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **storage**: key-value stores backing the namespaced cache, either held
//!   in memory or persisted one file per key in a directory.
//!
//! Adapters translate between the port's string values and the medium. They
//! contain no business logic.

pub mod storage;
