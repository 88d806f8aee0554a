//! Inbound adapters that translate external requests into store operations
//! while keeping presentation details at the edge.
//!
//! The command-line interface lives under [`cli`].

pub mod cli;
