//! Tracing subscriber setup shared by the binary.

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber, filtered by `RUST_LOG` and writing to
/// stderr so command output on stdout stays clean.
///
/// A second initialization (or any other failure) is logged and ignored.
pub fn init(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
