//! HR panel core: entity stores, filter engine and namespaced cache.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
