//! Error types for the hr-example-data crate.
//!
//! Generation itself cannot fail; the only rejected input is a dataset
//! specification asking for more records than the panel is meant to hold.

use thiserror::Error;

/// Errors raised while validating a [`crate::DatasetSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The requested job count exceeds the supported maximum.
    #[error("requested {requested} jobs but at most {max} are supported")]
    TooManyJobs {
        /// Number of jobs requested.
        requested: usize,
        /// Upper bound on generated jobs.
        max: usize,
    },

    /// The requested candidate count exceeds the supported maximum.
    #[error("requested {requested} candidates but at most {max} are supported")]
    TooManyCandidates {
        /// Number of candidates requested.
        requested: usize,
        /// Upper bound on generated candidates.
        max: usize,
    },
}
