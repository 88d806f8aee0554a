//! Deterministic example jobs and candidates for the HR panel.
//!
//! This crate produces the demonstration dataset the panel falls back to when
//! its local cache is empty. Generation is index-driven rather than random:
//! record `i` cycles through fixed value pools, so the same
//! [`DatasetSpec`] always yields the same records. The output types are
//! independent of the panel's domain types to avoid circular dependencies.
//!
//! # Example
//!
//! ```
//! use hr_example_data::{DatasetSpec, generate_example_candidates, generate_example_jobs};
//!
//! let spec = DatasetSpec::new(3, 5).expect("counts within limits");
//! let jobs = generate_example_jobs(&spec);
//! let candidates = generate_example_candidates(&spec);
//!
//! assert_eq!(jobs.len(), 3);
//! assert_eq!(candidates.len(), 5);
//! assert_eq!(candidates.first().and_then(|c| c.job_id.as_deref()), Some("1"));
//! ```

mod dataset;
mod error;
mod generator;
mod pools;
mod seed;

pub use dataset::{DEFAULT_CANDIDATE_COUNT, DEFAULT_JOB_COUNT, DatasetSpec, MAX_RECORDS};
pub use error::DatasetError;
pub use generator::{generate_example_candidates, generate_example_jobs};
pub use seed::{ExampleCandidateSeed, ExampleJobSeed, GradeSeed, JobStatusSeed, StageSeed};
