//! Dataset size specification.

use crate::error::DatasetError;

/// Number of jobs in the default demonstration dataset.
pub const DEFAULT_JOB_COUNT: usize = 25;

/// Number of candidates in the default demonstration dataset.
pub const DEFAULT_CANDIDATE_COUNT: usize = 40;

/// Upper bound on records of either kind.
pub const MAX_RECORDS: usize = 10_000;

/// How many records of each kind to generate.
///
/// # Example
///
/// ```
/// use hr_example_data::{DatasetError, DatasetSpec, MAX_RECORDS};
///
/// let spec = DatasetSpec::default();
/// assert_eq!(spec.job_count(), 25);
/// assert_eq!(spec.candidate_count(), 40);
///
/// let err = DatasetSpec::new(MAX_RECORDS + 1, 0).expect_err("too many jobs");
/// assert!(matches!(err, DatasetError::TooManyJobs { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    job_count: usize,
    candidate_count: usize,
}

impl DatasetSpec {
    /// Builds a specification after checking both counts against
    /// [`MAX_RECORDS`].
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when either count exceeds [`MAX_RECORDS`].
    pub const fn new(job_count: usize, candidate_count: usize) -> Result<Self, DatasetError> {
        if job_count > MAX_RECORDS {
            return Err(DatasetError::TooManyJobs {
                requested: job_count,
                max: MAX_RECORDS,
            });
        }
        if candidate_count > MAX_RECORDS {
            return Err(DatasetError::TooManyCandidates {
                requested: candidate_count,
                max: MAX_RECORDS,
            });
        }
        Ok(Self {
            job_count,
            candidate_count,
        })
    }

    /// Returns the number of jobs to generate.
    #[must_use]
    pub const fn job_count(&self) -> usize {
        self.job_count
    }

    /// Returns the number of candidates to generate.
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            job_count: DEFAULT_JOB_COUNT,
            candidate_count: DEFAULT_CANDIDATE_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_matches_demo_dataset_size() {
        let spec = DatasetSpec::default();
        assert_eq!(spec.job_count(), DEFAULT_JOB_COUNT);
        assert_eq!(spec.candidate_count(), DEFAULT_CANDIDATE_COUNT);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(MAX_RECORDS, MAX_RECORDS)]
    #[case(1, 0)]
    fn accepts_counts_within_limits(#[case] jobs: usize, #[case] candidates: usize) {
        let spec = DatasetSpec::new(jobs, candidates).expect("valid spec");
        assert_eq!(spec.job_count(), jobs);
        assert_eq!(spec.candidate_count(), candidates);
    }

    #[rstest]
    #[case(
        MAX_RECORDS + 1,
        0,
        DatasetError::TooManyJobs { requested: MAX_RECORDS + 1, max: MAX_RECORDS }
    )]
    #[case(
        0,
        MAX_RECORDS + 5,
        DatasetError::TooManyCandidates { requested: MAX_RECORDS + 5, max: MAX_RECORDS }
    )]
    fn rejects_oversized_counts(
        #[case] jobs: usize,
        #[case] candidates: usize,
        #[case] expected: DatasetError,
    ) {
        assert_eq!(DatasetSpec::new(jobs, candidates), Err(expected));
    }
}
