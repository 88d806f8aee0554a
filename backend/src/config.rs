//! Panel configuration loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use hr_example_data::{DEFAULT_CANDIDATE_COUNT, DEFAULT_JOB_COUNT, DatasetError, DatasetSpec};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_KEY_PREFIX;

const DEFAULT_STORAGE_DIR: &str = ".hr-panel";

/// Configuration values for the panel, read from `HR_PANEL_*` variables and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HR_PANEL")]
pub struct PanelSettings {
    /// Directory holding the persisted key-value entries.
    pub storage_dir: Option<PathBuf>,
    /// Namespace prefix for cache keys.
    pub key_prefix: Option<String>,
    /// Number of generated jobs used when the cache is empty.
    pub job_count: Option<usize>,
    /// Number of generated candidates used when the cache is empty.
    pub candidate_count: Option<usize>,
    /// Emit logs as JSON rather than compact text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl PanelSettings {
    /// Return the configured storage directory, falling back to `./.hr-panel`.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| Path::new(".").join(DEFAULT_STORAGE_DIR))
    }

    /// Return the configured key prefix, falling back to the default.
    pub fn key_prefix(&self) -> &str {
        self.key_prefix.as_deref().unwrap_or(DEFAULT_KEY_PREFIX)
    }

    /// Build the generated dataset size from the configured counts.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when a count exceeds the generator's limit.
    pub fn dataset_spec(&self) -> Result<DatasetSpec, DatasetError> {
        DatasetSpec::new(
            self.job_count.unwrap_or(DEFAULT_JOB_COUNT),
            self.candidate_count.unwrap_or(DEFAULT_CANDIDATE_COUNT),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for panel configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "HR_PANEL_STORAGE_DIR",
        "HR_PANEL_KEY_PREFIX",
        "HR_PANEL_JOB_COUNT",
        "HR_PANEL_CANDIDATE_COUNT",
        "HR_PANEL_JSON_LOGS",
    ];

    fn load_from_empty_args() -> PanelSettings {
        PanelSettings::load_from_iter([OsString::from("hr-panel")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(!settings.json_logs);
        assert_eq!(settings.storage_dir(), Path::new(".").join(".hr-panel"));
        assert_eq!(settings.key_prefix(), "hr-panel-");
        assert_eq!(settings.dataset_spec(), Ok(DatasetSpec::default()));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HR_PANEL_STORAGE_DIR", Some("/tmp/hr-panel-test".to_owned())),
            ("HR_PANEL_KEY_PREFIX", Some("demo-".to_owned())),
            ("HR_PANEL_JOB_COUNT", Some("3".to_owned())),
            ("HR_PANEL_CANDIDATE_COUNT", Some("7".to_owned())),
            ("HR_PANEL_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.json_logs);
        assert_eq!(settings.storage_dir(), PathBuf::from("/tmp/hr-panel-test"));
        assert_eq!(settings.key_prefix(), "demo-");
        let spec = settings.dataset_spec().expect("valid counts");
        assert_eq!((spec.job_count(), spec.candidate_count()), (3, 7));
    }

    #[rstest]
    fn oversized_counts_are_rejected() {
        let _guard = lock_env([
            ("HR_PANEL_JOB_COUNT", Some("20000".to_owned())),
            ("HR_PANEL_CANDIDATE_COUNT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(matches!(
            settings.dataset_spec(),
            Err(DatasetError::TooManyJobs { .. })
        ));
    }
}
