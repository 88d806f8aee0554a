//! Job postings.
//!
//! A [`Job`] is created from a [`JobDraft`] by the job store, which assigns the
//! identifier and timestamps. Serialised field names are camelCase and enum
//! values lowercase so persisted lists keep the panel's storage layout.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::Entity;
use super::entity_id::EntityId;
use super::error::UnknownValueError;

/// Validation errors raised while constructing job values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobValidationError {
    /// Salary lower bound exceeds the upper bound.
    #[error("salary minimum {min} exceeds maximum {max}")]
    InvertedSalary {
        /// Lower bound supplied.
        min: u64,
        /// Upper bound supplied.
        max: u64,
    },
    /// Currency code was blank.
    #[error("salary currency must not be blank")]
    BlankCurrency,
}

/// Seniority grade of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobGrade {
    /// Entry level.
    Junior,
    /// Mid level.
    Middle,
    /// Senior level.
    Senior,
    /// Team lead.
    Lead,
}

impl JobGrade {
    /// Every grade in ascending seniority.
    pub const ALL: [Self; 4] = [Self::Junior, Self::Middle, Self::Senior, Self::Lead];

    /// Lowercase label, matching the serialised form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Middle => "middle",
            Self::Senior => "senior",
            Self::Lead => "lead",
        }
    }
}

impl fmt::Display for JobGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobGrade {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValueError::new("grade", s, "junior, middle, senior, lead"))
    }
}

/// Publication status of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Accepting applications.
    #[default]
    Active,
    /// Temporarily on hold.
    Paused,
    /// No longer hiring.
    Closed,
}

impl JobStatus {
    /// Every status value.
    pub const ALL: [Self; 3] = [Self::Active, Self::Paused, Self::Closed];

    /// Lowercase label, matching the serialised form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValueError::new("status", s, "active, paused, closed"))
    }
}

/// Offered salary band.
///
/// ## Invariants
/// - `min <= max`, checked on construction and deserialisation.
/// - `currency` is not blank.
///
/// # Examples
/// ```
/// use hr_panel::domain::SalaryRange;
///
/// let band = SalaryRange::new(90_000, 120_000, "EUR").expect("valid band");
/// assert_eq!(band.min(), 90_000);
/// assert!(SalaryRange::new(5, 1, "EUR").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalaryRangeDto", into = "SalaryRangeDto")]
pub struct SalaryRange {
    min: u64,
    max: u64,
    currency: String,
}

#[derive(Serialize, Deserialize)]
struct SalaryRangeDto {
    min: u64,
    max: u64,
    currency: String,
}

impl SalaryRange {
    /// Validate and construct a salary band.
    pub fn new(min: u64, max: u64, currency: impl Into<String>) -> Result<Self, JobValidationError> {
        let currency = currency.into();
        if min > max {
            return Err(JobValidationError::InvertedSalary { min, max });
        }
        if currency.trim().is_empty() {
            return Err(JobValidationError::BlankCurrency);
        }
        Ok(Self { min, max, currency })
    }

    /// Lower bound.
    pub fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> u64 {
        self.max
    }

    /// ISO 4217 currency code.
    pub fn currency(&self) -> &str {
        self.currency.as_str()
    }
}

impl TryFrom<SalaryRangeDto> for SalaryRange {
    type Error = JobValidationError;

    fn try_from(dto: SalaryRangeDto) -> Result<Self, Self::Error> {
        Self::new(dto.min, dto.max, dto.currency)
    }
}

impl From<SalaryRange> for SalaryRangeDto {
    fn from(range: SalaryRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            currency: range.currency,
        }
    }
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Stable identifier.
    pub id: EntityId,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Office location or `Remote`.
    pub location: String,
    /// Seniority grade.
    pub grade: JobGrade,
    /// Offered salary band.
    pub salary: SalaryRange,
    /// Free-form description.
    pub description: String,
    /// Ordered requirements.
    pub requirements: Vec<String>,
    /// Ordered benefits.
    pub benefits: Vec<String>,
    /// Publication status.
    pub status: JobStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Job contents supplied to `add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Office location or `Remote`.
    pub location: String,
    /// Seniority grade.
    pub grade: JobGrade,
    /// Offered salary band.
    pub salary: SalaryRange,
    /// Free-form description.
    pub description: String,
    /// Ordered requirements.
    pub requirements: Vec<String>,
    /// Ordered benefits.
    pub benefits: Vec<String>,
    /// Publication status.
    pub status: JobStatus,
}

/// Field replacements applied by `update`; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement company.
    pub company: Option<String>,
    /// Replacement location.
    pub location: Option<String>,
    /// Replacement grade.
    pub grade: Option<JobGrade>,
    /// Replacement salary band.
    pub salary: Option<SalaryRange>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement requirements.
    pub requirements: Option<Vec<String>>,
    /// Replacement benefits.
    pub benefits: Option<Vec<String>>,
    /// Replacement status.
    pub status: Option<JobStatus>,
}

impl Entity for Job {
    type Draft = JobDraft;
    type Patch = JobPatch;

    const KIND: &'static str = "job";
    const CACHE_KEY: &'static str = "jobs";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: JobDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            company: draft.company,
            location: draft.location,
            grade: draft.grade,
            salary: draft.salary,
            description: draft.description,
            requirements: draft.requirements,
            benefits: draft.benefits,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: JobPatch, now: DateTime<Utc>) {
        let JobPatch {
            title,
            company,
            location,
            grade,
            salary,
            description,
            requirements,
            benefits,
            status,
        } = patch;
        replace(&mut self.title, title);
        replace(&mut self.company, company);
        replace(&mut self.location, location);
        replace(&mut self.grade, grade);
        replace(&mut self.salary, salary);
        replace(&mut self.description, description);
        replace(&mut self.requirements, requirements);
        replace(&mut self.benefits, benefits);
        replace(&mut self.status, status);
        self.updated_at = now;
    }
}

pub(crate) fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(new_value) = value {
        *slot = new_value;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn draft() -> JobDraft {
        JobDraft {
            title: "Frontend Developer SENIOR".to_owned(),
            company: "Company 1".to_owned(),
            location: "Berlin".to_owned(),
            grade: JobGrade::Senior,
            salary: SalaryRange::new(90_000, 150_000, "EUR").expect("valid band"),
            description: "Builds the admin panel".to_owned(),
            requirements: vec!["TypeScript".to_owned(), "Git".to_owned()],
            benefits: vec!["Remote".to_owned()],
            status: JobStatus::Active,
        }
    }

    #[rstest]
    fn from_draft_stamps_both_timestamps(draft: JobDraft) {
        let id = EntityId::new("j1").expect("id");
        let job = Job::from_draft(id.clone(), draft.clone(), at(9));
        assert_eq!(job.id, id);
        assert_eq!(job.title, draft.title);
        assert_eq!(job.created_at, at(9));
        assert_eq!(job.updated_at, at(9));
    }

    #[rstest]
    fn patch_changes_only_named_fields(draft: JobDraft) {
        let id = EntityId::new("j1").expect("id");
        let mut job = Job::from_draft(id, draft, at(9));
        let before = job.clone();

        job.apply_patch(
            JobPatch {
                status: Some(JobStatus::Paused),
                ..JobPatch::default()
            },
            at(10),
        );

        assert_eq!(job.status, JobStatus::Paused);
        assert_eq!(job.updated_at, at(10));
        assert_eq!(job.created_at, before.created_at);
        assert_eq!(job.title, before.title);
        assert_eq!(job.salary, before.salary);
    }

    #[rstest]
    fn serialises_with_camel_case_layout(draft: JobDraft) {
        let id = EntityId::new("j1").expect("id");
        let job = Job::from_draft(id, draft, at(9));
        let value = serde_json::to_value(&job).expect("serialize");
        assert_eq!(value["grade"], json!("senior"));
        assert_eq!(value["salary"]["min"], json!(90_000));
        assert_eq!(value["createdAt"], json!("2025-03-01T09:00:00Z"));
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn deserialising_inverted_salary_fails() {
        let raw = json!({ "min": 10, "max": 5, "currency": "EUR" });
        let result: Result<SalaryRange, _> = serde_json::from_value(raw);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("junior", JobGrade::Junior)]
    #[case("LEAD", JobGrade::Lead)]
    fn grade_parses_case_insensitively(#[case] raw: &str, #[case] expected: JobGrade) {
        assert_eq!(raw.parse::<JobGrade>(), Ok(expected));
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("archived".parse::<JobStatus>().is_err());
    }
}
