//! Generated record types.
//!
//! These mirror the panel's job and candidate records without depending on
//! them. Values that the panel validates (salary bounds, rating scale) are
//! carried in their raw form and checked at the point of conversion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seniority grade of a generated job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeSeed {
    /// Entry level.
    #[default]
    Junior,
    /// Mid level.
    Middle,
    /// Senior level.
    Senior,
    /// Team lead.
    Lead,
}

impl GradeSeed {
    /// Upper-case label used in generated job titles.
    #[must_use]
    pub const fn title_suffix(self) -> &'static str {
        match self {
            Self::Junior => "JUNIOR",
            Self::Middle => "MIDDLE",
            Self::Senior => "SENIOR",
            Self::Lead => "LEAD",
        }
    }
}

/// Publication status of a generated job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatusSeed {
    /// Accepting applications.
    #[default]
    Active,
    /// Temporarily on hold.
    Paused,
    /// No longer hiring.
    Closed,
}

/// Hiring pipeline stage of a generated candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageSeed {
    /// Application received.
    #[default]
    Applied,
    /// Recruiter screening.
    Screening,
    /// General interview.
    Interview,
    /// Technical interview.
    Technical,
    /// Final round.
    Final,
    /// Offer extended.
    Offered,
    /// Offer accepted.
    Hired,
    /// Application declined.
    Rejected,
}

/// A generated job record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleJobSeed {
    /// One-based index rendered as a string.
    pub id: String,
    /// Job title including the grade suffix.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Office location or `Remote`.
    pub location: String,
    /// Seniority grade.
    pub grade: GradeSeed,
    /// Lower salary bound.
    pub salary_min: u64,
    /// Upper salary bound.
    pub salary_max: u64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free-form description.
    pub description: String,
    /// Ordered requirement list.
    pub requirements: Vec<String>,
    /// Ordered benefit list.
    pub benefits: Vec<String>,
    /// Publication status.
    pub status: JobStatusSeed,
    /// Calendar day the job was created and last updated.
    pub created_on: NaiveDate,
}

/// A generated candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleCandidateSeed {
    /// One-based index rendered as a string.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Position applied for.
    pub position: String,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Ordered skill list.
    pub skills: Vec<String>,
    /// Pipeline stage.
    pub stage: StageSeed,
    /// Rating on the 0–5 scale expressed in tenths (`35` is `3.5`).
    pub rating_tenths: u8,
    /// Recruiter notes.
    pub notes: String,
    /// Identifier of the job applied for, if any jobs were generated.
    pub job_id: Option<String>,
    /// Calendar day the candidate was created and last updated.
    pub created_on: NaiveDate,
}
