//! Candidates moving through the hiring pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::Entity;
use super::entity_id::EntityId;
use super::error::UnknownValueError;
use super::job::replace;

/// Highest rating on the candidate scale.
pub const MAX_RATING: f64 = 5.0;

/// Validation errors raised while constructing candidate values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandidateValidationError {
    /// Rating fell outside `0..=5` or was not a finite number.
    #[error("rating must be a finite number between 0 and 5, got {value}")]
    RatingOutOfRange {
        /// Rejected value.
        value: f64,
    },
}

/// Hiring pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStage {
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

impl CandidateStage {
    /// Every stage in pipeline order.
    pub const ALL: [Self; 8] = [
        Self::Applied,
        Self::Screening,
        Self::Interview,
        Self::Technical,
        Self::Final,
        Self::Offered,
        Self::Hired,
        Self::Rejected,
    ];

    /// Lowercase label, matching the serialised form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Technical => "technical",
            Self::Final => "final",
            Self::Offered => "offered",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStage {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                UnknownValueError::new(
                    "stage",
                    s,
                    "applied, screening, interview, technical, final, offered, hired, rejected",
                )
            })
    }
}

/// Recruiter rating on the `0..=5` scale.
///
/// # Examples
/// ```
/// use hr_panel::domain::Rating;
///
/// assert_eq!(Rating::new(4.5).expect("valid").value(), 4.5);
/// assert!(Rating::new(5.5).is_err());
/// assert!(Rating::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Validate and construct a rating.
    pub fn new(value: f64) -> Result<Self, CandidateValidationError> {
        if value.is_finite() && (0.0..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CandidateValidationError::RatingOutOfRange { value })
        }
    }

    /// Construct a rating from tenths of a point (`35` is `3.5`).
    pub fn from_tenths(tenths: u8) -> Result<Self, CandidateValidationError> {
        Self::new(f64::from(tenths) / 10.0)
    }

    /// Numeric value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = CandidateValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A job applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Stable identifier.
    pub id: EntityId,
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
    pub experience: u32,
    /// Ordered skills.
    pub skills: Vec<String>,
    /// Pipeline stage.
    pub stage: CandidateStage,
    /// Recruiter rating.
    pub rating: Rating,
    /// Recruiter notes.
    pub notes: String,
    /// Job applied for. Not checked against the job list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<EntityId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Given and family name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Candidate contents supplied to `add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDraft {
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
    pub experience: u32,
    /// Ordered skills.
    pub skills: Vec<String>,
    /// Pipeline stage.
    pub stage: CandidateStage,
    /// Recruiter rating.
    pub rating: Rating,
    /// Recruiter notes.
    pub notes: String,
    /// Job applied for.
    #[serde(default)]
    pub job_id: Option<EntityId>,
}

/// Field replacements applied by `update`; `None` leaves a field unchanged.
///
/// `job_id` is doubly optional: `Some(None)` clears the job link while `None`
/// leaves it as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePatch {
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement position.
    pub position: Option<String>,
    /// Replacement experience.
    pub experience: Option<u32>,
    /// Replacement skills.
    pub skills: Option<Vec<String>>,
    /// Replacement stage.
    pub stage: Option<CandidateStage>,
    /// Replacement rating.
    pub rating: Option<Rating>,
    /// Replacement notes.
    pub notes: Option<String>,
    /// Replacement job link.
    pub job_id: Option<Option<EntityId>>,
}

impl CandidatePatch {
    /// Returns `true` when the patch would change nothing but the timestamp.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Entity for Candidate {
    type Draft = CandidateDraft;
    type Patch = CandidatePatch;

    const KIND: &'static str = "candidate";
    const CACHE_KEY: &'static str = "candidates";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: CandidateDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            position: draft.position,
            experience: draft.experience,
            skills: draft.skills,
            stage: draft.stage,
            rating: draft.rating,
            notes: draft.notes,
            job_id: draft.job_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: CandidatePatch, now: DateTime<Utc>) {
        let CandidatePatch {
            first_name,
            last_name,
            email,
            phone,
            position,
            experience,
            skills,
            stage,
            rating,
            notes,
            job_id,
        } = patch;
        replace(&mut self.first_name, first_name);
        replace(&mut self.last_name, last_name);
        replace(&mut self.email, email);
        replace(&mut self.phone, phone);
        replace(&mut self.position, position);
        replace(&mut self.experience, experience);
        replace(&mut self.skills, skills);
        replace(&mut self.stage, stage);
        replace(&mut self.rating, rating);
        replace(&mut self.notes, notes);
        replace(&mut self.job_id, job_id);
        self.updated_at = now;
    }
}
