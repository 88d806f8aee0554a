//! Shared test doubles and entity builders.
//!
//! Compiled for unit tests and, through the `test-support` feature, for the
//! integration tests under `tests/`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    Candidate, CandidateDraft, CandidateStage, Entity, EntityId, Job, JobDraft, JobGrade,
    JobStatus, Rating, SalaryRange,
};

/// Fixed instant used as the starting point of test clocks.
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).single() {
        Some(timestamp) => timestamp,
        None => panic!("fixture timestamp is unambiguous"),
    }
}

/// Clock whose time only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::new(fixture_timestamp())
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Draft for an active EUR job with the given title.
pub fn job_draft(title: &str, grade: JobGrade, salary_min: u64, salary_max: u64) -> JobDraft {
    let salary = match SalaryRange::new(salary_min, salary_max, "EUR") {
        Ok(salary) => salary,
        Err(err) => panic!("test salary band is valid: {err}"),
    };
    JobDraft {
        title: title.to_owned(),
        company: "Acme".to_owned(),
        location: "Berlin".to_owned(),
        grade,
        salary,
        description: format!("{title} role"),
        requirements: vec!["Git".to_owned()],
        benefits: Vec::new(),
        status: JobStatus::Active,
    }
}

/// Draft for an applied-stage candidate.
pub fn candidate_draft(first_name: &str, last_name: &str, experience: u32) -> CandidateDraft {
    CandidateDraft {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: format!("{first_name}.{last_name}@example.com").to_lowercase(),
        phone: "+7 (999) 123-45-67".to_owned(),
        position: "Frontend Developer".to_owned(),
        experience,
        skills: Vec::new(),
        stage: CandidateStage::Applied,
        rating: Rating::default(),
        notes: String::new(),
        job_id: None,
    }
}

/// Parse a test identifier.
pub fn entity_id(raw: &str) -> EntityId {
    match EntityId::new(raw) {
        Ok(id) => id,
        Err(err) => panic!("test id `{raw}` is valid: {err}"),
    }
}

/// Job built from [`job_draft`] at [`fixture_timestamp`].
pub fn job(id: &str, title: &str, grade: JobGrade) -> Job {
    Job::from_draft(
        entity_id(id),
        job_draft(title, grade, 80_000, 120_000),
        fixture_timestamp(),
    )
}

/// Candidate built from [`candidate_draft`] at [`fixture_timestamp`].
pub fn candidate(id: &str, first_name: &str, experience: u32) -> Candidate {
    Candidate::from_draft(
        entity_id(id),
        candidate_draft(first_name, "Tester", experience),
        fixture_timestamp(),
    )
}
