//! Generated demonstration dataset as an entity source.
//!
//! Converts deterministic `hr-example-data` seeds into validated jobs and
//! candidates. Stores use it as their fallback when the cache is empty.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hr_example_data::{
    DatasetSpec, ExampleCandidateSeed, ExampleJobSeed, GradeSeed, JobStatusSeed, StageSeed,
    generate_example_candidates, generate_example_jobs,
};

use super::candidate::{Candidate, CandidateStage, Rating};
use super::entity_id::EntityId;
use super::job::{Job, JobGrade, JobStatus, SalaryRange};
use super::ports::{EntitySource, EntitySourceError};

/// Entity source backed by the example data generator.
///
/// # Examples
/// ```
/// use hr_panel::domain::ExampleDataset;
/// use hr_panel::domain::ports::EntitySource;
/// use hr_panel::domain::{Candidate, Job};
///
/// let dataset = ExampleDataset::default();
/// let jobs: Vec<Job> = dataset.fetch_all().expect("jobs generate");
/// let candidates: Vec<Candidate> = dataset.fetch_all().expect("candidates generate");
/// assert_eq!((jobs.len(), candidates.len()), (25, 40));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleDataset {
    spec: DatasetSpec,
}

impl ExampleDataset {
    /// Generate records according to `spec`.
    pub fn new(spec: DatasetSpec) -> Self {
        Self { spec }
    }
}

impl EntitySource<Job> for ExampleDataset {
    fn fetch_all(&self) -> Result<Vec<Job>, EntitySourceError> {
        generate_example_jobs(&self.spec)
            .into_iter()
            .map(job_from_seed)
            .collect()
    }
}

impl EntitySource<Candidate> for ExampleDataset {
    fn fetch_all(&self) -> Result<Vec<Candidate>, EntitySourceError> {
        generate_example_candidates(&self.spec)
            .into_iter()
            .map(candidate_from_seed)
            .collect()
    }
}

fn job_from_seed(seed: ExampleJobSeed) -> Result<Job, EntitySourceError> {
    let id = parse_id(seed.id)?;
    let salary = SalaryRange::new(seed.salary_min, seed.salary_max, seed.currency)
        .map_err(|err| invalid("job", &id, err))?;
    let timestamp = midnight(seed.created_on);
    Ok(Job {
        id,
        title: seed.title,
        company: seed.company,
        location: seed.location,
        grade: grade_from_seed(seed.grade),
        salary,
        description: seed.description,
        requirements: seed.requirements,
        benefits: seed.benefits,
        status: status_from_seed(seed.status),
        created_at: timestamp,
        updated_at: timestamp,
    })
}

fn candidate_from_seed(seed: ExampleCandidateSeed) -> Result<Candidate, EntitySourceError> {
    let id = parse_id(seed.id)?;
    let rating =
        Rating::from_tenths(seed.rating_tenths).map_err(|err| invalid("candidate", &id, err))?;
    let job_id = seed.job_id.map(parse_id).transpose()?;
    let timestamp = midnight(seed.created_on);
    Ok(Candidate {
        id,
        first_name: seed.first_name,
        last_name: seed.last_name,
        email: seed.email,
        phone: seed.phone,
        position: seed.position,
        experience: seed.experience_years,
        skills: seed.skills,
        stage: stage_from_seed(seed.stage),
        rating,
        notes: seed.notes,
        job_id,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

fn parse_id(raw: String) -> Result<EntityId, EntitySourceError> {
    EntityId::new(raw).map_err(|err| EntitySourceError::invalid_record(err.to_string()))
}

fn invalid(kind: &str, id: &EntityId, err: impl std::fmt::Display) -> EntitySourceError {
    EntitySourceError::invalid_record(format!("{kind} {id}: {err}"))
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn grade_from_seed(seed: GradeSeed) -> JobGrade {
    match seed {
        GradeSeed::Junior => JobGrade::Junior,
        GradeSeed::Middle => JobGrade::Middle,
        GradeSeed::Senior => JobGrade::Senior,
        GradeSeed::Lead => JobGrade::Lead,
    }
}

fn status_from_seed(seed: JobStatusSeed) -> JobStatus {
    match seed {
        JobStatusSeed::Active => JobStatus::Active,
        JobStatusSeed::Paused => JobStatus::Paused,
        JobStatusSeed::Closed => JobStatus::Closed,
    }
}

fn stage_from_seed(seed: StageSeed) -> CandidateStage {
    match seed {
        StageSeed::Applied => CandidateStage::Applied,
        StageSeed::Screening => CandidateStage::Screening,
        StageSeed::Interview => CandidateStage::Interview,
        StageSeed::Technical => CandidateStage::Technical,
        StageSeed::Final => CandidateStage::Final,
        StageSeed::Offered => CandidateStage::Offered,
        StageSeed::Hired => CandidateStage::Hired,
        StageSeed::Rejected => CandidateStage::Rejected,
    }
}
