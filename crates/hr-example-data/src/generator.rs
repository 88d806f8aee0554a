//! Index-driven record generation.
//!
//! Record `i` takes its values from the pools in [`crate::pools`] at
//! position `i` (wrapping), so the output depends only on the requested
//! counts. Numeric fields grow linearly with the index.

use chrono::NaiveDate;

use crate::dataset::DatasetSpec;
use crate::pools::{
    ALTERNATING_REQUIREMENTS, BENEFITS, CORE_REQUIREMENTS, FIRST_NAMES, GRADES, JOB_TITLES,
    LAST_NAMES, LOCATIONS, SKILL_OFFSETS, SKILLS, STAGES, cycle, wrap,
};
use crate::seed::{ExampleCandidateSeed, ExampleJobSeed, JobStatusSeed};

/// Lowest salary floor, offered by the first job.
const SALARY_BASE: u64 = 70_000;

/// Salary floor increase per job index.
const SALARY_STEP: u64 = 5_000;

/// Width of every generated salary band.
const SALARY_SPREAD: u64 = 60_000;

const CURRENCY: &str = "EUR";

const PHONE: &str = "+7 (999) 123-45-67";

const CANDIDATE_NOTES: &str = "Generated note for interface checks";

const EXPERIENCE_CYCLE: usize = 10;

/// Ratings cycle through 0.0..=4.9 in tenths.
const RATING_CYCLE: usize = 50;

const DATE_YEAR: i32 = 2024;
const MONTH_CYCLE: usize = 12;
const DAY_CYCLE: usize = 28;

/// Generates the example job list.
///
/// Jobs are numbered from `"1"`. Titles carry the upper-cased grade, salary
/// floors rise by a fixed step per job and every band has the same width, so
/// `salary_min <= salary_max` always holds.
///
/// # Example
///
/// ```
/// use hr_example_data::{DatasetSpec, GradeSeed, generate_example_jobs};
///
/// let jobs = generate_example_jobs(&DatasetSpec::default());
/// let first = jobs.first().expect("at least one job");
///
/// assert_eq!(first.id, "1");
/// assert_eq!(first.title, "Frontend Developer JUNIOR");
/// assert_eq!(first.grade, GradeSeed::Junior);
/// ```
#[must_use]
pub fn generate_example_jobs(spec: &DatasetSpec) -> Vec<ExampleJobSeed> {
    (0..spec.job_count()).map(example_job).collect()
}

/// Generates the example candidate list.
///
/// Candidate `i` applies for job `(i mod job_count) + 1`; when the
/// specification requests no jobs, candidates carry no job reference.
///
/// # Example
///
/// ```
/// use hr_example_data::{DatasetSpec, StageSeed, generate_example_candidates};
///
/// let spec = DatasetSpec::new(2, 3).expect("valid spec");
/// let candidates = generate_example_candidates(&spec);
/// let job_ids: Vec<_> = candidates.iter().map(|c| c.job_id.clone()).collect();
///
/// assert_eq!(job_ids, vec![Some("1".to_owned()), Some("2".to_owned()), Some("1".to_owned())]);
/// assert_eq!(candidates.first().map(|c| c.stage), Some(StageSeed::Applied));
/// ```
#[must_use]
pub fn generate_example_candidates(spec: &DatasetSpec) -> Vec<ExampleCandidateSeed> {
    (0..spec.candidate_count())
        .map(|index| example_candidate(index, spec.job_count()))
        .collect()
}

fn example_job(index: usize) -> ExampleJobSeed {
    let id = one_based_id(index);
    let base_title = cycle(&JOB_TITLES, index).unwrap_or_default();
    let grade = cycle(&GRADES, index).unwrap_or_default();
    let location = cycle(&LOCATIONS, index).unwrap_or_default();
    let salary_min = SALARY_BASE.saturating_add(SALARY_STEP.saturating_mul(widen(index)));
    let salary_max = salary_min.saturating_add(SALARY_SPREAD);

    let mut requirements: Vec<String> = CORE_REQUIREMENTS.iter().map(|r| (*r).to_owned()).collect();
    if let Some(extra) = cycle(&ALTERNATING_REQUIREMENTS, index) {
        requirements.push(extra.to_owned());
    }

    ExampleJobSeed {
        title: format!("{base_title} {}", grade.title_suffix()),
        company: format!("Company {id}"),
        location: location.to_owned(),
        grade,
        salary_min,
        salary_max,
        currency: CURRENCY.to_owned(),
        description: format!("{base_title} building and maintaining product web services"),
        requirements,
        benefits: BENEFITS.iter().map(|b| (*b).to_owned()).collect(),
        status: JobStatusSeed::Active,
        created_on: calendar_day(index),
        id,
    }
}

fn example_candidate(index: usize, job_count: usize) -> ExampleCandidateSeed {
    let id = one_based_id(index);
    let first_name = cycle(&FIRST_NAMES, index).unwrap_or_default();
    let last_name = cycle(&LAST_NAMES, index).unwrap_or_default();
    let skills = SKILL_OFFSETS
        .iter()
        .filter_map(|offset| cycle(&SKILLS, index.saturating_add(*offset)))
        .map(str::to_owned)
        .collect();
    let job_id = (job_count > 0).then(|| one_based_id(wrap(index, job_count)));

    ExampleCandidateSeed {
        email: format!("{first_name}.{last_name}{id}@email.com").to_lowercase(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        phone: PHONE.to_owned(),
        position: cycle(&JOB_TITLES, index).unwrap_or_default().to_owned(),
        experience_years: narrow_u32(wrap(index, EXPERIENCE_CYCLE)),
        skills,
        stage: cycle(&STAGES, index).unwrap_or_default(),
        rating_tenths: u8::try_from(wrap(index, RATING_CYCLE)).unwrap_or_default(),
        notes: CANDIDATE_NOTES.to_owned(),
        job_id,
        created_on: calendar_day(index),
        id,
    }
}

fn one_based_id(index: usize) -> String {
    index.saturating_add(1).to_string()
}

/// Calendar day in 2024, cycling through months and days of the month.
fn calendar_day(index: usize) -> NaiveDate {
    let month = narrow_u32(wrap(index, MONTH_CYCLE)).saturating_add(1);
    let day = narrow_u32(wrap(index, DAY_CYCLE)).saturating_add(1);
    NaiveDate::from_ymd_opt(DATE_YEAR, month, day).unwrap_or_default()
}

fn widen(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn narrow_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
