//! Tests for filter evaluation over jobs and candidates.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::{Entity, SalaryRange};
use crate::test_support::{candidate, entity_id, job};

#[fixture]
fn jobs() -> Vec<Job> {
    let mut senior = job("1", "Frontend Developer SENIOR", JobGrade::Senior);
    senior.requirements = vec!["JavaScript/TypeScript".to_owned(), "Docker".to_owned()];
    let mut junior = job("2", "Backend Developer JUNIOR", JobGrade::Junior);
    junior.salary = SalaryRange::new(40_000, 60_000, "EUR").expect("band");
    vec![senior, junior]
}

#[fixture]
fn candidates() -> Vec<Candidate> {
    [1_u32, 3, 5, 7]
        .into_iter()
        .enumerate()
        .map(|(index, years)| candidate(&format!("c{index}"), "Anna", years))
        .collect()
}

fn matching_ids<E: Entity>(items: &[E], filters: &FilterOptions) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.matches(filters))
        .map(|item| item.id().to_string())
        .collect()
}

#[rstest]
fn empty_filters_keep_everything_in_order(jobs: Vec<Job>, candidates: Vec<Candidate>) {
    let filters = FilterOptions::default();
    assert_eq!(matching_ids(&jobs, &filters), vec!["1", "2"]);
    assert_eq!(matching_ids(&candidates, &filters), vec!["c0", "c1", "c2", "c3"]);
}

#[rstest]
fn job_search_is_case_insensitive(jobs: Vec<Job>) {
    let filters = FilterOptions {
        search: Some("frontend".to_owned()),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &filters), vec!["1"]);
}

#[rstest]
fn blank_search_is_inactive(jobs: Vec<Job>) {
    let filters = FilterOptions {
        search: Some(String::new()),
        skills: Some(Vec::new()),
        ..FilterOptions::default()
    };
    assert!(filters.is_empty());
    assert_eq!(matching_ids(&jobs, &filters).len(), 2);
}

#[rstest]
fn job_search_spans_company_and_location(jobs: Vec<Job>) {
    let filters = FilterOptions {
        search: Some("ACME BERLIN".to_owned()),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &filters), vec!["1", "2"]);
}

#[rstest]
#[case(JobGrade::Senior, vec!["1"])]
#[case(JobGrade::Junior, vec!["2"])]
#[case(JobGrade::Lead, vec![])]
fn grade_filter_is_exact(jobs: Vec<Job>, #[case] grade: JobGrade, #[case] expected: Vec<&str>) {
    let filters = FilterOptions {
        grade: Some(grade),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &filters), expected);
}

#[rstest]
#[case(RangeFilter { min: Some(100_000), max: None }, vec!["1"])]
#[case(RangeFilter { min: None, max: Some(50_000) }, vec!["2"])]
#[case(RangeFilter::between(60_000, 80_000), vec!["1", "2"])]
#[case(RangeFilter::between(61_000, 79_000), vec![])]
fn salary_filter_uses_band_overlap(
    jobs: Vec<Job>,
    #[case] range: RangeFilter<u64>,
    #[case] expected: Vec<&str>,
) {
    let filters = FilterOptions {
        salary: Some(range),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &filters), expected);
}

#[rstest]
fn job_skills_require_every_term(jobs: Vec<Job>) {
    let both = FilterOptions {
        skills: Some(vec!["typescript".to_owned(), "docker".to_owned()]),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &both), vec!["1"]);

    let missing = FilterOptions {
        skills: Some(vec!["typescript".to_owned(), "kubernetes".to_owned()]),
        ..FilterOptions::default()
    };
    assert!(matching_ids(&jobs, &missing).is_empty());
}

#[rstest]
fn experience_range_is_inclusive(candidates: Vec<Candidate>) {
    let filters = FilterOptions {
        experience: Some(RangeFilter::between(3, 5)),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&candidates, &filters), vec!["c1", "c2"]);
}

#[rstest]
fn candidate_search_covers_skills(mut candidates: Vec<Candidate>) {
    if let Some(first) = candidates.first_mut() {
        first.skills = vec!["PostgreSQL".to_owned()];
    }
    let filters = FilterOptions {
        search: Some("postgres".to_owned()),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&candidates, &filters), vec!["c0"]);
}

#[rstest]
fn candidate_filters_combine_with_and(mut candidates: Vec<Candidate>) {
    for item in &mut candidates {
        item.stage = CandidateStage::Interview;
    }
    if let Some(last) = candidates.last_mut() {
        last.stage = CandidateStage::Hired;
        last.job_id = Some(entity_id("4"));
    }

    let stage_only = FilterOptions {
        stage: Some(CandidateStage::Interview),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&candidates, &stage_only), vec!["c0", "c1", "c2"]);

    let stage_and_experience = FilterOptions {
        experience: Some(RangeFilter {
            min: Some(4),
            max: None,
        }),
        ..stage_only
    };
    assert_eq!(matching_ids(&candidates, &stage_and_experience), vec!["c2"]);

    let by_job = FilterOptions {
        job_id: Some(entity_id("4")),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&candidates, &by_job), vec!["c3"]);
}

#[rstest]
fn job_only_criteria_do_not_affect_candidates(candidates: Vec<Candidate>) {
    let filters = FilterOptions {
        grade: Some(JobGrade::Lead),
        salary: Some(RangeFilter::between(1, 2)),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&candidates, &filters).len(), 4);
}

#[rstest]
fn candidate_only_criteria_do_not_affect_jobs(jobs: Vec<Job>) {
    let filters = FilterOptions {
        stage: Some(CandidateStage::Hired),
        experience: Some(RangeFilter::between(50, 60)),
        job_id: Some(entity_id("nope")),
        ..FilterOptions::default()
    };
    assert_eq!(matching_ids(&jobs, &filters).len(), 2);
}

#[test]
fn serialisation_omits_absent_fields() {
    let filters = FilterOptions {
        job_id: Some(entity_id("7")),
        experience: Some(RangeFilter {
            min: Some(2),
            max: None,
        }),
        ..FilterOptions::default()
    };
    let value = serde_json::to_value(&filters).expect("serialize");
    assert_eq!(value, json!({ "experience": { "min": 2 }, "jobId": "7" }));
}
