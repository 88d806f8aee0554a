//! Tests for command parsing and execution.

use std::sync::Arc;

use clap::Parser;
use hr_example_data::DatasetSpec;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::KeyValueStore;
use crate::outbound::storage::MemoryKeyValueStore;

struct Harness {
    kv: Arc<MemoryKeyValueStore>,
    context: PanelContext,
}

impl Harness {
    fn run(&self, args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("hr-panel").chain(args.iter().copied()))
            .expect("arguments parse");
        let mut out = Vec::new();
        execute(cli.command, &self.context, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    fn output(&self, args: &[&str]) -> String {
        self.run(args).expect("command succeeds")
    }
}

#[fixture]
fn harness() -> Harness {
    let kv = Arc::new(MemoryKeyValueStore::default());
    let cache = Arc::new(NamespacedCache::new(kv.clone()));
    let dataset = ExampleDataset::new(DatasetSpec::new(3, 4).expect("valid spec"));
    Harness {
        kv,
        context: PanelContext::new(cache, dataset),
    }
}

#[rstest]
fn jobs_list_generates_and_persists_on_first_run(harness: Harness) {
    let text = harness.output(&["jobs", "list"]);

    assert!(text.starts_with("1\tFrontend Developer JUNIOR\tjunior\t"));
    assert!(text.ends_with("3 of 3 jobs\n"));
    assert!(harness.kv.read("hr-panel-jobs").expect("read").is_some());
}

#[rstest]
fn jobs_list_applies_filters(harness: Harness) {
    let text = harness.output(&["jobs", "list", "--search", "backend", "--grade", "MIDDLE"]);

    assert_eq!(text.lines().count(), 2, "one job plus the summary: {text}");
    assert!(text.contains("Backend Developer MIDDLE"));
    assert!(text.ends_with("1 of 3 jobs\n"));
}

#[rstest]
fn jobs_list_filters_by_required_skill(harness: Harness) {
    let text = harness.output(&["jobs", "list", "--skill", "docker"]);

    assert!(text.starts_with("2\t"), "only the second job lists Docker: {text}");
    assert!(text.ends_with("1 of 3 jobs\n"));
}

#[rstest]
fn jobs_list_skill_filters_combine(harness: Harness) {
    let text = harness.output(&["jobs", "list", "--skill", "git", "--skill", "testing"]);

    assert!(text.ends_with("2 of 3 jobs\n"), "jobs 1 and 3 list Testing: {text}");
}

#[rstest]
fn added_job_is_visible_to_later_commands(harness: Harness) {
    let created = harness.output(&[
        "jobs",
        "add",
        "--title",
        "Data Engineer",
        "--company",
        "Acme",
        "--location",
        "Remote",
        "--grade",
        "lead",
        "--salary-min",
        "100000",
        "--salary-max",
        "150000",
        "--requirement",
        "SQL",
    ]);
    let id = created
        .trim()
        .strip_prefix("created job ")
        .expect("creation message");

    let details = harness.output(&["jobs", "show", id]);

    assert!(details.contains("title: Data Engineer\n"));
    assert!(details.contains("requirements: SQL\n"));
    assert!(harness.output(&["jobs", "list"]).ends_with("4 of 4 jobs\n"));
}

#[rstest]
fn inverted_salary_band_is_rejected(harness: Harness) {
    let err = harness
        .run(&[
            "jobs",
            "add",
            "--title",
            "X",
            "--company",
            "Y",
            "--location",
            "Z",
            "--grade",
            "junior",
            "--salary-min",
            "10",
            "--salary-max",
            "5",
        ])
        .expect_err("inverted band");

    assert!(matches!(err, CliError::InvalidJob(_)));
}

#[rstest]
fn unknown_job_is_reported(harness: Harness) {
    let err = harness.run(&["jobs", "show", "nope"]).expect_err("unknown id");

    assert_eq!(err.to_string(), "job `nope` not found");
}

#[rstest]
fn candidates_list_filters_by_experience_range(harness: Harness) {
    let text = harness.output(&[
        "candidates",
        "list",
        "--min-experience",
        "1",
        "--max-experience",
        "2",
    ]);

    assert!(text.contains("Maria Sidorova"));
    assert!(text.contains("Dmitri Kozlov"));
    assert!(!text.contains("Alexei Petrov"));
    assert!(text.ends_with("2 of 4 candidates\n"));
}

#[rstest]
fn candidate_update_changes_only_given_fields(harness: Harness) {
    harness.output(&["candidates", "update", "1", "--stage", "hired", "--clear-job"]);

    let details = harness.output(&["candidates", "show", "1"]);

    assert!(details.contains("stage: hired\n"));
    assert!(details.contains("job: -\n"));
    assert!(details.contains("name: Alexei Petrov\n"));
}

#[rstest]
fn empty_update_is_rejected(harness: Harness) {
    let err = harness
        .run(&["candidates", "update", "1"])
        .expect_err("nothing to update");

    assert!(matches!(err, CliError::InvalidArgument(_)));
}

#[rstest]
fn out_of_range_rating_is_rejected(harness: Harness) {
    let err = harness
        .run(&["candidates", "update", "1", "--rating", "7"])
        .expect_err("rating too high");

    assert!(matches!(err, CliError::InvalidCandidate(_)));
}

#[rstest]
fn shortlist_toggle_round_trips(harness: Harness) {
    assert_eq!(
        harness.output(&["shortlist", "toggle", "2"]),
        "added candidate 2 to shortlist\n"
    );
    let listed = harness.output(&["shortlist", "list"]);
    assert!(listed.starts_with("* 2\tMaria Sidorova"));
    assert!(listed.ends_with("1 of 4 candidates\n"));

    assert_eq!(
        harness.output(&["shortlist", "toggle", "2"]),
        "removed candidate 2 from shortlist\n"
    );
    assert!(harness.output(&["shortlist", "list"]).starts_with("0 of 4"));
}

#[rstest]
fn shortlist_toggle_rejects_unknown_candidate(harness: Harness) {
    let err = harness
        .run(&["shortlist", "toggle", "404"])
        .expect_err("unknown candidate");

    assert!(matches!(err, CliError::NotFound { kind: "candidate", .. }));
}

#[rstest]
fn deleting_a_candidate_drops_its_shortlist_entry(harness: Harness) {
    harness.output(&["shortlist", "toggle", "3"]);

    assert_eq!(
        harness.output(&["candidates", "delete", "3"]),
        "deleted candidate 3\n"
    );

    assert!(harness.output(&["shortlist", "list"]).starts_with("0 of 3"));
    assert!(matches!(
        harness.run(&["candidates", "delete", "3"]),
        Err(CliError::NotFound { .. })
    ));
}

#[rstest]
fn shortlisted_flag_limits_candidate_list(harness: Harness) {
    harness.output(&["shortlist", "toggle", "4"]);

    let text = harness.output(&["candidates", "list", "--shortlisted"]);

    assert!(text.starts_with("* 4\tAnna Morozova"));
    assert!(text.ends_with("1 of 4 candidates\n"));
}

#[rstest]
fn cache_clear_removes_persisted_entries(harness: Harness) {
    harness.output(&["jobs", "list"]);
    harness.output(&["shortlist", "toggle", "1"]);

    harness.output(&["cache", "clear"]);

    assert_eq!(harness.kv.keys(), Ok(Vec::new()));
}

#[rstest]
fn cache_clear_all_keeps_foreign_keys(harness: Harness) {
    harness.output(&["jobs", "list"]);
    harness.kv.write("other-app", "1").expect("write");

    let text = harness.output(&["cache", "clear", "--all"]);

    assert_eq!(text, "cleared every key under `hr-panel-`\n");
    assert_eq!(harness.kv.keys(), Ok(vec!["other-app".to_owned()]));
}

#[rstest]
fn clear_job_conflicts_with_job_id() {
    let parsed = Cli::try_parse_from([
        "hr-panel",
        "candidates",
        "update",
        "1",
        "--job-id",
        "2",
        "--clear-job",
    ]);

    assert!(parsed.is_err());
}

#[rstest]
fn storage_dir_is_accepted_after_subcommands() {
    let cli = Cli::try_parse_from(["hr-panel", "jobs", "list", "--storage-dir", "/tmp/x"])
        .expect("global flag parses");

    assert_eq!(cli.storage_dir, Some(std::path::PathBuf::from("/tmp/x")));
}
