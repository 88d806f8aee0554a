//! End-to-end checks of the command-line adapter over directory storage.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use clap::Parser;
use hr_panel::config::PanelSettings;
use hr_panel::inbound::cli::{Cli, CliError, run};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn storage() -> TempDir {
    TempDir::new().expect("create temp dir")
}

fn settings(storage: &TempDir) -> PanelSettings {
    PanelSettings {
        storage_dir: Some(storage.path().to_path_buf()),
        key_prefix: Some("test-".to_owned()),
        job_count: Some(2),
        candidate_count: Some(3),
        json_logs: false,
    }
}

fn invoke(settings: &PanelSettings, args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("hr-panel").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    run(cli, settings, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[rstest]
fn edits_persist_between_invocations(storage: TempDir) {
    let settings = settings(&storage);

    let created = invoke(
        &settings,
        &[
            "candidates",
            "add",
            "--first-name",
            "Grace",
            "--last-name",
            "Hopper",
            "--email",
            "grace@example.com",
            "--position",
            "Backend Developer",
            "--experience",
            "12",
            "--skill",
            "COBOL",
            "--rating",
            "4.5",
        ],
    )
    .expect("candidate added");
    let id = created
        .trim()
        .strip_prefix("created candidate ")
        .expect("creation message")
        .to_owned();

    let listed = invoke(&settings, &["candidates", "list", "--skill", "cobol"]).expect("listed");

    assert!(listed.contains("Grace Hopper"), "unexpected listing: {listed}");
    assert!(listed.ends_with("1 of 4 candidates\n"));
    let details = invoke(&settings, &["candidates", "show", &id]).expect("shown");
    assert!(details.contains("rating: 4.5\n"));
}

#[rstest]
fn entries_are_namespaced_by_the_configured_prefix(storage: TempDir) {
    let settings = settings(&storage);

    invoke(&settings, &["shortlist", "toggle", "1"]).expect("toggled");

    let expected = ["test-candidates", "test-shortlist"]
        .map(|key| storage.path().join(format!("{}.json", hex::encode(key))));
    for path in expected {
        assert!(path.exists(), "expected {path:?} to exist");
    }
}

#[rstest]
fn storage_dir_flag_overrides_configuration(storage: TempDir) {
    let configured = TempDir::new().expect("create temp dir");
    let settings = settings(&configured);
    let flag_dir = storage.path().to_str().expect("utf-8 path");

    invoke(&settings, &["--storage-dir", flag_dir, "jobs", "list"]).expect("listed");

    let files = std::fs::read_dir(storage.path()).expect("read dir").count();
    assert_eq!(files, 1, "only the jobs entry is written");
    assert_eq!(
        std::fs::read_dir(configured.path()).expect("read dir").count(),
        0
    );
}

#[rstest]
fn oversized_dataset_is_reported(storage: TempDir) {
    let mut settings = settings(&storage);
    settings.job_count = Some(50_000);

    let err = invoke(&settings, &["jobs", "list"]).expect_err("dataset too large");

    assert!(matches!(err, CliError::Dataset(_)));
}
