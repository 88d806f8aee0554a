//! Command-line adapter over the job and candidate stores.
//!
//! Each invocation opens the configured key-value directory, loads the stores
//! it needs (cache first, generated data otherwise), applies one command and
//! renders the result as plain text.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use hr_example_data::DatasetError;
use thiserror::Error;
use tracing::info;

pub use self::render::{
    write_candidate_details, write_candidate_line, write_job_details, write_job_line,
    write_summary,
};
use crate::config::PanelSettings;
use crate::domain::ports::KeyValueStoreError;
use crate::domain::{
    Candidate, CandidateDraft, CandidatePatch, CandidateStage, CandidateStore,
    CandidateValidationError, Entity, EntityId, EntityIdValidationError, ExampleDataset,
    FilterOptions, Job, JobDraft, JobGrade, JobStatus, JobStore, JobValidationError,
    NamespacedCache, RangeFilter, Rating, SalaryRange, StoreError,
};
use crate::outbound::storage::DirectoryKeyValueStore;

/// Browse and edit HR panel jobs, candidates and the shortlist.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hr-panel",
    about = "Browse and edit HR panel jobs, candidates and the shortlist",
    version
)]
pub struct Cli {
    /// Directory holding persisted panel data. Overrides configuration.
    #[arg(long = "storage-dir", value_name = "DIR", global = true)]
    pub storage_dir: Option<PathBuf>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level command groups.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Job postings.
    #[command(subcommand)]
    Jobs(JobsCommand),
    /// Candidates.
    #[command(subcommand)]
    Candidates(CandidatesCommand),
    /// Shortlisted candidates.
    #[command(subcommand)]
    Shortlist(ShortlistCommand),
    /// Persisted data.
    #[command(subcommand)]
    Cache(CacheCommand),
}

/// Job commands.
#[derive(Debug, Clone, Subcommand)]
pub enum JobsCommand {
    /// List jobs matching the given filters.
    List(JobFilterArgs),
    /// Show one job.
    Show {
        /// Job identifier.
        id: String,
    },
    /// Create a job.
    Add(JobAddArgs),
}

/// Filters accepted by `jobs list`.
#[derive(Debug, Clone, Default, Args)]
pub struct JobFilterArgs {
    /// Case-insensitive text matched against title, company, location and
    /// description.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
    /// Requirement the job must list; repeat to require several.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    /// Required grade.
    #[arg(long, value_name = "GRADE")]
    pub grade: Option<JobGrade>,
    /// Lower salary bound the band must reach.
    #[arg(long = "salary-min", value_name = "AMOUNT")]
    pub salary_min: Option<u64>,
    /// Upper salary bound the band must start below.
    #[arg(long = "salary-max", value_name = "AMOUNT")]
    pub salary_max: Option<u64>,
}

impl JobFilterArgs {
    fn to_filters(&self) -> FilterOptions {
        let salary = (self.salary_min.is_some() || self.salary_max.is_some()).then_some(
            RangeFilter {
                min: self.salary_min,
                max: self.salary_max,
            },
        );
        FilterOptions {
            search: self.search.clone(),
            grade: self.grade,
            salary,
            skills: (!self.skills.is_empty()).then(|| self.skills.clone()),
            ..FilterOptions::default()
        }
    }
}

/// Fields accepted by `jobs add`.
#[derive(Debug, Clone, Args)]
pub struct JobAddArgs {
    /// Job title.
    #[arg(long)]
    pub title: String,
    /// Hiring company.
    #[arg(long)]
    pub company: String,
    /// Office location or `Remote`.
    #[arg(long)]
    pub location: String,
    /// Seniority grade.
    #[arg(long, value_name = "GRADE")]
    pub grade: JobGrade,
    /// Salary band floor.
    #[arg(long = "salary-min", value_name = "AMOUNT")]
    pub salary_min: u64,
    /// Salary band ceiling.
    #[arg(long = "salary-max", value_name = "AMOUNT")]
    pub salary_max: u64,
    /// Salary currency code.
    #[arg(long, default_value = "EUR")]
    pub currency: String,
    /// Free-form description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Requirement; repeat for several.
    #[arg(long = "requirement", value_name = "TEXT")]
    pub requirements: Vec<String>,
    /// Benefit; repeat for several.
    #[arg(long = "benefit", value_name = "TEXT")]
    pub benefits: Vec<String>,
    /// Publication status.
    #[arg(long, value_name = "STATUS", default_value = "active")]
    pub status: JobStatus,
}

impl JobAddArgs {
    fn into_draft(self) -> Result<JobDraft, CliError> {
        Ok(JobDraft {
            salary: SalaryRange::new(self.salary_min, self.salary_max, self.currency)?,
            title: self.title,
            company: self.company,
            location: self.location,
            grade: self.grade,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            status: self.status,
        })
    }
}

/// Candidate commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CandidatesCommand {
    /// List candidates matching the given filters.
    List(CandidateFilterArgs),
    /// Show one candidate.
    Show {
        /// Candidate identifier.
        id: String,
    },
    /// Create a candidate.
    Add(CandidateAddArgs),
    /// Change fields of a candidate.
    Update(CandidateUpdateArgs),
    /// Remove a candidate and its shortlist entry.
    Delete {
        /// Candidate identifier.
        id: String,
    },
}

/// Filters accepted by `candidates list`.
#[derive(Debug, Clone, Default, Args)]
pub struct CandidateFilterArgs {
    /// Case-insensitive text matched against name, email and position.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
    /// Required pipeline stage.
    #[arg(long, value_name = "STAGE")]
    pub stage: Option<CandidateStage>,
    /// Minimum years of experience.
    #[arg(long = "min-experience", value_name = "YEARS")]
    pub min_experience: Option<u32>,
    /// Maximum years of experience.
    #[arg(long = "max-experience", value_name = "YEARS")]
    pub max_experience: Option<u32>,
    /// Skill that must be present; repeat for several.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    /// Job the candidate applied for.
    #[arg(long = "job-id", value_name = "ID")]
    pub job_id: Option<String>,
    /// Only shortlisted candidates.
    #[arg(long)]
    pub shortlisted: bool,
}

impl CandidateFilterArgs {
    fn to_filters(&self) -> Result<FilterOptions, CliError> {
        let experience = (self.min_experience.is_some() || self.max_experience.is_some())
            .then_some(RangeFilter {
                min: self.min_experience,
                max: self.max_experience,
            });
        Ok(FilterOptions {
            search: self.search.clone(),
            stage: self.stage,
            experience,
            skills: (!self.skills.is_empty()).then(|| self.skills.clone()),
            job_id: self.job_id.as_deref().map(EntityId::try_from).transpose()?,
            ..FilterOptions::default()
        })
    }
}

/// Fields accepted by `candidates add`.
#[derive(Debug, Clone, Args)]
pub struct CandidateAddArgs {
    /// Given name.
    #[arg(long = "first-name")]
    pub first_name: String,
    /// Family name.
    #[arg(long = "last-name")]
    pub last_name: String,
    /// Contact email address.
    #[arg(long)]
    pub email: String,
    /// Contact phone number.
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Position applied for.
    #[arg(long)]
    pub position: String,
    /// Years of professional experience.
    #[arg(long, value_name = "YEARS", default_value_t = 0)]
    pub experience: u32,
    /// Skill; repeat for several.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    /// Pipeline stage.
    #[arg(long, value_name = "STAGE", default_value = "applied")]
    pub stage: CandidateStage,
    /// Rating between 0 and 5.
    #[arg(long, default_value_t = 0.0)]
    pub rating: f64,
    /// Recruiter notes.
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Job applied for.
    #[arg(long = "job-id", value_name = "ID")]
    pub job_id: Option<String>,
}

impl CandidateAddArgs {
    fn into_draft(self) -> Result<CandidateDraft, CliError> {
        Ok(CandidateDraft {
            rating: Rating::new(self.rating)?,
            job_id: self.job_id.map(EntityId::try_from).transpose()?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            experience: self.experience,
            skills: self.skills,
            stage: self.stage,
            notes: self.notes,
        })
    }
}

/// Fields accepted by `candidates update`; omitted fields stay unchanged.
#[derive(Debug, Clone, Args)]
pub struct CandidateUpdateArgs {
    /// Candidate identifier.
    pub id: String,
    /// Replacement given name.
    #[arg(long = "first-name")]
    pub first_name: Option<String>,
    /// Replacement family name.
    #[arg(long = "last-name")]
    pub last_name: Option<String>,
    /// Replacement email address.
    #[arg(long)]
    pub email: Option<String>,
    /// Replacement phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// Replacement position.
    #[arg(long)]
    pub position: Option<String>,
    /// Replacement experience.
    #[arg(long, value_name = "YEARS")]
    pub experience: Option<u32>,
    /// Replacement skills; repeat for several.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    /// Replacement stage.
    #[arg(long, value_name = "STAGE")]
    pub stage: Option<CandidateStage>,
    /// Replacement rating.
    #[arg(long)]
    pub rating: Option<f64>,
    /// Replacement notes.
    #[arg(long)]
    pub notes: Option<String>,
    /// Replacement job link.
    #[arg(long = "job-id", value_name = "ID", conflicts_with = "clear_job")]
    pub job_id: Option<String>,
    /// Remove the job link.
    #[arg(long = "clear-job")]
    pub clear_job: bool,
}

impl CandidateUpdateArgs {
    fn to_patch(&self) -> Result<CandidatePatch, CliError> {
        let job_id = match (&self.job_id, self.clear_job) {
            (_, true) => Some(None),
            (Some(raw), false) => Some(Some(EntityId::try_from(raw.as_str())?)),
            (None, false) => None,
        };
        let patch = CandidatePatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            position: self.position.clone(),
            experience: self.experience,
            skills: (!self.skills.is_empty()).then(|| self.skills.clone()),
            stage: self.stage,
            rating: self.rating.map(Rating::new).transpose()?,
            notes: self.notes.clone(),
            job_id,
        };
        if patch.is_empty() {
            return Err(CliError::invalid_argument("no fields to update"));
        }
        Ok(patch)
    }
}

/// Shortlist commands.
#[derive(Debug, Clone, Subcommand)]
pub enum ShortlistCommand {
    /// List shortlisted candidates.
    List,
    /// Add or remove a candidate.
    Toggle {
        /// Candidate identifier.
        id: String,
    },
}

/// Persisted data commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheCommand {
    /// Drop persisted jobs, candidates and shortlist.
    Clear {
        /// Remove every key under the configured prefix.
        #[arg(long)]
        all: bool,
    },
}

/// Errors reported by the command-line adapter.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments were well-formed but unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An identifier argument was malformed.
    #[error(transparent)]
    InvalidId(#[from] EntityIdValidationError),
    /// Job fields failed validation.
    #[error(transparent)]
    InvalidJob(#[from] JobValidationError),
    /// Candidate fields failed validation.
    #[error(transparent)]
    InvalidCandidate(#[from] CandidateValidationError),
    /// No entity has the requested identifier.
    #[error("{kind} `{id}` not found")]
    NotFound {
        /// Entity kind looked up.
        kind: &'static str,
        /// Requested identifier.
        id: EntityId,
    },
    /// A store could not be populated.
    #[error("failed to load {kind} list: {message}")]
    Load {
        /// Entity kind being loaded.
        kind: &'static str,
        /// Load error recorded by the store.
        message: String,
    },
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The configured dataset size is invalid.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// The storage directory could not be opened.
    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),
    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    fn not_found<E: Entity>(id: EntityId) -> Self {
        Self::NotFound { kind: E::KIND, id }
    }
}

/// Shared dependencies of every command.
#[derive(Debug, Clone)]
pub struct PanelContext {
    cache: Arc<NamespacedCache>,
    dataset: ExampleDataset,
}

impl PanelContext {
    /// Bundle a cache with the dataset used when it is empty.
    pub fn new(cache: Arc<NamespacedCache>, dataset: ExampleDataset) -> Self {
        Self { cache, dataset }
    }

    /// Open the storage directory named by `storage_dir`, or by `settings`
    /// when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Storage`] when the directory cannot be opened and
    /// [`CliError::Dataset`] when the configured counts are too large.
    pub fn open(settings: &PanelSettings, storage_dir: Option<PathBuf>) -> Result<Self, CliError> {
        let dir = storage_dir.unwrap_or_else(|| settings.storage_dir());
        let store = DirectoryKeyValueStore::open(&dir)?;
        info!(dir = %dir.display(), "opened panel storage");
        let cache = NamespacedCache::with_prefix(Arc::new(store), settings.key_prefix());
        Ok(Self::new(
            Arc::new(cache),
            ExampleDataset::new(settings.dataset_spec()?),
        ))
    }

    fn job_store(&self) -> JobStore {
        JobStore::new(Arc::clone(&self.cache), Arc::new(self.dataset))
    }

    fn candidate_store(&self) -> CandidateStore {
        CandidateStore::new(Arc::clone(&self.cache), Arc::new(self.dataset))
    }

    fn loaded_jobs(&self) -> Result<JobStore, CliError> {
        let mut store = self.job_store();
        store.load();
        match &store.state().error {
            Some(message) => Err(CliError::Load {
                kind: "job",
                message: message.clone(),
            }),
            None => Ok(store),
        }
    }

    fn loaded_candidates(&self) -> Result<CandidateStore, CliError> {
        let mut store = self.candidate_store();
        store.load();
        match &store.state().error {
            Some(message) => Err(CliError::Load {
                kind: "candidate",
                message: message.clone(),
            }),
            None => Ok(store),
        }
    }
}

/// Parse `--storage-dir`, open the storage and run the command.
///
/// # Errors
///
/// Returns any [`CliError`] raised while opening storage or executing.
pub fn run(cli: Cli, settings: &PanelSettings, out: &mut dyn Write) -> Result<(), CliError> {
    let context = PanelContext::open(settings, cli.storage_dir)?;
    execute(cli.command, &context, out)
}

/// Execute one command against `context`, writing the result to `out`.
///
/// # Errors
///
/// Returns [`CliError`] for malformed arguments, unknown identifiers, load
/// failures and output errors.
pub fn execute(
    command: Command,
    context: &PanelContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Jobs(command) => execute_jobs(command, context, out),
        Command::Candidates(command) => execute_candidates(command, context, out),
        Command::Shortlist(command) => execute_shortlist(command, context, out),
        Command::Cache(CacheCommand::Clear { all }) => clear_cache(all, context, out),
    }
}

fn execute_jobs(
    command: JobsCommand,
    context: &PanelContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut store = context.loaded_jobs()?;
    match command {
        JobsCommand::List(args) => {
            store.set_filters(args.to_filters());
            let jobs = store.filtered();
            for job in &jobs {
                write_job_line(out, job)?;
            }
            write_summary(out, jobs.len(), store.state().items.len(), "jobs")?;
        }
        JobsCommand::Show { id } => {
            let id = EntityId::try_from(id)?;
            let job = store
                .get_by_id(&id)
                .ok_or_else(|| CliError::not_found::<Job>(id))?;
            write_job_details(out, &job)?;
        }
        JobsCommand::Add(args) => {
            let job = store.add(args.into_draft()?)?;
            writeln!(out, "created job {}", job.id)?;
        }
    }
    Ok(())
}

fn execute_candidates(
    command: CandidatesCommand,
    context: &PanelContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut store = context.loaded_candidates()?;
    match command {
        CandidatesCommand::List(args) => {
            store.set_filters(args.to_filters()?);
            let candidates = store.filtered();
            let mut shown = 0;
            for candidate in &candidates {
                let shortlisted = store.is_in_shortlist(&candidate.id);
                if args.shortlisted && !shortlisted {
                    continue;
                }
                write_candidate_line(out, candidate, shortlisted)?;
                shown += 1;
            }
            write_summary(out, shown, store.state().items.len(), "candidates")?;
        }
        CandidatesCommand::Show { id } => {
            let id = EntityId::try_from(id)?;
            let shortlisted = store.is_in_shortlist(&id);
            let candidate = store
                .get_by_id(&id)
                .ok_or_else(|| CliError::not_found::<Candidate>(id))?;
            write_candidate_details(out, &candidate, shortlisted)?;
        }
        CandidatesCommand::Add(args) => {
            let candidate = store.add(args.into_draft()?)?;
            writeln!(out, "created candidate {}", candidate.id)?;
        }
        CandidatesCommand::Update(args) => {
            let patch = args.to_patch()?;
            let id = EntityId::try_from(args.id)?;
            let candidate = store
                .update(&id, patch)
                .ok_or_else(|| CliError::not_found::<Candidate>(id))?;
            writeln!(out, "updated candidate {}", candidate.id)?;
        }
        CandidatesCommand::Delete { id } => {
            let id = EntityId::try_from(id)?;
            if !store.delete(&id) {
                return Err(CliError::not_found::<Candidate>(id));
            }
            writeln!(out, "deleted candidate {id}")?;
        }
    }
    Ok(())
}

fn execute_shortlist(
    command: ShortlistCommand,
    context: &PanelContext,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut store = context.loaded_candidates()?;
    match command {
        ShortlistCommand::List => {
            let candidates = store.shortlisted();
            for candidate in &candidates {
                write_candidate_line(out, candidate, true)?;
            }
            write_summary(out, candidates.len(), store.state().items.len(), "candidates")?;
        }
        ShortlistCommand::Toggle { id } => {
            let id = EntityId::try_from(id)?;
            // Dangling entries may still be removed.
            if store.get_by_id(&id).is_none() && !store.is_in_shortlist(&id) {
                return Err(CliError::not_found::<Candidate>(id));
            }
            if store.toggle_shortlist(&id) {
                writeln!(out, "added candidate {id} to shortlist")?;
            } else {
                writeln!(out, "removed candidate {id} from shortlist")?;
            }
        }
    }
    Ok(())
}

fn clear_cache(all: bool, context: &PanelContext, out: &mut dyn Write) -> Result<(), CliError> {
    if all {
        context.cache.clear_all();
        writeln!(out, "cleared every key under `{}`", context.cache.prefix())?;
        return Ok(());
    }
    context.job_store().clear_cache();
    context.candidate_store().clear_cache();
    writeln!(out, "cleared cached jobs, candidates and shortlist")?;
    Ok(())
}

#[cfg(test)]
mod tests;
