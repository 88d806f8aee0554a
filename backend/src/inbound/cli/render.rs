//! Plain-text rendering of store contents.
//!
//! List views print one line per entity; detail views print `label: value`
//! pairs. Everything writes to an arbitrary [`Write`] so tests can capture
//! the output.

use std::io::{self, Write};

use crate::domain::{Candidate, Job};

const SHORTLIST_MARKER: char = '*';

/// One summary line for a job.
pub fn write_job_line(out: &mut dyn Write, job: &Job) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}-{} {}\t{}",
        job.id,
        job.title,
        job.grade,
        job.location,
        job.salary.min(),
        job.salary.max(),
        job.salary.currency(),
        job.status,
    )
}

/// Every field of a job.
pub fn write_job_details(out: &mut dyn Write, job: &Job) -> io::Result<()> {
    writeln!(out, "id: {}", job.id)?;
    writeln!(out, "title: {}", job.title)?;
    writeln!(out, "company: {}", job.company)?;
    writeln!(out, "location: {}", job.location)?;
    writeln!(out, "grade: {}", job.grade)?;
    writeln!(
        out,
        "salary: {}-{} {}",
        job.salary.min(),
        job.salary.max(),
        job.salary.currency()
    )?;
    writeln!(out, "status: {}", job.status)?;
    writeln!(out, "description: {}", job.description)?;
    writeln!(out, "requirements: {}", job.requirements.join(", "))?;
    writeln!(out, "benefits: {}", job.benefits.join(", "))?;
    writeln!(out, "created: {}", job.created_at.to_rfc3339())?;
    writeln!(out, "updated: {}", job.updated_at.to_rfc3339())
}

/// One summary line for a candidate, prefixed with `*` when shortlisted.
pub fn write_candidate_line(
    out: &mut dyn Write,
    candidate: &Candidate,
    shortlisted: bool,
) -> io::Result<()> {
    let marker = if shortlisted { SHORTLIST_MARKER } else { ' ' };
    writeln!(
        out,
        "{marker} {}\t{}\t{}\t{}y\t{}\t{}",
        candidate.id,
        candidate.full_name(),
        candidate.position,
        candidate.experience,
        candidate.stage,
        candidate.rating,
    )
}

/// Every field of a candidate.
pub fn write_candidate_details(
    out: &mut dyn Write,
    candidate: &Candidate,
    shortlisted: bool,
) -> io::Result<()> {
    writeln!(out, "id: {}", candidate.id)?;
    writeln!(out, "name: {}", candidate.full_name())?;
    writeln!(out, "email: {}", candidate.email)?;
    writeln!(out, "phone: {}", candidate.phone)?;
    writeln!(out, "position: {}", candidate.position)?;
    writeln!(out, "experience: {} years", candidate.experience)?;
    writeln!(out, "skills: {}", candidate.skills.join(", "))?;
    writeln!(out, "stage: {}", candidate.stage)?;
    writeln!(out, "rating: {}", candidate.rating)?;
    match &candidate.job_id {
        Some(job_id) => writeln!(out, "job: {job_id}")?,
        None => writeln!(out, "job: -")?,
    }
    writeln!(out, "shortlisted: {}", if shortlisted { "yes" } else { "no" })?;
    writeln!(out, "notes: {}", candidate.notes)?;
    writeln!(out, "created: {}", candidate.created_at.to_rfc3339())?;
    writeln!(out, "updated: {}", candidate.updated_at.to_rfc3339())
}

/// Trailing count line such as `2 of 25 jobs`.
pub fn write_summary(out: &mut dyn Write, shown: usize, total: usize, noun: &str) -> io::Result<()> {
    writeln!(out, "{shown} of {total} {noun}")
}
