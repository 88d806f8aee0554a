//! Fixed value pools cycled through by the generator.

use crate::seed::{GradeSeed, StageSeed};

pub(crate) const JOB_TITLES: [&str; 6] = [
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "QA Engineer",
    "UI/UX Designer",
];

pub(crate) const GRADES: [GradeSeed; 4] = [
    GradeSeed::Junior,
    GradeSeed::Middle,
    GradeSeed::Senior,
    GradeSeed::Lead,
];

pub(crate) const LOCATIONS: [&str; 5] = ["Berlin", "Lisbon", "Remote", "Warsaw", "Tallinn"];

pub(crate) const CORE_REQUIREMENTS: [&str; 3] = ["JavaScript/TypeScript", "Git", "REST/GraphQL"];

/// Alternates between even (`Testing`) and odd (`Docker`) job indices.
pub(crate) const ALTERNATING_REQUIREMENTS: [&str; 2] = ["Testing", "Docker"];

pub(crate) const BENEFITS: [&str; 3] = ["Remote", "Insurance", "Education budget"];

pub(crate) const STAGES: [StageSeed; 8] = [
    StageSeed::Applied,
    StageSeed::Screening,
    StageSeed::Interview,
    StageSeed::Technical,
    StageSeed::Final,
    StageSeed::Offered,
    StageSeed::Hired,
    StageSeed::Rejected,
];

pub(crate) const FIRST_NAMES: [&str; 8] = [
    "Alexei", "Maria", "Dmitri", "Anna", "Sergei", "Elena", "Igor", "Olga",
];

pub(crate) const LAST_NAMES: [&str; 8] = [
    "Petrov", "Sidorova", "Kozlov", "Morozova", "Volkov", "Novikova", "Sokolov", "Kuznetsova",
];

pub(crate) const SKILLS: [&str; 12] = [
    "React",
    "Vue",
    "Svelte",
    "Node.js",
    "PostgreSQL",
    "Docker",
    "AWS",
    "Kubernetes",
    "TypeScript",
    "CSS",
    "HTML",
    "Jest",
];

/// Offsets into [`SKILLS`] for a candidate's three skills.
pub(crate) const SKILL_OFFSETS: [usize; 3] = [0, 3, 6];

/// Returns the pool entry at `index`, wrapping around the pool length.
pub(crate) fn cycle<T: Copy>(pool: &[T], index: usize) -> Option<T> {
    index
        .checked_rem(pool.len())
        .and_then(|slot| pool.get(slot))
        .copied()
}

/// Returns `index` wrapped into `0..modulus`, or zero for an empty modulus.
pub(crate) fn wrap(index: usize, modulus: usize) -> usize {
    index.checked_rem(modulus).unwrap_or_default()
}
