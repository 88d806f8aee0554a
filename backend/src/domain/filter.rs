//! Filter criteria shared by the job and candidate stores.
//!
//! [`FilterOptions`] is one shape for both entity kinds; each kind evaluates
//! only the criteria that concern it. Every active criterion must hold (logical
//! AND) and string matching is case-insensitive substring containment. A blank
//! search string or an empty skill list counts as absent.

use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, CandidateStage};
use super::entity_id::EntityId;
use super::job::{Job, JobGrade};

/// Inclusive numeric bounds; a missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeFilter<T> {
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    /// Bounds on both sides.
    pub const fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Returns `true` when `value` lies within the bounds.
    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Returns `true` when `[low, high]` intersects the bounds.
    pub fn overlaps(&self, low: T, high: T) -> bool {
        self.min.is_none_or(|min| high >= min) && self.max.is_none_or(|max| low <= max)
    }
}

/// Optional filter criteria. The default value filters nothing out.
///
/// # Examples
/// ```
/// use hr_panel::domain::{FilterOptions, RangeFilter};
///
/// let filters = FilterOptions {
///     search: Some("frontend".to_owned()),
///     experience: Some(RangeFilter::between(3, 5)),
///     ..FilterOptions::default()
/// };
/// assert!(!filters.is_empty());
/// assert!(FilterOptions::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Free-text search term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Required job grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<JobGrade>,
    /// Required candidate stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<CandidateStage>,
    /// Candidate experience bounds, in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<RangeFilter<u32>>,
    /// Salary bounds a job's band must overlap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<RangeFilter<u64>>,
    /// Skills that must all be present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Job a candidate must have applied for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<EntityId>,
}

impl FilterOptions {
    /// Returns `true` when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.grade.is_none()
            && self.stage.is_none()
            && self.experience.is_none()
            && self.salary.is_none()
            && self.skill_terms().is_none()
            && self.job_id.is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    fn skill_terms(&self) -> Option<Vec<String>> {
        self.skills
            .as_ref()
            .filter(|skills| !skills.is_empty())
            .map(|skills| skills.iter().map(|skill| skill.to_lowercase()).collect())
    }
}

/// Evaluation of [`FilterOptions`] against one entity.
pub trait Filterable {
    /// Returns `true` when every active criterion relevant to `Self` holds.
    fn matches(&self, filters: &FilterOptions) -> bool;
}

impl Filterable for Job {
    fn matches(&self, filters: &FilterOptions) -> bool {
        if let Some(term) = filters.search_term() {
            let haystack = [
                self.title.as_str(),
                self.company.as_str(),
                self.location.as_str(),
                self.description.as_str(),
            ]
            .join(" ");
            if !contains_ignore_case(&haystack, &term) {
                return false;
            }
        }
        if filters.grade.is_some_and(|grade| grade != self.grade) {
            return false;
        }
        if filters
            .salary
            .is_some_and(|range| !range.overlaps(self.salary.min(), self.salary.max()))
        {
            return false;
        }
        if let Some(skills) = filters.skill_terms() {
            if !all_present(&skills, &self.requirements) {
                return false;
            }
        }
        true
    }
}

impl Filterable for Candidate {
    fn matches(&self, filters: &FilterOptions) -> bool {
        if let Some(term) = filters.search_term() {
            let haystack = [
                self.first_name.as_str(),
                self.last_name.as_str(),
                self.email.as_str(),
                self.position.as_str(),
                self.skills.join(" ").as_str(),
            ]
            .join(" ");
            if !contains_ignore_case(&haystack, &term) {
                return false;
            }
        }
        if filters.stage.is_some_and(|stage| stage != self.stage) {
            return false;
        }
        if filters
            .experience
            .is_some_and(|range| !range.contains(self.experience))
        {
            return false;
        }
        if let Some(skills) = filters.skill_terms() {
            if !all_present(&skills, &self.skills) {
                return false;
            }
        }
        if let Some(job_id) = filters.job_id.as_ref() {
            if self.job_id.as_ref() != Some(job_id) {
                return false;
            }
        }
        true
    }
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Every lowercase term occurs within at least one of `values`.
fn all_present(terms: &[String], values: &[String]) -> bool {
    let lowered: Vec<String> = values.iter().map(|value| value.to_lowercase()).collect();
    terms
        .iter()
        .all(|term| lowered.iter().any(|value| value.contains(term.as_str())))
}

#[cfg(test)]
mod tests;
