//! Job postings, the job board filter and match ranking

use crate::error::{PlacementError, Result};
use crate::matching::calculate_match_score;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    OnSite,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    OnCampus,
    OffCampus,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Draft,
    #[default]
    Active,
    Closed,
    Archived,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            WorkMode::OnSite => "on-site",
            WorkMode::Remote => "remote",
            WorkMode::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for WorkMode {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "on-site" | "onsite" => Ok(WorkMode::OnSite),
            "remote" => Ok(WorkMode::Remote),
            "hybrid" => Ok(WorkMode::Hybrid),
            other => Err(PlacementError::InvalidInput(format!(
                "Unknown work mode '{}'. Use all, remote, hybrid or on-site",
                other
            ))),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            JobType::OnCampus => "on-campus",
            JobType::OffCampus => "off-campus",
            JobType::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for JobType {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "on-campus" => Ok(JobType::OnCampus),
            "off-campus" => Ok(JobType::OffCampus),
            "hybrid" => Ok(JobType::Hybrid),
            other => Err(PlacementError::InvalidInput(format!(
                "Unknown job type '{}'. Use on-campus, off-campus or hybrid",
                other
            ))),
        }
    }
}

/// A row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    pub company_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub ctc_min: u64,
    #[serde(default)]
    pub ctc_max: u64,
    pub work_mode: WorkMode,
    pub job_type: JobType,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default = "default_openings")]
    pub openings: u32,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub total_applications: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_openings() -> u32 {
    1
}

/// Load postings from a JSON array, as exported from the jobs table.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content = std::fs::read_to_string(path)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&content)?;
    log::debug!("Loaded {} job postings from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// Board filter: a free-text search plus an optional work mode (`None` is "all").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub search: String,
    pub work_mode: Option<WorkMode>,
}

impl JobFilter {
    pub fn new(search: impl Into<String>, work_mode: Option<WorkMode>) -> Self {
        Self {
            search: search.into(),
            work_mode,
        }
    }

    /// Parse the board's mode selector, where `all` means no restriction.
    pub fn parse_mode(mode: &str) -> Result<Option<WorkMode>> {
        if mode.trim().eq_ignore_ascii_case("all") {
            Ok(None)
        } else {
            mode.parse().map(Some)
        }
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        let needle = self.search.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        let matches_search = contains(job.title.as_str())
            || contains(job.company_name.as_str())
            || contains(job.location.as_str())
            || job.required_skills.iter().any(|s| contains(s.as_str()));

        let matches_mode = self.work_mode.map_or(true, |mode| job.work_mode == mode);

        matches_search && matches_mode
    }
}

pub fn filter_jobs<'a>(jobs: &'a [JobPosting], filter: &JobFilter) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// Pair each posting with its match score, best first. Ties keep input order.
pub fn rank_jobs<'a, S: AsRef<str>>(
    jobs: impl IntoIterator<Item = &'a JobPosting>,
    candidate_skills: &[S],
) -> Vec<(&'a JobPosting, u8)> {
    let mut ranked: Vec<(&JobPosting, u8)> = jobs
        .into_iter()
        .map(|job| (job, calculate_match_score(job.required_skills.as_slice(), candidate_skills)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
