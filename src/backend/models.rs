use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PlacementError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Candidate,
    College,
    Corporate,
    Admin,
}

impl FromStr for UserRole {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "candidate" => Ok(UserRole::Candidate),
            "college" => Ok(UserRole::College),
            "corporate" => Ok(UserRole::Corporate),
            "admin" => Ok(UserRole::Admin),
            other => Err(PlacementError::InvalidInput(format!("Unknown role '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub id: String,
    pub user_id: UserId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_score: Option<u8>,
    #[serde(default)]
    pub aptitude_score: Option<u32>,
}

impl CandidateProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateProfile {
    #[serde(default)]
    pub id: String,
    pub user_id: UserId,
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub hr_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeProfile {
    #[serde(default)]
    pub id: String,
    pub user_id: UserId,
    pub institution_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Screening,
    ResumeScored,
    AptitudePending,
    AptitudeCompleted,
    AiInterviewPending,
    AiInterviewCompleted,
    HrReview,
    Shortlisted,
    Rejected,
    OfferSent,
    OfferAccepted,
    Hired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationScores {
    pub resume: u32,
    pub aptitude: u32,
    pub interview: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub stage: ApplicationStatus,
    pub date: DateTime<Utc>,
    pub status: String,
}

/// A row of the `applications` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub scores: ApplicationScores,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// A fresh application with a single completed `applied` step.
    pub fn new(job_id: &str, candidate: &CandidateProfile, candidate_email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            job_id: job_id.to_string(),
            candidate_id: candidate.id.clone(),
            candidate_name: candidate.full_name(),
            candidate_email: candidate_email.to_string(),
            status: ApplicationStatus::Applied,
            scores: ApplicationScores::default(),
            timeline: vec![TimelineEntry {
                stage: ApplicationStatus::Applied,
                date: now,
                status: "completed".to_string(),
            }],
            created_at: now,
        }
    }
}

/// The job columns shown next to each of a candidate's applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    #[serde(default)]
    pub ctc_min: u64,
    #[serde(default)]
    pub ctc_max: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationWithJob {
    pub application: Application,
    pub job: Option<JobSummary>,
}
