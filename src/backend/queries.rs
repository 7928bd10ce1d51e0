//! Typed helpers over [`RecordStore`]
//!
//! Reads log failures and fall back to an empty result so a flaky store
//! never takes a page down. Writes hand the error back to the caller.

use crate::backend::models::{
    Application, ApplicationWithJob, CandidateProfile, CollegeProfile, CorporateProfile, JobSummary,
    UserId,
};
use crate::backend::{from_row, to_row, Query, RecordStore, Row, SortOrder, Table};
use crate::error::{PlacementError, Result};
use crate::jobs::{JobPosting, JobStatus, JobType};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode_rows<T: DeserializeOwned>(table: Table, rows: Vec<Row>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match from_row(row) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping malformed {} row: {}", table, e);
                None
            }
        })
        .collect()
}

async fn read_many<S, T>(store: &S, table: Table, query: Query, what: &str) -> Vec<T>
where
    S: RecordStore + ?Sized,
    T: DeserializeOwned,
{
    match store.select(table, &query).await {
        Ok(rows) => decode_rows(table, rows),
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            Vec::new()
        }
    }
}

/// Exactly one matching row, or `None` with the reason logged.
async fn read_single<S, T>(store: &S, table: Table, query: Query, what: &str) -> Option<T>
where
    S: RecordStore + ?Sized,
    T: DeserializeOwned,
{
    let rows = match store.select(table, &query).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            return None;
        }
    };

    if rows.len() != 1 {
        error!("Error fetching {}: expected one row, found {}", what, rows.len());
        return None;
    }

    rows.into_iter().next().and_then(|row| match from_row(row) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Error decoding {}: {}", what, e);
            None
        }
    })
}

fn newest_first() -> Query {
    Query::new().order_by("created_at", SortOrder::Descending)
}

/// Active postings, newest first, optionally limited to one job type.
pub async fn active_jobs<S>(store: &S, job_type: Option<JobType>) -> Vec<JobPosting>
where
    S: RecordStore + ?Sized,
{
    let mut query = newest_first().eq("status", enum_value(JobStatus::Active));
    if let Some(job_type) = job_type {
        query = query.eq("job_type", enum_value(job_type));
    }
    read_many(store, Table::Jobs, query, "jobs").await
}

pub async fn jobs_by_company<S>(store: &S, company_id: &str) -> Vec<JobPosting>
where
    S: RecordStore + ?Sized,
{
    let query = newest_first().eq("company_id", company_id);
    read_many(store, Table::Jobs, query, "company jobs").await
}

pub async fn create_job<S>(store: &S, job: &JobPosting) -> Result<JobPosting>
where
    S: RecordStore + ?Sized,
{
    let stored = store.insert(Table::Jobs, to_row(job)?).await.map_err(|e| {
        error!("Error creating job: {}", e);
        e
    })?;
    let job: JobPosting = from_row(stored)?;
    info!("Created job {} ({})", job.id, job.title);
    Ok(job)
}

/// A candidate's applications, newest first, each with its job's headline columns.
pub async fn candidate_applications<S>(store: &S, candidate_id: &str) -> Vec<ApplicationWithJob>
where
    S: RecordStore + ?Sized,
{
    let query = newest_first().eq("candidate_id", candidate_id);
    let applications: Vec<Application> =
        read_many(store, Table::Applications, query, "applications").await;

    let mut joined = Vec::with_capacity(applications.len());
    for application in applications {
        let job_query = Query::new().eq("id", application.job_id.as_str());
        let job: Option<JobSummary> = read_single(store, Table::Jobs, job_query, "application job").await;
        joined.push(ApplicationWithJob { application, job });
    }
    joined
}

/// Store the application, then bump the job's `total_applications`.
pub async fn submit_application<S>(store: &S, application: &Application) -> Result<Application>
where
    S: RecordStore + ?Sized,
{
    let stored = store
        .insert(Table::Applications, to_row(application)?)
        .await
        .map_err(|e| {
            error!("Error submitting application: {}", e);
            e
        })?;
    let stored: Application = from_row(stored)?;

    increment_job_applications(store, &stored.job_id).await?;
    info!(
        "Application {} submitted for job {}",
        stored.id, stored.job_id
    );
    Ok(stored)
}

async fn increment_job_applications<S>(store: &S, job_id: &str) -> Result<()>
where
    S: RecordStore + ?Sized,
{
    let rows = store
        .select(Table::Jobs, &Query::new().eq("id", job_id).limit(1))
        .await?;
    let job = rows
        .first()
        .ok_or_else(|| PlacementError::NotFound(format!("job {}", job_id)))?;

    let current = job
        .get("total_applications")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut patch = Row::new();
    patch.insert("total_applications".to_string(), Value::from(current + 1));
    store.update(Table::Jobs, job_id, patch).await?;
    Ok(())
}

pub async fn candidate_profile<S>(store: &S, user_id: &UserId) -> Option<CandidateProfile>
where
    S: RecordStore + ?Sized,
{
    let query = Query::new().eq("user_id", user_id.0.as_str());
    read_single(store, Table::CandidateProfiles, query, "candidate profile").await
}

pub async fn corporate_profile<S>(store: &S, user_id: &UserId) -> Option<CorporateProfile>
where
    S: RecordStore + ?Sized,
{
    let query = Query::new().eq("user_id", user_id.0.as_str());
    read_single(store, Table::CorporateProfiles, query, "corporate profile").await
}

pub async fn college_profile<S>(store: &S, user_id: &UserId) -> Option<CollegeProfile>
where
    S: RecordStore + ?Sized,
{
    let query = Query::new().eq("user_id", user_id.0.as_str());
    read_single(store, Table::CollegeProfiles, query, "college profile").await
}

/// The stored string form of a serde enum, for use in filters.
fn enum_value<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::jobs::WorkMode;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct FailingStore;

    #[async_trait]
    impl RecordStore for FailingStore {
        async fn select(&self, _table: Table, _query: &Query) -> Result<Vec<Row>> {
            Err(PlacementError::Backend("connection reset".to_string()))
        }

        async fn insert(&self, _table: Table, _row: Row) -> Result<Row> {
            Err(PlacementError::Backend("connection reset".to_string()))
        }

        async fn update(&self, _table: Table, _id: &str, _patch: Row) -> Result<Row> {
            Err(PlacementError::Backend("connection reset".to_string()))
        }
    }

    fn posting(id: &str, job_type: JobType, status: JobStatus, day: u32) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            company_id: Some("acme".to_string()),
            company_name: "Acme".to_string(),
            title: format!("Role {}", id),
            description: String::new(),
            location: "Remote".to_string(),
            ctc_min: 600_000,
            ctc_max: 900_000,
            work_mode: WorkMode::Remote,
            job_type,
            required_skills: vec!["Rust".to_string()],
            openings: 2,
            status,
            total_applications: 0,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
        }
    }

    fn seeded() -> MemoryBackend {
        MemoryBackend::with_jobs(vec![
            posting("j1", JobType::OffCampus, JobStatus::Active, 1),
            posting("j2", JobType::OnCampus, JobStatus::Active, 3),
            posting("j3", JobType::OffCampus, JobStatus::Closed, 4),
            posting("j4", JobType::OffCampus, JobStatus::Active, 2),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_active_jobs_newest_first() {
        let store = seeded();

        let all: Vec<String> = active_jobs(&store, None).await.into_iter().map(|j| j.id).collect();
        assert_eq!(all, vec!["j2", "j4", "j1"]);

        let off_campus: Vec<String> = active_jobs(&store, Some(JobType::OffCampus))
            .await
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(off_campus, vec!["j4", "j1"]);
    }

    #[tokio::test]
    async fn test_reads_degrade_on_backend_error() {
        let store = FailingStore;
        assert!(active_jobs(&store, None).await.is_empty());
        assert!(jobs_by_company(&store, "acme").await.is_empty());
        assert!(candidate_applications(&store, "c1").await.is_empty());
        assert!(candidate_profile(&store, &UserId("u1".to_string())).await.is_none());
    }

    #[tokio::test]
    async fn test_writes_propagate_backend_error() {
        let store = FailingStore;
        let job = posting("x", JobType::OffCampus, JobStatus::Active, 1);
        assert!(matches!(
            create_job(&store, &job).await,
            Err(PlacementError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_application_bumps_count() {
        let store = seeded();
        let candidate = CandidateProfile {
            id: "c1".to_string(),
            user_id: UserId("u1".to_string()),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            ..Default::default()
        };

        let application = Application::new("j1", &candidate, "asha@example.com");
        let stored = submit_application(&store, &application).await.unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.candidate_name, "Asha Rao");

        submit_application(&store, &application).await.unwrap();

        let jobs = active_jobs(&store, None).await;
        let j1 = jobs.iter().find(|j| j.id == "j1").unwrap();
        assert_eq!(j1.total_applications, 2);

        let mine = candidate_applications(&store, "c1").await;
        assert_eq!(mine.len(), 2);
        let job = mine[0].job.as_ref().unwrap();
        assert_eq!(job.title, "Role j1");
        assert_eq!(job.ctc_max, 900_000);
    }

    #[tokio::test]
    async fn test_submit_for_unknown_job_fails() {
        let store = seeded();
        let application = Application::new("missing", &CandidateProfile::default(), "a@b.co");
        assert!(matches!(
            submit_application(&store, &application).await,
            Err(PlacementError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_profile_lookup_requires_single_row() {
        let store = MemoryBackend::new();
        let user = UserId("u1".to_string());
        assert!(candidate_profile(&store, &user).await.is_none());

        let profile = CandidateProfile {
            user_id: user.clone(),
            first_name: "Asha".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };
        store
            .insert(Table::CandidateProfiles, to_row(&profile).unwrap())
            .await
            .unwrap();

        let found = candidate_profile(&store, &user).await.unwrap();
        assert_eq!(found.skills, vec!["Rust"]);
        assert!(!found.id.is_empty());

        let corporate = CorporateProfile {
            id: String::new(),
            user_id: UserId("u2".to_string()),
            company_name: "Acme".to_string(),
            industry: None,
            hr_email: Some("hr@acme.test".to_string()),
        };
        store
            .insert(Table::CorporateProfiles, to_row(&corporate).unwrap())
            .await
            .unwrap();
        assert!(corporate_profile(&store, &UserId("u2".to_string())).await.is_some());
        assert!(college_profile(&store, &UserId("u2".to_string())).await.is_none());
    }
}
