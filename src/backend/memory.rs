//! In-process stand-in for the hosted auth and record store

use crate::backend::models::{User, UserId, UserRole};
use crate::backend::{to_row, AuthService, Query, RecordStore, Row, SortOrder, Table};
use crate::error::{PlacementError, Result};
use crate::jobs::{load_jobs, JobPosting};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    user: User,
    password: String,
}

/// Tables held as JSON rows, accounts held in memory with plain passwords.
/// Only meant for the CLI and tests.
#[derive(Default)]
pub struct MemoryBackend {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
    accounts: RwLock<Vec<Account>>,
    session: RwLock<Option<UserId>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `jobs` table starts with these postings.
    pub fn with_jobs(jobs: Vec<JobPosting>) -> Result<Self> {
        let mut rows = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let mut row = to_row(job)?;
            stamp(&mut row);
            rows.push(row);
        }
        info!("Seeded in-memory job board with {} postings", rows.len());

        let mut tables = HashMap::new();
        tables.insert(Table::Jobs, rows);
        Ok(Self {
            tables: RwLock::new(tables),
            ..Default::default()
        })
    }

    pub fn from_jobs_file(path: &Path) -> Result<Self> {
        Self::with_jobs(load_jobs(path)?)
    }

    pub async fn row_count(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }
}

/// Fill in `id` and `created_at` when the caller left them out.
fn stamp(row: &mut Row) {
    let missing_id = match row.get("id") {
        None | Some(Value::Null) => true,
        Some(Value::String(id)) => id.is_empty(),
        Some(_) => false,
    };
    if missing_id {
        row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    }
    if !matches!(row.get("created_at"), Some(Value::String(_))) {
        row.insert("created_at".to_string(), Value::String(Utc::now().to_rfc3339()));
    }
}

fn row_id(row: &Row) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

/// Order two column values the way the hosted store would: numbers
/// numerically, timestamps chronologically, nulls first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RecordStore for MemoryBackend {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Row> = tables
            .get(&table)
            .map(|rows| rows.iter().filter(|row| query.matches(row)).cloned().collect())
            .unwrap_or_default();

        if let Some((column, order)) = &query.order_by {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(column), b.get(column));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        debug!("select from {}: {} rows", table, rows.len());
        Ok(rows)
    }

    async fn insert(&self, table: Table, mut row: Row) -> Result<Row> {
        stamp(&mut row);

        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();
        if let Some(id) = row_id(&row) {
            if rows.iter().any(|existing| row_id(existing) == Some(id)) {
                return Err(PlacementError::Backend(format!(
                    "duplicate key value for {}.id: {}",
                    table, id
                )));
            }
        }

        rows.push(row.clone());
        debug!("insert into {}: now {} rows", table, rows.len());
        Ok(row)
    }

    async fn update(&self, table: Table, id: &str, patch: Row) -> Result<Row> {
        let mut tables = self.tables.write().await;
        let row = tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| row_id(row) == Some(id)))
            .ok_or_else(|| PlacementError::NotFound(format!("{} row {}", table, id)))?;

        for (column, value) in patch {
            if column != "id" {
                row.insert(column, value);
            }
        }
        Ok(row.clone())
    }
}

#[async_trait]
impl AuthService for MemoryBackend {
    async fn sign_up(&self, email: &str, password: &str, role: UserRole) -> Result<UserId> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(PlacementError::InvalidInput(format!(
                "Invalid email address: '{}'",
                email
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PlacementError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.iter().any(|a| a.user.email == email) {
                return Err(PlacementError::AlreadyRegistered(email));
            }

            let user = User {
                id: UserId(Uuid::new_v4().to_string()),
                email,
                role,
                created_at: Utc::now(),
            };
            accounts.push(Account {
                user: user.clone(),
                password: password.to_string(),
            });
            user
        };

        self.insert(Table::Users, to_row(&user)?).await?;
        *self.session.write().await = Some(user.id.clone());

        info!("Registered {:?} account {}", user.role, user.id);
        Ok(user.id)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<UserId> {
        let email = email.trim().to_lowercase();
        let id = {
            let accounts = self.accounts.read().await;
            accounts
                .iter()
                .find(|a| a.user.email == email && a.password == password)
                .map(|a| a.user.id.clone())
                .ok_or(PlacementError::InvalidCredentials)?
        };

        *self.session.write().await = Some(id.clone());
        debug!("Signed in {}", id);
        Ok(id)
    }

    async fn current_user(&self) -> Result<Option<User>> {
        let session = self.session.read().await;
        let Some(id) = session.as_ref() else {
            return Ok(None);
        };

        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| &a.user.id == id)
            .map(|a| a.user.clone()))
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}
