//! Collaborator seams for the hosted auth and record store
//!
//! The portal keeps accounts and rows in a third-party service. These traits
//! are the only surface the rest of the crate talks to; [`memory::MemoryBackend`]
//! implements both for the CLI and tests.

pub mod memory;
pub mod models;
pub mod queries;

use crate::error::{PlacementError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub use memory::MemoryBackend;
pub use models::{User, UserId, UserRole};

/// A record as stored by the collaborator: a JSON object keyed by `id`.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    CandidateProfiles,
    CorporateProfiles,
    CollegeProfiles,
    Jobs,
    Applications,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::CandidateProfiles => "candidate_profiles",
            Table::CorporateProfiles => "corporate_profiles",
            Table::CollegeProfiles => "college_profiles",
            Table::Jobs => "jobs",
            Table::Applications => "applications",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Equality filters, one optional ordering column and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<(String, SortOrder)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.order_by = Some((column.into(), order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.filters
            .iter()
            .all(|(column, value)| row.get(column) == Some(value))
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str, role: UserRole) -> Result<UserId>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<UserId>;

    async fn current_user(&self) -> Result<Option<User>>;

    async fn sign_out(&self) -> Result<()>;
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>>;

    /// Insert a row and return it as stored, with `id` and `created_at` filled in.
    async fn insert(&self, table: Table, row: Row) -> Result<Row>;

    /// Merge `patch` into the row with this id and return the result.
    async fn update(&self, table: Table, id: &str, patch: Row) -> Result<Row>;
}

pub fn to_row<T: Serialize>(value: &T) -> Result<Row> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(PlacementError::InvalidInput(format!(
            "Expected a JSON object for a record, got {}",
            other
        ))),
    }
}

pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(row))?)
}
