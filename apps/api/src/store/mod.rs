//! Persistence ports for daily logs and feed messages.
//!
//! Every operation receives its stores as `Arc<dyn LogStore>` /
//! `Arc<dyn FeedStore>` through `AppState`, so the Postgres adapter and the
//! in-memory adapter are interchangeable.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::feed::FeedMessage;
use crate::models::log::Log;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Fields written by an upsert. `score: None` leaves an existing score alone.
#[derive(Debug, Clone)]
pub struct LogWrite<'a> {
    pub user_id: &'a str,
    pub date: NaiveDate,
    pub answers: &'a Value,
    pub score: Option<i32>,
    pub now: DateTime<Utc>,
}

#[async_trait]
pub trait LogStore: Send + Sync {
    async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Log>, StoreError>;

    /// Atomic insert-or-update keyed by (user_id, date).
    ///
    /// On conflict `answers` is replaced wholesale, `score` only when
    /// provided, and `created_at` is kept.
    async fn upsert(&self, write: LogWrite<'_>) -> Result<Log, StoreError>;

    /// Patches the score of an existing log and refreshes `updated_at`.
    /// Returns `None` when the id no longer exists.
    async fn patch_score(
        &self,
        id: Uuid,
        score: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Log>, StoreError>;

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Log>, StoreError>;
}

#[async_trait]
pub trait FeedStore: Send + Sync {
    async fn insert(
        &self,
        user_id: &str,
        date: NaiveDate,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<FeedMessage, StoreError>;

    /// All messages for a user, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FeedMessage>, StoreError>;

    /// Messages for one day, oldest first.
    async fn list_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<FeedMessage>, StoreError>;
}
