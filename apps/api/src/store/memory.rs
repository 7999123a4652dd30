use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::feed::FeedMessage;
use crate::models::log::Log;
use crate::store::{FeedStore, LogStore, LogWrite, StoreError};

/// In-process store for local development and tests.
///
/// Each method holds the lock for its whole body, which gives the same
/// single-record atomicity the Postgres adapter gets from one statement.
#[derive(Default)]
pub struct MemoryStore {
    logs: Mutex<Vec<Log>>,
    feed: Mutex<Vec<FeedMessage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn logs(&self) -> Result<MutexGuard<'_, Vec<Log>>, StoreError> {
        self.logs.lock().map_err(|_| StoreError::Poisoned)
    }

    fn feed(&self) -> Result<MutexGuard<'_, Vec<FeedMessage>>, StoreError> {
        self.feed.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Log>, StoreError> {
        Ok(self
            .logs()?
            .iter()
            .find(|l| l.user_id == user_id && l.date == date)
            .cloned())
    }

    async fn upsert(&self, write: LogWrite<'_>) -> Result<Log, StoreError> {
        let mut logs = self.logs()?;
        if let Some(existing) = logs
            .iter_mut()
            .find(|l| l.user_id == write.user_id && l.date == write.date)
        {
            existing.answers = write.answers.clone();
            if write.score.is_some() {
                existing.score = write.score;
            }
            existing.updated_at = existing.updated_at.max(write.now);
            return Ok(existing.clone());
        }

        let log = Log {
            id: Uuid::new_v4(),
            user_id: write.user_id.to_string(),
            date: write.date,
            answers: write.answers.clone(),
            score: write.score,
            created_at: write.now,
            updated_at: write.now,
        };
        logs.push(log.clone());
        Ok(log)
    }

    async fn patch_score(
        &self,
        id: Uuid,
        score: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Log>, StoreError> {
        let mut logs = self.logs()?;
        Ok(logs.iter_mut().find(|l| l.id == id).map(|log| {
            log.score = Some(score);
            log.updated_at = log.updated_at.max(now);
            log.clone()
        }))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Log>, StoreError> {
        Ok(self
            .logs()?
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FeedStore for MemoryStore {
    async fn insert(
        &self,
        user_id: &str,
        date: NaiveDate,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<FeedMessage, StoreError> {
        let row = FeedMessage {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            date,
            message: message.to_string(),
            created_at: now,
        };
        self.feed()?.push(row.clone());
        Ok(row)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FeedMessage>, StoreError> {
        // Rows are kept in insertion order; reversing keeps ties newest-first too.
        let mut rows: Vec<FeedMessage> = self
            .feed()?
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<FeedMessage>, StoreError> {
        Ok(self
            .feed()?
            .iter()
            .filter(|m| m.user_id == user_id && m.date == date)
            .cloned()
            .collect())
    }
}
