use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::feed::FeedMessage;
use crate::models::log::Log;
use crate::store::{FeedStore, LogStore, LogWrite, StoreError};

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for PgStore {
    async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Log>, StoreError> {
        Ok(
            sqlx::query_as::<_, Log>("SELECT * FROM logs WHERE user_id = $1 AND date = $2")
                .bind(user_id)
                .bind(date)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn upsert(&self, write: LogWrite<'_>) -> Result<Log, StoreError> {
        // The unique (user_id, date) key makes this a single atomic statement,
        // so concurrent first submissions collapse into one row.
        Ok(sqlx::query_as::<_, Log>(
            r#"
            INSERT INTO logs (id, user_id, date, answers, score, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (user_id, date) DO UPDATE
            SET answers    = EXCLUDED.answers,
                score      = COALESCE(EXCLUDED.score, logs.score),
                updated_at = GREATEST(logs.updated_at, EXCLUDED.updated_at)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(write.user_id)
        .bind(write.date)
        .bind(write.answers)
        .bind(write.score)
        .bind(write.now)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn patch_score(
        &self,
        id: Uuid,
        score: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Log>, StoreError> {
        Ok(sqlx::query_as::<_, Log>(
            r#"
            UPDATE logs
            SET score = $2, updated_at = GREATEST(updated_at, $3)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(score)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Log>, StoreError> {
        Ok(sqlx::query_as::<_, Log>("SELECT * FROM logs WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }
}

#[async_trait]
impl FeedStore for PgStore {
    async fn insert(
        &self,
        user_id: &str,
        date: NaiveDate,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<FeedMessage, StoreError> {
        Ok(sqlx::query_as::<_, FeedMessage>(
            r#"
            INSERT INTO feed (id, user_id, date, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(message)
        .bind(now)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<FeedMessage>, StoreError> {
        Ok(sqlx::query_as::<_, FeedMessage>(
            "SELECT * FROM feed WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<FeedMessage>, StoreError> {
        Ok(sqlx::query_as::<_, FeedMessage>(
            "SELECT * FROM feed WHERE user_id = $1 AND date = $2 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?)
    }
}
