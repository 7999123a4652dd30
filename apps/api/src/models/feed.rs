use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One generated reflection tied to a user and date. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct FeedMessage {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
