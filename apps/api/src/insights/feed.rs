//! Reflection feed. Generates a short encouraging note for a day's log and
//! appends it to the user's feed. Messages are never updated or de-duplicated.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::daily_logs::validation::{parse_log_date, validate_user_id};
use crate::errors::AppError;
use crate::insights::prompts::FEED_SYSTEM;
use crate::llm_client::prompts::daily_log_user_message;
use crate::llm_client::{CompletionRequest, TextGenerator};
use crate::models::feed::FeedMessage;
use crate::store::{FeedStore, LogStore};

pub const EMPTY_REPLY_PLACEHOLDER: &str = "(No response)";
const FEED_TEMPERATURE: f32 = 0.7;
/// Loose bound for a 100–150 word reply.
const FEED_MAX_TOKENS: u32 = 200;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeedOutcome {
    pub message: String,
}

pub async fn generate_feed_message(
    logs: &dyn LogStore,
    feed: &dyn FeedStore,
    llm: &dyn TextGenerator,
    user_id: &str,
    date: &str,
) -> Result<FeedOutcome, AppError> {
    validate_user_id(user_id)?;
    let day = parse_log_date(date)?;

    let log = logs
        .find_by_user_and_date(user_id, day)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No daily log found for user {user_id} on {date}"))
        })?;

    let request = CompletionRequest::new(
        FEED_SYSTEM,
        daily_log_user_message(&log.answers),
        FEED_TEMPERATURE,
        FEED_MAX_TOKENS,
    );
    let reply = llm.complete(&request).await?;

    let message = match reply.trim() {
        "" => EMPTY_REPLY_PLACEHOLDER.to_string(),
        text => text.to_string(),
    };

    let row = feed.insert(user_id, day, &message, Utc::now()).await?;
    info!("Appended feed message {} for user {user_id} on {date}", row.id);

    Ok(FeedOutcome { message })
}

/// A user's feed. Without a date, every message newest first; with a date,
/// that day's messages in the order they were generated.
pub async fn list_feed_messages(
    feed: &dyn FeedStore,
    user_id: &str,
    date: Option<&str>,
) -> Result<Vec<FeedMessage>, AppError> {
    validate_user_id(user_id)?;
    match date {
        Some(date) => {
            let day = parse_log_date(date)?;
            Ok(feed.list_by_user_and_date(user_id, day).await?)
        }
        None => Ok(feed.list_by_user(user_id).await?),
    }
}
