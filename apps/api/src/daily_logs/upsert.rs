use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::daily_logs::validation::{parse_log_date, validate_score, validate_user_id};
use crate::errors::AppError;
use crate::models::log::Log;
use crate::store::{LogStore, LogWrite};

#[derive(Debug, Deserialize)]
pub struct UpsertLogRequest {
    pub user_id: String,
    pub date: String,
    #[serde(default)]
    pub answers: Value,
    pub score: Option<i32>,
}

/// Creates the log for (user_id, date) or replaces its answers in place.
///
/// A fresh log has `created_at == updated_at` and no score unless one is
/// supplied. On resubmission `answers` is replaced wholesale and an omitted
/// score leaves the stored one untouched.
pub async fn upsert_log(store: &dyn LogStore, request: UpsertLogRequest) -> Result<Log, AppError> {
    validate_user_id(&request.user_id)?;
    let date = parse_log_date(&request.date)?;
    if let Some(score) = request.score {
        validate_score(score)?;
    }

    let log = store
        .upsert(LogWrite {
            user_id: &request.user_id,
            date,
            answers: &request.answers,
            score: request.score,
            now: Utc::now(),
        })
        .await?;

    info!(
        "Upserted daily log {} for user {} on {}",
        log.id, log.user_id, log.date
    );
    Ok(log)
}

/// Returns the log for (user_id, date), if one has been submitted.
pub async fn get_daily_log(
    store: &dyn LogStore,
    user_id: &str,
    date: &str,
) -> Result<Option<Log>, AppError> {
    validate_user_id(user_id)?;
    let date = parse_log_date(date)?;
    Ok(store.find_by_user_and_date(user_id, date).await?)
}
