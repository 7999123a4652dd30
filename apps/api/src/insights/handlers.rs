//! Axum route handlers for scoring and the reflection feed.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::daily_logs::handlers::UserIdBody;
use crate::errors::AppError;
use crate::insights::feed::{generate_feed_message, list_feed_messages, FeedOutcome};
use crate::insights::scoring::{score_log, ScoreOutcome};
use crate::models::feed::FeedMessage;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FeedQuery {
    pub user_id: String,
    pub date: Option<String>,
}

/// POST /api/v1/logs/:date/score
pub async fn handle_score_log(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<UserIdBody>,
) -> Result<Json<ScoreOutcome>, AppError> {
    let outcome = score_log(
        state.logs.as_ref(),
        state.llm.as_ref(),
        &body.user_id,
        &date,
    )
    .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/logs/:date/feed
pub async fn handle_generate_feed(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<UserIdBody>,
) -> Result<Json<FeedOutcome>, AppError> {
    let outcome = generate_feed_message(
        state.logs.as_ref(),
        state.feed.as_ref(),
        state.llm.as_ref(),
        &body.user_id,
        &date,
    )
    .await?;
    Ok(Json(outcome))
}

/// GET /api/v1/feed
pub async fn handle_list_feed(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> Result<Json<Vec<FeedMessage>>, AppError> {
    let messages =
        list_feed_messages(state.feed.as_ref(), &params.user_id, params.date.as_deref()).await?;
    Ok(Json(messages))
}
