//! Axum route handlers for the Daily Logs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::daily_logs::heatmap::{build_heatmap, list_logs_for_year, HeatmapDay};
use crate::daily_logs::upsert::{get_daily_log, upsert_log, UpsertLogRequest};
use crate::daily_logs::validation::parse_year;
use crate::daily_logs::workflow::{complete_workflow, workflow_state, WorkflowStatus};
use crate::errors::AppError;
use crate::models::log::Log;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct UserIdBody {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct HeatmapQuery {
    pub user_id: String,
    pub year: String,
}

#[derive(Serialize)]
pub struct HeatmapResponse {
    pub year: i32,
    pub logs: Vec<Log>,
    pub days: std::collections::BTreeMap<String, HeatmapDay>,
}

/// PUT /api/v1/logs
pub async fn handle_upsert_log(
    State(state): State<AppState>,
    Json(request): Json<UpsertLogRequest>,
) -> Result<Json<Log>, AppError> {
    let log = upsert_log(state.logs.as_ref(), request).await?;
    Ok(Json(log))
}

/// GET /api/v1/logs/:date
pub async fn handle_get_log(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Log>, AppError> {
    let log = get_daily_log(state.logs.as_ref(), &params.user_id, &date)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No daily log found for {date}")))?;
    Ok(Json(log))
}

/// GET /api/v1/logs/:date/state
pub async fn handle_workflow_state(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<WorkflowStatus>, AppError> {
    let status =
        workflow_state(state.logs.as_ref(), state.feed.as_ref(), &params.user_id, &date).await?;
    Ok(Json(status))
}

/// POST /api/v1/logs/:date/complete
///
/// Runs whichever of scoring and reflection the day still needs.
pub async fn handle_complete_workflow(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<UserIdBody>,
) -> Result<Json<WorkflowStatus>, AppError> {
    let status = complete_workflow(
        state.logs.as_ref(),
        state.feed.as_ref(),
        state.llm.as_ref(),
        &body.user_id,
        &date,
    )
    .await?;
    Ok(Json(status))
}

/// GET /api/v1/heatmap
pub async fn handle_heatmap(
    State(state): State<AppState>,
    Query(params): Query<HeatmapQuery>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let logs = list_logs_for_year(state.logs.as_ref(), &params.user_id, &params.year).await?;
    let year = parse_year(&params.year)?;
    let heatmap = build_heatmap(year, &logs);
    Ok(Json(HeatmapResponse {
        year,
        logs,
        days: heatmap.days,
    }))
}
