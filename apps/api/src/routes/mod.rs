pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::daily_logs::handlers as logs;
use crate::insights::handlers as insights;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Daily logs
        .route("/api/v1/logs", put(logs::handle_upsert_log))
        .route("/api/v1/logs/:date", get(logs::handle_get_log))
        .route("/api/v1/logs/:date/state", get(logs::handle_workflow_state))
        .route(
            "/api/v1/logs/:date/complete",
            post(logs::handle_complete_workflow),
        )
        .route("/api/v1/heatmap", get(logs::handle_heatmap))
        // Insights
        .route("/api/v1/logs/:date/score", post(insights::handle_score_log))
        .route("/api/v1/logs/:date/feed", post(insights::handle_generate_feed))
        .route("/api/v1/feed", get(insights::handle_list_feed))
        .with_state(state)
}
