//! Per-day workflow state: Logged → Scored → Reflected.
//!
//! Submission, scoring and reflection are separate calls with no transaction
//! around them, so a day can stop at any stage. The state is derived from
//! what is stored rather than tracked separately:
//!
//! - `Logged`: the log exists but has no score.
//! - `Scored`: it has a score, and no reflection was generated at or after
//!   the log's last update.
//! - `Reflected`: it has a score and a reflection at least as new as the log.
//!
//! `complete_workflow` runs whichever steps are still missing, in order.

use serde::Serialize;
use tracing::info;

use crate::daily_logs::validation::{parse_log_date, validate_user_id};
use crate::errors::AppError;
use crate::insights::feed::generate_feed_message;
use crate::insights::scoring::score_log;
use crate::llm_client::TextGenerator;
use crate::models::feed::FeedMessage;
use crate::models::log::Log;
use crate::store::{FeedStore, LogStore};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Logged,
    Scored,
    Reflected,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    Score,
    Reflect,
}

impl WorkflowStage {
    pub fn next_step(self) -> Option<NextStep> {
        match self {
            WorkflowStage::Logged => Some(NextStep::Score),
            WorkflowStage::Scored => Some(NextStep::Reflect),
            WorkflowStage::Reflected => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkflowStatus {
    pub user_id: String,
    pub date: String,
    pub stage: WorkflowStage,
    pub next_step: Option<NextStep>,
    pub score: Option<i32>,
    pub reflections: usize,
}

fn derive_stage(log: &Log, reflections: &[FeedMessage]) -> WorkflowStage {
    if log.score.is_none() {
        return WorkflowStage::Logged;
    }
    if reflections.iter().any(|m| m.created_at >= log.updated_at) {
        WorkflowStage::Reflected
    } else {
        WorkflowStage::Scored
    }
}

pub async fn workflow_state(
    logs: &dyn LogStore,
    feed: &dyn FeedStore,
    user_id: &str,
    date: &str,
) -> Result<WorkflowStatus, AppError> {
    validate_user_id(user_id)?;
    let day = parse_log_date(date)?;

    let log = logs
        .find_by_user_and_date(user_id, day)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No daily log found for user {user_id} on {date}"))
        })?;
    let reflections = feed.list_by_user_and_date(user_id, day).await?;
    let stage = derive_stage(&log, &reflections);

    Ok(WorkflowStatus {
        user_id: user_id.to_string(),
        date: date.to_string(),
        stage,
        next_step: stage.next_step(),
        score: log.score,
        reflections: reflections.len(),
    })
}

/// Runs the remaining steps for a day and returns the resulting state.
///
/// Stops at the first failing step; calling again resumes from there.
pub async fn complete_workflow(
    logs: &dyn LogStore,
    feed: &dyn FeedStore,
    llm: &dyn TextGenerator,
    user_id: &str,
    date: &str,
) -> Result<WorkflowStatus, AppError> {
    let mut status = workflow_state(logs, feed, user_id, date).await?;

    while let Some(step) = status.next_step {
        match step {
            NextStep::Score => {
                score_log(logs, llm, user_id, date).await?;
            }
            NextStep::Reflect => {
                generate_feed_message(logs, feed, llm, user_id, date).await?;
            }
        }
        let advanced = workflow_state(logs, feed, user_id, date).await?;
        if advanced.stage == status.stage {
            // The step ran but the stored state did not move (e.g. a clock
            // step backwards); report rather than loop.
            return Ok(advanced);
        }
        info!(
            "Workflow for user {user_id} on {date} advanced {:?} -> {:?}",
            status.stage, advanced.stage
        );
        status = advanced;
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily_logs::upsert::{upsert_log, UpsertLogRequest};
    use crate::llm_client::LlmError;
    use crate::store::{LogWrite, MemoryStore};
    use crate::test_support::ScriptedGenerator;
    use chrono::Duration;
    use serde_json::json;

    const DATE: &str = "2025-03-01";

    async fn seed(store: &MemoryStore) {
        upsert_log(
            store,
            UpsertLogRequest {
                user_id: "u1".to_string(),
                date: DATE.to_string(),
                answers: json!({"mood": 8}),
                score: None,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_missing_log_is_not_found() {
        let store = MemoryStore::new();
        let err = workflow_state(&store, &store, "u1", DATE).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stages_advance_step_by_step() {
        let store = MemoryStore::new();
        seed(&store).await;
        let llm = ScriptedGenerator::new(vec![Ok("70".to_string()), Ok("Nice work.".to_string())]);

        let status = workflow_state(&store, &store, "u1", DATE).await.unwrap();
        assert_eq!(status.stage, WorkflowStage::Logged);
        assert_eq!(status.next_step, Some(NextStep::Score));

        score_log(&store, &llm, "u1", DATE).await.unwrap();
        let status = workflow_state(&store, &store, "u1", DATE).await.unwrap();
        assert_eq!(status.stage, WorkflowStage::Scored);
        assert_eq!(status.score, Some(70));

        generate_feed_message(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap();
        let status = workflow_state(&store, &store, "u1", DATE).await.unwrap();
        assert_eq!(status.stage, WorkflowStage::Reflected);
        assert_eq!(status.next_step, None);
        assert_eq!(status.reflections, 1);
    }

    #[tokio::test]
    async fn test_resubmission_after_reflection_needs_new_reflection() {
        let store = MemoryStore::new();
        seed(&store).await;
        let llm = ScriptedGenerator::new(vec![Ok("70".to_string()), Ok("Nice work.".to_string())]);
        complete_workflow(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap();

        let reflected_at = FeedStore::list_by_user(&store, "u1").await.unwrap()[0].created_at;
        store
            .upsert(LogWrite {
                user_id: "u1",
                date: parse_log_date(DATE).unwrap(),
                answers: &json!({"mood": 2}),
                score: None,
                now: reflected_at + Duration::seconds(1),
            })
            .await
            .unwrap();

        let status = workflow_state(&store, &store, "u1", DATE).await.unwrap();
        assert_eq!(status.stage, WorkflowStage::Scored);
        assert_eq!(status.next_step, Some(NextStep::Reflect));
    }

    #[tokio::test]
    async fn test_complete_runs_each_missing_step_once() {
        let store = MemoryStore::new();
        seed(&store).await;
        let llm = ScriptedGenerator::new(vec![Ok("88".to_string()), Ok("Great day.".to_string())]);

        let status = complete_workflow(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap();

        assert_eq!(status.stage, WorkflowStage::Reflected);
        assert_eq!(status.score, Some(88));
        assert_eq!(llm.requests().len(), 2);

        // Already complete: no further model calls.
        let status = complete_workflow(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap();
        assert_eq!(status.stage, WorkflowStage::Reflected);
        assert_eq!(llm.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_complete_resumes_after_failed_reflection() {
        let store = MemoryStore::new();
        seed(&store).await;
        let llm = ScriptedGenerator::new(vec![
            Ok("40".to_string()),
            Err(LlmError::Api {
                status: 503,
                body: "overloaded".to_string(),
            }),
            Ok("Tomorrow is new.".to_string()),
        ]);

        let err = complete_workflow(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 503, .. }));
        let status = workflow_state(&store, &store, "u1", DATE).await.unwrap();
        assert_eq!(status.stage, WorkflowStage::Scored);

        let status = complete_workflow(&store, &store, &llm, "u1", DATE)
            .await
            .unwrap();
        assert_eq!(status.stage, WorkflowStage::Reflected);
        // Score was not recomputed on resume.
        assert_eq!(llm.requests().len(), 3);
        assert_eq!(status.score, Some(40));
    }
}
