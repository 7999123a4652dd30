//! Day scoring. Asks the text generator for a 0-100 wellbeing score and
//! writes it back onto the log.
//!
//! The model's reply is parsed leniently: a leading integer is taken, and
//! anything unparseable or out of range becomes `DEFAULT_SCORE` so that
//! scoring always produces a score.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::daily_logs::validation::{parse_log_date, validate_user_id};
use crate::errors::AppError;
use crate::insights::prompts::SCORE_SYSTEM;
use crate::llm_client::prompts::daily_log_user_message;
use crate::llm_client::{CompletionRequest, TextGenerator};
use crate::models::log::ScoreBand;
use crate::store::LogStore;

pub const DEFAULT_SCORE: i32 = 50;
const SCORE_TEMPERATURE: f32 = 0.0;
/// Enough for three digits.
const SCORE_MAX_TOKENS: u32 = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreOutcome {
    pub score: i32,
    pub band: ScoreBand,
}

pub async fn score_log(
    store: &dyn LogStore,
    llm: &dyn TextGenerator,
    user_id: &str,
    date: &str,
) -> Result<ScoreOutcome, AppError> {
    validate_user_id(user_id)?;
    let day = parse_log_date(date)?;

    let log = store
        .find_by_user_and_date(user_id, day)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No daily log found for user {user_id} on {date}"))
        })?;

    let request = CompletionRequest::new(
        SCORE_SYSTEM,
        daily_log_user_message(&log.answers),
        SCORE_TEMPERATURE,
        SCORE_MAX_TOKENS,
    );
    let reply = llm.complete(&request).await?;

    let score = parse_score(&reply).unwrap_or_else(|| {
        warn!("Unparseable score reply {reply:?} for log {}; using {DEFAULT_SCORE}", log.id);
        DEFAULT_SCORE
    });

    store
        .patch_score(log.id, score, Utc::now())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Daily log {} no longer exists", log.id)))?;

    info!("Scored daily log {} for user {user_id} on {date}: {score}", log.id);
    Ok(ScoreOutcome {
        score,
        band: ScoreBand::from_score(score),
    })
}

/// Reads a leading integer the way `parseInt` would: surrounding whitespace
/// is ignored, an optional sign is accepted, and parsing stops at the first
/// non-digit. Returns `None` when there are no digits or the value is
/// outside 0–100.
pub fn parse_score(reply: &str) -> Option<i32> {
    let trimmed = reply.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // More than three digits is out of range whatever the value.
    if digits.trim_start_matches('0').len() > 3 {
        return None;
    }
    let value: i32 = digits.parse().ok()?;
    let value = if negative { -value } else { value };
    (0..=100).contains(&value).then_some(value)
}
