use std::collections::BTreeMap;

use serde::Serialize;

use crate::daily_logs::validation::{parse_year, validate_user_id, DATE_FORMAT};
use crate::errors::AppError;
use crate::models::log::{Log, ScoreBand};
use crate::store::LogStore;

/// One calendar cell. Unscored days carry neither score nor band.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapDay {
    pub score: Option<i32>,
    pub band: Option<ScoreBand>,
}

/// Date → cell lookup for one year, keyed by canonical `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub year: i32,
    pub days: BTreeMap<String, HeatmapDay>,
}

/// Every log the user has for `year`, in no particular order.
///
/// Fetches the user's full history and keeps dates whose string form starts
/// with the year; no range index is assumed.
pub async fn list_logs_for_year(
    store: &dyn LogStore,
    user_id: &str,
    year: &str,
) -> Result<Vec<Log>, AppError> {
    validate_user_id(user_id)?;
    parse_year(year)?;
    let prefix = format!("{year}-");

    let logs = store.list_by_user(user_id).await?;
    Ok(logs
        .into_iter()
        .filter(|log| log.date.format(DATE_FORMAT).to_string().starts_with(&prefix))
        .collect())
}

pub fn build_heatmap(year: i32, logs: &[Log]) -> Heatmap {
    let days = logs
        .iter()
        .map(|log| {
            (
                log.date.format(DATE_FORMAT).to_string(),
                HeatmapDay {
                    score: log.score,
                    band: log.score.map(ScoreBand::from_score),
                },
            )
        })
        .collect();
    Heatmap { year, days }
}
