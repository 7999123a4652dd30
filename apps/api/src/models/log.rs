use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One user's questionnaire submission for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Log {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub answers: Value,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Color category a day score falls into on the heatmap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    DeepRed,
    Red,
    Orange,
    Yellow,
    Green,
    DeepGreen,
}

impl ScoreBand {
    /// Maps a 0–100 score onto its band. Out-of-range values clamp to the
    /// nearest band.
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=16 => ScoreBand::DeepRed,
            17..=33 => ScoreBand::Red,
            34..=50 => ScoreBand::Orange,
            51..=67 => ScoreBand::Yellow,
            68..=84 => ScoreBand::Green,
            _ => ScoreBand::DeepGreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, ScoreBand::DeepRed),
            (16, ScoreBand::DeepRed),
            (17, ScoreBand::Red),
            (33, ScoreBand::Red),
            (34, ScoreBand::Orange),
            (50, ScoreBand::Orange),
            (51, ScoreBand::Yellow),
            (67, ScoreBand::Yellow),
            (68, ScoreBand::Green),
            (84, ScoreBand::Green),
            (85, ScoreBand::DeepGreen),
            (100, ScoreBand::DeepGreen),
        ];
        for (score, band) in cases {
            assert_eq!(ScoreBand::from_score(score), band, "score {score}");
        }
    }

    #[test]
    fn test_band_serializes_snake_case() {
        let json = serde_json::to_string(&ScoreBand::DeepGreen).unwrap();
        assert_eq!(json, "\"deep_green\"");
    }
}
