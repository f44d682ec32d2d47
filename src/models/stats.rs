use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::leetcode::{MatchedUser, Scalar, SubmissionCount};

const UNKNOWN_NAME: &str = "Unknown";
const ZERO: &str = "0";

/// Profile statistics reshaped for the UI, every value coerced to a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedStats {
    pub username: String,
    pub profile: NormalizedProfile,
    pub submit_stats: NormalizedSubmitStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub real_name: String,
    pub ranking: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSubmitStats {
    pub ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: String,
}

/// Row of the `user_info` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserInfoRecord {
    pub id: String,
    pub ranking: String,
    pub solved_easy: String,
    pub solved_medium: String,
    pub solved_hard: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub message: &'static str,
    pub stats: NormalizedStats,
}

impl StatsResponse {
    pub fn success(stats: NormalizedStats) -> Self {
        Self {
            message: "Success",
            stats,
        }
    }
}

/// Coerces an optional scalar to a string, treating absent and empty alike.
fn scalar_or(value: Option<&Scalar>, fallback: &str) -> String {
    match value.map(Scalar::to_string) {
        Some(s) if !s.is_empty() => s,
        _ => fallback.to_string(),
    }
}

impl From<SubmissionCount> for DifficultyCount {
    fn from(entry: SubmissionCount) -> Self {
        Self {
            count: scalar_or(entry.count.as_ref(), ZERO),
            difficulty: scalar_or(entry.difficulty.as_ref(), ""),
        }
    }
}

impl From<MatchedUser> for NormalizedStats {
    fn from(user: MatchedUser) -> Self {
        let profile = user.profile.unwrap_or_default();
        let real_name = scalar_or(profile.real_name.as_ref(), UNKNOWN_NAME);

        let ac_submission_num = user
            .submit_stats
            .and_then(|stats| stats.ac_submission_num)
            .unwrap_or_default()
            .into_iter()
            .map(DifficultyCount::from)
            .collect();

        Self {
            username: scalar_or(user.username.as_ref(), ""),
            profile: NormalizedProfile {
                real_name,
                ranking: scalar_or(profile.ranking.as_ref(), ZERO),
            },
            submit_stats: NormalizedSubmitStats { ac_submission_num },
        }
    }
}

impl NormalizedStats {
    /// Count for the first entry whose difficulty matches exactly, `"0"` when
    /// there is none.
    pub fn solved(&self, difficulty: &str) -> String {
        self.submit_stats
            .ac_submission_num
            .iter()
            .find(|entry| entry.difficulty == difficulty)
            .map(|entry| entry.count.as_str())
            .filter(|count| !count.is_empty())
            .unwrap_or(ZERO)
            .to_string()
    }
}

impl UserInfoRecord {
    pub fn from_stats(id: impl Into<String>, stats: &NormalizedStats) -> Self {
        Self {
            id: id.into(),
            ranking: stats.profile.ranking.clone(),
            solved_easy: stats.solved("Easy"),
            solved_medium: stats.solved("Medium"),
            solved_hard: stats.solved("Hard"),
        }
    }
}
