use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{NormalizedStats, StatsResponse};
use crate::storage::persist_user_stats;
use crate::AppState;

/// Raw query pairs; repeated keys are allowed and the first value wins.
pub type StatsQuery = Vec<(String, String)>;

fn first_non_empty(params: &[(String, String)], key: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}

/// `username` and `id`, or `None` if either is absent or empty.
fn required_params(params: &[(String, String)]) -> Option<(String, String)> {
    let username = first_non_empty(params, "username")?;
    let id = first_non_empty(params, "id")?;
    Some((username, id))
}

pub async fn leetcode_stats_handler(
    State(app_state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let (username, id) = required_params(&params).ok_or(ApiError::MissingParams)?;

    let matched = match app_state.profiles.fetch_stats(&username).await {
        Some(user) => user,
        None => {
            warn!("No LeetCode profile for {}", username);
            return Err(ApiError::UserNotFound);
        }
    };

    let stats = NormalizedStats::from(matched);
    persist_user_stats(app_state.store.as_ref(), &id, &stats).await;

    info!("Served LeetCode stats for {} (id {})", username, id);
    Ok(Json(StatsResponse::success(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> StatsQuery {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_value_of_repeated_key_wins() {
        let params = pairs(&[("username", "alice"), ("id", "42"), ("id", "43")]);
        assert_eq!(required_params(&params), Some(("alice".into(), "42".into())));
    }

    #[test]
    fn empty_first_value_counts_as_missing() {
        let params = pairs(&[("username", ""), ("username", "alice"), ("id", "42")]);
        assert_eq!(required_params(&params), None);
    }
}
