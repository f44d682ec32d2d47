use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::config::LeetCodeConfig;
use crate::error::FetchError;
use crate::models::{
    GraphQlRequest, GraphQlResponse, MatchedUser, MatchedUserData, UsernameVariables,
};

const USER_PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        username
        profile {
          realName
          ranking
        }
        submitStats {
          acSubmissionNum {
            difficulty
            count
          }
        }
      }
    }
"#;

/// Source of public profile records.
///
/// `None` covers both "no such user" and "lookup failed"; callers cannot
/// tell the two apart.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_stats(&self, username: &str) -> Option<MatchedUser>;
}

#[derive(Clone)]
pub struct LeetCodeClient {
    client: reqwest::Client,
    graphql_url: String,
    user_agent: String,
}

impl LeetCodeClient {
    pub fn new(config: &LeetCodeConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &LeetCodeConfig) -> Self {
        Self {
            client,
            graphql_url: config.graphql_url.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub async fn query_matched_user(
        &self,
        username: &str,
    ) -> Result<Option<MatchedUser>, FetchError> {
        debug!("Querying LeetCode profile for {}", username);

        let request = GraphQlRequest {
            query: USER_PROFILE_QUERY,
            variables: UsernameVariables { username },
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .header("User-Agent", &self.user_agent)
            .header("Referer", "https://leetcode.com")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GraphQlResponse<MatchedUserData> = response.json().await?;
        for err in &reply.errors {
            warn!("LeetCode GraphQL error for {}: {}", username, err.message);
        }

        let data = reply.data.ok_or(FetchError::MissingData)?;
        Ok(data.matched_user)
    }
}

#[async_trait]
impl ProfileSource for LeetCodeClient {
    async fn fetch_stats(&self, username: &str) -> Option<MatchedUser> {
        match self.query_matched_user(username).await {
            Ok(user) => user,
            Err(e) => {
                error!("Error fetching LeetCode data for {}: {}", username, e);
                None
            }
        }
    }
}
