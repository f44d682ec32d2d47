use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use super::StatsStore;
use crate::config::SupabaseConfig;
use crate::models::UserInfoRecord;

/// Writes summaries through Supabase's PostgREST interface.
pub struct SupabaseStore {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        info!("Using Supabase store at {} (table {})", config.url, config.table);
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), self.config.table)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }
}

#[async_trait]
impl StatsStore for SupabaseStore {
    async fn upsert_user_info(&self, record: &UserInfoRecord) -> Result<()> {
        let url = self.table_url();
        debug!("Upserting user_info {} into Supabase", record.id);

        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[record])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to reach Supabase: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Supabase upsert failed with status {}: {}",
                status.as_u16(),
                body
            ));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to reach Supabase: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Supabase health check failed with status {}",
                status.as_u16()
            ));
        }

        Ok(())
    }
}
