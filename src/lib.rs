pub mod config;
pub mod db;
pub mod error;
pub mod leetcode;
pub mod models;
pub mod storage;
pub mod web;

use std::sync::Arc;

use anyhow::Result;

use crate::config::{AppConfig, StoreBackend};
use crate::leetcode::{LeetCodeClient, ProfileSource};
use crate::storage::{SqliteStore, StatsStore, SupabaseStore};

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileSource>,
    pub store: Arc<dyn StatsStore>,
}

impl AppState {
    pub fn new(profiles: Arc<dyn ProfileSource>, store: Arc<dyn StatsStore>) -> Self {
        Self { profiles, store }
    }

    /// Wires the LeetCode client and the configured store backend.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let profiles: Arc<dyn ProfileSource> = Arc::new(LeetCodeClient::new(&config.leetcode));

        let store: Arc<dyn StatsStore> = match (&config.store.backend, &config.store.supabase) {
            (StoreBackend::Supabase, Some(supabase)) => {
                Arc::new(SupabaseStore::new(supabase.clone()))
            }
            (StoreBackend::Supabase, None) => {
                anyhow::bail!("supabase backend selected without Supabase configuration")
            }
            (StoreBackend::Sqlite, _) => {
                let pool = db::initialize_database(&config.store.database_url).await?;
                Arc::new(SqliteStore::new(pool))
            }
        };

        Ok(Self::new(profiles, store))
    }
}
