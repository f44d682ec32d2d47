pub mod supabase;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, error};

use crate::db;
use crate::models::{NormalizedStats, UserInfoRecord};

pub use supabase::SupabaseStore;

/// Keyed store for per-user summaries.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Inserts the record, or overwrites the row that already carries its id.
    async fn upsert_user_info(&self, record: &UserInfoRecord) -> Result<()>;

    async fn health_check(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StatsStore for SqliteStore {
    async fn upsert_user_info(&self, record: &UserInfoRecord) -> Result<()> {
        db::upsert_user_info(&self.pool, record).await
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

/// Stores the summary derived from `stats` under `id`.
///
/// Failures are logged and swallowed; the caller never sees them.
pub async fn persist_user_stats(store: &dyn StatsStore, id: &str, stats: &NormalizedStats) {
    let record = UserInfoRecord::from_stats(id, stats);

    match store.upsert_user_info(&record).await {
        Ok(()) => debug!("Stored stats for id {} ({})", id, stats.username),
        Err(e) => error!("Error storing stats for id {}: {}", id, e),
    }
}
