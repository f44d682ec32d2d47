use serde::{Deserialize, Serialize};
use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub leetcode: LeetCodeConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeetCodeConfig {
    pub graphql_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database_url: String,
    pub supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Supabase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            leetcode: LeetCodeConfig {
                graphql_url: "https://leetcode.com/graphql".to_string(),
                user_agent: format!("leetstats/{}", env!("CARGO_PKG_VERSION")),
            },
            store: StoreConfig {
                backend: StoreBackend::Sqlite,
                database_url: "sqlite:leetstats.db".to_string(),
                supabase: None,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source so tests
    /// don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server configuration
        if let Some(host) = lookup("LEETSTATS_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("LEETSTATS_PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("invalid LEETSTATS_PORT: {}", port))?;
        }

        // LeetCode configuration
        if let Some(url) = lookup("LEETCODE_GRAPHQL_URL") {
            config.leetcode.graphql_url = url;
        }
        if let Some(user_agent) = lookup("LEETCODE_USER_AGENT") {
            config.leetcode.user_agent = user_agent;
        }

        // Store configuration
        if let Some(backend) = lookup("STORE_BACKEND") {
            config.store.backend = match backend.to_lowercase().as_str() {
                "sqlite" => StoreBackend::Sqlite,
                "supabase" => StoreBackend::Supabase,
                other => anyhow::bail!("unknown STORE_BACKEND: {}", other),
            };
        }

        if let Some(url) = lookup("DATABASE_URL") {
            config.store.database_url = url;
        }

        if config.store.backend == StoreBackend::Supabase {
            config.store.supabase = Some(SupabaseConfig {
                url: lookup("SUPABASE_URL")
                    .context("SUPABASE_URL is required for the supabase backend")?,
                api_key: lookup("SUPABASE_KEY")
                    .context("SUPABASE_KEY is required for the supabase backend")?,
                table: lookup("SUPABASE_TABLE").unwrap_or_else(|| "user_info".to_string()),
            });
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
