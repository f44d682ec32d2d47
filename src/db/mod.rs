use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use anyhow::Result;
use std::str::FromStr;
use std::time::Duration;

use crate::models::UserInfoRecord;

pub async fn initialize_database(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Every connection to an in-memory database sees its own empty database,
    // so those pools are pinned to a single connection that never expires.
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(10)
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_info (
            id TEXT PRIMARY KEY,
            ranking TEXT NOT NULL,
            solved_easy TEXT NOT NULL,
            solved_medium TEXT NOT NULL,
            solved_hard TEXT NOT NULL
        );
        "#
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

pub async fn upsert_user_info(pool: &SqlitePool, record: &UserInfoRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO user_info (id, ranking, solved_easy, solved_medium, solved_hard) VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
            ranking = excluded.ranking,
            solved_easy = excluded.solved_easy,
            solved_medium = excluded.solved_medium,
            solved_hard = excluded.solved_hard"
    )
    .bind(&record.id)
    .bind(&record.ranking)
    .bind(&record.solved_easy)
    .bind(&record.solved_medium)
    .bind(&record.solved_hard)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_user_info(pool: &SqlitePool, id: &str) -> Result<Option<UserInfoRecord>> {
    let record = sqlx::query_as::<_, UserInfoRecord>(
        "SELECT id, ranking, solved_easy, solved_medium, solved_hard FROM user_info WHERE id = ?1"
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn count_user_info(pool: &SqlitePool) -> Result<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS total FROM user_info")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("total"))
}
