//! Database initialization for the check-in store

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize the SQLite database, creating the file and schema if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL keeps reads cheap while check-ins are being written
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_checkins_table(&pool).await?;

    Ok(pool)
}

/// In-memory pool for tests and ephemeral runs
pub async fn init_memory_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_checkins_table(&pool).await?;
    Ok(pool)
}

async fn create_checkins_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS checkins (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            text TEXT NOT NULL,
            mood TEXT NOT NULL,
            message TEXT NOT NULL,
            playlist TEXT NOT NULL,
            safety_flag TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_checkins_user_created
         ON checkins (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
