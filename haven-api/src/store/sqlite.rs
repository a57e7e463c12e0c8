//! SQLite-backed check-in store

use chrono::{DateTime, Utc};
use haven_common::types::{CheckinRecord, Mood, SafetyFlag};
use haven_common::{Error, Result};
use sqlx::{Row, SqlitePool};

/// Durable check-in store on the shared SQLite pool
pub struct SqliteCheckinStore {
    pool: SqlitePool,
}

impl SqliteCheckinStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append-only insert; records are never updated
    pub async fn save(&self, record: &CheckinRecord) -> Result<()> {
        let playlist_json = serde_json::to_string(&record.playlist)
            .map_err(|e| Error::Internal(format!("Failed to serialize playlist: {}", e)))?;

        sqlx::query(
            "INSERT INTO checkins (id, user_id, text, mood, message, playlist, safety_flag, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.text)
        .bind(record.mood.as_str())
        .bind(&record.message)
        .bind(playlist_json)
        .bind(match record.safety_flag {
            SafetyFlag::Flag => "flag",
            SafetyFlag::Safe => "safe",
        })
        .bind(record.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest-first read, bounded by `limit`. The rowid tiebreak keeps
    /// same-timestamp inserts in reverse insertion order.
    pub async fn list(&self, user_id: &str, limit: u32) -> Result<Vec<CheckinRecord>> {
        let rows = sqlx::query(
            "SELECT id, user_id, text, mood, message, playlist, safety_flag, created_at
             FROM checkins
             WHERE user_id = ?
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?",
        )
        .bind(user_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let playlist_json: String = row.get("playlist");
                let playlist = serde_json::from_str(&playlist_json)
                    .map_err(|e| Error::Internal(format!("Corrupt playlist column: {}", e)))?;
                let created_at: String = row.get("created_at");
                let timestamp = DateTime::parse_from_rfc3339(&created_at)
                    .map_err(|e| Error::Internal(format!("Corrupt created_at column: {}", e)))?
                    .with_timezone(&Utc);
                let mood: String = row.get("mood");
                let safety_flag: String = row.get("safety_flag");

                Ok(CheckinRecord {
                    id: row.get("id"),
                    user_id: row.get("user_id"),
                    text: row.get("text"),
                    mood: Mood::from_label(&mood),
                    message: row.get("message"),
                    playlist,
                    safety_flag: SafetyFlag::from_label(&safety_flag),
                    timestamp,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use haven_common::types::PlaylistEntry;

    fn record(user: &str, text: &str, at: DateTime<Utc>) -> CheckinRecord {
        CheckinRecord {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user.to_string(),
            text: text.to_string(),
            mood: Mood::Happy,
            message: "Nice!".to_string(),
            playlist: vec![PlaylistEntry::from_url("https://example.com/p")],
            safety_flag: SafetyFlag::Safe,
            timestamp: at,
        }
    }

    async fn test_store() -> SqliteCheckinStore {
        let pool = haven_common::db::init_memory_database().await.unwrap();
        SqliteCheckinStore::new(pool)
    }

    #[tokio::test]
    async fn save_then_list_round_trips() {
        let store = test_store().await;
        let rec = record("u1", "feeling good", Utc::now());
        store.save(&rec).await.unwrap();

        let listed = store.list("u1", 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, rec.id);
        assert_eq!(listed[0].text, "feeling good");
        assert_eq!(listed[0].playlist, rec.playlist);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_bounded() {
        let store = test_store().await;
        let base = Utc::now();
        for i in 0..5 {
            let rec = record("u1", &format!("entry {}", i), base + Duration::seconds(i));
            store.save(&rec).await.unwrap();
        }

        let listed = store.list("u1", 3).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].text, "entry 4");
        assert_eq!(listed[1].text, "entry 3");
        assert_eq!(listed[2].text, "entry 2");
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = test_store().await;
        store.save(&record("a", "mine", Utc::now())).await.unwrap();
        store.save(&record("b", "theirs", Utc::now())).await.unwrap();

        let listed = store.list("a", 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].text, "mine");
    }
}
