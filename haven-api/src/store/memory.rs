//! In-memory check-in store for the disabled-persistence mode
//!
//! Data does not survive a restart; that is accepted behavior for this
//! mode, not a defect. The map needs an explicit lock because handlers run
//! on a preemptively scheduled multi-threaded runtime.

use haven_common::types::CheckinRecord;
use haven_common::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Per-user in-process check-in lists, newest first
#[derive(Default)]
pub struct MemoryCheckinStore {
    entries: RwLock<HashMap<String, Vec<CheckinRecord>>>,
}

impl MemoryCheckinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend to the user's list so reads slice newest-first
    pub async fn save(&self, record: &CheckinRecord) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries
            .entry(record.user_id.clone())
            .or_default()
            .insert(0, record.clone());
        Ok(())
    }

    pub async fn list(&self, user_id: &str, limit: u32) -> Result<Vec<CheckinRecord>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(user_id)
            .map(|list| list.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use haven_common::types::{Mood, SafetyFlag};

    fn record(user: &str, text: &str) -> CheckinRecord {
        CheckinRecord {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user.to_string(),
            text: text.to_string(),
            mood: Mood::Neutral,
            message: "ok".to_string(),
            playlist: Vec::new(),
            safety_flag: SafetyFlag::Safe,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn newest_first_order() {
        let store = MemoryCheckinStore::new();
        for i in 0..4 {
            store.save(&record("u", &format!("entry {}", i))).await.unwrap();
        }

        let listed = store.list("u", 2).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "entry 3");
        assert_eq!(listed[1].text, "entry 2");
    }

    #[tokio::test]
    async fn unknown_user_is_empty() {
        let store = MemoryCheckinStore::new();
        assert!(store.list("nobody", 10).await.unwrap().is_empty());
    }
}
