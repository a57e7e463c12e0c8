//! Check-in persistence
//!
//! Two interchangeable backends behind one store type: SQLite for durable
//! persistence, an in-process map for the disabled-persistence mode. Both
//! read back newest-first.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryCheckinStore;
pub use sqlite::SqliteCheckinStore;

use haven_common::types::CheckinRecord;
use haven_common::Result;

/// Check-in store, dispatching to the configured backend
pub enum CheckinStore {
    Sqlite(SqliteCheckinStore),
    Memory(MemoryCheckinStore),
}

impl CheckinStore {
    /// Append a check-in to the user's history
    pub async fn save(&self, record: &CheckinRecord) -> Result<()> {
        match self {
            CheckinStore::Sqlite(store) => store.save(record).await,
            CheckinStore::Memory(store) => store.save(record).await,
        }
    }

    /// List the user's check-ins, newest first, bounded by `limit`
    pub async fn list(&self, user_id: &str, limit: u32) -> Result<Vec<CheckinRecord>> {
        match self {
            CheckinStore::Sqlite(store) => store.list(user_id, limit).await,
            CheckinStore::Memory(store) => store.list(user_id, limit).await,
        }
    }
}
