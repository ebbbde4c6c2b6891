//! In-process session store that drops expired records.
//!
//! Records live in a map keyed by session id. Expired records are never
//! returned by `load` and are removed by [`ExpiredDeletion::delete_expired`],
//! which the server runs on a fixed period.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_sessions::cookie::time::OffsetDateTime;
use tower_sessions::session::{Id, Record};
use tower_sessions::session_store::{self, ExpiredDeletion, SessionStore};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ExpiringMemoryStore(Arc<Mutex<HashMap<Id, Record>>>);

impl ExpiringMemoryStore {
    /// Number of records currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.0.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn is_active(record: &Record) -> bool {
    record.expiry_date > OffsetDateTime::now_utc()
}

#[async_trait]
impl SessionStore for ExpiringMemoryStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut records = self.0.lock().await;
        while records.contains_key(&record.id) {
            record.id = Id::default();
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.lock().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let mut records = self.0.lock().await;
        match records.get(session_id) {
            Some(record) if is_active(record) => Ok(Some(record.clone())),
            Some(_) => {
                records.remove(session_id);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.0.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for ExpiringMemoryStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let mut records = self.0.lock().await;
        let before = records.len();
        records.retain(|_, record| is_active(record));
        let removed = before - records.len();
        if removed > 0 {
            debug!(removed, remaining = records.len(), "Evicted expired sessions");
        }
        Ok(())
    }
}
