use crate::{BirthRecord, RecordStore, Result as CoreErrorResult, Username};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use tokio::sync::RwLock;

/// Process-local store, used in tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<Username, NaiveDate>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn upsert(&self, record: &BirthRecord) -> CoreErrorResult<()> {
        let previous = self
            .records
            .write()
            .await
            .insert(record.username.clone(), record.date_of_birth);

        debug!(
            "Upserted {} (replaced: {})",
            record.username,
            previous.is_some()
        );

        Ok(())
    }

    async fn lookup(&self, username: &Username) -> CoreErrorResult<Option<BirthRecord>> {
        let records = self.records.read().await;

        Ok(records
            .get(username)
            .map(|dob| BirthRecord::new(username.clone(), *dob)))
    }
}
