use crate::{BirthRecord, Result as CoreErrorResult, Username};

use async_trait::async_trait;

/// Keyed storage for birth records.
///
/// Implementations must make `upsert` atomic per username: a concurrent
/// `lookup` sees either the previous record or the new one, never a mix.
/// Operations on different usernames must not wait on each other beyond a
/// bounded critical section.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert the record, or fully replace the existing one for its username
    async fn upsert(&self, record: &BirthRecord) -> CoreErrorResult<()>;

    /// Current record for `username`, `None` if it was never written
    async fn lookup(&self, username: &Username) -> CoreErrorResult<Option<BirthRecord>>;

    /// Cheap liveness probe for health checks
    async fn ping(&self) -> CoreErrorResult<()> {
        Ok(())
    }
}
