use std::collections::HashSet;

use async_trait::async_trait;
use mobc_redis::redis;

use crate::repository::memory::MemoryStore;
use crate::repository::store::{Collection, DocumentStore, Result, StoreError};

/// Memory store that rejects writes to the listed team ids.
pub struct FlakyStore {
    pub inner: MemoryStore,
    failing: HashSet<String>,
}

impl FlakyStore {
    pub fn failing_teams<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FlakyStore {
            inner: MemoryStore::new(),
            failing: ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn list(&self, collection: Collection) -> Result<Vec<String>> {
        self.inner.list(collection).await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<String>> {
        self.inner.get(collection, id).await
    }

    async fn put(&self, collection: Collection, id: &str, body: String) -> Result<()> {
        if collection == Collection::Teams && self.failing.contains(id) {
            return Err(StoreError::Command(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection reset",
            ))));
        }
        self.inner.put(collection, id, body).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        self.inner.delete(collection, id).await
    }

    fn backend_type(&self) -> &'static str {
        "flaky"
    }
}
