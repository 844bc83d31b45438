use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;

use crate::dao::{
    match_store::{MatchKey, MatchStore},
    models::MatchRecord,
    storage::StorageResult,
};

/// Process-local store backed by a concurrent map. Cloning shares the same records.
#[derive(Clone, Default)]
pub struct InMemoryMatchStore {
    records: Arc<DashMap<MatchKey, MatchRecord>>,
}

impl InMemoryMatchStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn find(&self, key: &MatchKey) -> BoxFuture<'static, StorageResult<Option<MatchRecord>>> {
        let store = self.clone();
        let key = key.clone();
        Box::pin(async move {
            let found = store.records.get(&key).map(|entry| entry.value().clone());
            Ok(found)
        })
    }

    fn find_all(&self) -> BoxFuture<'static, StorageResult<Vec<MatchRecord>>> {
        let store = self.clone();
        Box::pin(async move {
            let all = store
                .records
                .iter()
                .map(|entry| entry.value().clone())
                .collect::<Vec<_>>();
            Ok(all)
        })
    }

    fn save(&self, key: MatchKey, record: MatchRecord) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store.records.insert(key, record);
            Ok(())
        })
    }

    fn remove(&self, key: &MatchKey) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        let key = key.clone();
        Box::pin(async move {
            store.records.remove(&key);
            Ok(())
        })
    }
}
