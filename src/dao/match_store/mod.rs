mod memory;

pub use memory::InMemoryMatchStore;

use std::fmt;

use futures::future::BoxFuture;

use crate::dao::{models::MatchRecord, storage::StorageResult};

/// Joins the normalized home and away names inside a [`MatchKey`].
pub const KEY_SEPARATOR: &str = "_";

/// Composite identity of a match: normalized home name, separator, normalized away name.
///
/// Home/away order is significant. Stores treat the key as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey(String);

impl MatchKey {
    /// Derive the key for an already normalized pair.
    pub fn new(home_team: &str, away_team: &str) -> Self {
        Self(format!("{home_team}{KEY_SEPARATOR}{away_team}"))
    }

    /// Key a stored record must be saved under.
    pub fn of(record: &MatchRecord) -> Self {
        Self::new(&record.home_team, &record.away_team)
    }

    /// Raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Abstraction over the persistence layer holding active match records.
///
/// `find_all` makes no ordering promise; ordering belongs to the scoreboard.
pub trait MatchStore: Send + Sync {
    /// Record stored under `key`, if any.
    fn find(&self, key: &MatchKey) -> BoxFuture<'static, StorageResult<Option<MatchRecord>>>;
    /// Every stored record, in no particular order.
    fn find_all(&self) -> BoxFuture<'static, StorageResult<Vec<MatchRecord>>>;
    /// Insert or replace.
    fn save(&self, key: MatchKey, record: MatchRecord) -> BoxFuture<'static, StorageResult<()>>;
    /// No-op when the key is absent.
    fn remove(&self, key: &MatchKey) -> BoxFuture<'static, StorageResult<()>>;
}
