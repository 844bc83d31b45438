/// Time sources for match start instants.
pub mod clock;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use time::OffsetDateTime;
use tokio::sync::{Mutex, MutexGuard};

use crate::{
    dao::match_store::{InMemoryMatchStore, MatchStore},
    services::team_validator::TeamValidator,
};

use self::clock::{Clock, SystemClock};

/// Handle shared by every caller of one scoreboard.
pub type SharedState = Arc<ScoreboardState>;

/// One scoreboard: its match store, team validator and clock.
///
/// Every operation runs behind a single gate so the check-then-write sequences of the
/// scoreboard service never interleave.
pub struct ScoreboardState {
    store: Arc<dyn MatchStore>,
    validator: Arc<dyn TeamValidator>,
    clock: Arc<dyn Clock>,
    next_sequence: AtomicU64,
    gate: Mutex<()>,
}

impl ScoreboardState {
    /// Scoreboard over a caller supplied store, timed by the system clock.
    pub fn new(store: Arc<dyn MatchStore>, validator: Arc<dyn TeamValidator>) -> SharedState {
        Self::with_clock(store, validator, Arc::new(SystemClock))
    }

    /// Scoreboard keeping its matches in process memory.
    pub fn in_memory(validator: Arc<dyn TeamValidator>) -> SharedState {
        Self::new(Arc::new(InMemoryMatchStore::new()), validator)
    }

    /// Scoreboard with an explicit time source.
    pub fn with_clock(
        store: Arc<dyn MatchStore>,
        validator: Arc<dyn TeamValidator>,
        clock: Arc<dyn Clock>,
    ) -> SharedState {
        Arc::new(Self {
            store,
            validator,
            clock,
            next_sequence: AtomicU64::new(0),
            gate: Mutex::new(()),
        })
    }

    /// Backing match store.
    pub fn store(&self) -> &dyn MatchStore {
        self.store.as_ref()
    }

    /// Team validator in use.
    pub fn validator(&self) -> &dyn TeamValidator {
        self.validator.as_ref()
    }

    /// Current instant according to the configured clock.
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Hand out the next start-order number.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Serialize an operation against every other one on this scoreboard.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}
