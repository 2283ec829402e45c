//! TTL cache storing raw byte payloads
//!
//! Provides a `Cache` handle backed by a reader/writer-locked map. `get` takes
//! the shared lock, `add` and the reaper's sweep take the exclusive lock.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::debug;

use super::reaper;

/// A single cached payload
///
/// Entries are never mutated; re-adding a key replaces the whole entry.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// When the entry was inserted
    pub(crate) created_at: Instant,
    /// The raw, undecoded response body
    pub(crate) value: Vec<u8>,
}

/// State shared between every `Cache` handle and the reaper task
#[derive(Debug)]
pub(crate) struct Shared {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Shared {
    #[cfg(test)]
    pub(crate) fn for_tests(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        // Entries are inserted and removed whole, so a poisoned map is still consistent.
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Removes every entry older than the TTL as of `now`, returning how many went
    pub(crate) fn sweep(&self, now: Instant) -> usize {
        let mut entries = self.write();
        sweep_entries(&mut entries, now, self.ttl)
    }
}

/// Drops entries whose age is strictly greater than `ttl`.
///
/// An entry whose age equals the TTL is kept until the next sweep.
pub(crate) fn sweep_entries(
    entries: &mut HashMap<String, CacheEntry>,
    now: Instant,
    ttl: Duration,
) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| now.saturating_duration_since(entry.created_at) <= ttl);
    before - entries.len()
}

/// Owns the reaper's stop signal; dropping the last one stops the reaper.
#[derive(Debug)]
struct ReaperGuard {
    shutdown_tx: watch::Sender<bool>,
}

/// Thread-safe cache of response bodies with background expiry
///
/// Cloning a `Cache` yields another handle to the same entries. The reaper
/// runs until `stop` is called or every handle has been dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    shared: Arc<Shared>,
    reaper: Arc<ReaperGuard>,
}

impl Cache {
    /// Creates an empty cache and starts its reaper
    ///
    /// The first sweep happens one `ttl` after construction, then once every
    /// `ttl` after that. Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let shared = Arc::new(Shared {
            entries: RwLock::new(HashMap::new()),
            ttl,
        });
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        reaper::spawn(Arc::clone(&shared), shutdown_rx);

        Self {
            shared,
            reaper: Arc::new(ReaperGuard { shutdown_tx }),
        }
    }

    /// Inserts or replaces the payload stored under `key`
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let entry = CacheEntry {
            created_at: Instant::now(),
            value: value.into(),
        };

        debug!(key = %key, bytes = entry.value.len(), "cache add");
        self.shared.write().insert(key, entry);
    }

    /// Returns a copy of the payload stored under `key`, if present
    ///
    /// Expiry is only enforced by the reaper, so an entry past its TTL is still
    /// returned until the next sweep removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.shared.read().get(key).map(|entry| entry.value.clone());
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.shared.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.shared.read().is_empty()
    }

    /// The TTL this cache was built with
    pub fn ttl(&self) -> Duration {
        self.shared.ttl()
    }

    /// Stops the background reaper. Entries are kept but no longer expire.
    pub fn stop(&self) {
        self.reaper.shutdown_tx.send_replace(true);
    }
}
