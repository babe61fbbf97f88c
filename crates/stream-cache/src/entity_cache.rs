//! Entity cache keyed by row id.
//!
//! Values are stored as `Arc<V>` and never mutated in place; a refresh or
//! `put` replaces the whole entry. The lock is only taken for the in-memory
//! partition and splice steps, never across the loader's `.await`.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;
use tracing::debug;

use stream_core::batch::unique_ids;
use stream_core::value_objects::Id;

/// How entries of one cache become stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Entries expire a fixed duration after they were fetched
    Ttl(Duration),
    /// Entries live until a writer invalidates or replaces them
    InvalidateOnWrite,
}

impl CachePolicy {
    fn expiry_from(self, now: Instant) -> Option<Instant> {
        match self {
            Self::Ttl(ttl) => Some(now + ttl),
            Self::InvalidateOnWrite => None,
        }
    }
}

struct CacheEntry<V> {
    value: Arc<V>,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |at| now < at)
    }
}

struct CacheState<V> {
    entries: HashMap<Id, CacheEntry<V>>,
    /// Advanced by every write-side operation
    clock: u64,
    /// Clock value of the last write to each id, kept while fills are in flight
    written: HashMap<Id, u64>,
    /// Clock value of the last `purge_all`
    purged_at: u64,
    /// Fills started and not yet finished
    fills: usize,
}

impl<V> CacheState<V> {
    fn record_write(&mut self, id: Id) {
        self.clock += 1;
        if self.fills > 0 {
            self.written.insert(id, self.clock);
        }
    }

    /// Whether a fill that started at `started` may store `id`
    fn accepts(&self, id: Id, started: u64) -> bool {
        self.purged_at <= started && self.written.get(&id).map_or(true, |&at| at <= started)
    }
}

/// Marks one fill in flight; dropping it ends the fill even if the loader
/// failed or the caller was cancelled
struct FillGuard<'a, V> {
    cache: &'a EntityCache<V>,
    started: u64,
}

impl<V> Drop for FillGuard<'_, V> {
    fn drop(&mut self) {
        let mut state = self.cache.state.write();
        state.fills = state.fills.saturating_sub(1);
        if state.fills == 0 {
            state.written.clear();
        }
    }
}

/// Process-local cache for one entity type
pub struct EntityCache<V> {
    name: &'static str,
    policy: CachePolicy,
    state: RwLock<CacheState<V>>,
}

impl<V> EntityCache<V> {
    /// Create an empty cache; `name` only appears in log output
    pub fn new(name: &'static str, policy: CachePolicy) -> Self {
        Self {
            name,
            policy,
            state: RwLock::new(CacheState {
                entries: HashMap::new(),
                clock: 0,
                written: HashMap::new(),
                purged_at: 0,
                fills: 0,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Resolve `ids`, loading only the misses
    ///
    /// Duplicate ids are collapsed. The loader is called at most once, with
    /// the de-duplicated misses, and not at all when everything hits. Ids the
    /// loader does not return are absent from the result and are not cached.
    /// A loaded value is returned but not stored when its id was written (or
    /// the cache purged) after the fill started; other ids are unaffected.
    ///
    /// # Errors
    /// Returns the loader's error unchanged; nothing from the failed batch is
    /// cached and the hits gathered for this call are discarded.
    pub async fn get_many<F, Fut, E>(
        &self,
        ids: &[Id],
        load: F,
    ) -> Result<HashMap<Id, Arc<V>>, E>
    where
        F: FnOnce(Vec<Id>) -> Fut,
        Fut: Future<Output = Result<HashMap<Id, V>, E>>,
    {
        let ids = unique_ids(ids.iter().copied());
        let (mut found, misses) = self.partition(ids);

        debug!(
            cache = self.name,
            hits = found.len(),
            misses = misses.len(),
            "cache lookup"
        );

        if misses.is_empty() {
            return Ok(found);
        }

        let fill = self.begin_fill();
        let requested: HashSet<Id> = misses.iter().copied().collect();
        let loaded: HashMap<Id, Arc<V>> = load(misses)
            .await?
            .into_iter()
            .filter(|(id, _)| requested.contains(id))
            .map(|(id, value)| (id, Arc::new(value)))
            .collect();

        self.splice(&loaded, fill.started);
        drop(fill);
        found.extend(loaded);
        Ok(found)
    }

    /// Cached value for `id` if present and unexpired; never loads
    pub fn peek(&self, id: Id) -> Option<Arc<V>> {
        let now = Instant::now();
        let state = self.state.read();
        state
            .entries
            .get(&id)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Replace the entry for `id` with a value the writer already knows
    pub fn put(&self, id: Id, value: V) {
        let entry = CacheEntry {
            value: Arc::new(value),
            expires_at: self.policy.expiry_from(Instant::now()),
        };
        let mut state = self.state.write();
        state.record_write(id);
        state.entries.insert(id, entry);
    }

    /// Drop the entry for `id`; the next read re-fetches it
    pub fn invalidate(&self, id: Id) {
        let mut state = self.state.write();
        state.record_write(id);
        state.entries.remove(&id);
    }

    /// Drop every entry
    pub fn purge_all(&self) {
        let mut state = self.state.write();
        state.clock += 1;
        state.purged_at = state.clock;
        state.written.clear();
        state.entries.clear();
        debug!(cache = self.name, "cache purged");
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn partition(&self, ids: Vec<Id>) -> (HashMap<Id, Arc<V>>, Vec<Id>) {
        let now = Instant::now();
        let state = self.state.read();
        let mut hits = HashMap::with_capacity(ids.len());
        let mut misses = Vec::new();

        for id in ids {
            match state.entries.get(&id) {
                Some(entry) if entry.is_fresh(now) => {
                    hits.insert(id, Arc::clone(&entry.value));
                }
                _ => misses.push(id),
            }
        }

        (hits, misses)
    }

    fn begin_fill(&self) -> FillGuard<'_, V> {
        let mut state = self.state.write();
        state.fills += 1;
        FillGuard {
            cache: self,
            started: state.clock,
        }
    }

    fn splice(&self, loaded: &HashMap<Id, Arc<V>>, started: u64) {
        let mut state = self.state.write();
        let expires_at = self.policy.expiry_from(Instant::now());
        let mut raced = 0usize;
        for (id, value) in loaded {
            if !state.accepts(*id, started) {
                raced += 1;
                continue;
            }
            state.entries.insert(
                *id,
                CacheEntry {
                    value: Arc::clone(value),
                    expires_at,
                },
            );
        }
        if raced > 0 {
            debug!(cache = self.name, raced, "writes raced the fill, not storing those ids");
        }
    }
}

impl<V> std::fmt::Debug for EntityCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityCache")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("len", &self.len())
            .finish()
    }
}
