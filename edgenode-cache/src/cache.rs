//! In-memory TTL cache for volume capacity readings.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use edgenode_core::constants::DEFAULT_FRESHNESS_SECONDS;
use edgenode_core::{CapacityProbe, Clock, EdgeError, ProbeResult, Result, SystemClock};

use crate::probe::StatfsProbe;

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a reading is reused, in seconds
    pub freshness_seconds: u64,
    /// Maximum number of distinct paths, `None` for unbounded
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_seconds: DEFAULT_FRESHNESS_SECONDS,
            max_entries: None,
        }
    }
}

impl CacheConfig {
    /// Checks the configuration for values the cache cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == Some(0) {
            return Err(EdgeError::ConfigError(
                "max_entries must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    probe_failures: AtomicU64,
    evictions: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Path-keyed cache of capacity readings.
///
/// A reading is reused while it is at most `freshness_seconds` old. Fresh
/// hits only take the shared lock. A miss takes the exclusive lock and holds
/// it for the whole probe, so misses for different paths run one at a time
/// and fresh hits wait behind them.
///
/// Probe errors are returned unchanged and leave any previous reading for the
/// path in place.
///
/// # Example
///
/// ```rust,no_run
/// use edgenode_cache::CapacityCache;
///
/// let cache = CapacityCache::new();
/// let usage = cache.get("/var/cache/edge")?;
/// println!("{} of {} bytes used", usage.used_bytes(), usage.total_bytes());
/// # Ok::<(), edgenode_core::EdgeError>(())
/// ```
pub struct CapacityCache<P = StatfsProbe, C = SystemClock> {
    entries: RwLock<HashMap<PathBuf, ProbeResult>>,
    probe: P,
    clock: C,
    config: CacheConfig,
    counters: Counters,
}

impl CapacityCache {
    /// Creates a `statfs`-backed cache with default configuration.
    pub fn new() -> Self {
        Self::with_probe(StatfsProbe)
    }

    /// Creates a `statfs`-backed cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Self::from_parts(StatfsProbe, SystemClock, config)
    }
}

impl Default for CapacityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CapacityProbe> CapacityCache<P, SystemClock> {
    /// Creates a cache over a custom probe with default configuration.
    pub fn with_probe(probe: P) -> Self {
        Self::build(probe, SystemClock, CacheConfig::default())
    }
}

impl<P: CapacityProbe, C: Clock> CapacityCache<P, C> {
    /// Creates a cache from a probe, a clock and a configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn from_parts(probe: P, clock: C, config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(probe, clock, config))
    }

    fn build(probe: P, clock: C, config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            probe,
            clock,
            config,
            counters: Counters::default(),
        }
    }

    /// Returns a capacity reading for `path`, probing only if the cached one is stale.
    ///
    /// # Errors
    /// Returns the probe's error unchanged on a miss. Nothing is retried.
    pub fn get(&self, path: impl AsRef<Path>) -> Result<ProbeResult> {
        let path = path.as_ref();

        if let Some(result) = self.fresh(&self.entries.read(), path) {
            Counters::bump(&self.counters.hits);
            trace!(path = %path.display(), "Capacity cache hit");
            return Ok(result);
        }

        self.refresh(path)
    }

    #[instrument(level = "debug", skip(self, path), fields(path = %path.display()))]
    fn refresh(&self, path: &Path) -> Result<ProbeResult> {
        let mut entries = self.entries.write();

        // Another caller may have refreshed while we waited for the write lock.
        if let Some(result) = self.fresh(&entries, path) {
            Counters::bump(&self.counters.hits);
            trace!("Refreshed by concurrent caller");
            return Ok(result);
        }

        Counters::bump(&self.counters.misses);
        debug!("Capacity cache miss, probing");

        let raw = self.probe.probe(path).map_err(|error| {
            Counters::bump(&self.counters.probe_failures);
            debug!(%error, "Capacity probe failed");
            error
        })?;
        let result = ProbeResult::new(raw, self.clock.now_unix());

        if !entries.contains_key(path) {
            self.make_room(&mut entries);
        }
        entries.insert(path.to_path_buf(), result);

        Ok(result)
    }

    fn fresh(&self, entries: &HashMap<PathBuf, ProbeResult>, path: &Path) -> Option<ProbeResult> {
        entries
            .get(path)
            .filter(|e| e.is_fresh_at(self.clock.now_unix(), self.config.freshness_seconds))
            .copied()
    }

    fn make_room(&self, entries: &mut HashMap<PathBuf, ProbeResult>) {
        let Some(max_entries) = self.config.max_entries else {
            return;
        };

        if entries.len() >= max_entries {
            let dropped = self.retain_fresh(entries);
            if dropped > 0 {
                debug!(dropped, "Dropped stale capacity readings to make room");
                self.counters.evictions.fetch_add(dropped as u64, Ordering::Relaxed);
            }
        }

        while entries.len() >= max_entries {
            let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, e)| e.updated_at())
                .map(|(k, _)| k.clone())
            else {
                break;
            };
            debug!(path = %oldest.display(), "Evicting oldest capacity reading");
            entries.remove(&oldest);
            Counters::bump(&self.counters.evictions);
        }
    }

    fn retain_fresh(&self, entries: &mut HashMap<PathBuf, ProbeResult>) -> usize {
        let now = self.clock.now_unix();
        let before = entries.len();
        entries.retain(|_, e| e.is_fresh_at(now, self.config.freshness_seconds));
        before - entries.len()
    }

    /// Returns the cached reading for `path` without checking freshness or probing.
    pub fn peek(&self, path: impl AsRef<Path>) -> Option<ProbeResult> {
        self.entries.read().get(path.as_ref()).copied()
    }

    /// Removes the cached reading for `path`, forcing the next `get` to probe.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> Option<ProbeResult> {
        self.entries.write().remove(path.as_ref())
    }

    /// Clears all cached readings.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all stale readings and returns how many were dropped.
    pub fn cleanup_stale(&self) -> usize {
        let mut entries = self.entries.write();
        self.retain_fresh(&mut entries)
    }

    /// Returns the number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            probe_failures: self.counters.probe_failures.load(Ordering::Relaxed),
            evictions: self.counters.evictions.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: self.config.max_entries,
        }
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups served from a fresh reading
    pub hits: u64,
    /// Lookups that ran the probe
    pub misses: u64,
    /// Probe runs that returned an error
    pub probe_failures: u64,
    /// Readings dropped to stay within `max_entries`, stale or oldest-first
    pub evictions: u64,
    /// Paths currently cached
    pub entries: usize,
    /// Configured bound, if any
    pub capacity: Option<usize>,
}

impl CacheStats {
    /// Hit rate as a percentage (0.0 to 100.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}
