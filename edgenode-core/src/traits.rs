//! Common traits for EdgeNode primitives.
//!
//! These are the seams where the operating environment plugs in: the clock
//! that decides expiration and freshness, and the probe that reads volume
//! capacity. Both are synchronous; callers on async runtimes should treat
//! [`CapacityProbe::probe`] as blocking.

use std::path::Path;

use crate::error::Result;
use crate::types::RawCapacity;

// ═══════════════════════════════════════════════════════════════════════════════
// CLOCK TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Source of "current Unix time in seconds".
///
/// Implementations may be coarse or cached; sub-second precision is never
/// required.
pub trait Clock: Send + Sync {
    /// Returns the current Unix timestamp in seconds.
    fn now_unix(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_unix(&self) -> i64 {
        (**self).now_unix()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now_unix(&self) -> i64 {
        (**self).now_unix()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CAPACITY PROBE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for reading raw volume capacity.
///
/// Implementations might use:
/// - `statfs(2)` on the volume containing the path (production)
/// - A scripted fake (tests)
pub trait CapacityProbe: Send + Sync {
    /// Reads block counts and block size for the volume containing `path`.
    ///
    /// # Errors
    /// Returns the underlying failure unchanged; implementations must not retry.
    fn probe(&self, path: &Path) -> Result<RawCapacity>;
}

impl<P: CapacityProbe + ?Sized> CapacityProbe for std::sync::Arc<P> {
    fn probe(&self, path: &Path) -> Result<RawCapacity> {
        (**self).probe(path)
    }
}

impl<P: CapacityProbe + ?Sized> CapacityProbe for Box<P> {
    fn probe(&self, path: &Path) -> Result<RawCapacity> {
        (**self).probe(path)
    }
}
