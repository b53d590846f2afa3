//! Volume capacity cache for EdgeNode.
//!
//! [`CapacityCache`] answers "how full is this volume" from a reading that is
//! at most a few seconds old, so request paths do not issue `statfs(2)` on
//! every call. [`stat`] is the uncached one-shot probe.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cache;
mod probe;

pub use cache::{CacheConfig, CacheStats, CapacityCache};
pub use probe::{stat, StatfsProbe};
