//! IP range entries for block/allow list rules.
//!
//! A [`RangeEntry`] is one row of a rule table: an inclusive IPv4 range (or a
//! single address) with an optional expiration time. The table that stores
//! and searches entries lives elsewhere; this type only answers "does this
//! entry match this address right now".

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::clock::SystemClock;
use crate::constants::{EXACT_MATCH_SENTINEL, NEVER_EXPIRES};
use crate::traits::Clock;

/// A time-bounded IPv4 range belonging to a rule.
///
/// Addresses are compared as big-endian `u32` values. When `to` is zero the
/// entry matches exactly `from` (exact mode); otherwise it matches the closed
/// interval `[from, to]` (range mode). An entry with `from > to` in range
/// mode never matches.
///
/// `expires_at` is a Unix timestamp in seconds. Values `<= 0` never expire;
/// otherwise the entry stops matching once `expires_at < now`, so an entry
/// is still valid during its final second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeEntry {
    /// Identifier of the owning rule (opaque here)
    id: i64,
    /// First address of the range, or the exact address
    from: u32,
    /// Last address of the range, or 0 for exact mode
    to: u32,
    /// Unix expiration timestamp, `<= 0` for never
    #[serde(default)]
    expires_at: i64,
}

impl RangeEntry {
    /// Creates a range entry.
    pub const fn new(id: i64, from: u32, to: u32, expires_at: i64) -> Self {
        Self {
            id,
            from,
            to,
            expires_at,
        }
    }

    /// Creates an entry matching a single address.
    pub const fn exact(id: i64, address: u32, expires_at: i64) -> Self {
        Self::new(id, address, EXACT_MATCH_SENTINEL, expires_at)
    }

    /// Returns the owning rule's identifier.
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the first address (or the exact address).
    pub const fn from(&self) -> u32 {
        self.from
    }

    /// Returns the last address, or 0 in exact mode.
    pub const fn to(&self) -> u32 {
        self.to
    }

    /// Returns the expiration timestamp.
    pub const fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Returns true if this entry matches a single address.
    pub const fn is_exact(&self) -> bool {
        self.to == EXACT_MATCH_SENTINEL
    }

    /// Returns true if the entry has expired at `now`.
    pub const fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at > NEVER_EXPIRES && self.expires_at < now
    }

    /// Returns true if the entry has expired according to the system clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(SystemClock::unix_now())
    }

    /// Tests `address` against this entry at time `now`.
    pub const fn contains_at(&self, address: u32, now: i64) -> bool {
        self.matches_address(address) && !self.is_expired_at(now)
    }

    /// Tests `address` against this entry using `clock` for expiration.
    pub fn contains_with<C: Clock + ?Sized>(&self, address: u32, clock: &C) -> bool {
        // Only read the clock when the numeric test passes.
        self.matches_address(address) && !self.is_expired_at(clock.now_unix())
    }

    /// Tests `address` against this entry using the system clock.
    pub fn contains(&self, address: u32) -> bool {
        self.contains_with(address, &SystemClock)
    }

    /// Tests an IPv4 address against this entry using the system clock.
    pub fn contains_ipv4(&self, address: Ipv4Addr) -> bool {
        self.contains(u32::from(address))
    }

    const fn matches_address(&self, address: u32) -> bool {
        if self.is_exact() {
            self.from == address
        } else {
            self.from <= address && address <= self.to
        }
    }
}
