//! Shared constants for EdgeNode primitives.

// ═══════════════════════════════════════════════════════════════════════════════
// IP RANGE MATCHING
// ═══════════════════════════════════════════════════════════════════════════════

/// Value of `to` that marks a range entry as an exact single-address match.
pub const EXACT_MATCH_SENTINEL: u32 = 0;

/// `expires_at` values at or below this never expire.
pub const NEVER_EXPIRES: i64 = 0;

// ═══════════════════════════════════════════════════════════════════════════════
// CAPACITY CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// How long a cached capacity reading is reused, in seconds.
pub const DEFAULT_FRESHNESS_SECONDS: u64 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(EXACT_MATCH_SENTINEL, 0);
        assert_eq!(NEVER_EXPIRES, 0);
        assert_eq!(DEFAULT_FRESHNESS_SECONDS, 3);
    }
}
