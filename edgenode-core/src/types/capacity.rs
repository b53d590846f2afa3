//! Volume capacity readings.
//!
//! - [`RawCapacity`]: what a probe reports (block counts and block size)
//! - [`ProbeResult`]: a timestamped, read-only view in bytes

/// Raw block figures reported by a capacity probe.
///
/// `block_size` is signed because some platforms report it that way; negative
/// values are treated as zero once wrapped in a [`ProbeResult`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawCapacity {
    /// Total data blocks in the filesystem
    pub total_blocks: u64,
    /// Blocks available to unprivileged users
    pub available_blocks: u64,
    /// Size of one block in bytes
    pub block_size: i64,
}

impl RawCapacity {
    /// Creates a raw reading.
    pub const fn new(total_blocks: u64, available_blocks: u64, block_size: i64) -> Self {
        Self {
            total_blocks,
            available_blocks,
            block_size,
        }
    }
}

/// A capacity reading for one volume, taken at `updated_at`.
///
/// Byte figures are derived on access from the block counts. Multiplication
/// saturates at `u64::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    total_blocks: u64,
    available_blocks: u64,
    block_size: u64,
    updated_at: i64,
}

impl ProbeResult {
    /// Wraps a raw reading taken at Unix time `updated_at`.
    pub fn new(raw: RawCapacity, updated_at: i64) -> Self {
        Self {
            total_blocks: raw.total_blocks,
            available_blocks: raw.available_blocks,
            block_size: u64::try_from(raw.block_size).unwrap_or(0),
            updated_at,
        }
    }

    /// Bytes available to unprivileged users.
    pub fn available_bytes(&self) -> u64 {
        self.available_blocks.saturating_mul(self.block_size)
    }

    /// Total size of the volume in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.total_blocks.saturating_mul(self.block_size)
    }

    /// Bytes in use, or 0 if the probe reported more available than total blocks.
    pub fn used_bytes(&self) -> u64 {
        if self.available_blocks <= self.total_blocks {
            (self.total_blocks - self.available_blocks).saturating_mul(self.block_size)
        } else {
            0
        }
    }

    /// Fraction of the volume in use, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.total_blocks == 0 {
            return 0.0;
        }
        self.total_blocks.saturating_sub(self.available_blocks) as f64 / self.total_blocks as f64
    }

    /// Total data blocks as reported.
    pub fn total_blocks(&self) -> u64 {
        self.total_blocks
    }

    /// Available blocks as reported.
    pub fn available_blocks(&self) -> u64 {
        self.available_blocks
    }

    /// Block size in bytes after clamping.
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Unix time (seconds) at which the reading was taken.
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Returns true if the reading is at most `window_seconds` old at `now`.
    pub fn is_fresh_at(&self, now: i64, window_seconds: u64) -> bool {
        let window = i64::try_from(window_seconds).unwrap_or(i64::MAX);
        self.updated_at >= now.saturating_sub(window)
    }
}
