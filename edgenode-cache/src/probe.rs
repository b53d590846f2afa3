//! Capacity probe backed by `statfs(2)`.

use std::path::Path;

use edgenode_core::{CapacityProbe, EdgeError, ProbeResult, RawCapacity, Result, SystemClock};
use nix::sys::statfs::statfs;

/// Reads volume capacity with `statfs(2)`.
///
/// Every call is a blocking system call; wrap it in a
/// [`CapacityCache`](crate::CapacityCache) on hot paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatfsProbe;

impl CapacityProbe for StatfsProbe {
    // Field widths of `struct statfs` differ by platform.
    #[allow(clippy::useless_conversion, clippy::unnecessary_fallible_conversions)]
    fn probe(&self, path: &Path) -> Result<RawCapacity> {
        let stat = statfs(path).map_err(|errno| EdgeError::probe_failed(path, errno))?;

        Ok(RawCapacity {
            total_blocks: u64::from(stat.blocks()),
            available_blocks: u64::from(stat.blocks_available()),
            block_size: i64::try_from(stat.block_size()).unwrap_or(0),
        })
    }
}

/// Probes the volume containing `path` once, without caching.
pub fn stat(path: impl AsRef<Path>) -> Result<ProbeResult> {
    let raw = StatfsProbe.probe(path.as_ref())?;
    Ok(ProbeResult::new(raw, SystemClock::unix_now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stat_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = stat(dir.path()).unwrap();

        assert!(result.block_size() > 0);
        assert!(result.total_bytes() > 0);
        assert!(result.available_bytes() <= result.total_bytes());
        assert_eq!(
            result.used_bytes(),
            result.total_bytes() - result.available_bytes()
        );
    }

    #[test]
    fn test_stat_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = stat(&missing).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        match err {
            EdgeError::ProbeFailed { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_stat_file_reports_its_volume() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let parent = file.path().parent().unwrap();

        let from_file = StatfsProbe.probe(file.path()).unwrap();
        let from_dir = StatfsProbe.probe(parent).unwrap();
        assert_eq!(from_file.total_blocks, from_dir.total_blocks);
        assert_eq!(from_file.block_size, from_dir.block_size);
    }
}
