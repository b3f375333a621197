//! Per-file record types produced by traversal

use std::fs::Metadata;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Sentinel size for a file whose metadata could not be read.
pub const SIZE_UNAVAILABLE: i64 = -1;

/// Sentinel timestamp for a file whose metadata could not be read.
pub const TIMESTAMP_UNAVAILABLE: f64 = -1.0;

/// Outcome of statting a single file.
///
/// A file that vanishes (or becomes unreadable) between directory listing and
/// stat is still recorded; the two cases are explicit variants rather than an
/// error path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileDetails {
    /// Metadata was read successfully.
    Read {
        size: u64,
        modified: f64,
        created: f64,
    },
    /// Metadata could not be read; the record carries sentinel values.
    Unavailable,
}

impl FileDetails {
    /// Build details from stat metadata.
    pub fn from_metadata(meta: &Metadata) -> Self {
        FileDetails::Read {
            size: meta.len(),
            modified: meta
                .modified()
                .map(epoch_seconds)
                .unwrap_or(TIMESTAMP_UNAVAILABLE),
            created: created_timestamp(meta),
        }
    }
}

/// One row of exported data describing a single file.
///
/// Records are immutable once built and carry no identity beyond
/// (name, directory); the same base name can appear many times across a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// File base name.
    pub name: String,
    /// Path of the containing directory.
    pub directory: PathBuf,
    /// Size in bytes, or [`SIZE_UNAVAILABLE`].
    pub size_bytes: i64,
    /// Modification time in seconds since epoch, or [`TIMESTAMP_UNAVAILABLE`].
    pub modified_at: f64,
    /// Creation time in seconds since epoch, or [`TIMESTAMP_UNAVAILABLE`].
    /// See [`created_timestamp`] for what "creation" means per platform.
    pub created_at: f64,
}

impl FileRecord {
    pub fn new(name: String, directory: PathBuf, details: FileDetails) -> Self {
        match details {
            FileDetails::Read {
                size,
                modified,
                created,
            } => Self {
                name,
                directory,
                size_bytes: size as i64,
                modified_at: modified,
                created_at: created,
            },
            FileDetails::Unavailable => Self {
                name,
                directory,
                size_bytes: SIZE_UNAVAILABLE,
                modified_at: TIMESTAMP_UNAVAILABLE,
                created_at: TIMESTAMP_UNAVAILABLE,
            },
        }
    }

    /// Whether this record carries sentinel values instead of real metadata.
    pub fn is_degraded(&self) -> bool {
        self.size_bytes == SIZE_UNAVAILABLE
    }
}

/// Convert a system time to floating-point seconds since the Unix epoch.
/// Times before the epoch map to negative seconds.
fn epoch_seconds(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

/// The "created" timestamp is platform-dependent.
///
/// On Unix this is `st_ctime` - the inode change time, not a true creation
/// time. On other platforms it is the filesystem's creation time where the
/// platform reports one, and the sentinel otherwise.
#[cfg(unix)]
fn created_timestamp(meta: &Metadata) -> f64 {
    use std::os::unix::fs::MetadataExt;
    meta.ctime() as f64 + meta.ctime_nsec() as f64 / 1_000_000_000.0
}

#[cfg(not(unix))]
fn created_timestamp(meta: &Metadata) -> f64 {
    meta.created()
        .map(epoch_seconds)
        .unwrap_or(TIMESTAMP_UNAVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_record_carries_sentinels() {
        let record = FileRecord::new(
            "gone.txt".to_string(),
            PathBuf::from("/tmp"),
            FileDetails::Unavailable,
        );
        assert!(record.is_degraded());
        assert_eq!(record.size_bytes, -1);
        assert_eq!(record.modified_at, -1.0);
        assert_eq!(record.created_at, -1.0);
    }

    #[test]
    fn test_read_record_keeps_real_values() {
        let record = FileRecord::new(
            "a.txt".to_string(),
            PathBuf::from("/tmp"),
            FileDetails::Read {
                size: 500,
                modified: 1_700_000_000.5,
                created: 1_699_999_999.25,
            },
        );
        assert!(!record.is_degraded());
        assert_eq!(record.size_bytes, 500);
        assert_eq!(record.modified_at, 1_700_000_000.5);
        assert_eq!(record.created_at, 1_699_999_999.25);
    }

    #[test]
    fn test_details_from_real_metadata() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello").unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        match FileDetails::from_metadata(&meta) {
            FileDetails::Read {
                size,
                modified,
                created,
            } => {
                assert_eq!(size, 5);
                assert!(modified > 0.0, "mtime should be after the epoch");
                assert!(created > 0.0, "ctime should be after the epoch");
            }
            FileDetails::Unavailable => panic!("metadata for a fresh file should be readable"),
        }
    }
}
