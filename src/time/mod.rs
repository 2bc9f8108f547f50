//! Date resolution module
//!
//! A file's date comes from one of two places:
//! - the `YYYYMMDD_id.ext` filename layout
//! - the file system's creation time (modification time where the platform
//!   has no creation time)

pub mod filename;

use crate::error::{Error, Result};
use crate::os;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

pub use filename::FilenamePattern;

/// Source of the resolved date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// Parsed from the filename
    Filename,
    /// Read from file system metadata
    Metadata,
}

/// Result of date resolution for one entry
#[derive(Debug, Clone)]
pub struct ResolvedDate {
    /// The resolved timestamp
    pub timestamp: NaiveDateTime,
    /// Source of the timestamp
    pub source: DateSource,
}

/// Best-available creation timestamp for a file
pub trait CreationTimeSource {
    fn creation_time(&self, path: &Path) -> Result<SystemTime>;
}

/// Reads the platform's native creation time, falling back to the
/// modification time where no creation time is recorded
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCreationTime;

impl CreationTimeSource for NativeCreationTime {
    fn creation_time(&self, path: &Path) -> Result<SystemTime> {
        let metadata = fs::metadata(path).map_err(|e| Error::MetadataUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if let Some(created) = os::native_creation_time(&metadata) {
            return Ok(created);
        }

        debug!(?path, "No creation time recorded, using modification time");
        os::modified_time(&metadata).map_err(|e| Error::MetadataUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Resolve the date of a file
///
/// The filename is tried first. Any failure there (no match, bad field,
/// future date) hands over to the metadata source, which is authoritative
/// from then on.
pub fn resolve_date(
    path: &Path,
    pattern: &FilenamePattern,
    source: &dyn CreationTimeSource,
) -> Result<ResolvedDate> {
    if let Some(name) = path.file_name().and_then(|f| f.to_str()) {
        match pattern.parse(name) {
            Ok(timestamp) => {
                debug!(?path, %timestamp, "Resolved date from filename");
                return Ok(ResolvedDate {
                    timestamp,
                    source: DateSource::Filename,
                });
            }
            Err(e) => {
                debug!(?path, reason = %e, "Filename date unusable, using file metadata");
            }
        }
    }

    let created = source.creation_time(path)?;
    let timestamp = DateTime::<Local>::from(created).naive_local();
    debug!(?path, %timestamp, "Resolved date from file metadata");

    Ok(ResolvedDate {
        timestamp,
        source: DateSource::Metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use std::fs::File;
    use tempfile::TempDir;

    struct FixedTime(SystemTime);

    impl CreationTimeSource for FixedTime {
        fn creation_time(&self, _path: &Path) -> Result<SystemTime> {
            Ok(self.0)
        }
    }

    struct Unavailable;

    impl CreationTimeSource for Unavailable {
        fn creation_time(&self, path: &Path) -> Result<SystemTime> {
            Err(Error::MetadataUnavailable {
                path: path.to_path_buf(),
                message: "unsupported".into(),
            })
        }
    }

    fn march_2020() -> SystemTime {
        Local
            .with_ymd_and_hms(2020, 3, 10, 12, 0, 0)
            .unwrap()
            .into()
    }

    #[test]
    fn test_date_source_debug() {
        assert_eq!(format!("{:?}", DateSource::Filename), "Filename");
        assert_eq!(format!("{:?}", DateSource::Metadata), "Metadata");
    }

    #[test]
    fn test_filename_wins_over_metadata() {
        let pattern = FilenamePattern::new().unwrap();
        let resolved = resolve_date(
            Path::new("/photos/20240115_img1.jpg"),
            &pattern,
            &FixedTime(march_2020()),
        )
        .unwrap();
        assert_eq!(resolved.source, DateSource::Filename);
        assert_eq!(resolved.timestamp.year(), 2024);
        assert_eq!(resolved.timestamp.month(), 1);
    }

    #[test]
    fn test_fallback_for_plain_name() {
        let pattern = FilenamePattern::new().unwrap();
        let resolved =
            resolve_date(Path::new("notes.txt"), &pattern, &FixedTime(march_2020())).unwrap();
        assert_eq!(resolved.source, DateSource::Metadata);
        assert_eq!(resolved.timestamp.year(), 2020);
        assert_eq!(resolved.timestamp.month(), 3);
        assert_eq!(resolved.timestamp.day(), 10);
    }

    #[test]
    fn test_fallback_for_future_name() {
        let pattern = FilenamePattern::new().unwrap();
        let resolved = resolve_date(
            Path::new("20991231_future.jpg"),
            &pattern,
            &FixedTime(march_2020()),
        )
        .unwrap();
        assert_eq!(resolved.source, DateSource::Metadata);
        assert_eq!(resolved.timestamp.year(), 2020);
    }

    #[test]
    fn test_metadata_failure_is_reported() {
        let pattern = FilenamePattern::new().unwrap();
        let err = resolve_date(Path::new("notes.txt"), &pattern, &Unavailable).unwrap_err();
        assert!(matches!(err, Error::MetadataUnavailable { .. }));
    }

    #[test]
    fn test_native_creation_time_on_real_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        File::create(&path).unwrap();

        let created = NativeCreationTime.creation_time(&path).unwrap();
        let age = SystemTime::now()
            .duration_since(created)
            .unwrap_or_default();
        assert!(age.as_secs() < 3600);
    }

    #[test]
    fn test_native_creation_time_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = NativeCreationTime
            .creation_time(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::MetadataUnavailable { .. }));
    }
}
