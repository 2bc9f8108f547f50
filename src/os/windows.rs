//! Windows-specific operating system features.

use std::fs::Metadata;
use std::os::windows::fs::MetadataExt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 100ns intervals between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_OFFSET: u64 = 116_444_736_000_000_000;

/// Creation time from the file attribute data (`ftCreationTime`).
pub fn creation_time(metadata: &Metadata) -> Option<SystemTime> {
    filetime_to_system_time(metadata.creation_time())
}

/// Convert a FILETIME value into a `SystemTime`. Zero means "not recorded".
fn filetime_to_system_time(intervals: u64) -> Option<SystemTime> {
    if intervals == 0 {
        return None;
    }

    if intervals >= FILETIME_UNIX_OFFSET {
        let since_epoch = intervals - FILETIME_UNIX_OFFSET;
        UNIX_EPOCH.checked_add(Duration::from_nanos(since_epoch.checked_mul(100)?))
    } else {
        let before_epoch = FILETIME_UNIX_OFFSET - intervals;
        UNIX_EPOCH.checked_sub(Duration::from_nanos(before_epoch.checked_mul(100)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filetime_conversion() {
        assert_eq!(filetime_to_system_time(0), None);
        assert_eq!(filetime_to_system_time(FILETIME_UNIX_OFFSET), Some(UNIX_EPOCH));
        assert_eq!(
            filetime_to_system_time(FILETIME_UNIX_OFFSET + 10_000_000),
            Some(UNIX_EPOCH + Duration::from_secs(1))
        );
    }
}
