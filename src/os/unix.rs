//! Unix-like operating system features.

use std::fs::Metadata;
use std::time::SystemTime;

/// File birth time, when the kernel and file system report one.
///
/// Linux exposes it through `statx` on ext4, btrfs, xfs and tmpfs; older
/// kernels and some network file systems return `Unsupported`.
pub fn birth_time(metadata: &Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}
