//! Platform-specific file timestamp access.
//!
//! Each platform exposes its own notion of "creation time". The per-OS
//! modules map it onto a `SystemTime`; callers fall back to the modification
//! time when nothing is recorded.

#[cfg(windows)]
pub mod windows;

#[cfg(not(windows))]
pub mod unix;

use std::fs::Metadata;
use std::io;
use std::time::SystemTime;

/// Native creation time of a file, if the platform records one.
#[cfg(windows)]
pub fn native_creation_time(metadata: &Metadata) -> Option<SystemTime> {
    windows::creation_time(metadata)
}

/// Native creation time of a file, if the platform records one.
#[cfg(not(windows))]
pub fn native_creation_time(metadata: &Metadata) -> Option<SystemTime> {
    unix::birth_time(metadata)
}

/// Last modification time of a file.
pub fn modified_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.modified()
}
