//! Run configuration for the month sorter

use std::path::PathBuf;

/// Configuration for one sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose top-level files are sorted
    pub target_dir: PathBuf,

    /// Dry run mode - resolve dates and folders but don't touch the file system
    pub dry_run: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            dry_run: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Configuration for sorting `target_dir` with default options
    pub fn for_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }
}
