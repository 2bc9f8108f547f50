//! Batch processor
//!
//! Handles the core loop of:
//! - Listing the top-level entries of the target directory
//! - Resolving each file's date
//! - Ensuring the month folder exists
//! - Moving the file into it

use crate::config::Config;
use crate::error::{Error, Result};
use crate::folder::{ensure_month_folder, month_folder_path};
use crate::relocate::move_file;
use crate::time::{CreationTimeSource, FilenamePattern, NativeCreationTime, ResolvedDate, resolve_date};
use chrono::Datelike;
use std::fs::{self, DirEntry};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span, warn};

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Source file path
    pub source: PathBuf,
    /// Destination file path (moved or planned)
    pub destination: Option<PathBuf>,
    /// Resolved date information
    pub date: Option<ResolvedDate>,
    /// Processing status
    pub status: ProcessingStatus,
    /// Error message (if failed)
    pub error: Option<String>,
}

impl FileResult {
    fn failed(source: PathBuf, date: Option<ResolvedDate>, error: &Error) -> Self {
        Self {
            source,
            destination: None,
            date,
            status: ProcessingStatus::Failed,
            error: Some(error.to_string()),
        }
    }
}

/// Status of file processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    /// File was moved into its month folder
    Relocated,
    /// Date resolution or the move failed; the file stayed in place
    Failed,
    /// Dry run - would have been moved
    DryRun,
}

/// Outcome of one run
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    /// Files moved successfully
    pub moved: usize,
    /// Files that could not be dated or moved
    pub failed: usize,
    /// Files that would have been moved (dry run)
    pub planned: usize,
    /// Per-file results in processing order
    pub results: Vec<FileResult>,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl RunSummary {
    fn record(&mut self, result: FileResult) {
        match result.status {
            ProcessingStatus::Relocated => self.moved += 1,
            ProcessingStatus::Failed => self.failed += 1,
            ProcessingStatus::DryRun => self.planned += 1,
        }
        self.results.push(result);
    }

    /// Elapsed time in whole milliseconds
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn summary(&self) -> String {
        format!(
            "Moved: {}, Failed: {}, Planned: {}, Elapsed: {}ms",
            self.moved,
            self.failed,
            self.planned,
            self.elapsed_millis()
        )
    }
}

/// Sorts the files of one directory into month folders
pub struct Processor {
    config: Config,
    pattern: FilenamePattern,
    creation_source: Box<dyn CreationTimeSource>,
}

impl Processor {
    /// Create a processor that reads creation times from the file system
    pub fn new(config: Config) -> Result<Self> {
        Self::with_creation_source(config, Box::new(NativeCreationTime))
    }

    /// Create a processor with a custom creation time source
    pub fn with_creation_source(
        config: Config,
        creation_source: Box<dyn CreationTimeSource>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            pattern: FilenamePattern::new()?,
            creation_source,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the sorting pass
    ///
    /// Only a failure to list the target directory aborts the run. Problems
    /// with individual files are logged and recorded in the summary.
    pub fn run(&self) -> Result<RunSummary> {
        let start = Instant::now();
        let target = &self.config.target_dir;
        let _span = info_span!("processor_run", dir = %target.display()).entered();

        let entries = self.list_entries()?;
        info!(count = entries.len(), "Listed target directory");

        let mut summary = RunSummary::default();
        for entry in entries {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                debug!(path = ?entry.path(), "Skipping directory");
                continue;
            }
            summary.record(self.process_entry(&entry));
        }

        summary.elapsed = start.elapsed();
        info!(summary = %summary.summary(), "Run complete");
        Ok(summary)
    }

    /// Top-level entries of the target directory, ordered by name
    fn list_entries(&self) -> Result<Vec<DirEntry>> {
        let target = &self.config.target_dir;
        let list_error = |source| Error::ListDirectory {
            path: target.clone(),
            source,
        };

        let mut entries = fs::read_dir(target)
            .map_err(list_error)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(list_error)?;
        entries.sort_by_key(|e| e.file_name());
        Ok(entries)
    }

    fn process_entry(&self, entry: &DirEntry) -> FileResult {
        let path = entry.path();
        let name = entry.file_name();
        let target = &self.config.target_dir;
        let _span = info_span!("process_file", ?path).entered();

        let date = match resolve_date(&path, &self.pattern, self.creation_source.as_ref()) {
            Ok(date) => date,
            Err(e) => {
                warn!(error = %e, "Cannot determine file date, leaving file in place");
                return FileResult::failed(path, None, &e);
            }
        };

        let folder = month_folder_path(target, &date.timestamp);

        if self.config.dry_run {
            let destination = folder.join(&name);
            info!(source = ?date.source, to = %destination.display(), "Would move file");
            return FileResult {
                source: path,
                destination: Some(destination),
                date: Some(date),
                status: ProcessingStatus::DryRun,
                error: None,
            };
        }

        if let Err(e) = ensure_month_folder(target, &date.timestamp) {
            warn!(
                month = %date.timestamp.format("%B"),
                year = date.timestamp.year(),
                error = %e,
                "Cannot create month folder"
            );
        }

        match move_file(target, &name, &folder) {
            Ok(destination) => FileResult {
                source: path,
                destination: Some(destination),
                date: Some(date),
                status: ProcessingStatus::Relocated,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "Move failed");
                FileResult::failed(path, Some(date), &e)
            }
        }
    }
}
