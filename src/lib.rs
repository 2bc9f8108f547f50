//! Month Sorter - files a flat folder into per-month subfolders
//!
//! This library provides functionality for organizing the top-level files of
//! one directory by date with support for:
//! - `YYYYMMDD_id.ext` filename date parsing
//! - Platform creation-time fallback (modification time where unavailable)
//! - Month folders named in Portuguese, e.g. `janeiro-2024`
//! - Dry runs that plan moves without touching the file system

pub mod cli;
pub mod config;
pub mod error;
pub mod folder;
pub mod os;
pub mod process;
pub mod relocate;
pub mod time;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, Result};
pub use process::{FileResult, ProcessingStatus, Processor, RunSummary};
pub use time::{CreationTimeSource, DateSource, FilenamePattern, NativeCreationTime, ResolvedDate};
