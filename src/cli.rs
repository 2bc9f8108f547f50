//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Month Sorter - files a flat folder into per-month subfolders
///
/// Each file's date is taken from a `YYYYMMDD_id.ext` name when present,
/// otherwise from its creation time, and the file is moved into a folder
/// such as `janeiro-2024` inside the same directory.
#[derive(Parser, Debug)]
#[command(name = "month-sorter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to organize (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Dry run mode - show what would be done without doing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Convert CLI arguments to Config
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();

        if let Some(ref directory) = self.directory {
            config.target_dir = directory.clone();
        }
        config.dry_run = self.dry_run;
        config.verbose = self.verbose;

        config
    }
}
