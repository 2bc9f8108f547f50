//! Moving files into their month folder

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Move `source_dir/name` to `dest_dir/name` with a single rename
///
/// Failures are printed to standard output and returned. Nothing is retried,
/// and an existing file at the destination is handled by the platform's
/// rename semantics.
pub fn move_file(source_dir: &Path, name: &OsStr, dest_dir: &Path) -> Result<PathBuf> {
    let from = source_dir.join(name);
    let to = dest_dir.join(name);

    if let Err(source) = fs::rename(&from, &to) {
        println!("Erro ao mover o arquivo: {}", source);
        return Err(Error::Move { from, to, source });
    }

    info!(from = %from.display(), to = %to.display(), "Moved file");
    Ok(to)
}
