//! Month folder naming and creation

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDateTime};
use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lowercase month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "marco",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Localized name for a month number (1-12)
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Folder label for a date: `<month name>-<year>`, e.g. `janeiro-2024`
pub fn month_folder_label(date: &NaiveDateTime) -> String {
    format!("{}-{}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// Full path of the month folder for a date inside `dir`
pub fn month_folder_path(dir: &Path, date: &NaiveDateTime) -> PathBuf {
    dir.join(month_folder_label(date))
}

/// Check whether something named `label` exists in `dir`
///
/// Any error from `stat`, not only "not found", counts as absent.
pub fn exists_month_folder(dir: &Path, label: &str) -> bool {
    fs::metadata(dir.join(label)).is_ok()
}

/// Create the month folder `label` inside `dir`
pub fn create_month_folder(dir: &Path, label: &str) -> Result<PathBuf> {
    let path = dir.join(label);

    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder.create(&path).map_err(|source| Error::CreateFolder {
        label: label.to_string(),
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Make sure the month folder for `date` exists in `dir`, creating it if absent
///
/// Existence is checked on every call. A folder that appears between the
/// check and the creation (`AlreadyExists`) is accepted as is.
pub fn ensure_month_folder(dir: &Path, date: &NaiveDateTime) -> Result<PathBuf> {
    let label = month_folder_label(date);

    if exists_month_folder(dir, &label) {
        debug!(%label, "Month folder already exists");
        return Ok(dir.join(label));
    }

    match create_month_folder(dir, &label) {
        Ok(path) => {
            debug!(%label, "Created month folder");
            Ok(path)
        }
        Err(Error::CreateFolder { path, source, .. })
            if source.kind() == io::ErrorKind::AlreadyExists =>
        {
            debug!(%label, "Month folder appeared concurrently");
            Ok(path)
        }
        Err(e) => Err(e),
    }
}
