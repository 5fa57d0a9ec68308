//! Archiving of previous extraction outputs.
//!
//! Before an output file is replaced it is moved to
//! `<archive dir>/<yyyyMMddHHmmss>_<file name>`, so every run keeps the
//! previous version around for diffing.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use walkdir::WalkDir;

use crate::error::{ExtractionError, Result};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const TIMESTAMP_LEN: usize = 14;

#[derive(Debug, Clone)]
pub struct Archiver {
    dir: PathBuf,
}

impl Archiver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Moves `path` into the archive directory, stamped with the local time.
    /// Returns `None` when there is nothing to archive.
    pub fn archive(&self, path: &Path) -> Result<Option<PathBuf>> {
        self.archive_at(path, chrono::Local::now().naive_local())
    }

    pub fn archive_at(&self, path: &Path, at: NaiveDateTime) -> Result<Option<PathBuf>> {
        if !path.is_file() {
            return Ok(None);
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = self.dir.join(archived_name(at, &name));
        let failed = |source| ExtractionError::Archive {
            from: path.to_path_buf(),
            to: dest.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(failed)?;
        fs::rename(path, &dest).map_err(failed)?;
        Ok(Some(dest))
    }
}

pub fn archived_name(at: NaiveDateTime, file_name: &str) -> String {
    format!("{}_{}", at.format(TIMESTAMP_FORMAT), file_name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedFile {
    pub path: PathBuf,
    pub archived_at: NaiveDateTime,
    pub original_name: String,
}

/// Archived files in `dir`, newest first. Files without a timestamp prefix are
/// ignored; a missing directory yields an empty list.
pub fn list_archived(dir: &Path) -> Result<Vec<ArchivedFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| ExtractionError::ArchiveListing {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some((archived_at, original_name)) = parse_archived_name(&name) {
            out.push(ArchivedFile {
                path: entry.path().to_path_buf(),
                archived_at,
                original_name: original_name.to_string(),
            });
        }
    }
    out.sort_by(|a, b| {
        b.archived_at
            .cmp(&a.archived_at)
            .then_with(|| a.original_name.cmp(&b.original_name))
    });
    Ok(out)
}

pub fn parse_archived_name(name: &str) -> Option<(NaiveDateTime, &str)> {
    let (stamp, original) = name.split_once('_')?;
    if stamp.len() != TIMESTAMP_LEN || !stamp.bytes().all(|b| b.is_ascii_digit()) || original.is_empty() {
        return None;
    }
    let at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some((at, original))
}
