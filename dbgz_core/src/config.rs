//! Paths and level for one round trip.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::{ARCHIVE_SUFFIX, DEFAULT_ARCHIVE, DEFAULT_DATABASE, DEFAULT_LEVEL, MAX_LEVEL};

/// The database/archive path pair plus the deflate level.
///
/// Both operations take the config by reference instead of reading fixed
/// names, so tests can point them at temporary files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Uncompressed database: compressor input, decompressor output.
    pub database: PathBuf,
    /// Gzip archive: compressor output, decompressor input.
    pub archive: PathBuf,
    /// Deflate level (0-9). Only used when compressing.
    pub level: u32,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            archive: PathBuf::from(DEFAULT_ARCHIVE),
            level: DEFAULT_LEVEL,
        }
    }
}

impl ArchiveConfig {
    pub fn new(database: impl Into<PathBuf>, archive: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            archive: archive.into(),
            level: DEFAULT_LEVEL,
        }
    }

    /// Config for `database` with the archive next to it, named
    /// `<file name>.gz`.
    pub fn for_database(database: impl Into<PathBuf>) -> Self {
        let database = database.into();
        let archive = archive_path_for(&database);
        Self::new(database, archive)
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Rejects levels deflate does not know and a database/archive pair
    /// that names one file.
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_LEVEL {
            return Err(Error::InvalidLevel { level: self.level });
        }
        self.check_distinct()
    }

    /// Fails with [`Error::SamePath`] when `database` and `archive` resolve to
    /// the same file. Creating the output would truncate the input first.
    pub fn check_distinct(&self) -> Result<()> {
        if same_file(&self.database, &self.archive) {
            return Err(Error::SamePath {
                path: self.database.clone(),
            });
        }
        Ok(())
    }
}

/// Equal as written, or both exist and canonicalize to one path.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Appends `.gz` to the full file name, keeping any existing extension
/// (`market.db` → `market.db.gz`).
pub fn archive_path_for(database: &Path) -> PathBuf {
    let mut name: OsString = database
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_DATABASE));
    name.push(".");
    name.push(ARCHIVE_SUFFIX);
    database.with_file_name(name)
}
