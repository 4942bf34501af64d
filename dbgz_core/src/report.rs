//! Size metrics printed after each operation.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::format::BYTES_PER_MIB;

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Bytes as mebibytes, rounded to two decimals.
pub fn bytes_to_mib(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_MIB)
}

/// Archive size as a percentage of the original, rounded to two decimals.
///
/// `None` when the original is empty: there is no meaningful ratio.
pub fn ratio_percent(original: u64, archive: u64) -> Option<f64> {
    if original == 0 {
        return None;
    }
    Some(round2(archive as f64 / original as f64 * 100.0))
}

pub fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

/// Size of `path` on disk.
pub(crate) fn file_size(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| Error::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

/// Result of a successful compression.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressReport {
    /// Size of the database on disk, in bytes.
    pub database_bytes: u64,
    /// Size of the finished archive on disk, in bytes.
    pub archive_bytes: u64,
    /// Bytes the encoder consumed. `compress` fails instead of returning a
    /// report where this differs from `database_bytes`.
    pub bytes_copied: u64,
    pub elapsed: Duration,
}

impl CompressReport {
    pub fn database_mib(&self) -> f64 {
        bytes_to_mib(self.database_bytes)
    }

    pub fn archive_mib(&self) -> f64 {
        bytes_to_mib(self.archive_bytes)
    }

    /// Archive as a percentage of the database; `None` for an empty database.
    pub fn ratio(&self) -> Option<f64> {
        ratio_percent(self.database_bytes, self.archive_bytes)
    }
}

impl fmt::Display for CompressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  original    : {:.2} MiB", self.database_mib())?;
        writeln!(f, "  compressed  : {:.2} MiB", self.archive_mib())?;
        match self.ratio() {
            Some(r) => writeln!(f, "  ratio       : {:.2}%", r)?,
            None => writeln!(f, "  ratio       : n/a (empty database)")?,
        }
        write!(f, "  elapsed     : {:.3}s", self.elapsed.as_secs_f64())
    }
}

/// Result of a successful decompression.
#[derive(Debug, Clone, PartialEq)]
pub struct DecompressReport {
    /// Size of the restored database on disk, in bytes.
    pub database_bytes: u64,
    /// Size of the archive that was read, in bytes.
    pub archive_bytes: u64,
    pub elapsed: Duration,
}

impl DecompressReport {
    pub fn database_mib(&self) -> f64 {
        bytes_to_mib(self.database_bytes)
    }

    pub fn archive_mib(&self) -> f64 {
        bytes_to_mib(self.archive_bytes)
    }
}

impl fmt::Display for DecompressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  archive     : {:.2} MiB", self.archive_mib())?;
        writeln!(f, "  restored    : {:.2} MiB", self.database_mib())?;
        write!(f, "  elapsed     : {:.3}s", self.elapsed.as_secs_f64())
    }
}
