use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use tracing::{debug, info};

use crate::codec::GzipCodec;
use crate::config::ArchiveConfig;
use crate::error::{Error, Result};
use crate::format::COPY_BUFFER_SIZE;
use crate::reader::ArchiveReader;
use crate::report::{file_size, human_bytes, CompressReport, DecompressReport};
use crate::writer::ArchiveWriter;

/// Compress `config.database` into `config.archive`.
///
/// The database must exist; otherwise [`Error::MissingSource`] is returned
/// and the archive path is not touched. A config whose archive is the
/// database itself is rejected up front. An existing archive is truncated.
/// Sizes in the report are read back from disk after both files are closed;
/// if the database size no longer matches the bytes compressed, the run
/// fails with [`Error::SizeMismatch`].
pub fn compress(config: &ArchiveConfig) -> Result<CompressReport> {
    config.validate()?;
    if !config.database.is_file() {
        return Err(Error::MissingSource {
            path: config.database.clone(),
        });
    }

    let t0 = Instant::now();
    let codec = GzipCodec::new(config.level);

    let bytes_copied = {
        let source = File::open(&config.database).map_err(|source| Error::OpenInput {
            path: config.database.clone(),
            source,
        })?;
        let mut writer = ArchiveWriter::create(&config.archive, &codec)?;
        writer.write_from(BufReader::with_capacity(COPY_BUFFER_SIZE, source))?;
        writer.finish()?
    };

    let report = CompressReport {
        database_bytes: file_size(&config.database)?,
        archive_bytes: file_size(&config.archive)?,
        bytes_copied,
        elapsed: t0.elapsed(),
    };
    if report.bytes_copied != report.database_bytes {
        return Err(Error::SizeMismatch {
            path: config.database.clone(),
            copied: report.bytes_copied,
            on_disk: report.database_bytes,
        });
    }
    info!(
        database = %config.database.display(),
        archive = %config.archive.display(),
        original = %human_bytes(report.database_bytes),
        compressed = %human_bytes(report.archive_bytes),
        "compressed database"
    );
    Ok(report)
}

/// Restore `config.database` from `config.archive`.
///
/// The archive must exist; otherwise [`Error::MissingArchive`] is returned
/// and the database path is not touched. Same-file configs are rejected as
/// in [`compress`]. An existing database is overwritten. A malformed or
/// truncated archive yields [`Error::Decompression`]; the partially written
/// database is left in place.
pub fn decompress(config: &ArchiveConfig) -> Result<DecompressReport> {
    if !config.archive.is_file() {
        return Err(Error::MissingArchive {
            path: config.archive.clone(),
        });
    }
    config.check_distinct()?;

    let t0 = Instant::now();
    let codec = GzipCodec::default();

    let reader = ArchiveReader::open(&config.archive, &codec)?;
    let output = File::create(&config.database).map_err(|source| Error::CreateOutput {
        path: config.database.clone(),
        source,
    })?;
    let mut output = BufWriter::with_capacity(COPY_BUFFER_SIZE, output);
    let written = reader.copy_to(&mut output)?;
    output.into_inner().map_err(|e| Error::Decompression {
        path: config.archive.clone(),
        source: e.into_error(),
    })?;
    debug!(database = %config.database.display(), written, "database flushed");

    let report = DecompressReport {
        database_bytes: file_size(&config.database)?,
        archive_bytes: file_size(&config.archive)?,
        elapsed: t0.elapsed(),
    };
    info!(
        archive = %config.archive.display(),
        database = %config.database.display(),
        restored = %human_bytes(report.database_bytes),
        "decompressed archive"
    );
    Ok(report)
}
