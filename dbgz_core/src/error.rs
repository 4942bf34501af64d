//! Error types for the compress/decompress round trip.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while packing or restoring the database.
#[derive(Debug, Error)]
pub enum Error {
    /// The database to compress is not on disk.
    #[error("{}: database file not found, nothing to compress", path.display())]
    MissingSource {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The archive to restore from is not on disk.
    #[error(
        "{}: archive not found. It normally ships with the repository; \
         fetch it from external storage (e.g. Git LFS) and retry",
        path.display()
    )]
    MissingArchive {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Database and archive resolve to the same file
    #[error("{}: database and archive are the same file", path.display())]
    SamePath {
        /// The shared path
        path: PathBuf,
    },

    /// The encoder consumed a different number of bytes than the database
    /// holds on disk once the archive is closed
    #[error(
        "{}: copied {copied} bytes but the file now holds {on_disk}; \
         it changed during compression",
        path.display()
    )]
    SizeMismatch {
        /// Path to the database
        path: PathBuf,
        /// Bytes fed through the encoder
        copied: u64,
        /// Size on disk after the archive was closed
        on_disk: u64,
    },

    /// Failed to open the input stream
    #[error("{}: cannot open: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create the output stream
    #[error("{}: cannot create: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The copy through the encoder or its finalization failed
    #[error("{}: compression failed: {source}", path.display())]
    Compression {
        /// Path to the archive being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The archive could not be decoded, or the output could not be written
    #[error("{}: decompression failed: {source}", path.display())]
    Decompression {
        /// Path to the archive being read
        path: PathBuf,
        /// Underlying I/O or decode error
        #[source]
        source: io::Error,
    },

    /// Could not stat a file for the size report
    #[error("{}: cannot read metadata: {source}", path.display())]
    Metadata {
        /// Path that was stat'ed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Compression level outside the deflate range
    #[error("unsupported compression level: {level} (must be 0-9)")]
    InvalidLevel {
        /// The rejected level
        level: u32,
    },
}

/// Specialized `Result` type for round-trip operations.
pub type Result<T> = std::result::Result<T, Error>;
