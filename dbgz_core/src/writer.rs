use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use tracing::debug;

use crate::codec::GzipCodec;
use crate::error::{Error, Result};
use crate::format::COPY_BUFFER_SIZE;

/// Single-pass gzip writer for archive files.
///
/// # Write contract
/// Call [`write_from`] any number of times; every call streams its reader
/// to end-of-input through the encoder. Call [`finish`] exactly once to
/// write the gzip trailer and flush the file.
///
/// # Release order
/// ```text
/// GzEncoder  ← finish(): deflate tail + CRC32/ISIZE trailer
///   BufWriter ← into_inner(): flush buffered bytes, surface write errors
///     File    ← dropped last, handle closed
/// ```
/// If the writer is dropped without `finish` (an error path), each layer's
/// `Drop` still releases its handle; the archive is then incomplete.
///
/// [`write_from`]: ArchiveWriter::write_from
/// [`finish`]: ArchiveWriter::finish
pub struct ArchiveWriter {
    path: PathBuf,
    encoder: GzEncoder<BufWriter<File>>,
    /// Uncompressed bytes fed to the encoder so far.
    bytes_in: u64,
}

impl ArchiveWriter {
    /// Create (or truncate) the archive at `path`.
    pub fn create(path: impl AsRef<Path>, codec: &GzipCodec) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| Error::CreateOutput {
            path: path.clone(),
            source,
        })?;
        debug!(archive = %path.display(), level = codec.level, "archive opened for writing");
        let encoder = codec.encoder(BufWriter::with_capacity(COPY_BUFFER_SIZE, file));
        Ok(Self {
            path,
            encoder,
            bytes_in: 0,
        })
    }

    /// Stream everything `input` yields into the encoder.
    ///
    /// Returns the number of uncompressed bytes copied by this call.
    pub fn write_from(&mut self, mut input: impl Read) -> Result<u64> {
        let copied = io::copy(&mut input, &mut self.encoder).map_err(|source| {
            Error::Compression {
                path: self.path.clone(),
                source,
            }
        })?;
        self.bytes_in += copied;
        Ok(copied)
    }

    /// Finish the gzip member, flush the file and close it.
    ///
    /// Returns the total number of uncompressed bytes written.
    pub fn finish(self) -> Result<u64> {
        let Self {
            path,
            encoder,
            bytes_in,
        } = self;

        let buffered = encoder.finish().map_err(|source| Error::Compression {
            path: path.clone(),
            source,
        })?;
        let file = buffered.into_inner().map_err(|e| Error::Compression {
            path: path.clone(),
            source: e.into_error(),
        })?;
        drop(file);

        debug!(archive = %path.display(), bytes_in, "archive finished");
        Ok(bytes_in)
    }
}
