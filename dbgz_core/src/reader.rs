use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::debug;

use crate::codec::GzipCodec;
use crate::error::{Error, Result};
use crate::format::COPY_BUFFER_SIZE;

/// Sequential reader for archive files.
///
/// # Open sequence
/// 1. Open the archive file (absent → [`Error::MissingArchive`]).
/// 2. Wrap it in a buffered reader and a gzip decoder. The header is parsed
///    lazily on the first read, so a file that is not gzip at all fails in
///    [`copy_to`], not here.
///
/// # Access pattern
/// There is no random access: [`copy_to`] decodes the single member from the
/// first byte to the trailer and consumes the reader. A decode error or a
/// missing trailer is returned as [`Error::Decompression`]; whatever was
/// already written to the output stays there.
///
/// [`copy_to`]: ArchiveReader::copy_to
pub struct ArchiveReader {
    path: PathBuf,
    decoder: GzDecoder<BufReader<File>>,
}

impl ArchiveReader {
    /// Open the archive at `path` for decoding.
    pub fn open(path: impl AsRef<Path>, codec: &GzipCodec) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::MissingArchive { path: path.clone() },
            _ => Error::OpenInput {
                path: path.clone(),
                source,
            },
        })?;
        debug!(archive = %path.display(), "archive opened for reading");
        let decoder = codec.decoder(BufReader::with_capacity(COPY_BUFFER_SIZE, file));
        Ok(Self { path, decoder })
    }

    /// Decode the whole archive into `output`.
    ///
    /// Returns the number of decompressed bytes written. `output` is not
    /// flushed; the caller owns it.
    pub fn copy_to(mut self, output: &mut impl Write) -> Result<u64> {
        let written = io::copy(&mut self.decoder, output).map_err(|source| {
            Error::Decompression {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(archive = %self.path.display(), written, "archive decoded");
        Ok(written)
    }
}
