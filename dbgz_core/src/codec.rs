use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::format::DEFAULT_LEVEL;

/// Single-member gzip codec used by both directions of the round trip.
///
/// The archive is a plain RFC 1952 stream: magic header, one deflate body,
/// CRC32/ISIZE trailer. Any conformant `gzip`/`gunzip` can read or produce it.
/// The decoder checks the trailer itself, so a truncated or corrupted archive
/// surfaces as an `io::Error` from `read` instead of a short output.
#[derive(Debug, Clone, Copy)]
pub struct GzipCodec {
    /// Deflate level (0 = store, 9 = smallest).
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl GzipCodec {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    /// Wrap `output` so that bytes written to the result are compressed.
    ///
    /// The caller must call `finish()` on the encoder; dropping it writes the
    /// trailer too but discards any error.
    pub fn encoder<W: Write>(&self, output: W) -> GzEncoder<W> {
        GzEncoder::new(output, Compression::new(self.level))
    }

    /// Wrap `input` so that reads from the result yield decompressed bytes.
    pub fn decoder<R: Read>(&self, input: R) -> GzDecoder<R> {
        GzDecoder::new(input)
    }
}
