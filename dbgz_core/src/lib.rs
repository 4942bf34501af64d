pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod ops;
pub mod reader;
pub mod report;
pub mod writer;

pub use codec::GzipCodec;
pub use config::ArchiveConfig;
pub use error::{Error, Result};
pub use format::{DEFAULT_ARCHIVE, DEFAULT_DATABASE, GZIP_MAGIC};
pub use ops::{compress, decompress};
pub use reader::ArchiveReader;
pub use report::{CompressReport, DecompressReport};
pub use writer::ArchiveWriter;
