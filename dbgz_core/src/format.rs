/// Database file the commands operate on when no path is given.
pub const DEFAULT_DATABASE: &str = "rs3_market.db";

/// Archive file that accompanies the database in the repository.
pub const DEFAULT_ARCHIVE: &str = "rs3_market.db.gz";

/// Suffix appended to a database file name to form its archive name.
pub const ARCHIVE_SUFFIX: &str = "gz";

// ── Gzip framing (RFC 1952) ────────────────────────────────────────────────

/// First two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Fixed member header: magic[2] + method + flags + mtime:u32 + xfl + os = 10.
pub const GZIP_HEADER_SIZE: u64 = 10;

/// Member trailer: crc32:u32 + isize:u32 = 8.
pub const GZIP_TRAILER_SIZE: u64 = 8;

// ── Compression levels ─────────────────────────────────────────────────────

/// Default deflate level. Matches the `gzip` module default the existing
/// archives were produced with.
pub const DEFAULT_LEVEL: u32 = 9;

/// Highest level deflate accepts.
pub const MAX_LEVEL: u32 = 9;

// ── Reporting ──────────────────────────────────────────────────────────────

/// Bytes per mebibyte.
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Copy buffer used for both the source reader and the destination writer.
pub const COPY_BUFFER_SIZE: usize = 256 * 1024;
