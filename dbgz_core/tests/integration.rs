/// Integration tests: the database → archive → database round trip on real
/// files in a temporary directory.
///
/// Covers:
///  1. Byte-exact round trips for compressible, random, and empty inputs
///  2. Gzip framing of the produced archive
///  3. Missing-input errors that leave the destination untouched
///  4. Truncated archives failing instead of yielding a short database
use std::fs;
use std::io::Read;
use std::path::Path;

use dbgz_core::{compress, decompress, ArchiveConfig, Error, GZIP_MAGIC};
use flate2::read::GzDecoder;
use tempfile::TempDir;

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// 10,000 repetitions of "ABCD".
fn abcd_bytes() -> Vec<u8> {
    b"ABCD".repeat(10_000)
}

// ── helpers ───────────────────────────────────────────────────────────────

fn setup(data: &[u8]) -> (TempDir, ArchiveConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = ArchiveConfig::for_database(dir.path().join("rs3_market.db"));
    fs::write(&config.database, data).unwrap();
    (dir, config)
}

/// Compress, delete the database, restore it, and return the restored bytes.
fn round_trip(config: &ArchiveConfig) -> Vec<u8> {
    compress(config).unwrap();
    fs::remove_file(&config.database).unwrap();
    decompress(config).unwrap();
    fs::read(&config.database).unwrap()
}

fn assert_absent(path: &Path) {
    assert!(!path.exists(), "{} should not have been created", path.display());
}

// ── tests ──────────────────────────────────────────────────────────────────

#[test]
fn test_abcd_pattern_compresses_and_restores() {
    let data = abcd_bytes();
    assert_eq!(data.len(), 40_000);
    let (_dir, config) = setup(&data);

    let report = compress(&config).unwrap();
    assert_eq!(report.database_bytes, 40_000);
    assert_eq!(report.bytes_copied, 40_000);
    assert!(report.archive_bytes < 40_000);

    let archive = fs::read(&config.archive).unwrap();
    assert_eq!(archive.len() as u64, report.archive_bytes);
    assert_eq!(&archive[..2], &GZIP_MAGIC);

    fs::remove_file(&config.database).unwrap();
    let restored = decompress(&config).unwrap();
    assert_eq!(restored.database_bytes, 40_000);
    assert_eq!(fs::read(&config.database).unwrap(), data);
}

#[test]
fn test_empty_database() {
    let (_dir, config) = setup(&[]);

    let report = compress(&config).unwrap();
    assert_eq!(report.database_bytes, 0);
    assert!(report.archive_bytes > 0, "archive keeps gzip header and trailer");
    assert_eq!(report.ratio(), None);

    assert!(round_trip(&config).is_empty());
}

#[test]
fn test_random_data_round_trip() {
    let data = pseudo_random_bytes(3 * 1024 * 1024 + 17, 0xDEAD_BEEF);
    let (_dir, config) = setup(&data);
    assert_eq!(round_trip(&config), data);
}

#[test]
fn test_ratio_bounds() {
    let (_dir, config) = setup(&abcd_bytes());
    let ratio = compress(&config).unwrap().ratio().unwrap();
    assert!(ratio.is_finite());
    assert!(ratio > 0.0 && ratio < 100.0, "compressible input ratio={ratio}");

    let (_dir, config) = setup(&pseudo_random_bytes(64 * 1024, 7));
    let ratio = compress(&config).unwrap().ratio().unwrap();
    assert!(ratio.is_finite() && ratio > 0.0);
}

#[test]
fn test_compress_twice_overwrites() {
    let data = pseudo_random_bytes(100_000, 42);
    let (_dir, config) = setup(&data);

    compress(&config).unwrap();
    // Stale junk in the archive slot must be fully replaced.
    fs::write(&config.archive, vec![0u8; 1_000_000]).unwrap();
    compress(&config).unwrap();

    assert_eq!(round_trip(&config), data);
}

#[test]
fn test_decompress_overwrites_existing_database() {
    let data = abcd_bytes();
    let (_dir, config) = setup(&data);
    compress(&config).unwrap();

    fs::write(&config.database, pseudo_random_bytes(200_000, 1)).unwrap();
    decompress(&config).unwrap();
    assert_eq!(fs::read(&config.database).unwrap(), data);
}

#[test]
fn test_missing_database_creates_no_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArchiveConfig::for_database(dir.path().join("rs3_market.db"));

    let err = compress(&config).unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));
    assert!(err.to_string().contains("rs3_market.db"));
    assert_absent(&config.archive);
}

#[test]
fn test_missing_archive_creates_no_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArchiveConfig::for_database(dir.path().join("rs3_market.db"));

    let err = decompress(&config).unwrap_err();
    assert!(matches!(err, Error::MissingArchive { .. }));
    assert!(err.to_string().contains("rs3_market.db.gz"));
    assert_absent(&config.database);
}

#[test]
fn test_truncated_archive_fails() {
    let (_dir, config) = setup(&abcd_bytes());
    compress(&config).unwrap();

    let mut archive = fs::read(&config.archive).unwrap();
    archive.truncate(archive.len() - 10);
    fs::write(&config.archive, &archive).unwrap();

    let err = decompress(&config).unwrap_err();
    assert!(matches!(err, Error::Decompression { .. }), "got {err:?}");
}

#[test]
fn test_non_gzip_archive_fails() {
    let (_dir, config) = setup(&[]);
    fs::write(&config.archive, b"SQLite format 3\0 not an archive").unwrap();

    let err = decompress(&config).unwrap_err();
    assert!(matches!(err, Error::Decompression { .. }), "got {err:?}");
}

#[test]
fn test_invalid_level_touches_nothing() {
    let (_dir, config) = setup(b"rows");
    let config = config.with_level(12);

    let err = compress(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidLevel { level: 12 }));
    assert_absent(&config.archive);
}

#[test]
fn test_archive_readable_by_plain_gzip_decoder() {
    let data = pseudo_random_bytes(10_000, 3);
    let (_dir, config) = setup(&data);
    compress(&config.clone().with_level(1)).unwrap();

    let archive = fs::read(&config.archive).unwrap();
    let mut restored = Vec::new();
    GzDecoder::new(archive.as_slice())
        .read_to_end(&mut restored)
        .unwrap();
    assert_eq!(restored, data);
}

#[test]
fn test_archive_onto_database_is_rejected() {
    let data = abcd_bytes();
    let (_dir, config) = setup(&data);
    let same = ArchiveConfig::new(&config.database, &config.database);

    let err = compress(&same).unwrap_err();
    assert!(matches!(err, Error::SamePath { .. }), "got {err:?}");
    assert_eq!(fs::read(&config.database).unwrap(), data, "database must be untouched");

    let err = decompress(&same).unwrap_err();
    assert!(matches!(err, Error::SamePath { .. }), "got {err:?}");
    assert_eq!(fs::read(&config.database).unwrap(), data);
}

#[test]
fn test_aliased_archive_path_is_rejected() {
    let data = abcd_bytes();
    let (dir, config) = setup(&data);
    let alias = dir.path().join(".").join("rs3_market.db");
    let aliased = ArchiveConfig::new(&config.database, &alias);

    let err = compress(&aliased).unwrap_err();
    assert!(matches!(err, Error::SamePath { .. }), "got {err:?}");
    assert_eq!(fs::read(&config.database).unwrap(), data);
}
