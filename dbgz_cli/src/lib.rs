//! Shared plumbing for the `dbgz-compress` and `dbgz-decompress` commands.
//!
//! Both commands run with no arguments against `rs3_market.db` /
//! `rs3_market.db.gz` in the working directory. The flags below exist so the
//! same binaries can be pointed at other files (tests, scripts).
//!
//! Command flow:
//! 1. Parse arguments via clap
//! 2. Configure logging from `-v` / `RUST_LOG`
//! 3. Run the operation and print notices + metrics to stdout
//! 4. On error, print it to stderr and exit non-zero

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use dbgz_core::format::{DEFAULT_LEVEL, MAX_LEVEL};
use dbgz_core::{compress, decompress, ArchiveConfig};

// ── CLI definition ─────────────────────────────────────────────────────────

/// Path overrides shared by both commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Database file [default: rs3_market.db]
    #[arg(long = "db", value_name = "PATH", env = "DBGZ_DATABASE")]
    pub database: Option<PathBuf>,
    /// Archive file [default: <db>.gz]
    #[arg(long, value_name = "PATH", env = "DBGZ_ARCHIVE")]
    pub archive: Option<PathBuf>,
}

impl PathArgs {
    /// Resolve to a config. A lone `--db` derives the archive name from it.
    pub fn to_config(&self) -> ArchiveConfig {
        let mut config = match &self.database {
            Some(db) => ArchiveConfig::for_database(db),
            None => ArchiveConfig::default(),
        };
        if let Some(archive) = &self.archive {
            config.archive = archive.clone();
        }
        config
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dbgz-compress",
    about = "Compress the market database into a gzip archive before committing it",
    version
)]
pub struct CompressCli {
    #[command(flatten)]
    pub paths: PathArgs,
    /// Deflate level, 0 (store) to 9 (smallest)
    #[arg(
        short,
        long,
        env = "DBGZ_LEVEL",
        default_value_t = DEFAULT_LEVEL,
        value_parser = clap::value_parser!(u32).range(0..=MAX_LEVEL as i64)
    )]
    pub level: u32,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(
    name = "dbgz-decompress",
    about = "Restore the market database from its gzip archive after checkout",
    version
)]
pub struct DecompressCli {
    #[command(flatten)]
    pub paths: PathArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Map a command result to the process exit status, printing the error.
pub fn exit_status(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ── Command implementations ────────────────────────────────────────────────

pub fn run_compress(cli: &CompressCli) -> anyhow::Result<()> {
    let config = cli.paths.to_config().with_level(cli.level);
    tracing::debug!(?config, "resolved compress config");

    println!(
        "Compressing {} -> {} ...",
        config.database.display(),
        config.archive.display()
    );
    let report = compress(&config)
        .with_context(|| format!("compressing {}", config.database.display()))?;

    println!("Compression complete: {}", config.archive.display());
    println!("{}", report);
    Ok(())
}

pub fn run_decompress(cli: &DecompressCli) -> anyhow::Result<()> {
    let config = cli.paths.to_config();
    tracing::debug!(?config, "resolved decompress config");

    println!(
        "Decompressing {} -> {} ...",
        config.archive.display(),
        config.database.display()
    );
    let report = decompress(&config)
        .with_context(|| format!("decompressing {}", config.archive.display()))?;

    println!("Decompression complete: {} restored", config.database.display());
    println!("{}", report);
    Ok(())
}
