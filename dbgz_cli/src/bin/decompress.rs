//! Restore the market database after checkout.
//!
//! `dbgz-decompress` with no arguments reads `rs3_market.db.gz` and writes
//! `rs3_market.db` in the working directory, replacing any existing copy.

use std::process::ExitCode;

use clap::Parser;
use dbgz_cli::{exit_status, init_tracing, run_decompress, DecompressCli};

fn main() -> ExitCode {
    let cli = DecompressCli::parse();
    init_tracing(cli.verbose);
    exit_status(run_decompress(&cli))
}
