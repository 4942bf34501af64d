//! Compress the market database before it is committed.
//!
//! `dbgz-compress` with no arguments reads `rs3_market.db` and writes
//! `rs3_market.db.gz` in the working directory.

use std::process::ExitCode;

use clap::Parser;
use dbgz_cli::{exit_status, init_tracing, run_compress, CompressCli};

fn main() -> ExitCode {
    let cli = CompressCli::parse();
    init_tracing(cli.verbose);
    exit_status(run_compress(&cli))
}
