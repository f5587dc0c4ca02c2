//! ccache-stats - Print ccache version and statistics
//!
//! Runs the ccache executable, parses its output and renders it as
//! jsonl/json/md/raw.

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose);
    cli::run(cli)
}
