//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use ccache_stats::core::render::{OutputFormat, RenderConfig, Renderer};
use ccache_stats::{CcacheStats, DEFAULT_EXECUTABLE, FIELD_NAMES};

/// ccache-stats - query a ccache executable for its version and statistics.
#[derive(Parser, Debug)]
#[command(name = "ccache-stats")]
#[command(
    author,
    version,
    about,
    long_about = r#"ccache-stats runs `ccache -V` or `ccache -s` and prints the parsed result.

Output formats:
- jsonl: one JSON object per stat field (default)
- json: a single JSON object
- md: human-friendly Markdown
- raw: `field value` lines

Examples:
    ccache-stats version
    ccache-stats stats --format json --pretty
    ccache-stats --ccache /usr/lib/ccache/bin/ccache stats --field cache_hit_rate
"#
)]
pub struct Cli {
    /// ccache executable to run.
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_EXECUTABLE,
        value_name = "PATH",
        long_help = "ccache executable to run. A bare name is looked up in PATH."
    )]
    pub ccache: String,

    /// Output format (jsonl/json/md/raw).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    /// Verbose mode (repeat for more diagnostics on stderr).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ccache version (runs `ccache -V`).
    #[command(
        long_about = "Run `ccache -V` and print the MAJOR.MINOR.PATCH version it reports.\n\n\
Fails if ccache cannot be run, exits non-zero, or prints no version line."
    )]
    Version,

    /// Print ccache statistics (runs `ccache -s`).
    #[command(
        long_about = "Run `ccache -s` and print every recognised statistic.\n\n\
Unrecognised lines are skipped. A recognised line whose value cannot be\n\
converted is an error.\n\n\
Examples:\n\
  ccache-stats stats\n\
  ccache-stats stats --field cache_hit_direct --field cache_hit_miss\n"
    )]
    Stats {
        /// Only print these fields (repeatable).
        #[arg(
            long,
            value_name = "NAME",
            value_parser = PossibleValuesParser::new(FIELD_NAMES.iter().copied())
        )]
        field: Vec<String>,
    },
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` directives apply on top of the level chosen by `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
    let ccache = CcacheStats::new(cli.ccache);

    match cli.command {
        Commands::Version => {
            let version = ccache
                .version()
                .with_context(|| format!("Failed to query version of '{}'", ccache.executable()))?;

            match version {
                Some(version) => println!("{}", renderer.render_version(&version)),
                None => bail!(
                    "VERSION_NOT_FOUND: '{} -V' printed no version line",
                    ccache.executable()
                ),
            }
        }

        Commands::Stats { field } => {
            let mut snapshot = ccache
                .stats()
                .with_context(|| format!("Failed to read stats from '{}'", ccache.executable()))?;

            if !field.is_empty() {
                snapshot.retain_fields(field.as_slice());
            }
            debug!(fields = snapshot.len(), "rendering stats");

            let output = renderer.render_stats(&snapshot);
            if !output.is_empty() {
                println!("{}", output);
            }
        }
    }

    Ok(())
}
