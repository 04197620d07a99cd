use anyhow::Result;
use clap::Parser;
use std::path::Path;

use nudxs_acquire::fetch::HttpSource;
use nudxs_acquire::gudkov;

#[derive(Parser)]
#[command(name = "nudxs")]
#[command(about = "Scrape the Gudkov neutrino-deuteron differential cross-section tables")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,

    /// Directory the per-energy files are written into (must already exist)
    #[arg(short = 'O', long, default_value = nudxs_model::DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Root index page of the cross-section tables
    #[arg(long, default_value = gudkov::BASE_URL)]
    base_url: String,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn  => "warn",
        LogLevel::Info  => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    let source = HttpSource::new()?;
    let summary = gudkov::acquire(&source, &cli.base_url, Path::new(&cli.output_dir)).await?;

    tracing::info!(
        energies = summary.energies,
        written = summary.written,
        skipped = summary.skipped,
        "Acquisition complete"
    );

    Ok(())
}
