//! TraceLens CLI: summarize and analyze recorded drawing animations.
//!
//! Usage:
//!   tracelens <INPUT>                                 Print summary and path analysis
//!   tracelens <INPUT> --export-sequence <OUTPUT>      Also write the simplified sequence
//!   tracelens <INPUT> --format json                   Emit reports as one JSON document

use std::path::PathBuf;

use clap::Parser;
use tracelens_common::config::{config_file_path, AppConfig, ReportFormat};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "tracelens",
    about = "Summarize, analyze, and export recorded drawing-animation traces",
    version,
    author
)]
struct Cli {
    /// Path to the animation trace (JSON)
    input: PathBuf,

    /// Write the simplified frame sequence to this path
    #[arg(long, value_name = "OUTPUT")]
    export_sequence: Option<PathBuf>,

    /// Report format: text|json
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Decimal places for distances, coordinates and durations
    #[arg(long)]
    precision: Option<usize>,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/tracelens/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken default config falls back to defaults; the warning waits
    // until the subscriber is installed.
    let (mut config, ignored_config) = match &cli.config {
        Some(path) => (
            AppConfig::load_from(path)
                .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?,
            None,
        ),
        None => match AppConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e)),
        },
    };

    // Command-line flags take precedence over the config file.
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.log_json {
        config.logging.json = true;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(precision) = cli.precision {
        config.report.precision = precision;
    }

    tracelens_common::logging::init_logging(&config.logging);
    if let Some(e) = ignored_config {
        tracing::warn!("Ignoring config at {:?}: {}", config_file_path(), e);
    }

    match config.report.format {
        ReportFormat::Text => {
            let mut sink =
                render::TextReport::new(std::io::stdout().lock(), config.report.precision);
            commands::analyze::run(&cli.input, cli.export_sequence.as_deref(), &mut sink)
        }
        ReportFormat::Json => {
            let mut sink = render::JsonReport::new(std::io::stdout().lock());
            commands::analyze::run(&cli.input, cli.export_sequence.as_deref(), &mut sink)
        }
    }
}
