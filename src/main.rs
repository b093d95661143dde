//! CLI entry point for the storm impact report generator.
//!
//! Provides subcommands for building the full report set from a Storm Events
//! export and for auditing which raw event-type labels fall through to the
//! catch-all category.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use storm_impact::analyzers::analyzer::{analyze, audit};
use storm_impact::config::AnalysisConfig;
use storm_impact::output::print_pretty;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "storm_impact")]
#[command(about = "Ranks US storm event types by human and economic impact", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every report from a Storm Events CSV (plain, .gz or .bz2)
    Report {
        /// Path to the Storm Events export
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory to write tables, charts and summary.json into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,
    },
    /// List raw event-type labels that have no entry in the lookup table
    Audit {
        /// Path to the Storm Events export
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/storm_impact.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("storm_impact.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = AnalysisConfig::default();

    match cli.command {
        Commands::Report { input, output_dir } => {
            let stats = analyze(&input, &output_dir, &config)?;
            print_pretty(&stats);

            if stats.has_failures() {
                for (artifact, reason) in &stats.artifacts_failed {
                    warn!(artifact = %artifact, reason = %reason, "Artifact not written");
                }
                bail!("{} report artifact(s) failed", stats.artifacts_failed.len());
            }
            info!(output_dir = %output_dir.display(), "All reports written");
        }
        Commands::Audit { input } => {
            let (unmapped, stats) = audit(&input, &config)?;

            for label in &unmapped {
                info!(label = %label.label, rows = label.rows, "Unmapped label");
            }

            info!(
                unmapped = unmapped.len(),
                catch_all_rows = stats.rows_catch_all,
                catch_all_pct = stats.catch_all_pct(),
                distinct_raw_labels = stats.distinct_raw_labels,
                distinct_categories = stats.distinct_categories,
                "Label audit summary"
            );
        }
    }

    Ok(())
}
