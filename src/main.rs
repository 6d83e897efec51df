//! @ai:module:intent CLI for the n-gram metrics summary
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ngram_summary::{SummaryConfig, SummaryPipeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ngram-summary")]
#[command(about = "Average per-file classification metrics grouped by n-gram")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score prediction files and write the summary table (default)
    Summarize {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory holding the prediction CSV files
        #[arg(short, long)]
        results_dir: Option<PathBuf>,

        /// Summary CSV output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a JSON report with per-file detail
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "ngram-summary.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ngram_summary=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => summarize(SummaryArgs::default()),
        Some(Commands::Summarize {
            config,
            results_dir,
            output,
            json,
        }) => summarize(SummaryArgs {
            config,
            results_dir,
            output,
            json,
        }),
        Some(Commands::Init { output }) => init_config(output),
    }
}

#[derive(Default)]
struct SummaryArgs {
    config: Option<PathBuf>,
    results_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
}

/// @ai:intent Run the pipeline and report where the summary went
/// @ai:effects fs:read, fs:write
fn summarize(args: SummaryArgs) -> Result<()> {
    let mut config = load_or_default_config(args.config)?;

    if let Some(results_dir) = args.results_dir {
        config.paths.results_dir = results_dir;
    }
    if let Some(output) = args.output {
        config.paths.summary_file = output;
    }
    if args.json.is_some() {
        config.paths.json_report = args.json;
    }

    tracing::info!(
        "Summarizing {} into {}",
        config.paths.results_dir.display(),
        config.paths.summary_file.display()
    );

    let pipeline = SummaryPipeline::new(config);
    let summary = pipeline.run().with_context(|| {
        format!(
            "Failed to summarize {}",
            pipeline.config().paths.results_dir.display()
        )
    })?;

    tracing::info!(
        "{} files, {} n-gram groups",
        summary.file_count(),
        summary.rows.len()
    );

    println!(
        "Metrics summary by n-gram saved to {}",
        pipeline.config().paths.summary_file.display()
    );
    Ok(())
}

/// @ai:intent Load config from path or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<SummaryConfig> {
    match path {
        Some(p) => SummaryConfig::load(&p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => Ok(SummaryConfig::default()),
    }
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    SummaryConfig::default().save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}
