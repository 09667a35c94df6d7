//! SDP Enrich - Dataset enrichment tool

use anyhow::Result;
use clap::Parser;
use sdp_common::logging::{init_logging, LogConfig, LogLevel};
use sdp_enrich::{batch, pipeline};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sdp-enrich")]
#[command(author, version, about = "SDP dataset enrichment tool")]
struct Cli {
    /// Enrichment pass to run
    #[command(subcommand)]
    pass: Pass,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Pass {
    /// Resolve English common names through the GBIF backbone
    CommonNames {
        /// Input dataset CSV
        #[arg(short, long)]
        input: String,

        /// Output CSV for the enriched dataset
        #[arg(short, long)]
        output: String,

        /// Number of concurrent lookups
        #[arg(short, long, default_value_t = pipeline::DEFAULT_WORKERS)]
        workers: usize,

        /// Override the GBIF API base URL
        #[arg(long, env = "SDP_GBIF_URL")]
        gbif_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("sdp-enrich".to_string())
        .build();

    // Environment variables override individual fields; unset ones keep
    // the flag-derived values
    let log_config = log_config
        .clone()
        .with_env_overrides()
        .unwrap_or(log_config);

    init_logging(&log_config)?;

    match cli.pass {
        Pass::CommonNames {
            input,
            output,
            workers,
            gbif_url,
        } => {
            info!("Enriching dataset with common names");
            batch::run(&input, &output, workers, gbif_url.as_deref()).await?;
        },
    }

    info!("Enrichment complete");
    Ok(())
}
