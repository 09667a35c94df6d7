//! SDP CLI - Main entry point

use clap::Parser;
use sdp_cli::{Cli, Commands, Config};
use sdp_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: log to console with debug level
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("sdp-cli".to_string())
            .build()
    } else {
        // Normal mode: only warnings and errors to console
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("sdp-cli".to_string())
            .build()
    };

    // Environment variables override individual fields; unset ones keep
    // the flag-derived values
    let log_config = log_config
        .clone()
        .with_env_overrides()
        .unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(&cli).await;

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> sdp_cli::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(ref dataset) = cli.dataset {
        config.dataset = dataset.clone();
    }

    match &cli.command {
        Commands::Search {
            query,
            group,
            status,
            format,
            no_interactive,
            limit,
            page,
        } => {
            sdp_cli::commands::search::run(
                query.clone(),
                group.clone(),
                status.clone(),
                format.clone(),
                *no_interactive,
                *limit,
                *page,
                &config,
            )
            .await
        }

        Commands::Show { name } => sdp_cli::commands::show::run(name.clone(), &config).await,
    }
}
