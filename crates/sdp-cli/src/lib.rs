//! SDP CLI Library
//!
//! Command-line interface for exploring a species dataset.
//!
//! # Overview
//!
//! The SDP CLI offers two views over a curated species CSV:
//!
//! - **Search**: Filter and browse species by name, group, or Red List
//!   status (`sdp search`)
//! - **Show**: Detail view for one species with live conservation data
//!   (`sdp show`)
//!
//! Conservation details come from the IUCN Red List API (requires a token
//! in `SDP_REDLIST_TOKEN`) and species overviews from Wikipedia's REST
//! summary endpoint. Both lookups degrade to fixed fallback text when the
//! services are unavailable, so the commands never fail on network errors.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};

/// SDP - Species Discovery Platform
#[derive(Parser, Debug)]
#[command(name = "sdp")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the species dataset CSV
    #[arg(long, env = "SDP_DATASET", global = true)]
    pub dataset: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and browse the species dataset
    Search {
        /// Search terms (matched against scientific and common names)
        query: Vec<String>,

        /// Filter by taxonomic group (e.g. Mammals, Birds) or raw class
        #[arg(short, long)]
        group: Vec<String>,

        /// Filter by Red List status code or label (e.g. EN, Endangered)
        #[arg(short, long)]
        status: Vec<String>,

        /// Output format (interactive, table, compact, json)
        #[arg(short, long, default_value = "interactive")]
        format: String,

        /// Disable interactive mode
        #[arg(long)]
        no_interactive: bool,

        /// Results per page
        #[arg(short, long, default_value = "12")]
        limit: usize,

        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show conservation details for one species
    Show {
        /// Species name (scientific or common)
        name: Vec<String>,
    },
}
