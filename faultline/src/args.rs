use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Faultline error renderer
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Classify errors and render them as HTTP responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "FAULTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log filter
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a remote service error and print the response it renders to
    Render {
        /// Error string in `<prefix>-<json-payload>` form
        error: String,
    },
    /// Print the status code used for each error category
    Statuses,
}
