//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for browsing and editing the product catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and edit the product catalog")]
#[command(version)]
pub struct Cli {
    /// Root URL of the catalog server
    #[arg(
        long = "api-url",
        env = "CATALOG_API_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        env = "CATALOG_TIMEOUT_SECS",
        default_value_t = 30,
        global = true
    )]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
