//! Command-line interface for the legal-scout binary.

pub mod categories_cmd;
pub mod output;
pub mod scrape_cmd;
pub mod serve_cmd;

use clap::{Parser, Subcommand};
use legal_scout::Strategy;

#[derive(Debug, Parser)]
#[command(
    name = "legal-scout",
    version,
    about = "Find and classify a website's legal documents"
)]
pub struct Cli {
    /// Debug-level logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "LEGAL_SCOUT_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan one site and print its report.
    Scrape {
        /// Site root, e.g. example.com or https://example.com
        url: String,

        /// heuristic or content (default from LEGAL_SCOUT_STRATEGY / ANTHROPIC_API_KEY).
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Print only the JSON report.
        #[arg(long)]
        json: bool,
    },

    /// Run the webhook server.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,
    },

    /// List the document categories and their patterns.
    Categories {
        #[arg(long)]
        json: bool,
    },
}
