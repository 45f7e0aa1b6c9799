//! CLI commands and argument parsing

use crate::config::SearchConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Average advertised salary for a job search
#[derive(Parser, Debug)]
#[command(name = "salary-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page and report the average salary
    Run {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the effective configuration as YAML
    ShowConfig {
        #[command(flatten)]
        search: SearchArgs,
    },
}

impl Commands {
    /// Search overrides of the command
    pub fn search_args(&self) -> &SearchArgs {
        match self {
            Commands::Run { search } | Commands::ShowConfig { search } => search,
        }
    }
}

/// Overrides applied on top of the config file
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Currency code to keep (case-sensitive, e.g. RUR)
    #[arg(long)]
    pub currency: Option<String>,

    /// Listings per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Pause between page requests, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Listings endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// HTTP request timeout, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl SearchArgs {
    /// Apply the overrides that were given
    pub fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(query) = &self.query {
            config = config.with_query(query);
        }
        if let Some(currency) = &self.currency {
            config = config.with_currency(currency);
        }
        if let Some(page_size) = self.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_request_delay(Duration::from_millis(delay_ms));
        }
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(timeout_secs));
        }
        config
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable results block
    Pretty,
    /// JSON report
    Json,
}
