//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::SearchConfig;
use crate::decode::JsonPageDecoder;
use crate::engine::{EngineConfig, RunReport, SalaryEngine};
use crate::error::{Error, Result, ResultExt};
use crate::http::ListingsFetcher;
use crate::output::{render_json, render_pretty};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.search_config()?;

        match &self.cli.command {
            Commands::Run { .. } => {
                let report = Self::execute(&config).await?;
                let rendered = Self::render(self.cli.format, &config, &report)?;
                println!("{}", rendered.trim_end());
                Ok(())
            }
            Commands::ShowConfig { .. } => {
                print!("{}", config.to_yaml()?);
                Ok(())
            }
        }
    }

    /// Effective config: defaults, then the config file, then CLI overrides
    pub fn search_config(&self) -> Result<SearchConfig> {
        let base = match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                SearchConfig::from_file(path).map_err(|e| match e {
                    Error::FileNotFound { .. } => e,
                    other => Error::config(format!(
                        "Invalid config file '{}': {other}",
                        path.display()
                    )),
                })?
            }
            None => SearchConfig::default(),
        };

        let config = self.cli.command.search_args().apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Run one search with the given config
    pub async fn execute(config: &SearchConfig) -> Result<RunReport> {
        let fetcher = ListingsFetcher::from_config(config)
            .context("Failed to build HTTP client")?;
        let decoder = JsonPageDecoder::new();
        let mut engine =
            SalaryEngine::new(&config.currency).with_config(EngineConfig::from_search(config));

        info!(
            query = %config.query,
            currency = %config.currency,
            "Searching listings for '{}' with salary in {}",
            config.query,
            config.currency
        );

        let report = engine.run(&fetcher, &decoder).await;
        if report.outcome.is_aborted() {
            warn!("Run aborted, reporting partial results");
        }
        Ok(report)
    }

    /// Render a report in the requested format
    pub fn render(format: OutputFormat, config: &SearchConfig, report: &RunReport) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(render_pretty(report)),
            OutputFormat::Json => render_json(&config.query, report),
        }
    }
}
