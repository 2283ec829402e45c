//! Command-line interface parsing for the Pokedex REPL
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `StartupConfig`.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;

/// Default lifetime of cached API responses, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The cache TTL must be positive
    #[error("Invalid cache TTL: {0}. The TTL must be at least 1 second")]
    InvalidTtl(u64),

    /// The API URL is not an http(s) URL
    #[error("Invalid API URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidApiUrl(String),
}

/// Pokedex - explore the PokeAPI and catch Pokemon from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Explore locations, catch Pokemon and build your Pokedex")]
#[command(version)]
pub struct Cli {
    /// How long API responses stay cached, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl: u64,

    /// Base URL of the PokeAPI
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// TTL for the response cache
    pub cache_ttl: Duration,
    /// PokeAPI base URL without a trailing slash
    pub api_url: String,
    /// Verbosity level from repeated -v flags
    pub verbosity: u8,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            api_url: DEFAULT_BASE_URL.to_string(),
            verbosity: 0,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the TTL is zero or the URL is not http(s)
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.cache_ttl == 0 {
            return Err(CliError::InvalidTtl(cli.cache_ttl));
        }

        let api_url = cli.api_url.trim();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CliError::InvalidApiUrl(cli.api_url.clone()));
        }

        Ok(StartupConfig {
            cache_ttl: Duration::from_secs(cli.cache_ttl),
            api_url: api_url.trim_end_matches('/').to_string(),
            verbosity: cli.verbose,
        })
    }
}
