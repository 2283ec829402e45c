//! Pokedex CLI - explore the PokeAPI from an interactive prompt
//!
//! Browse location areas, see which Pokemon live there, try to catch them and
//! inspect the ones you caught. API responses are cached in memory for the
//! configured TTL.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use pokedex::api::PokeApiClient;
use pokedex::cache::Cache;
use pokedex::cli::{Cli, StartupConfig};
use pokedex::logging;
use pokedex::repl::{self, Repl};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    logging::init(config.verbosity);
    info!(
        api_url = %config.api_url,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "starting pokedex"
    );

    let cache = Cache::new(config.cache_ttl);
    let client = PokeApiClient::with_base_url(cache, config.api_url);
    let mut repl = Repl::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl::run(&mut repl, stdin, &mut stdout).await?;

    Ok(ExitCode::SUCCESS)
}
