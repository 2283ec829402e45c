//! PokeAPI client backed by the response cache
//!
//! Every request goes through `fetch_bytes`, which consults the cache before
//! touching the network and stores raw response bodies before decoding them.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::{LocationArea, LocationPage, PokemonInfo};
use crate::cache::Cache;

/// Base URL for the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching PokeAPI data
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Failed to parse JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the PokeAPI
///
/// The cache is injected so that callers (and tests) decide its TTL and
/// lifetime.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http_client: Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for the public PokeAPI
    pub fn new(cache: Cache) -> Self {
        Self::with_base_url(cache, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL
    pub fn with_base_url(cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: Client::new(),
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The cache this client reads through
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of location areas
    pub fn locations_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches one page of location areas from a page URL
    pub async fn get_locations(&self, url: &str) -> Result<LocationPage, ApiError> {
        self.fetch_json(url).await
    }

    /// Fetches a location area by name
    pub async fn get_location_area(&self, name: &str) -> Result<LocationArea, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a Pokemon by name
    pub async fn get_pokemon(&self, name: &str) -> Result<PokemonInfo, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns the raw body for `url`, from the cache when possible
    ///
    /// # Behavior
    /// - A cache hit returns immediately without network I/O
    /// - On a miss the body is fetched and cached before it is returned
    /// - Non-2xx responses are errors and are not cached
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        if let Some(body) = self.cache.get(url) {
            return Ok(body);
        }

        debug!(url, "fetching from PokeAPI");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());

        Ok(body)
    }
}
