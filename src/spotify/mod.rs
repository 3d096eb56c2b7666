//! # Spotify Integration Module
//!
//! Thin client over the Spotify Web API using the client-credentials flow.
//! [`SpotifyClient`] owns the HTTP client, the configuration and the cached
//! access token; the submodules add the operations:
//!
//! ```text
//! SpotifyClient
//!     ├── auth      POST /api/token (client credentials, cached bearer token)
//!     ├── search    GET  /search?type=track, curated retro gaming mix
//!     ├── browse    GET  /browse/featured-playlists
//!     └── playlist  GET  /playlists/{id}/tracks
//! ```
//!
//! ## Error Handling
//!
//! Token acquisition propagates failures as [`crate::error::CatalogError`].
//! Data operations never fail: any error is logged and turned into an empty
//! result, so "no results" and "request failed" look the same to callers.
//!
//! ## Concurrency
//!
//! Requests are not coordinated. Two calls that both find the token cache
//! empty will each run their own token exchange; the last one stored wins.

pub mod auth;
pub mod browse;
pub mod playlist;
pub mod search;

use reqwest::Client;
use tracing::warn;

use crate::{config::Config, management::TokenManager, utils};

/// Page size used when callers do not pass one.
pub const DEFAULT_LIMIT: u32 = 20;

pub struct SpotifyClient {
    http: Client,
    config: Config,
    tokens: TokenManager,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Client configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn with_http_client(http: Client, config: Config) -> Self {
        if config.client_id.is_empty() {
            warn!("Spotify client id not found in environment variables");
        }

        Self {
            http,
            config,
            tokens: TokenManager::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn format_duration(&self, duration_ms: u64) -> String {
        utils::format_duration(duration_ms)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }
}
