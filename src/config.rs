//! Configuration management for the catalog client.
//!
//! Values come from environment variables, optionally seeded from `.env` files.
//! They are read once when a [`Config`] is built and never re-read afterwards.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`pixeltunes/.env`)
//! 4. Built-in defaults (endpoints and the placeholder secret)

use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Res, error::CatalogError};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Secret used when none is configured. Upstream authorization rejects it,
/// but the client stays constructible.
pub const PLACEHOLDER_CLIENT_SECRET: &str = "dummy_secret";

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/pixeltunes/.env`
/// - macOS: `~/Library/Application Support/pixeltunes/.env`
/// - Windows: `%LOCALAPPDATA%/pixeltunes/.env`
///
/// Variables already present in the process environment are never
/// overwritten. Missing files are skipped.
///
/// # Errors
///
/// Returns [`CatalogError::Config`] if a file exists but cannot be read or
/// parsed.
pub fn load_env() -> Res<()> {
    load_env_file(Path::new(".env"))?;
    load_env_file(&data_env_path())
}

fn load_env_file(path: &Path) -> Res<()> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| {
        CatalogError::Config(format!("cannot load {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), "loaded environment file");
    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pixeltunes/.env");
    path
}

/// Credentials and endpoints used by [`crate::spotify::SpotifyClient`].
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Web API base, without trailing slash.
    pub api_url: String,
    /// Token endpoint for the client-credentials exchange.
    pub token_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// A missing client id becomes an empty string: every authenticated call
    /// will fail later, but construction succeeds.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(CLIENT_ID_VAR).unwrap_or_default();
        let client_secret =
            lookup(CLIENT_SECRET_VAR).unwrap_or_else(|| PLACEHOLDER_CLIENT_SECRET.to_string());

        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let token_url = lookup(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());

        Self {
            client_id,
            client_secret,
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url,
        }
    }

    /// Explicit credentials with the default endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }
}
