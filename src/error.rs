use thiserror::Error;

/// Errors raised by the catalog client.
///
/// Only token acquisition surfaces these to callers directly. The data
/// operations on [`crate::spotify::SpotifyClient`] log them and degrade to an
/// empty result.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The token endpoint answered with a non-success status.
    #[error("Failed to get access token: {0}")]
    Auth(String),

    /// Transport failure, non-success status on a data endpoint, or an
    /// undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Environment file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, CatalogError::Auth(_))
    }
}
