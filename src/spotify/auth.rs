use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tracing::{debug, error, info};

use super::SpotifyClient;
use crate::{
    Res,
    config::Config,
    error::CatalogError,
    types::{AccessToken, TokenResponse},
};

impl SpotifyClient {
    /// Returns a bearer token, exchanging client credentials if none is cached.
    ///
    /// A cached token is returned without any network call. A freshly
    /// obtained token is cached and dropped again `expires_in - 60` seconds
    /// later, after which the next call performs a new exchange.
    ///
    /// Concurrent callers that all find the cache empty each run their own
    /// exchange.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Auth`] when the token endpoint answers with a
    ///   non-success status
    /// - [`CatalogError::Http`] on transport or decode failures
    ///
    /// Nothing is cached on failure.
    pub async fn get_access_token(&self) -> Res<String> {
        if let Some(token) = self.tokens.current_token().await {
            return Ok(token);
        }

        let token = request_client_credentials(&self.http, &self.config)
            .await
            .inspect_err(|e| error!(error = %e, "Error getting Spotify access token"))?;

        info!(
            expires_at = %token.expires_at(),
            invalidates_after_secs = token.invalidates_after().as_secs(),
            "obtained Spotify access token"
        );

        Ok(self.tokens.store(token).await)
    }

    /// Forgets the cached token so the next call performs a new exchange.
    pub async fn invalidate_token(&self) {
        self.tokens.clear().await;
    }
}

/// Exchanges the configured client credentials for an access token.
///
/// Sends `grant_type=client_credentials` as a form body with HTTP Basic
/// authorization built from `client_id:client_secret`.
pub async fn request_client_credentials(http: &Client, config: &Config) -> Res<AccessToken> {
    let credentials = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    debug!(url = %config.token_url, "requesting client-credentials token");
    let response = http
        .post(&config.token_url)
        .header(AUTHORIZATION, format!("Basic {}", credentials))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Auth(format!(
            "token endpoint returned {}",
            status
        )));
    }

    let json = response.json::<TokenResponse>().await?;
    Ok(AccessToken::from_response(json))
}
