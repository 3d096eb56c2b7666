use tracing::{debug, error};

use super::SpotifyClient;
use crate::{
    Res,
    types::{FeaturedPlaylistsResponse, Playlist},
};

impl SpotifyClient {
    /// Lists featured playlists via `GET /browse/featured-playlists?limit=<limit>`.
    ///
    /// `null` entries are skipped. Failures are logged and yield an empty list.
    pub async fn get_featured_playlists(&self, limit: u32) -> Vec<Playlist> {
        self.try_get_featured_playlists(limit)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Error getting featured playlists");
                Vec::new()
            })
    }

    async fn try_get_featured_playlists(&self, limit: u32) -> Res<Vec<Playlist>> {
        let token = self.get_access_token().await?;

        debug!(limit, "fetching featured playlists");
        let api_url = self.api_url(&format!("/browse/featured-playlists?limit={}", limit));
        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<FeaturedPlaylistsResponse>().await?;
        Ok(json.playlists.into_items())
    }
}
