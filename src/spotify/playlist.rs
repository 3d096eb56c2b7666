use tracing::{debug, error};

use super::SpotifyClient;
use crate::{
    Res,
    types::{PlaylistTracksResponse, Track},
};

impl SpotifyClient {
    /// Lists the tracks of a playlist via `GET /playlists/{id}/tracks`.
    ///
    /// Only the first page is read. Entries without a track are skipped.
    /// Failures are logged and yield an empty list.
    pub async fn get_playlist_tracks(&self, playlist_id: &str) -> Vec<Track> {
        self.try_get_playlist_tracks(playlist_id)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, playlist_id, "Error getting playlist tracks");
                Vec::new()
            })
    }

    async fn try_get_playlist_tracks(&self, playlist_id: &str) -> Res<Vec<Track>> {
        let token = self.get_access_token().await?;

        debug!(playlist_id, "fetching playlist tracks");
        let api_url = self.api_url(&format!("/playlists/{}/tracks", playlist_id));
        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<PlaylistTracksResponse>().await?;
        Ok(json.items.into_iter().filter_map(|item| item.track).collect())
    }
}
