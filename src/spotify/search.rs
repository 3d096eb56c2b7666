use tracing::{debug, error};

use super::SpotifyClient;
use crate::{
    Res,
    types::{SearchTracksResponse, Track},
    utils::{self, RETRO_GAMING_MIX_SIZE, RETRO_GAMING_QUERIES, RETRO_GAMING_QUERY_LIMIT},
};

impl SpotifyClient {
    /// Searches the catalog for tracks matching `query`.
    ///
    /// Issues `GET /search?q=<query>&type=track&limit=<limit>` with `query`
    /// percent-encoded (spaces as `%20`). `null` entries are skipped. Any
    /// failure, including token acquisition, is logged and yields an empty list.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Vec<Track> {
        self.try_search_tracks(query, limit)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, query, "Error searching tracks");
                Vec::new()
            })
    }

    async fn try_search_tracks(&self, query: &str, limit: u32) -> Res<Vec<Track>> {
        let token = self.get_access_token().await?;

        debug!(query, limit, "searching tracks");
        let api_url = self.api_url(&format!(
            "/search?q={q}&type=track&limit={limit}",
            q = urlencoding::encode(query),
            limit = limit
        ));
        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchTracksResponse>().await?;
        Ok(json.tracks.into_items())
    }

    /// Builds the retro gaming mix.
    ///
    /// Runs each of [`RETRO_GAMING_QUERIES`] one after another with a limit of
    /// [`RETRO_GAMING_QUERY_LIMIT`], concatenates the results in query order,
    /// keeps the first occurrence of every track id and returns at most
    /// [`RETRO_GAMING_MIX_SIZE`] tracks.
    pub async fn search_retro_gaming_tracks(&self) -> Vec<Track> {
        let mut all_tracks = Vec::new();

        for query in RETRO_GAMING_QUERIES {
            let tracks = self.search_tracks(query, RETRO_GAMING_QUERY_LIMIT).await;
            all_tracks.extend(tracks);
        }

        utils::remove_duplicate_tracks(&mut all_tracks);
        all_tracks.truncate(RETRO_GAMING_MIX_SIZE);
        all_tracks
    }
}
