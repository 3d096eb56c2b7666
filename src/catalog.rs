use async_trait::async_trait;

use crate::{
    Res,
    spotify::{DEFAULT_LIMIT, SpotifyClient},
    types::{Playlist, Track},
};

/// Source of the data shown by [`crate::view::CatalogView`].
///
/// [`SpotifyClient`] never returns `Err` here because its data operations
/// already degrade to empty results. Other implementations may fail, and the
/// view reports those failures.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn search(&self, query: &str) -> Res<Vec<Track>>;

    async fn retro_gaming_mix(&self) -> Res<Vec<Track>>;

    async fn featured_playlists(&self) -> Res<Vec<Playlist>>;

    async fn playlist_tracks(&self, playlist_id: &str) -> Res<Vec<Track>>;
}

#[async_trait]
impl TrackCatalog for SpotifyClient {
    async fn search(&self, query: &str) -> Res<Vec<Track>> {
        Ok(self.search_tracks(query, DEFAULT_LIMIT).await)
    }

    async fn retro_gaming_mix(&self) -> Res<Vec<Track>> {
        Ok(self.search_retro_gaming_tracks().await)
    }

    async fn featured_playlists(&self) -> Res<Vec<Playlist>> {
        Ok(self.get_featured_playlists(DEFAULT_LIMIT).await)
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Res<Vec<Track>> {
        Ok(self.get_playlist_tracks(playlist_id).await)
    }
}
