use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Seconds shaved off the reported token lifetime before it is dropped.
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Track {
    /// Artist names joined for display, e.g. `"Daft Punk, Pharrell Williams"`.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn cover_url(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistItem {
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistTracks {
    pub total: u64,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    pub tracks: PlaylistTracks,
}

// Response envelopes

/// One page of results. The API may put `null` in place of an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<Option<T>>,
}

impl<T> Page<T> {
    /// Entries of the page, `null` ones dropped.
    pub fn into_items(self) -> Vec<T> {
        self.items.into_iter().flatten().collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub playlists: Page<Playlist>,
}

/// Entry of `GET /playlists/{id}/tracks`. `track` is null for removed or
/// local-only entries.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackEntry {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// Bearer token obtained through the client-credentials flow.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn from_response(res: TokenResponse) -> Self {
        Self {
            access_token: res.access_token,
            expires_in: res.expires_in,
            obtained_at: Utc::now(),
        }
    }

    /// Time after which the cached token is dropped.
    pub fn invalidates_after(&self) -> Duration {
        Duration::from_secs(self.expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS))
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.obtained_at + chrono::Duration::seconds(self.expires_in as i64)
    }
}
