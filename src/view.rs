//! View-state adapter.
//!
//! [`CatalogView`] wraps a [`TrackCatalog`] and mirrors each of its
//! operations into a [`ViewState`] that UI code can read or subscribe to.
//! Every action follows the same lifecycle:
//!
//! 1. `is_loading = true`, `error = None`, before the catalog is touched
//! 2. the catalog operation runs
//! 3. on success the matching list is replaced wholesale, on failure a fixed
//!    message is stored and the underlying error is logged
//! 4. `is_loading = false`, whatever happened (also if the action is dropped)
//!
//! Overlapping actions are not serialized: each one writes its own result
//! when it completes.

use std::future::Future;

use tokio::sync::watch;
use tracing::error;

use crate::{
    Res,
    catalog::TrackCatalog,
    types::{Playlist, Track},
    utils,
};

pub const SEARCH_TRACKS_ERROR: &str = "Error searching tracks";
pub const RETRO_GAMING_TRACKS_ERROR: &str = "Error loading retro gaming tracks";
pub const FEATURED_PLAYLISTS_ERROR: &str = "Error loading featured playlists";
pub const PLAYLIST_TRACKS_ERROR: &str = "Error loading playlist tracks";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub is_loading: bool,
    /// One human-readable sentence per failed action, never raw error details.
    pub error: Option<String>,
    pub tracks: Vec<Track>,
    pub playlists: Vec<Playlist>,
}

pub struct CatalogView<C> {
    catalog: C,
    state: watch::Sender<ViewState>,
}

/// Clears the loading flag when an action ends, however it ends.
struct LoadingGuard<'a>(&'a watch::Sender<ViewState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|s| s.is_loading = false);
    }
}

impl<C: TrackCatalog> CatalogView<C> {
    pub fn new(catalog: C) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.state.borrow().tracks.clone()
    }

    pub fn playlists(&self) -> Vec<Playlist> {
        self.state.borrow().playlists.clone()
    }

    pub fn format_duration(&self, duration_ms: u64) -> String {
        utils::format_duration(duration_ms)
    }

    pub async fn search_tracks(&self, query: &str) {
        self.run(SEARCH_TRACKS_ERROR, self.catalog.search(query), |s, tracks| {
            s.tracks = tracks
        })
        .await
    }

    pub async fn load_retro_gaming_tracks(&self) {
        self.run(
            RETRO_GAMING_TRACKS_ERROR,
            self.catalog.retro_gaming_mix(),
            |s, tracks| s.tracks = tracks,
        )
        .await
    }

    pub async fn load_featured_playlists(&self) {
        self.run(
            FEATURED_PLAYLISTS_ERROR,
            self.catalog.featured_playlists(),
            |s, playlists| s.playlists = playlists,
        )
        .await
    }

    pub async fn load_playlist_tracks(&self, playlist_id: &str) {
        self.run(
            PLAYLIST_TRACKS_ERROR,
            self.catalog.playlist_tracks(playlist_id),
            |s, tracks| s.tracks = tracks,
        )
        .await
    }

    async fn run<T, F, A>(&self, message: &'static str, action: F, apply: A)
    where
        F: Future<Output = Res<T>>,
        A: FnOnce(&mut ViewState, T),
    {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
        let _loading = LoadingGuard(&self.state);

        match action.await {
            Ok(value) => self.state.send_modify(|s| apply(s, value)),
            Err(e) => {
                error!(error = %e, "{}", message);
                self.state.send_modify(|s| s.error = Some(message.to_string()));
            }
        }
    }
}
