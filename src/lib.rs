//! Retro Gaming Music Catalog Library
//!
//! Client-side integration with the Spotify Web API. It authenticates with
//! the client-credentials flow, searches and browses the catalog, and exposes
//! results through a view-state adapter that a UI layer can render.
//!
//! # Modules
//!
//! - `catalog` - The `TrackCatalog` trait consumed by the view adapter
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the client
//! - `management` - Access token caching and invalidation
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Duration formatting, deduplication and the curated queries
//! - `view` - Loading/error/result state for UI code
//!
//! # Example
//!
//! ```
//! use pixeltunes::{config, spotify::SpotifyClient, view::CatalogView};
//!
//! #[tokio::main]
//! async fn main() -> pixeltunes::Res<()> {
//!     config::load_env()?;
//!     let view = CatalogView::new(SpotifyClient::from_env());
//!     view.load_retro_gaming_tracks().await;
//!     for track in view.tracks() {
//!         println!("{} - {}", track.name, view.format_duration(track.duration_ms));
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod view;

pub use catalog::TrackCatalog;
pub use error::CatalogError;
pub use spotify::SpotifyClient;
pub use view::{CatalogView, ViewState};

/// A convenient Result type alias for operations that may fail.
pub type Res<T> = std::result::Result<T, CatalogError>;
