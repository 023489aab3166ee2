//! # Spotify Integration Module
//!
//! Spotify Web API implementation of the [`Catalog`] capability. All requests
//! are authenticated with the bearer token the [`SpotifyCatalog`] was built
//! with; nothing here stores or refreshes tokens.
//!
//! ## Layout
//!
//! ```text
//! recommend pipeline
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyCatalog
//!     ├── playlists (user playlists, playlist tracks, create, append)
//!     ├── artists   (artist albums, album tracks)
//!     └── search    (free-text track search)
//!          ↓
//! reqwest → Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id
//! - `GET /me/playlists` - User playlists, followed through `next` links
//! - `GET /playlists/{playlist_id}/tracks` - Playlist tracks, all pages
//! - `GET /artists/{id}/albums` - Artist discography filtered by group
//! - `GET /albums/{id}/tracks` - Album track listing
//! - `GET /search` - Track search
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//!
//! ## Error Handling
//!
//! Every non-2xx response and every transport failure becomes
//! [`RecommendError::Service`]. Requests are never retried; the pipeline
//! aborts on the first failure.

pub mod artists;
pub mod playlists;
pub mod search;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    catalog::Catalog,
    error::RecommendError,
    types::{Album, CreatedPlaylist, CurrentUser, Page, PlaylistSummary, Track},
};

/// Catalog session bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyCatalog {
    client: Client,
    api_url: String,
    token: String,
}

impl SpotifyCatalog {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{uri}{path}", uri = self.api_url, path = path)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// GETs an absolute URL and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RecommendError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

impl Catalog for SpotifyCatalog {
    async fn current_user_id(&self) -> Result<String, RecommendError> {
        let user: CurrentUser = self.get_json(&self.url("/me")).await?;
        Ok(user.id)
    }

    async fn list_user_playlists(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<PlaylistSummary>, RecommendError> {
        playlists::get_user_playlists(self, cursor).await
    }

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, RecommendError> {
        playlists::get_playlist_tracks(self, playlist_id).await
    }

    async fn list_artist_albums(
        &self,
        artist_id: &str,
        types: &[&str],
    ) -> Result<Vec<Album>, RecommendError> {
        artists::get_artist_albums(self, artist_id, types).await
    }

    async fn list_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, RecommendError> {
        artists::get_album_tracks(self, album_id).await
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, RecommendError> {
        search::search_tracks(self, query, limit).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatedPlaylist, RecommendError> {
        playlists::create(self, user_id, name, public).await
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RecommendError> {
        playlists::add_tracks(self, playlist_id, uris).await
    }
}
