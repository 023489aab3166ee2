//! The catalog capability the recommendation pipeline is written against.
//!
//! The pipeline never talks HTTP itself. It receives a [`Catalog`] value that
//! already carries whatever credentials are needed, so every run is explicit
//! about which account and session it acts for. [`crate::spotify::SpotifyCatalog`]
//! is the production implementation; tests provide in-memory ones.

use std::future::Future;

use crate::{
    error::RecommendError,
    types::{Album, CreatedPlaylist, Page, PlaylistSummary, Track},
};

/// Album groups requested when browsing an artist's discography.
pub const ALBUM_GROUPS: &[&str] = &["album", "single"];

pub trait Catalog {
    /// Id of the user the catalog session belongs to.
    fn current_user_id(&self) -> impl Future<Output = Result<String, RecommendError>> + Send;

    /// One page of the user's playlists. `cursor` is the `next` value of the
    /// previous page, `None` for the first page.
    fn list_user_playlists(
        &self,
        cursor: Option<String>,
    ) -> impl Future<Output = Result<Page<PlaylistSummary>, RecommendError>> + Send;

    /// Every track of a playlist, across all pages.
    fn list_playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, RecommendError>> + Send;

    fn list_artist_albums(
        &self,
        artist_id: &str,
        types: &[&str],
    ) -> impl Future<Output = Result<Vec<Album>, RecommendError>> + Send;

    fn list_album_tracks(
        &self,
        album_id: &str,
    ) -> impl Future<Output = Result<Vec<Track>, RecommendError>> + Send;

    /// Ranked track matches for a free-text query, at most `limit` of them.
    fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>, RecommendError>> + Send;

    fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> impl Future<Output = Result<CreatedPlaylist, RecommendError>> + Send;

    fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = Result<(), RecommendError>> + Send;
}
