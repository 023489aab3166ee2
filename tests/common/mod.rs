#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use sporlrec::{
    catalog::Catalog,
    error::RecommendError,
    types::{Album, ArtistRef, CreatedPlaylist, Page, PlaylistSummary, Track},
};

// Helper function to create a test track with a single artist
pub fn track(id: &str, name: &str, artist_id: &str, artist_name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artists: vec![ArtistRef {
            id: artist_id.to_string(),
            name: artist_name.to_string(),
        }],
    }
}

pub fn album(id: &str) -> Album {
    Album {
        id: id.to_string(),
        name: format!("Album {}", id),
    }
}

pub fn summary(id: &str, name: &str) -> PlaylistSummary {
    PlaylistSummary {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// In-memory catalog. Playlist pages are addressed by their index, which is
/// also what `next` points to.
#[derive(Default)]
pub struct FakeCatalog {
    pub user_id: String,
    pub playlist_pages: Vec<Vec<PlaylistSummary>>,
    pub playlist_tracks: HashMap<String, Vec<Track>>,
    pub albums: HashMap<String, Vec<Album>>,
    pub album_tracks: HashMap<String, Vec<Track>>,
    pub search: HashMap<String, Vec<Track>>,
    pub fail_search: bool,
    pub fail_add: bool,
    pub pages_requested: Mutex<Vec<Option<String>>>,
    pub album_requests: Mutex<Vec<String>>,
    pub searches: Mutex<Vec<(String, u32)>>,
    pub created: Mutex<Vec<(String, String, bool)>>,
    pub added: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeCatalog {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_playlist(mut self, id: &str, name: &str, tracks: Vec<Track>) -> Self {
        if self.playlist_pages.is_empty() {
            self.playlist_pages.push(Vec::new());
        }
        if let Some(last) = self.playlist_pages.last_mut() {
            last.push(summary(id, name));
        }
        self.playlist_tracks.insert(id.to_string(), tracks);
        self
    }

    pub fn with_album(mut self, artist_id: &str, album_id: &str, tracks: Vec<Track>) -> Self {
        self.albums
            .entry(artist_id.to_string())
            .or_default()
            .push(album(album_id));
        self.album_tracks.insert(album_id.to_string(), tracks);
        self
    }

    pub fn with_search(mut self, query: &str, results: Vec<Track>) -> Self {
        self.search.insert(query.to_string(), results);
        self
    }

    pub fn created(&self) -> Vec<(String, String, bool)> {
        self.created.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<(String, Vec<String>)> {
        self.added.lock().unwrap().clone()
    }
}

impl Catalog for FakeCatalog {
    async fn current_user_id(&self) -> Result<String, RecommendError> {
        Ok(self.user_id.clone())
    }

    async fn list_user_playlists(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<PlaylistSummary>, RecommendError> {
        self.pages_requested.lock().unwrap().push(cursor.clone());
        let index = match cursor {
            Some(c) => c
                .parse::<usize>()
                .map_err(|e| RecommendError::Service(e.to_string()))?,
            None => 0,
        };
        let items = self.playlist_pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < self.playlist_pages.len()).then(|| (index + 1).to_string());
        Ok(Page { items, next })
    }

    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, RecommendError> {
        self.playlist_tracks
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| RecommendError::Service(format!("404 playlist {}", playlist_id)))
    }

    async fn list_artist_albums(
        &self,
        artist_id: &str,
        types: &[&str],
    ) -> Result<Vec<Album>, RecommendError> {
        assert_eq!(types, &["album", "single"]);
        self.album_requests
            .lock()
            .unwrap()
            .push(artist_id.to_string());
        Ok(self.albums.get(artist_id).cloned().unwrap_or_default())
    }

    async fn list_album_tracks(&self, album_id: &str) -> Result<Vec<Track>, RecommendError> {
        Ok(self.album_tracks.get(album_id).cloned().unwrap_or_default())
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, RecommendError> {
        if self.fail_search {
            return Err(RecommendError::Service("503 Service Unavailable".to_string()));
        }
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        Ok(self.search.get(query).cloned().unwrap_or_default())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        public: bool,
    ) -> Result<CreatedPlaylist, RecommendError> {
        let mut created = self.created.lock().unwrap();
        created.push((user_id.to_string(), name.to_string(), public));
        Ok(CreatedPlaylist {
            id: format!("new-{}", created.len()),
            name: name.to_string(),
        })
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RecommendError> {
        if self.fail_add {
            return Err(RecommendError::Service("500 Internal Server Error".to_string()));
        }
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }
}
