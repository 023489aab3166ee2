use crate::{
    error::RecommendError,
    info,
    spotify::SpotifyCatalog,
    types::{
        AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatedPlaylist, Page, PlaylistItem,
        PlaylistSummary, Track,
    },
};

const PLAYLISTS_PAGE_LIMIT: u32 = 50;
const PLAYLIST_TRACKS_PAGE_LIMIT: u32 = 100;
const ADD_TRACKS_BATCH: usize = 100;

/// Retrieves one page of the current user's playlists.
///
/// # Arguments
///
/// * `cursor` - The `next` URL of a previous page, or `None` for the first page
///
/// # Returns
///
/// The page items together with the URL of the following page, if any.
pub async fn get_user_playlists(
    catalog: &SpotifyCatalog,
    cursor: Option<String>,
) -> Result<Page<PlaylistSummary>, RecommendError> {
    let api_url = match cursor {
        Some(next) => next,
        None => catalog.url(&format!(
            "/me/playlists?limit={limit}",
            limit = PLAYLISTS_PAGE_LIMIT
        )),
    };

    catalog.get_json::<Page<PlaylistSummary>>(&api_url).await
}

/// Retrieves every track of a playlist by following the `next` links.
///
/// Items without a track (removed from the catalog) and local files, which
/// carry no catalog id, are skipped.
pub async fn get_playlist_tracks(
    catalog: &SpotifyCatalog,
    playlist_id: &str,
) -> Result<Vec<Track>, RecommendError> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut api_url = Some(catalog.url(&format!(
        "/playlists/{id}/tracks?limit={limit}",
        id = playlist_id,
        limit = PLAYLIST_TRACKS_PAGE_LIMIT
    )));

    while let Some(url) = api_url {
        let page = catalog.get_json::<Page<PlaylistItem>>(&url).await?;
        tracks.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track)
                .filter_map(|track| track.into_track()),
        );
        api_url = page.next;
    }

    Ok(tracks)
}

/// Creates a playlist owned by `user_id`.
///
/// The description names the tool so generated playlists are recognisable in
/// the Spotify client.
pub async fn create(
    catalog: &SpotifyCatalog,
    user_id: &str,
    name: &str,
    public: bool,
) -> Result<CreatedPlaylist, RecommendError> {
    let api_url = catalog.url(&format!("/users/{user_id}/playlists", user_id = user_id));
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: format!("Generated by {}", env!("CARGO_PKG_NAME")),
        public,
        collaborative: false,
    };

    let response = catalog
        .client()
        .post(&api_url)
        .bearer_auth(catalog.token())
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<CreatedPlaylist>().await?)
}

/// Appends track URIs to a playlist in batches of at most 100.
pub async fn add_tracks(
    catalog: &SpotifyCatalog,
    playlist_id: &str,
    uris: &[String],
) -> Result<(), RecommendError> {
    let api_url = catalog.url(&format!(
        "/playlists/{playlist_id}/tracks",
        playlist_id = playlist_id
    ));

    for chunk in uris.chunks(ADD_TRACKS_BATCH) {
        let body = AddTrackToPlaylistRequest {
            uris: chunk.to_vec(),
        };

        catalog
            .client()
            .post(&api_url)
            .bearer_auth(catalog.token())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        info!("Added {} tracks to playlist {}", chunk.len(), playlist_id);
    }

    Ok(())
}
