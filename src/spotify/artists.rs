use crate::{
    error::RecommendError,
    spotify::SpotifyCatalog,
    types::{Album, Page, Track},
};

const ALBUMS_LIMIT: u32 = 50;
const ALBUM_TRACKS_LIMIT: u32 = 50;

/// Retrieves an artist's releases restricted to the given album groups.
///
/// Only the first page (up to 50 releases) is requested; the sampler picks a
/// single album at random, so a bounded slice of the discography is enough.
///
/// # Arguments
///
/// * `artist_id` - Spotify ID of the artist
/// * `types` - Album groups to include, e.g. `["album", "single"]`
pub async fn get_artist_albums(
    catalog: &SpotifyCatalog,
    artist_id: &str,
    types: &[&str],
) -> Result<Vec<Album>, RecommendError> {
    let api_url = catalog.url(&format!(
        "/artists/{id}/albums?include_groups={include_groups}&limit={limit}",
        id = artist_id,
        include_groups = types.join(","),
        limit = ALBUMS_LIMIT
    ));

    let page = catalog.get_json::<Page<Album>>(&api_url).await?;
    Ok(page.items)
}

/// Retrieves the full track listing of an album, following the `next` links.
pub async fn get_album_tracks(
    catalog: &SpotifyCatalog,
    album_id: &str,
) -> Result<Vec<Track>, RecommendError> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut api_url = Some(catalog.url(&format!(
        "/albums/{id}/tracks?limit={limit}",
        id = album_id,
        limit = ALBUM_TRACKS_LIMIT
    )));

    while let Some(url) = api_url {
        let page = catalog.get_json::<Page<Track>>(&url).await?;
        tracks.extend(page.items);
        api_url = page.next;
    }

    Ok(tracks)
}
