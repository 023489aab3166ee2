use chrono::{DateTime, Local};

use crate::{
    catalog::Catalog,
    error::RecommendError,
    types::{CreatedPlaylist, Track},
};

/// Name of the generated playlist, e.g.
/// `Enhanced Recommendations based on roadtrip - 2024-05-01 18:30:00`.
pub fn playlist_name(source_name: &str, at: DateTime<Local>) -> String {
    format!(
        "Enhanced Recommendations based on {} - {}",
        source_name,
        at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Creates a private playlist and fills it with `tracks`.
///
/// When appending fails the freshly created playlist is left behind as is.
pub async fn emit<C: Catalog>(
    catalog: &C,
    user_id: &str,
    name: &str,
    tracks: &[Track],
) -> Result<CreatedPlaylist, RecommendError> {
    let playlist = catalog.create_playlist(user_id, name, false).await?;

    let uris: Vec<String> = tracks.iter().map(|t| t.uri.clone()).collect();
    if !uris.is_empty() {
        catalog.add_tracks_to_playlist(&playlist.id, &uris).await?;
    }

    Ok(playlist)
}
