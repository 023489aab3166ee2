use crate::{
    catalog::Catalog,
    error::RecommendError,
    types::{PlaylistSummary, SourcePlaylist},
};

/// Trimmed, lower-cased form used to compare playlist names.
pub fn playlist_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Walks the user's playlists page by page until one matches `name`.
///
/// Matching ignores case and surrounding whitespace. The walk stops at the
/// first match or when the service reports no further page.
pub async fn find_playlist<C: Catalog>(
    catalog: &C,
    name: &str,
) -> Result<PlaylistSummary, RecommendError> {
    let wanted = playlist_key(name);
    let mut cursor: Option<String> = None;

    loop {
        let page = catalog.list_user_playlists(cursor).await?;

        if let Some(found) = page
            .items
            .into_iter()
            .find(|p| playlist_key(&p.name) == wanted)
        {
            return Ok(found);
        }

        match page.next {
            Some(next) => cursor = Some(next),
            None => return Err(RecommendError::NotFound(wanted)),
        }
    }
}

/// Resolves a playlist by name and loads its full track listing.
pub async fn resolve<C: Catalog>(
    catalog: &C,
    name: &str,
) -> Result<SourcePlaylist, RecommendError> {
    let summary = find_playlist(catalog, name).await?;
    let tracks = catalog.list_playlist_tracks(&summary.id).await?;

    Ok(SourcePlaylist {
        id: summary.id,
        name: summary.name,
        tracks,
    })
}
