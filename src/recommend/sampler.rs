use rand::{Rng, seq::IndexedRandom};

use crate::{
    catalog::{ALBUM_GROUPS, Catalog},
    error::RecommendError,
    info,
    types::Track,
};

pub const MAX_SAMPLED_ARTISTS: usize = 5;
pub const MAX_TRACKS_PER_ALBUM: usize = 2;

/// Picks random tracks from the discographies of a random subset of artists.
///
/// Up to five distinct artists are drawn without replacement. For each one a
/// single album is drawn and up to two distinct tracks of it are kept. Artists
/// without any album or single contribute nothing.
pub async fn sample<C: Catalog, R: Rng + ?Sized>(
    catalog: &C,
    artist_ids: &[String],
    rng: &mut R,
) -> Result<Vec<Track>, RecommendError> {
    let picked: Vec<&String> = artist_ids
        .choose_multiple(rng, MAX_SAMPLED_ARTISTS.min(artist_ids.len()))
        .collect();

    let mut tracks: Vec<Track> = Vec::new();
    for artist_id in picked {
        let albums = catalog.list_artist_albums(artist_id, ALBUM_GROUPS).await?;
        let Some(album) = albums.choose(rng) else {
            info!("Artist {} has no albums, skipping", artist_id);
            continue;
        };

        let album_tracks = catalog.list_album_tracks(&album.id).await?;
        tracks.extend(
            album_tracks
                .choose_multiple(rng, MAX_TRACKS_PER_ALBUM.min(album_tracks.len()))
                .cloned(),
        );
    }

    Ok(tracks)
}
