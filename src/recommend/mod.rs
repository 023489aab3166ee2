//! # Recommendation Pipeline
//!
//! Turns one of the user's playlists into a new playlist of related songs. A
//! run is a single left-to-right pass over these stages:
//!
//! ```text
//! resolver  → find the source playlist and load its tracks
//! sampler   → random tracks from random albums of up to 5 source artists
//! expander  → catalog search for every (artist, track) pair of the source
//! filter    → drop source tracks and source songs, shuffle, keep 20
//! emitter   → create a private playlist and append the tracks
//! ```
//!
//! [`normalize`] decides when two titles are the same song and is used by the
//! expander and the filter.
//!
//! Catalog calls are awaited one after another and nothing is retried: the
//! first failing call aborts the run. Randomness comes from the `rng` argument
//! so tests can pass a seeded generator.
//!
//! Sampled tracks are not deduplicated against each other or against search
//! results by normalized name, only against the source playlist. The output can
//! therefore contain two versions of a song when both came from the sampler.

pub mod emitter;
pub mod expander;
pub mod filter;
pub mod normalize;
pub mod resolver;
pub mod sampler;

pub use normalize::normalize;

use chrono::Local;
use rand::Rng;

use crate::{
    catalog::Catalog,
    error::RecommendError,
    info,
    types::{CreatedPlaylist, SourcePlaylist, Track},
    warning,
};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Trimmed, lower-cased name the user asked for.
    pub source_name: String,
    pub playlist: CreatedPlaylist,
    pub tracks: Vec<Track>,
}

/// Builds the recommendation list for an already resolved source playlist.
///
/// An empty source yields an empty list without touching the catalog.
pub async fn recommend<C: Catalog, R: Rng + ?Sized>(
    catalog: &C,
    source: &SourcePlaylist,
    rng: &mut R,
) -> Result<Vec<Track>, RecommendError> {
    if source.is_empty() {
        warning!("Playlist '{}' has no tracks to build on", source.name);
        return Ok(Vec::new());
    }

    let artist_ids = source.artist_ids();
    info!(
        "Sampling albums of {} out of {} artists",
        sampler::MAX_SAMPLED_ARTISTS.min(artist_ids.len()),
        artist_ids.len()
    );
    let mut candidates = sampler::sample(catalog, &artist_ids, rng).await?;

    let pairs = source.artist_track_pairs();
    info!("Searching the catalog for {} artist/track pairs", pairs.len());
    candidates.extend(expander::expand(catalog, &pairs).await?);

    let total = candidates.len();
    let tracks = filter::finalize(candidates, &source.tracks, rng);
    info!("Kept {} of {} candidates", tracks.len(), total);

    Ok(tracks)
}

/// Runs the whole pipeline for the playlist called `playlist_name`.
///
/// # Errors
///
/// - [`RecommendError::NotFound`] when none of the user's playlists matches
/// - [`RecommendError::Service`] when any catalog call fails; a playlist that
///   was already created is not removed
pub async fn enhance<C: Catalog, R: Rng + ?Sized>(
    catalog: &C,
    playlist_name: &str,
    rng: &mut R,
) -> Result<Recommendation, RecommendError> {
    let source_name = resolver::playlist_key(playlist_name);
    let user_id = catalog.current_user_id().await?;

    let source = resolver::resolve(catalog, &source_name).await?;
    info!(
        "Found playlist '{}' ({}) with {} tracks",
        source.name,
        source.id,
        source.tracks.len()
    );

    let tracks = recommend(catalog, &source, rng).await?;

    let name = emitter::playlist_name(&source_name, Local::now());
    let playlist = emitter::emit(catalog, &user_id, &name, &tracks).await?;

    Ok(Recommendation {
        source_name,
        playlist,
        tracks,
    })
}
