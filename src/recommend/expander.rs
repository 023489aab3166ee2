use std::collections::HashSet;

use crate::{
    catalog::Catalog, error::RecommendError, recommend::normalize::normalize, types::Track,
};

pub const SEARCH_LIMIT: u32 = 10;

/// Searches the catalog once per `(artist, track)` pair and keeps the hits that
/// are neither the queried song itself nor a song already accepted.
///
/// Pairs are processed in the given order and hits in ranking order, so when
/// several hits share a normalized name the first one wins.
pub async fn expand<C: Catalog>(
    catalog: &C,
    pairs: &[(String, String)],
) -> Result<Vec<Track>, RecommendError> {
    let mut accepted: Vec<Track> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (artist_name, track_name) in pairs {
        let query = format!("{} {}", artist_name, track_name);
        let own_name = normalize(track_name);

        for hit in catalog.search_tracks(&query, SEARCH_LIMIT).await? {
            let hit_name = normalize(&hit.name);
            if hit_name != own_name && seen.insert(hit_name) {
                accepted.push(hit);
            }
        }
    }

    Ok(accepted)
}
