use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{recommend::normalize::normalize, types::Track};

pub const MAX_RECOMMENDATIONS: usize = 20;

/// Drops candidates that already are in the source playlist, either as the
/// very same catalog track or as another version of one of its songs.
///
/// Candidates are only compared with the source tracks, not with each other.
pub fn exclude_source(candidates: Vec<Track>, source: &[Track]) -> Vec<Track> {
    let source_ids: HashSet<&str> = source.iter().map(|t| t.id.as_str()).collect();
    let source_names: HashSet<String> = source.iter().map(|t| normalize(&t.name)).collect();

    candidates
        .into_iter()
        .filter(|t| !source_ids.contains(t.id.as_str()))
        .filter(|t| !source_names.contains(&normalize(&t.name)))
        .collect()
}

/// Filters the candidate pool against the source playlist, shuffles the
/// survivors and keeps at most [`MAX_RECOMMENDATIONS`] of them.
pub fn finalize<R: Rng + ?Sized>(candidates: Vec<Track>, source: &[Track], rng: &mut R) -> Vec<Track> {
    let mut tracks = exclude_source(candidates, source);
    tracks.shuffle(rng);
    tracks.truncate(MAX_RECOMMENDATIONS);
    tracks
}
