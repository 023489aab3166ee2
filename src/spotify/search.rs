use crate::{error::RecommendError, spotify::SpotifyCatalog, types::SearchResponse, types::Track};

/// Searches the catalog for tracks matching free text.
///
/// The query is passed through reqwest's query encoding, so artist and track
/// names may contain any characters.
pub async fn search_tracks(
    catalog: &SpotifyCatalog,
    query: &str,
    limit: u32,
) -> Result<Vec<Track>, RecommendError> {
    let limit = limit.to_string();
    let response = catalog
        .client()
        .get(catalog.url("/search"))
        .bearer_auth(catalog.token())
        .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<SearchResponse>().await?;
    Ok(json.tracks.items)
}
