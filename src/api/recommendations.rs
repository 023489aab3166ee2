use std::sync::Arc;

use axum::{Extension, Form, http::StatusCode};
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;

use crate::{error::RecommendError, recommend, spotify::SpotifyCatalog, warning};

#[derive(Debug, Deserialize)]
pub struct RecommendationForm {
    pub playlist_name: String,
}

/// Runs the recommendation pipeline for the submitted playlist name.
///
/// An unknown playlist is a normal answer, not a server error. Failed Spotify
/// requests are logged and answered with a generic message.
pub async fn recommendations(
    Extension(catalog): Extension<Arc<SpotifyCatalog>>,
    Form(form): Form<RecommendationForm>,
) -> (StatusCode, String) {
    let mut rng = StdRng::from_rng(&mut rand::rng());

    match recommend::enhance(catalog.as_ref(), &form.playlist_name, &mut rng).await {
        Ok(recommendation) => (
            StatusCode::OK,
            format!(
                "New playlist \"{}\" created based on \"{}\"",
                recommendation.playlist.name, recommendation.source_name
            ),
        ),
        Err(e @ RecommendError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => {
            warning!("Recommendation request failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                "Creating the recommended playlist failed. Try again later.".to_string(),
            )
        }
    }
}
