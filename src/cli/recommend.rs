use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    error::RecommendError,
    info, recommend,
    spotify::SpotifyCatalog,
    success,
    types::TrackTableRow,
    warning,
};

/// Builds a recommendation playlist from the playlist called `playlist_name`.
///
/// The access token comes from `--token` when given, otherwise from the
/// configuration. Prints the emitted tracks as a table once the playlist has
/// been created.
///
/// # Error Handling
///
/// - A missing token terminates the program with an error message
/// - An unknown playlist name is reported as a warning
/// - Any failed Spotify request terminates the program with an error message
pub async fn recommend(playlist_name: String, token: Option<String>) {
    let token = match token.map(Ok).unwrap_or_else(config::spotify_access_token) {
        Ok(token) => token,
        Err(e) => error!("Cannot read access token. Err: {}", e),
    };

    let catalog = SpotifyCatalog::new(config::spotify_apiurl(), token);

    info!("Building recommendations for '{}'", playlist_name.trim());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Sampling and searching the catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = recommend::enhance(&catalog, &playlist_name, &mut rand::rng()).await;
    pb.finish_and_clear();

    match result {
        Ok(recommendation) => {
            if recommendation.tracks.is_empty() {
                warning!("No recommendations left after filtering");
            } else {
                let rows: Vec<TrackTableRow> =
                    recommendation.tracks.iter().map(TrackTableRow::from).collect();
                println!("{}", Table::new(rows));
            }

            success!(
                "New playlist \"{}\" created based on \"{}\"",
                recommendation.playlist.name,
                recommendation.source_name
            );
        }
        Err(e @ RecommendError::NotFound(_)) => warning!("{}", e),
        Err(e) => error!("Cannot create recommendations. Err: {}", e),
    }
}
