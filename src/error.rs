use std::fmt;

/// Failures that abort a recommendation run.
///
/// An empty source playlist is deliberately not represented here: it yields an
/// empty recommendation list and an empty playlist, never an error.
#[derive(Debug)]
pub enum RecommendError {
    /// No playlist of the user matched the requested name.
    NotFound(String),
    /// A catalog call failed. Nothing is retried.
    Service(String),
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendError::NotFound(name) => write!(f, "Playlist '{}' not found.", name),
            RecommendError::Service(message) => write!(f, "Spotify request failed: {}", message),
        }
    }
}

impl std::error::Error for RecommendError {}

impl From<reqwest::Error> for RecommendError {
    fn from(err: reqwest::Error) -> Self {
        RecommendError::Service(err.to_string())
    }
}
