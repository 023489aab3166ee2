//! Spotify Recommendation Playlist Library
//!
//! This library derives a fresh playlist of recommendations from one of the
//! user's existing Spotify playlists. It samples tracks from the playlist's
//! artists, re-queries the catalog search for every artist/track pair, and
//! filters the noisy candidate pool down to a short list of new songs.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the single-field web form
//! - `catalog` - The catalog capability the recommendation pipeline consumes
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by the pipeline and the catalog
//! - `recommend` - The recommendation pipeline and its stages
//! - `server` - Local HTTP server hosting the web form
//! - `spotify` - Spotify Web API implementation of the catalog
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use sporlrec::{config, recommend, spotify::SpotifyCatalog};
//!
//! #[tokio::main]
//! async fn main() -> sporlrec::Res<()> {
//!     config::load_env().await?;
//!     let catalog = SpotifyCatalog::new(config::spotify_apiurl(), config::spotify_access_token()?);
//!     let result = recommend::enhance(&catalog, "Roadtrip", &mut rand::rng()).await?;
//!     println!("{}", result.playlist.name);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod recommend;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the edges of the application (configuration, CLI, server start-up)
/// where any error is reported to the user and not matched on. The pipeline
/// itself returns [`error::RecommendError`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Sampling {} artists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors at the binary boundary. Library code returns
/// errors instead of calling this.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for conditions the pipeline tolerates, such as an artist without any
/// albums or a source playlist without tracks.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
