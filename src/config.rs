//! Configuration management for the recommendation playlist tool.
//!
//! Values come from environment variables, optionally seeded from a `.env` file
//! in the local data directory. Resolution order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from `sporlrec/.env` in the local data directory.
///
/// The directory is created when missing. A missing `.env` file is fine since
/// every value can also be provided through the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlrec/.env`
/// - macOS: `~/Library/Application Support/sporlrec/.env`
/// - Windows: `%LOCALAPPDATA%/sporlrec/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlrec/.env");
    path
}

/// Returns the address the web form server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the bearer token used for every catalog request.
///
/// Obtaining and refreshing the token is left to the user; it is read from
/// `SPOTIFY_ACCESS_TOKEN` as is.
pub fn spotify_access_token() -> Result<String, String> {
    match env::var("SPOTIFY_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err("SPOTIFY_ACCESS_TOKEN must be set".to_string()),
    }
}
