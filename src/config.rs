//! Configuration management for the playlist migrator.
//!
//! This module handles loading configuration values from environment variables
//! and a `.env` file in the platform data directory, and bundles them into an
//! explicit [`Config`] struct that is constructed once at startup and handed
//! to each component. After startup no code reads the environment again; all
//! configuration flows through the struct.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (API endpoints only)

use dotenv;
use std::{env, path::PathBuf};

/// Base URL for the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Spotify OAuth authorization endpoint.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth token exchange endpoint.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// OAuth scope required to create and fill a public playlist.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public";

/// Runtime configuration, read from the environment exactly once.
///
/// Every field except `server_address` maps directly to one of the fixed
/// configuration names from the original tool. The struct is cheap to clone
/// and is passed by reference into the components that need it, replacing
/// ambient environment reads.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the iTunes library export (property-list XML).
    pub xml_path: String,
    /// Spotify application client ID.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// OAuth redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// Spotify user that will own the created playlist.
    pub user_name: String,
    /// Name of the iTunes playlist to migrate; also the name of the new
    /// Spotify playlist.
    pub playlist_name: String,
    /// Description for the created Spotify playlist.
    pub playlist_description: String,
    /// Bind address for the local OAuth callback server.
    pub server_address: String,
}

impl Config {
    /// Builds a `Config` from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error naming the first missing variable, so the
    /// user knows exactly which `.env` entry to fill in.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            xml_path: require("XML_PATH")?,
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            redirect_uri: require("REDIRECT_URI")?,
            user_name: require("USER_NAME")?,
            playlist_name: require("PLAYLIST_NAME")?,
            playlist_description: require("PLAYLIST_DESCRIPTION")?,
            server_address: require("SERVER_ADDRESS")?,
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tunelift/.env`. This allows users to store
/// credentials without hardcoding them or exporting them per shell session.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tunelift/.env`
/// - macOS: `~/Library/Application Support/tunelift/.env`
/// - Windows: `%LOCALAPPDATA%/tunelift/.env`
///
/// A `.env` in the current working directory is tried as a fallback, which
/// keeps local development runs working without touching the data directory.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created. A
/// missing `.env` file is not an error by itself; any variable that ends up
/// unset is reported later by [`Config::from_env`].
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunelift/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_err() {
        // fall back to a .env next to the binary / in the working directory
        let _ = dotenv::dotenv();
    }
    Ok(())
}
