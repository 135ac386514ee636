//! # Configuration Module
//!
//! Environment-based configuration for spotmood. Values are read from the
//! process environment after [`load_env`] has merged the user's `.env` file
//! from the local data directory:
//!
//! - Linux: `~/.local/share/spotmood/.env`
//! - macOS: `~/Library/Application Support/spotmood/.env`
//! - Windows: `%LOCALAPPDATA%/spotmood/.env`
//!
//! ## Variables
//!
//! | Key                      | Required | Default                                   |
//! |--------------------------|----------|-------------------------------------------|
//! | `SPOTIFY_CLIENT_ID`      | yes      |                                           |
//! | `SPOTIFY_CLIENT_SECRET`  | yes      |                                           |
//! | `SPOTIFY_REFRESH_TOKEN`  | yes      |                                           |
//! | `SPOTIFY_API_URL`        | no       | `https://api.spotify.com/v1`              |
//! | `SPOTIFY_API_TOKEN_URL`  | no       | `https://accounts.spotify.com/api/token`  |
//! | `GEO_API_URL`            | no       | `http://ip-api.com/json/`                 |
//! | `WEATHER_API_URL`        | no       | `https://api.open-meteo.com/v1/forecast`  |
//!
//! A missing `.env` file is fine; the variables may come from the shell instead.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const APP_NAME: &str = "spotmood";

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_GEO_API_URL: &str = "http://ip-api.com/json/";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Directory holding the user's `.env` file.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_NAME);
    path
}

/// Loads `<data_dir>/.env` into the process environment.
///
/// The directory is created when missing. Variables already set in the
/// environment win over the file.
pub async fn load_env() -> Result<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    match dotenv::from_path(&path) {
        Ok(()) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no environment file, using process environment")
        }
        Err(e) => return Err(Error::Config(format!("{}: {}", path.display(), e))),
    }
    Ok(())
}

/// Reads an optional key from the process environment.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Resolved settings for the HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub api_url: String,
    pub token_url: String,
    pub geo_url: String,
    pub weather_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| Error::Config(format!("{key} must be set")))
        };
        let optional = |key: &str, default: &str| {
            get(key)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL),
            geo_url: get("GEO_API_URL").unwrap_or_else(|| DEFAULT_GEO_API_URL.to_string()),
            weather_url: optional("WEATHER_API_URL", DEFAULT_WEATHER_API_URL),
        })
    }
}
