//! Playlist cover sources and the emoji hint tables.

use std::path::PathBuf;

use reqwest::Client;

use crate::{
    error::{CatalogError, Error, Result},
    spotify::check_status,
};

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Where the cover image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSource {
    Url(String),
    File(PathBuf),
}

impl CoverSource {
    /// Reads the image bytes and checks they are a JPEG.
    pub async fn load(&self, http: &Client) -> Result<Vec<u8>> {
        let bytes = match self {
            CoverSource::Url(url) => {
                let response = http.get(url).send().await.map_err(|source| {
                    CatalogError::Transport {
                        endpoint: url.clone(),
                        source,
                    }
                })?;
                let response = check_status(url, response).await?;
                response
                    .bytes()
                    .await
                    .map_err(|source| CatalogError::Decode {
                        endpoint: url.clone(),
                        source,
                    })?
                    .to_vec()
            }
            CoverSource::File(path) => async_fs::read(path).await?,
        };

        ensure_jpeg(&bytes)?;
        Ok(bytes)
    }
}

pub fn ensure_jpeg(bytes: &[u8]) -> Result<()> {
    if bytes.starts_with(&JPEG_MAGIC) {
        Ok(())
    } else {
        Err(Error::Validation("cover image must be a JPEG".into()))
    }
}

/// Case-insensitive. Unknown moods get a note.
pub fn mood_emoji(mood: &str) -> &'static str {
    match mood.to_lowercase().as_str() {
        "energetic" => "⚡",
        "chill" => "😌",
        "cozy" => "🧸",
        "melancholy" => "😢",
        "upbeat" => "🥳",
        "focus" => "🧠",
        "workout" => "💪",
        "romantic" => "❤️",
        "happy" => "😊",
        "sad" => "😔",
        "angry" => "😡",
        "relaxed" => "😌",
        "excited" => "🤩",
        _ => "🎵",
    }
}

pub fn weather_emoji(weather: &str) -> &'static str {
    match weather.to_lowercase().as_str() {
        "sunny" => "☀️",
        "cloudy" => "☁️",
        "rainy" => "🌧️",
        "snowy" => "❄️",
        "stormy" => "⛈️",
        "foggy" => "🌫️",
        "windy" => "🌬️",
        "hot" => "🔥",
        "cold" => "🧊",
        "clear" => "🌈",
        "thunderstorm" => "⚡",
        _ => "🌤️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_lookup_ignores_case_and_defaults() {
        assert_eq!(mood_emoji("Workout"), "💪");
        assert_eq!(mood_emoji("bored"), "🎵");
        assert_eq!(weather_emoji("RAINY"), "🌧️");
        assert_eq!(weather_emoji("hail"), "🌤️");
    }

    #[test]
    fn only_jpeg_bytes_are_accepted() {
        assert!(ensure_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]).is_ok());
        assert!(ensure_jpeg(b"\x89PNG\r\n").is_err());
        assert!(ensure_jpeg(&[]).is_err());
    }
}
