use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    error::{CatalogError, Error, Result},
    spotify::{check_status, decode},
    types::{GeoLocation, WeatherResponse},
};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Above this many °C counts as sunny.
pub const SUNNY_ABOVE: f64 = 20.0;

pub fn suggested_moods(temperature: f64) -> [&'static str; 3] {
    if temperature > 25.0 {
        ["energetic", "upbeat", "lively"]
    } else if temperature < 10.0 {
        ["cozy", "mellow", "relaxed"]
    } else {
        ["chill", "balanced", "focused"]
    }
}

pub fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::Validation(format!(
            "invalid latitude: {lat:.4} (must be between -90 and 90)"
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::Validation(format!(
            "invalid longitude: {lon:.4} (must be between -180 and 180)"
        )));
    }
    Ok(())
}

/// Query string for the forecast endpoint.
pub fn forecast_query(lat: f64, lon: f64) -> Result<Vec<(&'static str, String)>> {
    validate_coordinates(lat, lon)?;
    Ok(vec![
        ("latitude", format!("{lat:.4}")),
        ("longitude", format!("{lon:.4}")),
        ("current", "temperature_2m".to_string()),
        ("timezone", "auto".to_string()),
    ])
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherContext {
    pub temperature: f64,
    pub lat: f64,
    pub lon: f64,
    pub city: String,
    pub suggested_moods: Vec<String>,
    pub mood: String,
    pub is_sunny: bool,
}

impl WeatherContext {
    pub fn new(location: &GeoLocation, temperature: f64, mood: Option<&str>) -> Self {
        let moods = suggested_moods(temperature);
        WeatherContext {
            temperature,
            lat: location.lat,
            lon: location.lon,
            city: location.city.clone(),
            suggested_moods: moods.iter().map(|m| m.to_string()).collect(),
            mood: mood
                .filter(|m| !m.is_empty())
                .unwrap_or(moods[0])
                .to_string(),
            is_sunny: temperature > SUNNY_ABOVE,
        }
    }
}

/// Unauthenticated client for the geolocation and forecast services.
pub struct WeatherClient {
    http: Client,
    geo_url: String,
    weather_url: String,
}

impl WeatherClient {
    pub fn new(geo_url: impl Into<String>, weather_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| {
                Error::Catalog(CatalogError::Transport {
                    endpoint: "http client".into(),
                    source,
                })
            })?;

        Ok(WeatherClient {
            http,
            geo_url: geo_url.into(),
            weather_url: weather_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.geo_url.clone(), config.weather_url.clone())
    }

    pub async fn locate(&self) -> Result<GeoLocation> {
        let response = self
            .http
            .get(&self.geo_url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: self.geo_url.clone(),
                source,
            })?;
        let response = check_status(&self.geo_url, response).await?;
        Ok(decode(&self.geo_url, response).await?)
    }

    pub async fn current_temperature(&self, lat: f64, lon: f64) -> Result<f64> {
        let query = forecast_query(lat, lon)?;
        let response = self
            .http
            .get(&self.weather_url)
            .query(&query)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: self.weather_url.clone(),
                source,
            })?;
        let response = check_status(&self.weather_url, response).await?;
        let weather: WeatherResponse = decode(&self.weather_url, response).await?;
        Ok(weather.current.temperature_2m)
    }

    /// Locates the caller by IP, then reads the current temperature there.
    pub async fn context(&self, mood: Option<&str>) -> Result<WeatherContext> {
        let location = self.locate().await?;
        tracing::debug!(city = %location.city, lat = location.lat, lon = location.lon, "location detected");

        let temperature = self.current_temperature(location.lat, location.lon).await?;
        Ok(WeatherContext::new(&location, temperature, mood))
    }
}
