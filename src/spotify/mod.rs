//! # Spotify Integration Module
//!
//! HTTP plumbing over the Spotify Web API. [`SpotifyClient`] owns the HTTP
//! client, the API base URL and the [`TokenManager`]; every request goes
//! through [`SpotifyClient::send`], which attaches a fresh bearer token and
//! turns non-success responses into [`CatalogError::Api`].
//!
//! ## Submodules
//!
//! - [`auth`]: refresh-token grant against the accounts service
//! - [`catalog`]: [`MusicCatalog`](crate::recommend::MusicCatalog) implementation
//!   (search, top artists, genre seeds, recommendations)
//! - [`playlist`]: playlist CRUD, playlist tracks and cover upload
//! - [`browse`]: featured playlists and new releases
//! - [`user`]: current user profile and top artists
//!
//! ## Endpoints
//!
//! ```text
//! GET    /search                                artist and track search
//! GET    /me, /me/top/artists                   user profile, top artists
//! GET    /recommendations[/available-genre-seeds]
//! GET    /browse/featured-playlists, /browse/new-releases
//! POST   /users/{user_id}/playlists             create playlist
//! GET    /playlists/{id}, /playlists/{id}/tracks
//! PUT    /playlists/{id}                        change details
//! POST   /playlists/{id}/tracks                 add tracks (100 per request)
//! PUT    /playlists/{id}/tracks                 replace tracks
//! DELETE /playlists/{id}/tracks                 remove tracks
//! DELETE /playlists/{id}/followers              unfollow
//! PUT    /playlists/{id}/images                 upload cover (base64 JPEG)
//! GET    /tracks/{id}
//! ```
//!
//! No call is retried. Callers decide whether a failure is fatal.

pub mod auth;
pub mod browse;
pub mod catalog;
pub mod playlist;
pub mod user;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{config::Config, error::CatalogError, management::TokenManager};

/// Authenticated client for the Spotify Web API.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, tokens: TokenManager) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into(),
            tokens: Mutex::new(tokens),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), TokenManager::from_config(config))
    }

    /// A bearer token valid for at least the next four minutes.
    pub async fn access_token(&self) -> Result<String, CatalogError> {
        self.tokens.lock().await.get_valid_token().await
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Sends an authenticated request and checks its status.
    pub(crate) async fn send(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<Response, CatalogError> {
        let token = self.access_token().await?;
        tracing::debug!(endpoint, "spotify request");

        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        check_status(endpoint, response).await
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = self.send(endpoint, request).await?;
        decode(endpoint, response).await
    }

    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let request = self.http.get(self.url(path)).query(query);
        self.send_json(path, request).await
    }
}

pub(crate) async fn check_status(
    endpoint: &str,
    response: Response,
) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Api {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        message: error_message(&body),
    })
}

pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<T, CatalogError> {
    response
        .json::<T>()
        .await
        .map_err(|source| CatalogError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
}

/// Extracts `error.message` from a Spotify error body, or returns the body as is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

pub fn track_uri(id: &str) -> String {
    format!("spotify:track:{id}")
}
