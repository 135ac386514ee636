use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::CatalogError, types::Token};

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Client credentials used against the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

/// Exchanges a refresh token for a new access token.
///
/// Uses the `refresh_token` grant with HTTP basic client authentication.
/// Spotify may or may not rotate the refresh token; when the response omits
/// it the one passed in is kept.
pub async fn refresh_token(
    http: &Client,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<Token, CatalogError> {
    let res = http
        .post(&credentials.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| CatalogError::Auth(format!("token request failed: {e}")))?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(CatalogError::Auth(format!(
            "token endpoint returned {}: {}",
            status.as_u16(),
            body
        )));
    }

    let json: RefreshResponse = res
        .json()
        .await
        .map_err(|e| CatalogError::Auth(format!("invalid token response: {e}")))?;

    tracing::debug!(expires_in = json.expires_in, "access token refreshed");

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string()),
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
