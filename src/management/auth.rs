use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Config,
    error::CatalogError,
    spotify::auth::{self, Credentials},
    types::Token,
};

/// Seconds before expiry at which a token is treated as stale.
const EXPIRY_BUFFER_SECS: u64 = 240;

/// Keeps an access token fresh for the lifetime of one process.
///
/// Nothing is persisted; the refresh token comes from configuration and the
/// first call to [`TokenManager::get_valid_token`] performs the initial refresh.
pub struct TokenManager {
    token: Token,
    credentials: Credentials,
    http: Client,
}

impl TokenManager {
    pub fn new(token: Token, credentials: Credentials) -> Self {
        TokenManager {
            token,
            credentials,
            http: Client::new(),
        }
    }

    /// Manager holding only a refresh token; the access token is fetched on first use.
    pub fn from_config(config: &Config) -> Self {
        let token = Token {
            access_token: String::new(),
            refresh_token: config.refresh_token.clone(),
            scope: String::new(),
            expires_in: 0,
            obtained_at: 0,
        };
        let credentials = Credentials {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
        };
        Self::new(token, credentials)
    }

    pub async fn get_valid_token(&mut self) -> Result<String, CatalogError> {
        if self.is_expired() {
            self.token =
                auth::refresh_token(&self.http, &self.credentials, &self.token.refresh_token)
                    .await?;
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        if self.token.access_token.is_empty() {
            return true;
        }
        let now = Utc::now().timestamp() as u64;
        now >= (self.token.obtained_at + self.token.expires_in).saturating_sub(EXPIRY_BUFFER_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            client_id: "id".into(),
            client_secret: "secret".into(),
            token_url: "http://127.0.0.1:9/token".into(),
        }
    }

    fn token(obtained_at: u64, expires_in: u64) -> Token {
        Token {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            scope: String::new(),
            expires_in,
            obtained_at,
        }
    }

    #[test]
    fn fresh_token_is_not_expired() {
        let now = Utc::now().timestamp() as u64;
        assert!(!TokenManager::new(token(now, 3600), credentials()).is_expired());
    }

    #[test]
    fn token_inside_buffer_is_expired() {
        let now = Utc::now().timestamp() as u64;
        assert!(TokenManager::new(token(now - 3500, 3600), credentials()).is_expired());
    }

    #[tokio::test]
    async fn valid_token_is_returned_without_refresh() {
        let now = Utc::now().timestamp() as u64;
        let mut manager = TokenManager::new(token(now, 3600), credentials());
        assert_eq!(manager.get_valid_token().await.unwrap(), "access");
    }
}
